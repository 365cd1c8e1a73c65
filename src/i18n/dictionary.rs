//! UI strings as `(key, english, arabic)`.

pub const ENTRIES: &[(&str, &str, &str)] = &[
    // Site chrome
    ("site.name", "Nakhla", "نخلة"),
    ("site.rights", "All rights reserved.", "جميع الحقوق محفوظة."),
    ("site.tagline", "Building digital products that grow with you.", "نبني منتجات رقمية تنمو معك."),
    ("nav.home", "Home", "الرئيسية"),
    ("nav.services", "Services", "الخدمات"),
    ("nav.projects", "Projects", "المشاريع"),
    ("nav.blog", "Blog", "المدونة"),
    ("nav.about", "About", "من نحن"),
    ("nav.contact", "Contact", "اتصل بنا"),
    ("nav.dashboard", "Dashboard", "لوحة التحكم"),
    ("nav.login", "Sign in", "تسجيل الدخول"),
    ("nav.logout", "Sign out", "تسجيل الخروج"),
    // Public pages
    ("home.cta_contact", "Start a project", "ابدأ مشروعك"),
    ("home.cta_projects", "See our work", "شاهد أعمالنا"),
    ("home.services_title", "What we do", "ماذا نقدم"),
    ("home.all_services", "All services", "جميع الخدمات"),
    ("home.projects_title", "Featured projects", "مشاريع مميزة"),
    ("home.all_projects", "All projects", "جميع المشاريع"),
    ("home.testimonials_title", "What our clients say", "ماذا يقول عملاؤنا"),
    ("home.blog_title", "Latest from the blog", "أحدث المقالات"),
    ("home.all_posts", "All posts", "جميع المقالات"),
    ("stats.projects_completed", "Projects completed", "مشروع منجز"),
    ("stats.happy_clients", "Happy clients", "عميل سعيد"),
    ("stats.years_experience", "Years of experience", "سنوات خبرة"),
    ("stats.team_size", "Team members", "عضو في الفريق"),
    ("stats.updated_at", "Last updated", "آخر تحديث"),
    ("services.title", "Our services", "خدماتنا"),
    ("services.intro", "From first sketch to launch and beyond.", "من الفكرة الأولى حتى الإطلاق وما بعده."),
    ("services.empty", "No services are listed yet.", "لا توجد خدمات بعد."),
    ("services.request_quote", "Request a quote", "اطلب عرض سعر"),
    ("services.back", "Back to services", "العودة إلى الخدمات"),
    ("services.features", "What is included", "ما الذي يشمله"),
    ("services.new", "New service", "خدمة جديدة"),
    ("services.edit", "Edit service", "تعديل الخدمة"),
    ("services.features_hint", "One feature per line.", "ميزة واحدة في كل سطر."),
    ("quote.title", "Request a quote", "اطلب عرض سعر"),
    ("quote.details", "Project details", "تفاصيل المشروع"),
    ("quote.submit", "Send request", "أرسل الطلب"),
    ("quote.thanks", "Thanks! We will get back to you with a quote soon.", "شكراً! سنعود إليك بعرض السعر قريباً."),
    ("projects.title", "Our work", "أعمالنا"),
    ("projects.all", "All", "الكل"),
    ("projects.empty", "No projects to show.", "لا توجد مشاريع لعرضها."),
    ("projects.back", "Back to projects", "العودة إلى المشاريع"),
    ("projects.visit", "Visit project", "زيارة المشروع"),
    ("projects.new", "New project", "مشروع جديد"),
    ("projects.edit", "Edit project", "تعديل المشروع"),
    ("blog.title", "Blog", "المدونة"),
    ("blog.search", "Search posts…", "ابحث في المقالات…"),
    ("blog.all_tags", "All topics", "كل المواضيع"),
    ("blog.empty", "No posts match your search.", "لا توجد مقالات مطابقة."),
    ("blog.back", "Back to blog", "العودة إلى المدونة"),
    ("about.title", "About us", "من نحن"),
    ("about.history", "Our story", "قصتنا"),
    ("about.team", "Meet the team", "تعرّف على الفريق"),
    ("contact.title", "Get in touch", "تواصل معنا"),
    ("contact.intro", "Tell us about your idea and we will reply within two working days.", "أخبرنا عن فكرتك وسنرد خلال يومي عمل."),
    ("contact.address", "Address", "العنوان"),
    ("contact.submit", "Send message", "أرسل الرسالة"),
    ("contact.thanks", "Thank you! Your message has been sent.", "شكراً لك! تم إرسال رسالتك."),
    ("testimonial.title", "Share your experience", "شاركنا تجربتك"),
    ("testimonial.intro", "Worked with us? We would love to hear from you.", "عملت معنا؟ يسعدنا سماع رأيك."),
    ("testimonial.content", "Your review", "رأيك"),
    ("testimonial.submit", "Submit review", "أرسل التقييم"),
    ("testimonial.thanks", "Thank you! Your review will appear once approved.", "شكراً لك! سيظهر تقييمك بعد الموافقة عليه."),
    // Authentication
    ("auth.login_title", "Sign in", "تسجيل الدخول"),
    ("auth.login_submit", "Sign in", "دخول"),
    ("auth.signup_title", "Create an account", "إنشاء حساب"),
    ("auth.signup_submit", "Create account", "إنشاء الحساب"),
    ("auth.signup_link", "Create an account", "إنشاء حساب جديد"),
    ("auth.login_link", "Back to sign in", "العودة لتسجيل الدخول"),
    ("auth.forgot_link", "Forgot your password?", "نسيت كلمة المرور؟"),
    ("auth.forgot_title", "Reset your password", "إعادة تعيين كلمة المرور"),
    ("auth.forgot_intro", "Enter your email and we will send you a reset link.", "أدخل بريدك الإلكتروني وسنرسل لك رابط إعادة التعيين."),
    ("auth.forgot_submit", "Send reset link", "أرسل الرابط"),
    ("auth.forgot_sent", "If an account exists for that email, a reset link is on its way.", "إذا كان هناك حساب بهذا البريد فسيصلك رابط إعادة التعيين."),
    ("auth.reset_title", "Choose a new password", "اختر كلمة مرور جديدة"),
    ("auth.reset_submit", "Update password", "تحديث كلمة المرور"),
    ("auth.reset_invalid", "This reset link is invalid or has expired.", "رابط إعادة التعيين غير صالح أو منتهي الصلاحية."),
    ("auth.password_hint", "At least 8 characters, with letters and digits.", "8 أحرف على الأقل، تتضمن حروفاً وأرقاماً."),
    ("auth.invalid_credentials", "Invalid email or password.", "البريد الإلكتروني أو كلمة المرور غير صحيحة."),
    // Dashboard
    ("dash.overview", "Overview", "نظرة عامة"),
    ("dash.posts", "Blog posts", "المقالات"),
    ("dash.tasks", "Tasks", "المهام"),
    ("dash.team", "Team", "الفريق"),
    ("dash.messages", "Messages", "الرسائل"),
    ("dash.projects", "Projects", "المشاريع"),
    ("dash.services", "Services", "الخدمات"),
    ("dash.testimonials", "Testimonials", "آراء العملاء"),
    ("dash.content", "Site content", "محتوى الموقع"),
    ("dash.history", "Company history", "تاريخ الشركة"),
    ("dash.stats", "Statistics", "الإحصائيات"),
    ("dash.users", "Users", "المستخدمون"),
    ("dash.view_site", "View site", "عرض الموقع"),
    ("overview.welcome", "Welcome back,", "مرحباً بعودتك،"),
    ("overview.new_messages", "New messages", "رسائل جديدة"),
    ("overview.pending_testimonials", "Reviews awaiting approval", "آراء بانتظار الموافقة"),
    ("overview.open_tasks", "Open tasks", "مهام مفتوحة"),
    ("overview.drafts", "Draft posts", "مسودات"),
    ("overview.published", "Published posts", "مقالات منشورة"),
    ("overview.my_tasks", "Assigned to you", "المهام المسندة إليك"),
    ("overview.no_tasks", "Nothing assigned to you right now.", "لا توجد مهام مسندة إليك حالياً."),
    ("posts.new", "New post", "مقال جديد"),
    ("posts.edit", "Edit post", "تعديل المقال"),
    ("posts.slug_hint", "Lowercase letters, digits and dashes. Left empty, it is built from the English title.", "حروف إنجليزية صغيرة وأرقام وشرطات. إذا ترك فارغاً يُنشأ من العنوان الإنجليزي."),
    ("team.new", "New team member", "عضو جديد"),
    ("team.edit", "Edit team member", "تعديل العضو"),
    ("tasks.new", "New task", "مهمة جديدة"),
    ("tasks.edit", "Edit task", "تعديل المهمة"),
    ("tasks.unassigned", "Unassigned", "غير مسندة"),
    ("tasks.overdue", "Overdue", "متأخرة"),
    ("content.new", "New content block", "محتوى جديد"),
    ("content.edit", "Edit content", "تعديل المحتوى"),
    ("history.new", "New milestone", "محطة جديدة"),
    ("history.edit", "Edit milestone", "تعديل المحطة"),
    ("testimonials.pending", "Pending", "بانتظار الموافقة"),
    ("testimonials.approved", "Approved", "معتمد"),
    ("testimonials.approve", "Approve", "اعتماد"),
    ("testimonials.unapprove", "Unpublish", "إلغاء الاعتماد"),
    ("users.you", "you", "أنت"),
    ("users.confirm_delete", "Delete this account and all of its sessions?", "حذف هذا الحساب وجميع جلساته؟"),
    ("account.title", "My account", "حسابي"),
    ("account.profile", "Profile", "الملف الشخصي"),
    ("account.password", "Password", "كلمة المرور"),
    ("account.change_password", "Change password", "تغيير كلمة المرور"),
    ("list.empty", "Nothing here yet.", "لا يوجد شيء هنا بعد."),
    ("filter.search", "Search…", "بحث…"),
    ("filter.all", "All", "الكل"),
    ("filter.all_statuses", "All statuses", "كل الحالات"),
    ("filter.all_tags", "All tags", "كل الوسوم"),
    ("filter.all_kinds", "All kinds", "كل الأنواع"),
    ("filter.all_assignees", "Everyone", "الجميع"),
    ("filter.open", "Open", "مفتوحة"),
    ("filter.apply", "Filter", "تصفية"),
    ("action.save", "Save", "حفظ"),
    ("action.edit", "Edit", "تعديل"),
    ("action.delete", "Delete", "حذف"),
    ("action.view", "View", "عرض"),
    ("action.back", "Back", "رجوع"),
    ("action.publish", "Publish", "نشر"),
    ("action.confirm_delete", "Delete this item? This cannot be undone.", "حذف هذا العنصر؟ لا يمكن التراجع عن ذلك."),
    // Form fields
    ("field.name", "Name", "الاسم"),
    ("field.full_name", "Full name", "الاسم الكامل"),
    ("field.email", "Email", "البريد الإلكتروني"),
    ("field.phone", "Phone", "الهاتف"),
    ("field.subject", "Subject", "الموضوع"),
    ("field.message", "Message", "الرسالة"),
    ("field.company", "Company", "الشركة"),
    ("field.rating", "Rating", "التقييم"),
    ("field.password", "Password", "كلمة المرور"),
    ("field.password_confirm", "Confirm password", "تأكيد كلمة المرور"),
    ("field.current_password", "Current password", "كلمة المرور الحالية"),
    ("field.new_password", "New password", "كلمة المرور الجديدة"),
    ("field.title", "Title", "العنوان"),
    ("field.title_en", "Title (English)", "العنوان (إنجليزي)"),
    ("field.title_ar", "Title (Arabic)", "العنوان (عربي)"),
    ("field.description", "Description", "الوصف"),
    ("field.description_en", "Description (English)", "الوصف (إنجليزي)"),
    ("field.description_ar", "Description (Arabic)", "الوصف (عربي)"),
    ("field.excerpt_en", "Excerpt (English)", "المقتطف (إنجليزي)"),
    ("field.excerpt_ar", "Excerpt (Arabic)", "المقتطف (عربي)"),
    ("field.content_en", "Content (English)", "المحتوى (إنجليزي)"),
    ("field.content_ar", "Content (Arabic)", "المحتوى (عربي)"),
    ("field.name_en", "Name (English)", "الاسم (إنجليزي)"),
    ("field.name_ar", "Name (Arabic)", "الاسم (عربي)"),
    ("field.position", "Position", "المنصب"),
    ("field.position_en", "Position (English)", "المنصب (إنجليزي)"),
    ("field.position_ar", "Position (Arabic)", "المنصب (عربي)"),
    ("field.bio_en", "Bio (English)", "نبذة (إنجليزي)"),
    ("field.bio_ar", "Bio (Arabic)", "نبذة (عربي)"),
    ("field.features_en", "Features (English)", "المزايا (إنجليزي)"),
    ("field.features_ar", "Features (Arabic)", "المزايا (عربي)"),
    ("field.value_en", "English", "الإنجليزية"),
    ("field.value_ar", "Arabic", "العربية"),
    ("field.slug", "Slug", "المعرّف في الرابط"),
    ("field.tags", "Tags", "الوسوم"),
    ("field.status", "Status", "الحالة"),
    ("field.priority", "Priority", "الأولوية"),
    ("field.assignee", "Assignee", "المسؤول"),
    ("field.due_date", "Due date", "تاريخ الاستحقاق"),
    ("field.published_at", "Published", "تاريخ النشر"),
    ("field.cover_image_url", "Cover image URL", "رابط صورة الغلاف"),
    ("field.image_url", "Image URL", "رابط الصورة"),
    ("field.photo_url", "Photo URL", "رابط الصورة الشخصية"),
    ("field.avatar_url", "Avatar URL", "رابط الصورة الرمزية"),
    ("field.linkedin_url", "LinkedIn URL", "رابط لينكدإن"),
    ("field.project_url", "Project URL", "رابط المشروع"),
    ("field.category", "Category", "التصنيف"),
    ("field.client_name", "Client", "العميل"),
    ("field.completed_on", "Completed on", "تاريخ الإنجاز"),
    ("field.featured", "Featured", "مميز"),
    ("field.icon", "Icon", "الأيقونة"),
    ("field.sort_order", "Order", "الترتيب"),
    ("field.active", "Active", "نشط"),
    ("field.section", "Section", "القسم"),
    ("field.key", "Key", "المفتاح"),
    ("field.year", "Year", "السنة"),
    ("field.role", "Role", "الدور"),
    ("field.joined", "Joined", "تاريخ الانضمام"),
    ("field.kind", "Type", "النوع"),
    ("field.received", "Received", "تاريخ الاستلام"),
    ("field.service", "Service", "الخدمة"),
    // Enumerations
    ("role.admin", "Admin", "مدير"),
    ("role.editor", "Editor", "محرر"),
    ("role.viewer", "Viewer", "مشاهد"),
    ("post_status.draft", "Draft", "مسودة"),
    ("post_status.published", "Published", "منشور"),
    ("task_status.todo", "To do", "قيد الانتظار"),
    ("task_status.in_progress", "In progress", "قيد التنفيذ"),
    ("task_status.done", "Done", "منجزة"),
    ("priority.low", "Low", "منخفضة"),
    ("priority.medium", "Medium", "متوسطة"),
    ("priority.high", "High", "عالية"),
    ("kind.contact", "Contact", "تواصل"),
    ("kind.quote", "Quote request", "طلب عرض سعر"),
    ("message_status.new", "New", "جديدة"),
    ("message_status.read", "Read", "مقروءة"),
    ("message_status.replied", "Replied", "تم الرد"),
    ("message_status.archived", "Archived", "مؤرشفة"),
    // Banners
    ("flash.saved", "Changes saved.", "تم حفظ التغييرات."),
    ("flash.created", "Created successfully.", "تم الإنشاء بنجاح."),
    ("flash.deleted", "Deleted.", "تم الحذف."),
    ("flash.published", "Post published.", "تم نشر المقال."),
    ("flash.uploaded", "File uploaded.", "تم رفع الملف."),
    ("flash.password_changed", "Your password has been changed.", "تم تغيير كلمة المرور."),
    ("flash.password_reset", "Password updated. Please sign in.", "تم تحديث كلمة المرور. يرجى تسجيل الدخول."),
    ("flash.signed_out", "You have been signed out.", "تم تسجيل خروجك."),
    ("flash.self_delete", "You cannot delete your own account here.", "لا يمكنك حذف حسابك من هنا."),
    ("flash.self_demote", "You cannot change your own role.", "لا يمكنك تغيير دورك بنفسك."),
    ("flash.last_admin", "At least one admin must remain.", "يجب أن يبقى مدير واحد على الأقل."),
    ("flash.not_found", "That item no longer exists.", "هذا العنصر لم يعد موجوداً."),
    ("flash.failed", "Something went wrong. Please try again.", "حدث خطأ ما. يرجى المحاولة مرة أخرى."),
    // Validation
    ("validation.required", "This field is required", "هذا الحقل مطلوب"),
    ("validation.email", "Enter a valid email address", "أدخل بريداً إلكترونياً صالحاً"),
    ("validation.email_taken", "An account with this email already exists", "يوجد حساب بهذا البريد الإلكتروني"),
    ("validation.password_short", "Password must be at least 8 characters", "يجب ألا تقل كلمة المرور عن 8 أحرف"),
    ("validation.password_mix", "Password must contain letters and digits", "يجب أن تحتوي كلمة المرور على حروف وأرقام"),
    ("validation.password_mismatch", "Passwords do not match", "كلمتا المرور غير متطابقتين"),
    ("validation.current_password", "Current password is incorrect", "كلمة المرور الحالية غير صحيحة"),
    ("validation.rating", "Choose a rating from 1 to 5", "اختر تقييماً من 1 إلى 5"),
    ("validation.slug", "Use lowercase letters, digits, dashes or underscores", "استخدم حروفاً إنجليزية صغيرة وأرقاماً وشرطات"),
    ("validation.slug_taken", "This slug is already used by another post", "هذا المعرّف مستخدم في مقال آخر"),
    ("validation.key_taken", "This section already has that key", "هذا المفتاح موجود في القسم"),
    ("validation.year", "Enter a year between 1800 and 2200", "أدخل سنة بين 1800 و2200"),
    ("validation.too_long", "This value is too long", "هذه القيمة طويلة جداً"),
    ("validation.number", "Enter a whole number", "أدخل رقماً صحيحاً"),
    ("validation.date", "Enter a valid date", "أدخل تاريخاً صالحاً"),
    ("validation.url", "Enter a valid http(s) URL", "أدخل رابطاً صالحاً يبدأ بـ http"),
    ("validation.invalid", "Choose a valid option", "اختر خياراً صالحاً"),
    ("validation.failed", "Could not save. Please try again.", "تعذر الحفظ. يرجى المحاولة مرة أخرى."),
    // Uploads
    ("upload.too_large", "The file is too large", "الملف كبير جداً"),
    ("upload.unsupported", "Only PNG, JPEG, WebP and GIF images are allowed", "يُسمح فقط بصور PNG وJPEG وWebP وGIF"),
    ("upload.missing", "No file was sent", "لم يتم إرسال أي ملف"),
    ("upload.failed", "Upload failed", "فشل رفع الملف"),
    // Error pages
    ("error.back_home", "Back to home", "العودة إلى الرئيسية"),
    ("error.server_title", "Something went wrong", "حدث خطأ ما"),
    ("error.server_message", "We could not complete your request. Please try again later.", "تعذر إكمال طلبك. يرجى المحاولة لاحقاً."),
    ("error.not_found_title", "Page not found", "الصفحة غير موجودة"),
    ("error.not_found_message", "The page you are looking for does not exist.", "الصفحة التي تبحث عنها غير موجودة."),
    ("error.rate_limit_title", "Too many requests", "طلبات كثيرة جداً"),
    ("error.rate_limit_message", "Please wait a few minutes before trying again.", "يرجى الانتظار بضع دقائق قبل المحاولة مرة أخرى."),
];
