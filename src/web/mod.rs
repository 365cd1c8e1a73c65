pub mod context;
pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod middleware;
pub mod security;
pub mod state;
pub mod templates;

pub use handlers::configure;
pub use state::AppState;
