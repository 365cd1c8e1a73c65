/// Logs a failed operation and keeps a copy of its input in `error_logs`.
///
/// `log_failure!(&state.pool, "contact.submit", &data)`
#[macro_export]
macro_rules! log_failure {
    ($pool:expr, $operation:expr, $input:expr) => {{
        let pool = $pool.clone();
        let location = format!("{} ({}:{})", $operation, file!(), line!());
        let input = ::serde_json::to_value($input).unwrap_or_default();

        ::log::error!("{} failed with input {}", location, input);

        ::tokio::spawn(async move {
            let stored = ::sqlx::query("INSERT INTO error_logs (location, parameters) VALUES ($1, $2)")
                .bind(&location)
                .bind(input)
                .execute(&pool)
                .await;
            if let Err(e) = stored {
                ::log::warn!("Could not record failure of {}: {}", location, e);
            }
        });
    }};
}
