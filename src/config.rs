use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage_path: env::var("BOOKINGS_DB").unwrap_or_else(|_| "bookings.db".to_string()),
        }
    }
}
