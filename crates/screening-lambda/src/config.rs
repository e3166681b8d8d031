use std::env;

/// Service settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service_name: String,
    /// Allowed CORS origin; `*` allows any.
    pub cors_origin: String,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("SCREENING_SERVICE_NAME")
                .unwrap_or_else(|_| "screening".to_string()),
            cors_origin: env::var("SCREENING_CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
        }
    }
}
