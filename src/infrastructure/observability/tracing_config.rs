/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_level: String,
}

impl TracingConfig {
    /// Fallback filter when `RUST_LOG` is unset: the configured level for
    /// this crate and the HTTP layers, quieter elsewhere.
    pub fn default_directives(&self) -> String {
        format!(
            "info,voicegate={},tower_http={}",
            self.default_level, self.default_level
        )
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_level: "debug".to_string(),
        }
    }
}
