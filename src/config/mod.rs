use std::env;

/// Runtime configuration for the document expiry backend
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Maximum upload size in bytes (default: 10 MB)
    pub max_upload_size: usize,

    /// Default page size for the list endpoint (default: 10)
    pub default_per_page: u64,

    /// Mail transport: "smtp" or "log" (default: "log")
    pub mail_transport: String,

    /// SMTP relay host (default: "127.0.0.1")
    pub smtp_host: String,

    /// SMTP relay port (default: 587)
    pub smtp_port: u16,

    /// SMTP credentials, optional (unauthenticated relay when absent)
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,

    /// Fixed sender identity for reminder emails
    pub mail_from_address: String,
    pub mail_from_name: String,

    /// JWT Secret Key (Required in production)
    pub jwt_secret: String,

    /// Allowed CORS Origins (comma separated)
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_upload_size: 10 * 1024 * 1024, // 10 MB
            default_per_page: 10,
            mail_transport: "log".to_string(),
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            mail_from_address: "hello@example.com".to_string(),
            mail_from_name: "Document Management System".to_string(),
            jwt_secret: "secret".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(), // Vite default
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_size),

            default_per_page: env::var("DEFAULT_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.default_per_page),

            mail_transport: env::var("MAIL_TRANSPORT").unwrap_or(default.mail_transport),

            smtp_host: env::var("SMTP_HOST").unwrap_or(default.smtp_host),

            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.smtp_port),

            smtp_username: env::var("SMTP_USERNAME").ok(),
            smtp_password: env::var("SMTP_PASSWORD").ok(),

            mail_from_address: env::var("MAIL_FROM_ADDRESS").unwrap_or(default.mail_from_address),
            mail_from_name: env::var("MAIL_FROM_NAME").unwrap_or(default.mail_from_name),

            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string()), // Fallback for dev convenience

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(default.allowed_origins),
        }
    }

    /// Create config for development and tests (log mailer, defaults)
    pub fn development() -> Self {
        Self {
            mail_transport: "log".to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.max_upload_size, 10 * 1024 * 1024);
        assert_eq!(config.default_per_page, 10);
        assert_eq!(config.mail_transport, "log");
        assert_eq!(config.mail_from_address, "hello@example.com");
        assert_eq!(config.mail_from_name, "Document Management System");
    }

    #[test]
    fn test_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.mail_transport, "log");
        assert!(config.smtp_username.is_none());
    }

    #[test]
    fn test_cors_fallback() {
        unsafe { env::remove_var("ALLOWED_ORIGINS") };
        let config = AppConfig::from_env();
        let default_config = AppConfig::default();
        assert_eq!(config.allowed_origins, default_config.allowed_origins);
        assert!(!config.allowed_origins.contains(&"*".to_string()));
    }
}
