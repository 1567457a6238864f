use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub notify_to: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("LEADBOX_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid LEADBOX_HOST: {e}"))?;

        let port: u16 = env_or("LEADBOX_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid LEADBOX_PORT: {e}"))?;

        let max_body_size: usize = env_or("LEADBOX_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid LEADBOX_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("LEADBOX_LOG_LEVEL", "info");

        // Notifications stay disabled unless a provider is selected and the
        // relay is fully configured; a partial SMTP setup counts as absent.
        let smtp = match env_or("LEADBOX_EMAIL_PROVIDER", "").as_str() {
            "smtp" => match (
                std::env::var("LEADBOX_SMTP_HOST").ok(),
                std::env::var("LEADBOX_SMTP_PORT").ok(),
                std::env::var("LEADBOX_SMTP_USER").ok(),
                std::env::var("LEADBOX_SMTP_PASS").ok(),
            ) {
                (Some(smtp_host), Some(smtp_port), Some(user), Some(pass)) => Some(SmtpConfig {
                    host: smtp_host,
                    port: smtp_port
                        .parse()
                        .map_err(|e| format!("Invalid LEADBOX_SMTP_PORT: {e}"))?,
                    user,
                    pass,
                    from: env_or("LEADBOX_EMAIL_FROM", "noreply@localhost"),
                    notify_to: env_or("LEADBOX_EMAIL_TO", ""),
                }),
                _ => None,
            },
            _ => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            log_level,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
