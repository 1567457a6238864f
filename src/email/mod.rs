pub mod templates;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

/// Outbound notification channel, selected once at startup. Without a
/// usable SMTP configuration the channel degrades to logging the message.
pub enum Notifier {
    Smtp(SmtpNotifier),
    LogOnly,
}

impl Notifier {
    pub fn from_config(smtp: Option<&SmtpConfig>) -> Self {
        match smtp {
            Some(config) => match SmtpNotifier::new(config) {
                Ok(mailer) => {
                    tracing::info!("SMTP notifications configured");
                    Notifier::Smtp(mailer)
                }
                Err(e) => {
                    tracing::warn!("SMTP not available, notifications are log-only: {e}");
                    Notifier::LogOnly
                }
            },
            None => Notifier::LogOnly,
        }
    }

    /// Best-effort delivery. Failures are logged and swallowed; the HTTP
    /// response for the request that triggered this is already decided.
    pub async fn notify(&self, subject: &str, html_body: &str) {
        match self {
            Notifier::Smtp(mailer) => {
                if let Err(e) = mailer.send(subject, html_body).await {
                    tracing::warn!("Email notification failed: {e}");
                }
            }
            Notifier::LogOnly => {
                tracing::info!("[email log-only] {subject}\n{html_body}");
            }
        }
    }
}

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        if config.notify_to.is_empty() {
            return Err("notification recipient not set".to_string());
        }

        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP transport error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            to: config.notify_to.clone(),
        })
    }

    async fn send(&self, subject: &str, html_body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(self.to.parse().map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
