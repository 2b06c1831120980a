use crate::config::AppConfig;
use anyhow::{Result, anyhow};
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// An email ready for the transport
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to_address: String,
    pub to_name: String,
    pub subject: String,
    pub html_body: String,
}

/// Trait for mail transport implementations
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one email. A single failure is terminal, no retries.
    async fn send(&self, email: &OutgoingEmail) -> Result<()>;

    /// Check if the transport is reachable
    async fn health_check(&self) -> bool;
}

/// SMTP mailer backed by lettre's async transport
///
/// Docker command to run a local capture server for development:
/// ```bash
/// docker run -d --name mailpit -p 1025:1025 -p 8025:8025 axllent/mailpit
/// ```
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut builder = if config.smtp_username.is_some() {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        } else {
            // Unauthenticated local relay (mailpit, postfix on localhost)
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        };
        builder = builder.port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let from = Mailbox::new(
            Some(config.mail_from_name.clone()),
            config
                .mail_from_address
                .parse()
                .map_err(|e| anyhow!("Invalid MAIL_FROM_ADDRESS: {}", e))?,
        );

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        let to = Mailbox::new(
            Some(email.to_name.clone()),
            email
                .to_address
                .parse()
                .map_err(|e| anyhow!("Invalid recipient address '{}': {}", email.to_address, e))?,
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())?;

        self.transport
            .send(message)
            .await
            .map_err(|e| anyhow!("SMTP send failed: {}", e))?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.transport.test_connection().await.unwrap_or(false)
    }
}

/// No-op mailer for development/testing: logs the send and succeeds
pub struct LogMailer;

#[async_trait::async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<()> {
        tracing::info!(
            "LogMailer: would send '{}' to {} <{}>",
            email.subject,
            email.to_name,
            email.to_address
        );
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Factory function to create the appropriate mailer based on config
pub fn create_mailer(config: &AppConfig) -> Result<Box<dyn Mailer>> {
    match config.mail_transport.to_lowercase().as_str() {
        "smtp" => Ok(Box::new(SmtpMailer::new(config)?)),
        "log" | "noop" | "none" => Ok(Box::new(LogMailer)),
        other => {
            tracing::warn!("Unknown mail transport '{}', using LogMailer", other);
            Ok(Box::new(LogMailer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_mailer() {
        let mailer = LogMailer;
        let email = OutgoingEmail {
            to_address: "someone@example.com".to_string(),
            to_name: "Someone".to_string(),
            subject: "Test".to_string(),
            html_body: "<p>hi</p>".to_string(),
        };
        mailer.send(&email).await.unwrap();
        assert!(mailer.health_check().await);
    }

    #[tokio::test]
    async fn test_create_mailer_fallback() {
        let mut config = AppConfig::development();
        config.mail_transport = "carrier-pigeon".to_string();
        let mailer = create_mailer(&config).unwrap();
        assert!(mailer.health_check().await);
    }
}
