use crate::config::AppConfig;
use crate::services::mailer::Mailer;
use std::sync::Arc;
use tracing::info;

pub async fn setup_mailer(config: &AppConfig) -> anyhow::Result<Arc<dyn Mailer>> {
    let mailer: Arc<dyn Mailer> = crate::services::mailer::create_mailer(config)?.into();

    // Warm up transport connection
    if config.mail_transport.eq_ignore_ascii_case("smtp") {
        if mailer.health_check().await {
            info!("📧 Mail transport connected successfully");
        } else {
            tracing::warn!(
                "⚠️  Mail transport unreachable! Reminder sends will fail until it recovers."
            );
        }
    }

    Ok(mailer)
}
