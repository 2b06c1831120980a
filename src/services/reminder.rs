use crate::entities::{documents, prelude::*};
use crate::services::mailer::{Mailer, OutgoingEmail};
use askama::Template;
use chrono::{NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use utoipa::ToSchema;

const REMINDER_SUBJECT: &str = "Reminder: Document Expiration";

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("Document not found")]
    NotFound,

    #[error("Database error: {0}")]
    Db(#[from] DbErr),

    #[error("Template render error: {0}")]
    Template(#[from] askama::Error),

    #[error("Mail transport error: {0}")]
    Transport(#[source] anyhow::Error),
}

/// Detail payload included in the reminder email and the success response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReminderDetails {
    /// Recipient name
    pub user: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub expiration_date: NaiveDate,
    /// Whole-day distance to the expiration date. Always non-negative, even
    /// for already-expired documents (source behavior, kept).
    pub days_to_expire: u64,
    pub status: String,
}

#[derive(Template)]
#[template(path = "emails/reminder.html")]
struct ReminderEmailTemplate<'a> {
    user: &'a str,
    title: &'a str,
    doc_type: &'a str,
    expiration_date: String,
    days_to_expire: u64,
    status: &'a str,
}

/// Composes and sends a reminder email for one document record
pub struct ReminderService {
    db: DatabaseConnection,
    mailer: Arc<dyn Mailer>,
}

impl ReminderService {
    pub fn new(db: DatabaseConnection, mailer: Arc<dyn Mailer>) -> Self {
        Self { db, mailer }
    }

    /// Send a reminder for one record. The record must belong to `user_id`.
    pub async fn send_reminder(
        &self,
        user_id: &str,
        document_id: &str,
    ) -> Result<ReminderDetails, ReminderError> {
        let document = Documents::find_by_id(document_id)
            .filter(documents::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(ReminderError::NotFound)?;

        let user = Users::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(ReminderError::NotFound)?;

        let today = Utc::now().date_naive();
        let days_to_expire = (document.expiration_date - today).num_days().unsigned_abs();

        let details = ReminderDetails {
            user: user.name.clone(),
            title: document.title.clone(),
            doc_type: document.doc_type.clone(),
            expiration_date: document.expiration_date,
            days_to_expire,
            status: document.status.clone(),
        };

        let html_body = ReminderEmailTemplate {
            user: &details.user,
            title: &details.title,
            doc_type: &details.doc_type,
            expiration_date: details.expiration_date.format("%Y-%m-%d").to_string(),
            days_to_expire,
            status: &details.status,
        }
        .render()?;

        let email = OutgoingEmail {
            to_address: user.email,
            to_name: user.name,
            subject: REMINDER_SUBJECT.to_string(),
            html_body,
        };

        self.mailer
            .send(&email)
            .await
            .map_err(ReminderError::Transport)?;

        tracing::info!(
            "Reminder sent for document '{}' ({} days to expire) to {}",
            details.title,
            days_to_expire,
            email.to_address
        );

        Ok(details)
    }
}
