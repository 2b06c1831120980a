use crate::entities::documents;
use crate::services::reminder::ReminderDetails;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DocumentResponse {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub expiration_date: NaiveDate,
    pub status: String,
}

impl From<documents::Model> for DocumentResponse {
    fn from(model: documents::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            doc_type: model.doc_type,
            expiration_date: model.expiration_date,
            status: model.status,
        }
    }
}

/// One page of documents plus pagination metadata
#[derive(Serialize, ToSchema)]
pub struct DocumentPage {
    pub data: Vec<DocumentResponse>,
    pub current_page: u64,
    pub per_page: u64,
    pub last_page: u64,
    pub total: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

#[derive(Deserialize)]
pub struct ListDocumentsQuery {
    pub per_page: Option<u64>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<u64>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReminderResponse {
    pub message: String,
    pub details: ReminderDetails,
}
