use crate::api::error::AppError;
use crate::utils::auth::Claims;
use axum::{
    Extension, Json,
    extract::{Path, State},
};

use super::types::ReminderResponse;

#[utoipa::path(
    post,
    path = "/send-reminder/{id}",
    params(
        ("id" = String, Path, description = "Document record ID")
    ),
    responses(
        (status = 200, description = "Reminder email sent", body = ReminderResponse),
        (status = 404, description = "Record not found for this user"),
        (status = 500, description = "Mail transport failure (opaque message)"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "documents"
)]
pub async fn send_reminder(
    State(state): State<crate::AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<ReminderResponse>, AppError> {
    let details = state.reminders.send_reminder(&claims.sub, &id).await?;

    Ok(Json(ReminderResponse {
        message: "Reminder email sent successfully.".to_string(),
        details,
    }))
}
