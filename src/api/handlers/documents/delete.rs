use crate::api::error::AppError;
use crate::entities::{documents, prelude::*};
use crate::utils::auth::Claims;
use axum::{Extension, Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use super::types::MessageResponse;

#[utoipa::path(
    delete,
    path = "/delete-all",
    responses(
        (status = 200, description = "All of the user's records deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "documents"
)]
pub async fn delete_all(
    State(state): State<crate::AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<MessageResponse>, AppError> {
    let result = Documents::delete_many()
        .filter(documents::Column::UserId.eq(&claims.sub))
        .exec(&state.db)
        .await?;

    tracing::info!(
        "Deleted {} document records for user {}",
        result.rows_affected,
        claims.sub
    );

    Ok(Json(MessageResponse {
        message: "All data deleted successfully.".to_string(),
    }))
}
