use crate::api::error::AppError;
use crate::entities::{documents, prelude::*};
use crate::utils::auth::Claims;
use axum::{
    Extension, Json,
    extract::{Query, State},
};
use sea_orm::{ColumnTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder};

use super::types::*;

const MAX_PER_PAGE: u64 = 100;

#[utoipa::path(
    get,
    path = "/csv-data",
    params(
        ("per_page" = Option<u64>, Query, description = "Page size (default 10)"),
        ("sort" = Option<String>, Query, description = "Sort field: title | type | expiration_date"),
        ("order" = Option<String>, Query, description = "asc | desc"),
        ("page" = Option<u64>, Query, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "One page of the user's documents", body = DocumentPage),
        (status = 400, description = "Invalid sort or order"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "documents"
)]
pub async fn list_documents(
    State(state): State<crate::AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<ListDocumentsQuery>,
) -> Result<Json<DocumentPage>, AppError> {
    let per_page = query
        .per_page
        .unwrap_or(state.config.default_per_page)
        .clamp(1, MAX_PER_PAGE);
    let page = query.page.unwrap_or(1).max(1);

    // Sort field is whitelisted; arbitrary names never reach the query.
    let sort = query.sort.as_deref().unwrap_or("expiration_date");
    let sort_column = match sort {
        "title" => documents::Column::Title,
        "type" => documents::Column::DocType,
        "expiration_date" => documents::Column::ExpirationDate,
        other => {
            return Err(AppError::BadRequest(format!(
                "Invalid sort field '{}', expected one of: title, type, expiration_date",
                other
            )));
        }
    };

    let order = match query.order.as_deref().unwrap_or("asc") {
        "asc" => Order::Asc,
        "desc" => Order::Desc,
        other => {
            return Err(AppError::BadRequest(format!(
                "Invalid order '{}', expected asc or desc",
                other
            )));
        }
    };

    let paginator = Documents::find()
        .filter(documents::Column::UserId.eq(&claims.sub))
        .order_by(sort_column, order)
        .paginate(&state.db, per_page);

    let counts = paginator.num_items_and_pages().await?;
    // Out-of-range pages yield an empty page, never an error
    let items = paginator.fetch_page(page - 1).await?;

    let data: Vec<DocumentResponse> = items.into_iter().map(DocumentResponse::from).collect();

    let (from, to) = if data.is_empty() {
        (None, None)
    } else {
        let from = (page - 1) * per_page + 1;
        (Some(from), Some(from + data.len() as u64 - 1))
    };

    Ok(Json(DocumentPage {
        data,
        current_page: page,
        per_page,
        last_page: counts.number_of_pages.max(1),
        total: counts.number_of_items,
        from,
        to,
    }))
}
