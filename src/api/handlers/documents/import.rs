use crate::api::error::AppError;
use crate::utils::auth::Claims;
use axum::{
    Extension, Json,
    extract::{Multipart, State},
};

use super::types::MessageResponse;

/// MIME types accepted for the upload, matching the csv/txt rule
const ACCEPTED_MIME_TYPES: [&str; 4] = [
    "text/csv",
    "text/plain",
    "application/csv",
    "application/vnd.ms-excel",
];

fn is_csv_or_txt(filename: &str, content_type: Option<&str>) -> bool {
    let ext_ok = filename
        .rsplit('.')
        .next()
        .map(|ext| ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    let mime_ok = content_type
        .map(|ct| ACCEPTED_MIME_TYPES.iter().any(|m| ct.starts_with(m)))
        .unwrap_or(false);

    ext_ok || mime_ok
}

#[utoipa::path(
    post,
    path = "/csv-data",
    request_body(content = String, content_type = "multipart/form-data", description = "CSV upload in form field `file`"),
    responses(
        (status = 200, description = "CSV imported", body = MessageResponse),
        (status = 400, description = "File missing or not csv/txt"),
        (status = 422, description = "Malformed row, nothing imported"),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "documents"
)]
pub async fn import_csv(
    State(state): State<crate::AppState>,
    Extension(claims): Extension<Claims>,
    mut multipart: Multipart,
) -> Result<Json<MessageResponse>, AppError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(|s| s.to_string());

        if !is_csv_or_txt(&filename, content_type.as_deref()) {
            return Err(AppError::Validation(
                "The file must be a file of type: csv, txt.".to_string(),
            ));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
        file = Some(data.to_vec());
        break;
    }

    let data = file.ok_or_else(|| AppError::Validation("The file field is required.".to_string()))?;

    state.importer.import_csv(&claims.sub, &data).await?;

    Ok(Json(MessageResponse {
        message: "CSV data imported successfully.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_csv_extension() {
        assert!(is_csv_or_txt("documents.csv", None));
        assert!(is_csv_or_txt("DOCUMENTS.TXT", None));
    }

    #[test]
    fn test_accepts_csv_mime() {
        assert!(is_csv_or_txt("upload", Some("text/csv")));
        assert!(is_csv_or_txt("upload", Some("text/plain; charset=utf-8")));
    }

    #[test]
    fn test_rejects_other_types() {
        assert!(!is_csv_or_txt("photo.png", Some("image/png")));
        assert!(!is_csv_or_txt("archive.zip", None));
    }
}
