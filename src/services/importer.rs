use crate::entities::documents;
use crate::services::classifier::ExpirationStatus;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use thiserror::Error;
use uuid::Uuid;

/// Expected date format in uploaded CSV files
const CSV_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {line}: expected at least 3 columns (title, type, expiration date)")]
    ShortRow { line: usize },

    #[error("Row {line}: '{value}' is not a valid MM/DD/YYYY date")]
    BadDate { line: usize, value: String },

    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

/// A CSV row parsed and classified, ready to upsert
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub title: String,
    pub doc_type: String,
    pub expiration_date: NaiveDate,
    pub status: ExpirationStatus,
}

/// Parse CSV bytes into classified rows. The first row is a header and is
/// discarded. Fails on the first malformed row; nothing is written here, so
/// a failed parse commits nothing.
pub fn parse_rows(data: &[u8], today: NaiveDate) -> Result<Vec<ParsedRow>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2; // 1-based, after the header row
        let record = record?;

        if record.len() < 3 {
            return Err(ImportError::ShortRow { line });
        }

        let raw_date = record[2].trim();
        let expiration_date = NaiveDate::parse_from_str(raw_date, CSV_DATE_FORMAT)
            .map_err(|_| ImportError::BadDate {
                line,
                value: raw_date.to_string(),
            })?;

        rows.push(ParsedRow {
            title: record[0].trim().to_string(),
            doc_type: record[1].trim().to_string(),
            expiration_date,
            status: ExpirationStatus::classify(expiration_date, today),
        });
    }

    Ok(rows)
}

/// CSV import service: parses, classifies and upserts document records
pub struct ImportService {
    db: DatabaseConnection,
}

impl ImportService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Import a CSV file for one user. All-or-nothing: rows are fully parsed
    /// before any write and the upserts run in a single transaction.
    ///
    /// Each row is keyed by (user_id, title, type, expiration_date); a row
    /// matching an existing record updates its status in place instead of
    /// creating a duplicate.
    pub async fn import_csv(&self, user_id: &str, data: &[u8]) -> Result<usize, ImportError> {
        let today = Utc::now().date_naive();
        let rows = parse_rows(data, today)?;

        let txn = self.db.begin().await?;
        let now = Utc::now();

        for row in &rows {
            let model = documents::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                user_id: Set(user_id.to_string()),
                title: Set(row.title.clone()),
                doc_type: Set(row.doc_type.clone()),
                expiration_date: Set(row.expiration_date),
                status: Set(row.status.to_string()),
                created_at: Set(Some(now)),
                updated_at: Set(Some(now)),
            };

            documents::Entity::insert(model)
                .on_conflict(
                    OnConflict::columns([
                        documents::Column::UserId,
                        documents::Column::Title,
                        documents::Column::DocType,
                        documents::Column::ExpirationDate,
                    ])
                    .update_columns([documents::Column::Status, documents::Column::UpdatedAt])
                    .to_owned(),
                )
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        tracing::info!("Imported {} CSV rows for user {}", rows.len(), user_id);

        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_normalizes_dates() {
        let csv = b"title,type,date\nPassport,ID,01/01/2000\n";
        let rows = parse_rows(csv, date(2026, 6, 15)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Passport");
        assert_eq!(rows[0].doc_type, "ID");
        assert_eq!(rows[0].expiration_date, date(2000, 1, 1));
        assert_eq!(rows[0].status, ExpirationStatus::Expired);
    }

    #[test]
    fn test_parse_discards_header() {
        let csv = b"title,type,date\n";
        let rows = parse_rows(csv, date(2026, 6, 15)).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let csv = b"title,type,date\nPassport,ID,01/01/2030\nVisa,Travel,13/45/2025\n";
        let err = parse_rows(csv, date(2026, 6, 15)).unwrap_err();
        match err {
            ImportError::BadDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "13/45/2025");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let csv = b"title,type,date\nPassport,ID\n";
        let err = parse_rows(csv, date(2026, 6, 15)).unwrap_err();
        assert!(matches!(err, ImportError::ShortRow { line: 2 }));
    }

    #[test]
    fn test_parse_classifies_against_today() {
        let today = date(2026, 6, 15);
        let csv = b"title,type,date\nA,ID,06/18/2026\nB,ID,12/31/2026\n";
        let rows = parse_rows(csv, today).unwrap();
        assert_eq!(rows[0].status, ExpirationStatus::SoonToExpire);
        assert_eq!(rows[1].status, ExpirationStatus::Valid);
    }
}
