use chrono::NaiveDate;
use std::fmt;

/// How many days ahead of the expiration date a document counts as
/// "Soon to expire".
pub const SOON_WINDOW_DAYS: i64 = 5;

/// Derived classification of a document's expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpirationStatus {
    Expired,
    SoonToExpire,
    Valid,
}

impl ExpirationStatus {
    /// Classify an expiration date relative to the given day.
    pub fn classify(expiration: NaiveDate, today: NaiveDate) -> Self {
        if expiration < today {
            ExpirationStatus::Expired
        } else if (expiration - today).num_days() <= SOON_WINDOW_DAYS {
            ExpirationStatus::SoonToExpire
        } else {
            ExpirationStatus::Valid
        }
    }

    /// The label stored in the database and shown in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpirationStatus::Expired => "Expired",
            ExpirationStatus::SoonToExpire => "Soon to expire",
            ExpirationStatus::Valid => "Valid",
        }
    }
}

impl fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_past_date_is_expired() {
        let today = date(2026, 6, 15);
        assert_eq!(
            ExpirationStatus::classify(date(2026, 6, 14), today),
            ExpirationStatus::Expired
        );
        assert_eq!(
            ExpirationStatus::classify(date(2000, 1, 1), today),
            ExpirationStatus::Expired
        );
    }

    #[test]
    fn test_today_counts_as_soon() {
        let today = date(2026, 6, 15);
        assert_eq!(
            ExpirationStatus::classify(today, today),
            ExpirationStatus::SoonToExpire
        );
    }

    #[test]
    fn test_window_boundary() {
        let today = date(2026, 6, 15);
        // 5 days out is still "soon", 6 days out is valid
        assert_eq!(
            ExpirationStatus::classify(date(2026, 6, 20), today),
            ExpirationStatus::SoonToExpire
        );
        assert_eq!(
            ExpirationStatus::classify(date(2026, 6, 21), today),
            ExpirationStatus::Valid
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(ExpirationStatus::Expired.to_string(), "Expired");
        assert_eq!(ExpirationStatus::SoonToExpire.to_string(), "Soon to expire");
        assert_eq!(ExpirationStatus::Valid.to_string(), "Valid");
    }
}
