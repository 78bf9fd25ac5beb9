//! Donations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AlumniError, Result};

/// A recorded donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub amount: f64,
    pub date: DateTime<Utc>,
}

impl DonationRecord {
    /// Validate `amount` and stamp it with `date`
    pub fn new(amount: f64, date: DateTime<Utc>) -> Result<Self> {
        validate_amount(amount)?;
        Ok(Self { amount, date })
    }
}

/// Amounts must be finite and strictly positive
pub fn validate_amount(amount: f64) -> Result<f64> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(AlumniError::InvalidInput(format!(
            "donation amount must be a positive number, got {}",
            amount
        )))
    }
}

/// Parse a donation amount typed by a user
pub fn parse_amount(input: &str) -> Result<f64> {
    let amount: f64 = input.trim().parse().map_err(|_| {
        AlumniError::InvalidInput(format!("'{}' is not a number", input.trim()))
    })?;
    validate_amount(amount)
}

/// Sum of all amounts; `0` (never `-0`) for no donations
pub fn total_donated(donations: &[DonationRecord]) -> f64 {
    donations.iter().fold(0.0, |sum, d| sum + d.amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 25 ").unwrap(), 25.0);
        assert!(matches!(parse_amount("abc"), Err(AlumniError::InvalidInput(_))));
        assert!(matches!(parse_amount("0"), Err(AlumniError::InvalidInput(_))));
        assert!(matches!(parse_amount("-5"), Err(AlumniError::InvalidInput(_))));
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_total_donated() {
        let now = Utc::now();
        let donations = vec![
            DonationRecord::new(10.0, now).unwrap(),
            DonationRecord::new(32.5, now).unwrap(),
        ];
        assert_eq!(total_donated(&donations), 42.5);
    }

    #[test]
    fn test_total_donated_empty_is_positive_zero() {
        let total = total_donated(&[]);
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
        assert_eq!(format!("${}", total), "$0");
    }

    #[test]
    fn test_date_is_iso_8601() {
        let date = DateTime::parse_from_rfc3339("2025-01-02T03:04:05.000Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = DonationRecord::new(5.0, date).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["date"].as_str().unwrap().starts_with("2025-01-02T03:04:05"));
    }
}
