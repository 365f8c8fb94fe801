//! Field-level validation rules shared by construction and partial updates.

use chrono::NaiveDate;
use thiserror::Error;

/// Maximum length of `name` and `brand`, in characters, after trimming.
pub const MAX_TEXT_LEN: usize = 100;

/// Format accepted for `purchase_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons an item, or a request about one, is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,

    #[error("name must be 100 characters or less")]
    NameTooLong,

    #[error("brand is required")]
    BrandRequired,

    #[error("brand must be 100 characters or less")]
    BrandTooLong,

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("purchase_price must be 0 or greater")]
    NegativePrice,

    #[error("purchase_date must be in YYYY-MM-DD format: {0}")]
    InvalidDate(String),

    #[error("id must be a positive integer: {0}")]
    InvalidId(i64),

    #[error("at least one of name, brand, or purchase_price must be provided")]
    EmptyUpdate,
}

/// Trims and checks an item name.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    validate_text(raw, ValidationError::NameRequired, ValidationError::NameTooLong)
}

/// Trims and checks a brand.
pub fn validate_brand(raw: &str) -> Result<String, ValidationError> {
    validate_text(raw, ValidationError::BrandRequired, ValidationError::BrandTooLong)
}

pub fn validate_price(price: i64) -> Result<i64, ValidationError> {
    if price < 0 {
        return Err(ValidationError::NegativePrice);
    }
    Ok(price)
}

/// Parses a `YYYY-MM-DD` calendar date. Impossible dates such as
/// `2023-02-30` are rejected, and so are unpadded, signed or
/// space-prefixed forms that chrono alone would accept.
pub fn parse_purchase_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(raw.to_string());
    if !is_iso_date_shape(raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

// Exactly `dddd-dd-dd`.
fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn validate_text(
    raw: &str,
    empty: ValidationError,
    too_long: ValidationError,
) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(empty);
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(too_long);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Watch \t").unwrap(), "Watch");
    }

    #[test]
    fn whitespace_only_name_is_required_error() {
        assert_eq!(validate_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(validate_brand(""), Err(ValidationError::BrandRequired));
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        // 100 three-byte characters still fit
        let exactly = "時".repeat(MAX_TEXT_LEN);
        assert_eq!(validate_name(&exactly).unwrap(), exactly);

        let over = "a".repeat(MAX_TEXT_LEN + 1);
        assert_eq!(validate_name(&over), Err(ValidationError::NameTooLong));
        assert_eq!(validate_brand(&over), Err(ValidationError::BrandTooLong));
    }

    #[test]
    fn surrounding_whitespace_does_not_count_toward_limit() {
        let padded = format!("  {}  ", "b".repeat(MAX_TEXT_LEN));
        assert!(validate_brand(&padded).is_ok());
    }

    #[test]
    fn price_zero_is_allowed() {
        assert_eq!(validate_price(0), Ok(0));
        assert_eq!(validate_price(-1), Err(ValidationError::NegativePrice));
    }

    #[test]
    fn dates_must_exist_on_the_calendar() {
        assert!(parse_purchase_date("2023-01-15").is_ok());
        assert!(parse_purchase_date("2024-02-29").is_ok());
        assert!(parse_purchase_date("2023-02-29").is_err());
        assert!(parse_purchase_date("2023/01/15").is_err());
        assert!(parse_purchase_date("15-01-2023").is_err());
        assert!(parse_purchase_date("").is_err());
    }

    #[test]
    fn dates_must_be_zero_padded_and_unsigned() {
        for raw in ["2023-1-5", "2023-01-5", " 2023-01-15", "+2023-01-15", "2023-01-15 ", "02023-01-15"] {
            assert_eq!(
                parse_purchase_date(raw),
                Err(ValidationError::InvalidDate(raw.to_string())),
                "{raw:?}"
            );
        }
    }
}
