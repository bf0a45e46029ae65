//! Input validation for entity payloads and date-window queries.
//!
//! Handlers validate at the HTTP boundary and reject malformed payloads
//! before any store call is made. Validators return `Result<(), String>`
//! with a human-readable message suitable for a 400 response body.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a username.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Maximum length of an item title.
pub const MAX_TITLE_LENGTH: usize = 512;

/// Maximum length of item or comment body text.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Error message for a date-window query missing either bound.
pub const MISSING_DATE_RANGE: &str = "Start date and end date are required";

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// Validate a username: non-empty and within the length limit.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username exceeds maximum length of {MAX_USERNAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an item title: non-empty and within the length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate body text (item text or comment text): non-empty and within
/// the length limit.
pub fn validate_text(text: &str) -> Result<(), String> {
    if text.is_empty() {
        return Err("Text cannot be empty".to_string());
    }
    if text.len() > MAX_TEXT_LENGTH {
        return Err(format!(
            "Text exceeds maximum length of {MAX_TEXT_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

/// Parse a caller-supplied date string as a UTC timestamp.
///
/// Accepts RFC 3339 (`2024-05-01T12:00:00Z`) or a bare date
/// (`2024-05-01`, interpreted as midnight UTC).
pub fn parse_date(value: &str) -> Result<Timestamp, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        // Midnight always exists, so this cannot fail.
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }
    Err(format!("Invalid date '{value}'"))
}

/// Parse the `startDate`/`endDate` pair of a date-window query.
///
/// Both bounds are required; a missing bound yields the canonical
/// "Start date and end date are required" message regardless of which
/// one is present.
pub fn parse_date_range(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Timestamp, Timestamp), String> {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => return Err(MISSING_DATE_RANGE.to_string()),
    };
    Ok((parse_date(start)?, parse_date(end)?))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // -- field validators ----------------------------------------------------

    #[test]
    fn valid_username_accepted() {
        assert!(validate_username("alice").is_ok());
    }

    #[test]
    fn empty_username_rejected() {
        let result = validate_username("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn username_at_max_length_accepted() {
        assert!(validate_username(&"a".repeat(MAX_USERNAME_LENGTH)).is_ok());
    }

    #[test]
    fn username_over_max_length_rejected() {
        let result = validate_username(&"a".repeat(MAX_USERNAME_LENGTH + 1));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("exceeds maximum length"));
    }

    #[test]
    fn empty_title_rejected() {
        assert!(validate_title("").is_err());
    }

    #[test]
    fn title_over_max_length_rejected() {
        assert!(validate_title(&"t".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn empty_text_rejected() {
        assert!(validate_text("").is_err());
    }

    #[test]
    fn ordinary_text_accepted() {
        assert!(validate_text("nice").is_ok());
    }

    // -- parse_date ----------------------------------------------------------

    #[test]
    fn rfc3339_date_parses() {
        let ts = parse_date("2024-05-01T12:30:00Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn rfc3339_with_offset_normalized_to_utc() {
        let ts = parse_date("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn bare_date_parses_as_midnight_utc() {
        let ts = parse_date("2024-05-01").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn garbage_date_rejected() {
        let result = parse_date("not-a-date");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid date"));
    }

    // -- parse_date_range ----------------------------------------------------

    #[test]
    fn both_bounds_present_parses() {
        let (start, end) = parse_date_range(Some("2024-01-01"), Some("2024-12-31")).unwrap();
        assert!(start < end);
    }

    #[test]
    fn missing_start_yields_canonical_message() {
        let result = parse_date_range(None, Some("2024-12-31"));
        assert_eq!(result.unwrap_err(), MISSING_DATE_RANGE);
    }

    #[test]
    fn missing_end_yields_canonical_message() {
        let result = parse_date_range(Some("2024-01-01"), None);
        assert_eq!(result.unwrap_err(), MISSING_DATE_RANGE);
    }

    #[test]
    fn missing_both_yields_canonical_message() {
        let result = parse_date_range(None, None);
        assert_eq!(result.unwrap_err(), MISSING_DATE_RANGE);
    }

    #[test]
    fn unparseable_bound_rejected() {
        assert!(parse_date_range(Some("soon"), Some("2024-12-31")).is_err());
    }
}
