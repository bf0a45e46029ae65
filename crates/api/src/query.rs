//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for date-window list endpoints
/// (`?startDate=&endDate=`).
///
/// Both bounds arrive as raw strings; presence and parseability are
/// checked in the handler via `newswire_core::validate::parse_date_range`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
