//! Display and input-parsing helpers for record tables and dialogs.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const SHORT_ID_LEN: usize = 8;

/// First eight characters of an identifier followed by `...`.
///
/// Identifiers of eight characters or fewer are shown whole.
pub fn short_id(id: &str) -> String {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((cut, _)) => format!("{}...", &id[..cut]),
        None => id.to_owned(),
    }
}

pub fn gpa_label(gpa: Option<f64>) -> String {
    gpa.map_or_else(|| "No grades".to_owned(), |value| format!("{value:.2}"))
}

/// Calendar date of an ISO-8601 timestamp (`2024-01-01T00:00:00` -> `2024-01-01`).
pub fn date_label(timestamp: &str) -> &str {
    timestamp.split_once('T').map_or(timestamp, |(date, _)| date)
}

pub fn score_label(score: f64) -> String {
    format!("{score}")
}

/// Parse a credits field. Unparseable input becomes `0`, which fails validation.
pub fn parse_credits(input: &str) -> u8 {
    input.trim().parse().unwrap_or(0)
}

/// Parse a score field. Unparseable input becomes NaN, which fails validation.
pub fn parse_score(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}
