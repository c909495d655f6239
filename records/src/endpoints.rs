//! REST paths consumed from the records backend.
//!
//! Paths are relative to [`API_BASE`]; [`url`] joins them. The base address
//! is fixed when the crate is built and is not read at runtime.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Backend base address, taken from `RECORDS_API_BASE` at build time.
pub const API_BASE: &str = match option_env!("RECORDS_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8001",
};

/// Join `base` and an absolute `path` without doubling the slash.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Absolute URL for `path` against [`API_BASE`].
#[must_use]
pub fn url(path: &str) -> String {
    join(API_BASE, path)
}

/// Percent-encode an identifier so it stays a single path segment.
fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

#[must_use]
pub fn students() -> String {
    "/students".to_owned()
}

#[must_use]
pub fn student(id: &str) -> String {
    format!("/students/{}", segment(id))
}

#[must_use]
pub fn courses() -> String {
    "/courses".to_owned()
}

#[must_use]
pub fn course(id: &str) -> String {
    format!("/courses/{}", segment(id))
}

#[must_use]
pub fn grades() -> String {
    "/grades".to_owned()
}

/// Grade by id. Score updates use this path with a `score` query parameter.
#[must_use]
pub fn grade(id: &str) -> String {
    format!("/grades/{}", segment(id))
}

#[must_use]
pub fn students_summary() -> String {
    "/reports/students/summary".to_owned()
}

#[must_use]
pub fn courses_summary() -> String {
    "/reports/courses/summary".to_owned()
}

#[must_use]
pub fn grades_statistics() -> String {
    "/reports/grades/statistics".to_owned()
}

#[must_use]
pub fn top_students() -> String {
    "/reports/top/students".to_owned()
}

#[must_use]
pub fn student_progress(id: &str) -> String {
    format!("/reports/student/{}/progress", segment(id))
}

/// Query pairs for `PUT /grades/{id}`; the score travels in the query string
/// and the request has no body.
#[must_use]
pub fn grade_score_query(score: f64) -> Vec<(&'static str, String)> {
    vec![("score", score.to_string())]
}

/// Query pairs for `GET /reports/top/students`.
#[must_use]
pub fn top_students_query(limit: u32) -> Vec<(&'static str, String)> {
    vec![("limit", limit.to_string())]
}

/// Render query pairs as a `?k=v&...` suffix, percent-encoding values.
///
/// Returns an empty string when there are no pairs.
#[must_use]
pub fn query_suffix(pairs: &[(&'static str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}
