use super::*;

#[test]
fn string_detail_is_extracted() {
    let body = r#"{"detail":"Student with this email already exists"}"#;
    assert_eq!(
        parse_error_detail(body).as_deref(),
        Some("Student with this email already exists")
    );
}

#[test]
fn validation_detail_joins_messages() {
    let body = r#"{"detail":[{"loc":["query","score"],"msg":"ensure this value is less than or equal to 100"},{"msg":"field required"}]}"#;
    assert_eq!(
        parse_error_detail(body).as_deref(),
        Some("ensure this value is less than or equal to 100; field required")
    );
}

#[test]
fn missing_or_non_json_detail_is_none() {
    assert!(parse_error_detail("Internal Server Error").is_none());
    assert!(parse_error_detail(r#"{"error":"boom"}"#).is_none());
    assert!(parse_error_detail(r#"{"detail":""}"#).is_none());
}

#[test]
fn user_message_prefers_backend_detail() {
    let err = ApiError::from_status(404, r#"{"detail":"Course not found"}"#);
    assert_eq!(err.user_message("Save failed"), "Course not found");
    assert_eq!(err.status(), Some(404));
}

#[test]
fn user_message_falls_back_without_detail() {
    assert_eq!(ApiError::from_status(500, "").user_message("Save failed"), "Save failed");
    assert_eq!(
        ApiError::Transport("connection refused".into()).user_message("Save failed"),
        "Save failed"
    );
}

#[test]
fn display_includes_status_and_detail() {
    let err = ApiError::from_status(400, r#"{"detail":"bad"}"#);
    assert_eq!(err.to_string(), "backend returned 400: bad");
    assert_eq!(ApiError::from_status(502, "").to_string(), "backend returned 502");
}
