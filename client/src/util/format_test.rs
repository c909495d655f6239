use super::*;

#[test]
fn short_id_truncates_long_identifiers() {
    assert_eq!(short_id("3f2a9c1e-77aa-4b8e"), "3f2a9c1e...");
}

#[test]
fn short_id_keeps_short_identifiers_whole() {
    assert_eq!(short_id("s-1"), "s-1");
    assert_eq!(short_id("abcdefgh"), "abcdefgh");
}

#[test]
fn gpa_label_shows_two_decimals_or_placeholder() {
    assert_eq!(gpa_label(Some(4.25)), "4.25");
    assert_eq!(gpa_label(Some(3.0)), "3.00");
    assert_eq!(gpa_label(None), "No grades");
}

#[test]
fn date_label_drops_time_component() {
    assert_eq!(date_label("2024-01-01T00:00:00"), "2024-01-01");
    assert_eq!(date_label("2024-01-01"), "2024-01-01");
}

#[test]
fn score_label_omits_trailing_zero_fraction() {
    assert_eq!(score_label(85.0), "85");
    assert_eq!(score_label(87.5), "87.5");
}

#[test]
fn parse_credits_maps_garbage_to_zero() {
    assert_eq!(parse_credits(" 4 "), 4);
    assert_eq!(parse_credits("four"), 0);
    assert_eq!(parse_credits("300"), 0);
}

#[test]
fn parse_score_maps_garbage_to_nan() {
    assert!((parse_score("92.5") - 92.5).abs() < f64::EPSILON);
    assert!(parse_score("").is_nan());
}
