use super::*;

#[test]
fn empty_filter_produces_no_pairs() {
    assert!(GradeFilter::default().to_query().is_empty());
    assert!(GradeFilter::default().is_empty());
}

#[test]
fn min_score_only_omits_other_fields() {
    let filter = GradeFilter {
        min_score: "90".into(),
        ..GradeFilter::default()
    };
    assert_eq!(filter.to_query(), vec![("min_score", "90".to_owned())]);
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    let filter = GradeFilter {
        student_id: "   ".into(),
        max_score: " 75 ".into(),
        ..GradeFilter::default()
    };
    assert_eq!(filter.to_query(), vec![("max_score", "75".to_owned())]);
}

#[test]
fn pairs_keep_declaration_order() {
    let filter = GradeFilter {
        student_id: "s1".into(),
        course_id: "c1".into(),
        min_score: "10".into(),
        max_score: "20".into(),
    };
    let keys: Vec<_> = filter.to_query().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["student_id", "course_id", "min_score", "max_score"]);
}

#[test]
fn clear_resets_all_fields() {
    let mut filter = GradeFilter {
        student_id: "s1".into(),
        course_id: "c1".into(),
        min_score: "10".into(),
        max_score: "20".into(),
    };
    filter.clear();
    assert_eq!(filter, GradeFilter::default());
}

#[test]
fn report_queries_strip_empty_fields() {
    let summary = StudentSummaryQuery {
        min_gpa: "3.5".into(),
        max_gpa: String::new(),
    };
    assert_eq!(summary.to_query(), vec![("min_gpa", "3.5".to_owned())]);

    let stats = GradeStatisticsQuery {
        student_id: String::new(),
        course_id: "c1".into(),
    };
    assert_eq!(stats.to_query(), vec![("course_id", "c1".to_owned())]);
}
