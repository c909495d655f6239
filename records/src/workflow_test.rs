use super::*;
use crate::notice::Severity;
use crate::types::{Course, CourseDraft, Grade, GradeDraft, Student, StudentDraft};

fn student(id: &str, name: &str) -> Student {
    Student {
        student_id: id.into(),
        name: name.into(),
        email: format!("{id}@uni.edu"),
        gpa: None,
        created_at: "2024-09-01T09:00:00".into(),
    }
}

fn notice_text<E: Entity>(wf: &Workflow<E>) -> Option<(String, Severity)> {
    wf.notice.current().map(|n| (n.text.clone(), n.severity))
}

// =============================================================
// List loader
// =============================================================

#[test]
fn begin_load_sets_loading() {
    let mut wf = Workflow::<Student>::new();
    let ticket = wf.begin_load();
    assert!(wf.loading);
    assert!(ticket.query.is_empty());
}

#[test]
fn successful_load_replaces_items_and_clears_loading() {
    let mut wf = Workflow::<Student>::new();
    wf.items = vec![student("old", "Old")];
    let ticket = wf.begin_load();
    assert!(wf.finish_load(&ticket, Ok((vec![student("s1", "Ada")], ()))));
    assert!(!wf.loading);
    assert_eq!(wf.items.len(), 1);
    assert_eq!(wf.items[0].student_id, "s1");
    assert!(!wf.showing_fixtures());
    assert!(wf.notice.current().is_none());
}

#[test]
fn failed_load_substitutes_fixtures_and_reports_error() {
    let mut wf = Workflow::<Course>::new();
    let ticket = wf.begin_load();
    wf.finish_load(&ticket, Err(ApiError::Transport("connection refused".into())));
    assert!(!wf.loading);
    assert!(wf.showing_fixtures());
    let codes: Vec<_> = wf.items.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["CS101", "MATH201"]);
    assert_eq!(
        notice_text(&wf),
        Some(("Failed to load courses; showing sample data".to_owned(), Severity::Error))
    );
}

#[test]
fn stale_load_result_is_dropped() {
    let mut wf = Workflow::<Student>::new();
    let first = wf.begin_load();
    let second = wf.begin_load();
    assert!(wf.finish_load(&second, Ok((vec![student("new", "New")], ()))));
    assert!(!wf.finish_load(&first, Ok((vec![student("old", "Old")], ()))));
    assert_eq!(wf.items[0].student_id, "new");
}

#[test]
fn stale_result_does_not_clear_loading_of_newer_load() {
    let mut wf = Workflow::<Student>::new();
    let first = wf.begin_load();
    let _second = wf.begin_load();
    wf.finish_load(&first, Ok((Vec::new(), ())));
    assert!(wf.loading);
}

// =============================================================
// Filter controller
// =============================================================

#[test]
fn apply_filter_snapshots_cleaned_query() {
    let mut wf = Workflow::<Grade>::new();
    wf.filter.min_score = "90".into();
    wf.filter.course_id = "  ".into();
    let ticket = wf.apply_filter();
    assert_eq!(ticket.query, vec![("min_score", "90".to_owned())]);
}

#[test]
fn clear_filter_resets_fields_and_loads_unfiltered() {
    let mut wf = Workflow::<Grade>::new();
    wf.filter.student_id = "s1".into();
    wf.filter.max_score = "50".into();
    let ticket = wf.clear_filter();
    assert!(ticket.query.is_empty());
    assert!(wf.filter.is_empty());
    assert!(wf.loading);
}

// =============================================================
// Dialog + submit
// =============================================================

#[test]
fn open_edit_prefills_from_record() {
    let mut wf = Workflow::<Student>::new();
    wf.open_edit(&student("s1", "Ada"));
    assert_eq!(wf.dialog.editing_id(), Some("s1"));
    assert_eq!(wf.dialog.draft().map(|d| d.name.as_str()), Some("Ada"));
}

#[test]
fn begin_submit_in_create_mode_builds_create() {
    let mut wf = Workflow::<Course>::new();
    wf.open_create();
    wf.dialog.update_draft(|d| {
        d.code = "CS101".into();
        d.name = "Intro".into();
    });
    let mutation = wf.begin_submit().unwrap();
    assert_eq!(
        mutation,
        Mutation::Create(CourseDraft {
            code: "CS101".into(),
            name: "Intro".into(),
            credits: 3,
        })
    );
    assert!(wf.is_submitting());
}

#[test]
fn begin_submit_in_edit_mode_targets_identifier() {
    let mut wf = Workflow::<Grade>::new();
    wf.dialog.open_edit(
        "g1",
        GradeDraft {
            student_id: "s1".into(),
            course_id: "c1".into(),
            score: 90.0,
        },
    );
    match wf.begin_submit() {
        Some(Mutation::Update { id, draft }) => {
            assert_eq!(id, "g1");
            assert!((draft.score - 90.0).abs() < f64::EPSILON);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut wf = Workflow::<Student>::new();
    wf.open_create();
    wf.dialog.update_draft(|d| {
        d.name = "Ada".into();
        d.email = "ada@uni.edu".into();
    });
    assert!(wf.begin_submit().is_some());
    assert!(wf.begin_submit().is_none());
}

#[test]
fn invalid_draft_reports_error_and_keeps_dialog_open() {
    let mut wf = Workflow::<Grade>::new();
    wf.open_create();
    assert!(wf.begin_submit().is_none());
    assert!(wf.dialog.is_open());
    assert!(!wf.is_submitting());
    assert_eq!(notice_text(&wf).map(|(_, s)| s), Some(Severity::Error));
}

#[test]
fn submit_with_closed_dialog_does_nothing() {
    let mut wf = Workflow::<Student>::new();
    assert!(wf.begin_submit().is_none());
    assert!(wf.notice.current().is_none());
}

#[test]
fn successful_submit_closes_dialog_and_requests_reload() {
    let mut wf = Workflow::<Student>::new();
    wf.open_create();
    let mutation = Mutation::Create(StudentDraft::default());
    assert_eq!(wf.settle_submit(&mutation, Ok(())), Settle::Reload);
    assert!(!wf.dialog.is_open());
    assert!(!wf.is_submitting());
    assert_eq!(notice_text(&wf), Some(("Student created".to_owned(), Severity::Success)));
}

#[test]
fn failed_submit_keeps_dialog_and_shows_backend_detail() {
    let mut wf = Workflow::<Student>::new();
    wf.open_edit(&student("s1", "Ada"));
    let mutation = Mutation::Update {
        id: "s1".into(),
        draft: StudentDraft::default(),
    };
    let err = ApiError::from_status(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(wf.settle_submit(&mutation, Err(err)), Settle::Stay);
    assert!(wf.dialog.is_editing());
    assert_eq!(
        notice_text(&wf),
        Some(("Email already registered".to_owned(), Severity::Error))
    );
}

#[test]
fn failed_submit_without_detail_uses_generic_message() {
    let mut wf = Workflow::<Course>::new();
    wf.open_create();
    let mutation = Mutation::Create(CourseDraft::default());
    wf.settle_submit(&mutation, Err(ApiError::Transport("timeout".into())));
    assert_eq!(
        notice_text(&wf),
        Some(("Failed to save course".to_owned(), Severity::Error))
    );
}

// =============================================================
// Delete
// =============================================================

#[test]
fn deletes_of_different_records_run_concurrently() {
    let mut wf = Workflow::<Student>::new();
    assert!(wf.begin_delete("s1"));
    assert!(wf.begin_delete("s2"));
    assert!(wf.is_deleting("s1"));
    assert!(wf.is_deleting("s2"));
    assert_eq!(notice_text(&wf), None);

    wf.settle_delete("s1", Ok(()));
    assert!(!wf.is_deleting("s1"));
    assert!(wf.is_deleting("s2"));
    wf.settle_delete("s2", Err(ApiError::from_status(500, "")));
    assert!(!wf.is_deleting("s2"));
}

#[test]
fn repeat_delete_of_same_record_is_refused_with_notice() {
    let mut wf = Workflow::<Student>::new();
    assert!(wf.begin_delete("s1"));
    assert!(!wf.begin_delete("s1"));
    assert_eq!(
        notice_text(&wf),
        Some(("Student is already being deleted".to_owned(), Severity::Error))
    );

    wf.settle_delete("s1", Ok(()));
    assert!(wf.begin_delete("s1"));
}

#[test]
fn failed_delete_keeps_list_and_reports_error() {
    let mut wf = Workflow::<Student>::new();
    wf.items = vec![student("s1", "Ada")];
    wf.begin_delete("s1");
    let settle = wf.settle_delete("s1", Err(ApiError::from_status(404, "")));
    assert_eq!(settle, Settle::Stay);
    assert_eq!(wf.items.len(), 1);
    assert_eq!(
        notice_text(&wf),
        Some(("Failed to delete student".to_owned(), Severity::Error))
    );
}

#[test]
fn successful_delete_requests_reload_without_local_removal() {
    let mut wf = Workflow::<Student>::new();
    wf.items = vec![student("s1", "Ada")];
    wf.begin_delete("s1");
    assert_eq!(wf.settle_delete("s1", Ok(())), Settle::Reload);
    assert_eq!(wf.items.len(), 1);
    assert_eq!(notice_text(&wf), Some(("Student deleted".to_owned(), Severity::Success)));
}

#[test]
fn find_looks_up_by_identifier() {
    let mut wf = Workflow::<Student>::new();
    wf.items = vec![student("s1", "Ada"), student("s2", "Grace")];
    assert_eq!(wf.find("s2").map(|s| s.name.as_str()), Some("Grace"));
    assert!(wf.find("s3").is_none());
}
