use clap::Parser;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("records-cli").chain(args.iter().copied())).unwrap()
}

fn offline_api() -> HttpApi {
    HttpApi::new(ReqwestTransport::new("http://127.0.0.1:9").unwrap())
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn base_url_flag_overrides_default() {
    let cli = parse(&["--base-url", "http://records.internal", "students", "list"]);
    assert_eq!(cli.base_url, "http://records.internal");
    assert!(matches!(
        cli.command,
        Command::Students(StudentsCommand {
            command: StudentsSubcommand::List
        })
    ));
}

#[test]
fn course_create_defaults_to_three_credits() {
    let cli = parse(&["courses", "create", "--code", "CS101", "--name", "Intro"]);
    match cli.command {
        Command::Courses(CoursesCommand {
            command: CoursesSubcommand::Create { code, name, credits },
        }) => {
            assert_eq!(code, "CS101");
            assert_eq!(name, "Intro");
            assert_eq!(credits, 3);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn delete_without_yes_parses_as_unconfirmed() {
    let cli = parse(&["grades", "delete", "g-1"]);
    match cli.command {
        Command::Grades(GradesCommand {
            command: GradesSubcommand::Delete { id, yes },
        }) => {
            assert_eq!(id, "g-1");
            assert!(!yes);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn grade_update_requires_score() {
    let result = Cli::try_parse_from(["records-cli", "grades", "update", "g-1"]);
    assert!(result.is_err());
}

#[test]
fn grade_list_filter_flags_become_query() {
    let cli = parse(&["grades", "list", "--course-id", "c-1", "--min-score", "90"]);
    let Command::Grades(GradesCommand {
        command: GradesSubcommand::List { filter },
    }) = cli.command
    else {
        panic!("expected grades list");
    };
    assert_eq!(
        filter.into_filter().to_query(),
        vec![("course_id", "c-1".to_owned()), ("min_score", "90".to_owned())]
    );
}

#[test]
fn reports_top_defaults_to_ten() {
    let cli = parse(&["reports", "top"]);
    assert!(matches!(
        cli.command,
        Command::Reports(ReportsCommand {
            command: ReportsSubcommand::Top { limit: 10 }
        })
    ));
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn optional_number_is_empty_when_absent() {
    assert_eq!(optional_number(None), "");
    assert_eq!(optional_number(Some(3.5)), "3.5");
}

#[tokio::test]
async fn delete_without_yes_is_refused_before_any_request() {
    let err = delete::<Student>(offline_api(), "s-1".into(), false).await.unwrap_err();
    assert_eq!(err.to_string(), "refusing to delete student s-1 without --yes");
}

#[tokio::test]
async fn invalid_create_is_rejected_with_validation_message() {
    let mut session = Session::<Course, _>::new(offline_api());
    session.workflow_mut().open_create();
    let settle = session.submit().await;
    let err = report(&session, settle).unwrap_err();
    assert!(matches!(err, CliError::Rejected(_)));
}
