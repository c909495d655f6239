mod http;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use clap::{Args, Parser, Subcommand};
use records::api::RecordsApi;
use records::endpoints::API_BASE;
use records::query::{GradeStatisticsQuery, StudentSummaryQuery};
use records::types::DEFAULT_CREDITS;
use records::{ApiError, Course, CourseDraft, Entity, Grade, GradeDraft, GradeFilter, Session, Settle, Student, StudentDraft};
use serde::Serialize;

use crate::http::{HttpApi, ReqwestTransport};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Rejected(String),
    #[error("refusing to delete {noun} {id} without --yes")]
    Unconfirmed { noun: &'static str, id: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "records-cli", about = "Student records admin CLI")]
struct Cli {
    #[arg(long, env = "RECORDS_API_BASE", default_value = API_BASE)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Students(StudentsCommand),
    Courses(CoursesCommand),
    Grades(GradesCommand),
    Reports(ReportsCommand),
}

#[derive(Args, Debug)]
struct StudentsCommand {
    #[command(subcommand)]
    command: StudentsSubcommand,
}

#[derive(Subcommand, Debug)]
enum StudentsSubcommand {
    List,
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Delete {
        id: String,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    /// Per-student averages, optionally bounded by GPA.
    Summary {
        #[arg(long)]
        min_gpa: Option<f64>,
        #[arg(long)]
        max_gpa: Option<f64>,
    },
}

#[derive(Args, Debug)]
struct CoursesCommand {
    #[command(subcommand)]
    command: CoursesSubcommand,
}

#[derive(Subcommand, Debug)]
enum CoursesSubcommand {
    List,
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = DEFAULT_CREDITS)]
        credits: u8,
    },
    Delete {
        id: String,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    Summary,
}

#[derive(Args, Debug)]
struct GradesCommand {
    #[command(subcommand)]
    command: GradesSubcommand,
}

#[derive(Args, Debug)]
struct GradeFilterArgs {
    #[arg(long)]
    student_id: Option<String>,
    #[arg(long)]
    course_id: Option<String>,
    #[arg(long)]
    min_score: Option<f64>,
    #[arg(long)]
    max_score: Option<f64>,
}

impl GradeFilterArgs {
    fn into_filter(self) -> GradeFilter {
        GradeFilter {
            student_id: self.student_id.unwrap_or_default(),
            course_id: self.course_id.unwrap_or_default(),
            min_score: optional_number(self.min_score),
            max_score: optional_number(self.max_score),
        }
    }
}

#[derive(Subcommand, Debug)]
enum GradesSubcommand {
    List {
        #[command(flatten)]
        filter: GradeFilterArgs,
    },
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        student_id: String,
        #[arg(long)]
        course_id: String,
        #[arg(long)]
        score: f64,
    },
    /// Change the score of an existing grade; references are fixed.
    Update {
        id: String,
        #[arg(long)]
        score: f64,
    },
    Delete {
        id: String,
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    Stats {
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long)]
        course_id: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ReportsCommand {
    #[command(subcommand)]
    command: ReportsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ReportsSubcommand {
    Top {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    Progress {
        student_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpApi::new(ReqwestTransport::new(cli.base_url)?);
    tracing::debug!(base_url = api.transport().base_url(), "records-cli starting");

    match cli.command {
        Command::Students(students) => run_students(api, students).await,
        Command::Courses(courses) => run_courses(api, courses).await,
        Command::Grades(grades) => run_grades(api, grades).await,
        Command::Reports(reports) => run_reports(api, reports).await,
    }
}

async fn run_students(api: HttpApi, students: StudentsCommand) -> Result<(), CliError> {
    match students.command {
        StudentsSubcommand::List => print_json(&api.list_students().await?),
        StudentsSubcommand::Get { id } => print_json(&api.get_student(&id).await?),
        StudentsSubcommand::Create { name, email } => {
            let mut session = Session::<Student, _>::new(api);
            session.workflow_mut().open_create();
            session.workflow_mut().dialog.update_draft(|d| *d = StudentDraft { name, email });
            let settle = session.submit().await;
            report(&session, settle)
        }
        StudentsSubcommand::Update { id, name, email } => {
            let student = api.get_student(&id).await?;
            let mut session = Session::<Student, _>::new(api);
            session.workflow_mut().open_edit(&student);
            session.workflow_mut().dialog.update_draft(|d| {
                if let Some(name) = name {
                    d.name = name;
                }
                if let Some(email) = email {
                    d.email = email;
                }
            });
            let settle = session.submit().await;
            report(&session, settle)
        }
        StudentsSubcommand::Delete { id, yes } => delete::<Student>(api, id, yes).await,
        StudentsSubcommand::Summary { min_gpa, max_gpa } => {
            let query = StudentSummaryQuery {
                min_gpa: optional_number(min_gpa),
                max_gpa: optional_number(max_gpa),
            };
            print_json(&api.students_summary(&query).await?)
        }
    }
}

async fn run_courses(api: HttpApi, courses: CoursesCommand) -> Result<(), CliError> {
    match courses.command {
        CoursesSubcommand::List => print_json(&api.list_courses().await?),
        CoursesSubcommand::Get { id } => print_json(&api.get_course(&id).await?),
        CoursesSubcommand::Create { code, name, credits } => {
            let mut session = Session::<Course, _>::new(api);
            session.workflow_mut().open_create();
            session
                .workflow_mut()
                .dialog
                .update_draft(|d| *d = CourseDraft { code, name, credits });
            let settle = session.submit().await;
            report(&session, settle)
        }
        CoursesSubcommand::Delete { id, yes } => delete::<Course>(api, id, yes).await,
        CoursesSubcommand::Summary => print_json(&api.courses_summary().await?),
    }
}

async fn run_grades(api: HttpApi, grades: GradesCommand) -> Result<(), CliError> {
    match grades.command {
        GradesSubcommand::List { filter } => {
            let query = filter.into_filter().to_query();
            print_json(&api.list_grades(&query).await?)
        }
        GradesSubcommand::Get { id } => print_json(&api.get_grade(&id).await?),
        GradesSubcommand::Create {
            student_id,
            course_id,
            score,
        } => {
            let mut session = Session::<Grade, _>::new(api);
            session.workflow_mut().open_create();
            session.workflow_mut().dialog.update_draft(|d| {
                *d = GradeDraft {
                    student_id,
                    course_id,
                    score,
                };
            });
            let settle = session.submit().await;
            report(&session, settle)
        }
        GradesSubcommand::Update { id, score } => {
            let grade = api.get_grade(&id).await?;
            let mut session = Session::<Grade, _>::new(api);
            session.workflow_mut().open_edit(&grade);
            session.workflow_mut().dialog.update_draft(|d| d.score = score);
            let settle = session.submit().await;
            report(&session, settle)
        }
        GradesSubcommand::Delete { id, yes } => delete::<Grade>(api, id, yes).await,
        GradesSubcommand::Stats { student_id, course_id } => {
            let query = GradeStatisticsQuery {
                student_id: student_id.unwrap_or_default(),
                course_id: course_id.unwrap_or_default(),
            };
            print_json(&api.grades_statistics(&query).await?)
        }
    }
}

async fn run_reports(api: HttpApi, reports: ReportsCommand) -> Result<(), CliError> {
    match reports.command {
        ReportsSubcommand::Top { limit } => print_json(&api.top_students(limit).await?),
        ReportsSubcommand::Progress { student_id } => print_json(&api.student_progress(&student_id).await?),
    }
}

/// `--yes` stands in for the browser's confirmation prompt.
async fn delete<E: Entity + Serialize>(api: HttpApi, id: String, yes: bool) -> Result<(), CliError> {
    if !yes {
        return Err(CliError::Unconfirmed { noun: E::NOUN, id });
    }
    let mut session = Session::<E, _>::new(api);
    let settle = session.delete(&id, yes).await;
    report(&session, settle)
}

/// Print the notice and, after a successful mutation, the reloaded list.
fn report<E: Entity + Serialize, A: RecordsApi>(session: &Session<E, A>, settle: Settle) -> Result<(), CliError> {
    let workflow = session.workflow();
    let notice = workflow.notice.current().map(|n| n.text.clone());
    match settle {
        Settle::Stay => Err(CliError::Rejected(
            notice.unwrap_or_else(|| format!("{} was not changed", E::NOUN)),
        )),
        Settle::Reload if workflow.showing_fixtures() => {
            // The mutation landed but the follow-up reload did not.
            tracing::warn!(entity = E::NOUN_PLURAL, "reload after mutation failed");
            eprintln!("{} saved; reload failed", E::TITLE);
            Ok(())
        }
        Settle::Reload => {
            if let Some(text) = notice {
                eprintln!("{text}");
            }
            print_json(&workflow.items)
        }
    }
}

fn optional_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
