//! In-memory stand-in for the records backend, used by unit tests.
//!
//! Implements [`Transport`] so tests exercise the real [`RestClient`] paths
//! and query strings. Identifiers are assigned here, never by the client.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use serde_json::json;

use crate::api::{Method, Request, RestClient, Transport};
use crate::error::ApiError;
use crate::types::{Course, CourseDraft, Grade, GradeDraft, Student, StudentDraft, StudentUpdate, letter_for_score};

const CREATED_AT: &str = "2024-09-01T09:00:00";

#[derive(Default)]
struct Store {
    students: Vec<Student>,
    courses: Vec<Course>,
    grades: Vec<Grade>,
    next_id: u64,
}

impl Store {
    fn assign_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    store: RefCell<Store>,
    offline: Cell<bool>,
    log: RefCell<Vec<String>>,
}

pub(crate) type FakeApi = RestClient<FakeBackend>;

impl FakeBackend {
    /// Backend holding one student, one course, and one grade of 85.
    pub(crate) fn seeded() -> Self {
        let backend = Self::default();
        {
            let mut store = backend.store.borrow_mut();
            store.students.push(Student {
                student_id: "s-1".into(),
                name: "Ada Lovelace".into(),
                email: "ada@uni.edu".into(),
                gpa: Some(4.25),
                created_at: CREATED_AT.into(),
            });
            store.courses.push(Course {
                course_id: "c-1".into(),
                code: "MATH201".into(),
                name: "Calculus".into(),
                credits: 5,
            });
            store.grades.push(Grade {
                grade_id: "g-1".into(),
                student_id: "s-1".into(),
                course_id: "c-1".into(),
                score: 85.0,
                letter_grade: letter_for_score(85.0).into(),
                date: "2024-09-15T12:00:00".into(),
            });
            store.next_id = 100;
        }
        backend
    }

    pub(crate) fn api(self) -> FakeApi {
        RestClient::new(self)
    }

    /// Make every subsequent request fail at the transport level.
    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// `"METHOD /path?query"` for every request received, in order.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub(crate) fn clear_requests(&self) {
        self.log.borrow_mut().clear();
    }

    pub(crate) fn grade(&self, id: &str) -> Option<Grade> {
        self.store.borrow().grades.iter().find(|g| g.grade_id == id).cloned()
    }

    fn route(&self, request: &Request) -> Result<String, ApiError> {
        let segments: Vec<&str> = request.path.trim_matches('/').split('/').collect();
        let mut store = self.store.borrow_mut();
        match (request.method, segments.as_slice()) {
            (Method::Get, ["students"]) => ok(&store.students),
            (Method::Get, ["students", id]) => store
                .students
                .iter()
                .find(|s| s.student_id == *id)
                .map_or_else(|| not_found("Student not found"), ok),
            (Method::Post, ["students"]) => {
                let draft: StudentDraft = body(request)?;
                let student = Student {
                    student_id: store.assign_id("student"),
                    name: draft.name,
                    email: draft.email,
                    gpa: None,
                    created_at: CREATED_AT.into(),
                };
                store.students.push(student.clone());
                ok(&student)
            }
            (Method::Put, ["students", id]) => {
                let update: StudentUpdate = body(request)?;
                let Some(student) = store.students.iter_mut().find(|s| s.student_id == *id) else {
                    return not_found("Student not found");
                };
                if let Some(name) = update.name {
                    student.name = name;
                }
                if let Some(email) = update.email {
                    student.email = email;
                }
                ok(&*student)
            }
            (Method::Delete, ["students", id]) => remove(&mut store.students, |s| s.student_id == *id, "Student not found"),
            (Method::Get, ["courses"]) => ok(&store.courses),
            (Method::Get, ["courses", id]) => store
                .courses
                .iter()
                .find(|c| c.course_id == *id)
                .map_or_else(|| not_found("Course not found"), ok),
            (Method::Post, ["courses"]) => {
                let draft: CourseDraft = body(request)?;
                if store.courses.iter().any(|c| c.code == draft.code) {
                    return Err(error(400, "Course with this code already exists"));
                }
                let course = Course {
                    course_id: store.assign_id("course"),
                    code: draft.code,
                    name: draft.name,
                    credits: draft.credits,
                };
                store.courses.push(course.clone());
                ok(&course)
            }
            (Method::Delete, ["courses", id]) => remove(&mut store.courses, |c| c.course_id == *id, "Course not found"),
            (Method::Get, ["grades"]) => {
                let grades: Vec<&Grade> = store.grades.iter().filter(|g| matches_filter(g, &request.query)).collect();
                ok(&grades)
            }
            (Method::Get, ["grades", id]) => store
                .grades
                .iter()
                .find(|g| g.grade_id == *id)
                .map_or_else(|| not_found("Grade not found"), ok),
            (Method::Post, ["grades"]) => {
                let draft: GradeDraft = body(request)?;
                if !store.students.iter().any(|s| s.student_id == draft.student_id) {
                    return not_found("Student not found");
                }
                if !store.courses.iter().any(|c| c.course_id == draft.course_id) {
                    return not_found("Course not found");
                }
                let grade = Grade {
                    grade_id: store.assign_id("grade"),
                    student_id: draft.student_id,
                    course_id: draft.course_id,
                    score: draft.score,
                    letter_grade: letter_for_score(draft.score).into(),
                    date: CREATED_AT.into(),
                };
                store.grades.push(grade.clone());
                ok(&grade)
            }
            (Method::Put, ["grades", id]) => {
                let Some(score) = query_value(&request.query, "score").and_then(|v| v.parse::<f64>().ok()) else {
                    return Err(error(422, "field required"));
                };
                let Some(grade) = store.grades.iter_mut().find(|g| g.grade_id == *id) else {
                    return not_found("Grade not found");
                };
                grade.score = score;
                grade.letter_grade = letter_for_score(score).into();
                ok(&*grade)
            }
            (Method::Delete, ["grades", id]) => remove(&mut store.grades, |g| g.grade_id == *id, "Grade not found"),
            _ => Err(ApiError::from_status(405, r#"{"detail":"Method Not Allowed"}"#)),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: Request) -> Result<String, ApiError> {
        self.log
            .borrow_mut()
            .push(format!("{} {}", request.method.as_str(), request.path_and_query()));
        if self.offline.get() {
            return Err(ApiError::Transport("connection refused".into()));
        }
        self.route(&request)
    }
}

fn ok<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn body<T: serde::de::DeserializeOwned>(request: &Request) -> Result<T, ApiError> {
    let value = request.body.clone().ok_or_else(|| error(422, "body required"))?;
    serde_json::from_value(value).map_err(|e| error(422, &e.to_string()))
}

fn error(status: u16, detail: &str) -> ApiError {
    ApiError::from_status(status, &json!({ "detail": detail }).to_string())
}

fn not_found<T>(detail: &str) -> Result<T, ApiError> {
    Err(error(404, detail))
}

fn remove<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool, missing: &str) -> Result<String, ApiError> {
    let before = items.len();
    items.retain(|item| !matches(item));
    if items.len() == before {
        return not_found(missing);
    }
    Ok(String::new())
}

fn query_value<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    query.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
}

fn matches_filter(grade: &Grade, query: &[(&'static str, String)]) -> bool {
    let num = |key| query_value(query, key).and_then(|v| v.parse::<f64>().ok());
    query_value(query, "student_id").is_none_or(|id| grade.student_id == id)
        && query_value(query, "course_id").is_none_or(|id| grade.course_id == id)
        && num("min_score").is_none_or(|min| grade.score >= min)
        && num("max_score").is_none_or(|max| grade.score <= max)
}
