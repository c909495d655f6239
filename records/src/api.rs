//! Records backend client seam.
//!
//! DESIGN
//! ======
//! [`RecordsApi`] has one method per (entity, operation) pair. Concrete HTTP
//! stacks only implement the much smaller [`Transport`] trait (send one
//! request, return the 2xx body) and get the full API through
//! [`RestClient`], which owns paths, query strings, and JSON decoding.
//!
//! Futures are `?Send` because the browser transport is single-threaded.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::endpoints;
use crate::error::ApiError;
use crate::query::{GradeStatisticsQuery, StudentSummaryQuery};
use crate::reports::{CoursesSummary, GradeStatistics, StudentProgress, StudentsSummary, TopStudents};
use crate::types::{Course, CourseDraft, Grade, GradeDraft, Student, StudentDraft, StudentUpdate};

/// Query string pairs with empty values already removed.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Every backend call the records UI and CLI make.
///
/// Implementations perform exactly one request per call and return the
/// parsed body, or the failure unchanged. No retries.
#[async_trait(?Send)]
pub trait RecordsApi {
    async fn list_students(&self) -> Result<Vec<Student>, ApiError>;
    async fn get_student(&self, id: &str) -> Result<Student, ApiError>;
    async fn create_student(&self, draft: &StudentDraft) -> Result<Student, ApiError>;
    async fn update_student(&self, id: &str, update: &StudentUpdate) -> Result<Student, ApiError>;
    async fn delete_student(&self, id: &str) -> Result<(), ApiError>;

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;
    async fn get_course(&self, id: &str) -> Result<Course, ApiError>;
    async fn create_course(&self, draft: &CourseDraft) -> Result<Course, ApiError>;
    async fn delete_course(&self, id: &str) -> Result<(), ApiError>;

    async fn list_grades(&self, query: &[(&'static str, String)]) -> Result<Vec<Grade>, ApiError>;
    async fn get_grade(&self, id: &str) -> Result<Grade, ApiError>;
    async fn create_grade(&self, draft: &GradeDraft) -> Result<Grade, ApiError>;
    /// `PUT /grades/{id}?score=`; the score travels as a query parameter.
    async fn update_grade_score(&self, id: &str, score: f64) -> Result<Grade, ApiError>;
    async fn delete_grade(&self, id: &str) -> Result<(), ApiError>;

    async fn students_summary(&self, query: &StudentSummaryQuery) -> Result<StudentsSummary, ApiError>;
    async fn courses_summary(&self) -> Result<CoursesSummary, ApiError>;
    async fn grades_statistics(&self, query: &GradeStatisticsQuery) -> Result<GradeStatistics, ApiError>;
    async fn top_students(&self, limit: u32) -> Result<TopStudents, ApiError>;
    async fn student_progress(&self, student_id: &str) -> Result<StudentProgress, ApiError>;
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One backend request, relative to the transport's base address.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: QueryPairs,
    pub body: Option<serde_json::Value>,
}

impl Request {
    #[must_use]
    pub fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryPairs) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be represented as JSON.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Path plus encoded query string, e.g. `/grades?min_score=90`.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        format!("{}{}", self.path, endpoints::query_suffix(&self.query))
    }
}

/// Minimal HTTP seam implemented per platform.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return the body of a 2xx response.
    ///
    /// Non-2xx responses must map to [`ApiError::from_status`] with the raw
    /// error body; network failures to [`ApiError::Transport`].
    async fn send(&self, request: Request) -> Result<String, ApiError>;
}

// =============================================================================
// REST CLIENT
// =============================================================================

/// [`RecordsApi`] over any [`Transport`].
#[derive(Clone, Debug, Default)]
pub struct RestClient<T> {
    transport: T,
}

impl<T: Transport> RestClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch<R: DeserializeOwned>(&self, request: Request) -> Result<R, ApiError> {
        let body = self.transport.send(request).await?;
        decode(&body)
    }

    async fn discard(&self, request: Request) -> Result<(), ApiError> {
        self.transport.send(request).await.map(|_| ())
    }
}

/// Parse a 2xx response body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `R`.
pub fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl<T: Transport> RecordsApi for RestClient<T> {
    async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::students())).await
    }

    async fn get_student(&self, id: &str) -> Result<Student, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::student(id))).await
    }

    async fn create_student(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        self.fetch(Request::new(Method::Post, endpoints::students()).with_json(draft)?)
            .await
    }

    async fn update_student(&self, id: &str, update: &StudentUpdate) -> Result<Student, ApiError> {
        self.fetch(Request::new(Method::Put, endpoints::student(id)).with_json(update)?)
            .await
    }

    async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        self.discard(Request::new(Method::Delete, endpoints::student(id))).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::courses())).await
    }

    async fn get_course(&self, id: &str) -> Result<Course, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::course(id))).await
    }

    async fn create_course(&self, draft: &CourseDraft) -> Result<Course, ApiError> {
        self.fetch(Request::new(Method::Post, endpoints::courses()).with_json(draft)?)
            .await
    }

    async fn delete_course(&self, id: &str) -> Result<(), ApiError> {
        self.discard(Request::new(Method::Delete, endpoints::course(id))).await
    }

    async fn list_grades(&self, query: &[(&'static str, String)]) -> Result<Vec<Grade>, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::grades()).with_query(query.to_vec()))
            .await
    }

    async fn get_grade(&self, id: &str) -> Result<Grade, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::grade(id))).await
    }

    async fn create_grade(&self, draft: &GradeDraft) -> Result<Grade, ApiError> {
        self.fetch(Request::new(Method::Post, endpoints::grades()).with_json(draft)?)
            .await
    }

    async fn update_grade_score(&self, id: &str, score: f64) -> Result<Grade, ApiError> {
        self.fetch(
            Request::new(Method::Put, endpoints::grade(id)).with_query(endpoints::grade_score_query(score)),
        )
        .await
    }

    async fn delete_grade(&self, id: &str) -> Result<(), ApiError> {
        self.discard(Request::new(Method::Delete, endpoints::grade(id))).await
    }

    async fn students_summary(&self, query: &StudentSummaryQuery) -> Result<StudentsSummary, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::students_summary()).with_query(query.to_query()))
            .await
    }

    async fn courses_summary(&self) -> Result<CoursesSummary, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::courses_summary())).await
    }

    async fn grades_statistics(&self, query: &GradeStatisticsQuery) -> Result<GradeStatistics, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::grades_statistics()).with_query(query.to_query()))
            .await
    }

    async fn top_students(&self, limit: u32) -> Result<TopStudents, ApiError> {
        self.fetch(
            Request::new(Method::Get, endpoints::top_students()).with_query(endpoints::top_students_query(limit)),
        )
        .await
    }

    async fn student_progress(&self, student_id: &str) -> Result<StudentProgress, ApiError> {
        self.fetch(Request::new(Method::Get, endpoints::student_progress(student_id)))
            .await
    }
}
