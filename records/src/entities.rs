//! [`Entity`] bindings for the three admin pages.

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;

use async_trait::async_trait;

use crate::api::{QueryPairs, RecordsApi};
use crate::error::ApiError;
use crate::fixtures;
use crate::query::GradeFilter;
use crate::types::{Course, CourseDraft, Grade, GradeDraft, Student, StudentDraft};
use crate::workflow::{Entity, Mutation};

#[async_trait(?Send)]
impl Entity for Student {
    type Draft = StudentDraft;
    type Filter = ();
    type Lookups = ();

    const NOUN: &'static str = "student";
    const NOUN_PLURAL: &'static str = "students";
    const TITLE: &'static str = "Student";

    fn id(&self) -> &str {
        &self.student_id
    }

    fn draft(&self) -> StudentDraft {
        Student::draft(self)
    }

    fn validate(draft: &StudentDraft) -> Result<(), String> {
        draft.validate()
    }

    fn query(_filter: &()) -> QueryPairs {
        Vec::new()
    }

    fn fixtures() -> (Vec<Self>, ()) {
        (fixtures::students(), ())
    }

    async fn list<A: RecordsApi + ?Sized>(api: &A, _query: &[(&'static str, String)]) -> Result<(Vec<Self>, ()), ApiError> {
        Ok((api.list_students().await?, ()))
    }

    async fn execute<A: RecordsApi + ?Sized>(api: &A, mutation: &Mutation<Self>) -> Result<(), ApiError> {
        match mutation {
            Mutation::Create(draft) => api.create_student(&draft.trimmed()).await.map(drop),
            Mutation::Update { id, draft } => api.update_student(id, &draft.to_update()).await.map(drop),
        }
    }

    async fn remove<A: RecordsApi + ?Sized>(api: &A, id: &str) -> Result<(), ApiError> {
        api.delete_student(id).await
    }
}

#[async_trait(?Send)]
impl Entity for Course {
    type Draft = CourseDraft;
    type Filter = ();
    type Lookups = ();

    const NOUN: &'static str = "course";
    const NOUN_PLURAL: &'static str = "courses";
    const TITLE: &'static str = "Course";

    fn id(&self) -> &str {
        &self.course_id
    }

    fn draft(&self) -> CourseDraft {
        Course::draft(self)
    }

    fn validate(draft: &CourseDraft) -> Result<(), String> {
        draft.validate()
    }

    fn query(_filter: &()) -> QueryPairs {
        Vec::new()
    }

    fn fixtures() -> (Vec<Self>, ()) {
        (fixtures::courses(), ())
    }

    async fn list<A: RecordsApi + ?Sized>(api: &A, _query: &[(&'static str, String)]) -> Result<(Vec<Self>, ()), ApiError> {
        Ok((api.list_courses().await?, ()))
    }

    /// The backend has no course update route, so edits fail without a request.
    async fn execute<A: RecordsApi + ?Sized>(api: &A, mutation: &Mutation<Self>) -> Result<(), ApiError> {
        match mutation {
            Mutation::Create(draft) => api.create_course(&draft.trimmed()).await.map(drop),
            Mutation::Update { .. } => Err(ApiError::Unsupported("Course updates are not supported")),
        }
    }

    async fn remove<A: RecordsApi + ?Sized>(api: &A, id: &str) -> Result<(), ApiError> {
        api.delete_course(id).await
    }
}

/// Students and courses loaded with the grade list to resolve references.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GradeLookups {
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
}

impl GradeLookups {
    /// Display name for a student reference; the raw id when not loaded.
    #[must_use]
    pub fn student_name(&self, student_id: &str) -> String {
        self.students
            .iter()
            .find(|s| s.student_id == student_id)
            .map_or_else(|| student_id.to_owned(), |s| s.name.clone())
    }

    /// Display label for a course reference; the raw id when not loaded.
    #[must_use]
    pub fn course_label(&self, course_id: &str) -> String {
        self.courses
            .iter()
            .find(|c| c.course_id == course_id)
            .map_or_else(|| course_id.to_owned(), |c| format!("{} ({})", c.name, c.code))
    }
}

#[async_trait(?Send)]
impl Entity for Grade {
    type Draft = GradeDraft;
    type Filter = GradeFilter;
    type Lookups = GradeLookups;

    const NOUN: &'static str = "grade";
    const NOUN_PLURAL: &'static str = "grades";
    const TITLE: &'static str = "Grade";

    fn id(&self) -> &str {
        &self.grade_id
    }

    fn draft(&self) -> GradeDraft {
        Grade::draft(self)
    }

    fn validate(draft: &GradeDraft) -> Result<(), String> {
        draft.validate()
    }

    fn query(filter: &GradeFilter) -> QueryPairs {
        filter.to_query()
    }

    fn fixtures() -> (Vec<Self>, GradeLookups) {
        let lookups = GradeLookups {
            students: fixtures::students(),
            courses: fixtures::courses(),
        };
        (fixtures::grades(), lookups)
    }

    /// Grades, students, and courses are fetched concurrently; any failure
    /// fails the whole load.
    async fn list<A: RecordsApi + ?Sized>(
        api: &A,
        query: &[(&'static str, String)],
    ) -> Result<(Vec<Self>, GradeLookups), ApiError> {
        let (grades, students, courses) =
            futures::try_join!(api.list_grades(query), api.list_students(), api.list_courses())?;
        Ok((grades, GradeLookups { students, courses }))
    }

    /// Edits send only the score; student and course references are fixed.
    async fn execute<A: RecordsApi + ?Sized>(api: &A, mutation: &Mutation<Self>) -> Result<(), ApiError> {
        match mutation {
            Mutation::Create(draft) => api.create_grade(draft).await.map(drop),
            Mutation::Update { id, draft } => api.update_grade_score(id, draft.score).await.map(drop),
        }
    }

    async fn remove<A: RecordsApi + ?Sized>(api: &A, id: &str) -> Result<(), ApiError> {
        api.delete_grade(id).await
    }
}
