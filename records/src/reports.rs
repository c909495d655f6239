//! Aggregate report payloads served under `/reports`.
//!
//! The backend computes every figure; these types only carry them.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// `GET /reports/students/summary`, sorted by GPA descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentsSummary {
    pub total_students: u32,
    pub students: Vec<StudentSummaryRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentSummaryRow {
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub grades_count: u32,
    pub average_score: f64,
    pub gpa: f64,
    pub created_at: String,
}

/// `GET /reports/courses/summary`, sorted by grade count descending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoursesSummary {
    pub total_courses: u32,
    pub courses: Vec<CourseSummaryRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseSummaryRow {
    pub course_id: String,
    pub code: String,
    pub name: String,
    pub credits: u8,
    pub grades_count: u32,
    pub average_score: f64,
    /// Count of grades per letter band (`A`..`F`).
    pub grade_distribution: BTreeMap<String, u32>,
}

/// `GET /reports/grades/statistics`.
///
/// When no grade matches, only `total_grades` (zero) and `message` are set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeStatistics {
    pub total_grades: u32,
    #[serde(default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub grade_distribution: Option<BTreeMap<String, u32>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /reports/top/students?limit=`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopStudents {
    pub limit: u32,
    pub students: Vec<TopStudentRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopStudentRow {
    pub student_id: String,
    pub name: String,
    pub email: String,
    /// Zero when the student has no grades.
    pub gpa: f64,
    pub created_at: String,
}

/// `GET /reports/student/{id}/progress`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentProgress {
    pub student_id: String,
    pub student_name: String,
    pub total_courses: u32,
    pub courses_completed: u32,
    pub total_credits: u32,
    /// Credit-weighted average score over completed courses.
    pub weighted_average: f64,
    #[serde(default)]
    pub gpa: Option<f64>,
    pub progress: Vec<CourseProgress>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    pub course_id: String,
    pub course_code: String,
    pub course_name: String,
    pub credits: u8,
    pub grades_count: u32,
    pub average_score: f64,
    pub status: ProgressStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Completed,
    NotStarted,
}

impl StudentProgress {
    /// Courses the student has at least one grade in.
    pub fn completed(&self) -> impl Iterator<Item = &CourseProgress> {
        self.progress
            .iter()
            .filter(|p| p.status == ProgressStatus::Completed)
    }
}
