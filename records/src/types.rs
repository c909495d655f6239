//! Entity shapes exchanged with the records backend.
//!
//! Field names match the backend's JSON exactly. Identifiers are always
//! backend-assigned strings; nothing in this crate generates one outside of
//! the built-in fixtures.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Lowest credit count a course may carry.
pub const MIN_CREDITS: u8 = 1;
/// Highest credit count a course may carry.
pub const MAX_CREDITS: u8 = 10;
/// Credit count pre-filled in a new course draft.
pub const DEFAULT_CREDITS: u8 = 3;
/// Lowest valid numeric score.
pub const MIN_SCORE: f64 = 0.0;
/// Highest valid numeric score.
pub const MAX_SCORE: f64 = 100.0;

/// A student as returned by `GET /students`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Backend-assigned identifier (UUID string).
    pub student_id: String,
    pub name: String,
    pub email: String,
    /// Grade-point average on the backend's 5-point scale; absent until the
    /// student has grades.
    #[serde(default)]
    pub gpa: Option<f64>,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// A course as returned by `GET /courses`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Backend-assigned identifier (UUID string).
    pub course_id: String,
    /// Short catalogue code such as `CS101`.
    pub code: String,
    pub name: String,
    pub credits: u8,
}

/// A grade as returned by `GET /grades`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Backend-assigned identifier (UUID string).
    pub grade_id: String,
    /// Foreign key into the student list.
    pub student_id: String,
    /// Foreign key into the course list.
    pub course_id: String,
    /// Numeric score in `0..=100`; fractional values allowed.
    pub score: f64,
    /// Letter grade derived by the backend from `score`.
    pub letter_grade: String,
    /// ISO-8601 timestamp of when the grade was recorded.
    pub date: String,
}

/// Editable student fields backing the create/edit dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
}

/// Partial student body for `PUT /students/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Editable course fields backing the create dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub code: String,
    pub name: String,
    pub credits: u8,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            credits: DEFAULT_CREDITS,
        }
    }
}

/// Grade fields backing the create/edit dialog.
///
/// Only `score` is sent when editing; the references are fixed once the
/// grade exists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeDraft {
    pub student_id: String,
    pub course_id: String,
    pub score: f64,
}

impl Student {
    /// Project the editable fields into a dialog draft.
    #[must_use]
    pub fn draft(&self) -> StudentDraft {
        StudentDraft {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl Course {
    /// Project the editable fields into a dialog draft.
    #[must_use]
    pub fn draft(&self) -> CourseDraft {
        CourseDraft {
            code: self.code.clone(),
            name: self.name.clone(),
            credits: self.credits,
        }
    }
}

impl Grade {
    /// Project the dialog fields into a draft.
    #[must_use]
    pub fn draft(&self) -> GradeDraft {
        GradeDraft {
            student_id: self.student_id.clone(),
            course_id: self.course_id.clone(),
            score: self.score,
        }
    }
}

impl StudentDraft {
    /// Check the draft before it is sent.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_owned());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_owned());
        }
        if !email.contains('@') {
            return Err("Email must contain '@'".to_owned());
        }
        Ok(())
    }

    /// Full-replacement update body built from this draft.
    #[must_use]
    pub fn to_update(&self) -> StudentUpdate {
        StudentUpdate {
            name: Some(self.name.trim().to_owned()),
            email: Some(self.email.trim().to_owned()),
        }
    }

    /// Copy of the draft with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
        }
    }
}

impl CourseDraft {
    /// Check the draft before it is sent.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Course code is required".to_owned());
        }
        if self.name.trim().is_empty() {
            return Err("Course name is required".to_owned());
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&self.credits) {
            return Err(format!("Credits must be between {MIN_CREDITS} and {MAX_CREDITS}"));
        }
        Ok(())
    }

    /// Copy of the draft with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            code: self.code.trim().to_owned(),
            name: self.name.trim().to_owned(),
            credits: self.credits,
        }
    }
}

impl GradeDraft {
    /// Check the draft before it is sent.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.student_id.trim().is_empty() {
            return Err("Select a student".to_owned());
        }
        if self.course_id.trim().is_empty() {
            return Err("Select a course".to_owned());
        }
        validate_score(self.score)
    }
}

/// Check a score against the accepted `0..=100` range.
///
/// # Errors
///
/// Returns a user-facing message when the score is out of range or not finite.
pub fn validate_score(score: f64) -> Result<(), String> {
    if !score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(format!("Score must be between {MIN_SCORE} and {MAX_SCORE}"));
    }
    Ok(())
}

/// Letter grade band for a numeric score, on the backend's 5-point scale.
///
/// The backend is authoritative for stored grades; this is used for
/// fixtures and report legends.
#[must_use]
pub fn letter_for_score(score: f64) -> &'static str {
    if score >= 90.0 {
        "5"
    } else if score >= 80.0 {
        "4"
    } else if score >= 70.0 {
        "3"
    } else if score >= 60.0 {
        "2"
    } else {
        "1"
    }
}
