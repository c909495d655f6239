//! Optional query constraints for list and report requests.
//!
//! Every field holds raw form input. An empty (or whitespace-only) field means
//! "no constraint" and is left out of the request entirely; it is never sent
//! as a literal empty value.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::{Deserialize, Serialize};

/// Server-side filter for `GET /grades`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeFilter {
    pub student_id: String,
    pub course_id: String,
    pub min_score: String,
    pub max_score: String,
}

impl GradeFilter {
    /// Query pairs for the active constraints, in a fixed order.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        collect_pairs(&[
            ("student_id", &self.student_id),
            ("course_id", &self.course_id),
            ("min_score", &self.min_score),
            ("max_score", &self.max_score),
        ])
    }

    /// Reset every constraint.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no constraint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

/// Filter for `GET /reports/students/summary`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentSummaryQuery {
    pub min_gpa: String,
    pub max_gpa: String,
}

impl StudentSummaryQuery {
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        collect_pairs(&[("min_gpa", &self.min_gpa), ("max_gpa", &self.max_gpa)])
    }
}

/// Filter for `GET /reports/grades/statistics`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GradeStatisticsQuery {
    pub student_id: String,
    pub course_id: String,
}

impl GradeStatisticsQuery {
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        collect_pairs(&[("student_id", &self.student_id), ("course_id", &self.course_id)])
    }
}

fn collect_pairs(fields: &[(&'static str, &String)]) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .filter_map(|(name, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (*name, value.to_owned()))
        })
        .collect()
}
