//! Built-in sample records shown when a list load fails.
//!
//! Identifiers use a `test-` prefix so sample rows are recognisable; the
//! backend never issues ids of that shape.

use crate::types::{Course, Grade, Student, letter_for_score};

const FIXTURE_DATE: &str = "2024-01-01T00:00:00";

#[must_use]
pub fn students() -> Vec<Student> {
    vec![
        Student {
            student_id: "test-1".to_owned(),
            name: "Ivan Ivanov".to_owned(),
            email: "ivan.ivanov@example.com".to_owned(),
            gpa: None,
            created_at: FIXTURE_DATE.to_owned(),
        },
        Student {
            student_id: "test-2".to_owned(),
            name: "Maria Petrova".to_owned(),
            email: "maria.petrova@example.com".to_owned(),
            gpa: None,
            created_at: FIXTURE_DATE.to_owned(),
        },
    ]
}

#[must_use]
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            course_id: "test-1".to_owned(),
            code: "CS101".to_owned(),
            name: "Programming".to_owned(),
            credits: 4,
        },
        Course {
            course_id: "test-2".to_owned(),
            code: "MATH201".to_owned(),
            name: "Mathematics".to_owned(),
            credits: 5,
        },
    ]
}

/// Sample grades referencing [`students`] and [`courses`].
#[must_use]
pub fn grades() -> Vec<Grade> {
    [("test-1", 85.0), ("test-2", 92.0)]
        .into_iter()
        .enumerate()
        .map(|(i, (student_id, score))| Grade {
            grade_id: format!("test-{}", i + 1),
            student_id: student_id.to_owned(),
            course_id: "test-1".to_owned(),
            score,
            letter_grade: letter_for_score(score).to_owned(),
            date: FIXTURE_DATE.to_owned(),
        })
        .collect()
}
