//! Exam registration form rules and option lists.

use serde::{Deserialize, Serialize};

use crate::entities::{Category, Discipline};
use crate::errors::CoreError;
use crate::projection::unique_teacher_names;

/// Body of `POST /tests`. Category, discipline and teacher are display
/// names, not ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewExam {
    pub name: String,
    pub pdf_url: String,
    pub category: String,
    pub discipline: String,
    pub teacher: String,
}

impl NewExam {
    /// Names of the fields that are empty or whitespace-only.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("pdfUrl", &self.pdf_url),
            ("category", &self.category),
            ("discipline", &self.discipline),
            ("teacher", &self.teacher),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check that every field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the blank fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Teacher names offered for a discipline, one per distinct name, as in the
/// Instructors view.
///
/// Uses the first discipline with a matching name; an unknown discipline
/// yields no options.
#[must_use]
pub fn teachers_for_discipline(disciplines: &[Discipline], discipline_name: &str) -> Vec<String> {
    let Some(discipline) = disciplines.iter().find(|d| d.name == discipline_name) else {
        return Vec::new();
    };
    unique_teacher_names(&discipline.assignments)
        .into_iter()
        .map(String::from)
        .collect()
}

#[must_use]
pub fn category_names(categories: &[Category]) -> Vec<&str> {
    categories.iter().map(|c| c.name.as_str()).collect()
}

#[must_use]
pub fn discipline_names(disciplines: &[Discipline]) -> Vec<&str> {
    disciplines.iter().map(|d| d.name.as_str()).collect()
}
