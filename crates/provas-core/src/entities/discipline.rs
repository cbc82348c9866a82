use serde::{Deserialize, Serialize};

use super::{Exam, Teacher, Term};

/// A course within a term, owning its teacher assignments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Discipline {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<Term>,
    #[serde(
        rename = "teacherDisciplines",
        default,
        deserialize_with = "crate::lenient::records"
    )]
    pub assignments: Vec<TeacherAssignment>,
}

impl Discipline {
    pub const EMPTY_MESSAGE: &'static str = "Nenhuma prova para essa disciplina...";
}

/// A discipline as referenced from a teacher assignment (no back-links).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisciplineRef {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<Term>,
}

/// One instructor teaching one discipline, with the exams produced under
/// that pairing. `tests` may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeacherAssignment {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<DisciplineRef>,
    pub teacher: Teacher,
    #[serde(default, deserialize_with = "crate::lenient::records")]
    pub tests: Vec<Exam>,
}

impl TeacherAssignment {
    /// Discipline name, or `""` when the payload did not embed the discipline.
    #[must_use]
    pub fn discipline_name(&self) -> &str {
        self.discipline.as_ref().map_or("", |d| d.name.as_str())
    }

    #[must_use]
    pub fn has_exam_in(&self, category_id: u64) -> bool {
        self.tests.iter().any(|exam| exam.is_in_category(category_id))
    }
}
