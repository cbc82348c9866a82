//! Entity structs for the exam API payloads.
//!
//! Field names follow the API's camelCase JSON. Nested collections decode
//! through [`crate::lenient::records`], so one malformed exam or assignment
//! is dropped instead of failing the page.

mod category;
mod discipline;
mod exam;
mod teacher;
mod term;

pub use category::{Category, CategoryRef};
pub use discipline::{Discipline, DisciplineRef, TeacherAssignment};
pub use exam::{Exam, ExamCount};
pub use teacher::Teacher;
pub use term::{Term, TermView};
