//! Category/exam index: which categories to show for a set of assignments,
//! and which exam rows go under each.
//!
//! A *scope* is the set of assignments behind one accordion: a discipline's
//! assignments in the Disciplines view, or one instructor's assignments in
//! the Instructors view. Scopes accept both owned and borrowed assignments.
//!
//! Exams whose category is not in the taxonomy are never shown. That is not
//! an error.

use std::borrow::Borrow;

use serde::Serialize;

use crate::entities::{Category, Exam, TeacherAssignment};
use crate::errors::CoreError;

fn as_assignment<A: Borrow<TeacherAssignment>>(assignment: &A) -> &TeacherAssignment {
    assignment.borrow()
}

/// Categories with at least one exam in `scope`, in taxonomy order.
///
/// An empty scope returns immediately without consulting the categories.
pub fn visible_categories<'c, A>(categories: &'c [Category], scope: &[A]) -> Vec<&'c Category>
where
    A: Borrow<TeacherAssignment>,
{
    if scope.is_empty() {
        return Vec::new();
    }
    categories
        .iter()
        .filter(|category| {
            scope
                .iter()
                .any(|assignment| as_assignment(assignment).has_exam_in(category.id))
        })
        .collect()
}

/// Which secondary label an exam row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabel {
    /// Disciplines view: `"P1 (Ana)"`.
    Teacher,
    /// Instructors view: `"P1 (Cálculo)"`.
    Discipline,
}

/// One rendered exam line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExamRow<'a> {
    pub exam: &'a Exam,
    pub label: &'a str,
}

impl ExamRow<'_> {
    #[must_use]
    pub fn title(&self) -> String {
        if self.label.is_empty() {
            self.exam.name.clone()
        } else {
            format!("{} ({})", self.exam.name, self.label)
        }
    }
}

/// Every exam in `scope` filed under `category_id`, in assignment then exam
/// order.
pub fn exams_in_category<A>(scope: &[A], category_id: u64, label: RowLabel) -> Vec<ExamRow<'_>>
where
    A: Borrow<TeacherAssignment>,
{
    scope
        .iter()
        .map(as_assignment)
        .flat_map(|assignment| {
            let label = match label {
                RowLabel::Teacher => assignment.teacher.name.as_str(),
                RowLabel::Discipline => assignment.discipline_name(),
            };
            assignment
                .tests
                .iter()
                .filter(move |exam| exam.is_in_category(category_id))
                .map(move |exam| ExamRow { exam, label })
        })
        .collect()
}

/// A visible category and its rows.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategorySection<'a> {
    pub category: &'a Category,
    pub rows: Vec<ExamRow<'a>>,
}

/// Content of one accordion body.
///
/// `NoExams` (no assignments at all) is distinct from an empty
/// `Categories` list (assignments exist but none of their exams match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sections<'a> {
    NoExams,
    Categories(Vec<CategorySection<'a>>),
}

/// Build the sections shown for one scope.
pub fn category_sections<'a, A>(
    categories: &'a [Category],
    scope: &'a [A],
    label: RowLabel,
) -> Sections<'a>
where
    A: Borrow<TeacherAssignment>,
{
    if scope.is_empty() {
        return Sections::NoExams;
    }
    let sections = visible_categories(categories, scope)
        .into_iter()
        .map(|category| CategorySection {
            category,
            rows: exams_in_category(scope, category.id, label),
        })
        .collect();
    Sections::Categories(sections)
}

/// Find an exam by id across a set of assignments.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] when no assignment holds the exam.
pub fn find_exam<A>(assignments: &[A], exam_id: u64) -> Result<&Exam, CoreError>
where
    A: Borrow<TeacherAssignment>,
{
    assignments
        .iter()
        .flat_map(|assignment| as_assignment(assignment).tests.iter())
        .find(|exam| exam.id == exam_id)
        .ok_or_else(|| CoreError::NotFound {
            entity_type: String::from("exam"),
            id: exam_id.to_string(),
        })
}
