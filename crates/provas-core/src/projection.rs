//! Grouping projector: raw API payloads into the two browse views.
//!
//! The "by discipline" payload is already grouped term → discipline by the
//! server, so its projection is the identity. The "by teacher" payload is a
//! flat list of teacher assignments that has to be grouped by instructor.
//!
//! Instructors are grouped by **name**, not id: two assignments whose
//! `teacher.name` strings are equal land in the same [`TeacherView`] even if
//! their `teacher.id`s differ.

use std::collections::HashMap;

use serde::Serialize;

use crate::entities::{TeacherAssignment, TermView};

/// One instructor accordion: every assignment taught under this name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeacherView {
    pub name: String,
    pub assignments: Vec<TeacherAssignment>,
}

impl TeacherView {
    /// Assignments in scope for this instructor's category index.
    #[must_use]
    pub fn scope(&self) -> &[TeacherAssignment] {
        &self.assignments
    }
}

/// Pass the term-grouped payload through unchanged, in server order.
#[must_use]
pub fn project_by_discipline(terms: Vec<TermView>) -> Vec<TermView> {
    terms
}

/// Group assignments into one view per distinct teacher name.
///
/// Views come out in first-occurrence order of the name; assignments keep
/// their input order within a view. Every input assignment ends up in exactly
/// one view.
#[must_use]
pub fn project_by_teacher(assignments: Vec<TeacherAssignment>) -> Vec<TeacherView> {
    let mut views: Vec<TeacherView> = Vec::new();
    let mut slot_by_name: HashMap<String, usize> = HashMap::new();

    for assignment in assignments {
        if let Some(&slot) = slot_by_name.get(&assignment.teacher.name) {
            views[slot].assignments.push(assignment);
            continue;
        }
        slot_by_name.insert(assignment.teacher.name.clone(), views.len());
        views.push(TeacherView {
            name: assignment.teacher.name.clone(),
            assignments: vec![assignment],
        });
    }

    views
}

/// Distinct teacher names in first-occurrence order.
#[must_use]
pub fn unique_teacher_names(assignments: &[TeacherAssignment]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for assignment in assignments {
        let name = assignment.teacher.name.as_str();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
