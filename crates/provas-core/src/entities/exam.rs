use serde::{Deserialize, Serialize};

use super::CategoryRef;

/// Aggregate counters the API attaches to an exam as `_count`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExamCount {
    #[serde(rename = "View")]
    pub views: u64,
}

/// A single shared exam document (a PDF link).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: u64,
    pub name: String,
    pub pdf_url: String,
    pub category: CategoryRef,
    #[serde(rename = "_count")]
    pub count: ExamCount,
}

impl Exam {
    /// Server-side view count at the time the exam was fetched.
    #[must_use]
    pub const fn view_count(&self) -> u64 {
        self.count.views
    }

    #[must_use]
    pub const fn is_in_category(&self, category_id: u64) -> bool {
        self.category.id == category_id
    }
}
