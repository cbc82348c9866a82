use serde::{Deserialize, Serialize};

/// A classification tag for exams (e.g. midterm, quiz).
///
/// The taxonomy is fixed and server-supplied; its order is the server's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// The category reference carried by an exam. Only `id` is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CategoryRef {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
