use serde::{Deserialize, Serialize};

/// An instructor. Identity is `id`; display grouping is by `name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Teacher {
    pub id: u64,
    pub name: String,
}
