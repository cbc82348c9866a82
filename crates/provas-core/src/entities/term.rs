use serde::{Deserialize, Serialize};

use super::Discipline;

/// An academic period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Term {
    pub id: u64,
    pub number: u32,
}

/// A term together with its disciplines, as returned by
/// `GET /tests?groupBy=disciplines`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermView {
    pub id: u64,
    pub number: u32,
    #[serde(default, deserialize_with = "crate::lenient::records")]
    pub disciplines: Vec<Discipline>,
}

impl TermView {
    pub const EMPTY_MESSAGE: &'static str = "Nenhuma prova para esse período...";

    #[must_use]
    pub const fn term(&self) -> Term {
        Term {
            id: self.id,
            number: self.number,
        }
    }

    /// Accordion heading, e.g. `"3 Período"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} Período", self.number)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disciplines.is_empty()
    }
}
