//! Per-row view-count state machine.
//!
//! Each rendered exam row owns one [`ViewCounter`], seeded from the exam's
//! server count. Opening the exam walks it through:
//!
//! ```text
//! idle → incrementing → refetching → idle      (count := server views)
//!              │             │
//!              └─────────────┴──→ failed → idle (count unchanged)
//! ```
//!
//! The transition function is pure; the network calls are made by a host
//! (see `provas-client`'s `ExamViewer`). Rows never share counters, even
//! when the same exam is rendered twice.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::Exam;

/// Where a row is in its open-exam cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Idle,
    Incrementing,
    Refetching,
    Failed,
}

impl ViewStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Incrementing],
            Self::Incrementing => &[Self::Refetching, Self::Failed],
            Self::Refetching => &[Self::Idle, Self::Failed],
            Self::Failed => &[Self::Idle, Self::Incrementing],
        }
    }

    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::Incrementing | Self::Refetching)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Incrementing => "incrementing",
            Self::Refetching => "refetching",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ViewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// The user asked to open the exam.
    Open,
    /// The increment request succeeded.
    Incremented,
    /// The refetch returned the authoritative count.
    Refetched { views: u64 },
    /// Either request failed.
    Failed,
    /// The failure was reported; return to idle.
    Dismiss,
}

/// A row's view counter and cycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCounter {
    pub status: ViewStatus,
    pub count: u64,
}

impl ViewCounter {
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self {
            status: ViewStatus::Idle,
            count,
        }
    }

    /// Seed a fresh row from the exam's server-side count.
    #[must_use]
    pub const fn seed(exam: &Exam) -> Self {
        Self::new(exam.view_count())
    }

    #[must_use]
    pub const fn apply(self, event: ViewEvent) -> Self {
        transition(self, event)
    }
}

/// Pure transition function.
///
/// Events that are not valid in the current status leave the state as is.
/// The count only moves on `Refetched`, where the server's value replaces it.
#[must_use]
pub const fn transition(state: ViewCounter, event: ViewEvent) -> ViewCounter {
    let count = state.count;
    match (state.status, event) {
        (ViewStatus::Idle | ViewStatus::Failed, ViewEvent::Open) => ViewCounter {
            status: ViewStatus::Incrementing,
            count,
        },
        (ViewStatus::Incrementing, ViewEvent::Incremented) => ViewCounter {
            status: ViewStatus::Refetching,
            count,
        },
        (ViewStatus::Refetching, ViewEvent::Refetched { views }) => ViewCounter {
            status: ViewStatus::Idle,
            count: views,
        },
        (ViewStatus::Incrementing | ViewStatus::Refetching, ViewEvent::Failed) => ViewCounter {
            status: ViewStatus::Failed,
            count,
        },
        (ViewStatus::Failed, ViewEvent::Dismiss) => ViewCounter {
            status: ViewStatus::Idle,
            count,
        },
        _ => state,
    }
}
