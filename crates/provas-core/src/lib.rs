//! # provas-core
//!
//! Domain types and pure view logic for the provas exam-sharing client.
//!
//! Nothing in this crate performs I/O. It provides:
//! - Entity structs for the API payloads (terms, disciplines, teacher
//!   assignments, exams, categories)
//! - The grouping projector that turns raw payloads into the
//!   "by discipline" and "by teacher" views
//! - The category/exam index that decides which categories are shown
//! - The per-row view-count state machine
//! - The single-slot alert bus used to report failures to the user
//! - Exam registration form rules

pub mod alert;
pub mod entities;
pub mod errors;
pub mod form;
pub mod index;
pub mod lenient;
pub mod projection;
pub mod views;
