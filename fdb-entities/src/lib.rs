#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # fdb-entities
//!
//! Reusable, agnostic domain entities for feedbackdb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod course;
pub mod feedback;
pub mod id;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
