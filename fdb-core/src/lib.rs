//! # fdb-core
//!
//! Business rules for feedback response comments: the repository
//! contracts of all collaborators, field validation and the use cases.

pub mod db;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use fdb_entities::{comment::*, course::*, feedback::*, id::*, time::*};
}
