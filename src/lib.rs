//! Consistency engine for clinical visit-scheduling decision graphs.
//!
//! Load a workspace with [`model::parse`], check it with
//! [`validate::validate`], and export it with [`export::export`].

pub mod error;
pub mod export;
pub mod model;
pub mod validate;
pub mod wasm;

pub use error::Error;
pub use model::types::Workspace;
pub use validate::{Issue, IssueCode, IssueKind, validate};
