//! Editorial domain types shared across the emend suite
//!
//! This crate provides the canonical domain models for a journal's
//! submission/review/copy-editing pipeline:
//! - Submission: a manuscript tracked through the editorial workflow
//! - ReviewerAssignment / Review: peer-review participation and its outcome
//! - CopyEditorAssignment: copy-editing participation
//! - ActivityEntry: append-only per-submission activity log
//! - FileVersion: uploaded manuscript files and their revisions
//! - Role: the viewer's role, used by the visibility rules in emend-workflow
//! - Validation: field-level checks for the submission intake form

pub mod activity;
pub mod copyedit;
pub mod file_version;
pub mod review;
pub mod role;
pub mod submission;
pub mod validation;

pub use activity::*;
pub use copyedit::*;
pub use file_version::*;
pub use review::*;
pub use role::*;
pub use submission::*;
pub use validation::*;

use thiserror::Error;

/// Error returned when parsing a domain enum from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind}: {value}")]
pub struct ParseEnumError {
    /// Which enum failed to parse (e.g. "submission status").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
