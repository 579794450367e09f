//! Copy-editing participation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A copy editor's identity in the shared pool.
///
/// Like reviewer profiles, pool entries are immutable seed data and are
/// copied into assignments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyEditorProfile {
    /// Pool identifier, e.g. "ce-001".
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Status of a copy editor's work on one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyEditStatus {
    #[default]
    Assigned,
    InProgress,
    Completed,
}

impl CopyEditStatus {
    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// A copy editor's participation record on a specific submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CopyEditorAssignment {
    /// Copy of the pool profile at assignment time.
    pub editor: CopyEditorProfile,
    pub status: CopyEditStatus,
    pub assigned_date: DateTime<Utc>,
    /// Set when the copy edit is completed.
    pub completed_date: Option<DateTime<Utc>>,
}

impl CopyEditorAssignment {
    /// Create a fresh assignment from a pool profile.
    pub fn new(editor: CopyEditorProfile, assigned_date: DateTime<Utc>) -> Self {
        Self {
            editor,
            status: CopyEditStatus::Assigned,
            assigned_date,
            completed_date: None,
        }
    }
}
