//! Viewer roles for the editorial workflow

use crate::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The role a user is acting under. Visibility rules in emend-workflow
/// branch on this together with submission status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Author,
    Reviewer,
    CopyEditor,
    ManagingEditor,
    Admin,
}

impl Role {
    /// All roles.
    pub const ALL: [Role; 5] = [
        Self::Author,
        Self::Reviewer,
        Self::CopyEditor,
        Self::ManagingEditor,
        Self::Admin,
    ];

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Reviewer => "Reviewer",
            Self::CopyEditor => "Copy Editor",
            Self::ManagingEditor => "Managing Editor",
            Self::Admin => "Admin",
        }
    }

    /// Whether this role carries editorial authority (sees all
    /// submissions, may take editor actions).
    pub fn is_editorial(&self) -> bool {
        matches!(self, Self::ManagingEditor | Self::Admin)
    }
}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(Self::Author),
            "reviewer" => Ok(Self::Reviewer),
            "copy_editor" => Ok(Self::CopyEditor),
            "managing_editor" => Ok(Self::ManagingEditor),
            "admin" => Ok(Self::Admin),
            other => Err(ParseEnumError::new("role", other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
