//! Append-only per-submission activity log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tag classifying an activity entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Marks the submission entering a new workflow stage. The timeline
    /// display groups subsequent entries under the latest such marker.
    StageChange,
    /// Reviewer or copy-editor assignment.
    Assignment,
    /// Review submitted, released, or edited.
    ReviewEvent,
    /// File uploaded or replaced.
    FileEvent,
    /// Free-form editorial note.
    Note,
}

/// One line in a submission's activity log. Entries are append-only and
/// ordered by insertion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    /// Who performed the action, when known.
    pub actor: Option<String>,
    pub kind: Option<ActivityKind>,
    /// Linked file, for upload events.
    pub file_id: Option<String>,
}

impl ActivityEntry {
    /// Create an entry stamped now with a random id.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            description: description.into(),
            actor: None,
            kind: None,
            file_id: None,
        }
    }

    /// Create an entry with an explicit timestamp (seed data).
    pub fn at(date: DateTime<Utc>, description: impl Into<String>) -> Self {
        Self {
            date,
            ..Self::new(description)
        }
    }

    /// Set the actor.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Set the kind tag.
    pub fn with_kind(mut self, kind: ActivityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Link a file to the entry.
    pub fn with_file(mut self, file_id: impl Into<String>) -> Self {
        self.file_id = Some(file_id.into());
        self
    }
}

/// Activity entries grouped under one stage marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageGroup {
    /// The stage-change entry heading this group, or `None` for entries
    /// preceding the first marker.
    pub stage: Option<ActivityEntry>,
    pub entries: Vec<ActivityEntry>,
}

/// Group insertion-ordered entries under the most recent preceding
/// stage-change marker.
///
/// Entries before the first marker form a leading group with no stage.
/// The marker itself heads its group and is not repeated in `entries`.
pub fn group_by_stage(entries: &[ActivityEntry]) -> Vec<StageGroup> {
    let mut groups: Vec<StageGroup> = Vec::new();

    for entry in entries {
        if entry.kind == Some(ActivityKind::StageChange) {
            groups.push(StageGroup {
                stage: Some(entry.clone()),
                entries: Vec::new(),
            });
            continue;
        }
        match groups.last_mut() {
            Some(group) => group.entries.push(entry.clone()),
            None => groups.push(StageGroup {
                stage: None,
                entries: vec![entry.clone()],
            }),
        }
    }

    groups
}
