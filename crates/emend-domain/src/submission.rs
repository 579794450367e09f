//! Submission tracking for manuscripts in the editorial workflow

use crate::activity::ActivityEntry;
use crate::copyedit::CopyEditorAssignment;
use crate::file_version::FileVersion;
use crate::review::ReviewerAssignment;
use crate::ParseEnumError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A manuscript submission tracked through the editorial workflow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Journal-assigned identifier, e.g. "2024-034".
    pub id: String,
    pub title: String,
    pub abstract_text: String,

    /// Corresponding author identity.
    pub author_name: String,
    pub author_email: String,
    pub author_affiliation: Option<String>,

    /// Current workflow status.
    pub status: SubmissionStatus,
    pub content_type: ContentType,

    /// Version number of the latest manuscript file.
    pub current_version: u32,
    pub submitted_date: DateTime<Utc>,

    /// Peer reviewers attached to this submission, in assignment order.
    pub assigned_reviewers: Vec<ReviewerAssignment>,
    /// Copy editors attached to this submission, in assignment order.
    pub copy_editors: Vec<CopyEditorAssignment>,

    /// Handling editor, if one has been assigned.
    pub editor_name: Option<String>,
    pub editor_notes: Option<String>,

    /// Uploaded files, oldest first.
    pub files: Vec<FileVersion>,

    /// Seed activity log for this submission, oldest first.
    pub activity: Vec<ActivityEntry>,
}

/// Workflow status of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
    InDeskReview,
    InPeerReview,
    RevisionsRequested,
    RevisionsSubmitted,
    Accepted,
    InCopyEditing,
    ReadyForProduction,
    Published,
    Rejected,
}

impl SubmissionStatus {
    /// All statuses, in canonical workflow order.
    pub const ALL: [SubmissionStatus; 10] = [
        Self::Submitted,
        Self::InDeskReview,
        Self::InPeerReview,
        Self::RevisionsRequested,
        Self::RevisionsSubmitted,
        Self::Accepted,
        Self::InCopyEditing,
        Self::ReadyForProduction,
        Self::Published,
        Self::Rejected,
    ];

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::InDeskReview => "In Desk Review",
            Self::InPeerReview => "In Peer Review",
            Self::RevisionsRequested => "Revisions Requested",
            Self::RevisionsSubmitted => "Revisions Submitted",
            Self::Accepted => "Accepted",
            Self::InCopyEditing => "In Copy Editing",
            Self::ReadyForProduction => "Ready for Production",
            Self::Published => "Published",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether the submission has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Published | Self::Rejected)
    }

    /// Whether the submission is in the copy-editing phase or later
    /// (excluding rejection).
    pub fn in_copy_editing_phase(&self) -> bool {
        matches!(
            self,
            Self::InCopyEditing | Self::ReadyForProduction | Self::Published
        )
    }
}

impl FromStr for SubmissionStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(Self::Submitted),
            "in_desk_review" => Ok(Self::InDeskReview),
            "in_peer_review" => Ok(Self::InPeerReview),
            "revisions_requested" => Ok(Self::RevisionsRequested),
            "revisions_submitted" => Ok(Self::RevisionsSubmitted),
            "accepted" => Ok(Self::Accepted),
            "in_copy_editing" => Ok(Self::InCopyEditing),
            "ready_for_production" => Ok(Self::ReadyForProduction),
            "published" => Ok(Self::Published),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseEnumError::new("submission status", other)),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind of content a submission carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    ResearchArticle,
    ReviewArticle,
    CaseStudy,
    Editorial,
    LetterToEditor,
    BookReview,
}

impl ContentType {
    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ResearchArticle => "Research Article",
            Self::ReviewArticle => "Review Article",
            Self::CaseStudy => "Case Study",
            Self::Editorial => "Editorial",
            Self::LetterToEditor => "Letter to the Editor",
            Self::BookReview => "Book Review",
        }
    }
}

impl FromStr for ContentType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "research_article" => Ok(Self::ResearchArticle),
            "review_article" => Ok(Self::ReviewArticle),
            "case_study" => Ok(Self::CaseStudy),
            "editorial" => Ok(Self::Editorial),
            "letter_to_editor" => Ok(Self::LetterToEditor),
            "book_review" => Ok(Self::BookReview),
            other => Err(ParseEnumError::new("content type", other)),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Submission {
    /// Whether every assigned reviewer has submitted their review.
    /// False when no reviewers are assigned.
    pub fn all_reviews_submitted(&self) -> bool {
        !self.assigned_reviewers.is_empty()
            && self
                .assigned_reviewers
                .iter()
                .all(|r| r.status == crate::review::ReviewerStatus::Submitted)
    }

    /// Count of reviews released to the author.
    pub fn released_review_count(&self) -> usize {
        self.assigned_reviewers
            .iter()
            .filter(|r| r.review.as_ref().is_some_and(|rv| rv.released_to_author))
            .count()
    }

    /// Count of submitted (not necessarily released) reviews.
    pub fn submitted_review_count(&self) -> usize {
        self.assigned_reviewers
            .iter()
            .filter(|r| r.status == crate::review::ReviewerStatus::Submitted)
            .count()
    }
}
