//! Peer-review participation records and review contents

use crate::ParseEnumError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A reviewer's identity in the shared reviewer pool.
///
/// Pool entries are immutable seed data. Assigning a reviewer copies the
/// profile into a [`ReviewerAssignment`], so later pool changes never
/// retroactively alter existing assignments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerProfile {
    /// Pool identifier, e.g. "rev-001".
    pub id: String,
    pub name: String,
    pub email: String,
    pub affiliation: Option<String>,
    /// Areas of expertise, used when matching reviewers to submissions.
    pub expertise: Vec<String>,
}

/// Status of a reviewer's participation on one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerStatus {
    /// Assigned, review not yet submitted.
    #[default]
    Pending,
    /// Review has been submitted to the editor.
    Submitted,
}

/// A reviewer's participation record on a specific submission.
///
/// Distinct from the reviewer's identity in the pool: the profile is a
/// copy taken at assignment time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewerAssignment {
    /// Copy of the pool profile at assignment time.
    pub reviewer: ReviewerProfile,
    pub status: ReviewerStatus,
    pub assigned_date: DateTime<Utc>,
    /// Set when the review is submitted.
    pub submitted_date: Option<DateTime<Utc>>,
    /// The submitted review, if any.
    pub review: Option<Review>,
}

impl ReviewerAssignment {
    /// Create a fresh pending assignment from a pool profile.
    pub fn new(reviewer: ReviewerProfile, assigned_date: DateTime<Utc>) -> Self {
        Self {
            reviewer,
            status: ReviewerStatus::Pending,
            assigned_date,
            submitted_date: None,
            review: None,
        }
    }
}

/// A reviewer's recommendation to the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Accept,
    MinorRevisions,
    MajorRevisions,
    RejectAndResubmit,
    Reject,
}

impl Recommendation {
    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::MinorRevisions => "Minor Revisions",
            Self::MajorRevisions => "Major Revisions",
            Self::RejectAndResubmit => "Reject and Resubmit",
            Self::Reject => "Reject",
        }
    }
}

impl FromStr for Recommendation {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(Self::Accept),
            "minor_revisions" => Ok(Self::MinorRevisions),
            "major_revisions" => Ok(Self::MajorRevisions),
            "reject_and_resubmit" => Ok(Self::RejectAndResubmit),
            "reject" => Ok(Self::Reject),
            other => Err(ParseEnumError::new("recommendation", other)),
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A submitted peer review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub recommendation: Recommendation,
    /// Confidential comments, editor eyes only.
    pub comments_to_editor: String,
    /// Comments intended for the author.
    pub comments_to_author: String,
    /// Whether the editor has released this review to the author.
    pub released_to_author: bool,
    /// Set when the review is released.
    pub released_date: Option<DateTime<Utc>>,
    /// Editor-edited replacement for the author-visible comments.
    pub editor_modified_comments: Option<String>,
    /// Attached markup file, e.g. an annotated manuscript.
    pub markup_file: Option<String>,
}

impl Review {
    /// Create an unreleased review.
    pub fn new(
        recommendation: Recommendation,
        comments_to_editor: impl Into<String>,
        comments_to_author: impl Into<String>,
    ) -> Self {
        Self {
            recommendation,
            comments_to_editor: comments_to_editor.into(),
            comments_to_author: comments_to_author.into(),
            released_to_author: false,
            released_date: None,
            editor_modified_comments: None,
            markup_file: None,
        }
    }

    /// Attach a markup file to the review.
    pub fn with_markup_file(mut self, filename: impl Into<String>) -> Self {
        self.markup_file = Some(filename.into());
        self
    }

    /// The comments the author should see: the editor-modified text when
    /// present, otherwise the reviewer's original comments to the author.
    pub fn author_visible_comments(&self) -> &str {
        self.editor_modified_comments
            .as_deref()
            .unwrap_or(&self.comments_to_author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_review_is_unreleased() {
        let review = Review::new(Recommendation::Accept, "fine", "well done");
        assert!(!review.released_to_author);
        assert!(review.released_date.is_none());
        assert_eq!(review.author_visible_comments(), "well done");
    }

    #[test]
    fn editor_modified_comments_take_precedence() {
        let mut review = Review::new(Recommendation::MajorRevisions, "weak", "needs work");
        review.editor_modified_comments = Some("please address the methods section".to_string());
        assert_eq!(
            review.author_visible_comments(),
            "please address the methods section"
        );
    }

    #[test]
    fn assignment_starts_pending() {
        let profile = ReviewerProfile {
            id: "rev-001".to_string(),
            name: "Dr. Reviewer".to_string(),
            email: "reviewer@example.edu".to_string(),
            affiliation: None,
            expertise: vec![],
        };
        let assignment = ReviewerAssignment::new(profile, Utc::now());
        assert_eq!(assignment.status, ReviewerStatus::Pending);
        assert!(assignment.review.is_none());
    }

    #[test]
    fn recommendation_parses_from_snake_case() {
        assert_eq!(
            "minor_revisions".parse::<Recommendation>().unwrap(),
            Recommendation::MinorRevisions
        );
        assert!("strong_accept".parse::<Recommendation>().is_err());
    }
}
