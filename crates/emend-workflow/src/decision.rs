//! Editor decisions and the fixed decision → status table

use emend_domain::SubmissionStatus;
use serde::{Deserialize, Serialize};

/// A decision an editor can record on a submission.
///
/// Each decision maps to exactly one resulting status through a fixed
/// table; the store applies the status without validating the transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorDecision {
    Accept,
    RequestRevisions,
    Reject,
    DeskReject,
    SkipToCopyEditing,
}

impl EditorDecision {
    /// All decisions, in the order the action UI lists them.
    pub const ALL: [EditorDecision; 5] = [
        Self::Accept,
        Self::RequestRevisions,
        Self::Reject,
        Self::DeskReject,
        Self::SkipToCopyEditing,
    ];

    /// Parse a decision keyword. Unknown keywords yield `None`; callers
    /// are expected to drop them silently.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "accept" => Some(Self::Accept),
            "request_revisions" => Some(Self::RequestRevisions),
            "reject" => Some(Self::Reject),
            "desk_reject" => Some(Self::DeskReject),
            "skip_to_copy_editing" => Some(Self::SkipToCopyEditing),
            _ => None,
        }
    }

    /// The keyword form used by action callers.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::RequestRevisions => "request_revisions",
            Self::Reject => "reject",
            Self::DeskReject => "desk_reject",
            Self::SkipToCopyEditing => "skip_to_copy_editing",
        }
    }

    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::RequestRevisions => "Request Revisions",
            Self::Reject => "Reject",
            Self::DeskReject => "Desk Reject",
            Self::SkipToCopyEditing => "Skip to Copy Editing",
        }
    }

    /// The status this decision lands the submission on.
    pub fn target_status(&self) -> SubmissionStatus {
        match self {
            Self::Accept => SubmissionStatus::Accepted,
            Self::RequestRevisions => SubmissionStatus::RevisionsRequested,
            Self::Reject => SubmissionStatus::Rejected,
            Self::DeskReject => SubmissionStatus::Rejected,
            Self::SkipToCopyEditing => SubmissionStatus::InCopyEditing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_round_trips() {
        for decision in EditorDecision::ALL {
            assert_eq!(EditorDecision::parse(decision.keyword()), Some(decision));
        }
    }

    #[test]
    fn unknown_keyword_is_none() {
        assert_eq!(EditorDecision::parse("revise_and_extend"), None);
        assert_eq!(EditorDecision::parse(""), None);
        // Keywords are exact; display forms don't parse.
        assert_eq!(EditorDecision::parse("Desk Reject"), None);
    }

    #[test]
    fn serde_form_matches_keyword() {
        for decision in EditorDecision::ALL {
            let json = serde_json::to_string(&decision).unwrap();
            assert_eq!(json.trim_matches('"'), decision.keyword());
        }
    }

    #[test]
    fn decision_table() {
        assert_eq!(
            EditorDecision::Accept.target_status(),
            SubmissionStatus::Accepted
        );
        assert_eq!(
            EditorDecision::RequestRevisions.target_status(),
            SubmissionStatus::RevisionsRequested
        );
        assert_eq!(
            EditorDecision::Reject.target_status(),
            SubmissionStatus::Rejected
        );
        assert_eq!(
            EditorDecision::DeskReject.target_status(),
            SubmissionStatus::Rejected
        );
        assert_eq!(
            EditorDecision::SkipToCopyEditing.target_status(),
            SubmissionStatus::InCopyEditing
        );
    }
}
