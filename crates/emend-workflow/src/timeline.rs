//! Progress timeline for the submission detail header
//!
//! Maps a status onto a fixed stage track: five stages on the normal
//! path, three on the rejected branch.

use emend_domain::SubmissionStatus;
use serde::{Deserialize, Serialize};

/// A coarse stage on the progress track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Submitted,
    DeskReview,
    PeerReview,
    CopyEditing,
    Published,
    Rejected,
}

impl Stage {
    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::DeskReview => "Desk Review",
            Self::PeerReview => "Peer Review",
            Self::CopyEditing => "Copy Editing",
            Self::Published => "Published",
            Self::Rejected => "Rejected",
        }
    }
}

/// The stage track for one submission: the stages to draw and which one
/// is current.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub stages: Vec<Stage>,
    /// Index into `stages` of the current stage.
    pub current: usize,
}

impl Timeline {
    /// The current stage.
    pub fn current_stage(&self) -> Stage {
        self.stages[self.current]
    }

    /// Whether the given stage has been reached (current or earlier).
    pub fn reached(&self, stage: Stage) -> bool {
        self.stages
            .iter()
            .position(|s| *s == stage)
            .is_some_and(|i| i <= self.current)
    }
}

const NORMAL_TRACK: [Stage; 5] = [
    Stage::Submitted,
    Stage::DeskReview,
    Stage::PeerReview,
    Stage::CopyEditing,
    Stage::Published,
];

const REJECTED_TRACK: [Stage; 3] = [Stage::Submitted, Stage::DeskReview, Stage::Rejected];

/// The timeline for a status.
///
/// Revision statuses stay on the peer-review stage; accepted and
/// ready-for-production sit on the copy-editing stage.
pub fn timeline_for(status: SubmissionStatus) -> Timeline {
    if status == SubmissionStatus::Rejected {
        return Timeline {
            stages: REJECTED_TRACK.to_vec(),
            current: 2,
        };
    }

    let current = match status {
        SubmissionStatus::Submitted => 0,
        SubmissionStatus::InDeskReview => 1,
        SubmissionStatus::InPeerReview
        | SubmissionStatus::RevisionsRequested
        | SubmissionStatus::RevisionsSubmitted => 2,
        SubmissionStatus::Accepted
        | SubmissionStatus::InCopyEditing
        | SubmissionStatus::ReadyForProduction => 3,
        SubmissionStatus::Published => 4,
        SubmissionStatus::Rejected => unreachable!("handled above"),
    };

    Timeline {
        stages: NORMAL_TRACK.to_vec(),
        current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_track_has_five_stages() {
        let t = timeline_for(SubmissionStatus::InPeerReview);
        assert_eq!(t.stages.len(), 5);
        assert_eq!(t.current_stage(), Stage::PeerReview);
    }

    #[test]
    fn rejected_track_has_three_stages() {
        let t = timeline_for(SubmissionStatus::Rejected);
        assert_eq!(t.stages, vec![Stage::Submitted, Stage::DeskReview, Stage::Rejected]);
        assert_eq!(t.current_stage(), Stage::Rejected);
    }

    #[test]
    fn revision_statuses_stay_on_peer_review() {
        for status in [
            SubmissionStatus::RevisionsRequested,
            SubmissionStatus::RevisionsSubmitted,
        ] {
            assert_eq!(timeline_for(status).current_stage(), Stage::PeerReview);
        }
    }

    #[test]
    fn production_statuses_sit_on_copy_editing() {
        for status in [
            SubmissionStatus::Accepted,
            SubmissionStatus::InCopyEditing,
            SubmissionStatus::ReadyForProduction,
        ] {
            assert_eq!(timeline_for(status).current_stage(), Stage::CopyEditing);
        }
    }

    #[test]
    fn reached_is_monotone() {
        let t = timeline_for(SubmissionStatus::InCopyEditing);
        assert!(t.reached(Stage::Submitted));
        assert!(t.reached(Stage::PeerReview));
        assert!(t.reached(Stage::CopyEditing));
        assert!(!t.reached(Stage::Published));
        assert!(!t.reached(Stage::Rejected));
    }

    #[test]
    fn every_status_has_a_timeline() {
        for status in SubmissionStatus::ALL {
            let t = timeline_for(status);
            assert!(t.current < t.stages.len());
        }
    }
}
