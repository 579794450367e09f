//! Role/status visibility rules
//!
//! Pure functions deciding what a given role may see for a given
//! submission: dashboard rows, detail tabs, and editor actions. These are
//! the only conditionals the view layer is allowed to depend on; nothing
//! here renders anything.

use emend_domain::{Role, Submission, SubmissionStatus};
use serde::{Deserialize, Serialize};

use crate::seed::DEMO_AUTHOR;

/// Tabs on the submission detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Overview,
    Files,
    Reviews,
    CopyEditing,
    Activity,
}

/// Actions an editor can take from the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorAction {
    StartDeskReview,
    ApproveForPeerReview,
    RequestRevisions,
    SkipToCopyEditing,
    DeskReject,
    AssignReviewers,
    Accept,
    Reject,
    SendToCopyEditing,
    AssignCopyEditors,
    MarkReadyForProduction,
    Publish,
}

impl EditorAction {
    /// Display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::StartDeskReview => "Start Desk Review",
            Self::ApproveForPeerReview => "Approve for Peer Review",
            Self::RequestRevisions => "Request Revisions",
            Self::SkipToCopyEditing => "Skip to Copy Editing",
            Self::DeskReject => "Desk Reject",
            Self::AssignReviewers => "Assign Reviewers",
            Self::Accept => "Accept",
            Self::Reject => "Reject",
            Self::SendToCopyEditing => "Send to Copy Editing",
            Self::AssignCopyEditors => "Assign Copy Editors",
            Self::MarkReadyForProduction => "Mark Ready for Production",
            Self::Publish => "Publish",
        }
    }
}

/// Tabs visible to `role` for this submission, in display order.
///
/// Overview, Files, and Activity are always present. Reviews appears for
/// editors once any review is submitted, for authors once any review is
/// released, and for reviewers whenever a reviewer assignment exists.
/// Copy Editing appears only in the copy-editing phase and later.
pub fn visible_tabs(role: Role, submission: &Submission) -> Vec<Tab> {
    let mut tabs = vec![Tab::Overview, Tab::Files];

    let reviews_visible = match role {
        Role::ManagingEditor | Role::Admin => submission.submitted_review_count() > 0,
        Role::Author => submission.released_review_count() > 0,
        Role::Reviewer => !submission.assigned_reviewers.is_empty(),
        Role::CopyEditor => false,
    };
    if reviews_visible {
        tabs.push(Tab::Reviews);
    }

    if submission.status.in_copy_editing_phase() {
        tabs.push(Tab::CopyEditing);
    }

    tabs.push(Tab::Activity);
    tabs
}

/// The editor actions legal for a submission's current status.
///
/// A fixed status → actions table. In peer review, decision actions are
/// gated on every assigned reviewer having submitted.
pub fn editor_actions(submission: &Submission) -> Vec<EditorAction> {
    use EditorAction::*;
    match submission.status {
        SubmissionStatus::Submitted => vec![StartDeskReview],
        SubmissionStatus::InDeskReview => vec![
            ApproveForPeerReview,
            RequestRevisions,
            SkipToCopyEditing,
            DeskReject,
        ],
        SubmissionStatus::InPeerReview => {
            let mut actions = vec![AssignReviewers];
            if submission.all_reviews_submitted() {
                actions.extend([Accept, RequestRevisions, Reject]);
            }
            actions
        }
        // Waiting on the author; no editor action until revisions arrive.
        SubmissionStatus::RevisionsRequested => vec![],
        SubmissionStatus::RevisionsSubmitted => vec![ApproveForPeerReview, SkipToCopyEditing],
        SubmissionStatus::Accepted => vec![SendToCopyEditing],
        SubmissionStatus::InCopyEditing => vec![AssignCopyEditors, MarkReadyForProduction],
        SubmissionStatus::ReadyForProduction => vec![Publish],
        SubmissionStatus::Published | SubmissionStatus::Rejected => vec![],
    }
}

/// Whether `role`'s dashboard lists this submission.
///
/// Authors see their own submissions only (the demo author identity),
/// reviewers see submissions with at least one reviewer assignment, copy
/// editors see submissions in copy editing, and editorial roles see all.
pub fn dashboard_visible(role: Role, submission: &Submission) -> bool {
    match role {
        Role::Author => submission.author_name == DEMO_AUTHOR,
        Role::Reviewer => !submission.assigned_reviewers.is_empty(),
        Role::CopyEditor => submission.status == SubmissionStatus::InCopyEditing,
        Role::ManagingEditor | Role::Admin => true,
    }
}

/// Filter a merged submission list down to what `role`'s dashboard shows,
/// preserving order.
pub fn dashboard_submissions(role: Role, submissions: &[Submission]) -> Vec<Submission> {
    submissions
        .iter()
        .filter(|s| dashboard_visible(role, s))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_data;

    fn submission(id: &str) -> Submission {
        seed_data().submission(id).unwrap().clone()
    }

    #[test]
    fn reviews_tab_for_editor_requires_submitted_review() {
        // 2024-034 has one submitted review.
        let s = submission("2024-034");
        assert!(visible_tabs(Role::ManagingEditor, &s).contains(&Tab::Reviews));

        // 2024-030 has no reviewers at all.
        let s = submission("2024-030");
        assert!(!visible_tabs(Role::ManagingEditor, &s).contains(&Tab::Reviews));
    }

    #[test]
    fn reviews_tab_for_author_requires_released_review() {
        // 2024-034's review is submitted but unreleased.
        let s = submission("2024-034");
        assert!(!visible_tabs(Role::Author, &s).contains(&Tab::Reviews));

        // 2024-032's review is released.
        let s = submission("2024-032");
        assert!(visible_tabs(Role::Author, &s).contains(&Tab::Reviews));
    }

    #[test]
    fn reviews_tab_for_reviewer_requires_any_assignment() {
        let s = submission("2024-034");
        assert!(visible_tabs(Role::Reviewer, &s).contains(&Tab::Reviews));

        let s = submission("2024-030");
        assert!(!visible_tabs(Role::Reviewer, &s).contains(&Tab::Reviews));
    }

    #[test]
    fn copy_editing_tab_follows_status() {
        for (id, expected) in [
            ("2024-033", true),  // InCopyEditing
            ("2024-029", true),  // ReadyForProduction
            ("2024-035", true),  // Published
            ("2024-034", false), // InPeerReview
            ("2024-036", false), // Rejected
        ] {
            let s = submission(id);
            assert_eq!(
                visible_tabs(Role::ManagingEditor, &s).contains(&Tab::CopyEditing),
                expected,
                "submission {id}"
            );
        }
    }

    #[test]
    fn desk_review_actions() {
        let s = submission("2024-031");
        assert_eq!(
            editor_actions(&s),
            vec![
                EditorAction::ApproveForPeerReview,
                EditorAction::RequestRevisions,
                EditorAction::SkipToCopyEditing,
                EditorAction::DeskReject,
            ]
        );
    }

    #[test]
    fn peer_review_decisions_gated_on_all_reviews_submitted() {
        // One of two reviewers still pending.
        let s = submission("2024-034");
        assert_eq!(editor_actions(&s), vec![EditorAction::AssignReviewers]);

        // Mark the pending reviewer submitted; decisions unlock.
        let mut s = submission("2024-034");
        for r in &mut s.assigned_reviewers {
            r.status = emend_domain::ReviewerStatus::Submitted;
        }
        let actions = editor_actions(&s);
        assert!(actions.contains(&EditorAction::Accept));
        assert!(actions.contains(&EditorAction::RequestRevisions));
        assert!(actions.contains(&EditorAction::Reject));
    }

    #[test]
    fn no_decisions_without_reviewers() {
        let mut s = submission("2024-030");
        s.status = SubmissionStatus::InPeerReview;
        // Zero assigned reviewers: vacuous "all submitted" must not unlock decisions.
        assert_eq!(editor_actions(&s), vec![EditorAction::AssignReviewers]);
    }

    #[test]
    fn terminal_statuses_offer_no_actions() {
        assert!(editor_actions(&submission("2024-035")).is_empty());
        assert!(editor_actions(&submission("2024-036")).is_empty());
    }

    #[test]
    fn author_dashboard_shows_only_demo_author() {
        let all = seed_data().submissions;
        let visible = dashboard_submissions(Role::Author, &all);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|s| s.author_name == DEMO_AUTHOR));
    }

    #[test]
    fn reviewer_dashboard_requires_assignments() {
        let all = seed_data().submissions;
        let visible = dashboard_submissions(Role::Reviewer, &all);
        assert!(visible.iter().all(|s| !s.assigned_reviewers.is_empty()));
        assert!(visible.iter().any(|s| s.id == "2024-034"));
        assert!(!visible.iter().any(|s| s.id == "2024-030"));
    }

    #[test]
    fn copy_editor_dashboard_is_status_scoped() {
        let all = seed_data().submissions;
        let visible = dashboard_submissions(Role::CopyEditor, &all);
        assert!(visible
            .iter()
            .all(|s| s.status == SubmissionStatus::InCopyEditing));
    }

    #[test]
    fn editorial_roles_see_everything() {
        let all = seed_data().submissions;
        assert_eq!(dashboard_submissions(Role::ManagingEditor, &all).len(), all.len());
        assert_eq!(dashboard_submissions(Role::Admin, &all).len(), all.len());
    }
}
