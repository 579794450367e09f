//! End-to-end workflow store tests
//!
//! Exercises the override store, decision table, and visibility rules
//! together, the way the application drives them.

use emend_domain::{
    group_by_stage, ActivityEntry, ActivityKind, Recommendation, ReviewerStatus, Role,
    SubmissionStatus,
};
use emend_workflow::{
    dashboard_submissions, timeline_for, visible_tabs, EditorDecision, Outcome, Stage, Tab,
    WorkflowStore,
};

#[test]
fn status_override_and_reset_round_trip() {
    let mut store = WorkflowStore::new();
    let original = store.submission("2024-030").unwrap().status;

    for status in SubmissionStatus::ALL {
        store.update_submission_status("2024-030", status);
        assert_eq!(store.submission("2024-030").unwrap().status, status);
    }

    store.reset();
    assert_eq!(store.submission("2024-030").unwrap().status, original);
}

#[test]
fn reset_twice_equals_reset_once() {
    let mut store = WorkflowStore::new();
    let initial = store.submissions();

    store.update_submission_status("2024-031", SubmissionStatus::Published);
    store.assign_copy_editors("2024-031", &["ce-001"]);

    store.reset();
    let once = store.submissions();
    store.reset();
    let twice = store.submissions();

    assert_eq!(once, initial);
    assert_eq!(twice, initial);
}

#[test]
fn assigning_reviewers_preserves_order_and_pending_status() {
    let mut store = WorkflowStore::new();
    store.assign_reviewers("2024-031", &["rev-003", "rev-004"]);

    let reviewers = store.submission("2024-031").unwrap().assigned_reviewers;
    assert_eq!(reviewers.len(), 2);
    assert_eq!(reviewers[0].reviewer.id, "rev-003");
    assert_eq!(reviewers[1].reviewer.id, "rev-004");
    assert!(reviewers.iter().all(|r| r.status == ReviewerStatus::Pending));
}

#[test]
fn scenario_2024_034_second_review_completes_the_set() {
    let mut store = WorkflowStore::new();

    let outcome = store.submit_review(
        "2024-034",
        "rev-006",
        Recommendation::Accept,
        "ok",
        "ok",
    );
    assert!(outcome.is_applied());

    let s = store.submission("2024-034").unwrap();
    assert_eq!(s.assigned_reviewers.len(), 2);
    assert!(s
        .assigned_reviewers
        .iter()
        .all(|r| r.status == ReviewerStatus::Submitted));
    assert!(s.all_reviews_submitted());

    // The fresh review is recorded but not yet released.
    let fresh = s
        .assigned_reviewers
        .iter()
        .find(|r| r.reviewer.id == "rev-006")
        .unwrap();
    let review = fresh.review.as_ref().unwrap();
    assert!(!review.released_to_author);
    assert_eq!(review.recommendation, Recommendation::Accept);
}

#[test]
fn release_flips_flag_and_stamps_date() {
    let mut store = WorkflowStore::new();
    store.submit_review("2024-034", "rev-006", Recommendation::Accept, "ok", "ok");
    store.release_review("2024-034", "rev-006", None);

    let s = store.submission("2024-034").unwrap();
    let review = s
        .assigned_reviewers
        .iter()
        .find(|r| r.reviewer.id == "rev-006")
        .unwrap()
        .review
        .clone()
        .unwrap();
    assert!(review.released_to_author);
    assert!(review.released_date.is_some());
}

#[test]
fn released_review_shows_edited_comments_to_author() {
    let mut store = WorkflowStore::new();
    store.submit_review(
        "2024-034",
        "rev-006",
        Recommendation::MajorRevisions,
        "confidential: methods are shaky",
        "this paper is a mess",
    );
    store.release_review(
        "2024-034",
        "rev-006",
        Some("please revisit the methods section"),
    );

    let s = store.submission("2024-034").unwrap();
    let review = s
        .assigned_reviewers
        .iter()
        .find(|r| r.reviewer.id == "rev-006")
        .unwrap()
        .review
        .clone()
        .unwrap();
    assert_eq!(
        review.author_visible_comments(),
        "please revisit the methods section"
    );
    // Original text is retained underneath the edit.
    assert_eq!(review.comments_to_author, "this paper is a mess");
}

#[test]
fn editor_decision_drives_status_and_actions() {
    let mut store = WorkflowStore::new();

    store.make_editor_decision("2024-031", EditorDecision::SkipToCopyEditing);
    let s = store.submission("2024-031").unwrap();
    assert_eq!(s.status, SubmissionStatus::InCopyEditing);

    // Copy-editing tab and actions now follow the overridden status.
    assert!(visible_tabs(Role::ManagingEditor, &s).contains(&Tab::CopyEditing));
    assert_eq!(timeline_for(s.status).current_stage(), Stage::CopyEditing);
}

#[test]
fn unknown_decision_keyword_changes_nothing() {
    let mut store = WorkflowStore::new();
    let before = store.submissions();
    assert_eq!(
        store.make_editor_decision_keyword("2024-031", "banish"),
        Outcome::Ignored
    );
    assert_eq!(store.submissions(), before);
}

#[test]
fn author_dashboard_ignores_status_overrides() {
    let mut store = WorkflowStore::new();
    // Shuffle some statuses; the author filter keys on identity alone.
    store.update_submission_status("2024-030", SubmissionStatus::Rejected);
    store.update_submission_status("2024-035", SubmissionStatus::Submitted);

    let visible = dashboard_submissions(Role::Author, &store.submissions());
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|s| s.author_name == "Jane Doe"));
}

#[test]
fn copy_editor_dashboard_follows_overridden_status() {
    let mut store = WorkflowStore::new();
    let before = dashboard_submissions(Role::CopyEditor, &store.submissions()).len();

    store.update_submission_status("2024-031", SubmissionStatus::InCopyEditing);
    let after = dashboard_submissions(Role::CopyEditor, &store.submissions());
    assert_eq!(after.len(), before + 1);
    assert!(after.iter().any(|s| s.id == "2024-031"));
}

#[test]
fn activity_concatenates_seed_then_appended() {
    let mut store = WorkflowStore::new();
    let seed_len = store.activity("2024-034").len();

    store.assign_reviewers("2024-034", &["rev-002"]);
    store.add_activity(
        "2024-034",
        ActivityEntry::new("Revised figures uploaded")
            .with_kind(ActivityKind::FileEvent)
            .with_file("hyades_tails_v2.docx"),
    );

    let log = store.activity("2024-034");
    assert_eq!(log.len(), seed_len + 2);
    assert_eq!(log.last().unwrap().description, "Revised figures uploaded");
}

#[test]
fn activity_groups_under_stage_markers() {
    let mut store = WorkflowStore::new();
    store.update_submission_status("2024-034", SubmissionStatus::RevisionsRequested);
    store.add_activity(
        "2024-034",
        ActivityEntry::new("Author notified").with_kind(ActivityKind::Note),
    );

    let groups = group_by_stage(&store.activity("2024-034"));
    let last = groups.last().unwrap();
    // The status change opened a new stage group holding the note.
    assert!(last
        .stage
        .as_ref()
        .unwrap()
        .description
        .contains("Revisions Requested"));
    assert_eq!(last.entries.len(), 1);
}

#[test]
fn full_editorial_pass() {
    let mut store = WorkflowStore::new();
    let id = "2024-030";

    store.update_submission_status(id, SubmissionStatus::InDeskReview);
    store.update_submission_status(id, SubmissionStatus::InPeerReview);
    store.assign_reviewers(id, &["rev-001", "rev-006"]);

    store.submit_review(id, "rev-001", Recommendation::MinorRevisions, "fine", "tighten §2");
    store.submit_review(id, "rev-006", Recommendation::Accept, "good", "nice work");

    let s = store.submission(id).unwrap();
    assert!(s.all_reviews_submitted());

    store.make_editor_decision(id, EditorDecision::Accept);
    assert_eq!(store.submission(id).unwrap().status, SubmissionStatus::Accepted);

    store.update_submission_status(id, SubmissionStatus::InCopyEditing);
    store.assign_copy_editors(id, &["ce-001"]);
    store.mark_ready_for_production(id);
    store.update_submission_status(id, SubmissionStatus::Published);

    let s = store.submission(id).unwrap();
    assert_eq!(s.status, SubmissionStatus::Published);
    assert_eq!(s.copy_editors.len(), 1);
    assert_eq!(timeline_for(s.status).current_stage(), Stage::Published);

    store.reset();
    let s = store.submission(id).unwrap();
    assert_eq!(s.status, SubmissionStatus::Submitted);
    assert!(s.assigned_reviewers.is_empty());
    assert!(s.copy_editors.is_empty());
}
