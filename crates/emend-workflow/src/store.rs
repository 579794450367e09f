//! The workflow override store
//!
//! User-driven changes never touch the seed dataset. Every mutation is
//! recorded in an override map keyed by submission id (or by
//! submission/reviewer pair), and reads merge the overrides over the seed
//! on every call. A reset simply clears the maps.
//!
//! Mutators are total: an unknown submission, reviewer, or decision is
//! reported as [`Outcome::Ignored`], never an error or a panic. This
//! permissiveness is deliberate; in particular no status-transition
//! validation is performed, so any status may follow any status.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use emend_domain::{
    ActivityEntry, ActivityKind, ContentType, CopyEditorAssignment, Review, ReviewerAssignment,
    ReviewerStatus, Submission, SubmissionStatus,
};

use crate::decision::EditorDecision;
use crate::seed::{seed_data, SeedData};

/// Key addressing one reviewer's participation on one submission.
type ReviewKey = (String, String);

/// Release record for a review: when it was released and any
/// editor-edited replacement text.
#[derive(Clone, Debug, PartialEq)]
struct ReviewRelease {
    released_date: DateTime<Utc>,
    edited_comments: Option<String>,
}

/// A review recorded through the store, with its submission timestamp
/// captured at submit time so merges stay pure.
#[derive(Clone, Debug, PartialEq)]
struct SubmittedReview {
    review: Review,
    submitted_date: DateTime<Utc>,
}

/// Result of a store command.
///
/// Commands report their effect and the user-facing notice; how (or
/// whether) to surface the notice is the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command took effect.
    Applied {
        /// Human-readable summary suitable for a transient notification.
        notice: String,
    },
    /// The command referenced an unknown id or keyword and was dropped.
    Ignored,
}

impl Outcome {
    fn applied(notice: impl Into<String>) -> Self {
        Self::Applied {
            notice: notice.into(),
        }
    }

    /// Whether the command took effect.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// The notification text, when the command took effect.
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Applied { notice } => Some(notice),
            Self::Ignored => None,
        }
    }
}

/// In-memory workflow state: immutable seed data plus override maps.
///
/// The store is owned by the application and passed down to views; all
/// reads return freshly merged copies.
#[derive(Debug)]
pub struct WorkflowStore {
    seed: SeedData,
    status_overrides: HashMap<String, SubmissionStatus>,
    content_type_overrides: HashMap<String, ContentType>,
    added_reviewers: HashMap<String, Vec<ReviewerAssignment>>,
    reviewer_status_overrides: HashMap<ReviewKey, ReviewerStatus>,
    submitted_reviews: HashMap<ReviewKey, SubmittedReview>,
    released_reviews: HashMap<ReviewKey, ReviewRelease>,
    added_copy_editors: HashMap<String, Vec<CopyEditorAssignment>>,
    added_activity: HashMap<String, Vec<ActivityEntry>>,
}

impl WorkflowStore {
    /// Create a store over the demo seed dataset with no overrides.
    pub fn new() -> Self {
        Self::with_seed(seed_data())
    }

    /// Create a store over an explicit seed dataset.
    pub fn with_seed(seed: SeedData) -> Self {
        Self {
            seed,
            status_overrides: HashMap::new(),
            content_type_overrides: HashMap::new(),
            added_reviewers: HashMap::new(),
            reviewer_status_overrides: HashMap::new(),
            submitted_reviews: HashMap::new(),
            released_reviews: HashMap::new(),
            added_copy_editors: HashMap::new(),
            added_activity: HashMap::new(),
        }
    }

    /// The underlying seed dataset (identity pools included).
    pub fn seed(&self) -> &SeedData {
        &self.seed
    }

    // MARK: - Mutators

    /// Override a submission's status. No transition validation: any
    /// status may follow any status.
    pub fn update_submission_status(&mut self, id: &str, status: SubmissionStatus) -> Outcome {
        if self.seed.submission(id).is_none() {
            return Outcome::Ignored;
        }
        debug!(submission = id, status = %status, "status override");
        self.status_overrides.insert(id.to_string(), status);
        self.log(
            id,
            ActivityEntry::new(format!("Status changed to {status}"))
                .with_kind(ActivityKind::StageChange),
        );
        Outcome::applied(format!("Status updated to {status}"))
    }

    /// Override a submission's content type.
    pub fn update_content_type(&mut self, id: &str, content_type: ContentType) -> Outcome {
        if self.seed.submission(id).is_none() {
            return Outcome::Ignored;
        }
        debug!(submission = id, content_type = %content_type, "content type override");
        self.content_type_overrides
            .insert(id.to_string(), content_type);
        self.log(
            id,
            ActivityEntry::new(format!("Content type changed to {content_type}"))
                .with_kind(ActivityKind::Note),
        );
        Outcome::applied(format!("Content type updated to {content_type}"))
    }

    /// Assign reviewers from the pool. Pool entries are copied into
    /// pending assignments, appended after any existing reviewers in the
    /// order given. Unknown reviewer ids are skipped.
    pub fn assign_reviewers(&mut self, id: &str, reviewer_ids: &[&str]) -> Outcome {
        if self.seed.submission(id).is_none() {
            return Outcome::Ignored;
        }

        let now = Utc::now();
        let mut assigned = 0usize;
        for reviewer_id in reviewer_ids {
            let Some(profile) = self.seed.reviewer(reviewer_id).cloned() else {
                debug!(submission = id, reviewer = %reviewer_id, "unknown reviewer skipped");
                continue;
            };
            self.log(
                id,
                ActivityEntry::new(format!("Reviewer {} assigned", profile.name))
                    .with_kind(ActivityKind::Assignment),
            );
            self.added_reviewers
                .entry(id.to_string())
                .or_default()
                .push(ReviewerAssignment::new(profile, now));
            assigned += 1;
        }

        if assigned == 0 {
            return Outcome::Ignored;
        }
        debug!(submission = id, count = assigned, "reviewers assigned");
        Outcome::applied(format!("Assigned {assigned} reviewer(s)"))
    }

    /// Record a submitted review and mark the reviewer `Submitted`.
    pub fn submit_review(
        &mut self,
        id: &str,
        reviewer_id: &str,
        recommendation: emend_domain::Recommendation,
        comments_to_editor: &str,
        comments_to_author: &str,
    ) -> Outcome {
        let Some(assignment) = self.find_assignment(id, reviewer_id) else {
            return Outcome::Ignored;
        };
        let reviewer_name = assignment.reviewer.name.clone();

        let key = review_key(id, reviewer_id);
        self.submitted_reviews.insert(
            key.clone(),
            SubmittedReview {
                review: Review::new(recommendation, comments_to_editor, comments_to_author),
                submitted_date: Utc::now(),
            },
        );
        self.reviewer_status_overrides
            .insert(key, ReviewerStatus::Submitted);
        debug!(submission = id, reviewer = reviewer_id, "review submitted");
        self.log(
            id,
            ActivityEntry::new(format!("Review submitted by {reviewer_name}"))
                .with_kind(ActivityKind::ReviewEvent)
                .with_actor(reviewer_name.clone()),
        );
        Outcome::applied(format!("Review from {reviewer_name} recorded"))
    }

    /// Release a review to the author, optionally with edited comments.
    /// Does not require that a review was submitted first.
    pub fn release_review(
        &mut self,
        id: &str,
        reviewer_id: &str,
        edited_comments: Option<&str>,
    ) -> Outcome {
        let Some(assignment) = self.find_assignment(id, reviewer_id) else {
            return Outcome::Ignored;
        };
        let reviewer_name = assignment.reviewer.name.clone();

        self.released_reviews.insert(
            review_key(id, reviewer_id),
            ReviewRelease {
                released_date: Utc::now(),
                edited_comments: edited_comments.map(str::to_string),
            },
        );
        debug!(submission = id, reviewer = reviewer_id, "review released");
        self.log(
            id,
            ActivityEntry::new(format!("Review by {reviewer_name} released to author"))
                .with_kind(ActivityKind::ReviewEvent),
        );
        Outcome::applied(format!("Review by {reviewer_name} released to author"))
    }

    /// Apply an editor decision via the fixed decision table. Unknown
    /// decision keywords should be rejected by the caller at parse time;
    /// this method itself cannot fail for a known submission.
    pub fn make_editor_decision(&mut self, id: &str, decision: EditorDecision) -> Outcome {
        if self.seed.submission(id).is_none() {
            return Outcome::Ignored;
        }
        let status = decision.target_status();
        debug!(submission = id, decision = decision.keyword(), "editor decision");
        self.status_overrides.insert(id.to_string(), status);
        self.log(
            id,
            ActivityEntry::new(format!(
                "Editor decision: {}; status changed to {status}",
                decision.display_name()
            ))
            .with_kind(ActivityKind::StageChange),
        );
        Outcome::applied(format!("Decision recorded: {}", decision.display_name()))
    }

    /// Parse-and-apply variant of [`Self::make_editor_decision`]:
    /// unrecognized keywords are silently ignored.
    pub fn make_editor_decision_keyword(&mut self, id: &str, keyword: &str) -> Outcome {
        match EditorDecision::parse(keyword) {
            Some(decision) => self.make_editor_decision(id, decision),
            None => {
                debug!(submission = id, keyword, "unknown decision keyword ignored");
                Outcome::Ignored
            }
        }
    }

    /// Assign copy editors from the pool, appended after any existing
    /// ones. Unknown ids are skipped.
    pub fn assign_copy_editors(&mut self, id: &str, editor_ids: &[&str]) -> Outcome {
        if self.seed.submission(id).is_none() {
            return Outcome::Ignored;
        }

        let now = Utc::now();
        let mut assigned = 0usize;
        for editor_id in editor_ids {
            let Some(profile) = self.seed.copy_editor(editor_id).cloned() else {
                debug!(submission = id, editor = %editor_id, "unknown copy editor skipped");
                continue;
            };
            self.log(
                id,
                ActivityEntry::new(format!("Copy editor {} assigned", profile.name))
                    .with_kind(ActivityKind::Assignment),
            );
            self.added_copy_editors
                .entry(id.to_string())
                .or_default()
                .push(CopyEditorAssignment::new(profile.clone(), now));
            assigned += 1;
        }

        if assigned == 0 {
            return Outcome::Ignored;
        }
        Outcome::applied(format!("Assigned {assigned} copy editor(s)"))
    }

    /// Mark a submission ready for production.
    pub fn mark_ready_for_production(&mut self, id: &str) -> Outcome {
        if self.seed.submission(id).is_none() {
            return Outcome::Ignored;
        }
        self.status_overrides
            .insert(id.to_string(), SubmissionStatus::ReadyForProduction);
        self.log(
            id,
            ActivityEntry::new("Marked ready for production").with_kind(ActivityKind::StageChange),
        );
        Outcome::applied("Marked ready for production")
    }

    /// Append a free-form activity entry (e.g. a file-upload event from
    /// the UI layer).
    pub fn add_activity(&mut self, id: &str, entry: ActivityEntry) -> Outcome {
        if self.seed.submission(id).is_none() {
            return Outcome::Ignored;
        }
        self.log(id, entry);
        Outcome::applied("Activity recorded")
    }

    /// Clear all overrides, restoring the initial seed view. Idempotent.
    pub fn reset(&mut self) {
        debug!("workflow state reset");
        self.status_overrides.clear();
        self.content_type_overrides.clear();
        self.added_reviewers.clear();
        self.reviewer_status_overrides.clear();
        self.submitted_reviews.clear();
        self.released_reviews.clear();
        self.added_copy_editors.clear();
        self.added_activity.clear();
    }

    // MARK: - Reads

    /// Merged view of one submission, or `None` for an unknown id.
    /// Pure function of the current override state.
    pub fn submission(&self, id: &str) -> Option<Submission> {
        self.seed.submission(id).map(|base| self.merge(base))
    }

    /// Merged view of every submission, in seed order.
    pub fn submissions(&self) -> Vec<Submission> {
        self.seed
            .submissions
            .iter()
            .map(|base| self.merge(base))
            .collect()
    }

    /// Full activity log for a submission: seed entries followed by
    /// appended entries, in insertion order.
    pub fn activity(&self, id: &str) -> Vec<ActivityEntry> {
        let Some(base) = self.seed.submission(id) else {
            return Vec::new();
        };
        let mut entries = base.activity.clone();
        if let Some(added) = self.added_activity.get(id) {
            entries.extend(added.iter().cloned());
        }
        entries
    }

    // MARK: - Merge internals

    fn merge(&self, base: &Submission) -> Submission {
        let mut merged = base.clone();

        if let Some(status) = self.status_overrides.get(&base.id) {
            merged.status = *status;
        }
        if let Some(content_type) = self.content_type_overrides.get(&base.id) {
            merged.content_type = *content_type;
        }

        if let Some(added) = self.added_reviewers.get(&base.id) {
            merged.assigned_reviewers.extend(added.iter().cloned());
        }
        for assignment in &mut merged.assigned_reviewers {
            self.apply_review_overrides(&base.id, assignment);
        }

        if let Some(added) = self.added_copy_editors.get(&base.id) {
            merged.copy_editors.extend(added.iter().cloned());
        }

        merged
    }

    fn apply_review_overrides(&self, submission_id: &str, assignment: &mut ReviewerAssignment) {
        let key = review_key(submission_id, &assignment.reviewer.id);

        if let Some(submitted) = self.submitted_reviews.get(&key) {
            assignment.review = Some(submitted.review.clone());
            assignment.submitted_date = Some(submitted.submitted_date);
        }
        if let Some(status) = self.reviewer_status_overrides.get(&key) {
            assignment.status = *status;
        }
        if let Some(release) = self.released_reviews.get(&key) {
            if let Some(review) = assignment.review.as_mut() {
                review.released_to_author = true;
                review.released_date = Some(release.released_date);
                review.editor_modified_comments = release.edited_comments.clone();
            }
        }
    }

    fn find_assignment(&self, id: &str, reviewer_id: &str) -> Option<&ReviewerAssignment> {
        let seed_hit = self
            .seed
            .submission(id)?
            .assigned_reviewers
            .iter()
            .find(|a| a.reviewer.id == reviewer_id);
        seed_hit.or_else(|| {
            self.added_reviewers
                .get(id)?
                .iter()
                .find(|a| a.reviewer.id == reviewer_id)
        })
    }

    fn log(&mut self, id: &str, entry: ActivityEntry) {
        self.added_activity
            .entry(id.to_string())
            .or_default()
            .push(entry);
    }
}

impl Default for WorkflowStore {
    fn default() -> Self {
        Self::new()
    }
}

fn review_key(submission_id: &str, reviewer_id: &str) -> ReviewKey {
    (submission_id.to_string(), reviewer_id.to_string())
}
