//! Validation for the submission intake form
//!
//! These checks gate the submit action in the UI; they never touch the
//! workflow store.

use serde::{Deserialize, Serialize};

/// Severity of a validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A field-level validation issue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationIssue {
    fn error(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Error,
        }
    }

    fn warning(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Warning,
        }
    }
}

/// The fields an author fills in when submitting a manuscript.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionForm {
    pub title: String,
    pub abstract_text: String,
    pub author_name: String,
    pub author_email: String,
    /// Filename of the uploaded manuscript, if one was attached.
    pub manuscript_file: Option<String>,
}

/// Validate a submission form and return issues, errors first relative
/// to field order. An empty result means the form may be submitted.
pub fn validate_submission_form(form: &SubmissionForm) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if form.title.trim().is_empty() {
        issues.push(ValidationIssue::error("title", "Title is required"));
    }

    if form.author_name.trim().is_empty() {
        issues.push(ValidationIssue::error(
            "author_name",
            "Author name is required",
        ));
    }

    if form.author_email.trim().is_empty() {
        issues.push(ValidationIssue::error(
            "author_email",
            "Author email is required",
        ));
    } else if !looks_like_email(&form.author_email) {
        issues.push(ValidationIssue::error(
            "author_email",
            "Author email is not a valid address",
        ));
    }

    if form.manuscript_file.is_none() {
        issues.push(ValidationIssue::error(
            "manuscript_file",
            "A manuscript file is required",
        ));
    }

    if form.abstract_text.trim().is_empty() {
        issues.push(ValidationIssue::warning(
            "abstract_text",
            "An abstract is recommended",
        ));
    }

    issues
}

/// Whether the form has no blocking errors (warnings are allowed).
pub fn form_is_submittable(form: &SubmissionForm) -> bool {
    validate_submission_form(form)
        .iter()
        .all(|i| i.severity != ValidationSeverity::Error)
}

// Minimal shape check: local part, '@', and a dotted domain. Full RFC
// validation is out of scope for an intake form.
fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
