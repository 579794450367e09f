//! Uploaded manuscript files and their revisions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One uploaded file attached to a submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileVersion {
    pub filename: String,
    /// Version number, starting at 1.
    pub version: u32,
    /// Human-readable label, e.g. "Original submission".
    pub label: String,
    pub upload_date: DateTime<Utc>,
    /// Category tag, e.g. "manuscript", "figures", "review_markup".
    pub category: Option<String>,
    pub uploaded_by: Option<String>,
}

impl FileVersion {
    /// Create a file record.
    pub fn new(
        filename: impl Into<String>,
        version: u32,
        label: impl Into<String>,
        upload_date: DateTime<Utc>,
    ) -> Self {
        Self {
            filename: filename.into(),
            version,
            label: label.into(),
            upload_date,
            category: None,
            uploaded_by: None,
        }
    }

    /// Set the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the uploader.
    pub fn with_uploader(mut self, uploader: impl Into<String>) -> Self {
        self.uploaded_by = Some(uploader.into());
        self
    }
}
