//! Synthesis Options
//!
//! Configuration types for one DOE synthesis run.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use crate::domain::ports::SummaryRecord;

/// Options for the synthesis use case
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    /// Folder holding the machine directories
    pub source: PathBuf,
    /// Folder receiving `DOE_<date>`
    pub dest_root: PathBuf,
    /// Date stamped on the DOE root (defaults to today, UTC)
    pub date: NaiveDate,
    /// Summary documents to render after classification
    pub summary: Option<SummaryRecord>,
}

impl SynthesisOptions {
    pub fn new(source: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest_root: dest_root.into(),
            date: Utc::now().date_naive(),
            summary: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_summary(mut self, summary: SummaryRecord) -> Self {
        self.summary = Some(summary);
        self
    }
}
