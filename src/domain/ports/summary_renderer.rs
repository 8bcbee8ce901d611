//! Summary renderer port
//!
//! Produces the cover documents of `0 - Sommaire` from templates once the
//! classification pass is finished.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::DoeResult;

/// Values substituted into the summary templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    pub project_name: String,
    pub doe_version: String,
    pub doe_date: String,
}

/// What happened to one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderReport {
    Written { template: String, path: PathBuf },
    TemplateMissing { template: String },
}

pub trait SummaryRenderer {
    /// Render every template into `summary_dir`
    ///
    /// `folder_tree` is only substituted into templates that ask for it.
    fn render(
        &self,
        summary_dir: &Path,
        record: &SummaryRecord,
        folder_tree: &str,
    ) -> DoeResult<Vec<RenderReport>>;
}
