//! Summary step
//!
//! Runs after the classification pass: lists the finished DOE tree and asks
//! the `SummaryRenderer` for the cover documents. Failures here are logged
//! and never touch what the classification pass already wrote.

use crate::domain::entities::RunLog;
use crate::domain::ports::{FileSystem, RenderReport, SummaryRecord, SummaryRenderer};
use crate::domain::services::folder_tree;
use crate::domain::value_objects::DoeRoot;

/// Render the summary documents of `root` into `0 - Sommaire`
pub fn render_summary<FS: FileSystem>(
    fs: &FS,
    renderer: &dyn SummaryRenderer,
    root: &DoeRoot,
    record: &SummaryRecord,
    log: &mut RunLog,
) {
    if record.project_name.trim().is_empty() {
        log.info("Summary: skipped (no project name)");
        return;
    }

    let tree = match folder_tree(fs, root.path()) {
        Ok(tree) => tree,
        Err(err) => {
            log.error(format!("Summary: cannot list DOE tree: {err}"));
            return;
        }
    };

    match renderer.render(&root.summary_dir(), record, &tree) {
        Ok(reports) => {
            for report in reports {
                match report {
                    RenderReport::Written { template, path } => {
                        let shown = path.strip_prefix(root.path()).unwrap_or(&path);
                        log.info(format!("Summary: {template} → {}", shown.display()));
                    }
                    RenderReport::TemplateMissing { template } => {
                        log.warning(format!("Summary: template not found: {template}"));
                    }
                }
            }
        }
        Err(err) => log.error(format!("Summary: {err}")),
    }
}
