use std::path::Path;

use doe_builder::SynthesisResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_build_header(
    source: &Path,
    doe_root: &Path,
    project_name: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "DOE Build");
    header.add("Source", source.display().to_string());
    header.add("Target", doe_root.display().to_string());
    if let Some(project) = project_name {
        header.add("Project", project);
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_build_summary(
    result: &SynthesisResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let outcome = &result.outcome;

    let mut summary = if !result.is_success() {
        ResultSummary::failed("DOE Failed")
    } else if result.is_clean() {
        ResultSummary::success("DOE Complete")
    } else {
        ResultSummary::partial("DOE Results")
    };

    summary.add_stat("machines", result.machines.len());
    summary.add_stat("files copied", outcome.copied);
    summary.add_stat("already present", outcome.skipped);
    summary.add_stat("folders created", outcome.folders_created);

    if outcome.warnings > 0 {
        summary.add_warning(format!("{} warnings", outcome.warnings));
    }
    if outcome.errors > 0 {
        summary.add_warning(format!("{} errors encountered", outcome.errors));
    }

    if result.is_success() {
        summary.with_next_step(format!("Run `doe tree \"{}\"` to review", result.doe_root.display()));
    } else {
        summary.with_next_step("Check that the source folder exists");
    }

    summary.render(supports_color, supports_unicode)
}
