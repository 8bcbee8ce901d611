use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

use doe_builder::config::Config;
use doe_builder::domain::ports::SummaryRenderer;
use doe_builder::domain::value_objects::parse_doe_date;
use doe_builder::{
    ConsoleEventSink, DoeRoot, JsonEventSink, LocalFs, SummaryRecord, SynthesisEventSink,
    SynthesisOptions, SynthesisResult, SynthesisUseCase, TemplateRenderer,
};

use crate::ui::context::UiContext;
use crate::ui::views::build::{render_build_header, render_build_summary};

/// Arguments of `doe build`
#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub project_name: Option<String>,
    pub doe_version: Option<String>,
    pub doe_date: Option<String>,
    pub date: Option<String>,
    pub strict: bool,
}

pub fn cmd_build(mut args: BuildArgs, config: &Config, ui: UiContext) -> Result<()> {
    args.source = std::path::absolute(&args.source)
        .with_context(|| format!("invalid source path {}", args.source.display()))?;
    args.dest = std::path::absolute(&args.dest)
        .with_context(|| format!("invalid destination path {}", args.dest.display()))?;

    let date = match &args.date {
        Some(value) => parse_doe_date(value)?,
        None => Utc::now().date_naive(),
    };
    let options = build_options(&args, config, date);

    let fs = LocalFs::new();
    let renderer: Box<dyn SummaryRenderer> = match &config.summary.templates_dir {
        Some(dir) => Box::new(TemplateRenderer::from_dir(fs, dir)),
        None => Box::new(TemplateRenderer::builtin(fs)),
    };
    let use_case = SynthesisUseCase::new(fs).with_renderer(renderer);

    let sink: Arc<dyn SynthesisEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ui.color, ui.unicode, ui.verbose))
    };

    if !ui.json {
        let doe_root = DoeRoot::new(&options.dest_root, date);
        print!(
            "{}",
            render_build_header(
                &options.source,
                doe_root.path(),
                args.project_name.as_deref(),
                ui.color,
                ui.unicode,
            )
        );
        println!();
    }

    let result = use_case.execute_with_events(&options, sink);

    if ui.json {
        println!("{}", json_summary(&result));
    } else {
        println!();
        print!("{}", render_build_summary(&result, ui.color, ui.unicode));
    }

    if !result.is_success() || (args.strict && !result.outcome.is_clean()) {
        std::process::exit(1);
    }

    Ok(())
}

/// Summary documents are only produced when a project name is given
fn build_options(args: &BuildArgs, config: &Config, date: NaiveDate) -> SynthesisOptions {
    let options = SynthesisOptions::new(&args.source, &args.dest).with_date(date);

    match args.project_name.as_deref().map(str::trim) {
        Some(project) if !project.is_empty() => options.with_summary(SummaryRecord {
            project_name: project.to_string(),
            doe_version: args
                .doe_version
                .clone()
                .unwrap_or_else(|| config.summary.doe_version.clone()),
            doe_date: args.doe_date.clone().unwrap_or_else(|| date.to_string()),
        }),
        _ => options,
    }
}

fn json_summary(result: &SynthesisResult) -> serde_json::Value {
    let machines: Vec<&str> = result.machines.iter().map(|m| m.name.as_str()).collect();
    serde_json::json!({
        "event": "summary",
        "command": "build",
        "doe_root": result.doe_root.display().to_string(),
        "phase": result.phase,
        "machines": machines,
        "outcome": result.outcome,
        "log": result.log_text(),
    })
}
