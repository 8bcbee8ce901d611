//! Synthesis Use Case
//!
//! Orchestrates one DOE run:
//! 1. Build the four top-level folders
//! 2. Discover machine directories
//! 3. Manuals and technical instructions, per machine
//! 4. Intervention report placeholder, once
//! 5. Machine folder, system data, IBN-Data, installation plan, per machine
//! 6. Probe file, once across machines
//! 7. Certificates, once across machines
//! 8. Summary documents, when a project name is given
//!
//! Only a missing source folder (or an unbuildable skeleton) stops the run;
//! everything else is logged and the run continues.

use std::sync::Arc;

use crate::application::summary::render_summary;
use crate::domain::entities::RunLog;
use crate::domain::ports::{
    FileSystem, NoopEventSink, SummaryRenderer, SynthesisEvent, SynthesisEventSink,
};
use crate::domain::services::rules::{rules_for, RuleScope, Stage};
use crate::domain::services::{discover_machines, Classifier};
use crate::domain::value_objects::doe_layout::SKELETON;
use crate::domain::value_objects::{DoeRoot, MachineDirectory, Phase};

use super::options::SynthesisOptions;
use super::result::SynthesisResult;

/// Synthesis use case - drives the classification pass
pub struct SynthesisUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    renderer: Option<Box<dyn SummaryRenderer>>,
}

impl<FS> SynthesisUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self {
            file_system,
            renderer: None,
        }
    }

    /// Attach the collaborator used for the summary documents
    pub fn with_renderer(mut self, renderer: Box<dyn SummaryRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Execute a run silently
    pub fn execute(&self, options: &SynthesisOptions) -> SynthesisResult {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute a run, streaming events to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &SynthesisOptions,
        event_sink: Arc<dyn SynthesisEventSink>,
    ) -> SynthesisResult {
        let root = DoeRoot::new(&options.dest_root, options.date);
        let mut run = Run {
            log: RunLog::with_sink(event_sink),
            phase: Phase::Idle,
            machines: Vec::new(),
        };

        run.log.emit(SynthesisEvent::Started {
            source: options.source.clone(),
            doe_root: root.path().to_path_buf(),
        });
        run.log.info(format!("DOE root: {}", root.path().display()));

        if self.execute_stages(options, &root, &mut run) {
            if let Some(record) = &options.summary {
                self.render_summary_step(&root, record, &mut run.log);
            }
            run.log.info(format!(
                "DOE generation complete: {} copied, {} already present, {} warnings, {} errors",
                run.log.outcome().copied,
                run.log.outcome().skipped,
                run.log.outcome().warnings,
                run.log.outcome().errors,
            ));
            run.enter(Phase::Complete);
        } else {
            run.enter(Phase::Failed);
        }

        run.finish(root)
    }

    /// Returns false when the run had to be aborted
    fn execute_stages(&self, options: &SynthesisOptions, root: &DoeRoot, run: &mut Run) -> bool {
        if !self.build_skeleton(root, &mut run.log) {
            return false;
        }
        run.enter(Phase::SkeletonBuilt);

        run.machines = match discover_machines(&self.file_system, &options.source) {
            Ok(machines) => machines,
            Err(err) => {
                run.log.error(format!("Aborted: source {err}"));
                return false;
            }
        };
        if run.machines.is_empty() {
            run.log.warning(format!(
                "No machine folder (Master / Redu) found in {}",
                options.source.display()
            ));
        } else {
            let names: Vec<_> = run.machines.iter().map(|m| m.name.as_str()).collect();
            run.log.info(format!(
                "Found {} machine(s): {}",
                run.machines.len(),
                names.join(", ")
            ));
        }

        let classifier = Classifier::new(&self.file_system, root);
        for stage in Stage::ORDER {
            self.run_stage(&classifier, stage, &run.machines, &mut run.log);
            run.enter(phase_after(stage));
        }
        true
    }

    fn build_skeleton(&self, root: &DoeRoot, log: &mut RunLog) -> bool {
        for folder in SKELETON {
            let path = root.join(folder);
            if self.file_system.is_dir(&path) {
                continue;
            }
            if let Err(err) = self.file_system.create_dir_all(&path) {
                log.error(format!("Aborted: cannot create {folder}: {err}"));
                return false;
            }
            log.folder_created(format!("Created {folder}"));
        }
        true
    }

    /// Per-machine rules run machine by machine, then run-scoped rules once
    fn run_stage(
        &self,
        classifier: &Classifier<'_, FS>,
        stage: Stage,
        machines: &[MachineDirectory],
        log: &mut RunLog,
    ) {
        for machine in machines {
            for rule in rules_for(stage).filter(|r| r.scope == RuleScope::PerMachine) {
                classifier.run_for_machine(rule, machine, log);
            }
        }
        for rule in rules_for(stage).filter(|r| r.scope == RuleScope::PerRun) {
            classifier.run_for_run(rule, machines, log);
        }
    }

    fn render_summary_step(
        &self,
        root: &DoeRoot,
        record: &crate::domain::ports::SummaryRecord,
        log: &mut RunLog,
    ) {
        match &self.renderer {
            Some(renderer) => {
                render_summary(&self.file_system, renderer.as_ref(), root, record, log)
            }
            None => log.info("Summary: no renderer configured"),
        }
    }
}

/// Mutable state of one run
struct Run {
    log: RunLog,
    phase: Phase,
    machines: Vec<MachineDirectory>,
}

impl Run {
    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.log.emit(SynthesisEvent::PhaseEntered { phase });
    }

    fn finish(self, root: DoeRoot) -> SynthesisResult {
        let phase = self.phase;
        let (entries, outcome) = {
            let outcome = self.log.outcome();
            self.log.emit(SynthesisEvent::Finished { phase, outcome });
            self.log.into_parts()
        };
        SynthesisResult {
            doe_root: root.path().to_path_buf(),
            phase,
            machines: self.machines,
            entries,
            outcome,
        }
    }
}

fn phase_after(stage: Stage) -> Phase {
    match stage {
        Stage::ManualsAndTech => Phase::ManualsAndTechPassDone,
        Stage::ReportPlaceholder => Phase::ReportPlaceholderCreated,
        Stage::PerMachine => Phase::PerMachinePassDone,
        Stage::ProbeFile => Phase::ProbeFileDone,
        Stage::Certificates => Phase::CertificatesDone,
    }
}
