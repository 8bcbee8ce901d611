//! Generic classifier runner
//!
//! Executes one [`ClassificationRule`] against a machine (per-machine rules)
//! or against the whole machine list (run-scoped rules). Every write is
//! copy-if-absent. Per-item failures are turned into log entries here and
//! never escape to the orchestrator.

use std::path::{Path, PathBuf};

use crate::domain::entities::RunLog;
use crate::domain::ports::{DirEntry, FileSystem};
use crate::domain::services::rules::{
    describe_sources, Cardinality, ClassificationRule, Destination, Matcher, NoMatch, RuleAction,
    Traversal,
};
use crate::domain::value_objects::{DoeRoot, MachineDirectory};

/// Per-invocation counters used for the summary line
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    copied: usize,
    skipped: usize,
    failed: usize,
}

impl Tally {
    fn summary(&self) -> String {
        let mut text = format!("{} copied, {} already present", self.copied, self.skipped);
        if self.failed > 0 {
            text.push_str(&format!(", {} failed", self.failed));
        }
        text
    }
}

/// Runs classification rules against a DOE root through a `FileSystem`
pub struct Classifier<'a, FS: FileSystem> {
    fs: &'a FS,
    root: &'a DoeRoot,
}

impl<'a, FS: FileSystem> Classifier<'a, FS> {
    pub fn new(fs: &'a FS, root: &'a DoeRoot) -> Self {
        Self { fs, root }
    }

    /// Run a per-machine rule for one machine
    pub fn run_for_machine(
        &self,
        rule: &ClassificationRule,
        machine: &MachineDirectory,
        log: &mut RunLog,
    ) {
        let label = format!("{} [{}]", rule.category, machine.name);
        let dest = self.destination(rule, Some(machine));

        match rule.action {
            RuleAction::EnsureFolder => self.ensure_rule_folder(&dest, &label, log),
            RuleAction::Copy {
                sources,
                traversal,
                matcher,
                cardinality,
                on_no_match,
                ..
            } => match cardinality {
                Cardinality::All => {
                    self.copy_all(rule, machine, sources, traversal, matcher, &dest, &label, log)
                }
                Cardinality::FirstMatch => {
                    let found = self.copy_first_match(rule, machine, sources, matcher, &dest, &label, log);
                    if !found {
                        self.report_no_match(on_no_match, &label, sources, matcher, log);
                    }
                }
                Cardinality::FirstSource => {
                    let found = self.copy_first_source(machine, sources, matcher, &dest, &label, log);
                    if !found {
                        self.report_no_match(on_no_match, &label, sources, matcher, log);
                    }
                }
            },
        }
    }

    /// Run a run-scoped rule once across all machines
    ///
    /// `FirstMatch` and `FirstSource` rules stop scanning at the first
    /// machine that yields something; later machines are never visited.
    pub fn run_for_run(
        &self,
        rule: &ClassificationRule,
        machines: &[MachineDirectory],
        log: &mut RunLog,
    ) {
        let label = rule.category.to_string();

        let RuleAction::Copy {
            sources,
            traversal,
            matcher,
            cardinality,
            on_no_match,
            ..
        } = rule.action
        else {
            let dest = self.destination(rule, None);
            self.ensure_rule_folder(&dest, &label, log);
            return;
        };

        if cardinality == Cardinality::All {
            for machine in machines {
                let dest = self.destination(rule, Some(machine));
                let label = format!("{} [{}]", rule.category, machine.name);
                self.copy_all(rule, machine, sources, traversal, matcher, &dest, &label, log);
            }
            return;
        }

        for machine in machines {
            log.info(format!("{label}: searching {}", machine.name));
            let dest = self.destination(rule, Some(machine));
            let found = match cardinality {
                Cardinality::FirstMatch => {
                    self.copy_first_match(rule, machine, sources, matcher, &dest, &label, log)
                }
                _ => self.copy_first_source(machine, sources, matcher, &dest, &label, log),
            };
            if found {
                return;
            }
        }

        match on_no_match {
            NoMatch::Warn => log.warning(format!("{label}: nothing found in any machine")),
            NoMatch::Info => log.info(format!("{label}: nothing found in any machine")),
        }
    }

    /// Destination folder of a rule, relative to the DOE root
    pub fn destination(
        &self,
        rule: &ClassificationRule,
        machine: Option<&MachineDirectory>,
    ) -> PathBuf {
        match (rule.destination, machine) {
            (Destination::Fixed(segments), _) => {
                segments.iter().fold(self.root.path().to_path_buf(), |p, s| p.join(s))
            }
            (Destination::MachineFolder(sub), Some(machine)) => {
                let folder = self.root.sheets_dir().join(machine.canonical_id());
                match sub {
                    Some(sub) => folder.join(sub),
                    None => folder,
                }
            }
            (Destination::MachineFolder(_), None) => self.root.sheets_dir(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn copy_all(
        &self,
        rule: &ClassificationRule,
        machine: &MachineDirectory,
        sources: &[&[&str]],
        traversal: Traversal,
        matcher: Matcher,
        dest: &Path,
        label: &str,
        log: &mut RunLog,
    ) {
        let mut tally = Tally::default();
        let mut any_source = false;

        for source in sources {
            let src = join_segments(&machine.path, source);
            if !self.fs.is_dir(&src) {
                continue;
            }
            any_source = true;
            match traversal {
                Traversal::Recursive => self.copy_tree(&src, dest, matcher, label, log, &mut tally),
                Traversal::Flat => {
                    self.copy_flat(rule, machine, &src, dest, matcher, label, log, &mut tally)
                }
            }
        }

        if any_source {
            log.info(format!("{label}: {}", tally.summary()));
        } else {
            log.info(format!(
                "{label}: no source folder ({})",
                describe_sources(sources)
            ));
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn copy_flat(
        &self,
        rule: &ClassificationRule,
        machine: &MachineDirectory,
        src: &Path,
        dest: &Path,
        matcher: Matcher,
        label: &str,
        log: &mut RunLog,
        tally: &mut Tally,
    ) {
        let files = match self.matching_files(src, matcher) {
            Ok(files) => files,
            Err(message) => {
                log.error(format!("{label}: {message}"));
                tally.failed += 1;
                return;
            }
        };
        if files.is_empty() {
            return;
        }
        if !self.ensure_folder(dest, label, log) {
            tally.failed += files.len();
            return;
        }
        for file in files {
            let target = dest.join(rule.target_name(&file.file_name, &machine.name));
            self.copy_if_absent(&file.path_in(src), &target, label, log, tally);
        }
    }

    /// Copy the first matching file of the first existing source folder
    ///
    /// Returns true when a file was found (copied, already present or failed).
    #[allow(clippy::too_many_arguments)]
    fn copy_first_match(
        &self,
        rule: &ClassificationRule,
        machine: &MachineDirectory,
        sources: &[&[&str]],
        matcher: Matcher,
        dest: &Path,
        label: &str,
        log: &mut RunLog,
    ) -> bool {
        for source in sources {
            let src = join_segments(&machine.path, source);
            if !self.fs.is_dir(&src) {
                continue;
            }
            let first = match self.matching_files(&src, matcher) {
                Ok(files) => files.into_iter().next(),
                Err(message) => {
                    log.error(format!("{label}: {message}"));
                    continue;
                }
            };
            let Some(file) = first else {
                continue;
            };

            let mut tally = Tally::default();
            if self.ensure_folder(dest, label, log) {
                let target = dest.join(rule.target_name(&file.file_name, &machine.name));
                self.copy_if_absent(&file.path_in(&src), &target, label, log, &mut tally);
            }
            return true;
        }
        false
    }

    /// Copy everything from the first existing source folder of `machine`
    fn copy_first_source(
        &self,
        machine: &MachineDirectory,
        sources: &[&[&str]],
        matcher: Matcher,
        dest: &Path,
        label: &str,
        log: &mut RunLog,
    ) -> bool {
        let Some(src) = sources
            .iter()
            .map(|source| join_segments(&machine.path, source))
            .find(|src| self.fs.is_dir(src))
        else {
            return false;
        };

        log.info(format!("{label}: taken from {}", machine.name));
        let mut tally = Tally::default();
        self.copy_tree(&src, dest, matcher, label, log, &mut tally);
        log.info(format!("{label}: {}", tally.summary()));
        true
    }

    /// Recursive copy-if-absent, directory structure preserved
    fn copy_tree(
        &self,
        src: &Path,
        dest: &Path,
        matcher: Matcher,
        label: &str,
        log: &mut RunLog,
        tally: &mut Tally,
    ) {
        if !self.ensure_folder(dest, label, log) {
            tally.failed += 1;
            return;
        }
        let entries = match self.fs.list_entries(src) {
            Ok(entries) => entries,
            Err(err) => {
                log.error(format!("{label}: cannot list {}: {err}", src.display()));
                tally.failed += 1;
                return;
            }
        };
        for entry in entries {
            let child_src = entry.path_in(src);
            let child_dest = entry.path_in(dest);
            if entry.is_dir {
                self.copy_tree(&child_src, &child_dest, matcher, label, log, tally);
            } else if matcher.matches(&entry.name) {
                self.copy_if_absent(&child_src, &child_dest, label, log, tally);
            }
        }
    }

    /// Files directly in `dir` accepted by `matcher`, in enumeration order
    fn matching_files(&self, dir: &Path, matcher: Matcher) -> Result<Vec<DirEntry>, String> {
        let entries = self
            .fs
            .list_entries(dir)
            .map_err(|err| format!("cannot list {}: {err}", dir.display()))?;
        Ok(entries
            .into_iter()
            .filter(|entry| !entry.is_dir && matcher.matches(&entry.name))
            .collect())
    }

    fn copy_if_absent(
        &self,
        src: &Path,
        dst: &Path,
        label: &str,
        log: &mut RunLog,
        tally: &mut Tally,
    ) {
        let shown = self.relative(dst);
        if self.fs.exists(dst) {
            tally.skipped += 1;
            log.skipped(format!("{label}: {shown} already present"));
            return;
        }
        match self.fs.copy_file(src, dst) {
            Ok(()) => {
                tally.copied += 1;
                log.copied(format!("{label}: {shown}"));
            }
            Err(err) => {
                tally.failed += 1;
                log.error(format!("{label}: failed to copy {}: {err}", src.display()));
            }
        }
    }

    /// Folder-only rules always leave a trace in the log
    fn ensure_rule_folder(&self, dir: &Path, label: &str, log: &mut RunLog) {
        if self.fs.is_dir(dir) {
            log.info(format!("{label}: {} already present", self.relative(dir)));
        } else {
            self.ensure_folder(dir, label, log);
        }
    }

    /// Create `dir` if missing. Returns false when it could not be created.
    fn ensure_folder(&self, dir: &Path, label: &str, log: &mut RunLog) -> bool {
        if self.fs.is_dir(dir) {
            return true;
        }
        match self.fs.create_dir_all(dir) {
            Ok(()) => {
                log.folder_created(format!("{label}: created {}", self.relative(dir)));
                true
            }
            Err(err) => {
                log.error(format!("{label}: cannot create {}: {err}", self.relative(dir)));
                false
            }
        }
    }

    fn report_no_match(
        &self,
        policy: NoMatch,
        label: &str,
        sources: &[&[&str]],
        matcher: Matcher,
        log: &mut RunLog,
    ) {
        let message = format!(
            "{label}: no file matching {} in {}",
            matcher.describe(),
            describe_sources(sources)
        );
        match policy {
            NoMatch::Warn => log.warning(message),
            NoMatch::Info => log.info(message),
        }
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(self.root.path())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn join_segments(base: &Path, segments: &[&str]) -> PathBuf {
    segments.iter().fold(base.to_path_buf(), |p, s| p.join(s))
}
