//! Classification rule table
//!
//! Every document category of the DOE is one row of [`RULES`]. The
//! orchestrator walks the table stage by stage and hands each row to the
//! generic runner in `classifier`.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::domain::services::naming::{self, contains_ci, fold};
use crate::domain::value_objects::doe_layout::{
    IBN_REPORT_DIR, INTERVENTION_REPORT_DIR, MANUALS_DIR, SHEETS_DIR, STUDIES_DIR,
    TECHNICAL_SHEETS_DIR, CERTIFICATES_DIR,
};

static PROBE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)sonde chauff[èe]").expect("valid probe pattern"));

/// Keywords selecting System Data extracts
pub const SYSTEM_DATA_KEYWORDS: [&str; 5] = [
    "PrevMaint",
    "Fiche de donnèes",
    "Signalist-Fieldbus",
    "Systemdescription",
    "protocole de gaz",
];

/// Document category handled by one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Manuals,
    TechnicalInstructions,
    InterventionReport,
    MachineFolder,
    SystemData,
    IbnData,
    InstallationPlan,
    ProbeFile,
    Certificates,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Manuals => "Manuals",
            Category::TechnicalInstructions => "Technical instructions",
            Category::InterventionReport => "Intervention report",
            Category::MachineFolder => "Machine folder",
            Category::SystemData => "System data extracts",
            Category::IbnData => "IBN-Data bundle",
            Category::InstallationPlan => "Installation plan",
            Category::ProbeFile => "Probe file",
            Category::Certificates => "Certificates",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Orchestrator pass a rule belongs to, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    ManualsAndTech,
    ReportPlaceholder,
    PerMachine,
    ProbeFile,
    Certificates,
}

impl Stage {
    pub const ORDER: [Stage; 5] = [
        Stage::ManualsAndTech,
        Stage::ReportPlaceholder,
        Stage::PerMachine,
        Stage::ProbeFile,
        Stage::Certificates,
    ];
}

/// Whether a rule runs once per machine or once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    PerMachine,
    PerRun,
}

/// How a source folder is walked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Only the files directly inside the source folder
    Flat,
    /// Files and sub-folders, structure preserved
    Recursive,
}

/// File-name predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Any,
    /// Case-insensitive substring of any keyword
    Keywords(&'static [&'static str]),
    /// Contains `k9` and ends with `.pdf`, case-insensitive
    InstallationPlanPdf,
    /// `sonde chauffè` / `sonde chauffe`, case-insensitive
    ProbeFile,
}

impl Matcher {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Matcher::Any => true,
            Matcher::Keywords(keywords) => keywords.iter().any(|k| contains_ci(file_name, k)),
            Matcher::InstallationPlanPdf => {
                let folded = fold(file_name);
                folded.contains("k9") && folded.ends_with(".pdf")
            }
            Matcher::ProbeFile => {
                let normalized: String = file_name.nfc().collect();
                PROBE_FILE.is_match(&normalized)
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Matcher::Any => "any file".to_string(),
            Matcher::Keywords(keywords) => format!("name contains one of {}", keywords.join(", ")),
            Matcher::InstallationPlanPdf => "*k9*.pdf".to_string(),
            Matcher::ProbeFile => "sonde chauff[èe]".to_string(),
        }
    }
}

/// Where matched entries land, relative to the DOE root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Fixed sub-path of the DOE root
    Fixed(&'static [&'static str]),
    /// The machine's own folder under `2 - Fiches techniques et manuels`,
    /// optionally with a sub-folder
    MachineFolder(Option<&'static str>),
}

/// Destination file name policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rename {
    Keep,
    /// `Plan Analyseur <suffix>.pdf`
    InstallationPlan,
}

impl Destination {
    /// Path relative to the DOE root, `<machine>` standing for the
    /// machine's folder
    pub fn describe(&self) -> String {
        match self {
            Destination::Fixed(segments) => segments.join("/"),
            Destination::MachineFolder(None) => format!("{SHEETS_DIR}/<machine>"),
            Destination::MachineFolder(Some(sub)) => format!("{SHEETS_DIR}/<machine>/{sub}"),
        }
    }
}

/// How many items a rule acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Every matching file of every existing source folder
    All,
    /// The first matching file; per machine or across all machines
    /// depending on the rule scope
    FirstMatch,
    /// Everything from the first machine whose source folder exists
    FirstSource,
}

/// What happens when a rule finds nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatch {
    Info,
    Warn,
}

/// Work performed by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    Copy {
        sources: &'static [&'static [&'static str]],
        traversal: Traversal,
        matcher: Matcher,
        rename: Rename,
        cardinality: Cardinality,
        on_no_match: NoMatch,
    },
    /// Ensure an (initially empty) folder exists
    EnsureFolder,
}

impl RuleAction {
    pub fn describe(&self) -> String {
        match self {
            RuleAction::EnsureFolder => "create folder".to_string(),
            RuleAction::Copy {
                sources,
                traversal,
                matcher,
                rename,
                cardinality,
                ..
            } => {
                let walk = match traversal {
                    Traversal::Flat => "files",
                    Traversal::Recursive => "tree",
                };
                let take = match cardinality {
                    Cardinality::All => "all",
                    Cardinality::FirstMatch => "first match",
                    Cardinality::FirstSource => "first machine with a source",
                };
                let mut text = format!(
                    "copy {walk} ({}) from {}, {take}",
                    matcher.describe(),
                    describe_sources(sources)
                );
                if *rename == Rename::InstallationPlan {
                    text.push_str(", renamed Plan Analyseur <N_x>.pdf");
                }
                text
            }
        }
    }
}

/// One row of the classification table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub category: Category,
    pub stage: Stage,
    pub scope: RuleScope,
    pub destination: Destination,
    pub action: RuleAction,
}

impl ClassificationRule {
    /// Destination file name for a matched source file
    pub fn target_name(&self, source_name: &OsStr, machine_name: &str) -> OsString {
        match self.action {
            RuleAction::Copy {
                rename: Rename::InstallationPlan,
                ..
            } => naming::plan_file_name(machine_name).into(),
            _ => source_name.to_os_string(),
        }
    }
}

const SYSTEM_DATA: &[&str] = &["Device Data", "System Data"];

/// The classification table, in execution order
pub const RULES: [ClassificationRule; 9] = [
    ClassificationRule {
        category: Category::Manuals,
        stage: Stage::ManualsAndTech,
        scope: RuleScope::PerMachine,
        destination: Destination::Fixed(&[SHEETS_DIR, MANUALS_DIR]),
        action: RuleAction::Copy {
            sources: &[
                &["Documents", "Operating Instructions"],
                &["Device Data", "System Docu"],
            ],
            traversal: Traversal::Recursive,
            matcher: Matcher::Any,
            rename: Rename::Keep,
            cardinality: Cardinality::All,
            on_no_match: NoMatch::Info,
        },
    },
    ClassificationRule {
        category: Category::TechnicalInstructions,
        stage: Stage::ManualsAndTech,
        scope: RuleScope::PerMachine,
        destination: Destination::Fixed(&[SHEETS_DIR, TECHNICAL_SHEETS_DIR]),
        action: RuleAction::Copy {
            sources: &[&["Documents", "Technical Instructions"]],
            traversal: Traversal::Recursive,
            matcher: Matcher::Any,
            rename: Rename::Keep,
            cardinality: Cardinality::All,
            on_no_match: NoMatch::Info,
        },
    },
    ClassificationRule {
        category: Category::InterventionReport,
        stage: Stage::ReportPlaceholder,
        scope: RuleScope::PerRun,
        destination: Destination::Fixed(&[SHEETS_DIR, INTERVENTION_REPORT_DIR]),
        action: RuleAction::EnsureFolder,
    },
    ClassificationRule {
        category: Category::MachineFolder,
        stage: Stage::PerMachine,
        scope: RuleScope::PerMachine,
        destination: Destination::MachineFolder(None),
        action: RuleAction::EnsureFolder,
    },
    ClassificationRule {
        category: Category::SystemData,
        stage: Stage::PerMachine,
        scope: RuleScope::PerMachine,
        destination: Destination::MachineFolder(None),
        action: RuleAction::Copy {
            sources: &[SYSTEM_DATA],
            traversal: Traversal::Flat,
            matcher: Matcher::Keywords(&SYSTEM_DATA_KEYWORDS),
            rename: Rename::Keep,
            cardinality: Cardinality::All,
            on_no_match: NoMatch::Info,
        },
    },
    ClassificationRule {
        category: Category::IbnData,
        stage: Stage::PerMachine,
        scope: RuleScope::PerMachine,
        destination: Destination::MachineFolder(Some(IBN_REPORT_DIR)),
        action: RuleAction::Copy {
            sources: &[&["Device Data", "System Data", "IBN-Data"]],
            traversal: Traversal::Recursive,
            matcher: Matcher::Any,
            rename: Rename::Keep,
            cardinality: Cardinality::All,
            on_no_match: NoMatch::Info,
        },
    },
    ClassificationRule {
        category: Category::InstallationPlan,
        stage: Stage::PerMachine,
        scope: RuleScope::PerMachine,
        destination: Destination::Fixed(&[STUDIES_DIR]),
        action: RuleAction::Copy {
            sources: &[&["Device Data", "Installation Drawings", "PDF"]],
            traversal: Traversal::Flat,
            matcher: Matcher::InstallationPlanPdf,
            rename: Rename::InstallationPlan,
            cardinality: Cardinality::FirstMatch,
            on_no_match: NoMatch::Warn,
        },
    },
    ClassificationRule {
        category: Category::ProbeFile,
        stage: Stage::ProbeFile,
        scope: RuleScope::PerRun,
        destination: Destination::Fixed(&[STUDIES_DIR]),
        action: RuleAction::Copy {
            sources: &[SYSTEM_DATA],
            traversal: Traversal::Flat,
            matcher: Matcher::ProbeFile,
            rename: Rename::Keep,
            cardinality: Cardinality::FirstMatch,
            on_no_match: NoMatch::Info,
        },
    },
    ClassificationRule {
        category: Category::Certificates,
        stage: Stage::Certificates,
        scope: RuleScope::PerRun,
        destination: Destination::Fixed(&[CERTIFICATES_DIR]),
        action: RuleAction::Copy {
            sources: &[&["Device Data", "Certificates"]],
            traversal: Traversal::Recursive,
            matcher: Matcher::Any,
            rename: Rename::Keep,
            cardinality: Cardinality::FirstSource,
            on_no_match: NoMatch::Info,
        },
    },
];

/// Source sub-paths as `a/b, c/d`
pub fn describe_sources(sources: &[&[&str]]) -> String {
    sources
        .iter()
        .map(|segments| segments.join("/"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rules of one stage, in table order
pub fn rules_for(stage: Stage) -> impl Iterator<Item = &'static ClassificationRule> {
    RULES.iter().filter(move |rule| rule.stage == stage)
}
