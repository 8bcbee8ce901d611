//! Phase value object - progress of one synthesis run

use serde::Serialize;

/// Orchestrator state. Transitions only move forward, in declaration order,
/// except for `Failed` which is reachable from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    SkeletonBuilt,
    ManualsAndTechPassDone,
    ReportPlaceholderCreated,
    PerMachinePassDone,
    ProbeFileDone,
    CertificatesDone,
    Complete,
    Failed,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Complete | Phase::Failed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::SkeletonBuilt => "skeleton built",
            Phase::ManualsAndTechPassDone => "manuals and technical sheets copied",
            Phase::ReportPlaceholderCreated => "intervention report folder ready",
            Phase::PerMachinePassDone => "per-machine documents copied",
            Phase::ProbeFileDone => "probe file handled",
            Phase::CertificatesDone => "certificates handled",
            Phase::Complete => "complete",
            Phase::Failed => "failed",
        }
    }
}
