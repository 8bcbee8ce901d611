//! Application Layer
//!
//! Use cases that orchestrate the domain services for one DOE run.

pub mod summary;
pub mod synthesis;

pub use synthesis::{SynthesisOptions, SynthesisResult, SynthesisUseCase};
