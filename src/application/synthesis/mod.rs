//! Synthesis Module
//!
//! Orchestrates a DOE run.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`SynthesisOptions`)
//! - `result` - Result types (`SynthesisResult`)
//! - `use_case` - Orchestrator (`SynthesisUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use doe_builder::application::synthesis::{SynthesisOptions, SynthesisUseCase};
//!
//! let use_case = SynthesisUseCase::new(LocalFs::new());
//! let result = use_case.execute(&SynthesisOptions::new(source, dest));
//! println!("{}", result.log_text());
//! ```

mod options;
mod result;
mod use_case;

pub use options::SynthesisOptions;
pub use result::SynthesisResult;
pub use use_case::SynthesisUseCase;
