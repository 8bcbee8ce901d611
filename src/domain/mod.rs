//! Domain Layer
//!
//! The classification engine: naming rules, machine discovery, the rule
//! table and its generic runner.
//!
//! ## Structure
//!
//! - `entities/` - Run log and structured outcome
//! - `value_objects/` - Machines, DOE layout, orchestrator phase
//! - `services/` - Naming, discovery, rules, classifier, folder tree
//! - `ports/` - Interface definitions for infrastructure
//!
//! All I/O goes through the `FileSystem` port.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
