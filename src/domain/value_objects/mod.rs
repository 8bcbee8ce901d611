//! Value objects

pub mod doe_layout;
mod machine;
mod phase;

pub use doe_layout::{parse_doe_date, DoeRoot};
pub use machine::{CanonicalMachineId, MachineDirectory};
pub use phase::Phase;
