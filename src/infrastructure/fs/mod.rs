//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;
#[cfg(test)]
mod mock;

pub use local::LocalFs;
#[cfg(test)]
pub use mock::MockFs;
