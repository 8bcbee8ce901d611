//! Domain Services
//!
//! Classification logic. Services talk to the outside world only through
//! the `FileSystem` port.

pub mod classifier;
pub mod discovery;
pub mod folder_tree;
pub mod naming;
pub mod rules;

pub use classifier::Classifier;
pub use discovery::discover_machines;
pub use folder_tree::folder_tree;
pub use naming::{destination_folder_name, plan_file_name, plan_rename_suffix};
pub use rules::{ClassificationRule, RuleScope, Stage, RULES};
