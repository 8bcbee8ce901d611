pub mod build;
pub mod rules;
pub mod tree;
