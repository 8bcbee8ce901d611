pub mod build;
pub mod rules;
