//! Summary document rendering

mod template;

pub use template::TemplateRenderer;
