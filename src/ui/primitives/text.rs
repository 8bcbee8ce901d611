use crossterm::style::{Color, Stylize};

use crate::ui::theme::colors;

/// Text tinted with one of the theme colors when color is enabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Color,
    bold: bool,
}

impl ColoredText {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, colors::SUCCESS)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, colors::ERROR)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, colors::WARNING)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, colors::INFO)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, colors::DIM)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }
        let styled = self.text.as_str().with(self.color);
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_color_returns_plain_text() {
        let t = ColoredText::error("failed").bold();
        assert_eq!(t.render(false), "failed");
    }
}
