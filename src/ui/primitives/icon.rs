use crossterm::style::{Color, Stylize};

use crate::ui::theme::{self, colors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Build,
    Tree,
    Rules,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let g = theme::glyphs(supports_unicode);
        match self {
            Icon::Success => g.success,
            Icon::Error => g.error,
            Icon::Warning => g.warning,
            Icon::Progress => g.progress,
            Icon::Pending => g.pending,
            Icon::Arrow => g.arrow,
            Icon::Build => g.build,
            Icon::Tree => g.tree,
            Icon::Rules => g.rules,
        }
    }

    fn color(&self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Progress => colors::WARNING,
            Icon::Pending | Icon::Arrow => colors::DIM,
            Icon::Build | Icon::Tree | Icon::Rules => colors::INFO,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}
