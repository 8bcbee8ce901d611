use crossterm::style::Color;

/// Design tokens for the `doe` CLI.
///
/// - Only 5 semantic colors (`colors::*`)
/// - Every glyph comes from one of the two [`Glyphs`] tables
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// One glyph per icon. The status glyphs match the run log markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub progress: &'static str,
    pub pending: &'static str,
    pub arrow: &'static str,
    pub build: &'static str,
    pub tree: &'static str,
    pub rules: &'static str,
}

pub const UNICODE: Glyphs = Glyphs {
    success: "✓",
    error: "✗",
    warning: "⚠",
    progress: "●",
    pending: "○",
    arrow: "↳",
    build: "📦",
    tree: "📂",
    rules: "📋",
};

pub const ASCII: Glyphs = Glyphs {
    success: "[OK]",
    error: "[FAIL]",
    warning: "[WARN]",
    progress: "[..]",
    pending: "[ ]",
    arrow: "[>]",
    build: "[BUILD]",
    tree: "[TREE]",
    rules: "[RULES]",
};

pub fn glyphs(supports_unicode: bool) -> &'static Glyphs {
    if supports_unicode {
        &UNICODE
    } else {
        &ASCII
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doe_builder::LogLevel;

    #[test]
    fn status_glyphs_match_log_markers() {
        assert_eq!(UNICODE.success, LogLevel::Copied.marker());
        assert_eq!(UNICODE.warning, LogLevel::Warning.marker());
        assert_eq!(UNICODE.error, LogLevel::Error.marker());
        assert_eq!(ASCII.success, LogLevel::Copied.ascii_marker());
        assert_eq!(ASCII.pending, LogLevel::Skipped.ascii_marker());
    }
}
