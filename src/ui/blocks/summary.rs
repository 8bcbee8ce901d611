use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// End-of-command summary: title line, counters, warnings, next step
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    icon: Icon,
    stats: Vec<(String, usize)>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn new(title: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            icon,
            stats: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Icon::Success)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, Icon::Warning)
    }

    pub fn failed(title: impl Into<String>) -> Self {
        Self::new(title, Icon::Error)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = match self.icon {
            Icon::Success => ColoredText::success(self.title.as_str()),
            Icon::Error => ColoredText::error(self.title.as_str()),
            _ => ColoredText::warning(self.title.as_str()),
        }
        .bold()
        .render(supports_color);

        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        );

        for (label, count) in &self.stats {
            out.push_str(&format!("  {} {}\n", count, label));
        }

        for warning in &self.warnings {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                warning
            ));
        }

        if let Some(next_step) = &self.next_step {
            out.push_str(&format!(
                "  {} {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        out
    }
}
