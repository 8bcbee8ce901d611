use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use doe_builder::config::{ColorMode, Config, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &Config) -> Self {
        Self::from_caps(json, verbose, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let json = json || config.output.format == OutputFormat::Json;
        let unicode = config.output.unicode && caps.supports_unicode;
        let color = !json
            && match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            };

        Self {
            json,
            verbose,
            color,
            unicode,
        }
    }
}
