//! Console Event Sink
//!
//! Prints run log entries as they are appended, one line each, with a
//! colored level marker. Skipped entries and phase changes only show up
//! with `-v`.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::domain::entities::{LogEntry, LogLevel};
use crate::domain::ports::{SynthesisEvent, SynthesisEventSink};

/// Human-readable progress sink
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stdout(color: bool, unicode: bool, verbose: u8) -> Self {
        Self::with_writer(io::stdout(), color, unicode, verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        verbose: u8,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            color,
            unicode,
            verbose,
        }
    }

    fn format_entry(&self, entry: &LogEntry) -> String {
        let marker = if self.unicode {
            entry.level.marker()
        } else {
            entry.level.ascii_marker()
        };
        if !self.color {
            return format!("{marker} {}", entry.message);
        }
        let color = match entry.level {
            LogLevel::Info => Color::Cyan,
            LogLevel::Copied => Color::Green,
            LogLevel::Skipped => Color::DarkGrey,
            LogLevel::Warning => Color::Yellow,
            LogLevel::Error => Color::Red,
        };
        format!("{} {}", marker.with(color), entry.message)
    }

    fn dim(&self, text: String) -> String {
        if self.color {
            format!("{}", text.with(Color::DarkGrey))
        } else {
            text
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }
}

impl SynthesisEventSink for ConsoleEventSink {
    fn on_event(&self, event: SynthesisEvent) {
        match event {
            SynthesisEvent::Started { source, doe_root } => {
                let arrow = if self.unicode { "→" } else { "->" };
                self.write_line(&format!(
                    "{} {arrow} {}",
                    source.display(),
                    doe_root.display()
                ));
            }
            SynthesisEvent::PhaseEntered { phase } => {
                if self.verbose > 0 {
                    self.write_line(&self.dim(format!("-- {}", phase.label())));
                }
            }
            SynthesisEvent::Logged(entry) => {
                if entry.level == LogLevel::Skipped && self.verbose == 0 {
                    return;
                }
                self.write_line(&self.format_entry(&entry));
            }
            SynthesisEvent::Finished { .. } => {}
        }
    }
}
