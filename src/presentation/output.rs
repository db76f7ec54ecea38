//! Output Rendering
//!
//! Renders the final clean report. Per-node messages are streamed by the
//! reporter while the clean runs; this is the one-line summary afterwards.

use crossterm::style::Stylize;

use crate::application::CleanReport;
use crate::config::{OutputFormat, Verbosity};

use super::terminal::TerminalCapabilities;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[!]",
        }
    }
}

/// Trait for rendering clean reports
pub trait CleanReportRenderer {
    fn render(&self, report: &CleanReport) -> String;
}

/// Text renderer for clean reports
pub struct TextRenderer {
    pub color: bool,
    pub unicode: bool,
    pub verbosity: Verbosity,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
            verbosity: Verbosity::Normal,
        }
    }
}

impl TextRenderer {
    fn paint(&self, icon: &str, ok: bool) -> String {
        match (self.color, ok) {
            (false, _) => icon.to_string(),
            (true, true) => icon.green().to_string(),
            (true, false) => icon.red().to_string(),
        }
    }
}

impl CleanReportRenderer for TextRenderer {
    fn render(&self, report: &CleanReport) -> String {
        let icons = if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        };
        let root = report.root().display();

        if let Some(aborted) = &report.aborted {
            return format!("{} Clean aborted: {}", self.paint(icons.cross, false), aborted);
        }

        let counts = format!(
            "{} files, {} directories deleted",
            report.deleted_files(),
            report.deleted_directories()
        );

        if report.is_success() {
            return format!("{} Cleaned {} ({})", self.paint(icons.check, true), root, counts);
        }

        let mut out = format!(
            "{} Partially cleaned {} ({}, {} failed)",
            self.paint(icons.warn, false),
            root,
            counts,
            report.failures.len()
        );
        if self.verbosity >= Verbosity::Verbose {
            for failure in &report.failures {
                out.push_str(&format!("\n  {} {}", icons.cross, failure));
            }
        }
        out
    }
}

/// JSON renderer for clean reports
///
/// Emits a single `clean_complete` line so it can follow the reporter's
/// NDJSON event stream.
pub struct JsonRenderer;

impl CleanReportRenderer for JsonRenderer {
    fn render(&self, report: &CleanReport) -> String {
        let json = serde_json::json!({
            "type": "clean_complete",
            "root": report.root().display().to_string(),
            "success": report.is_success(),
            "root_removed": report.root_removed(),
            "deleted_files": report.deleted_files(),
            "deleted_directories": report.deleted_directories(),
            "failures": report.failures,
            "aborted": report.aborted,
        });
        json.to_string()
    }
}

/// Create a renderer based on format and terminal capabilities
pub fn create_renderer(
    format: OutputFormat,
    caps: &TerminalCapabilities,
    verbosity: Verbosity,
) -> Box<dyn CleanReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer {
            color: caps.supports_color,
            unicode: caps.supports_unicode,
            verbosity,
        }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
