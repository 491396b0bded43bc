use colored::Color;
use std::fmt::Write as _;

use super::{push_exception, Render, DATE_FORMAT};
use crate::{EnrichedRecord, Severity};

const TIMESTAMP: Style = Style::bold(Color::Magenta);
const LOGGER: Style = Style::plain(Color::Cyan);
const FILE: Style = Style::plain(Color::Green);
const FUNCTION: Style = Style::plain(Color::Magenta);
const LINE: Style = Style::plain(Color::Blue);
const CONTEXT: Style = Style::plain(Color::Yellow);

#[derive(Clone, Copy)]
struct Style {
    color: Color,
    bold: bool,
}

impl Style {
    const fn plain(color: Color) -> Self {
        Self { color, bold: false }
    }

    const fn bold(color: Color) -> Self {
        Self { color, bold: true }
    }

    fn for_level(severity: &Severity) -> Option<Self> {
        match severity.name() {
            "DEBUG" => Some(Self::plain(Color::Cyan)),
            "INFO" => Some(Self::plain(Color::Blue)),
            "WARNING" => Some(Self::plain(Color::Yellow)),
            "ERROR" => Some(Self::plain(Color::Red)),
            "CRITICAL" => Some(Self::bold(Color::Red)),
            _ => None,
        }
    }
}

/// Full contextual line:
///
/// ```text
/// 2026-10-14 09:30:00 [INFO ℹ️] [app] [main.rs:42 run()] [user_id=bob] [env=dev] - hi
/// ```
///
/// Context fields that are empty or `"-"` are left out.
#[derive(Debug, Clone, Copy)]
pub struct HumanRenderer {
    ansi: bool,
    symbol: bool,
}

impl Default for HumanRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanRenderer {
    /// Plain text with the level symbol
    pub fn new() -> Self {
        Self {
            ansi: false,
            symbol: true,
        }
    }

    /// Emit ANSI colour codes
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Show the level symbol next to the level name
    pub fn with_symbol(mut self, symbol: bool) -> Self {
        self.symbol = symbol;
        self
    }

    // Written directly so the per-renderer `ansi` flag wins over colored's process-wide SHOULD_COLORIZE
    fn paint(&self, out: &mut String, text: &str, style: Option<Style>) {
        match style {
            Some(style) if self.ansi => {
                let bold = if style.bold { "1;" } else { "" };
                let _ = write!(out, "\x1b[{}{}m{}\x1b[0m", bold, style.color.to_fg_str(), text);
            }
            _ => out.push_str(text),
        }
    }

    /// `[user_id=bob] [pid=7]`, or empty when every field is blank
    pub fn context_list(record: &EnrichedRecord) -> String {
        record
            .ordered_fields()
            .filter(|(_, v)| !v.is_blank())
            .map(|(k, v)| format!("[{}={}]", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Render for HumanRenderer {
    fn render(&self, record: &EnrichedRecord) -> String {
        let rec = &record.record;
        let level_style = Style::for_level(&rec.severity);
        let mut out = String::with_capacity(128 + rec.message.len());

        let ts = rec.timestamp.format(DATE_FORMAT).to_string();
        self.paint(&mut out, &ts, Some(TIMESTAMP));

        out.push_str(" [");
        let level = if self.symbol && !record.symbol.is_empty() {
            format!("{} {}", rec.severity, record.symbol)
        } else {
            rec.severity.to_string()
        };
        self.paint(&mut out, &level, level_style);
        out.push_str("] [");
        self.paint(&mut out, &rec.logger, Some(LOGGER));
        out.push_str("] [");

        self.paint(&mut out, rec.location.file_name(), Some(FILE));
        out.push(':');
        self.paint(&mut out, &rec.location.line.to_string(), Some(LINE));
        if let Some(function) = &rec.location.function {
            out.push(' ');
            self.paint(&mut out, &format!("{}()", function), Some(FUNCTION));
        }
        out.push(']');

        let context = Self::context_list(record);
        if !context.is_empty() {
            out.push(' ');
            self.paint(&mut out, &context, Some(CONTEXT));
        }

        out.push_str(" - ");
        self.paint(&mut out, &rec.message, level_style);
        push_exception(&mut out, record);
        out
    }
}
