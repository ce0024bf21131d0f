//! Diagnostics for lexical errors
//!
//! A diagnostic carries an error code, a message, the span it is about and
//! an optional hint. [`Diagnostic::render`] turns it into a compiler-style
//! report with the offending line underlined:
//!
//! ```text
//! error[EL002]: newline in string literal
//!  --> test.lcl:2:13
//!   |
//! 2 | greeting := "hi
//!   |             ^ string literal starts here
//!   = help: close the string before the line ends
//! ```

use crate::source::{SourceFile, Span};
use std::fmt;

/// Error code, displayed as `EL001`, `EL002`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    pub const UNCLOSED_COMMENT: Self = Self(1);
    pub const NEWLINE_IN_STRING: Self = Self(2);
    pub const NULL_IN_STRING: Self = Self(3);
    pub const UNTERMINATED_STRING: Self = Self(4);
    pub const NUMBER_TRAILING_UNDERSCORE: Self = Self(5);
    pub const INVALID_NUMBER: Self = Self(6);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EL{:03}", self.0)
    }
}

/// An error report about one span of a source file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error[{code}]: {message}")]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Region the report points at
    pub span: Span,
    /// Text printed under the underlined region
    pub label: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        label: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            label: label.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Renders the diagnostic against the file its span points into
    pub fn render(&self, file: &SourceFile) -> String {
        Report { diagnostic: self, file }.to_string()
    }
}

struct Report<'a> {
    diagnostic: &'a Diagnostic,
    file: &'a SourceFile,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report { diagnostic, file } = self;
        let Span { start, end } = diagnostic.span;

        writeln!(f, "{diagnostic}")?;

        let gutter = " ".repeat(start.line.to_string().len());
        writeln!(f, "{gutter}--> {}:{}:{}", file.name, start.line, start.column)?;

        if let Some(text) = file.line(start.line) {
            // Spans running past the line are underlined up to its end
            let width = if end.line == start.line {
                end.column.saturating_sub(start.column) as usize
            } else {
                (text.chars().count() + 1).saturating_sub(start.column as usize)
            };
            let indent = " ".repeat(start.column.saturating_sub(1) as usize);
            let underline = "^".repeat(width.max(1));

            writeln!(f, "{gutter} |")?;
            writeln!(f, "{} | {text}", start.line)?;
            writeln!(f, "{gutter} | {indent}{underline} {}", diagnostic.label)?;
        }

        if let Some(help) = &diagnostic.help {
            writeln!(f, "{gutter} = help: {help}")?;
        }

        Ok(())
    }
}
