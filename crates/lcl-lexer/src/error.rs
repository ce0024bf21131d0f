//! Errors that abort tokenization.
//!
//! The lexer stops at the first malformed construct. The error records what
//! went wrong and where the offending construct starts, which is enough to
//! build a [`Diagnostic`] pointing at it.

use lcl_error::{Diagnostic, ErrorCode, SourceFile};
use thiserror::Error;

/// The closed set of lexical errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TokenizerErrorKind {
    #[error("multi-line comment is not closed")]
    MultiLineCommentNotClosed,
    #[error("newline in string literal")]
    NewlineInStringLiteral,
    #[error("null character in string literal")]
    NullCharacterInStringLiteral,
    #[error("string literal is not closed")]
    StringLiteralNotClosedProperly,
    #[error("numeric literal ends with an underscore")]
    NumericLiteralEndsWithUnderscore,
    #[error("numeric literal contains an unexpected character")]
    NumericLiteralContainsUnexpectedCharacter,
}

impl TokenizerErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MultiLineCommentNotClosed => ErrorCode::UNCLOSED_COMMENT,
            Self::NewlineInStringLiteral => ErrorCode::NEWLINE_IN_STRING,
            Self::NullCharacterInStringLiteral => ErrorCode::NULL_IN_STRING,
            Self::StringLiteralNotClosedProperly => ErrorCode::UNTERMINATED_STRING,
            Self::NumericLiteralEndsWithUnderscore => ErrorCode::NUMBER_TRAILING_UNDERSCORE,
            Self::NumericLiteralContainsUnexpectedCharacter => ErrorCode::INVALID_NUMBER,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::MultiLineCommentNotClosed => "comment opened here",
            Self::NewlineInStringLiteral
            | Self::NullCharacterInStringLiteral
            | Self::StringLiteralNotClosedProperly => "string literal starts here",
            Self::NumericLiteralEndsWithUnderscore
            | Self::NumericLiteralContainsUnexpectedCharacter => "numeric literal starts here",
        }
    }

    fn help(&self) -> &'static str {
        match self {
            Self::MultiLineCommentNotClosed => "add `*/` for every `/*`, nested ones included",
            Self::NewlineInStringLiteral => "close the string before the line ends",
            Self::NullCharacterInStringLiteral => "remove the null character",
            Self::StringLiteralNotClosedProperly => "add a closing `\"`",
            Self::NumericLiteralEndsWithUnderscore => "remove the trailing `_`",
            Self::NumericLiteralContainsUnexpectedCharacter => {
                "separate the number from what follows with whitespace or an operator"
            }
        }
    }
}

/// A lexical error and the place it originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at line {line}")]
pub struct TokenizerError {
    pub kind: TokenizerErrorKind,
    /// Byte offset of the start of the offending construct
    pub offset: usize,
    /// Line of `offset` (1-indexed)
    pub line: u32,
}

impl TokenizerError {
    pub fn new(kind: TokenizerErrorKind, offset: usize, line: u32) -> Self {
        Self { kind, offset, line }
    }

    /// Converts the error into a diagnostic labelled at the origin character
    pub fn to_diagnostic(&self, file: &SourceFile) -> Diagnostic {
        let end = file
            .source
            .get(self.offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(self.offset, |c| self.offset + c.len_utf8());
        let span = file.span(self.offset, end);

        Diagnostic::new(self.kind.code(), self.kind.to_string(), span, self.kind.label())
            .with_help(self.kind.help())
    }
}
