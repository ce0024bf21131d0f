//! Tokens for the LCL language
//!
//! Defines all token kinds that the lexer can produce, and the token value
//! itself: a kind plus the slice of source it was scanned from.

use crate::keywords::is_keyword;
use crate::single_char::char_for_token_kind;
use lcl_error::{SourceFile, Span};
use std::fmt;

/// All token kinds for the LCL language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================
    // Content tokens
    // =========================================
    /// Identifier or keyword: `main`, `while`, `_tmp1`
    Word,
    /// `// ...` or `/* ... */`, nesting allowed
    Comment,
    /// `"..."`, quotes included
    StringLiteral,
    /// `42`, `1_000`, `3.14`
    NumericLiteral,

    // =========================================
    // Single character punctuation
    // =========================================
    /// `` ` ``
    Backtick,
    /// `~`
    Tilde,
    /// `!`
    ExclamationMark,
    /// `@`
    At,
    /// `#`
    Hash,
    /// `%`
    Percent,
    /// `^`
    Caret,
    /// `&`
    Ampersand,
    /// `*`
    Star,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `=`
    Equal,
    /// `:`
    Colon,
    /// `<`
    LeftAngle,
    /// `>`
    RightAngle,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenCurly,
    /// `}`
    CloseCurly,
    /// `|`
    Pipe,
    /// `;`
    Semicolon,
    /// `/`
    ForwardSlash,
    /// `\`
    Backslash,
    /// `?`
    QuestionMark,
}

impl TokenKind {
    /// Returns true for the punctuation kinds, which always span exactly one character
    pub fn is_single_char(&self) -> bool {
        !matches!(
            self,
            TokenKind::Word
                | TokenKind::Comment
                | TokenKind::StringLiteral
                | TokenKind::NumericLiteral
        )
    }

    /// Returns the character a punctuation kind stands for
    pub fn as_char(&self) -> Option<char> {
        self.is_single_char().then(|| char_for_token_kind(*self))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word => write!(f, "word"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::NumericLiteral => write!(f, "numeric literal"),
            punct => write!(f, "`{}`", char_for_token_kind(*punct)),
        }
    }
}

/// A token with its location in the source code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// Token kind
    pub kind: TokenKind,
    /// Exact source text of the token, never empty
    pub text: &'src str,
    /// Line where the token starts (1-indexed)
    pub line: u32,
    /// Byte offset of the first character
    pub offset: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, line: u32, offset: usize) -> Self {
        debug_assert!(!text.is_empty(), "tokens are never empty");
        Self {
            kind,
            text,
            line,
            offset,
        }
    }

    /// Byte offset one past the last character
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Resolves the token's location inside `file`
    pub fn span(&self, file: &SourceFile) -> Span {
        file.span(self.offset, self.end())
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// A word whose text is a reserved word
    pub fn is_keyword(&self) -> bool {
        self.is_word() && is_keyword(self.text)
    }

    /// A word that is not a reserved word
    pub fn is_identifier(&self) -> bool {
        self.is_word() && !is_keyword(self.text)
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    pub fn is_single_line_comment(&self) -> bool {
        self.is_comment() && self.text.starts_with("//")
    }

    pub fn is_multi_line_comment(&self) -> bool {
        self.is_comment() && self.text.starts_with("/*")
    }

    pub fn is_string_literal(&self) -> bool {
        self.kind == TokenKind::StringLiteral
    }

    pub fn is_numeric_literal(&self) -> bool {
        self.kind == TokenKind::NumericLiteral
    }

    /// Numeric literal without a `.`
    pub fn is_int_literal(&self) -> bool {
        self.is_numeric_literal() && !self.text.contains('.')
    }

    /// Numeric literal with a `.`
    pub fn is_float_literal(&self) -> bool {
        self.is_numeric_literal() && self.text.contains('.')
    }

    pub fn is_single_char_token(&self) -> bool {
        self.kind.is_single_char()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at line {}", self.kind, self.text, self.line)
    }
}
