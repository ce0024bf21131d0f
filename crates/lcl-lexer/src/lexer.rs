//! Lexer for the LCL language
//!
//! Converts source code into a flat sequence of tokens in a single pass.
//! Whitespace and newlines are skipped, everything else becomes a token whose
//! text is a slice of the original source.

use crate::chars::{is_ascii_digit, is_skippable, is_word_continue};
use crate::error::{TokenizerError, TokenizerErrorKind};
use crate::single_char::{is_single_char_token, token_kind_for_char};
use crate::token::{Token, TokenKind};

/// The LCL language Lexer
///
/// A lexer is built for one source text, run once with [`Lexer::tokenize`]
/// and consumed by it.
pub struct Lexer<'src> {
    /// Source code being analyzed
    source: &'src str,
    /// Current byte offset
    pos: usize,
    /// Current line (1-indexed)
    line: u32,
    /// Tokens emitted so far
    tokens: Vec<Token<'src>>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source code
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Returns the current character without advancing
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Returns the next character without advancing
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
        }

        Some(ch)
    }

    /// Jumps to byte offset `end`, counting the newlines passed over
    fn bump_to(&mut self, end: usize) {
        let skipped = &self.source[self.pos..end];
        self.line += skipped.bytes().filter(|&b| b == b'\n').count() as u32;
        self.pos = end;
    }

    /// Emits a token covering `start..pos`
    fn push_token(&mut self, kind: TokenKind, start: usize, line: u32) {
        let token = Token::new(kind, &self.source[start..self.pos], line, start);
        tracing::trace!(kind = ?token.kind, offset = token.offset, line = token.line, "token");
        self.tokens.push(token);
    }

    fn error(&self, kind: TokenizerErrorKind, start: usize, line: u32) -> TokenizerError {
        TokenizerError::new(kind, start, line)
    }

    /// Skips a maximal run of whitespace and newlines
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_skippable(ch) {
                break;
            }
            self.advance();
        }
    }

    fn read_single_char(&mut self) {
        let start = self.pos;
        let line = self.line;
        if let Some(ch) = self.advance() {
            self.push_token(token_kind_for_char(ch), start, line);
        }
    }

    /// Reads `/`, `// ...` or `/* ... */`
    fn read_slash(&mut self) -> Result<(), TokenizerError> {
        match self.peek_next() {
            Some('/') => {
                self.read_single_line_comment();
                Ok(())
            }
            Some('*') => self.read_multi_line_comment(),
            _ => {
                self.read_single_char();
                Ok(())
            }
        }
    }

    /// Reads a comment up to, not including, the next newline
    fn read_single_line_comment(&mut self) {
        let start = self.pos;
        let line = self.line;
        let end = self.source[start..]
            .find('\n')
            .map_or(self.source.len(), |i| start + i);

        self.bump_to(end);
        self.push_token(TokenKind::Comment, start, line);
    }

    /// Reads a nested `/* ... */` comment.
    ///
    /// The scan looks at two bytes at a time. A matched `/*` or `*/` is
    /// consumed whole before looking for the next marker, so `/*/` does not
    /// close itself.
    fn read_multi_line_comment(&mut self) -> Result<(), TokenizerError> {
        let start = self.pos;
        let line = self.line;
        let source = self.source;
        let bytes = source.as_bytes();

        let mut depth = 1usize;
        let mut i = start + 2;

        while i + 1 < bytes.len() {
            match (bytes[i], bytes[i + 1]) {
                (b'/', b'*') => {
                    depth += 1;
                    i += 2;
                }
                (b'*', b'/') => {
                    depth -= 1;
                    i += 2;

                    if depth == 0 {
                        self.bump_to(i);
                        self.push_token(TokenKind::Comment, start, line);
                        return Ok(());
                    }
                }
                _ => i += 1,
            }
        }

        Err(self.error(TokenizerErrorKind::MultiLineCommentNotClosed, start, line))
    }

    /// Reads a string literal, quotes included.
    ///
    /// A backslash makes the following character part of the literal whatever
    /// it is, except NUL which is never allowed.
    fn read_string(&mut self) -> Result<(), TokenizerError> {
        let start = self.pos;
        let line = self.line;
        self.advance(); // Consume the opening quote

        let mut escaped = false;

        loop {
            let Some(ch) = self.peek() else {
                return Err(self.error(
                    TokenizerErrorKind::StringLiteralNotClosedProperly,
                    start,
                    line,
                ));
            };

            match ch {
                '\0' => {
                    return Err(self.error(
                        TokenizerErrorKind::NullCharacterInStringLiteral,
                        start,
                        line,
                    ));
                }
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\n' => {
                    return Err(self.error(TokenizerErrorKind::NewlineInStringLiteral, start, line));
                }
                '"' => {
                    self.advance(); // Consume the closing quote
                    break;
                }
                _ => {}
            }

            self.advance();
        }

        self.push_token(TokenKind::StringLiteral, start, line);
        Ok(())
    }

    /// Reads an integer or float literal made of digits, `_` and at most one `.`
    ///
    /// A `.` is taken into the literal, then given back when the character
    /// after it ends the literal, so `1.` and `1..` end before the first dot.
    /// A later `.` always ends the literal: `1.0.0` is `1.0` `.` `0`.
    fn read_number(&mut self) -> Result<(), TokenizerError> {
        let start = self.pos;
        let line = self.line;
        self.advance(); // Consume the first digit

        let mut seen_dot = false;
        let mut prev_was_dot = false;

        while let Some(ch) = self.peek() {
            let boundary = is_skippable(ch) || is_single_char_token(ch);
            if prev_was_dot && boundary {
                break;
            }
            prev_was_dot = false;

            match ch {
                '0'..='9' | '_' => {}
                '.' if !seen_dot => {
                    seen_dot = true;
                    prev_was_dot = true;
                }
                _ if boundary => break,
                _ => {
                    return Err(self.error(
                        TokenizerErrorKind::NumericLiteralContainsUnexpectedCharacter,
                        start,
                        line,
                    ));
                }
            }

            self.advance();
        }

        if prev_was_dot {
            // Give the dot back, it is punctuation
            self.pos -= 1;
        }

        if self.source[start..self.pos].ends_with('_') {
            return Err(self.error(
                TokenizerErrorKind::NumericLiteralEndsWithUnderscore,
                start,
                line,
            ));
        }

        self.push_token(TokenKind::NumericLiteral, start, line);
        Ok(())
    }

    /// Reads an identifier or keyword
    fn read_word(&mut self) {
        let start = self.pos;
        let line = self.line;
        self.advance();

        while let Some(ch) = self.peek() {
            if !is_word_continue(ch) {
                break;
            }
            self.advance();
        }

        self.push_token(TokenKind::Word, start, line);
    }

    /// Dispatches on the character at the cursor
    fn scan(&mut self, ch: char) -> Result<(), TokenizerError> {
        match ch {
            c if c != '/' && is_single_char_token(c) => self.read_single_char(),
            c if is_skippable(c) => self.skip_whitespace(),
            '/' => return self.read_slash(),
            '"' => return self.read_string(),
            c if is_ascii_digit(c) => return self.read_number(),
            // Letters, `_` and every code point no other rule claims
            _ => self.read_word(),
        }
        Ok(())
    }

    /// Tokenizes the entire source code.
    ///
    /// Stops at the first error; no tokens are returned in that case.
    pub fn tokenize(mut self) -> Result<Vec<Token<'src>>, TokenizerError> {
        tracing::debug!(bytes = self.source.len(), "tokenizing");

        while let Some(ch) = self.peek() {
            self.scan(ch).map_err(|error| {
                tracing::debug!(kind = ?error.kind, offset = error.offset, line = error.line, "tokenizing failed");
                error
            })?;
        }

        tracing::debug!(tokens = self.tokens.len(), lines = self.line, "tokenized");
        Ok(self.tokens)
    }
}

/// Tokenizes source code and returns the tokens
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, TokenizerError> {
    Lexer::new(source).tokenize()
}
