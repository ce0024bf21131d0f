//! Bijection between punctuation characters and their token kinds.
//!
//! Every character in [`SINGLE_CHAR_TOKENS`] maps to exactly one
//! [`TokenKind`] and back. The scanner uses [`is_single_char_token`] as a
//! single dispatch branch instead of matching each character by hand.

use crate::token::TokenKind;

/// The punctuation characters that form a token on their own
pub const SINGLE_CHAR_TOKENS: [char; 28] = [
    '`', '~', '!', '@', '#', '%', '^', '&', '*', '(', ')', '-', '+', '=', ':', '<', '>', ',', '.',
    '[', ']', '{', '}', '|', ';', '/', '\\', '?',
];

fn try_token_kind_for_char(c: char) -> Option<TokenKind> {
    let kind = match c {
        '`' => TokenKind::Backtick,
        '~' => TokenKind::Tilde,
        '!' => TokenKind::ExclamationMark,
        '@' => TokenKind::At,
        '#' => TokenKind::Hash,
        '%' => TokenKind::Percent,
        '^' => TokenKind::Caret,
        '&' => TokenKind::Ampersand,
        '*' => TokenKind::Star,
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '-' => TokenKind::Minus,
        '+' => TokenKind::Plus,
        '=' => TokenKind::Equal,
        ':' => TokenKind::Colon,
        '<' => TokenKind::LeftAngle,
        '>' => TokenKind::RightAngle,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '[' => TokenKind::OpenBracket,
        ']' => TokenKind::CloseBracket,
        '{' => TokenKind::OpenCurly,
        '}' => TokenKind::CloseCurly,
        '|' => TokenKind::Pipe,
        ';' => TokenKind::Semicolon,
        '/' => TokenKind::ForwardSlash,
        '\\' => TokenKind::Backslash,
        '?' => TokenKind::QuestionMark,
        _ => return None,
    };
    Some(kind)
}

#[inline]
pub fn is_single_char_token(c: char) -> bool {
    try_token_kind_for_char(c).is_some()
}

/// Returns the kind of a punctuation character.
///
/// # Panics
///
/// Panics if `c` is not in [`SINGLE_CHAR_TOKENS`]; check with
/// [`is_single_char_token`] first.
pub fn token_kind_for_char(c: char) -> TokenKind {
    match try_token_kind_for_char(c) {
        Some(kind) => kind,
        None => panic!("{c:?} is not a single character token"),
    }
}

/// Returns the character a punctuation kind stands for.
///
/// # Panics
///
/// Panics for the content kinds (`Word`, `Comment`, `StringLiteral`,
/// `NumericLiteral`), which have no single character.
pub fn char_for_token_kind(kind: TokenKind) -> char {
    match kind {
        TokenKind::Backtick => '`',
        TokenKind::Tilde => '~',
        TokenKind::ExclamationMark => '!',
        TokenKind::At => '@',
        TokenKind::Hash => '#',
        TokenKind::Percent => '%',
        TokenKind::Caret => '^',
        TokenKind::Ampersand => '&',
        TokenKind::Star => '*',
        TokenKind::OpenParen => '(',
        TokenKind::CloseParen => ')',
        TokenKind::Minus => '-',
        TokenKind::Plus => '+',
        TokenKind::Equal => '=',
        TokenKind::Colon => ':',
        TokenKind::LeftAngle => '<',
        TokenKind::RightAngle => '>',
        TokenKind::Comma => ',',
        TokenKind::Dot => '.',
        TokenKind::OpenBracket => '[',
        TokenKind::CloseBracket => ']',
        TokenKind::OpenCurly => '{',
        TokenKind::CloseCurly => '}',
        TokenKind::Pipe => '|',
        TokenKind::Semicolon => ';',
        TokenKind::ForwardSlash => '/',
        TokenKind::Backslash => '\\',
        TokenKind::QuestionMark => '?',
        TokenKind::Word
        | TokenKind::Comment
        | TokenKind::StringLiteral
        | TokenKind::NumericLiteral => {
            panic!("{kind:?} does not stand for a single character")
        }
    }
}
