//! Character classes used by the scanner.
//!
//! All predicates are total and work on a single `char`. Code points at or
//! above `0x80` are opaque payload: they count as letters for word scanning
//! and are never whitespace or digits. So do the few ASCII characters that
//! no other token claims.

#[inline]
pub const fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub const fn is_ascii_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Space, tab and carriage return. Newline is classified separately.
#[inline]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

#[inline]
pub const fn is_newline(c: char) -> bool {
    c == '\n'
}

/// Whitespace skipped between tokens, newline included
#[inline]
pub const fn is_skippable(c: char) -> bool {
    is_whitespace(c) || is_newline(c)
}

#[inline]
const fn is_non_ascii(c: char) -> bool {
    !c.is_ascii()
}

/// `$`, `'` and control characters other than tab, CR and LF
#[inline]
const fn is_unclaimed_ascii(c: char) -> bool {
    matches!(c, '$' | '\'') || (c.is_ascii_control() && !is_skippable(c))
}

/// First character of a word: `[A-Za-z_]`, any non-ASCII code point, or an
/// unclaimed ASCII character
#[inline]
pub const fn is_word_start(c: char) -> bool {
    is_ascii_letter(c) || c == '_' || is_non_ascii(c) || is_unclaimed_ascii(c)
}

/// Subsequent characters of a word additionally allow digits
#[inline]
pub const fn is_word_continue(c: char) -> bool {
    is_word_start(c) || is_ascii_digit(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_excludes_newline() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\r'));
        assert!(!is_whitespace('\n'));
        assert!(is_newline('\n'));
        assert!(is_skippable('\n'));
        assert!(!is_skippable('\u{a0}'));
    }

    #[test]
    fn test_non_ascii_is_word_payload() {
        for c in ['漢', 'é', '\u{a0}', '😀'] {
            assert!(is_word_start(c), "{c:?}");
            assert!(is_word_continue(c), "{c:?}");
            assert!(!is_ascii_digit(c));
            assert!(!is_whitespace(c));
        }
    }

    #[test]
    fn test_digits_only_continue_words() {
        assert!(!is_word_start('7'));
        assert!(is_word_continue('7'));
        assert!(is_word_start('_'));
        assert!(!is_word_start('"'));
        assert!(!is_word_start(';'));
    }

    #[test]
    fn test_unclaimed_ascii_is_word_payload() {
        for c in ['$', '\'', '\0', '\u{0b}', '\u{0c}', '\u{7f}'] {
            assert!(is_word_start(c), "{c:?}");
            assert!(is_word_continue(c), "{c:?}");
        }
        for c in [' ', '\t', '\r', '\n'] {
            assert!(!is_word_continue(c), "{c:?}");
        }
    }
}
