//! Integration tests for the LCL tokenizer
//!
//! This crate drives the lexer the way a compiler driver would:
//! Source → Tokens, or Source → TokenizerError → rendered Diagnostic

use lcl_error::{Diagnostic, SourceFile};
use lcl_lexer::{tokenize, TokenKind, TokenizerErrorKind};

/// Result of tokenizing an LCL source file
#[derive(Debug)]
pub struct LexResult {
    /// Whether tokenization succeeded
    pub success: bool,
    /// Kind and text of every token (empty on failure)
    pub tokens: Vec<(TokenKind, String)>,
    /// Kind of the error that stopped the lexer
    pub error: Option<TokenizerErrorKind>,
    /// The error as a diagnostic
    pub diagnostic: Option<Diagnostic>,
    /// The diagnostic rendered against the source
    pub rendered: Option<String>,
}

/// Installs a test-friendly subscriber so lexer events show up with `--nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Tokenizes `source` as if it were read from `name`
pub fn lex_file(name: &str, source: &str) -> LexResult {
    let file = SourceFile::new(name, source);

    match tokenize(source) {
        Ok(tokens) => LexResult {
            success: true,
            tokens: tokens
                .into_iter()
                .map(|t| (t.kind, t.text.to_string()))
                .collect(),
            error: None,
            diagnostic: None,
            rendered: None,
        },
        Err(error) => {
            let diagnostic = error.to_diagnostic(&file);
            let rendered = diagnostic.render(&file);

            LexResult {
                success: false,
                tokens: Vec::new(),
                error: Some(error.kind),
                diagnostic: Some(diagnostic),
                rendered: Some(rendered),
            }
        }
    }
}

/// Tokenizes source code under a placeholder file name
pub fn lex(source: &str) -> LexResult {
    lex_file("test.lcl", source)
}

/// Asserts that source code tokenizes without errors
pub fn assert_lexes(source: &str) -> Vec<(TokenKind, String)> {
    let result = lex(source);
    if !result.success {
        panic!(
            "Expected source to tokenize, but got:\n{}",
            result.rendered.unwrap_or_default()
        );
    }
    result.tokens
}

/// Asserts that source code fails to tokenize with a specific error
pub fn assert_lex_fails(source: &str, expected: TokenizerErrorKind) -> String {
    let result = lex(source);
    match result.error {
        Some(kind) if kind == expected => result.rendered.unwrap_or_default(),
        Some(kind) => panic!("Expected {:?}, but got {:?}", expected, kind),
        None => panic!(
            "Expected source to fail with {:?}, but it produced {} tokens",
            expected,
            result.tokens.len()
        ),
    }
}

/// Asserts that source code tokenizes into exactly the given kinds
pub fn assert_kinds(source: &str, expected: &[TokenKind]) {
    let kinds: Vec<_> = assert_lexes(source).into_iter().map(|(k, _)| k).collect();
    if kinds != expected {
        panic!(
            "Token kinds differ.\n\nExpected: {:?}\n\nGot:      {:?}",
            expected, kinds
        );
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use lcl_lexer::{Token, SINGLE_CHAR_TOKENS};
    use pretty_assertions::assert_eq;

    use TokenKind::*;

    // =========================================
    // Programs
    // =========================================

    const HELLO_SAILOR: &str = r#"
        import Print: *;

        main :: () -> void
        {
            hello := 1;

            while (hello == 1)
            {
                print("Hello Sailor!");
            }
        }
    "#;

    #[test]
    fn test_hello_sailor_kinds() {
        init_tracing();
        assert_kinds(
            HELLO_SAILOR,
            &[
                Word, Word, Colon, Star, Semicolon,
                Word, Colon, Colon, OpenParen, CloseParen, Minus, RightAngle, Word,
                OpenCurly,
                Word, Colon, Equal, NumericLiteral, Semicolon,
                Word, OpenParen, Word, Equal, Equal, NumericLiteral, CloseParen,
                OpenCurly,
                Word, OpenParen, StringLiteral, CloseParen, Semicolon,
                CloseCurly,
                CloseCurly,
            ],
        );
    }

    #[test]
    fn test_hello_sailor_words() {
        let tokens = tokenize(HELLO_SAILOR).unwrap();
        let words: Vec<(&str, bool)> = tokens
            .iter()
            .filter(|t| t.is_word())
            .map(|t| (t.text, t.is_keyword()))
            .collect();

        assert_eq!(
            words,
            vec![
                ("import", true),
                ("Print", false),
                ("main", false),
                ("void", true),
                ("hello", false),
                ("while", true),
                ("hello", false),
                ("print", false),
            ]
        );
    }

    #[test]
    fn test_hello_sailor_lines() {
        let tokens = tokenize(HELLO_SAILOR).unwrap();
        let line_of = |text: &str| tokens.iter().find(|t| t.text == text).map(|t| t.line);

        assert_eq!(line_of("import"), Some(2));
        assert_eq!(line_of("main"), Some(4));
        assert_eq!(line_of("while"), Some(8));
        assert_eq!(line_of("\"Hello Sailor!\""), Some(10));
    }

    #[test]
    fn test_program_with_comments_and_floats() {
        let source = r#"
/* Area of a circle.
   /* nested: pi is approximated */
*/
area :: (r: float) -> float {
    return 3.141_592 * r * r; // good enough
}
"#;
        let tokens = assert_lexes(source);

        assert_eq!(tokens[0].0, Comment);
        assert!(tokens[0].1.ends_with("*/"));
        assert!(tokens.contains(&(NumericLiteral, "3.141_592".to_string())));
        assert!(tokens.contains(&(Comment, "// good enough".to_string())));
        assert_eq!(tokens.last().unwrap().0, CloseCurly);
    }

    // =========================================
    // Reference scenarios
    // =========================================

    #[test]
    fn test_empty_input() {
        assert!(assert_lexes("").is_empty());
    }

    #[test]
    fn test_lone_comment() {
        assert_eq!(assert_lexes("//hello"), vec![(Comment, "//hello".to_string())]);
    }

    #[test]
    fn test_unclosed_nested_comment() {
        let result = lex("/* /* inner */");
        assert_eq!(result.error, Some(TokenizerErrorKind::MultiLineCommentNotClosed));
        let span = result.diagnostic.unwrap().span;
        assert_eq!(span.start.offset, 0);
    }

    #[test]
    fn test_number_then_dots() {
        assert_kinds("1..", &[NumericLiteral, Dot, Dot]);
    }

    #[test]
    fn test_trailing_underscore() {
        assert_lex_fails("1_0_", TokenizerErrorKind::NumericLiteralEndsWithUnderscore);
    }

    #[test]
    fn test_newline_in_string() {
        assert_lex_fails("\"Test\n\"", TokenizerErrorKind::NewlineInStringLiteral);
    }

    #[test]
    fn test_import_is_keyword() {
        let tokens = tokenize("import").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_keyword());
        assert!(!tokens[0].is_identifier());
    }

    // =========================================
    // Diagnostics
    // =========================================

    #[test]
    fn test_rendered_string_error() {
        let rendered = assert_lex_fails(
            "x := 1;\ngreeting := \"hi\n",
            TokenizerErrorKind::NewlineInStringLiteral,
        );

        assert!(rendered.starts_with("error[EL002]: newline in string literal"));
        assert!(rendered.contains("--> test.lcl:2:13"));
        assert!(rendered.contains("greeting := \"hi"));
        assert!(rendered.contains("^ string literal starts here"));
        assert!(rendered.contains("help: close the string before the line ends"));
    }

    #[test]
    fn test_rendered_number_error_uses_file_name() {
        let result = lex_file("numbers.lcl", "value := 12ab;");
        assert_eq!(
            result.error,
            Some(TokenizerErrorKind::NumericLiteralContainsUnexpectedCharacter)
        );
        let rendered = result.rendered.unwrap();
        assert!(rendered.starts_with("error[EL006]"));
        assert!(rendered.contains("--> numbers.lcl:1:10"));
    }

    #[test]
    fn test_rendered_dot_followed_by_letter() {
        let rendered = assert_lex_fails(
            "len := 1.max;",
            TokenizerErrorKind::NumericLiteralContainsUnexpectedCharacter,
        );
        assert!(rendered.contains("--> test.lcl:1:8"));
        assert!(rendered.contains("1 | len := 1.max;"));
    }

    #[test]
    fn test_unclaimed_ascii_never_aborts() {
        for source in ["a $ b", "x = 'c';", "a\u{0b}b", "\u{7f}"] {
            let tokens = assert_lexes(source);
            assert!(tokens.iter().any(|(kind, _)| *kind == Word), "{source:?}");
        }
    }

    #[test]
    fn test_failure_discards_tokens() {
        let result = lex("a b c \"open");
        assert!(!result.success);
        assert!(result.tokens.is_empty());
    }

    // =========================================
    // Concurrency
    // =========================================

    #[test]
    fn test_parallel_tokenization() {
        let sources = [HELLO_SAILOR, "1.0.0", "/* a */ b", "\"s\" 12_3"];
        let expected: Vec<Vec<Token<'_>>> = sources.iter().map(|s| tokenize(s).unwrap()).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = sources
                .iter()
                .map(|source| scope.spawn(move || tokenize(source).unwrap()))
                .collect();

            for (handle, expected) in handles.into_iter().zip(&expected) {
                assert_eq!(&handle.join().unwrap(), expected);
            }
        });
    }

    // =========================================
    // Properties
    // =========================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn single_char_tokens_map_back_to_their_char(index in 0..SINGLE_CHAR_TOKENS.len()) {
                let c = SINGLE_CHAR_TOKENS[index];
                let source = c.to_string();
                let tokens = tokenize(&source).unwrap();
                prop_assert_eq!(tokens.len(), 1);
                prop_assert_eq!(tokens[0].kind.as_char(), Some(c));
            }

            #[test]
            fn any_ascii_text_is_tokenized_or_rejected(input in "[\\x00-\\x7F]{0,48}") {
                match lex(&input) {
                    LexResult { success: true, error: None, .. } => {}
                    LexResult { success: false, error: Some(_), rendered: Some(_), .. } => {}
                    other => prop_assert!(false, "inconsistent result {:?}", other),
                }
            }

            #[test]
            fn statements_survive_surrounding_whitespace(
                name in "[a-z][a-z0-9]{0,6}",
                value in "[0-9]{1,4}(\\.[0-9]{1,3})?",
                pad in "[ \t\r\n]{0,4}",
            ) {
                let source = format!("{pad}{name}{pad}:={pad}{value}{pad};{pad}");
                let tokens = tokenize(&source).unwrap();
                let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
                prop_assert_eq!(texts, vec![name.as_str(), ":", "=", value.as_str(), ";"]);
            }
        }
    }
}
