//! lcl-lexer - Lexer/Tokenizer for the LCL language
//!
//! This crate converts LCL source code into a flat sequence of tokens, or
//! stops at the first lexical error.
//!
//! # Features
//!
//! - Nested multi-line comments (`/* /* */ */`) and single-line comments
//! - String literals with backslash escapes
//! - Integer and float literals with `_` separators (`1_000`, `3.14`)
//! - Words (identifiers and keywords), non-ASCII allowed
//! - 28 single character punctuation tokens
//!
//! Tokens borrow their text from the source; nothing is copied.
//!
//! # Example
//!
//! ```rust
//! use lcl_lexer::{tokenize, TokenKind};
//!
//! let source = r#"
//! import Print: *;
//! hello := 1;
//! "#;
//!
//! let tokens = tokenize(source).unwrap();
//!
//! assert!(tokens[0].is_keyword());
//! assert_eq!(tokens[1].text, "Print");
//! assert_eq!(tokens[2].kind, TokenKind::Colon);
//! ```

pub mod chars;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod single_char;
pub mod token;

pub use error::{TokenizerError, TokenizerErrorKind};
pub use keywords::{is_keyword, KEYWORDS};
pub use lexer::{tokenize, Lexer};
pub use single_char::{
    char_for_token_kind, is_single_char_token, token_kind_for_char, SINGLE_CHAR_TOKENS,
};
pub use token::{Token, TokenKind};
