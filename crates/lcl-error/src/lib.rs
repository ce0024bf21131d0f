//! lcl-error - Source locations and diagnostics for the LCL language
//!
//! Errors found in LCL source are reported as a [`Diagnostic`] pointing at a
//! [`Span`] of a [`SourceFile`], rendered in the style of the Rust compiler.
//!
//! # Example
//!
//! ```rust
//! use lcl_error::{Diagnostic, ErrorCode, SourceFile};
//!
//! let file = SourceFile::new("example.lcl", "x := 1_;");
//!
//! let diagnostic = Diagnostic::new(
//!     ErrorCode::NUMBER_TRAILING_UNDERSCORE,
//!     "numeric literal ends with an underscore",
//!     file.span(5, 7),
//!     "remove the trailing `_`",
//! );
//!
//! assert!(diagnostic.render(&file).contains("--> example.lcl:1:6"));
//! ```

pub mod diagnostic;
pub mod source;

pub use diagnostic::{Diagnostic, ErrorCode};
pub use source::{Position, SourceFile, Span};
