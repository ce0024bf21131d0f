//! Reserved words of the LCL language.

/// Words that can never be used as identifiers
pub const KEYWORDS: [&str; 24] = [
    // Modules
    "import",
    // Declarations
    "struct", "enum", "union",
    // Control flow
    "if", "else", "while", "for", "break", "continue", "return", "defer",
    // Values
    "true", "false", "null",
    // Primitive types
    "void", "bool", "char", "int", "uint", "float", "string",
    // Operators
    "cast", "sizeof",
];

/// Exact, case-sensitive membership test
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}
