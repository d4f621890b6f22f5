//! Utility macros for the compiler.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a literal payload

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal payload (optional, defaults to `TokenAttribute::None`)
/// * `$position` - Position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntConst, TokenAttribute::Int(42), position);
/// let semi = MK_TOKEN!(TokenKind::Semicolon, position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
            position: $position,
        }
    };
    ($kind:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $crate::lexer::tokens::TokenAttribute::None,
            position: $position,
        }
    };
}
