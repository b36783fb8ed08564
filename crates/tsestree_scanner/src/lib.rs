//! tsestree_scanner: Lexer for TypeScript and JavaScript source text.
//!
//! The scanner works over byte offsets into a borrowed `&str` and hands out
//! [`Token`]s one at a time. Tokens whose meaning depends on the grammar
//! (`/` vs. a regular expression, `>` vs. `>>`, the tail of a template after
//! `}`) are re-scanned on request from the parser. Lexical errors never abort
//! scanning; they surface as `TokenKind::Illegal` tokens carrying a message.

pub mod char_codes;
mod numeric;
mod scanner;
mod token;

pub use numeric::{parse_bigint_literal, parse_numeric_literal};
pub use scanner::{Scanner, ScannerState};
pub use token::Token;
