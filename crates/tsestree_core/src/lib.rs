//! tsestree_core: Core utilities for the tsestree TypeScript frontend.
//!
//! Provides text spans, ranges and the line map used to derive ESTree
//! `loc` positions from byte offsets.

pub mod text;

// Re-export commonly used types
pub use text::{LineMap, Position, SourceLocation, TextPos, TextRange, TextSpan};
