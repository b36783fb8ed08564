//! tsestree_ast: Abstract Syntax Tree definitions for the TypeScript/ESTree frontend.
//!
//! This crate defines the token taxonomy shared with the scanner, the node
//! kinds, and every AST node type. Nodes own their children and serialize to
//! ESTree-compatible JSON through serde.

pub mod jsx;
pub mod node;
pub mod node_kind;
pub mod operator;
mod spine;
pub mod token_kind;
pub mod typescript;
pub mod types;

// Re-export key types
pub use jsx::*;
pub use node::*;
pub use node_kind::NodeKind;
pub use operator::*;
pub use token_kind::TokenKind;
pub use typescript::*;
pub use types::*;
