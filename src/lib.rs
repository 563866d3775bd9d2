//! Structural model of Java syntax trees with deep, comment-aware node
//! equality.
//!
//! Two trees compare equal when they have the same shape and attribute
//! content, independent of where the nodes came from or which instances
//! carry them. Source positions never participate; comments do. The
//! comparison is a pure function and a shared subtree short-circuits on
//! identity, so re-parsed, de-duplicated, and cache-validated trees can all
//! be checked with the same operation.

pub mod ast;
pub mod eq;

pub use ast::{Node, NodeBase, NodeKind, NodeVector};
pub use eq::equals;
