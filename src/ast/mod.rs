// AST node module
//
// The tree model is split into focused submodules:
//
// - node_types: the closed Node enum, NodeBase, and supporting scalar types
// - node_impl: variant tags, accessors, factories, and trait implementations
// - comment: content helpers for the comment variants

pub mod comment;
pub mod node_impl;
pub mod node_types;

pub use node_impl::{NodeKind, node_vector};
pub use node_types::*;
