//! Helpers for the comment variants of the tree.
//!
//! Comments are ordinary nodes so they can participate in structural
//! equality, either attached to a node or kept as orphans. This module
//! provides the read-side conveniences on top of that: content access and
//! documentation-text extraction for Javadoc comments.

use super::node_types::Node;

impl Node {
    /// Whether this node is one of the comment variants.
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            Node::LineComment { .. } | Node::BlockComment { .. } | Node::JavadocComment { .. }
        )
    }

    /// Returns the raw comment content, without delimiters.
    ///
    /// `None` for non-comment nodes.
    pub fn comment_content(&self) -> Option<&str> {
        match self {
            Node::LineComment { content, .. }
            | Node::BlockComment { content, .. }
            | Node::JavadocComment { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Whether this node is a documentation comment.
    pub fn is_doc_comment(&self) -> bool {
        matches!(self, Node::JavadocComment { .. })
    }

    /// Returns the documentation text of a Javadoc comment with the
    /// decoration stripped: the leading `*` of each continuation line is
    /// removed and the lines are re-joined.
    ///
    /// `None` for anything that is not a Javadoc comment.
    pub fn doc_text(&self) -> Option<String> {
        let Node::JavadocComment { content, .. } = self else {
            return None;
        };

        Some(
            content
                .lines()
                .map(|line| line.trim_start().trim_start_matches('*').trim())
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}
