//! Tree snapshot wire model.
//!
//! # Responsibility
//! - Mirror the nested node shape served by `GET /api/tree`.
//! - Provide the small helpers layout and views need over a snapshot.
//!
//! # Invariants
//! - A snapshot is a strict binary tree: no cycles, no shared children.
//! - Absent or null `color` decodes as `NodeColor::Black`.
//! - The client never mutates structure; changes go through the service
//!   and come back via a full refetch.

use serde::{Deserialize, Deserializer, Serialize};

/// Node fill color reported by the tree service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeColor {
    Red,
    #[default]
    Black,
}

/// One node of the server-owned red-black tree.
///
/// Labels are opaque and not required to be unique; downstream layout uses
/// structural identity, never label equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub data: String,
    #[serde(default, deserialize_with = "color_or_black")]
    pub color: NodeColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a childless node.
    pub fn leaf(data: impl Into<String>, color: NodeColor) -> Self {
        Self {
            data: data.into(),
            color,
            left: None,
            right: None,
        }
    }

    /// Creates a node with optional children.
    pub fn branch(
        data: impl Into<String>,
        color: NodeColor,
        left: Option<TreeNode>,
        right: Option<TreeNode>,
    ) -> Self {
        Self {
            data: data.into(),
            color,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Counts the nodes reachable from this one, itself included.
    pub fn node_count(&self) -> usize {
        let mut count = 1;
        if let Some(left) = self.left.as_deref() {
            count += left.node_count();
        }
        if let Some(right) = self.right.as_deref() {
            count += right.node_count();
        }
        count
    }
}

/// Envelope returned by the tree endpoint; `root` is null for an empty tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    #[serde(default)]
    pub root: Option<TreeNode>,
}

fn color_or_black<'de, D>(deserializer: D) -> Result<NodeColor, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NodeColor>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::{NodeColor, TreeNode};

    #[test]
    fn node_count_covers_both_branches() {
        let tree = TreeNode::branch(
            "J",
            NodeColor::Black,
            Some(TreeNode::leaf("A", NodeColor::Red)),
            Some(TreeNode::branch(
                "S",
                NodeColor::Red,
                Some(TreeNode::leaf("N", NodeColor::Black)),
                None,
            )),
        );
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn leaf_counts_as_one() {
        assert_eq!(TreeNode::leaf("X", NodeColor::Black).node_count(), 1);
    }
}
