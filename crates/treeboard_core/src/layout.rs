//! Breadth-first tree layout engine.
//!
//! # Responsibility
//! - Convert a tree snapshot into deterministic 2-D placements.
//! - Derive parent→child edges from structural node identity.
//!
//! # Invariants
//! - Output depends only on the input tree and the fixed constants.
//! - Every reachable node yields exactly one placement.
//! - `y` strictly increases with breadth-first level.
//! - Duplicate labels never alias: identity is the discovery index.

use crate::model::tree::{NodeColor, TreeNode};
use std::collections::{HashMap, VecDeque};

/// Fixed scene width in logical units.
pub const CANVAS_WIDTH: f64 = 1000.0;
/// Fixed scene height in logical units.
pub const CANVAS_HEIGHT: f64 = 520.0;
/// Node badge radius; edges stop this far from each endpoint center.
pub const BADGE_RADIUS: f64 = 18.0;

/// Width of the block each level is centered within.
const CENTERING_WIDTH: f64 = 900.0;
/// Horizontal distance between adjacent placements on one level.
const SIBLING_SPACING: f64 = 100.0;
/// Vertical distance between consecutive levels.
const LEVEL_SPACING: f64 = 110.0;
const LEFT_OFFSET: f64 = 30.0;
const TOP_OFFSET: f64 = 40.0;

/// Structural identity of a node within one layout pass.
///
/// Assigned in breadth-first discovery order (left child before right), so
/// two nodes sharing a label stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One node's derived render coordinate; recomputed every layout pass and
/// never diffed against prior output.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub id: NodeId,
    pub label: String,
    pub color: NodeColor,
    pub level: usize,
    pub x: f64,
    pub y: f64,
}

/// Parent→child connection between two placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Layout output for one tree snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeLayout {
    /// Placements in breadth-first order, left-to-right within each level.
    pub placements: Vec<Placement>,
    /// Edges in parent discovery order, left child before right.
    pub edges: Vec<Edge>,
}

impl TreeLayout {
    /// Looks up one placement by structural id.
    pub fn placement(&self, id: NodeId) -> Option<&Placement> {
        self.placements.iter().find(|placement| placement.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Computes placements and edges for the given root.
///
/// An absent root yields an empty layout; this is the empty-tree case, not
/// an error.
pub fn compute(root: Option<&TreeNode>) -> TreeLayout {
    let Some(root) = root else {
        return TreeLayout::default();
    };

    // Breadth-first pass: group nodes by level and record parent links
    // under freshly assigned structural ids.
    let mut levels: Vec<Vec<(NodeId, &TreeNode)>> = Vec::new();
    let mut links: Vec<(NodeId, NodeId)> = Vec::new();
    let mut queue: VecDeque<(&TreeNode, usize, Option<NodeId>)> = VecDeque::new();
    let mut next_id = 0usize;

    queue.push_back((root, 0, None));
    while let Some((node, level, parent)) = queue.pop_front() {
        let id = NodeId(next_id);
        next_id += 1;

        if levels.len() == level {
            levels.push(Vec::new());
        }
        levels[level].push((id, node));

        if let Some(parent) = parent {
            links.push((parent, id));
        }
        if let Some(left) = node.left.as_deref() {
            queue.push_back((left, level + 1, Some(id)));
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back((right, level + 1, Some(id)));
        }
    }

    // Coordinate pass: center each level as a block, constant vertical step.
    let mut placements = Vec::with_capacity(next_id);
    for (level, nodes) in levels.iter().enumerate() {
        let total_width = (nodes.len() - 1) as f64 * SIBLING_SPACING;
        let start_x = LEFT_OFFSET + (CENTERING_WIDTH - total_width) / 2.0;
        let y = TOP_OFFSET + level as f64 * LEVEL_SPACING;
        for (slot, (id, node)) in nodes.iter().enumerate() {
            placements.push(Placement {
                id: *id,
                label: node.data.clone(),
                color: node.color,
                level,
                x: start_x + slot as f64 * SIBLING_SPACING,
                y,
            });
        }
    }

    // Edge pass: resolve both endpoints through the identity map; a link
    // with a missing endpoint is skipped, never reported.
    let placed: HashMap<NodeId, usize> = placements
        .iter()
        .enumerate()
        .map(|(index, placement)| (placement.id, index))
        .collect();
    let edges = links
        .into_iter()
        .filter(|(from, to)| placed.contains_key(from) && placed.contains_key(to))
        .map(|(from, to)| Edge { from, to })
        .collect();

    TreeLayout { placements, edges }
}
