//! SVG scene renderer for tree layouts.
//!
//! # Responsibility
//! - Emit the fixed-size scene: one line per edge, one labeled circular
//!   badge per node, RED/BLACK color-coded.
//!
//! # Invariants
//! - Output is deterministic for a given layout.
//! - Edge endpoints are inset by the badge radius (parent bottom to child
//!   top).
//! - Labels are XML-escaped before embedding.

use crate::layout::{NodeId, Placement, TreeLayout, BADGE_RADIUS, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::model::tree::NodeColor;
use std::collections::HashMap;
use std::fmt::Write;

const EDGE_STROKE: &str = "#94a3b8";
const EDGE_STROKE_WIDTH: f64 = 2.0;
const RED_FILL: &str = "#ef4444";
const BLACK_FILL: &str = "#000000";
const LABEL_FILL: &str = "#ffffff";

/// Renders one layout as a standalone SVG document.
pub fn svg_document(layout: &TreeLayout) -> String {
    let by_id: HashMap<NodeId, &Placement> = layout
        .placements
        .iter()
        .map(|placement| (placement.id, placement))
        .collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}">"#
    );

    // Edges first so badges paint over the line ends.
    for edge in &layout.edges {
        let (Some(parent), Some(child)) = (by_id.get(&edge.from), by_id.get(&edge.to)) else {
            continue;
        };
        let _ = writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{EDGE_STROKE}" stroke-width="{EDGE_STROKE_WIDTH}" />"#,
            parent.x,
            parent.y + BADGE_RADIUS,
            child.x,
            child.y - BADGE_RADIUS
        );
    }

    for placement in &layout.placements {
        let fill = match placement.color {
            NodeColor::Red => RED_FILL,
            NodeColor::Black => BLACK_FILL,
        };
        let _ = writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{BADGE_RADIUS}" fill="{fill}" />"#,
            placement.x, placement.y
        );
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" fill="{LABEL_FILL}" font-weight="bold" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            placement.x,
            placement.y,
            xml_escape(&placement.label)
        );
    }

    out.push_str("</svg>\n");
    out
}

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{svg_document, xml_escape};
    use crate::layout::{compute, TreeLayout};
    use crate::model::tree::{NodeColor, TreeNode};

    #[test]
    fn empty_layout_renders_a_bare_scene() {
        let svg = svg_document(&TreeLayout::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn three_node_tree_renders_two_edges_and_three_badges() {
        let root = TreeNode::branch(
            "J",
            NodeColor::Black,
            Some(TreeNode::leaf("A", NodeColor::Red)),
            Some(TreeNode::leaf("S", NodeColor::Red)),
        );
        let svg = svg_document(&compute(Some(&root)));
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("#ef4444").count(), 2);
        assert_eq!(svg.matches("#000000").count(), 1);
    }

    #[test]
    fn labels_are_xml_escaped() {
        assert_eq!(xml_escape("a<b&c>\"d'"), "a&lt;b&amp;c&gt;&quot;d&apos;");
        let root = TreeNode::leaf("<J>", NodeColor::Black);
        let svg = svg_document(&compute(Some(&root)));
        assert!(svg.contains("&lt;J&gt;"));
        assert!(!svg.contains("<J>"));
    }
}
