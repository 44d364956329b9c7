//! Plain-text rendering of an evaluation.

use std::fmt::Write;

use axt_tree::{AxNode, Evaluation};

/// Render the tree, elisions, and findings as indented text.
pub fn render(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    for root in &evaluation.tree.roots {
        render_node(&mut out, root, 0);
    }

    if !evaluation.tree.elided.is_empty() {
        out.push('\n');
        for (id, reason) in &evaluation.tree.elided {
            let _ = writeln!(out, "elided {id} ({reason:?})");
        }
    }

    if !evaluation.findings.is_empty() {
        out.push('\n');
        for finding in &evaluation.findings {
            let _ = writeln!(out, "{finding}");
        }
    }
    out
}

fn render_node(out: &mut String, node: &AxNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}{} {}", node.role, node.id);
    if let Some(name) = &node.name {
        let _ = write!(out, " \"{name}\"");
    }
    for (prop, value) in &node.props {
        if let Ok(rendered) = serde_json::to_string(value) {
            let _ = write!(out, " aria-{prop}={rendered}");
        }
    }
    out.push('\n');
    for child in &node.children {
        render_node(out, child, depth + 1);
    }
}
