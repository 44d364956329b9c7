//! Accessibility tree builder
//!
//! Composes resolver output and ownership edges into the final tree:
//! - transparent and presentational nodes are elided, their children
//!   spliced into the parent at the same position
//! - owned children are appended after contained children, in
//!   `aria-owns` order; a node owned by anyone leaves its containment
//!   position
//! - `aria-hidden` subtrees are pruned
//!
//! Every input node ends up either in the tree or in the elision
//! record. The output is an immutable, serializable value.

use std::collections::BTreeMap;

use axt_dom::{DomTree, MAX_DEPTH, NodeId};
use axt_roles::{PropValue, Role};
use serde::{Deserialize, Serialize};

use crate::finding::{Finding, FindingCode};
use crate::link::Links;
use crate::resolve::Resolution;

/// Why a node is absent from the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElideReason {
    /// Generic container with no role; children promoted.
    Transparent,
    /// Semantics stripped by a presentation role; children promoted.
    Presentational,
    /// Pruned subtree under `aria-hidden="true"`.
    Hidden,
    /// Cut off past the effective-tree depth limit.
    Truncated,
}

/// One node of the accessibility tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxNode {
    /// Source element id.
    pub id: String,
    /// Effective role.
    pub role: Role,
    /// Accessible name, if one could be computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resolved `aria-*` values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, PropValue>,
    /// Ordered children: contained first, then owned.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AxNode>,
}

/// The derived accessibility tree plus the record of elided nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxTree {
    /// Top-level nodes (more than one when the document root itself is
    /// transparent).
    pub roots: Vec<AxNode>,
    /// Every input node absent from `roots`, with the reason.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub elided: BTreeMap<String, ElideReason>,
}

impl AxTree {
    /// Depth-first walk over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &AxNode> {
        let mut stack: Vec<&AxNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Find a node by source id.
    pub fn find(&self, id: &str) -> Option<&AxNode> {
        self.iter().find(|n| n.id == id)
    }

    /// All landmark nodes, in tree order.
    pub fn landmarks(&self) -> Vec<&AxNode> {
        self.iter().filter(|n| n.role.is_landmark()).collect()
    }

    /// All nodes carrying `role`, in tree order.
    pub fn nodes_with_role(&self, role: Role) -> Vec<&AxNode> {
        self.iter().filter(|n| n.role == role).collect()
    }

    /// Number of exposed nodes.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl AxNode {
    /// Direct children carrying `role`.
    pub fn children_with_role(&self, role: Role) -> impl Iterator<Item = &AxNode> {
        self.children.iter().filter(move |c| c.role == role)
    }
}

/// Compose the final tree from resolver and linker output.
pub fn build(
    dom: &DomTree,
    resolution: &Resolution,
    links: &Links,
    findings: &mut Vec<Finding>,
) -> AxTree {
    let mut elided = BTreeMap::new();
    let roots = emit(dom, resolution, links, dom.root(), 1, &mut elided, findings);
    tracing::debug!(exposed = roots.len(), elided = elided.len(), "built accessibility tree");
    AxTree { roots, elided }
}

/// Emit a node as zero, one, or many accessibility nodes (many when a
/// transparent node splices its children upward).
///
/// Containment depth is capped at build time, but ownership edges can
/// chain flat siblings into an arbitrarily deep effective tree, so the
/// same limit is enforced again here.
fn emit(
    dom: &DomTree,
    resolution: &Resolution,
    links: &Links,
    id: NodeId,
    depth: usize,
    elided: &mut BTreeMap<String, ElideReason>,
    findings: &mut Vec<Finding>,
) -> Vec<AxNode> {
    let node = dom.get(id);
    let resolved = resolution.get(id);

    if depth > MAX_DEPTH {
        findings.push(Finding::error(
            FindingCode::DepthLimitExceeded,
            &node.id,
            format!("effective tree deeper than {MAX_DEPTH}; subtree truncated"),
        ));
        mark_subtree(dom, links, id, ElideReason::Truncated, elided);
        return Vec::new();
    }

    if resolved.hidden {
        mark_subtree(dom, links, id, ElideReason::Hidden, elided);
        return Vec::new();
    }

    let mut children = Vec::new();
    for child in effective_children(dom, links, id) {
        children.extend(emit(dom, resolution, links, child, depth + 1, elided, findings));
    }

    let Some(role) = resolved.role else {
        let reason = if resolved.presentational {
            ElideReason::Presentational
        } else {
            ElideReason::Transparent
        };
        elided.insert(node.id.clone(), reason);
        return children;
    };

    vec![AxNode {
        id: node.id.clone(),
        role,
        name: accessible_name(dom, resolution, id),
        props: resolved.props.clone(),
        children,
    }]
}

/// Contained children that were not claimed elsewhere, followed by
/// owned targets in `aria-owns` order.
fn effective_children(dom: &DomTree, links: &Links, id: NodeId) -> Vec<NodeId> {
    let mut out: Vec<NodeId> = dom
        .get(id)
        .children
        .iter()
        .copied()
        .filter(|&c| links.owner_of(c).is_none())
        .collect();
    out.extend_from_slice(links.owned_by(id));
    out
}

/// Record an excluded subtree, including everything it would have
/// owned. Worklist instead of recursion: the effective tree can be far
/// deeper than the containment tree.
fn mark_subtree(
    dom: &DomTree,
    links: &Links,
    id: NodeId,
    reason: ElideReason,
    elided: &mut BTreeMap<String, ElideReason>,
) {
    let mut work = vec![id];
    while let Some(next) = work.pop() {
        elided.insert(dom.get(next).id.clone(), reason);
        work.extend(effective_children(dom, links, next));
    }
}

/// Accessible name: `aria-labelledby` (the referenced nodes' own labels
/// or text, space-joined) wins over `aria-label`, which wins over the
/// node's visible text.
fn accessible_name(dom: &DomTree, resolution: &Resolution, id: NodeId) -> Option<String> {
    let resolved = resolution.get(id);

    if let Some(value) = resolved.props.get("labelledby") {
        let parts: Vec<&str> = value
            .id_refs()
            .iter()
            .filter_map(|ref_id| dom.by_id(ref_id))
            .filter_map(|target| own_label(dom, resolution, target))
            .collect();
        if !parts.is_empty() {
            return Some(parts.join(" "));
        }
    }

    own_label(dom, resolution, id).map(str::to_string)
}

fn own_label<'a>(dom: &'a DomTree, resolution: &'a Resolution, id: NodeId) -> Option<&'a str> {
    if let Some(PropValue::Text(label)) = resolution.get(id).props.get("label") {
        return Some(label);
    }
    dom.get(id).text.as_deref().filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::link;
    use crate::resolve::resolve;
    use axt_dom::{ElementDecl, Snapshot};

    fn run(elements: Vec<ElementDecl>) -> AxTree {
        let dom = DomTree::build(&Snapshot { elements }).unwrap();
        let mut findings = Vec::new();
        let resolution = resolve(&dom, &mut findings);
        let links = link(&dom, &resolution, &mut findings);
        build(&dom, &resolution, &links, &mut findings)
    }

    fn el(id: &str, tag: &str) -> ElementDecl {
        ElementDecl::new(id, tag)
    }

    #[test]
    fn test_transparent_div_splices_children() {
        let mut root = el("root", "nav");
        root.children = Some(vec!["wrap".into()]);
        let mut wrap = el("wrap", "div");
        wrap.children = Some(vec!["a".into(), "b".into()]);
        let tree = run(vec![root, wrap, el("a", "button"), el("b", "button")]);
        let nav = &tree.roots[0];
        assert_eq!(nav.role, Role::Navigation);
        assert_eq!(nav.children.len(), 2);
        assert_eq!(tree.elided.get("wrap"), Some(&ElideReason::Transparent));
    }

    #[test]
    fn test_owned_children_appended_after_native() {
        let mut root = el("root", "div");
        root.children = Some(vec!["grid".into(), "x".into(), "y".into()]);
        let mut grid = el("grid", "table");
        grid.attrs.insert("aria-owns".into(), "y x".into());
        grid.children = Some(vec!["r".into()]);
        let tree = run(vec![
            root,
            grid,
            el("x", "section"),
            el("y", "section"),
            el("r", "tr"),
        ]);
        let grid = tree.find("grid").unwrap();
        let ids: Vec<&str> = grid.children.iter().map(|c| c.id.as_str()).collect();
        // native first, then owned in aria-owns order
        assert_eq!(ids, ["r", "y", "x"]);
    }

    #[test]
    fn test_hidden_subtree_pruned_and_recorded() {
        let mut root = el("root", "main");
        root.children = Some(vec!["panel".into()]);
        let mut panel = el("panel", "section");
        panel.attrs.insert("aria-hidden".into(), "true".into());
        panel.children = Some(vec!["inner".into()]);
        let tree = run(vec![root, panel, el("inner", "button")]);
        assert!(tree.find("panel").is_none());
        assert_eq!(tree.elided.get("panel"), Some(&ElideReason::Hidden));
        assert_eq!(tree.elided.get("inner"), Some(&ElideReason::Hidden));
    }

    #[test]
    fn test_every_node_accounted_for() {
        let mut root = el("root", "div");
        root.children = Some(vec!["a".into(), "b".into()]);
        let mut a = el("a", "table");
        a.role = Some("presentation".into());
        let mut b = el("b", "div");
        b.attrs.insert("aria-hidden".into(), "true".into());
        let tree = run(vec![root, a, b]);
        let exposed: usize = tree.len();
        assert_eq!(exposed + tree.elided.len(), 3);
    }

    #[test]
    fn test_accessible_name_precedence() {
        let mut root = el("root", "div");
        root.children = Some(vec!["label".into(), "field".into()]);
        let mut label = el("label", "h2");
        label.text = Some("Date of birth".into());
        let mut field = el("field", "input");
        field
            .attrs
            .insert("aria-labelledby".into(), "label".into());
        field.attrs.insert("aria-label".into(), "ignored".into());
        let tree = run(vec![root, label, field]);
        let field = tree.find("field").unwrap();
        assert_eq!(field.name.as_deref(), Some("Date of birth"));
    }

    #[test]
    fn test_landmark_query() {
        let mut root = el("root", "div");
        root.children = Some(vec!["nav".into(), "main".into()]);
        let tree = run(vec![root, el("nav", "nav"), el("main", "main")]);
        let landmarks = tree.landmarks();
        assert_eq!(landmarks.len(), 2);
    }
}
