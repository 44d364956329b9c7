//! Semantics resolver
//!
//! Computes each node's effective role and typed property values.
//!
//! Effective role, in order:
//! 1. Inside a presentation-stripped subtree a node loses its semantics,
//!    unless its tag is a required structural child (a `tr` under a
//!    presentational `table` still resolves on its own).
//! 2. An explicit role wins when it is concrete and the tag allows the
//!    redefinition. Abstract roles are rejected with a finding and fall
//!    back to no role; non-redefinable assignments are rejected and fall
//!    back to the implicit role; unknown tokens warn and fall back.
//! 3. Otherwise the tag's implicit role applies, possibly none.

use std::collections::BTreeMap;

use axt_dom::{DomTree, NodeId};
use axt_roles::{
    PropValue, Role, implicit_role_for, is_redefinable, is_structural_child_tag, prop_kind,
};

use crate::finding::{Finding, FindingCode};

/// Resolver output for one node.
#[derive(Debug, Clone)]
pub struct ResolvedNode {
    /// Effective role; `None` for generic, stripped, or rejected nodes.
    pub role: Option<Role>,
    /// Typed `aria-*` values, keyed by property name without the prefix.
    pub props: BTreeMap<String, PropValue>,
    /// Subtree excluded via `aria-hidden="true"`.
    pub hidden: bool,
    /// Semantics stripped by an explicit or inherited presentation role.
    pub presentational: bool,
}

/// Resolver output for the whole tree, indexed by `NodeId`.
#[derive(Debug)]
pub struct Resolution {
    nodes: Vec<ResolvedNode>,
}

impl Resolution {
    pub fn get(&self, id: NodeId) -> &ResolvedNode {
        &self.nodes[id.index()]
    }
}

/// Resolve every node of the tree, accumulating findings.
pub fn resolve(dom: &DomTree, findings: &mut Vec<Finding>) -> Resolution {
    let mut nodes: Vec<Option<ResolvedNode>> = vec![None; dom.len()];
    resolve_into(dom, dom.root(), false, &mut nodes, findings);
    let nodes = nodes
        .into_iter()
        .map(|n| n.unwrap_or(ResolvedNode {
            role: None,
            props: BTreeMap::new(),
            hidden: false,
            presentational: false,
        }))
        .collect();
    Resolution { nodes }
}

fn resolve_into(
    dom: &DomTree,
    id: NodeId,
    stripped: bool,
    out: &mut Vec<Option<ResolvedNode>>,
    findings: &mut Vec<Finding>,
) {
    let node = dom.get(id);
    let props = resolve_props(&node.id, &node.attrs, findings);
    let hidden = matches!(props.get("hidden"), Some(PropValue::Bool(true)));

    let stripped_here = stripped && !is_structural_child_tag(&node.tag);
    let (role, presentational) = if stripped_here {
        (None, true)
    } else {
        effective_role(&node.id, &node.tag, node.role.as_deref(), findings)
    };

    out[id.index()] = Some(ResolvedNode {
        role,
        props,
        hidden,
        presentational,
    });

    for &child in &node.children {
        resolve_into(dom, child, presentational, out, findings);
    }
}

/// Effective role of a node outside any stripped context.
/// Returns the role plus whether the node strips its own subtree.
fn effective_role(
    id: &str,
    tag: &str,
    explicit: Option<&str>,
    findings: &mut Vec<Finding>,
) -> (Option<Role>, bool) {
    let implicit = implicit_role_for(tag);
    let Some(token) = explicit else {
        return (implicit, false);
    };

    let Some(role) = Role::parse(token) else {
        findings.push(Finding::warning(
            FindingCode::UnknownRole,
            id,
            format!("unknown role token '{token}', falling back to the '{tag}' tag semantics"),
        ));
        return (implicit, false);
    };

    if role == Role::Presentation {
        findings.push(Finding::warning(
            FindingCode::StrippedSemantics,
            id,
            format!("role 'presentation' strips semantics of '{tag}' and its subtree"),
        ));
        return (None, true);
    }

    if role.is_abstract() {
        findings.push(Finding::error(
            FindingCode::InvalidRole,
            id,
            format!("abstract role '{role}' can not be assigned to an element"),
        ));
        return (None, false);
    }

    if !is_redefinable(tag, role) {
        findings.push(Finding::error(
            FindingCode::NonRedefinableRole,
            id,
            format!("native semantics of '{tag}' can not be redefined to '{role}'"),
        ));
        return (implicit, false);
    }

    (Some(role), false)
}

fn resolve_props(
    id: &str,
    attrs: &BTreeMap<String, String>,
    findings: &mut Vec<Finding>,
) -> BTreeMap<String, PropValue> {
    let mut props = BTreeMap::new();
    for (attr, raw) in attrs {
        let Some(name) = attr.strip_prefix("aria-") else {
            continue;
        };
        let Some(kind) = prop_kind(name) else {
            findings.push(Finding::warning(
                FindingCode::UnknownProperty,
                id,
                format!("unsupported property 'aria-{name}'"),
            ));
            continue;
        };
        match PropValue::parse(kind, raw) {
            Some(value) => {
                props.insert(name.to_string(), value);
            }
            None => {
                findings.push(Finding::warning(
                    FindingCode::MalformedPropertyValue,
                    id,
                    format!("value '{raw}' does not fit 'aria-{name}' ({kind:?})"),
                ));
            }
        }
    }
    props
}
