//! Relationship linker
//!
//! Resolves id-reference properties against the document id space and
//! turns `aria-owns` into explicit ownership edges. Ownership is a
//! second parent relation, distinct from containment: a target detaches
//! from its containment parent and reattaches under its owner. A node
//! has exactly one accessibility parent; a second claim on the same
//! target, a self-claim, or a claim that would loop the tree back on
//! itself is reported and rejected (earliest processed edge wins).

use axt_dom::{DomTree, NodeId};

use crate::finding::{Finding, FindingCode};
use crate::resolve::Resolution;

/// Ownership edges over the whole tree.
#[derive(Debug)]
pub struct Links {
    owner: Vec<Option<NodeId>>,
    owned: Vec<Vec<NodeId>>,
}

impl Links {
    /// Owner of `id` via `aria-owns`, if any.
    pub fn owner_of(&self, id: NodeId) -> Option<NodeId> {
        self.owner[id.index()]
    }

    /// Targets owned by `id`, in `aria-owns` order.
    pub fn owned_by(&self, id: NodeId) -> &[NodeId] {
        &self.owned[id.index()]
    }
}

/// Resolve all id references and build ownership edges.
///
/// Nodes are processed in document order, which fixes conflict
/// resolution deterministically.
pub fn link(dom: &DomTree, resolution: &Resolution, findings: &mut Vec<Finding>) -> Links {
    let mut links = Links {
        owner: vec![None; dom.len()],
        owned: vec![Vec::new(); dom.len()],
    };

    for (source, node) in dom.iter() {
        for (name, value) in &resolution.get(source).props {
            let refs = value.id_refs();
            if refs.is_empty() {
                continue;
            }
            for target_id in refs {
                let Some(target) = dom.by_id(target_id) else {
                    findings.push(Finding::error(
                        FindingCode::DanglingReference,
                        &node.id,
                        format!("'aria-{name}' references unknown id '{target_id}'"),
                    ));
                    continue;
                };
                if name == "owns" {
                    claim(dom, &mut links, source, target, findings);
                }
            }
        }
    }

    let edges: usize = links.owned.iter().map(Vec::len).sum();
    if edges > 0 {
        tracing::debug!(edges, "resolved ownership edges");
    }

    links
}

/// Try to record `owner` owning `target`.
fn claim(
    dom: &DomTree,
    links: &mut Links,
    owner: NodeId,
    target: NodeId,
    findings: &mut Vec<Finding>,
) {
    let owner_id = &dom.get(owner).id;
    let target_id = &dom.get(target).id;

    if owner == target {
        findings.push(Finding::error(
            FindingCode::ConflictingOwnership,
            owner_id,
            format!("'{owner_id}' can not own itself"),
        ));
        return;
    }

    if let Some(existing) = links.owner[target.index()] {
        findings.push(
            Finding::error(
                FindingCode::ConflictingOwnership,
                target_id,
                format!(
                    "'{target_id}' is already owned by '{}'; claim by '{owner_id}' ignored",
                    dom.get(existing).id
                ),
            )
            .with_node(owner_id),
        );
        return;
    }

    // Reject edges that would make `target` an ancestor of its own owner
    // in the effective (ownership-over-containment) tree.
    let mut cursor = Some(owner);
    while let Some(n) = cursor {
        if n == target {
            findings.push(
                Finding::error(
                    FindingCode::ConflictingOwnership,
                    owner_id,
                    format!("owning '{target_id}' would create an ownership cycle"),
                )
                .with_node(target_id),
            );
            return;
        }
        cursor = links.owner[n.index()].or(dom.get(n).parent);
    }

    links.owner[target.index()] = Some(owner);
    links.owned[owner.index()].push(target);
}
