//! axt Tree
//!
//! Accessibility tree computation and validation:
//! - Semantics resolver (effective roles, typed properties)
//! - Relationship linker (`aria-owns` ownership edges, id references)
//! - Tree builder (elision, splicing, owned-child ordering)
//! - Validator (required owned elements, configurable property rules)
//!
//! The whole pipeline is a pure function of a built `DomTree`: no
//! shared state, no side effects, identical output on identical input.

pub mod build;
pub mod finding;
pub mod link;
pub mod resolve;
pub mod validate;

pub use build::{AxNode, AxTree, ElideReason};
pub use finding::{Finding, FindingCode, Severity};
pub use link::Links;
pub use resolve::{Resolution, ResolvedNode};
pub use validate::{RequiredProp, SelectionCohort, ValidationConfig};

use axt_dom::DomTree;
use serde::{Deserialize, Serialize};

/// Result of a full pipeline run: the best-effort tree plus every
/// finding collected along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub tree: AxTree,
    pub findings: Vec<Finding>,
}

impl Evaluation {
    /// Whether any finding is error severity.
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(Finding::is_error)
    }
}

/// Run resolve -> link -> build -> validate over a built tree.
pub fn evaluate(dom: &DomTree, config: &ValidationConfig) -> Evaluation {
    let mut findings = Vec::new();
    let resolution = resolve::resolve(dom, &mut findings);
    let links = link::link(dom, &resolution, &mut findings);
    let tree = build::build(dom, &resolution, &links, &mut findings);

    // validate walks the accessibility tree, where owned nodes have left
    // their containment position; reorder its findings back to document
    // order (stable, so per-node rule order survives)
    let mut checks = validate::validate(&tree, config);
    checks.sort_by_key(|f| {
        f.nodes
            .first()
            .and_then(|id| dom.by_id(id))
            .map(axt_dom::NodeId::index)
            .unwrap_or(usize::MAX)
    });
    findings.extend(checks);

    tracing::debug!(findings = findings.len(), "evaluation complete");
    Evaluation { tree, findings }
}
