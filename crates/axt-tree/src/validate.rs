//! Validator
//!
//! Structural and property checks over the finished accessibility tree.
//! The structural rule (required owned descendants) is fixed by the role
//! registry; property rules are conventions and therefore configurable.
//! Validation never stops at the first finding: the whole tree is
//! checked in one pass and all findings are returned in tree order.

use axt_roles::{PropValue, Role};
use serde::{Deserialize, Serialize};

use crate::build::{AxNode, AxTree};
use crate::finding::{Finding, FindingCode};

/// A single-selection cohort: among `member`-role children of a
/// `container`-role node, at most one may carry `aria-selected="true"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionCohort {
    pub container: Role,
    pub member: Role,
}

/// A state a role is expected to carry (e.g. a checkbox without
/// `aria-checked` has no exposed state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredProp {
    pub role: Role,
    pub prop: String,
}

/// Configurable property rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub selection_cohorts: Vec<SelectionCohort>,
    #[serde(default)]
    pub required_props: Vec<RequiredProp>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            selection_cohorts: vec![
                SelectionCohort {
                    container: Role::Row,
                    member: Role::GridCell,
                },
                SelectionCohort {
                    container: Role::TabList,
                    member: Role::Tab,
                },
                SelectionCohort {
                    container: Role::Listbox,
                    member: Role::Option,
                },
            ],
            required_props: vec![
                RequiredProp {
                    role: Role::Checkbox,
                    prop: "checked".into(),
                },
                RequiredProp {
                    role: Role::Switch,
                    prop: "checked".into(),
                },
                RequiredProp {
                    role: Role::Radio,
                    prop: "checked".into(),
                },
            ],
        }
    }
}

/// Check the whole tree, returning all findings.
pub fn validate(tree: &AxTree, config: &ValidationConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    for node in tree.iter() {
        check_required_owned(node, &mut findings);
        check_cohorts(node, config, &mut findings);
        check_required_props(node, config, &mut findings);
    }
    findings
}

/// A role with required owned elements must have at least one matching
/// role somewhere in its accessibility subtree.
fn check_required_owned(node: &AxNode, findings: &mut Vec<Finding>) {
    let required = node.role.required_owned();
    if required.is_empty() {
        return;
    }
    if subtree_has_any(node, required) {
        return;
    }
    let wanted = required
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join("' or '");
    findings.push(Finding::error(
        FindingCode::MissingRequiredDescendant,
        &node.id,
        format!("role '{}' requires an owned '{wanted}' descendant", node.role),
    ));
}

fn subtree_has_any(node: &AxNode, roles: &[Role]) -> bool {
    node.children
        .iter()
        .any(|c| roles.contains(&c.role) || subtree_has_any(c, roles))
}

fn check_cohorts(node: &AxNode, config: &ValidationConfig, findings: &mut Vec<Finding>) {
    for cohort in &config.selection_cohorts {
        if node.role != cohort.container {
            continue;
        }
        let selected: Vec<&AxNode> = node
            .children_with_role(cohort.member)
            .filter(|c| matches!(c.props.get("selected"), Some(PropValue::Bool(true))))
            .collect();
        if selected.len() > 1 {
            let mut finding = Finding::warning(
                FindingCode::MultipleSelected,
                &node.id,
                format!(
                    "{} '{}' members of '{}' are selected at once",
                    selected.len(),
                    cohort.member,
                    node.id
                ),
            );
            for member in selected {
                finding = finding.with_node(&member.id);
            }
            findings.push(finding);
        }
    }
}

fn check_required_props(node: &AxNode, config: &ValidationConfig, findings: &mut Vec<Finding>) {
    for rule in &config.required_props {
        if node.role == rule.role && !node.props.contains_key(&rule.prop) {
            findings.push(Finding::warning(
                FindingCode::MissingRequiredProperty,
                &node.id,
                format!("role '{}' should carry 'aria-{}'", rule.role, rule.prop),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn ax(id: &str, role: Role, children: Vec<AxNode>) -> AxNode {
        AxNode {
            id: id.into(),
            role,
            name: None,
            props: BTreeMap::new(),
            children,
        }
    }

    fn selected(mut node: AxNode) -> AxNode {
        node.props.insert("selected".into(), PropValue::Bool(true));
        node
    }

    fn tree(roots: Vec<AxNode>) -> AxTree {
        AxTree {
            roots,
            elided: BTreeMap::new(),
        }
    }

    #[test]
    fn test_grid_chain_satisfied() {
        let t = tree(vec![ax(
            "grid",
            Role::Grid,
            vec![ax("row", Role::Row, vec![ax("cell", Role::GridCell, vec![])])],
        )]);
        let findings = validate(&t, &ValidationConfig::default());
        assert!(
            findings
                .iter()
                .all(|f| f.code != FindingCode::MissingRequiredDescendant)
        );
    }

    #[test]
    fn test_grid_without_row() {
        let t = tree(vec![ax(
            "grid",
            Role::Grid,
            vec![ax("cell", Role::GridCell, vec![])],
        )]);
        let findings = validate(&t, &ValidationConfig::default());
        let missing: Vec<_> = findings
            .iter()
            .filter(|f| f.code == FindingCode::MissingRequiredDescendant)
            .collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].nodes, ["grid"]);
    }

    #[test]
    fn test_row_requirement_spans_depth() {
        // rowgroup between grid and row still satisfies the grid
        let t = tree(vec![ax(
            "grid",
            Role::Grid,
            vec![ax(
                "body",
                Role::RowGroup,
                vec![ax("row", Role::Row, vec![ax("c", Role::Cell, vec![])])],
            )],
        )]);
        let findings = validate(&t, &ValidationConfig::default());
        assert!(
            findings
                .iter()
                .all(|f| f.code != FindingCode::MissingRequiredDescendant)
        );
    }

    #[test]
    fn test_multiple_selected_in_row() {
        let t = tree(vec![ax(
            "row",
            Role::Row,
            vec![
                selected(ax("c1", Role::GridCell, vec![])),
                selected(ax("c2", Role::GridCell, vec![])),
                ax("c3", Role::GridCell, vec![]),
            ],
        )]);
        let findings = validate(&t, &ValidationConfig::default());
        let multi: Vec<_> = findings
            .iter()
            .filter(|f| f.code == FindingCode::MultipleSelected)
            .collect();
        assert_eq!(multi.len(), 1);
        assert_eq!(multi[0].nodes, ["row", "c1", "c2"]);
    }

    #[test]
    fn test_zero_selected_is_fine() {
        let t = tree(vec![ax(
            "row",
            Role::Row,
            vec![ax("c1", Role::GridCell, vec![])],
        )]);
        let findings = validate(&t, &ValidationConfig::default());
        assert!(
            findings
                .iter()
                .all(|f| f.code != FindingCode::MultipleSelected)
        );
    }

    #[test]
    fn test_required_prop() {
        let t = tree(vec![ax("cb", Role::Checkbox, vec![])]);
        let findings = validate(&t, &ValidationConfig::default());
        assert!(
            findings
                .iter()
                .any(|f| f.code == FindingCode::MissingRequiredProperty)
        );
    }

    #[test]
    fn test_custom_config() {
        let config = ValidationConfig {
            selection_cohorts: Vec::new(),
            required_props: Vec::new(),
        };
        let t = tree(vec![ax("cb", Role::Checkbox, vec![])]);
        assert!(validate(&t, &config).is_empty());
    }
}
