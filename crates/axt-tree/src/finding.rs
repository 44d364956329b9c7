//! Findings
//!
//! Everything the pipeline has to say about an input beyond the tree
//! itself. Findings accumulate across all phases; nothing aborts after
//! tree construction has succeeded.

use serde::{Deserialize, Serialize};

/// Finding severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Machine-readable finding code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingCode {
    /// An abstract role was assigned to a concrete node.
    InvalidRole,
    /// A role was assigned to a tag whose native role is fixed.
    NonRedefinableRole,
    /// A role token outside the supported vocabulary.
    UnknownRole,
    /// An `aria-*` value that does not fit the property's value kind.
    MalformedPropertyValue,
    /// An `aria-*` name outside the supported vocabulary.
    UnknownProperty,
    /// An id reference pointing at no element.
    DanglingReference,
    /// A node claimed by more than one owner, or ownership forming a cycle.
    ConflictingOwnership,
    /// A role is missing its required owned descendant.
    MissingRequiredDescendant,
    /// More than one member of a single-selection cohort is selected.
    MultipleSelected,
    /// A role is missing a state it is expected to carry.
    MissingRequiredProperty,
    /// A node's semantics were stripped by an explicit presentation role.
    StrippedSemantics,
    /// The effective tree ran past the depth limit; the subtree below
    /// the named node was truncated.
    DepthLimitExceeded,
}

impl FindingCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRole => "invalid-role",
            Self::NonRedefinableRole => "non-redefinable-role",
            Self::UnknownRole => "unknown-role",
            Self::MalformedPropertyValue => "malformed-property-value",
            Self::UnknownProperty => "unknown-property",
            Self::DanglingReference => "dangling-reference",
            Self::ConflictingOwnership => "conflicting-ownership",
            Self::MissingRequiredDescendant => "missing-required-descendant",
            Self::MultipleSelected => "multiple-selected",
            Self::MissingRequiredProperty => "missing-required-property",
            Self::StrippedSemantics => "stripped-semantics",
            Self::DepthLimitExceeded => "depth-limit-exceeded",
        }
    }
}

/// One finding: severity, code, affected node id(s), message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub code: FindingCode,
    /// Source ids of the affected node(s), narrowest first.
    pub nodes: Vec<String>,
    pub message: String,
}

impl Finding {
    pub fn error(code: FindingCode, node: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            nodes: vec![node.to_string()],
            message: message.into(),
        }
    }

    pub fn warning(code: FindingCode, node: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            nodes: vec![node.to_string()],
            message: message.into(),
        }
    }

    /// Name a further affected node.
    pub fn with_node(mut self, node: &str) -> Self {
        self.nodes.push(node.to_string());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sev = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{sev}[{}] ", self.code.as_str())?;
        write!(f, "{}: {}", self.nodes.join(", "), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_serialization() {
        let f = Finding::error(FindingCode::DanglingReference, "a", "no such id");
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["code"], "dangling-reference");
        assert_eq!(json["nodes"][0], "a");
    }

    #[test]
    fn test_with_node() {
        let f = Finding::warning(FindingCode::MultipleSelected, "row", "two selected")
            .with_node("c1")
            .with_node("c2");
        assert_eq!(f.nodes, ["row", "c1", "c2"]);
        assert!(!f.is_error());
    }
}
