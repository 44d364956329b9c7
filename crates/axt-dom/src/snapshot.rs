//! Snapshot input schema
//!
//! The serializable description of a document: an ordered list of
//! elements with id, tag, optional explicit role, attributes, and
//! containment given either as a child-id list or a parent-id back
//! reference. Both forms are accepted and normalized by `DomTree::build`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A full input document: ordered element declarations.
/// Document order of the list is the tie-breaking order everywhere
/// downstream (reference processing, findings).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub elements: Vec<ElementDecl>,
}

/// One element of the input document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDecl {
    /// Unique, stable identifier.
    pub id: String,
    /// Tag name (semantic HTML tag, or a generic container like `div`).
    pub tag: String,
    /// Explicit role, equivalent to a `role` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Attribute map, including any `aria-*` attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Visible text content, used for accessible-name fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Contained children, in order (children-list form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    /// Containing parent (parent-ref form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl ElementDecl {
    /// New element with no role, attributes, or containment.
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            role: None,
            attrs: BTreeMap::new(),
            text: None,
            children: None,
            parent: None,
        }
    }

    /// Explicit role: the `role` field, or failing that a `role` attribute.
    pub fn explicit_role(&self) -> Option<&str> {
        self.role
            .as_deref()
            .or_else(|| self.attrs.get("role").map(String::as_str))
    }
}
