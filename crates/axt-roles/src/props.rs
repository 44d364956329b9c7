//! ARIA states and properties
//!
//! Value kinds for the supported `aria-*` vocabulary and the typed
//! values they parse into.

use serde::{Deserialize, Serialize};

/// Value kind of an `aria-*` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropKind {
    Bool,
    Tristate,
    Token,
    Int,
    Number,
    Text,
    IdRef,
    IdRefList,
}

/// Tri-state value (true/false/mixed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    True,
    False,
    Mixed,
}

/// A resolved, typed property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Tristate(TriState),
    Int(u32),
    Number(f64),
    Text(String),
    IdRefList(Vec<String>),
}

impl PropValue {
    /// Parse a raw attribute value according to its kind.
    /// Returns `None` when the raw value does not fit the kind.
    pub fn parse(kind: PropKind, raw: &str) -> Option<Self> {
        Some(match kind {
            PropKind::Bool => match raw {
                "true" => Self::Bool(true),
                "false" => Self::Bool(false),
                _ => return None,
            },
            PropKind::Tristate => Self::Tristate(match raw {
                "true" => TriState::True,
                "false" => TriState::False,
                "mixed" => TriState::Mixed,
                _ => return None,
            }),
            PropKind::Token | PropKind::Text => Self::Text(raw.to_string()),
            PropKind::Int => Self::Int(raw.parse().ok()?),
            PropKind::Number => Self::Number(raw.parse().ok()?),
            PropKind::IdRef => Self::IdRefList(vec![raw.trim().to_string()]),
            PropKind::IdRefList => {
                Self::IdRefList(raw.split_whitespace().map(String::from).collect())
            }
        })
    }

    /// Ids referenced by this value, if it is an id-reference value.
    pub fn id_refs(&self) -> &[String] {
        match self {
            Self::IdRefList(ids) => ids,
            _ => &[],
        }
    }
}

/// Value kind for a supported `aria-*` property (name without the
/// `aria-` prefix). Unknown names return `None`.
pub fn prop_kind(name: &str) -> Option<PropKind> {
    Some(match name {
        "atomic" | "busy" | "disabled" | "expanded" | "hidden" | "modal" | "multiline"
        | "multiselectable" | "readonly" | "required" | "selected" => PropKind::Bool,

        "checked" | "pressed" => PropKind::Tristate,

        "autocomplete" | "current" | "haspopup" | "invalid" | "live" | "orientation"
        | "relevant" | "sort" => PropKind::Token,

        "colcount" | "colindex" | "colspan" | "level" | "posinset" | "rowcount"
        | "rowindex" | "rowspan" | "setsize" => PropKind::Int,

        "valuemax" | "valuemin" | "valuenow" => PropKind::Number,

        "keyshortcuts" | "label" | "placeholder" | "roledescription" | "valuetext" => {
            PropKind::Text
        }

        "activedescendant" | "details" | "errormessage" => PropKind::IdRef,

        "controls" | "describedby" | "flowto" | "labelledby" | "owns" => PropKind::IdRefList,

        _ => return None,
    })
}
