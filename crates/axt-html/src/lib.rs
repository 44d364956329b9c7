//! axt HTML ingest
//!
//! Parses an HTML document into a snapshot. Uses html5ever's built-in
//! RcDom and converts to the snapshot element list; this is simpler and
//! more reliable than implementing TreeSink directly.
//!
//! `id` attributes become element ids; elements without one get a
//! stable synthesized id from their document position. Element text is
//! collected from direct text children for accessible-name fallback.

use std::collections::HashSet;

use axt_dom::{ElementDecl, Snapshot};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML ingest error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("failed to read HTML input: {0}")]
    Read(#[from] std::io::Error),
}

/// Parse an HTML string into a snapshot.
pub fn parse_snapshot(html: &str) -> Result<Snapshot, HtmlError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    let mut taken = HashSet::new();
    collect_ids(&dom.document, &mut taken);

    let mut walker = Walker {
        elements: Vec::new(),
        taken,
        counter: 0,
    };
    // the document node itself has no element; its children become the
    // top of the snapshot (html5ever guarantees a single html element)
    for child in dom.document.children.borrow().iter() {
        walker.convert(child, None);
    }

    tracing::debug!(elements = walker.elements.len(), "parsed html snapshot");
    Ok(Snapshot {
        elements: walker.elements,
    })
}

fn collect_ids(handle: &Handle, out: &mut HashSet<String>) {
    if let RcNodeData::Element { attrs, .. } = &handle.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == "id" {
                out.insert(attr.value.to_string());
            }
        }
    }
    for child in handle.children.borrow().iter() {
        collect_ids(child, out);
    }
}

struct Walker {
    elements: Vec<ElementDecl>,
    taken: HashSet<String>,
    counter: usize,
}

impl Walker {
    fn convert(&mut self, handle: &Handle, parent: Option<usize>) {
        match &handle.data {
            RcNodeData::Element { name, attrs, .. } => {
                let tag = name.local.to_string();
                let mut decl = ElementDecl::new(String::new(), tag);

                for attr in attrs.borrow().iter() {
                    let attr_name = attr.name.local.to_string();
                    let value = attr.value.to_string();
                    if attr_name == "id" {
                        decl.id = value.clone();
                    }
                    if attr_name == "role" {
                        decl.role = Some(value.clone());
                    }
                    decl.attrs.insert(attr_name, value);
                }
                if decl.id.is_empty() {
                    decl.id = self.fresh_id();
                }

                let index = self.elements.len();
                if let Some(parent) = parent {
                    let id = decl.id.clone();
                    self.elements[parent]
                        .children
                        .get_or_insert_with(Vec::new)
                        .push(id);
                }
                self.elements.push(decl);

                for child in handle.children.borrow().iter() {
                    self.convert(child, Some(index));
                }
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return;
                }
                // direct text accrues to the containing element
                if let Some(parent) = parent {
                    let slot = &mut self.elements[parent].text;
                    match slot {
                        Some(existing) => {
                            existing.push(' ');
                            existing.push_str(trimmed);
                        }
                        None => *slot = Some(trimmed.to_string()),
                    }
                }
            }
            // doctype, comments, and processing instructions carry no
            // accessibility semantics
            _ => {}
        }
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = format!("node-{}", self.counter);
            self.counter += 1;
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
