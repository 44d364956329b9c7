//! Arena tree (containment normalization + integrity checks)

use std::collections::HashMap;

use crate::{ElementDecl, Snapshot, StructureError};

/// Defensive depth limit for pathological inputs.
pub const MAX_DEPTH: usize = 256;
/// Defensive size limit for pathological inputs.
pub const MAX_NODES: usize = 1 << 20;

/// Node identifier (index into arena, assigned in document order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A normalized element node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Source element id from the snapshot.
    pub id: String,
    /// Tag name, lowercased.
    pub tag: String,
    /// Explicit role token, if declared.
    pub role: Option<String>,
    /// Attribute map (includes `aria-*`).
    pub attrs: std::collections::BTreeMap<String, String>,
    /// Visible text content.
    pub text: Option<String>,
    /// Containment parent (None for the root).
    pub parent: Option<NodeId>,
    /// Contained children, in order.
    pub children: Vec<NodeId>,
}

/// Arena-based containment tree, immutable after build.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    root: NodeId,
    index: HashMap<String, NodeId>,
}

impl DomTree {
    /// Normalize a snapshot into a rooted tree.
    ///
    /// Accepts children-list and parent-ref containment (also mixed, as
    /// long as the declarations agree). Fails with `StructureError` on
    /// duplicate ids, unknown ids, containment cycles, zero or multiple
    /// roots, or inputs past the defensive size limits.
    pub fn build(snapshot: &Snapshot) -> Result<Self, StructureError> {
        let count = snapshot.elements.len();
        if count == 0 {
            return Err(StructureError::NoRoot);
        }
        if count > MAX_NODES {
            return Err(StructureError::TooLarge {
                count,
                limit: MAX_NODES,
            });
        }

        // Assign arena slots in document order, rejecting duplicate ids.
        let mut index = HashMap::with_capacity(count);
        for (i, decl) in snapshot.elements.iter().enumerate() {
            if index.insert(decl.id.clone(), NodeId(i as u32)).is_some() {
                return Err(StructureError::DuplicateId(decl.id.clone()));
            }
        }

        let mut parents: Vec<Option<NodeId>> = vec![None; count];
        let mut children: Vec<Vec<NodeId>> = vec![Vec::new(); count];

        // Children-list edges.
        for (i, decl) in snapshot.elements.iter().enumerate() {
            let me = NodeId(i as u32);
            let Some(list) = &decl.children else { continue };
            for child_id in list {
                let child = *index.get(child_id).ok_or_else(|| StructureError::UnknownId {
                    referenced: child_id.clone(),
                    by: decl.id.clone(),
                })?;
                match parents[child.index()] {
                    // appearing in two lists (or twice in one) is a
                    // second parent claim either way
                    Some(_) => return Err(StructureError::Inconsistent(child_id.clone())),
                    None => {
                        parents[child.index()] = Some(me);
                        children[me.index()].push(child);
                    }
                }
            }
        }

        // Parent-ref edges; must agree with any children-list edge.
        for (i, decl) in snapshot.elements.iter().enumerate() {
            let me = NodeId(i as u32);
            let Some(parent_id) = &decl.parent else { continue };
            let parent = *index.get(parent_id).ok_or_else(|| StructureError::UnknownId {
                referenced: parent_id.clone(),
                by: decl.id.clone(),
            })?;
            match parents[me.index()] {
                Some(existing) if existing != parent => {
                    return Err(StructureError::Inconsistent(decl.id.clone()));
                }
                Some(_) => {} // already linked via the parent's children list
                None => {
                    parents[me.index()] = Some(parent);
                    children[parent.index()].push(me);
                }
            }
        }

        // Exactly one root.
        let mut root: Option<NodeId> = None;
        for (i, decl) in snapshot.elements.iter().enumerate() {
            if parents[i].is_none() {
                if let Some(first) = root {
                    return Err(StructureError::MultipleRoots {
                        first: snapshot.elements[first.index()].id.clone(),
                        second: decl.id.clone(),
                    });
                }
                root = Some(NodeId(i as u32));
            }
        }
        // Every node having a parent means the containment loops back on
        // itself somewhere.
        let root = root.ok_or_else(|| StructureError::Cycle(snapshot.elements[0].id.clone()))?;

        // Reachability walk doubles as the cycle and depth check:
        // a node unreachable from the single root sits on a cycle.
        let mut seen = vec![false; count];
        let mut stack = vec![(root, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            if depth > MAX_DEPTH {
                return Err(StructureError::TooDeep {
                    id: snapshot.elements[node.index()].id.clone(),
                    limit: MAX_DEPTH,
                });
            }
            seen[node.index()] = true;
            for &child in &children[node.index()] {
                stack.push((child, depth + 1));
            }
        }
        if let Some(i) = seen.iter().position(|&s| !s) {
            return Err(StructureError::Cycle(snapshot.elements[i].id.clone()));
        }

        let nodes = snapshot
            .elements
            .iter()
            .enumerate()
            .map(|(i, decl)| Self::normalize(decl, parents[i], std::mem::take(&mut children[i])))
            .collect::<Vec<_>>();

        tracing::debug!(nodes = count, root = %nodes[root.index()].id, "built dom tree");

        Ok(Self { nodes, root, index })
    }

    fn normalize(decl: &ElementDecl, parent: Option<NodeId>, children: Vec<NodeId>) -> Node {
        Node {
            id: decl.id.clone(),
            tag: decl.tag.to_ascii_lowercase(),
            role: decl.explicit_role().map(str::to_string),
            attrs: decl.attrs.clone(),
            text: decl.text.clone(),
            parent,
            children,
        }
    }

    /// Root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by arena id.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Look up a node by its source element id.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// All nodes in document order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
