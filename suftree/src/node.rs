// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::collections::BTreeMap;

use crate::{alphabet::Symbol, end::End};

/// An index into the node arena of a tree
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: Self = Self(0);
}

/// A tree vertex together with the label of the edge leading into it.
///
/// The label is `text[start..end]`.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) start: usize,
    pub(crate) end: End,
    pub(crate) children: BTreeMap<Symbol, NodeId>,
    pub(crate) suffix_link: NodeId,
    pub(crate) parent: Option<NodeId>,
    /// Only set on leaves
    pub(crate) suffix_index: Option<usize>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            start: 0,
            end: End::Fixed(0),
            children: BTreeMap::new(),
            suffix_link: NodeId::ROOT,
            parent: None,
            suffix_index: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.end, End::Growing(_))
    }

    pub(crate) fn len(&self) -> usize {
        self.end.get() - self.start
    }
}

/// Owner of every node of a tree
#[derive(Debug)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn child(&self, id: NodeId, symbol: Symbol) -> Option<NodeId> {
        self.get(id).children.get(&symbol).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::end::EndMarker;

    #[test]
    fn root_links_to_itself() {
        let arena = Arena::new();
        let root = arena.get(NodeId::ROOT);

        assert_eq!(root.suffix_link, NodeId::ROOT);
        assert!(!root.is_leaf());
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn leaf_length_follows_marker() {
        let marker = EndMarker::new();
        let mut arena = Arena::new();
        let leaf = arena.push(Node {
            start: 1,
            end: End::Growing(Rc::clone(&marker)),
            children: BTreeMap::new(),
            suffix_link: NodeId::ROOT,
            parent: Some(NodeId::ROOT),
            suffix_index: Some(1),
        });

        for _ in 0..4 {
            marker.advance();
        }

        assert!(arena.get(leaf).is_leaf());
        assert_eq!(arena.get(leaf).len(), 3);
    }
}
