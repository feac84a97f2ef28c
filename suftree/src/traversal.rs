// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::fmt::{self, Debug, Formatter};

use crate::{alphabet::Symbol, node::NodeId, tree::SuffixTree};

/// A read-only view of a node in a [`SuffixTree`].
///
/// Every node except the root has an incoming edge whose label is returned by
/// [`label()`](Self::label).
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SuffixTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a SuffixTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Returns `true` if and only if this node is a leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.tree.arena.get(self.id).is_leaf()
    }

    /// Returns the 0-indexed starting offset of the suffix this node spells, or `None` if this
    /// node is not a leaf.
    #[must_use]
    pub fn suffix_index(&self) -> Option<usize> {
        self.tree.arena.get(self.id).suffix_index
    }

    /// Returns the label of the edge leading into this node.
    ///
    /// The label of the root is empty.
    #[must_use]
    pub fn label(&self) -> &'a [Symbol] {
        self.tree.label(self.id)
    }

    /// Returns the parent of this node, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.tree
            .arena
            .get(self.id)
            .parent
            .map(|id| NodeRef::new(self.tree, id))
    }

    /// Returns an iterator over the children of this node in increasing symbol order, each keyed
    /// by the first symbol of its label.
    pub fn children(&self) -> impl Iterator<Item = (Symbol, NodeRef<'a>)> + use<'a> {
        let tree = self.tree;

        tree.arena
            .get(self.id)
            .children
            .iter()
            .map(move |(&symbol, &id)| (symbol, NodeRef::new(tree, id)))
    }
}

impl Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let label = self
            .label()
            .iter()
            .map(ToString::to_string)
            .collect::<String>();

        f.debug_struct("NodeRef")
            .field("label", &label)
            .field("suffix_index", &self.suffix_index())
            .finish()
    }
}

/// An iterator over the leaves of a [`SuffixTree`] in sorted suffix order.
///
/// The walk keeps its own stack, so its depth is not bounded by the call stack. This struct is
/// created by [`SuffixTree::leaves()`].
pub struct Leaves<'a> {
    tree: &'a SuffixTree,
    stack: Vec<NodeId>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn new(tree: &'a SuffixTree) -> Self {
        Self {
            tree,
            stack: vec![NodeId::ROOT],
        }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            let node = self.tree.arena.get(id);
            if node.is_leaf() {
                return Some(NodeRef::new(self.tree, id));
            }

            // Push in reverse so the smallest symbol is popped first
            self.stack.extend(node.children.values().rev().copied());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_in_symbol_order() {
        let tree = SuffixTree::new("cab").unwrap();
        let symbols = tree
            .root()
            .children()
            .map(|(symbol, _)| symbol.to_string())
            .collect::<String>();

        assert_eq!(symbols, "$abc");
    }

    #[test]
    fn root_has_no_parent_or_label() {
        let tree = SuffixTree::new("abc").unwrap();
        let root = tree.root();

        assert!(root.parent().is_none());
        assert!(root.label().is_empty());
        assert!(!root.is_leaf());
        assert_eq!(root.suffix_index(), None);
    }

    #[test]
    fn child_labels_start_with_key() {
        let tree = SuffixTree::new("abab%abba").unwrap();
        let mut stack = vec![tree.root()];

        while let Some(node) = stack.pop() {
            for (symbol, child) in node.children() {
                assert_eq!(child.label().first(), Some(&symbol));
                assert!(child.parent().is_some_and(|parent| parent.label() == node.label()));
                stack.push(child);
            }
        }
    }

    #[test]
    fn leaves_visit_every_suffix_once() {
        let tree = SuffixTree::new("abcabc").unwrap();
        let mut indices = tree
            .leaves()
            .filter_map(|leaf| leaf.suffix_index())
            .collect::<Vec<_>>();
        indices.sort_unstable();

        assert_eq!(indices, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn long_input_does_not_overflow_stack() {
        let text = "a".repeat(20_000);
        let tree = SuffixTree::new(&text).unwrap();

        let order = tree.suffix_order();

        assert_eq!(order.len(), 20_001);
        assert_eq!(order.first(), Some(&20_001));
        assert_eq!(order.last(), Some(&1));
    }
}
