// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{collections::BTreeMap, rc::Rc};

use log::{debug, trace};

use crate::{
    alphabet::{Symbol, Text},
    end::{End, EndMarker},
    error::Error,
    node::{Arena, Node, NodeId},
    traversal::{Leaves, NodeRef},
};

/// A suffix tree for a single string.
#[derive(Debug)]
pub struct SuffixTree {
    text: Text,
    pub(crate) arena: Arena,
}

impl SuffixTree {
    /// Creates a new `SuffixTree` for `s`.
    ///
    /// The terminator is appended to `s` before construction, so the tree holds `s.len() + 1`
    /// suffixes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSymbol`] if `s` contains a character outside of the alphabet.
    /// See [`Symbol`] for the characters that are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use suftree::SuffixTree;
    ///
    /// # fn main() -> Result<(), suftree::Error> {
    /// let tree = SuffixTree::new("abracadabra")?;
    ///
    /// assert_eq!(tree.leaf_count(), 12);
    ///
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(s: &str) -> Result<Self, Error> {
        Text::new(s).map(Self::from_text)
    }

    /// Creates a new `SuffixTree` for an already validated `text`.
    ///
    /// This operation runs Ukkonen's algorithm to completion before returning.
    #[must_use]
    pub fn from_text(text: Text) -> Self {
        let arena = Builder::new(text.as_symbols()).build();

        debug!(
            "built suffix tree for {} symbols with {} nodes",
            text.len(),
            arena.len(),
        );

        Self { text, arena }
    }

    /// Returns the indexed text, including the terminator.
    #[must_use]
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Returns the root of the tree.
    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// Returns an iterator over the leaves of the tree in sorted suffix order.
    #[must_use]
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves::new(self)
    }

    /// Returns the 1-indexed starting offset of every suffix, in lexicographic order of the
    /// suffixes.
    ///
    /// Offsets refer to the text with the terminator appended, which sorts below every other
    /// symbol, so the first entry is always `text().len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use suftree::SuffixTree;
    ///
    /// # fn main() -> Result<(), suftree::Error> {
    /// let tree = SuffixTree::new("aaa")?;
    ///
    /// assert_eq!(tree.suffix_order(), [4, 3, 2, 1]);
    ///
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn suffix_order(&self) -> Vec<usize> {
        self.leaves()
            .filter_map(|leaf| leaf.suffix_index())
            .map(|index| index + 1)
            .collect()
    }

    /// Returns the number of leaves, which equals the number of suffixes of the text.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Returns the number of nodes in the tree, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if and only if `pattern` occurs in the indexed text.
    ///
    /// Patterns containing a character outside of the alphabet never occur. This operation is
    /// *O*(*m*), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use suftree::SuffixTree;
    ///
    /// # fn main() -> Result<(), suftree::Error> {
    /// let tree = SuffixTree::new("banana")?;
    ///
    /// assert!(tree.contains("nan"));
    /// assert!(!tree.contains("nab"));
    ///
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        let Some(pattern) = pattern.chars().map(Symbol::new).collect::<Option<Vec<_>>>() else {
            return false;
        };

        let mut node = NodeId::ROOT;
        let mut matched = 0;
        while matched < pattern.len() {
            let Some(child) = self.arena.child(node, pattern[matched]) else {
                return false;
            };

            let label = self.label(child);
            let len = label.len().min(pattern.len() - matched);
            if label[..len] != pattern[matched..matched + len] {
                return false;
            }

            matched += len;
            node = child;
        }

        true
    }

    pub(crate) fn label(&self, id: NodeId) -> &[Symbol] {
        let node = self.arena.get(id);

        &self.text.as_symbols()[node.start..node.end.get()]
    }
}

/// The state of a single run of Ukkonen's algorithm.
///
/// Every suffix link points to the root. After each successful extension the active point is
/// recomputed from the root with skip/count descent instead of being followed along a link.
struct Builder<'a> {
    text: &'a [Symbol],
    arena: Arena,
    end: Rc<EndMarker>,
    active_node: NodeId,
    /// The number of symbols of the current suffix below `active_node`, not counting the symbol
    /// being added in the current phase
    active_length: usize,
}

impl<'a> Builder<'a> {
    fn new(text: &'a [Symbol]) -> Self {
        Self {
            text,
            arena: Arena::new(),
            end: EndMarker::new(),
            active_node: NodeId::ROOT,
            active_length: 0,
        }
    }

    fn build(mut self) -> Arena {
        // Suffixes before `j` already end in a leaf. `j` is carried across phases.
        let mut j = 0;

        for i in 0..self.text.len() {
            // Extends every leaf edge to include text[i]
            self.end.advance();
            trace!("phase {i}: adding {}", self.text[i]);

            while j <= i {
                if self.active_node == NodeId::ROOT {
                    self.active_length = i - j;
                }

                self.skip_count(i);

                let edge_symbol = self.text[i - self.active_length];
                match self.arena.child(self.active_node, edge_symbol) {
                    None => {
                        trace!("extension {j}: new leaf");
                        self.add_leaf(self.active_node, edge_symbol, i - self.active_length, j);
                    }
                    Some(edge) => {
                        let next = self.arena.get(edge).start + self.active_length;
                        if self.text[next] == self.text[i] {
                            // Showstopper: this suffix and every shorter one are already present
                            trace!("extension {j}: {} already present", self.text[i]);
                            break;
                        }

                        trace!("extension {j}: split edge at {next}");
                        self.split(edge, edge_symbol, i, j);
                    }
                }

                j += 1;
                self.active_node = self.arena.get(self.active_node).suffix_link;
            }

            self.active_length += 1;
        }

        self.arena
    }

    /// Moves the active point down whole edges until the remaining active length ends inside an
    /// edge or exactly at a node.
    fn skip_count(&mut self, i: usize) {
        loop {
            if self.active_length == 0 || self.arena.get(self.active_node).is_leaf() {
                return;
            }

            let symbol = self.text[i - self.active_length];
            let Some(edge) = self.arena.child(self.active_node, symbol) else {
                return;
            };

            let len = self.arena.get(edge).len();
            if len > self.active_length {
                return;
            }

            self.active_node = edge;
            self.active_length -= len;
        }
    }

    fn add_leaf(&mut self, parent: NodeId, symbol: Symbol, start: usize, suffix_index: usize) {
        let leaf = self.arena.push(Node {
            start,
            end: End::Growing(Rc::clone(&self.end)),
            children: BTreeMap::new(),
            suffix_link: NodeId::ROOT,
            parent: Some(parent),
            suffix_index: Some(suffix_index),
        });

        self.arena.get_mut(parent).children.insert(symbol, leaf);
    }

    /// Splits `edge` below the active point and hangs a new leaf for text[i] off the split.
    fn split(&mut self, edge: NodeId, edge_symbol: Symbol, i: usize, suffix_index: usize) {
        let parent = self.active_node;
        let start = self.arena.get(edge).start;
        let split_at = start + self.active_length;

        let internal = self.arena.push(Node {
            start,
            end: End::Fixed(split_at),
            children: BTreeMap::from([(self.text[split_at], edge)]),
            suffix_link: NodeId::ROOT,
            parent: Some(parent),
            suffix_index: None,
        });
        self.arena
            .get_mut(parent)
            .children
            .insert(edge_symbol, internal);

        let remainder = self.arena.get_mut(edge);
        remainder.start = split_at;
        remainder.parent = Some(internal);

        self.add_leaf(internal, self.text[i], i, suffix_index);
    }
}
