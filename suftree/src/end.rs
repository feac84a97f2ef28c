// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{cell::Cell, rc::Rc};

/// The current end of every open leaf edge.
///
/// A single marker is shared by all leaves of a tree, so advancing it once extends every leaf edge
/// by one symbol. The value is an exclusive offset into the text and starts at 0, i.e., no symbols
/// have been processed yet.
#[derive(Debug, Default)]
pub(crate) struct EndMarker {
    value: Cell<usize>,
}

impl EndMarker {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn advance(&self) {
        self.value.set(self.value.get() + 1);
    }

    pub(crate) fn get(&self) -> usize {
        self.value.get()
    }
}

/// The exclusive end offset of an edge label.
#[derive(Debug)]
pub(crate) enum End {
    /// The edge leads to a leaf and grows with the shared marker
    Growing(Rc<EndMarker>),
    /// The edge leads to an internal node and its length is frozen
    Fixed(usize),
}

impl End {
    pub(crate) fn get(&self) -> usize {
        match self {
            End::Growing(marker) => marker.get(),
            End::Fixed(end) => *end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_seen_by_every_alias() {
        let marker = EndMarker::new();
        let first = End::Growing(Rc::clone(&marker));
        let second = End::Growing(Rc::clone(&marker));

        marker.advance();
        marker.advance();

        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn fixed_ignores_marker() {
        let marker = EndMarker::new();
        let fixed = End::Fixed(3);

        marker.advance();

        assert_eq!(fixed.get(), 3);
    }
}
