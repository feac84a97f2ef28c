// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

//! Suffix tree construction in linear time.
//!
//! This crate builds a suffix tree for a single string using Ukkonen's online construction
//! algorithm and walks the finished tree to list every suffix in lexicographic order. The input is
//! restricted to a fixed alphabet of printable ASCII characters (see [`Symbol`]); a terminator
//! that sorts below every other symbol is appended once during construction.
//!
//! # Examples
//!
//! Listing the suffixes of a string in sorted order:
//!
//! ```
//! use suftree::SuffixTree;
//!
//! # fn main() -> Result<(), suftree::Error> {
//! let tree = SuffixTree::new("banana")?;
//!
//! // 1-indexed starting offsets into "banana$"
//! assert_eq!(tree.suffix_order(), [7, 6, 4, 2, 1, 5, 3]);
//!
//! # Ok(())
//! # }
//! ```
//!
//! Checking whether a pattern occurs in the text:
//!
//! ```
//! use suftree::SuffixTree;
//!
//! # fn main() -> Result<(), suftree::Error> {
//! let tree = SuffixTree::new("mississippi")?;
//!
//! assert!(tree.contains("ssip"));
//! assert!(!tree.contains("spin"));
//!
//! # Ok(())
//! # }
//! ```

mod alphabet;
mod end;
mod error;
mod node;
mod traversal;
mod tree;

pub use alphabet::{Symbol, Text};
pub use error::Error;
pub use traversal::{Leaves, NodeRef};
pub use tree::SuffixTree;
