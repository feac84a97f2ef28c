// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
};

use crate::alphabet::Symbol;

/// An error indicating that a string cannot be indexed.
///
/// This error is returned by [`Text::new()`](crate::Text::new) and
/// [`SuffixTree::new()`](crate::SuffixTree::new) before any construction work happens. Once a
/// string has been validated, building its suffix tree cannot fail.
///
/// # Examples
///
/// ```
/// use suftree::{Error, SuffixTree};
///
/// let tree = SuffixTree::new("tab\there");
///
/// assert!(matches!(tree, Err(Error::UnsupportedSymbol { symbol: '\t', position: 3 })));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// A character lies outside of the supported alphabet or is the reserved terminator
    UnsupportedSymbol {
        /// The offending character
        symbol: char,
        /// The 0-indexed character position of `symbol` in the input
        position: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::UnsupportedSymbol { symbol, position }
                if *symbol == char::from(Symbol::TERMINATOR.as_byte()) =>
            {
                write!(
                    f,
                    "unsupported symbol at position {position}: {symbol:?} is the reserved terminator",
                )
            }
            Error::UnsupportedSymbol { symbol, position } => {
                write!(
                    f,
                    "unsupported symbol at position {position}: {symbol:?} is outside of [{:?}, {:?}]",
                    char::from(Symbol::MIN.as_byte()),
                    char::from(Symbol::MAX.as_byte()),
                )
            }
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let error = Error::UnsupportedSymbol {
            symbol: ' ',
            position: 5,
        };

        assert_eq!(
            error.to_string(),
            "unsupported symbol at position 5: ' ' is outside of ['%', '~']",
        );
    }

    #[test]
    fn display_terminator() {
        let error = Error::UnsupportedSymbol {
            symbol: '$',
            position: 0,
        };

        assert_eq!(
            error.to_string(),
            "unsupported symbol at position 0: '$' is the reserved terminator",
        );
    }
}
