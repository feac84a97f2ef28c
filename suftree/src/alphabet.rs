// Copyright 2023 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::fmt::{self, Display, Formatter, Write};

use crate::error::Error;

/// A member of the alphabet a [`SuffixTree`](crate::SuffixTree) is built over.
///
/// The alphabet consists of the printable ASCII characters from `'%'` to `'~'` inclusive, plus
/// the reserved terminator `'$'`. Symbols order by their ASCII value, so the terminator sorts
/// below every other symbol.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(u8);

impl Symbol {
    /// The reserved terminator appended once to every text
    pub const TERMINATOR: Self = Self(b'$');

    /// The smallest symbol accepted in input
    pub const MIN: Self = Self(b'%');

    /// The largest symbol accepted in input
    pub const MAX: Self = Self(b'~');

    /// Returns the symbol for `c`, or `None` if `c` may not appear in input.
    ///
    /// The terminator is never accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use suftree::Symbol;
    ///
    /// assert!(Symbol::new('a').is_some());
    /// assert!(Symbol::new('$').is_none());
    /// assert!(Symbol::new(' ').is_none());
    /// ```
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        let byte = u8::try_from(c).ok()?;

        (Self::MIN.0..=Self::MAX.0)
            .contains(&byte)
            .then_some(Self(byte))
    }

    /// Returns the ASCII value of this symbol.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_char(char::from(self.0))
    }
}

/// A validated string with the terminator appended.
///
/// # Examples
///
/// ```
/// use suftree::Text;
///
/// # fn main() -> Result<(), suftree::Error> {
/// let text = Text::new("abc")?;
///
/// assert_eq!(text.len(), 4);
/// assert_eq!(text.to_string(), "abc$");
///
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Text {
    symbols: Vec<Symbol>,
}

#[allow(clippy::len_without_is_empty)]
impl Text {
    /// Validates `s` and appends the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedSymbol`] for the first character of `s` outside of the
    /// alphabet, including the terminator itself.
    pub fn new(s: &str) -> Result<Self, Error> {
        // Reserve one symbol of extra space for the terminator
        let mut symbols = Vec::with_capacity(s.len() + 1);

        for (position, c) in s.chars().enumerate() {
            let symbol =
                Symbol::new(c).ok_or(Error::UnsupportedSymbol { symbol: c, position })?;
            symbols.push(symbol);
        }

        symbols.push(Symbol::TERMINATOR);

        Ok(Self { symbols })
    }

    /// Returns the number of symbols in the text, including the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbols of the text, ending with the terminator.
    #[must_use]
    pub fn as_symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.symbols
            .iter()
            .try_for_each(|symbol| Display::fmt(symbol, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminator_sorts_first() {
        assert!(Symbol::TERMINATOR < Symbol::MIN);
        assert!(Symbol::new('%').is_some_and(|s| s > Symbol::TERMINATOR));
    }

    #[test]
    fn alphabet_bounds() {
        assert_eq!(Symbol::new('%'), Some(Symbol::MIN));
        assert_eq!(Symbol::new('~'), Some(Symbol::MAX));
        assert_eq!(Symbol::new('#'), None);
        assert_eq!(Symbol::new('\u{7f}'), None);
        assert_eq!(Symbol::new('é'), None);
    }

    #[test]
    fn empty_text_is_terminator() {
        let text = Text::new("").unwrap();

        assert_eq!(text.as_symbols(), &[Symbol::TERMINATOR]);
    }

    #[test]
    fn rejects_terminator() {
        assert_eq!(
            Text::new("ab$c"),
            Err(Error::UnsupportedSymbol {
                symbol: '$',
                position: 2,
            }),
        );
    }

    #[test]
    fn reports_character_position() {
        // 'é' spans two bytes, the position still counts characters
        assert_eq!(
            Text::new("aéb c"),
            Err(Error::UnsupportedSymbol {
                symbol: 'é',
                position: 1,
            }),
        );
    }

    #[test]
    fn display_includes_terminator() {
        let text = Text::new("Hello,world").unwrap();

        assert_eq!(text.to_string(), "Hello,world$");
    }
}
