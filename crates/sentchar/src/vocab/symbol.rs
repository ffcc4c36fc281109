//! # Vocabulary Symbols

use core::fmt::{
    Display,
    Formatter,
};

use crate::vocab::SpecialToken;

/// The display form of [`Symbol::Space`].
pub const SPACE_SURROGATE: &str = "_";

/// A vocabulary entry.
///
/// The printable ASCII range already contains `'_'`, so the space surrogate
/// is kept as its own variant; this keeps the vocabulary a bijection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A special marker.
    Special(SpecialToken),

    /// A single printable ASCII character.
    Char(char),

    /// The space surrogate, displayed as `_`.
    Space,
}

impl Symbol {
    /// The text this symbol contributes when decoding.
    ///
    /// Specials contribute nothing.
    pub fn decoded_char(&self) -> Option<char> {
        match self {
            Symbol::Special(_) => None,
            Symbol::Char(c) => Some(*c),
            Symbol::Space => Some(' '),
        }
    }

    /// Is this a special marker?
    pub fn is_special(&self) -> bool {
        matches!(self, Symbol::Special(_))
    }
}

impl Display for Symbol {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Symbol::Special(special) => write!(f, "{special}"),
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Space => f.write_str(SPACE_SURROGATE),
        }
    }
}
