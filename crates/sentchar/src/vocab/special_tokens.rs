//! # Special Tokens

use crate::types::TokenId;

/// The special (non-character) symbols of the vocabulary.
///
/// Discriminants are the token ids; specials always occupy ids `0..3`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SpecialToken {
    /// Padding marker.
    ///
    /// Also used as the "unknown character" sentinel by the encoder;
    /// characters outside the vocabulary become `PAD`, and are dropped
    /// again on decode.
    Pad = 0,

    /// End-of-sequence / end-of-sentence marker.
    Eos = 1,

    /// Beginning-of-sequence marker.
    Bos = 2,
}

impl SpecialToken {
    /// The number of special tokens.
    pub const COUNT: usize = 3;

    /// The token id of this special.
    pub const fn token(self) -> TokenId {
        self as TokenId
    }

    /// The symbol name of this special (`"PAD"`, `"EOS"`, `"BOS"`).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up the special for a token id, if any.
    pub fn from_token(token: TokenId) -> Option<Self> {
        match token {
            0 => Some(Self::Pad),
            1 => Some(Self::Eos),
            2 => Some(Self::Bos),
            _ => None,
        }
    }
}
