//! # Vocabulary
//!
//! The fixed 99-entry character vocabulary:
//!
//! | ids      | symbols                          |
//! |----------|----------------------------------|
//! | `0..3`   | `PAD`, `EOS`, `BOS`              |
//! | `3..98`  | printable ASCII ``' '..='~'``    |
//! | `98`     | `_`, the space surrogate         |

pub mod char_vocab;
pub mod special_tokens;
pub mod symbol;

#[doc(inline)]
pub use char_vocab::{
    CharVocab,
    SPACE_TOKEN,
    VOCAB_SIZE,
};
#[doc(inline)]
pub use special_tokens::SpecialToken;
#[doc(inline)]
pub use symbol::Symbol;
