//! # Token Encoders
//!
//! Encoder clients should use:
//!
//! * [`CharEncoder`] - the character table encoder.
//! * `ParallelRayonEncoder` - a batch parallelism wrapper around any
//!   [`TokenEncoder`] (``rayon`` feature).
//!
//! ## Example
//!
//! ```rust
//! use sentchar::encoders::{CharEncoder, TokenEncoder};
//!
//! let encoder = CharEncoder::default();
//! let tokens = encoder.encode("Hi.", false);
//!
//! // BOS, 'H', 'i', '.', EOS
//! assert_eq!(tokens, vec![2, 43, 76, 17, 1]);
//! ```

pub mod char_encoder;
pub mod encoder_options;
pub mod token_encoder;

#[doc(inline)]
pub use char_encoder::{
    CharEncoder,
    SENTENCE_TERMINATORS,
    is_sentence_terminator,
};
#[doc(inline)]
pub use encoder_options::TokenEncoderOptions;
#[doc(inline)]
pub use token_encoder::TokenEncoder;
