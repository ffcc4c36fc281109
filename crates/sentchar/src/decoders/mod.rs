//! # Token Decoders
//!
//! Decoder clients should use:
//!
//! * [`CharDecoder`] - the character table decoder.
//! * `ParallelRayonDecoder` - a batch parallelism wrapper around any
//!   [`TokenDecoder`] (``rayon`` feature).
//!
//! ## Example
//!
//! ```rust
//! use sentchar::decoders::{CharDecoder, TokenDecoder};
//!
//! let decoder = CharDecoder::default();
//! assert_eq!(decoder.try_decode_to_string(&[2, 43, 76, 17, 1]).unwrap(), "Hi.");
//! assert!(decoder.try_decode_to_string(&[2, 99]).is_err());
//! ```

pub mod char_decoder;
pub mod decoder_options;
pub mod token_decoder;

#[doc(inline)]
pub use char_decoder::CharDecoder;
#[doc(inline)]
pub use decoder_options::TokenDecoderOptions;
#[doc(inline)]
pub use token_decoder::TokenDecoder;
