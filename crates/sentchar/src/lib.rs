//! # `sentchar` Character-Level Sentence Tokenizer
//!
//! A fixed 99-symbol character vocabulary, a codec over it, and the plumbing
//! needed to feed padded token batches into an external transformer-encoder.
//!
//! See:
//! * [`vocab`] for the fixed vocabulary and its special tokens.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`batch`] to pad token sequences and build attention masks.
//! * [`codec`] for [`VocabularyCodec`], which combines all of the above.
//! * [`model`] for the sequence model configuration and trait seam.
//!
//! The network layers themselves (embedding, attention, projection) are not
//! part of this crate; a deep-learning framework provides them by
//! implementing [`model::SequenceModel`].
//!
//! ## Example
//!
//! ```rust
//! use sentchar::VocabularyCodec;
//!
//! let codec = VocabularyCodec::default();
//!
//! let tokens = codec.tokenize("The quick brown fox.", false);
//! assert_eq!(codec.detokenize(&tokens).unwrap(), "The quick brown fox.");
//!
//! let batch = codec.tokenize_batch(&["Hi!", "Hello there."], true);
//! let padded = codec.pad_batch(&batch);
//! assert_eq!(padded.shape(), (2, 14));
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod batch;
pub mod codec;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod model;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use batch::{
    PaddedBatch,
    pad_sequences,
};
#[doc(inline)]
pub use codec::{
    CodecOptions,
    VocabularyCodec,
};
#[doc(inline)]
pub use decoders::{
    CharDecoder,
    TokenDecoder,
};
#[doc(inline)]
pub use encoders::{
    CharEncoder,
    TokenEncoder,
};
#[doc(inline)]
pub use errors::{
    SCResult,
    SentcharError,
};
#[doc(inline)]
pub use types::TokenId;
#[doc(inline)]
pub use vocab::{
    CharVocab,
    SpecialToken,
    Symbol,
};
