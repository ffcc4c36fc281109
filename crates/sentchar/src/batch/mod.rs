//! # Token Batches
//!
//! Right-padding of token sequences into rectangular batches, and the
//! [`PaddedBatch`] grid (tokens + attention mask) consumed by a sequence model.

pub mod padded_batch;
pub mod padding;

#[doc(inline)]
pub use padded_batch::PaddedBatch;
#[doc(inline)]
pub use padding::{
    max_sequence_len,
    pad_sequences,
};
