//! # Parallel Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    errors::SCResult,
    types::TokenId,
    vocab::CharVocab,
};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches when available.
#[derive(Clone, Debug)]
pub struct ParallelRayonDecoder<D: TokenDecoder> {
    /// Wrapped decoder.
    pub inner: D,
}

impl<D> ParallelRayonDecoder<D>
where
    D: TokenDecoder,
{
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonDecoder` instance.
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D> TokenDecoder for ParallelRayonDecoder<D>
where
    D: TokenDecoder,
{
    fn vocab(&self) -> &Arc<CharVocab> {
        self.inner.vocab()
    }

    fn try_decode_append(
        &self,
        tokens: &[TokenId],
        text: &mut String,
    ) -> SCResult<()> {
        self.inner.try_decode_append(tokens, text)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<TokenId>],
    ) -> SCResult<Vec<String>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_string(tokens))
            .collect()
    }
}
