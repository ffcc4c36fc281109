//! # Parallel Encoder

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    types::TokenId,
    vocab::CharVocab,
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches when available.
/// Batch output order always matches input order.
#[derive(Clone, Debug)]
pub struct ParallelRayonEncoder<E: TokenEncoder> {
    /// Inner encoder.
    pub inner: E,
}

impl<E> ParallelRayonEncoder<E>
where
    E: TokenEncoder,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E> TokenEncoder for ParallelRayonEncoder<E>
where
    E: TokenEncoder,
{
    fn vocab(&self) -> &Arc<CharVocab> {
        self.inner.vocab()
    }

    fn encode_append(
        &self,
        text: &str,
        split_on_space: bool,
        tokens: &mut Vec<TokenId>,
    ) {
        self.inner.encode_append(text, split_on_space, tokens)
    }

    fn encode_batch(
        &self,
        batch: &[&str],
        split_on_space: bool,
    ) -> Vec<Vec<TokenId>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.encode(text, split_on_space))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoders::CharEncoder,
        types::{
            check_is_send,
            check_is_sync,
        },
    };

    #[test]
    fn test_encoder() {
        let samples = vec![
            "The quick brown fox jumps over the lazy dog.",
            "Pack my box with five dozen liquor jugs.",
            "",
            "What? Really! Yes.",
        ];

        let serial = CharEncoder::default();
        let encoder = ParallelRayonEncoder::new(serial.clone());
        check_is_send(&encoder);
        check_is_sync(&encoder);

        assert!(Arc::ptr_eq(encoder.vocab(), serial.vocab()));

        for split_on_space in [false, true] {
            assert_eq!(
                encoder.encode_batch(&samples, split_on_space),
                serial.encode_batch(&samples, split_on_space)
            );
        }

        for sample in samples {
            assert_eq!(encoder.encode(sample, false), serial.encode(sample, false));
        }
    }
}
