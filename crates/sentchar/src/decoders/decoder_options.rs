//! Token Decoder Options
//!
//! Options for building a [`TokenDecoder`].

use std::sync::Arc;

use crate::{
    decoders::{
        CharDecoder,
        TokenDecoder,
    },
    vocab::CharVocab,
};

/// Options for configuring a [`TokenDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenDecoderOptions {
    /// Should batch decoding be threaded?
    pub parallel: bool,
}

impl TokenDecoderOptions {
    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`TokenDecoder`] for the given vocab.
    ///
    /// Without the ``rayon`` feature, `parallel` is ignored.
    pub fn build(
        &self,
        vocab: Arc<CharVocab>,
    ) -> Arc<dyn TokenDecoder> {
        let decoder = CharDecoder::new(vocab);

        #[cfg(feature = "rayon")]
        if self.parallel {
            return Arc::new(crate::rayon::ParallelRayonDecoder::new(decoder));
        }

        Arc::new(decoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        for parallel in [false, true] {
            let options = TokenDecoderOptions::default().with_parallel(parallel);
            assert_eq!(options.parallel(), parallel);

            let decoder = options.build(CharVocab::shared());
            assert_eq!(
                decoder
                    .try_decode_batch_to_strings(&[vec![2, 82, 78, 1], vec![2, 98]])
                    .unwrap(),
                vec!["ok".to_string(), " ".to_string()]
            );
        }
    }
}
