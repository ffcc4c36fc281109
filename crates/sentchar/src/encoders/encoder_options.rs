//! Token Encoder Options
//!
//! Options for building a [`TokenEncoder`].

use std::sync::Arc;

use crate::{
    encoders::{
        CharEncoder,
        TokenEncoder,
    },
    vocab::CharVocab,
};

/// Options for configuring a [`TokenEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenEncoderOptions {
    /// Default tokenization mode; see [`TokenEncoder::encode_append`].
    pub split_on_space: bool,

    /// Should batch encoding be threaded?
    pub parallel: bool,
}

impl TokenEncoderOptions {
    /// Gets the default tokenization mode.
    ///
    /// When true, each text is one sequence with a single trailing `EOS`;
    /// otherwise `EOS` follows every sentence terminator.
    pub fn split_on_space(&self) -> bool {
        self.split_on_space
    }

    /// Sets the default tokenization mode.
    pub fn set_split_on_space(
        &mut self,
        split_on_space: bool,
    ) {
        self.split_on_space = split_on_space;
    }

    /// Sets the default tokenization mode.
    pub fn with_split_on_space(
        mut self,
        split_on_space: bool,
    ) -> Self {
        self.set_split_on_space(split_on_space);
        self
    }

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

    /// Build a [`TokenEncoder`] for the given vocab.
    ///
    /// Without the ``rayon`` feature, `parallel` is ignored.
    /// `split_on_space` is not a property of the encoder; it is carried by
    /// the [`VocabularyCodec`](crate::VocabularyCodec) built from these options.
    pub fn build(
        &self,
        vocab: Arc<CharVocab>,
    ) -> Arc<dyn TokenEncoder> {
        let encoder = CharEncoder::new(vocab);

        #[cfg(feature = "rayon")]
        if self.parallel {
            return Arc::new(crate::rayon::ParallelRayonEncoder::new(encoder));
        }

        Arc::new(encoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_flag() {
        let mut options = TokenEncoderOptions::default();
        assert!(!options.parallel());

        options.set_parallel(true);
        assert!(options.parallel());

        assert!(!options.with_parallel(false).parallel());
    }

    #[test]
    fn test_split_on_space_flag() {
        let mut options = TokenEncoderOptions::default();
        assert!(!options.split_on_space());

        options.set_split_on_space(true);
        assert!(options.split_on_space());
        assert!(!options.parallel());

        assert!(!options.with_split_on_space(false).split_on_space());
    }

    #[test]
    fn test_build() {
        for parallel in [false, true] {
            let encoder = TokenEncoderOptions::default()
                .with_parallel(parallel)
                .build(CharVocab::shared());
            assert_eq!(encoder.encode("ok", true), vec![2, 82, 78, 1]);
            assert_eq!(
                encoder.encode_batch(&["a", "b"], false),
                vec![vec![2, 68], vec![2, 69]]
            );
        }
    }
}
