use std::sync::Arc;

use crate::{
    VocabularyCodec,
    decoders::TokenDecoderOptions,
    encoders::TokenEncoderOptions,
    vocab::CharVocab,
};

/// Options for configuring a [`VocabularyCodec`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodecOptions {
    /// Encoder options.
    pub encoder: TokenEncoderOptions,

    /// Decoder options.
    pub decoder: TokenDecoderOptions,
}

impl CodecOptions {
    /// Gets the codec's default tokenization mode.
    pub fn split_on_space(&self) -> bool {
        self.encoder.split_on_space()
    }

    /// Sets the codec's default tokenization mode.
    pub fn set_split_on_space(
        &mut self,
        split_on_space: bool,
    ) {
        self.encoder.set_split_on_space(split_on_space);
    }

    /// Sets the codec's default tokenization mode.
    pub fn with_split_on_space(
        mut self,
        split_on_space: bool,
    ) -> Self {
        self.set_split_on_space(split_on_space);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Returns true if either encoder or decoder are configured for parallelism.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn parallel(&self) -> bool {
        self.encoder.parallel() || self.decoder.parallel()
    }

    /// Sets the configured parallelism value on both encoder and decoder.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.encoder.set_parallel(parallel);
        self.decoder.set_parallel(parallel);
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

    /// Build a [`VocabularyCodec`] over the shared vocabulary.
    pub fn build(&self) -> VocabularyCodec {
        self.build_with_vocab(CharVocab::shared())
    }

    /// Build a [`VocabularyCodec`] for the given vocab.
    pub fn build_with_vocab(
        &self,
        vocab: Arc<CharVocab>,
    ) -> VocabularyCodec {
        VocabularyCodec::new(
            vocab.clone(),
            self.encoder.build(vocab.clone()),
            self.decoder.build(vocab),
        )
        .with_split_on_space(self.split_on_space())
    }
}
