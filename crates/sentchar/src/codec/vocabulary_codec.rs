//! # Vocabulary Codec

use std::sync::Arc;

use crate::{
    batch::{
        PaddedBatch,
        pad_sequences,
    },
    codec::CodecOptions,
    decoders::TokenDecoder,
    encoders::TokenEncoder,
    errors::SCResult,
    types::TokenId,
    vocab::{
        CharVocab,
        SpecialToken,
        Symbol,
    },
};

/// Unified text/token codec.
///
/// Combines:
///  * [`CharVocab`],
///  * [`TokenEncoder`], and
///  * [`TokenDecoder`] wrappers.
///
/// The codec is immutable and `Send + Sync`; share it freely.
#[derive(Clone)]
pub struct VocabularyCodec {
    vocab: Arc<CharVocab>,
    encoder: Arc<dyn TokenEncoder>,
    decoder: Arc<dyn TokenDecoder>,
    split_on_space: bool,
}

impl Default for VocabularyCodec {
    fn default() -> Self {
        CodecOptions::default().build()
    }
}

impl core::fmt::Debug for VocabularyCodec {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("VocabularyCodec")
            .field("vocab", &self.vocab)
            .field("split_on_space", &self.split_on_space)
            .finish_non_exhaustive()
    }
}

impl VocabularyCodec {
    /// Create a new codec; the default tokenization mode is inline `EOS`.
    pub fn new(
        vocab: Arc<CharVocab>,
        encoder: Arc<dyn TokenEncoder>,
        decoder: Arc<dyn TokenDecoder>,
    ) -> Self {
        Self {
            vocab,
            encoder,
            decoder,
            split_on_space: false,
        }
    }

    /// Set the default tokenization mode.
    pub fn with_split_on_space(
        mut self,
        split_on_space: bool,
    ) -> Self {
        self.split_on_space = split_on_space;
        self
    }

    /// The default tokenization mode, used by [`Self::tokenize_default`].
    pub fn split_on_space(&self) -> bool {
        self.split_on_space
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<CharVocab> {
        &self.vocab
    }

    /// Get the underlying encoder.
    pub fn encoder(&self) -> &Arc<dyn TokenEncoder> {
        &self.encoder
    }

    /// Get the underlying decoder.
    pub fn decoder(&self) -> &Arc<dyn TokenDecoder> {
        &self.decoder
    }

    /// The fixed vocabulary size (99).
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// The token id of a special.
    pub fn special_token(
        &self,
        special: SpecialToken,
    ) -> TokenId {
        self.vocab.special_token(special)
    }

    /// The `PAD` token id.
    pub fn pad_token(&self) -> TokenId {
        self.special_token(SpecialToken::Pad)
    }

    /// Look up the token for a printable character.
    pub fn token_for_char(
        &self,
        c: char,
    ) -> Option<TokenId> {
        self.vocab.token_for_char(c)
    }

    /// Look up the symbol for a token.
    pub fn symbol_for_token(
        &self,
        token: TokenId,
    ) -> Option<Symbol> {
        self.vocab.symbol_for_token(token)
    }

    /// Tokenize one text.
    ///
    /// See [`TokenEncoder::encode_append`] for the `split_on_space` modes.
    pub fn tokenize(
        &self,
        text: &str,
        split_on_space: bool,
    ) -> Vec<TokenId> {
        self.encoder.encode(text, split_on_space)
    }

    /// Tokenize each text independently, preserving order.
    pub fn tokenize_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
        split_on_space: bool,
    ) -> Vec<Vec<TokenId>> {
        let batch: Vec<&str> = texts.iter().map(|s| s.as_ref()).collect();
        self.encoder.encode_batch(&batch, split_on_space)
    }

    /// Tokenize one text in the codec's default mode.
    pub fn tokenize_default(
        &self,
        text: &str,
    ) -> Vec<TokenId> {
        self.tokenize(text, self.split_on_space)
    }

    /// Tokenize each text in the codec's default mode.
    pub fn tokenize_batch_default<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Vec<Vec<TokenId>> {
        self.tokenize_batch(texts, self.split_on_space)
    }

    /// Right-pad sequences with `pad_token` to the longest length.
    pub fn pad_sequences<S: AsRef<[TokenId]>>(
        &self,
        sequences: &[S],
        pad_token: TokenId,
    ) -> Vec<Vec<TokenId>> {
        pad_sequences(sequences, pad_token)
    }

    /// Pad sequences with `PAD` and compute the attention mask.
    pub fn pad_batch<S: AsRef<[TokenId]>>(
        &self,
        sequences: &[S],
    ) -> PaddedBatch {
        PaddedBatch::from_sequences(sequences, self.pad_token())
    }

    /// Convert tokens back into text.
    ///
    /// Specials are dropped; any id outside the vocabulary is an error.
    pub fn detokenize(
        &self,
        tokens: &[TokenId],
    ) -> SCResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }

    /// Detokenize each sequence, preserving order.
    pub fn detokenize_batch(
        &self,
        batch: &[Vec<TokenId>],
    ) -> SCResult<Vec<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }
}

impl TokenEncoder for VocabularyCodec {
    fn vocab(&self) -> &Arc<CharVocab> {
        &self.vocab
    }

    fn encode_append(
        &self,
        text: &str,
        split_on_space: bool,
        tokens: &mut Vec<TokenId>,
    ) {
        self.encoder.encode_append(text, split_on_space, tokens)
    }

    fn encode_batch(
        &self,
        batch: &[&str],
        split_on_space: bool,
    ) -> Vec<Vec<TokenId>> {
        self.encoder.encode_batch(batch, split_on_space)
    }
}

impl TokenDecoder for VocabularyCodec {
    fn vocab(&self) -> &Arc<CharVocab> {
        &self.vocab
    }

    fn try_decode_append(
        &self,
        tokens: &[TokenId],
        text: &mut String,
    ) -> SCResult<()> {
        self.decoder.try_decode_append(tokens, text)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<TokenId>],
    ) -> SCResult<Vec<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }
}
