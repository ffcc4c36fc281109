//! # Token Encoder Trait

use std::sync::Arc;

use crate::{
    types::TokenId,
    vocab::CharVocab,
};

/// A trait for token encoders.
///
/// Encoding is total: every input text produces a token sequence beginning
/// with `BOS`. Characters outside the vocabulary are not errors.
pub trait TokenEncoder: Send + Sync {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &Arc<CharVocab>;

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `split_on_space` - When `false`, every `.`, `!`, `?` is followed by an
    ///   inline `EOS`; when `true`, a single `EOS` is appended at the end.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append(
        &self,
        text: &str,
        split_on_space: bool,
        tokens: &mut Vec<TokenId>,
    );

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `split_on_space` - See [`TokenEncoder::encode_append`].
    ///
    /// ## Returns
    /// A vector of tokens, starting with `BOS`.
    fn encode(
        &self,
        text: &str,
        split_on_space: bool,
    ) -> Vec<TokenId> {
        // BOS + one token per char + a trailing EOS.
        let mut tokens = Vec::with_capacity(text.len() + 2);
        self.encode_append(text, split_on_space, &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    ///
    /// Each text is encoded independently; output order matches input order.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    /// * `split_on_space` - See [`TokenEncoder::encode_append`].
    ///
    /// ## Returns
    /// A vector of token vectors.
    fn encode_batch(
        &self,
        batch: &[&str],
        split_on_space: bool,
    ) -> Vec<Vec<TokenId>> {
        batch
            .iter()
            .map(|text| self.encode(text, split_on_space))
            .collect()
    }
}
