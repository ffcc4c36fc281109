//! # Token Decoder Trait

use std::sync::Arc;

use crate::{
    errors::SCResult,
    types::TokenId,
    vocab::CharVocab,
};

/// Trait for token decoders.
pub trait TokenDecoder: Send + Sync {
    /// Return the attached vocabulary.
    fn vocab(&self) -> &Arc<CharVocab>;

    /// Decodes tokens, appending to a target string.
    ///
    /// On error, `text` may hold a partial decode.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `text` - The target string to append to.
    ///
    /// ## Returns
    /// An error naming the first token with no vocabulary entry.
    fn try_decode_append(
        &self,
        tokens: &[TokenId],
        text: &mut String,
    ) -> SCResult<()>;

    /// Decodes tokens into a string.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// A `Result<String>`.
    fn try_decode_to_string(
        &self,
        tokens: &[TokenId],
    ) -> SCResult<String> {
        let mut text = String::with_capacity(tokens.len());
        self.try_decode_append(tokens, &mut text)?;
        Ok(text)
    }

    /// Decodes a batch of tokens.
    ///
    /// ## Arguments
    /// * `batch` - A batch of token sequences.
    ///
    /// ## Returns
    /// A `Result<Vec<String>>` in batch order; the first failure fails the batch.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<TokenId>],
    ) -> SCResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
