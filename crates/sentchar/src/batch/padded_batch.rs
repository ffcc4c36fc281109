//! # Padded Token Batch

use crate::{
    batch::padding::{
        max_sequence_len,
        pad_sequences,
    },
    types::TokenId,
    vocab::SpecialToken,
};

/// A rectangular `(batch_size, seq_len)` token grid with its attention mask.
///
/// This is the input contract of a [`SequenceModel`](crate::model::SequenceModel):
/// * `tokens` - right-padded token rows;
/// * `mask` - `true` wherever the token is not `PAD`.
///
/// The mask is always computed against `PAD`, whichever token was used for
/// padding; unknown characters (encoded as `PAD`) are masked out as well.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaddedBatch {
    tokens: Vec<Vec<TokenId>>,
    mask: Vec<Vec<bool>>,
    seq_len: usize,
}

impl PaddedBatch {
    /// Pad `sequences` with `pad_token` and compute the mask.
    ///
    /// ## Arguments
    /// * `sequences` - The token sequences to pad.
    /// * `pad_token` - The token appended to short sequences.
    pub fn from_sequences<S: AsRef<[TokenId]>>(
        sequences: &[S],
        pad_token: TokenId,
    ) -> Self {
        let seq_len = max_sequence_len(sequences);
        let tokens = pad_sequences(sequences, pad_token);
        let pad = SpecialToken::Pad.token();
        let mask = tokens
            .iter()
            .map(|row| row.iter().map(|&t| t != pad).collect())
            .collect();

        Self {
            tokens,
            mask,
            seq_len,
        }
    }

    /// The padded token rows.
    pub fn tokens(&self) -> &[Vec<TokenId>] {
        &self.tokens
    }

    /// The attention mask rows.
    pub fn mask(&self) -> &[Vec<bool>] {
        &self.mask
    }

    /// The number of rows.
    pub fn batch_size(&self) -> usize {
        self.tokens.len()
    }

    /// The length of every row.
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// `(batch_size, seq_len)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.batch_size(), self.seq_len())
    }

    /// Is the batch empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens in row-major order, for building a framework tensor.
    pub fn flat_tokens(&self) -> Vec<TokenId> {
        self.tokens.concat()
    }

    /// The mask in row-major order, for building a framework tensor.
    pub fn flat_mask(&self) -> Vec<bool> {
        self.mask.concat()
    }

    /// The number of unmasked (non-`PAD`) positions per row.
    pub fn row_lengths(&self) -> Vec<usize> {
        self.mask
            .iter()
            .map(|row| row.iter().filter(|&&m| m).count())
            .collect()
    }

    /// Split into `(tokens, mask)`.
    pub fn into_parts(self) -> (Vec<Vec<TokenId>>, Vec<Vec<bool>>) {
        (self.tokens, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let batch = PaddedBatch::from_sequences::<Vec<TokenId>>(&[], 0);
        assert!(batch.is_empty());
        assert_eq!(batch.shape(), (0, 0));
        assert!(batch.flat_tokens().is_empty());
        assert_eq!(batch, PaddedBatch::default());
    }

    #[test]
    fn test_mask() {
        let sequences = vec![vec![2, 40, 0, 41, 1], vec![2, 40]];
        let batch = PaddedBatch::from_sequences(&sequences, 0);

        assert_eq!(batch.shape(), (2, 5));
        assert_eq!(
            batch.tokens(),
            &[vec![2, 40, 0, 41, 1], vec![2, 40, 0, 0, 0]]
        );
        assert_eq!(
            batch.mask(),
            &[
                vec![true, true, false, true, true],
                vec![true, true, false, false, false]
            ]
        );
        assert_eq!(batch.row_lengths(), vec![4, 2]);
    }

    #[test]
    fn test_mask_ignores_custom_pad() {
        let sequences = vec![vec![2, 40, 41], vec![2]];
        let batch = PaddedBatch::from_sequences(&sequences, 1);

        assert_eq!(batch.tokens(), &[vec![2, 40, 41], vec![2, 1, 1]]);
        assert_eq!(batch.flat_mask(), vec![true; 6]);
    }

    #[test]
    fn test_flat() {
        let sequences = vec![vec![2, 3], vec![2]];
        let batch = PaddedBatch::from_sequences(&sequences, 0);
        assert_eq!(batch.flat_tokens(), vec![2, 3, 2, 0]);
        assert_eq!(batch.flat_mask(), vec![true, true, true, false]);

        let (tokens, mask) = batch.into_parts();
        assert_eq!(tokens.len(), 2);
        assert_eq!(mask.len(), 2);
    }
}
