//! # Sequence Padding

use crate::types::TokenId;

/// The length of the longest sequence; `0` for an empty batch.
pub fn max_sequence_len<S: AsRef<[TokenId]>>(sequences: &[S]) -> usize {
    sequences
        .iter()
        .map(|seq| seq.as_ref().len())
        .max()
        .unwrap_or_default()
}

/// Right-pad each sequence to the length of the longest one.
///
/// The inputs are not modified; output order matches input order.
///
/// ## Arguments
/// * `sequences` - The token sequences to pad.
/// * `pad_token` - The token appended to short sequences.
///
/// ## Returns
/// New sequences, all of length [`max_sequence_len`]; empty for an empty batch.
pub fn pad_sequences<S: AsRef<[TokenId]>>(
    sequences: &[S],
    pad_token: TokenId,
) -> Vec<Vec<TokenId>> {
    let max_len = max_sequence_len(sequences);

    sequences
        .iter()
        .map(|seq| {
            let seq = seq.as_ref();
            let mut padded = Vec::with_capacity(max_len);
            padded.extend_from_slice(seq);
            padded.resize(max_len, pad_token);
            padded
        })
        .collect()
}
