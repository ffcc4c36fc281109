//! # Derived Model Shapes

use crate::{
    errors::SCResult,
    model::SequenceModelConfig,
};

/// The tensor shapes an encoder built from a [`SequenceModelConfig`] has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelDims {
    /// Vocabulary size; the embedding rows and the projection outputs.
    pub vocab_size: usize,

    /// Hidden dimension.
    pub d_model: usize,

    /// Per-head attention dimension.
    pub head_dim: usize,

    /// Longest accepted sequence.
    pub max_sequence_length: usize,
}

impl ModelDims {
    /// Derive the dims for a vocab and a config.
    ///
    /// ## Returns
    /// An error if the config does not validate.
    pub fn new(
        vocab_size: usize,
        config: &SequenceModelConfig,
    ) -> SCResult<Self> {
        config.validate()?;
        Ok(Self {
            vocab_size,
            d_model: config.d_model,
            head_dim: config.head_dim(),
            max_sequence_length: config.max_sequence_length,
        })
    }

    /// `(vocab_size, d_model)`.
    pub fn embedding_shape(&self) -> [usize; 2] {
        [self.vocab_size, self.d_model]
    }

    /// `(d_model, vocab_size)`.
    pub fn projection_shape(&self) -> [usize; 2] {
        [self.d_model, self.vocab_size]
    }

    /// The `[batch, seq, vocab]` dims of the model output for a batch.
    pub fn output_dims(
        &self,
        batch_size: usize,
        seq_len: usize,
    ) -> [usize; 3] {
        [batch_size, seq_len, self.vocab_size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dims() {
        let dims = ModelDims::new(99, &SequenceModelConfig::default()).unwrap();
        assert_eq!(dims.embedding_shape(), [99, 768]);
        assert_eq!(dims.projection_shape(), [768, 99]);
        assert_eq!(dims.head_dim, 64);
        assert_eq!(dims.output_dims(2, 46), [2, 46, 99]);
    }

    #[test]
    fn test_invalid_config() {
        let config = SequenceModelConfig::default().with_nhead(5);
        assert!(ModelDims::new(99, &config).is_err());
    }
}
