//! # Sequence Model Seam
//!
//! The network itself lives in an external deep-learning framework;
//! these traits are the contract between it and the codec.

use crate::{
    batch::PaddedBatch,
    errors::{
        SCResult,
        SentcharError,
    },
    model::{
        ModelDims,
        SequenceModelConfig,
    },
};

/// A `[batch, seq, vocab]` score tensor produced by a [`SequenceModel`].
pub trait ScoreTensor {
    /// The tensor dims.
    fn dims(&self) -> [usize; 3];
}

/// An external sequence model.
///
/// Maps a padded token batch and its attention mask to per-position score
/// distributions over the vocabulary.
pub trait SequenceModel: Send + Sync {
    /// The framework's output tensor type.
    type Output: ScoreTensor;

    /// Run a forward pass.
    ///
    /// ## Arguments
    /// * `batch` - Padded tokens and the attention mask (`true` = not `PAD`).
    ///
    /// ## Returns
    /// Scores of dims `[batch_size, seq_len, vocab_size]`.
    fn forward(
        &self,
        batch: &PaddedBatch,
    ) -> SCResult<Self::Output>;
}

/// Builds a [`SequenceModel`]; the framework's `construct(vocab_size, d_model, ...)`.
pub trait SequenceModelFactory {
    /// The model type built.
    type Model: SequenceModel;

    /// Build a model.
    ///
    /// ## Arguments
    /// * `dims` - Shapes derived from the vocab and `config`.
    /// * `config` - The validated encoder configuration.
    fn build(
        &self,
        dims: &ModelDims,
        config: &SequenceModelConfig,
    ) -> SCResult<Self::Model>;
}

/// A dense, row-major `[batch, seq, vocab]` score grid.
///
/// A plain container for framework adapters that copy scores out of a
/// device tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreGrid {
    dims: [usize; 3],
    scores: Vec<f32>,
}

impl ScoreGrid {
    /// Wrap row-major scores.
    ///
    /// ## Returns
    /// An error if `scores.len()` is not the product of `dims`.
    pub fn new(
        dims: [usize; 3],
        scores: Vec<f32>,
    ) -> SCResult<Self> {
        let expected: usize = dims.iter().product();
        if scores.len() != expected {
            return Err(SentcharError::External(format!(
                "score buffer of {} values does not fill dims {:?}",
                scores.len(),
                dims
            )));
        }
        Ok(Self { dims, scores })
    }

    /// A grid filled with a single value.
    pub fn filled(
        dims: [usize; 3],
        value: f32,
    ) -> Self {
        Self {
            dims,
            scores: vec![value; dims.iter().product()],
        }
    }

    /// The scores for one position.
    pub fn position(
        &self,
        row: usize,
        pos: usize,
    ) -> Option<&[f32]> {
        let [batch, seq, vocab] = self.dims;
        if row >= batch || pos >= seq {
            return None;
        }
        let start = (row * seq + pos) * vocab;
        self.scores.get(start..start + vocab)
    }

    /// The arg-max token id at every position.
    pub fn argmax(&self) -> Vec<Vec<usize>> {
        let [batch, seq, _] = self.dims;
        (0..batch)
            .map(|row| {
                (0..seq)
                    .map(|pos| {
                        self.position(row, pos)
                            .into_iter()
                            .flatten()
                            .enumerate()
                            .fold((0, f32::NEG_INFINITY), |best, (idx, &s)| {
                                if s > best.1 { (idx, s) } else { best }
                            })
                            .0
                    })
                    .collect()
            })
            .collect()
    }

    /// The raw row-major scores.
    pub fn scores(&self) -> &[f32] {
        &self.scores
    }
}

impl ScoreTensor for ScoreGrid {
    fn dims(&self) -> [usize; 3] {
        self.dims
    }
}
