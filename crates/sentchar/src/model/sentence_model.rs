//! # Sentence Model Assembly

use crate::{
    batch::PaddedBatch,
    codec::VocabularyCodec,
    errors::{
        SCResult,
        SentcharError,
    },
    model::{
        ModelDims,
        ScoreTensor,
        SequenceModel,
        SequenceModelConfig,
        SequenceModelFactory,
    },
};

/// A [`SequenceModel`] wired to a [`VocabularyCodec`] and its config.
///
/// Drives the text → tokens → padded batch + mask → scores pipeline, and
/// holds the model to the input/output shape contract.
pub struct SentenceModel<M: SequenceModel> {
    config: SequenceModelConfig,
    dims: ModelDims,
    codec: VocabularyCodec,
    model: M,
}

impl<M: SequenceModel> SentenceModel<M> {
    /// Assemble from an already-built model.
    ///
    /// ## Returns
    /// An error if `config` does not validate.
    pub fn new(
        config: SequenceModelConfig,
        codec: VocabularyCodec,
        model: M,
    ) -> SCResult<Self> {
        let dims = ModelDims::new(codec.vocab_size(), &config)?;
        Ok(Self {
            config,
            dims,
            codec,
            model,
        })
    }

    /// Validate `config`, build a model with `factory`, and assemble.
    pub fn build<F>(
        config: SequenceModelConfig,
        codec: VocabularyCodec,
        factory: &F,
    ) -> SCResult<Self>
    where
        F: SequenceModelFactory<Model = M>,
    {
        let dims = ModelDims::new(codec.vocab_size(), &config)?;
        log::debug!(
            "building sequence model: vocab_size={} d_model={} nhead={} num_layers={}",
            dims.vocab_size,
            config.d_model,
            config.nhead,
            config.num_layers
        );
        let model = factory.build(&dims, &config)?;
        Ok(Self {
            config,
            dims,
            codec,
            model,
        })
    }

    /// The model config.
    pub fn config(&self) -> &SequenceModelConfig {
        &self.config
    }

    /// The derived shapes.
    pub fn dims(&self) -> &ModelDims {
        &self.dims
    }

    /// The codec.
    pub fn codec(&self) -> &VocabularyCodec {
        &self.codec
    }

    /// The wrapped model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Tokenize texts (one trailing `EOS` each), pad with `PAD`, and mask.
    ///
    /// ## Returns
    /// An error if the padded length exceeds `max_sequence_length`.
    pub fn prepare<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> SCResult<PaddedBatch> {
        let tokens = self.codec.tokenize_batch(texts, true);
        let batch = self.codec.pad_batch(&tokens);
        self.check_input(&batch)?;
        Ok(batch)
    }

    /// Run the model on a prepared batch.
    ///
    /// ## Returns
    /// The model output, or an error if its dims break the contract.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn forward(
        &self,
        batch: &PaddedBatch,
    ) -> SCResult<M::Output> {
        self.check_input(batch)?;

        let output = self.model.forward(batch)?;

        let expected = self.dims.output_dims(batch.batch_size(), batch.seq_len());
        let actual = output.dims();
        if actual != expected {
            return Err(SentcharError::ShapeMismatch { expected, actual });
        }
        Ok(output)
    }

    /// [`prepare`](Self::prepare) then [`forward`](Self::forward).
    pub fn forward_texts<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> SCResult<M::Output> {
        let batch = self.prepare(texts)?;
        self.forward(&batch)
    }

    fn check_input(
        &self,
        batch: &PaddedBatch,
    ) -> SCResult<()> {
        if batch.seq_len() > self.config.max_sequence_length {
            return Err(SentcharError::SequenceTooLong {
                length: batch.seq_len(),
                max: self.config.max_sequence_length,
            });
        }
        if batch.batch_size() != self.config.batch_size {
            log::debug!(
                "batch size {} differs from configured batch_size {}",
                batch.batch_size(),
                self.config.batch_size
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScoreGrid;

    /// Scores every position uniformly.
    struct UniformModel {
        vocab_size: usize,
    }

    impl SequenceModel for UniformModel {
        type Output = ScoreGrid;

        fn forward(
            &self,
            batch: &PaddedBatch,
        ) -> SCResult<ScoreGrid> {
            let (batch_size, seq_len) = batch.shape();
            Ok(ScoreGrid::filled(
                [batch_size, seq_len, self.vocab_size],
                1.0 / self.vocab_size as f32,
            ))
        }
    }

    struct UniformFactory;

    impl SequenceModelFactory for UniformFactory {
        type Model = UniformModel;

        fn build(
            &self,
            dims: &ModelDims,
            _config: &SequenceModelConfig,
        ) -> SCResult<UniformModel> {
            Ok(UniformModel {
                vocab_size: dims.vocab_size,
            })
        }
    }

    const SENTENCES: [&str; 2] = [
        "The quick brown fox jumps over the lazy dog.",
        "Pack my box with five dozen liquor jugs.",
    ];

    #[test]
    fn test_forward_texts() {
        let model = SentenceModel::build(
            SequenceModelConfig::default(),
            VocabularyCodec::default(),
            &UniformFactory,
        )
        .unwrap();

        let batch = model.prepare(&SENTENCES).unwrap();
        assert_eq!(batch.shape(), (2, 46));

        let output = model.forward_texts(&SENTENCES).unwrap();
        assert_eq!(output.dims(), [2, 46, 99]);
    }

    #[test]
    fn test_sequence_too_long() {
        let config = SequenceModelConfig::default().with_max_sequence_length(10);
        let model = SentenceModel::new(
            config,
            VocabularyCodec::default(),
            UniformModel { vocab_size: 99 },
        )
        .unwrap();

        assert!(model.forward_texts(&["short"]).is_ok());
        assert!(matches!(
            model.forward_texts(&SENTENCES),
            Err(SentcharError::SequenceTooLong {
                length: 46,
                max: 10
            })
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        let model = SentenceModel::new(
            SequenceModelConfig::default(),
            VocabularyCodec::default(),
            UniformModel { vocab_size: 98 },
        )
        .unwrap();

        assert!(matches!(
            model.forward_texts(&SENTENCES),
            Err(SentcharError::ShapeMismatch {
                expected: [2, 46, 99],
                actual: [2, 46, 98]
            })
        ));
    }

    #[test]
    fn test_invalid_config() {
        let config = SequenceModelConfig::default().with_d_model(100);
        assert!(
            SentenceModel::build(config, VocabularyCodec::default(), &UniformFactory).is_err()
        );
    }
}
