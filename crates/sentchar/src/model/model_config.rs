//! # Sequence Model Configuration

use crate::errors::{
    SCResult,
    SentcharError,
};

/// Feed-forward activation used by the encoder layers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Activation {
    /// Gaussian error linear unit.
    #[default]
    Gelu,

    /// Rectified linear unit.
    Relu,
}

/// Configuration for the external transformer-encoder.
///
/// This record is not interpreted by the codec; it is handed to a
/// [`SequenceModelFactory`](crate::model::SequenceModelFactory), which builds:
/// * an embedding of `(vocab_size, d_model)`;
/// * `num_layers` encoder layers of `nhead` heads, `dim_feedforward` width,
///   `dropout`, `activation`, batch-first, optionally pre-norm;
/// * an output projection of `(d_model, vocab_size)`.
///
/// `batch_size` is advisory; batches of any size may be run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SequenceModelConfig {
    /// Nominal batch size.
    pub batch_size: usize,

    /// Longest padded sequence the model accepts.
    pub max_sequence_length: usize,

    /// Embedding / hidden dimension.
    pub d_model: usize,

    /// Attention head count; must divide `d_model`.
    pub nhead: usize,

    /// Encoder layer count.
    pub num_layers: usize,

    /// Feed-forward sublayer width.
    pub dim_feedforward: usize,

    /// Dropout rate in ``[0, 1)``.
    pub dropout: f64,

    /// Feed-forward activation.
    pub activation: Activation,

    /// Apply layer norm before (rather than after) each sublayer.
    pub norm_first: bool,

    /// Inputs are laid out `(batch, seq)` rather than `(seq, batch)`.
    pub batch_first: bool,
}

impl Default for SequenceModelConfig {
    fn default() -> Self {
        Self {
            batch_size: 2,
            max_sequence_length: 512,
            d_model: 768,
            nhead: 12,
            num_layers: 6,
            dim_feedforward: 3072,
            dropout: 0.1,
            activation: Activation::Gelu,
            norm_first: true,
            batch_first: true,
        }
    }
}

impl SequenceModelConfig {
    /// Set the nominal batch size.
    pub fn with_batch_size(
        mut self,
        batch_size: usize,
    ) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the maximum sequence length.
    pub fn with_max_sequence_length(
        mut self,
        max_sequence_length: usize,
    ) -> Self {
        self.max_sequence_length = max_sequence_length;
        self
    }

    /// Set the model dimension.
    pub fn with_d_model(
        mut self,
        d_model: usize,
    ) -> Self {
        self.d_model = d_model;
        self
    }

    /// Set the attention head count.
    pub fn with_nhead(
        mut self,
        nhead: usize,
    ) -> Self {
        self.nhead = nhead;
        self
    }

    /// Set the encoder layer count.
    pub fn with_num_layers(
        mut self,
        num_layers: usize,
    ) -> Self {
        self.num_layers = num_layers;
        self
    }

    /// Set the feed-forward width.
    pub fn with_dim_feedforward(
        mut self,
        dim_feedforward: usize,
    ) -> Self {
        self.dim_feedforward = dim_feedforward;
        self
    }

    /// Set the dropout rate.
    pub fn with_dropout(
        mut self,
        dropout: f64,
    ) -> Self {
        self.dropout = dropout;
        self
    }

    /// Set the feed-forward activation.
    pub fn with_activation(
        mut self,
        activation: Activation,
    ) -> Self {
        self.activation = activation;
        self
    }

    /// The per-head attention dimension.
    ///
    /// Only meaningful on a validated config.
    pub fn head_dim(&self) -> usize {
        self.d_model / self.nhead.max(1)
    }

    /// Check the config for values no encoder can be built from.
    pub fn validate(&self) -> SCResult<()> {
        let sizes = [
            ("batch_size", self.batch_size),
            ("max_sequence_length", self.max_sequence_length),
            ("d_model", self.d_model),
            ("nhead", self.nhead),
            ("num_layers", self.num_layers),
            ("dim_feedforward", self.dim_feedforward),
        ];
        for (name, value) in sizes {
            if value == 0 {
                return Err(SentcharError::InvalidConfig(format!(
                    "{name} must be > 0"
                )));
            }
        }

        if !self.d_model.is_multiple_of(self.nhead) {
            return Err(SentcharError::InvalidConfig(format!(
                "d_model ({}) must be divisible by nhead ({})",
                self.d_model, self.nhead
            )));
        }

        if !(0.0..1.0).contains(&self.dropout) {
            return Err(SentcharError::InvalidConfig(format!(
                "dropout ({}) must be in [0, 1)",
                self.dropout
            )));
        }

        Ok(())
    }
}
