//! # Sequence Model Plumbing
//!
//! The transformer encoder is external. This module holds:
//! * [`SequenceModelConfig`] - the opaque configuration record;
//! * [`ModelDims`] - shapes derived from the vocab and config;
//! * [`SequenceModel`] / [`SequenceModelFactory`] - the framework seam;
//! * [`SentenceModel`] - codec + config + model, with shape checking.

pub mod model_config;
pub mod model_dims;
pub mod sentence_model;
pub mod sequence_model;

#[doc(inline)]
pub use model_config::{
    Activation,
    SequenceModelConfig,
};
#[doc(inline)]
pub use model_dims::ModelDims;
#[doc(inline)]
pub use sentence_model::SentenceModel;
#[doc(inline)]
pub use sequence_model::{
    ScoreGrid,
    ScoreTensor,
    SequenceModel,
    SequenceModelFactory,
};
