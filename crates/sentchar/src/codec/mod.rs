//! # Combined Codec

mod codec_options;
mod vocabulary_codec;

#[doc(inline)]
pub use codec_options::*;
#[doc(inline)]
pub use vocabulary_codec::*;
