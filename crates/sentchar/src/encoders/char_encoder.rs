//! # Character Table Encoder

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    types::TokenId,
    vocab::{
        CharVocab,
        SpecialToken,
    },
};

/// Characters which end a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Is this character a sentence terminator?
#[inline(always)]
pub fn is_sentence_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// A [`TokenEncoder`] over the fixed [`CharVocab`].
///
/// One token per input `char`:
/// * `' '` becomes the space surrogate;
/// * printable ASCII becomes its own token;
/// * anything else becomes `PAD`.
///
/// `PAD` is overloaded as the unknown-character sentinel. Unknown characters
/// are therefore indistinguishable from padding, and decoding drops them.
#[derive(Clone, Debug)]
pub struct CharEncoder {
    vocab: Arc<CharVocab>,
}

impl Default for CharEncoder {
    fn default() -> Self {
        Self::new(CharVocab::shared())
    }
}

impl CharEncoder {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to encode against.
    pub fn new(vocab: Arc<CharVocab>) -> Self {
        Self { vocab }
    }

    /// Encode a single character.
    #[inline(always)]
    fn char_token(
        &self,
        c: char,
    ) -> TokenId {
        if c == ' ' {
            return self.vocab.space_token();
        }
        match self.vocab.token_for_char(c) {
            Some(token) => token,
            None => {
                log::trace!("unknown character {c:?}; encoding as PAD");
                SpecialToken::Pad.token()
            }
        }
    }
}

impl TokenEncoder for CharEncoder {
    fn vocab(&self) -> &Arc<CharVocab> {
        &self.vocab
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn encode_append(
        &self,
        text: &str,
        split_on_space: bool,
        tokens: &mut Vec<TokenId>,
    ) {
        let eos = SpecialToken::Eos.token();

        tokens.push(SpecialToken::Bos.token());
        for c in text.chars() {
            tokens.push(self.char_token(c));
            if !split_on_space && is_sentence_terminator(c) {
                tokens.push(eos);
            }
        }
        if split_on_space {
            tokens.push(eos);
        }
    }
}
