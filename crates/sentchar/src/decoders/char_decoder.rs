//! # Character Table Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    errors::{
        SCResult,
        SentcharError,
    },
    types::TokenId,
    vocab::CharVocab,
};

/// A [`TokenDecoder`] over the fixed [`CharVocab`].
///
/// Specials (`PAD`, `EOS`, `BOS`) are skipped; this includes `PAD` tokens
/// produced for unknown characters, which cannot be recovered.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `decoder`.
#[derive(Clone, Debug)]
pub struct CharDecoder {
    vocab: Arc<CharVocab>,
}

impl Default for CharDecoder {
    fn default() -> Self {
        Self::new(CharVocab::shared())
    }
}

impl CharDecoder {
    /// Creates a new Decoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to decode against.
    pub fn new(vocab: Arc<CharVocab>) -> Self {
        Self { vocab }
    }
}

impl TokenDecoder for CharDecoder {
    fn vocab(&self) -> &Arc<CharVocab> {
        &self.vocab
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, text)))]
    fn try_decode_append(
        &self,
        tokens: &[TokenId],
        text: &mut String,
    ) -> SCResult<()> {
        for (position, &token) in tokens.iter().enumerate() {
            let symbol = self
                .vocab
                .symbol_for_token(token)
                .ok_or(SentcharError::InvalidTokenId { token, position })?;

            if let Some(c) = symbol.decoded_char() {
                text.push(c);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoders::{
            CharEncoder,
            TokenEncoder,
        },
        types::{
            check_is_send,
            check_is_sync,
        },
    };

    #[test]
    fn test_skips_specials() {
        let decoder = CharDecoder::default();
        check_is_send(&decoder);
        check_is_sync(&decoder);

        assert_eq!(decoder.try_decode_to_string(&[]).unwrap(), "");
        assert_eq!(decoder.try_decode_to_string(&[2, 0, 1]).unwrap(), "");
        assert_eq!(
            decoder.try_decode_to_string(&[2, 43, 76, 17, 1, 0, 0]).unwrap(),
            "Hi."
        );
    }

    #[test]
    fn test_spaces() {
        let decoder = CharDecoder::default();
        // space surrogate, printable space, printable underscore.
        assert_eq!(decoder.try_decode_to_string(&[98, 3, 66]).unwrap(), "  _");
    }

    #[test]
    fn test_roundtrip() {
        let encoder = CharEncoder::default();
        let decoder = CharDecoder::default();

        for sample in [
            "The quick brown fox.",
            "snake_case and  double  spaces",
            "~!@#$%^&*()_+{}|:\"<>?`-=[]\\;',./",
        ] {
            for split_on_space in [false, true] {
                let tokens = encoder.encode(sample, split_on_space);
                assert_eq!(decoder.try_decode_to_string(&tokens).unwrap(), sample);
            }
        }
    }

    #[test]
    fn test_unknown_chars_dropped() {
        let encoder = CharEncoder::default();
        let decoder = CharDecoder::default();

        let tokens = encoder.encode("tab\there", false);
        assert_eq!(decoder.try_decode_to_string(&tokens).unwrap(), "tabhere");
    }

    #[test]
    fn test_invalid_tokens() {
        let decoder = CharDecoder::default();

        match decoder.try_decode_to_string(&[2, 40, 99]) {
            Err(SentcharError::InvalidTokenId { token, position }) => {
                assert_eq!(token, 99);
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            decoder.try_decode_to_string(&[-1]),
            Err(SentcharError::InvalidTokenId {
                token: -1,
                position: 0
            })
        ));
    }

    #[test]
    fn test_decode_batch() {
        let decoder = CharDecoder::default();

        let batch = vec![vec![2, 43, 76], vec![], vec![2, 98, 1]];
        assert_eq!(
            decoder.try_decode_batch_to_strings(&batch).unwrap(),
            vec!["Hi".to_string(), String::new(), " ".to_string()]
        );

        let batch = vec![vec![2, 43], vec![2, 1000]];
        assert!(decoder.try_decode_batch_to_strings(&batch).is_err());
    }
}
