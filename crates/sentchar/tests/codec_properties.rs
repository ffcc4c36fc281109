#![allow(missing_docs)]

use proptest::prelude::*;
use sentchar::{
    SentcharError,
    TokenId,
    VocabularyCodec,
    pad_sequences,
};

const PAD: TokenId = 0;
const EOS: TokenId = 1;
const BOS: TokenId = 2;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn roundtrip_printable(text in "[ -~]{0,120}") {
        let codec = VocabularyCodec::default();
        for split_on_space in [false, true] {
            let tokens = codec.tokenize(&text, split_on_space);
            prop_assert_eq!(tokens[0], BOS);
            prop_assert_eq!(codec.detokenize(&tokens).unwrap(), text.clone());
        }
    }

    #[test]
    fn eos_placement(text in "[ -~]{0,80}") {
        let codec = VocabularyCodec::default();
        let terminators = text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count();
        let chars = text.chars().count();

        let inline = codec.tokenize(&text, false);
        prop_assert_eq!(inline.len(), 1 + chars + terminators);
        prop_assert_eq!(inline.iter().filter(|&&t| t == EOS).count(), terminators);

        let split = codec.tokenize(&text, true);
        prop_assert_eq!(split.len(), chars + 2);
        prop_assert_eq!(split.last().copied(), Some(EOS));
        prop_assert_eq!(split.iter().filter(|&&t| t == EOS).count(), 1);
    }

    #[test]
    fn unknown_chars_dropped(text in "\\PC{0,60}") {
        let codec = VocabularyCodec::default();
        let tokens = codec.tokenize(&text, true);
        prop_assert_eq!(tokens.len(), text.chars().count() + 2);

        let expected: String = text
            .chars()
            .filter(|c| (' '..='~').contains(c))
            .collect();
        prop_assert_eq!(codec.detokenize(&tokens).unwrap(), expected);
    }

    #[test]
    fn padding_shape(
        rows in prop::collection::vec(prop::collection::vec(0..99i64, 0..40), 0..12),
        pad_token in 0..99i64,
    ) {
        let padded = pad_sequences(&rows, pad_token);
        prop_assert_eq!(padded.len(), rows.len());

        let max_len = rows.iter().map(Vec::len).max().unwrap_or(0);
        for (row, out) in rows.iter().zip(padded.iter()) {
            prop_assert_eq!(out.len(), max_len);
            prop_assert_eq!(&out[..row.len()], row.as_slice());
            prop_assert!(out[row.len()..].iter().all(|&t| t == pad_token));
        }
    }

    #[test]
    fn batch_matches_single(a in "\\PC{0,40}", b in "\\PC{0,40}", split_on_space: bool) {
        let codec = VocabularyCodec::default();
        let batch = codec.tokenize_batch(&[a.as_str(), b.as_str()], split_on_space);
        prop_assert_eq!(&batch[0], &codec.tokenize(&a, split_on_space));
        prop_assert_eq!(&batch[1], &codec.tokenize(&b, split_on_space));
    }

    #[test]
    fn out_of_range_ids_rejected(token in prop_oneof![99..i64::MAX, i64::MIN..0]) {
        let codec = VocabularyCodec::default();
        let result = codec.detokenize(&[BOS, token, EOS]);
        let rejected = matches!(
            result,
            Err(SentcharError::InvalidTokenId { token: t, position: 1 }) if t == token
        );
        prop_assert!(rejected);
    }
}

#[test]
fn reference_sentence() {
    let codec = VocabularyCodec::default();
    let sentence = "The quick brown fox.";
    let tokens = codec.tokenize(sentence, false);
    assert_eq!(tokens.len(), sentence.len() + 2);
    assert_eq!(codec.detokenize(&tokens).unwrap(), sentence);
}

#[test]
fn split_on_space_modes() {
    let codec = VocabularyCodec::default();
    let a = codec.token_for_char('A').unwrap();
    let b = codec.token_for_char('B').unwrap();
    let dot = codec.token_for_char('.').unwrap();
    let bang = codec.token_for_char('!').unwrap();
    let space = codec.vocab().space_token();

    assert_eq!(
        codec.tokenize("A. B!", true),
        vec![BOS, a, dot, space, b, bang, EOS]
    );
    assert_eq!(
        codec.tokenize("A. B!", false),
        vec![BOS, a, dot, EOS, space, b, bang, EOS]
    );
}

#[test]
fn tab_becomes_pad() {
    let codec = VocabularyCodec::default();
    let tokens = codec.tokenize("a\tb", false);
    assert_eq!(tokens[2], PAD);
    assert_eq!(codec.detokenize(&tokens).unwrap(), "ab");
}

#[test]
fn vocab_size_is_fixed() {
    assert_eq!(VocabularyCodec::default().vocab_size(), 99);
    assert_eq!(
        sentchar::CodecOptions::default()
            .with_parallel(true)
            .build()
            .vocab_size(),
        99
    );
}

#[test]
fn empty_batch_pads_to_empty() {
    let codec = VocabularyCodec::default();
    let empty: Vec<Vec<TokenId>> = Vec::new();
    assert!(codec.pad_sequences(&empty, PAD).is_empty());
    assert!(codec.pad_batch(&empty).is_empty());
}
