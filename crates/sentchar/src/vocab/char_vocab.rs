//! # Fixed Character Vocabulary

use std::sync::{
    Arc,
    LazyLock,
};

use strum::IntoEnumIterator;

use crate::{
    types::{
        SCHashMap,
        TokenId,
        hash_map_with_capacity,
    },
    vocab::{
        SpecialToken,
        Symbol,
    },
};

/// The first printable ASCII code point (`' '`).
pub const FIRST_PRINTABLE: u8 = 32;

/// The last printable ASCII code point (`'~'`).
pub const LAST_PRINTABLE: u8 = 126;

/// The number of printable ASCII characters.
pub const PRINTABLE_COUNT: usize = (LAST_PRINTABLE - FIRST_PRINTABLE + 1) as usize;

/// The fixed vocabulary size: specials, printable characters, space surrogate.
pub const VOCAB_SIZE: usize = SpecialToken::COUNT + PRINTABLE_COUNT + 1;

/// The token id of the space surrogate.
pub const SPACE_TOKEN: TokenId = (VOCAB_SIZE - 1) as TokenId;

static SHARED_VOCAB: LazyLock<Arc<CharVocab>> = LazyLock::new(|| Arc::new(CharVocab::build()));

/// ``0..99`` Symbol/Token Bijection Table
///
/// Ids are dense and assigned in a fixed order:
/// * `PAD`, `EOS`, `BOS` (``0..3``);
/// * printable ASCII ``' '..='~'`` in ascending order (``3..98``);
/// * the space surrogate `_` (``98``).
///
/// The table is immutable once built; [`CharVocab::shared`] hands out the
/// process-wide instance.
#[derive(Clone, PartialEq)]
pub struct CharVocab {
    /// Table mapping from token id (position) to symbol.
    symbols: Vec<Symbol>,

    /// Hash map from symbol to token id.
    symbol_tokens: SCHashMap<Symbol, TokenId>,

    /// Table mapping from ASCII ordinal (position) to token.
    ascii_tokens: [Option<TokenId>; 128],
}

impl core::fmt::Debug for CharVocab {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("CharVocab")
            .field("len", &self.len())
            .field("space_token", &SPACE_TOKEN)
            .finish()
    }
}

impl Default for CharVocab {
    fn default() -> Self {
        Self::build()
    }
}

impl CharVocab {
    /// Get the shared, process-wide vocabulary.
    pub fn shared() -> Arc<CharVocab> {
        SHARED_VOCAB.clone()
    }

    /// Build the vocabulary table.
    ///
    /// Prefer [`CharVocab::shared`]; the table never changes.
    pub fn build() -> Self {
        let symbols: Vec<Symbol> = SpecialToken::iter()
            .map(Symbol::Special)
            .chain((FIRST_PRINTABLE..=LAST_PRINTABLE).map(|b| Symbol::Char(b as char)))
            .chain(core::iter::once(Symbol::Space))
            .collect();

        let mut symbol_tokens = hash_map_with_capacity(symbols.len());
        let mut ascii_tokens = [None; 128];
        for (idx, &symbol) in symbols.iter().enumerate() {
            let token = idx as TokenId;
            symbol_tokens.insert(symbol, token);
            if let Symbol::Char(c) = symbol {
                ascii_tokens[c as usize] = Some(token);
            }
        }

        debug_assert_eq!(symbols.len(), VOCAB_SIZE);
        debug_assert_eq!(symbol_tokens.len(), VOCAB_SIZE);

        log::debug!("built character vocabulary with {} entries", symbols.len());

        Self {
            symbols,
            symbol_tokens,
            ascii_tokens,
        }
    }

    /// The number of entries; always [`VOCAB_SIZE`].
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; the vocabulary is fixed.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The token id for a special.
    #[inline(always)]
    pub fn special_token(
        &self,
        special: SpecialToken,
    ) -> TokenId {
        special.token()
    }

    /// The token id of the space surrogate.
    #[inline(always)]
    pub fn space_token(&self) -> TokenId {
        SPACE_TOKEN
    }

    /// Look up the token for a printable character.
    ///
    /// Space is a printable character here and resolves to its own
    /// printable entry; encoders map spaces to [`CharVocab::space_token`].
    ///
    /// ## Returns
    /// `None` for anything outside ``' '..='~'``.
    #[inline(always)]
    pub fn token_for_char(
        &self,
        c: char,
    ) -> Option<TokenId> {
        if c.is_ascii() {
            self.ascii_tokens[c as usize]
        } else {
            None
        }
    }

    /// Look up the token for a symbol.
    pub fn token_for_symbol(
        &self,
        symbol: &Symbol,
    ) -> Option<TokenId> {
        self.symbol_tokens.get(symbol).copied()
    }

    /// Look up the symbol for a token.
    ///
    /// ## Returns
    /// `None` for negative or out-of-range ids.
    #[inline(always)]
    pub fn symbol_for_token(
        &self,
        token: TokenId,
    ) -> Option<Symbol> {
        usize::try_from(token)
            .ok()
            .and_then(|idx| self.symbols.get(idx))
            .copied()
    }

    /// Is this token one of the specials?
    #[inline(always)]
    pub fn is_special_token(
        &self,
        token: TokenId,
    ) -> bool {
        self.symbol_for_token(token)
            .is_some_and(|symbol| symbol.is_special())
    }

    /// Iterate `(token, symbol)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, Symbol)> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(idx, &symbol)| (idx as TokenId, symbol))
    }
}
