//! Identity records and the name decomposition derived from them.

use crate::error::ComposeError;

/// Step applied to the variation counter per "try another image" request.
///
/// Any nonzero step would do; 9 keeps successive variations far enough
/// apart that hosts can also store intermediate counters for other uses.
pub const VARIATION_STEP: i64 = 9;

/// Immutable-per-call input to avatar synthesis.
///
/// Absent fields keep their empty-string sentinel; only the full name is
/// mandatory. The variation counter lets a caller request a different
/// image for the same person without touching real data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birthday: String,
    pub variation: i64,
}

impl IdentityRecord {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self { full_name: full_name.into(), ..Self::default() }
    }

    /// Bumps the variation counter by `steps` × [`VARIATION_STEP`].
    ///
    /// `modify_variation(1)` followed by `modify_variation(-1)` restores
    /// the original counter, and with it the original fingerprint.
    pub fn modify_variation(&mut self, steps: i64) {
        self.variation += steps * VARIATION_STEP;
    }

    /// The full name must contain at least one non-space character.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.full_name.chars().all(char::is_whitespace) {
            return Err(ComposeError::InvalidInput("full name is blank".into()));
        }
        Ok(())
    }
}

/// Word structure of a full name, computed once per synthesis call.
///
/// Generators read word/letter counts to size grids and polygons; the
/// decomposition is passed by reference so it is never recomputed
/// mid-generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDecomposition {
    words: Vec<String>,
    letter_count: usize,
}

impl NameDecomposition {
    pub fn from_name(full_name: &str) -> Self {
        let mut words: Vec<String> =
            full_name.split_whitespace().map(str::to_owned).collect();
        if words.is_empty() {
            // Degenerate name: treat the whole string as one word.
            words.push(full_name.to_owned());
        }
        let letter_count = full_name.chars().filter(|c| !c.is_whitespace()).count();
        Self { words, letter_count }
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Count of non-space characters across the whole name.
    #[inline]
    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    #[inline]
    pub fn first_word_len(&self) -> usize {
        self.words[0].chars().count()
    }

    #[inline]
    pub fn is_single_word(&self) -> bool {
        self.words.len() == 1
    }

    /// Uppercased first character of the name, used for the glyph badge.
    ///
    /// Falls back to `'?'` for names with no characters at all (callers
    /// validate before reaching this, so the fallback is never composed).
    pub fn initial(&self) -> char {
        self.words[0]
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }
}
