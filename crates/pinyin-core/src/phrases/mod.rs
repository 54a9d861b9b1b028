//! Context-dependent readings for polyphonic characters.
//!
//! A small override table consulted before the pronunciation table when
//! transliterating in contextual mode. Surnames only match where a
//! name-shaped run of ideographs begins; phrases match anywhere inside a run.

mod config;

pub use config::{parse_phrases_toml, PhraseConfigError, MAX_SURNAME_LEN};

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, warn};

/// Shortest and longest ideograph run read as a personal name, from a lone
/// surname plus one given-name character up to a compound surname plus two.
pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 4;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_phrases.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<PhraseTable> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Surname,
    Phrase,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PhraseMatch<'a> {
    /// Number of ideographs covered.
    pub len: usize,
    /// One uppercase syllable per covered ideograph.
    pub syllables: &'a [String],
    pub kind: MatchKind,
}

#[derive(Debug, Default)]
pub struct PhraseTable {
    surnames: HashMap<String, Vec<String>>,
    phrases: HashMap<String, Vec<String>>,
    max_surname_len: usize,
    max_phrase_len: usize,
}

impl PhraseTable {
    /// Table with no overrides; contextual mode then equals primary mode.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, PhraseConfigError> {
        let parsed = parse_phrases_toml(toml_str)?;
        let max_surname_len = parsed
            .surnames
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);
        let max_phrase_len = parsed
            .phrases
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);
        Ok(Self {
            surnames: parsed.surnames,
            phrases: parsed.phrases,
            max_surname_len,
            max_phrase_len,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PhraseConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The embedded default overrides.
    pub fn builtin() -> Self {
        Self::from_toml(DEFAULT_TOML).unwrap_or_else(|e| {
            warn!("embedded phrase table rejected: {e}");
            Self::empty()
        })
    }

    /// Set a custom phrase table before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), PhraseConfigError> {
        if INSTANCE.get().is_some() {
            return Err(PhraseConfigError::AlreadyInitialized);
        }
        // Validate eagerly
        parse_phrases_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| PhraseConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PhraseTable {
        INSTANCE.get_or_init(|| {
            let table = match CUSTOM_TOML.get() {
                Some(toml_str) => Self::from_toml(toml_str).unwrap_or_else(|e| {
                    warn!("custom phrase table rejected, using defaults: {e}");
                    Self::builtin()
                }),
                None => Self::builtin(),
            };
            debug!(
                surnames = table.surnames.len(),
                phrases = table.phrases.len(),
                "phrase table initialized"
            );
            table
        })
    }

    /// Returns (surname_count, phrase_count).
    pub fn stats(&self) -> (usize, usize) {
        (self.surnames.len(), self.phrases.len())
    }

    /// Find the longest override starting at `chars[0]`.
    ///
    /// `chars` should hold only the remainder of the current ideograph run.
    /// Surnames are considered only when `at_run_start` is set; a surname
    /// beats a phrase of the same length.
    pub fn longest_match(&self, chars: &[char], at_run_start: bool) -> Option<PhraseMatch<'_>> {
        let mut best = None;
        if at_run_start {
            best = find_longest(
                &self.surnames,
                chars,
                1,
                self.max_surname_len,
                MatchKind::Surname,
            );
        }
        let floor = best.as_ref().map_or(2, |m: &PhraseMatch<'_>| m.len + 1);
        find_longest(
            &self.phrases,
            chars,
            floor,
            self.max_phrase_len,
            MatchKind::Phrase,
        )
        .or(best)
    }
}

fn find_longest<'a>(
    map: &'a HashMap<String, Vec<String>>,
    chars: &[char],
    min_len: usize,
    max_len: usize,
    kind: MatchKind,
) -> Option<PhraseMatch<'a>> {
    let upper = max_len.min(chars.len());
    if min_len == 0 || min_len > upper {
        return None;
    }
    let mut key = String::new();
    for len in (min_len..=upper).rev() {
        key.clear();
        key.extend(&chars[..len]);
        if let Some(syllables) = map.get(key.as_str()) {
            return Some(PhraseMatch {
                len,
                syllables,
                kind,
            });
        }
    }
    None
}
