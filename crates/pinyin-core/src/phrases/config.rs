use std::collections::{BTreeMap, HashMap};
use std::io;

use serde::Deserialize;

use crate::unicode::{is_hanzi, is_plain_syllable, normalize_syllable};

/// Longest surname the `[surnames]` section accepts (compound surnames).
pub const MAX_SURNAME_LEN: usize = 2;

#[derive(Deserialize)]
struct PhraseConfig {
    #[serde(default)]
    surnames: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    phrases: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum PhraseConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("phrase must have at least two ideographs: {0}")]
    PhraseTooShort(String),
    #[error("surname must have one or two ideographs: {0}")]
    SurnameLength(String),
    #[error("key contains a non-ideograph: {0}")]
    NotIdeograph(String),
    #[error("{key}: expected {expected} syllables, found {found}")]
    LengthMismatch {
        key: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid syllable {syllable:?} for key {key}")]
    InvalidSyllable { key: String, syllable: String },
    #[error("phrase table already initialized")]
    AlreadyInitialized,
}

/// Parsed and normalized phrase overrides.
#[derive(Debug)]
pub struct ParsedPhrases {
    pub surnames: HashMap<String, Vec<String>>,
    pub phrases: HashMap<String, Vec<String>>,
}

/// Parse TOML text into normalized surname and phrase maps.
pub fn parse_phrases_toml(toml_str: &str) -> Result<ParsedPhrases, PhraseConfigError> {
    let config: PhraseConfig =
        toml::from_str(toml_str).map_err(|e| PhraseConfigError::Parse(e.to_string()))?;

    let mut surnames = HashMap::with_capacity(config.surnames.len());
    for (key, syllables) in config.surnames {
        let n = key.chars().count();
        if n == 0 || n > MAX_SURNAME_LEN {
            return Err(PhraseConfigError::SurnameLength(key));
        }
        let normalized = normalize_entry(&key, syllables)?;
        surnames.insert(key, normalized);
    }

    let mut phrases = HashMap::with_capacity(config.phrases.len());
    for (key, syllables) in config.phrases {
        if key.chars().count() < 2 {
            return Err(PhraseConfigError::PhraseTooShort(key));
        }
        let normalized = normalize_entry(&key, syllables)?;
        phrases.insert(key, normalized);
    }

    Ok(ParsedPhrases { surnames, phrases })
}

fn normalize_entry(key: &str, syllables: Vec<String>) -> Result<Vec<String>, PhraseConfigError> {
    if !key.chars().all(is_hanzi) {
        return Err(PhraseConfigError::NotIdeograph(key.to_string()));
    }
    let expected = key.chars().count();
    if syllables.len() != expected {
        return Err(PhraseConfigError::LengthMismatch {
            key: key.to_string(),
            expected,
            found: syllables.len(),
        });
    }
    syllables
        .into_iter()
        .map(|syllable| {
            if is_plain_syllable(&syllable) {
                Ok(normalize_syllable(&syllable))
            } else {
                Err(PhraseConfigError::InvalidSyllable {
                    key: key.to_string(),
                    syllable,
                })
            }
        })
        .collect()
}
