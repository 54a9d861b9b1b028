//! Character → pinyin pronunciation table.
//!
//! The bundled readings come from the `pinyin` crate's data. A custom
//! `[characters]` table parsed from TOML can be layered on top of it; custom
//! entries win over bundled ones. The first reading of a character is its
//! primary reading.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use pinyin::{ToPinyin, ToPinyinMulti};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::unicode::{is_hanzi, is_plain_syllable, normalize_syllable};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<PinyinTable> = OnceLock::new();

#[derive(Deserialize)]
struct TableConfig {
    #[serde(default)]
    characters: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[characters] table is empty")]
    Empty,
    #[error("key is not a single ideograph: {0}")]
    NotIdeograph(String),
    #[error("no readings for key: {0}")]
    NoReadings(String),
    #[error("invalid syllable {syllable:?} for key {key}")]
    InvalidSyllable { key: String, syllable: String },
    #[error("pinyin table already initialized")]
    AlreadyInitialized,
}

#[derive(Debug)]
pub struct PinyinTable {
    /// Normalized (uppercase) readings, primary first.
    custom: HashMap<char, Vec<String>>,
    bundled: bool,
}

impl PinyinTable {
    /// Table backed only by the bundled pronunciation data.
    pub fn bundled() -> Self {
        Self {
            custom: HashMap::new(),
            bundled: true,
        }
    }

    /// Table holding exactly the given entries, without bundled data.
    ///
    /// Readings are normalized; entries whose key is not an ideograph or whose
    /// readings are all invalid are ignored.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut custom = HashMap::new();
        for (c, readings) in entries {
            if !is_hanzi(c) {
                continue;
            }
            let normalized: Vec<String> = readings
                .iter()
                .map(|r| r.as_ref())
                .filter(|r| is_plain_syllable(r))
                .map(normalize_syllable)
                .collect();
            if !normalized.is_empty() {
                custom.insert(c, normalized);
            }
        }
        Self {
            custom,
            bundled: false,
        }
    }

    /// Parse a `[characters]` table and layer it over the bundled data.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableConfigError> {
        let custom = parse_table_toml(toml_str)?;
        Ok(Self {
            custom,
            bundled: true,
        })
    }

    /// Set a custom character table before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        if INSTANCE.get().is_some() {
            return Err(TableConfigError::AlreadyInitialized);
        }
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static PinyinTable {
        INSTANCE.get_or_init(|| {
            let table = match CUSTOM_TOML.get() {
                Some(toml_str) => Self::from_toml(toml_str).unwrap_or_else(|e| {
                    warn!("custom pinyin table rejected, using bundled data: {e}");
                    Self::bundled()
                }),
                None => Self::bundled(),
            };
            debug!(custom_entries = table.custom.len(), "pinyin table initialized");
            table
        })
    }

    /// Whether `c` has at least one reading.
    pub fn contains(&self, c: char) -> bool {
        self.primary_raw(c).is_some()
    }

    /// Primary reading of `c`, uppercase (`张` → `ZHANG`).
    pub fn primary(&self, c: char) -> Option<String> {
        self.primary_raw(c).map(normalize_syllable)
    }

    /// All known readings of `c`, primary first, uppercase and deduplicated.
    /// Readings that differ only in tone collapse into one.
    pub fn readings(&self, c: char) -> Vec<String> {
        let raw: Vec<&str> = match self.custom.get(&c) {
            Some(v) => v.iter().map(String::as_str).collect(),
            None if self.bundled => bundled_readings(c),
            None => Vec::new(),
        };
        let mut out: Vec<String> = Vec::with_capacity(raw.len());
        for r in raw {
            let n = normalize_syllable(r);
            if !n.is_empty() && !out.contains(&n) {
                out.push(n);
            }
        }
        out
    }

    fn primary_raw(&self, c: char) -> Option<&str> {
        if let Some(v) = self.custom.get(&c) {
            return v.first().map(String::as_str);
        }
        if self.bundled {
            return bundled_primary(c);
        }
        None
    }
}

fn bundled_primary(c: char) -> Option<&'static str> {
    c.to_pinyin().map(|p| p.plain())
}

fn bundled_readings(c: char) -> Vec<&'static str> {
    match c.to_pinyin_multi() {
        Some(multi) => (0..multi.count())
            .filter_map(|i| multi.get_opt(i))
            .map(|p| p.plain())
            .collect(),
        None => Vec::new(),
    }
}

/// Parse TOML text into `ideograph → normalized readings`.
pub fn parse_table_toml(toml_str: &str) -> Result<HashMap<char, Vec<String>>, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.characters.is_empty() {
        return Err(TableConfigError::Empty);
    }

    let mut out = HashMap::with_capacity(config.characters.len());
    for (key, readings) in config.characters {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) if is_hanzi(c) => c,
            _ => return Err(TableConfigError::NotIdeograph(key)),
        };
        if readings.is_empty() {
            return Err(TableConfigError::NoReadings(key));
        }
        let mut normalized = Vec::with_capacity(readings.len());
        for syllable in readings {
            if !is_plain_syllable(&syllable) {
                return Err(TableConfigError::InvalidSyllable { key, syllable });
            }
            normalized.push(normalize_syllable(&syllable));
        }
        out.insert(c, normalized);
    }
    Ok(out)
}
