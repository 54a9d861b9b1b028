//! Chinese → pinyin transliteration.
//!
//! Input is scanned one code point at a time. Ideographs become syllables,
//! each ASCII letter or digit passes through as its own token, everything
//! else is dropped. In
//! contextual mode each run of ideographs is first matched against the
//! phrase table so polyphonic characters get the reading their word or
//! surname calls for.

mod token;
#[cfg(test)]
mod tests;

pub use token::Token;

use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::phrases::{PhraseTable, MAX_NAME_LEN, MIN_NAME_LEN};
use crate::settings::{settings, Settings, UnknownPolicy};
use crate::table::PinyinTable;
use crate::unicode::{fold_fullwidth, is_ascii_token_char, is_hanzi};

/// Which reading an ideograph gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Always the table's primary reading.
    Primary,
    /// Phrase and surname overrides first, primary reading otherwise.
    Contextual,
}

/// What to emit for an ideograph the table has no reading for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownIdeograph {
    #[default]
    Skip,
    Placeholder(char),
}

#[derive(Debug, Clone)]
pub struct Options {
    /// Joins tokens in full pinyin output.
    pub separator: String,
    pub fold_fullwidth: bool,
    pub unknown: UnknownIdeograph,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            fold_fullwidth: true,
            unknown: UnknownIdeograph::Skip,
        }
    }
}

impl From<&Settings> for Options {
    fn from(s: &Settings) -> Self {
        let unknown = match s.unknown_ideograph.policy {
            UnknownPolicy::Skip => UnknownIdeograph::Skip,
            UnknownPolicy::Placeholder => {
                UnknownIdeograph::Placeholder(s.unknown_ideograph.placeholder_char())
            }
        };
        Self {
            separator: s.output.separator.clone(),
            fold_fullwidth: s.output.fold_fullwidth,
            unknown,
        }
    }
}

pub struct Transliterator<'a> {
    table: &'a PinyinTable,
    phrases: &'a PhraseTable,
    options: Options,
}

impl<'a> Transliterator<'a> {
    pub fn new(table: &'a PinyinTable, phrases: &'a PhraseTable, options: Options) -> Self {
        Self {
            table,
            phrases,
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Split `text` into output tokens, preserving input order.
    pub fn tokenize(&self, text: &str, reading: Reading) -> Vec<Token> {
        let _span = debug_span!("tokenize", len = text.len(), ?reading).entered();
        let chars: Vec<char> = if self.options.fold_fullwidth {
            text.chars().map(fold_fullwidth).collect()
        } else {
            text.chars().collect()
        };

        let mut tokens = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if !is_hanzi(c) {
                if is_ascii_token_char(c) {
                    tokens.push(Token::Ascii(c));
                }
                i += 1;
                continue;
            }
            let run_end = chars[i..]
                .iter()
                .position(|&c| !is_hanzi(c))
                .map_or(chars.len(), |p| i + p);
            self.tokenize_run(&chars[i..run_end], reading, &mut tokens);
            i = run_end;
        }

        debug!(token_count = tokens.len());
        tokens
    }

    fn tokenize_run(&self, run: &[char], reading: Reading, tokens: &mut Vec<Token>) {
        // Surnames only start runs shaped like a personal name.
        let name_shaped = (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&run.len());
        let mut i = 0;
        while i < run.len() {
            if reading == Reading::Contextual {
                if let Some(m) = self.phrases.longest_match(&run[i..], i == 0 && name_shaped) {
                    tokens.extend(m.syllables.iter().cloned().map(Token::Syllable));
                    i += m.len;
                    continue;
                }
            }
            match self.table.primary(run[i]) {
                Some(syllable) => tokens.push(Token::Syllable(syllable)),
                None => {
                    if let UnknownIdeograph::Placeholder(p) = self.options.unknown {
                        tokens.push(Token::Placeholder(p));
                    }
                }
            }
            i += 1;
        }
    }

    /// First letter of every ideograph's reading plus uppercased ASCII,
    /// without separators (`张sanA` → `ZSANA`).
    pub fn first_letters(&self, text: &str, reading: Reading) -> String {
        let mut out = String::with_capacity(text.len());
        for token in self.tokenize(text, reading) {
            token.push_initials(&mut out);
        }
        out
    }

    /// Full readings joined by the separator (`张三` → `ZHANG SAN`).
    pub fn full_pinyin(&self, text: &str, reading: Reading) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        for (idx, token) in self.tokenize(text, reading).iter().enumerate() {
            if idx > 0 {
                out.push_str(&self.options.separator);
            }
            token.push_full(&mut out);
        }
        out
    }
}

impl Transliterator<'static> {
    /// Transliterator over the global tables and settings.
    pub fn global() -> &'static Transliterator<'static> {
        static INSTANCE: OnceLock<Transliterator<'static>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Transliterator::new(
                PinyinTable::global(),
                PhraseTable::global(),
                Options::from(settings()),
            )
        })
    }
}

/// First letters using primary readings (`张三` → `ZS`).
pub fn first_letters(text: &str) -> String {
    Transliterator::global().first_letters(text, Reading::Primary)
}

/// First letters with phrase and surname overrides (`单雄信` → `SXX`).
pub fn accurate_first_letters(text: &str) -> String {
    Transliterator::global().first_letters(text, Reading::Contextual)
}

/// Full pinyin using primary readings (`张三` → `ZHANG SAN`).
pub fn full_pinyin(text: &str) -> String {
    Transliterator::global().full_pinyin(text, Reading::Primary)
}

/// Full pinyin with phrase and surname overrides (`重庆` → `CHONG QING`).
pub fn accurate_full_pinyin(text: &str) -> String {
    Transliterator::global().full_pinyin(text, Reading::Contextual)
}
