//! Search keys for finding contacts by pinyin.
//!
//! A contact's name is indexed once as its initials (`ZS`) and full pinyin
//! (`ZHANG SAN`). A keyword matches when, after transliteration and case
//! folding, it is a substring of either form. This lets `zs`, `zhang`,
//! `zhangsan` and `张` all find `张三`.

use serde::{Deserialize, Serialize};

use crate::transliterate::{Reading, Transliterator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchKey {
    pub initials: String,
    pub full: String,
}

impl SearchKey {
    pub fn new(name: &str) -> Self {
        Self::with(Transliterator::global(), name)
    }

    pub fn with(translit: &Transliterator<'_>, name: &str) -> Self {
        Self {
            initials: translit.first_letters(name, Reading::Contextual),
            full: translit.full_pinyin(name, Reading::Contextual),
        }
    }

    pub fn matches(&self, keyword: &str) -> bool {
        self.matches_with(Transliterator::global(), keyword)
    }

    /// An empty keyword (or one with nothing searchable in it) matches.
    pub fn matches_with(&self, translit: &Transliterator<'_>, keyword: &str) -> bool {
        let needle = compact(&translit.full_pinyin(keyword, Reading::Contextual));
        if needle.is_empty() {
            return true;
        }
        compact(&self.initials).contains(&needle) || compact(&self.full).contains(&needle)
    }
}

/// Lowercase ASCII letters and digits only.
fn compact(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
