//! Entry points for callers holding possibly-absent text, plus loading of
//! custom configuration files.
//!
//! Absent or empty input always yields an empty string; no transliteration
//! call can fail.

use std::fs;
use std::path::Path;

use pinyin_core::phrases::PhraseTable;
use pinyin_core::settings;
use pinyin_core::table::PinyinTable;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ---------------------------------------------------------------------------
// Transliteration
// ---------------------------------------------------------------------------

/// `张三` → `ZS`; `None` → empty.
pub fn get_first_letters(text: Option<&str>) -> String {
    text.map(pinyin_core::first_letters).unwrap_or_default()
}

/// Like [`get_first_letters`], resolving polyphonic characters from their
/// surrounding word or surname position.
pub fn get_accurate_first_letters(text: Option<&str>) -> String {
    text.map(pinyin_core::accurate_first_letters)
        .unwrap_or_default()
}

/// `张三` → `ZHANG SAN`; `None` → empty.
pub fn get_full_pinyin(text: Option<&str>) -> String {
    text.map(pinyin_core::full_pinyin).unwrap_or_default()
}

pub fn get_accurate_full_pinyin(text: Option<&str>) -> String {
    text.map(pinyin_core::accurate_full_pinyin)
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Start the JSON trace log in `log_dir` (needs the `trace` feature).
pub fn init_trace_logging(log_dir: &Path) {
    crate::trace_init::init_tracing(log_dir);
    debug!(log_dir = %log_dir.display(), engine_version = %engine_version(), "trace logging ready");
}

// ---------------------------------------------------------------------------
// Configuration (must run before the first transliteration call)
// ---------------------------------------------------------------------------

fn read_config(path: &Path) -> Result<String, EngineError> {
    fs::read_to_string(path).map_err(|e| EngineError::Io {
        msg: format!("{}: {e}", path.display()),
    })
}

/// Layer a `[characters]` table over the bundled pronunciation data.
pub fn load_table_config(path: &Path) -> Result<(), EngineError> {
    let content = read_config(path)?;
    PinyinTable::init_custom(content).map_err(|e| EngineError::InvalidData { msg: e.to_string() })?;
    debug!(path = %path.display(), "custom pinyin table loaded");
    Ok(())
}

/// Replace the default surname and phrase overrides.
pub fn load_phrase_config(path: &Path) -> Result<(), EngineError> {
    let content = read_config(path)?;
    PhraseTable::init_custom(content).map_err(|e| EngineError::InvalidData { msg: e.to_string() })?;
    debug!(path = %path.display(), "custom phrase table loaded");
    Ok(())
}

pub fn load_settings(path: &Path) -> Result<(), EngineError> {
    let content = read_config(path)?;
    settings::init_custom(content).map_err(|e| EngineError::InvalidData { msg: e.to_string() })?;
    debug!(path = %path.display(), "custom settings loaded");
    Ok(())
}
