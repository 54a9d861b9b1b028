//! Pinyin transliteration for name search.
//!
//! `api` holds the entry points callers use; `pinyin_core` is re-exported for
//! callers that need the tables or the tokenizer directly. Build with the
//! `trace` feature and call [`init_trace_logging`] for a JSON debug log.

pub mod api;
pub mod trace_init;

pub use api::{
    engine_version, get_accurate_first_letters, get_accurate_full_pinyin, get_first_letters,
    get_full_pinyin, init_trace_logging, load_phrase_config, load_settings, load_table_config,
    EngineError,
};
pub use pinyin_core;
pub use pinyin_core::search::SearchKey;
pub use pinyin_core::{Reading, Token, Transliterator};
