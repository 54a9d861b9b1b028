pub mod phrases;
pub mod search;
pub mod settings;
pub mod table;
pub mod transliterate;
pub mod unicode;

pub use transliterate::{
    accurate_first_letters, accurate_full_pinyin, first_letters, full_pinyin, Reading, Token,
    Transliterator,
};
