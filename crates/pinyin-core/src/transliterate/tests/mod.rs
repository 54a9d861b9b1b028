
use super::{Options, Transliterator};
use crate::phrases::PhraseTable;
use crate::table::PinyinTable;

/// Small deterministic table: `重` reads ZHONG first, CHONG second.
pub(super) fn make_test_table() -> PinyinTable {
    PinyinTable::from_entries([
        ('张', vec!["zhang"]),
        ('三', vec!["san"]),
        ('重', vec!["zhong", "chong"]),
        ('庆', vec!["qing"]),
        ('单', vec!["dan", "shan", "chan"]),
        ('雄', vec!["xiong"]),
        ('信', vec!["xin"]),
        ('位', vec!["wei"]),
        ('吕', vec!["lü"]),
    ])
}

pub(super) fn make_test_phrases() -> PhraseTable {
    PhraseTable::from_toml(
        r#"
[surnames]
"单" = ["shan"]

[phrases]
"重庆" = ["chong", "qing"]
"单位" = ["dan", "wei"]
"#,
    )
    .unwrap()
}

pub(super) fn with_options<'a>(
    table: &'a PinyinTable,
    phrases: &'a PhraseTable,
    options: Options,
) -> Transliterator<'a> {
    Transliterator::new(table, phrases, options)
}
