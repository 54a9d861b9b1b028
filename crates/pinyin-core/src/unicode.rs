//! Character-level Unicode classification for Chinese text.

/// CJK Unified Ideographs and every extension block (A through I), plus both
/// Compatibility Ideographs blocks. Characters here without a reading fall
/// under the unknown-ideograph policy.
pub fn is_hanzi(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2A6DF}'
            | '\u{2A700}'..='\u{2EE5F}'
            | '\u{2F800}'..='\u{2FA1F}'
            | '\u{30000}'..='\u{323AF}'
    )
}

/// ASCII letter or digit: the characters that pass through transliteration.
pub fn is_ascii_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Map a full-width ASCII variant (U+FF01..U+FF5E) to its ASCII counterpart.
/// Other characters are returned unchanged.
pub fn fold_fullwidth(c: char) -> char {
    if ('\u{FF01}'..='\u{FF5E}').contains(&c) {
        char::from_u32(c as u32 - 0xFEE0).unwrap_or(c)
    } else {
        c
    }
}

/// Check that `s` is a plausible pinyin syllable without tone marks:
/// ASCII letters, with `ü` or `v` for the umlauted vowel.
pub fn is_plain_syllable(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic() || c == 'ü' || c == 'Ü')
}

/// Normalize a plain syllable to the output form: uppercase ASCII, `ü` as `V`.
/// Characters outside the syllable alphabet are dropped.
pub fn normalize_syllable(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            'ü' | 'Ü' => Some('V'),
            c if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_hanzi('张'));
        assert!(is_hanzi('中'));
        assert!(is_hanzi('㐀'));
        assert!(is_hanzi('\u{20000}'));
        assert!(!is_hanzi('あ'));
        assert!(!is_hanzi('\u{2A6E0}'));
        assert!(!is_hanzi('a'));
        assert!(!is_hanzi('，'));
        assert!(is_ascii_token_char('a'));
        assert!(is_ascii_token_char('Z'));
        assert!(is_ascii_token_char('7'));
        assert!(!is_ascii_token_char('é'));
        assert!(!is_ascii_token_char('!'));
    }

    #[test]
    fn test_later_extension_blocks() {
        // Extensions C, E, G and the compatibility supplement
        assert!(is_hanzi('\u{2A700}'));
        assert!(is_hanzi('\u{2B820}'));
        assert!(is_hanzi('\u{30000}'));
        assert!(is_hanzi('\u{2F800}'));
        assert!(is_hanzi('\u{323AF}'));
        assert!(!is_hanzi('\u{323B0}'));
        assert!(!is_hanzi('\u{2FA20}'));
    }

    #[test]
    fn test_fold_fullwidth() {
        assert_eq!(fold_fullwidth('１'), '1');
        assert_eq!(fold_fullwidth('Ａ'), 'A');
        assert_eq!(fold_fullwidth('ｚ'), 'z');
        assert_eq!(fold_fullwidth('！'), '!');
        assert_eq!(fold_fullwidth('张'), '张');
        // Ideographic space is outside the folded block
        assert_eq!(fold_fullwidth('\u{3000}'), '\u{3000}');
    }

    #[test]
    fn test_syllables() {
        assert!(is_plain_syllable("zhang"));
        assert!(is_plain_syllable("lü"));
        assert!(is_plain_syllable("lv"));
        assert!(!is_plain_syllable(""));
        assert!(!is_plain_syllable("zhāng"));
        assert!(!is_plain_syllable("zhang1"));
        assert_eq!(normalize_syllable("zhang"), "ZHANG");
        assert_eq!(normalize_syllable("lü"), "LV");
        assert_eq!(normalize_syllable("Lv"), "LV");
    }
}
