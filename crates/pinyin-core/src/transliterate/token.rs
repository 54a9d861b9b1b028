use std::fmt;

/// One unit of transliterated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Reading of one ideograph, uppercase (`ZHANG`).
    Syllable(String),
    /// One ASCII letter or digit, as written.
    Ascii(char),
    /// Ideograph with no known reading, under the placeholder policy.
    Placeholder(char),
}

impl Token {
    /// Append this token's contribution to a first-letters code.
    pub fn push_initials(&self, out: &mut String) {
        match self {
            Token::Syllable(s) => {
                if let Some(c) = s.chars().next() {
                    out.push(c);
                }
            }
            Token::Ascii(c) => out.push(c.to_ascii_uppercase()),
            Token::Placeholder(c) => out.push(*c),
        }
    }

    /// Append the full form of this token.
    pub fn push_full(&self, out: &mut String) {
        match self {
            Token::Syllable(s) => out.push_str(s),
            Token::Ascii(c) | Token::Placeholder(c) => out.push(*c),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Syllable(s) => f.write_str(s),
            Token::Ascii(c) | Token::Placeholder(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials() {
        let mut out = String::new();
        Token::Syllable("ZHANG".into()).push_initials(&mut out);
        for c in "san9".chars() {
            Token::Ascii(c).push_initials(&mut out);
        }
        Token::Placeholder('?').push_initials(&mut out);
        assert_eq!(out, "ZSAN9?");
    }

    #[test]
    fn full_and_display_agree() {
        for token in [
            Token::Syllable("ZHANG".into()),
            Token::Ascii('a'),
            Token::Ascii('7'),
            Token::Placeholder('?'),
        ] {
            let mut out = String::new();
            token.push_full(&mut out);
            assert_eq!(out, token.to_string());
        }
    }
}
