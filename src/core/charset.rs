use core::{
    fmt::Display,
    ops::{BitOr, BitOrAssign},
};

use crate::error::RandError;

const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGIT_CHARS: &str = "0123456789";

/// A set of character ranges, combinable with `|`.
///
/// ```
/// use cloudproof_rand::Charset;
///
/// let charset = Charset::UPPERCASE | Charset::DIGIT;
/// assert!(charset.contains(Charset::DIGIT));
/// assert!(!charset.contains(Charset::LOWERCASE));
/// assert_eq!(Charset::UPPERCASE | Charset::LOWERCASE | Charset::DIGIT, Charset::ALL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Charset(u8);

impl Charset {
    pub const EMPTY: Self = Self(0);
    pub const UPPERCASE: Self = Self(1);
    pub const LOWERCASE: Self = Self(1 << 1);
    pub const DIGIT: Self = Self(1 << 2);
    pub const ALL: Self = Self(Self::UPPERCASE.0 | Self::LOWERCASE.0 | Self::DIGIT.0);

    /// Builds a charset from raw bits, silently dropping unknown ones.
    #[must_use]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Charset {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Charset {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        let names = [
            (Self::UPPERCASE, "UPPERCASE"),
            (Self::LOWERCASE, "LOWERCASE"),
            (Self::DIGIT, "DIGIT"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// The ordered characters a [`Charset`] selects, never empty.
///
/// Ranges are always concatenated as uppercase, then lowercase, then
/// digits, whatever the order the flags were combined in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: String,
}

impl TryFrom<Charset> for Alphabet {
    type Error = RandError;

    fn try_from(charset: Charset) -> Result<Self, Self::Error> {
        let mut chars = String::with_capacity(62);
        if charset.contains(Charset::UPPERCASE) {
            chars.push_str(UPPERCASE_CHARS);
        }
        if charset.contains(Charset::LOWERCASE) {
            chars.push_str(LOWERCASE_CHARS);
        }
        if charset.contains(Charset::DIGIT) {
            chars.push_str(DIGIT_CHARS);
        }
        if chars.is_empty() {
            return Err(RandError::EmptyCharset { charset });
        }
        Ok(Self { chars })
    }
}

impl Alphabet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`, an empty charset cannot build an alphabet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.chars
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(c)
    }

    /// Maps a random byte onto the alphabet with `byte % len`.
    ///
    /// When `len` does not divide 256 the first `256 % len` characters are
    /// slightly more likely.
    #[must_use]
    pub fn char_at(&self, byte: u8) -> char {
        // every character is ASCII, indexing bytes is indexing chars
        let chars = self.chars.as_bytes();
        char::from(chars[usize::from(byte) % chars.len()])
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order() -> Result<(), RandError> {
        assert_eq!(
            Alphabet::try_from(Charset::ALL)?.as_str(),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
        );
        assert_eq!(
            Alphabet::try_from(Charset::DIGIT | Charset::UPPERCASE)?.as_str(),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
        );
        let lower = Alphabet::try_from(Charset::LOWERCASE)?;
        assert_eq!(lower.len(), 26);
        assert!(!lower.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_charset_has_no_alphabet() {
        for bits in [0_u8, 0b1000, 0xf8] {
            let charset = Charset::from_bits_truncate(bits);
            assert!(matches!(
                Alphabet::try_from(charset),
                Err(RandError::EmptyCharset { charset: c }) if c == Charset::EMPTY
            ));
        }
    }

    #[test]
    fn test_charset_bits() {
        assert_eq!(Charset::UPPERCASE.bits(), 1);
        assert_eq!(Charset::LOWERCASE.bits(), 2);
        assert_eq!(Charset::DIGIT.bits(), 4);
        assert_eq!(Charset::ALL.bits(), 7);
        assert_eq!(Charset::from_bits_truncate(0xf8), Charset::EMPTY);
        assert_eq!(Charset::from_bits_truncate(0xff), Charset::ALL);

        let mut charset = Charset::EMPTY;
        charset |= Charset::LOWERCASE;
        charset |= Charset::DIGIT;
        assert_eq!(charset.bits(), 6);
        assert_eq!(charset.to_string(), "LOWERCASE | DIGIT");
        assert_eq!(Charset::ALL.to_string(), "UPPERCASE | LOWERCASE | DIGIT");
    }

    #[test]
    fn test_char_at_covers_every_byte() -> Result<(), RandError> {
        let alphabet = Alphabet::try_from(Charset::ALL)?;
        assert_eq!(alphabet.char_at(0), 'A');
        assert_eq!(alphabet.char_at(61), '9');
        assert_eq!(alphabet.char_at(62), 'A');
        // 248..=255 land on the first 8 characters
        assert_eq!(alphabet.char_at(255), 'H');

        let digits = Alphabet::try_from(Charset::DIGIT)?;
        assert_eq!(digits.char_at(255), '5');
        assert!((0..=u8::MAX).all(|b| digits.contains(digits.char_at(b))));
        Ok(())
    }
}
