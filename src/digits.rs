use std::fmt;
use std::str::FromStr;

/// Why a piece of text is not a digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    /// The text was empty
    Empty,
    /// A character outside `0..=9`, at the given 1-based column
    NonDigit { column: usize, found: char },
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitError::Empty => write!(f, "empty line where a digit string was expected"),
            DigitError::NonDigit { column, found } => {
                write!(f, "column {}: {:?} is not a decimal digit", column, found)
            }
        }
    }
}

impl std::error::Error for DigitError {}

/// A non-empty string made only of the ASCII characters `0` through `9`.
///
/// Leading zeros are kept: `"012"` is a three-digit string whose first prefix has the value 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString {
    text: String,
}

impl DigitString {
    /// Validates `text` and wraps it.
    pub fn new(text: impl Into<String>) -> Result<Self, DigitError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DigitError::Empty);
        }
        if let Some((index, found)) = text.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            let column = text[..index].chars().count() + 1;
            return Err(DigitError::NonDigit { column, found });
        }
        Ok(Self { text })
    }

    /// The number of digits. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept so `len` has its usual companion.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The digit values, most significant first.
    #[inline]
    pub fn digits(&self) -> impl ExactSizeIterator<Item = u8> + Clone + '_ {
        self.text.bytes().map(|b| b - b'0')
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl FromStr for DigitString {
    type Err = DigitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_accepts_digits() {
        let code = DigitString::new("0381").unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.digits().collect::<Vec<_>>(), vec![0, 3, 8, 1]);
        assert_eq!(code.to_string(), "0381");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(DigitString::new(""), Err(DigitError::Empty));
    }

    #[test]
    fn test_reports_first_bad_column() {
        assert_eq!(
            "12a4".parse::<DigitString>(),
            Err(DigitError::NonDigit {
                column: 3,
                found: 'a'
            })
        );
        assert_eq!(
            "-1".parse::<DigitString>(),
            Err(DigitError::NonDigit {
                column: 1,
                found: '-'
            })
        );
    }

    #[test]
    fn test_rejects_unicode_digits() {
        // Arabic-Indic digit three
        let err = DigitString::new("1\u{0663}").unwrap_err();
        assert_eq!(
            err,
            DigitError::NonDigit {
                column: 2,
                found: '\u{0663}'
            }
        );
    }
}
