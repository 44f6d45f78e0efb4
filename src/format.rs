//! Strict validation of the problem's input format.
//!
//! [`parse_record`](crate::parse_record) is lenient about whitespace so that the checker accepts
//! hand-typed input. Test data shipped with the problem has to meet a tighter format, and
//! [`FormatValidator`] enforces it byte for byte.

use regex::Regex;
use tracing::debug;

use crate::PolydivError;

/// Limits for a well-formed input file.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FormatRules {
    pub min_count: usize,
    pub max_count: usize,
    /// Longest allowed passcode
    pub max_digits: usize,
    pub allow_leading_zero: bool,
}

impl Default for FormatRules {
    fn default() -> Self {
        Self {
            min_count: 1,
            max_count: 5000,
            max_digits: 100,
            allow_leading_zero: false,
        }
    }
}

/// Validates input files against a set of [`FormatRules`].
///
/// ~~~
/// use polydiv::format::{FormatRules, FormatValidator};
///
/// let validator = FormatValidator::new(FormatRules::default()).unwrap();
/// assert_eq!(validator.validate("2\n381654729\n6\n").unwrap(), 2);
/// assert!(validator.validate("2\n381654729\n6").is_err()); // missing final newline
/// ~~~
#[derive(Debug)]
pub struct FormatValidator {
    rules: FormatRules,
    count_line: Regex,
    code_line: Regex,
}

impl FormatValidator {
    pub fn new(rules: FormatRules) -> Result<Self, PolydivError> {
        if rules.max_digits == 0 {
            return Err(PolydivError::Format {
                line: 0,
                reason: "max_digits must be at least 1".to_string(),
            });
        }
        let code_pattern = if rules.allow_leading_zero {
            format!(r"^[0-9]{{1,{}}}\n$", rules.max_digits)
        } else {
            format!(r"^[1-9][0-9]{{0,{}}}\n$", rules.max_digits - 1)
        };
        Ok(Self {
            rules,
            count_line: Regex::new(r"^(0|[1-9][0-9]*)\n$")?,
            code_line: Regex::new(&code_pattern)?,
        })
    }

    pub fn rules(&self) -> &FormatRules {
        &self.rules
    }

    /// Checks `text` and returns the declared count.
    ///
    /// Every line, including the last, must end with `\n`, and nothing may follow the last
    /// passcode.
    pub fn validate(&self, text: &str) -> Result<usize, PolydivError> {
        let mut lines = text.split_inclusive('\n');

        let count_line = lines.next().unwrap_or("");
        if !self.count_line.is_match(count_line) {
            return Err(violation(
                1,
                format!(
                    "count must be an integer without leading zeros, got {:?}",
                    count_line
                ),
            ));
        }
        let count: usize = count_line
            .trim_end()
            .parse()
            .map_err(|_| violation(1, format!("count {:?} is out of range", count_line)))?;
        if count < self.rules.min_count || count > self.rules.max_count {
            return Err(violation(
                1,
                format!(
                    "count must be between {} and {}, got {}",
                    self.rules.min_count, self.rules.max_count, count
                ),
            ));
        }

        for index in 0..count {
            let line_number = index + 2;
            let line = lines.next().ok_or_else(|| {
                violation(
                    line_number,
                    format!("expected {} passcodes, found {}", count, index),
                )
            })?;
            if !self.code_line.is_match(line) {
                return Err(violation(
                    line_number,
                    format!(
                        "passcode must be 1 to {} digits{}, got {:?}",
                        self.rules.max_digits,
                        if self.rules.allow_leading_zero {
                            ""
                        } else {
                            " without a leading zero"
                        },
                        line
                    ),
                ));
            }
        }

        if lines.next().is_some() {
            return Err(violation(
                count + 2,
                "input continues after the last passcode".to_string(),
            ));
        }

        debug!(count, "input format is valid");
        Ok(count)
    }
}

fn violation(line: usize, reason: String) -> PolydivError {
    PolydivError::Format { line, reason }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn validator() -> FormatValidator {
        FormatValidator::new(FormatRules::default()).unwrap()
    }

    fn violation_line(result: Result<usize, PolydivError>) -> usize {
        match result {
            Err(PolydivError::Format { line, .. }) => line,
            other => panic!("expected a format violation, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_well_formed_input() {
        assert_eq!(validator().validate("4\n381654729\n26\n58\n6\n").unwrap(), 4);
    }

    #[test]
    fn test_count_line() {
        let validator = validator();
        assert_eq!(violation_line(validator.validate("")), 1);
        assert_eq!(violation_line(validator.validate("0\n")), 1);
        assert_eq!(violation_line(validator.validate("01\n1\n")), 1);
        assert_eq!(violation_line(validator.validate(" 1\n1\n")), 1);
        assert_eq!(violation_line(validator.validate("5001\n")), 1);
        assert_eq!(violation_line(validator.validate("99999999999999999999999\n")), 1);
    }

    #[test]
    fn test_passcode_lines() {
        let validator = validator();
        assert_eq!(violation_line(validator.validate("2\n12\n012\n")), 3);
        assert_eq!(violation_line(validator.validate("1\n12 \n")), 2);
        assert_eq!(violation_line(validator.validate("1\n\n")), 2);
        assert_eq!(violation_line(validator.validate("2\n12\n")), 3);
        assert_eq!(violation_line(validator.validate("1\n12")), 2);

        let longest = format!("1\n{}\n", "1".repeat(100));
        assert!(validator.validate(&longest).is_ok());
        let too_long = format!("1\n{}\n", "1".repeat(101));
        assert_eq!(violation_line(validator.validate(&too_long)), 2);
    }

    #[test]
    fn test_nothing_after_last_passcode() {
        let validator = validator();
        assert_eq!(violation_line(validator.validate("1\n12\n\n")), 3);
        assert_eq!(violation_line(validator.validate("1\n12\n34\n")), 3);
    }

    #[test]
    fn test_custom_rules() {
        let validator = FormatValidator::new(FormatRules {
            min_count: 0,
            max_count: 2,
            max_digits: 3,
            allow_leading_zero: true,
        })
        .unwrap();
        assert_eq!(validator.validate("2\n012\n0\n").unwrap(), 2);
        assert_eq!(violation_line(validator.validate("1\n1234\n")), 2);
        assert_eq!(violation_line(validator.validate("3\n1\n2\n3\n")), 1);
    }
}
