#![warn(missing_debug_implementations)]

//! Polydiv checks digit strings for polydivisibility: a string passes when every prefix,
//! read as a base-10 integer, is divisible by the prefix's own length.
//!
//! ### Usage
//!
//! The recommended way to use polydiv is to create a [`CheckPlanner`](crate::CheckPlanner) and
//! let it choose an algorithm for the length of the string you want to check:
//!
//! ```
//! use polydiv::{CheckPlanner, DigitString, Rule};
//!
//! let mut planner = CheckPlanner::new();
//! let code: DigitString = "381654729".parse().unwrap();
//!
//! let checker = planner.plan_check(code.len(), Rule::Exact);
//! assert!(checker.is_valid(&code));
//! ```
//!
//! For a whole input record, [`check_all`](crate::check_all) runs the planner over every line and
//! collects a [`Report`](crate::Report), which prints the status line followed by each failing
//! line in input order:
//!
//! ```
//! use polydiv::{check_all, DigitString, Wording};
//!
//! let lines: Vec<DigitString> = ["1", "99", "123"].iter().map(|s| s.parse().unwrap()).collect();
//! let report = check_all(3, lines).unwrap();
//!
//! assert!(!report.all_passed());
//! assert_eq!(report.display(Wording::Plain).to_string(), "not secure\n99\n");
//! ```
//!
//! ### Rules
//!
//! [`Rule::Exact`] is true polydivisibility and is correct for strings of any length: the planner
//! uses a `u64` accumulator for up to 19 digits, a `u128` accumulator for up to 38 digits, and an
//! arbitrary-precision accumulator beyond that.
//!
//! [`Rule::Cyclic`] keeps only the prefix value modulo 2520 (the least common multiple of 1..=10)
//! and tests position `i` against the divisor `((i - 1) % 10) + 1`. It agrees with the exact rule
//! for strings of up to 10 digits and may disagree after that.
//!
//! ### Problem-package tooling
//!
//! The [`format`], [`enumerate`], [`generate`] and [`verify`] modules carry the rest of the
//! problem package: strict input validation, enumeration of every polydivisible number,
//! seeded test-case generation and a verifier that replays generated cases.

use std::fmt::Display;
use std::num::NonZeroUsize;

mod batch;
mod check_cache;
mod digits;
mod error;
mod input;
mod plan;

pub mod algorithm;
pub mod enumerate;
pub mod format;
pub mod generate;
pub mod verify;

#[cfg(test)]
mod test_utils;

pub use crate::batch::{check_all, check_all_with, Report, ReportDisplay, Verdict, Wording};
pub use crate::digits::{DigitError, DigitString};
pub use crate::error::PolydivError;
pub use crate::input::{parse_record, read_record, Record};
pub use crate::plan::CheckPlanner;

/// Which divisibility test a checker applies at each prefix position.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Rule {
    /// Position `i` must divide the full prefix value.
    Exact,
    /// The prefix value is reduced modulo 2520 and position `i` is tested against `((i - 1) % 10) + 1`.
    Cyclic,
}
impl Rule {
    /// Returns the divisor this rule tests at the given 1-based position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 0.
    #[inline(always)]
    pub fn divisor(&self, position: usize) -> usize {
        assert!(position > 0, "Prefix positions start at 1");
        match self {
            Self::Exact => position,
            Self::Cyclic => ((position - 1) % 10) + 1,
        }
    }
}
impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Exact => f.write_str("Exact"),
            Self::Cyclic => f.write_str("Cyclic"),
        }
    }
}

/// A trait that allows checkers to report which rule they implement
pub trait HasRule {
    /// Returns the rule this checker tests against
    fn rule(&self) -> Rule;
}

/// Trait for algorithms that test digit strings for polydivisibility.
///
/// Implementations are expected to scan the string once, from the most significant digit, and to
/// stop at the first prefix that fails.
pub trait PrefixCheck: HasRule + Sync + Send {
    /// Returns the 1-based position of the first prefix that fails this checker's rule, or `None`
    /// if every prefix passes.
    ///
    /// # Panics
    ///
    /// Panics if `code` is longer than [`max_len`](PrefixCheck::max_len).
    fn first_failure(&self, code: &DigitString) -> Option<NonZeroUsize>;

    /// Returns true if every prefix of `code` passes this checker's rule.
    fn is_valid(&self, code: &DigitString) -> bool {
        self.first_failure(code).is_none()
    }

    /// The longest string this checker can test, or `None` if there is no limit.
    fn max_len(&self) -> Option<usize>;
}
