use std::num::NonZeroUsize;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::{DigitString, HasRule, PrefixCheck, Rule};

/// Exact polydivisibility check with an arbitrary-precision accumulator.
///
/// Handles strings of any length. Every step costs time proportional to the size of the prefix
/// value, so [`Native`](crate::algorithm::Native) should be preferred when the string is short
/// enough for it. Strings made of many leading zeros keep the accumulator small.
///
/// ~~~
/// use polydiv::algorithm::Big;
/// use polydiv::{DigitString, PrefixCheck};
///
/// let code: DigitString = "0".repeat(60).parse().unwrap();
/// assert!(Big::new().is_valid(&code));
/// ~~~
#[derive(Debug, Default)]
pub struct Big;

impl Big {
    pub fn new() -> Self {
        Self
    }
}

impl PrefixCheck for Big {
    fn first_failure(&self, code: &DigitString) -> Option<NonZeroUsize> {
        let mut value = BigUint::zero();
        for (index, digit) in code.digits().enumerate() {
            value = value * 10u32 + u32::from(digit);
            let position = BigUint::from(index + 1);
            if !value.is_multiple_of(&position) {
                return NonZeroUsize::new(index + 1);
            }
        }
        None
    }

    fn max_len(&self) -> Option<usize> {
        None
    }
}

impl HasRule for Big {
    fn rule(&self) -> Rule {
        Rule::Exact
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::test_utils::{check_against_reference, code, near_polydivisible_codes, random_codes};

    #[test]
    fn test_big_matches_reference() {
        let checker = Big::new();
        for len in [1, 2, 5, 10, 19, 20, 38, 39, 60] {
            check_against_reference(&checker, &random_codes(50, len));
            check_against_reference(&checker, &near_polydivisible_codes(20, len));
        }
    }

    #[test]
    fn test_long_zero_padded_input() {
        let checker = Big::new();

        let zeros = code(&"0".repeat(200));
        assert!(checker.is_valid(&zeros));

        // the final prefix has the value 1, which 201 does not divide
        let one = code(&format!("{}1", "0".repeat(200)));
        assert_eq!(checker.first_failure(&one), NonZeroUsize::new(201));
    }

    #[test]
    fn test_agrees_with_known_values() {
        let checker = Big::new();
        assert!(checker.is_valid(&code("3608528850368400786036725")));
        assert!(checker.is_valid(&code("102")));
        assert_eq!(checker.first_failure(&code("99")), NonZeroUsize::new(2));
    }
}
