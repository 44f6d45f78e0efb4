use std::num::NonZeroUsize;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::{DigitString, HasRule, PrefixCheck, Rule};

/// Naive reference checker that rebuilds every prefix value from scratch.
///
/// This takes time quadratic in the length of the string, so it is only useful for
/// cross-checking the other algorithms.
///
/// ~~~
/// use polydiv::algorithm::Reparse;
/// use polydiv::{DigitString, PrefixCheck, Rule};
///
/// let checker = Reparse::new(Rule::Exact);
/// let code: DigitString = "123".parse().unwrap();
/// assert!(checker.is_valid(&code));
/// ~~~
#[derive(Debug)]
pub struct Reparse {
    rule: Rule,
}

impl Reparse {
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    fn prefix_value(code: &DigitString, len: usize) -> BigUint {
        code.digits()
            .take(len)
            .fold(BigUint::zero(), |acc, digit| acc * 10u32 + u32::from(digit))
    }
}

impl PrefixCheck for Reparse {
    fn first_failure(&self, code: &DigitString) -> Option<NonZeroUsize> {
        (1..=code.len())
            .find(|&position| {
                let divisor = BigUint::from(self.rule.divisor(position));
                !Self::prefix_value(code, position).is_multiple_of(&divisor)
            })
            .and_then(NonZeroUsize::new)
    }

    fn max_len(&self) -> Option<usize> {
        None
    }
}

impl HasRule for Reparse {
    fn rule(&self) -> Rule {
        self.rule
    }
}
