use std::num::NonZeroUsize;

use strength_reduce::StrengthReducedU32;

use crate::{DigitString, HasRule, PrefixCheck, Rule};

/// Least common multiple of 1 through 10
pub const CYCLE_MODULUS: u32 = 2520;

/// Polydivisibility check under [`Rule::Cyclic`].
///
/// The prefix value is only ever kept modulo 2520, and position `i` is tested against
/// `((i - 1) % 10) + 1`. Since every divisor in 1..=10 divides 2520, the reduced value has the same
/// remainder as the full prefix value for each of them, so the scan runs in constant space on
/// strings of any length.
///
/// This rule agrees with [`Rule::Exact`] on strings of up to 10 digits. After that it tests the
/// 11th prefix against 1, the 12th against 2, and so on.
///
/// ~~~
/// use polydiv::algorithm::Cyclic;
/// use polydiv::{DigitString, PrefixCheck};
///
/// let checker = Cyclic::new();
/// let code: DigitString = "666450405060".parse().unwrap();
/// assert!(checker.is_valid(&code));
/// ~~~
#[derive(Debug)]
pub struct Cyclic {
    modulus: StrengthReducedU32,
    divisors: [StrengthReducedU32; 10],
}

impl Cyclic {
    pub fn new() -> Self {
        let mut divisors = [StrengthReducedU32::new(1); 10];
        for (i, divisor) in divisors.iter_mut().enumerate() {
            *divisor = StrengthReducedU32::new(i as u32 + 1);
        }
        Self {
            modulus: StrengthReducedU32::new(CYCLE_MODULUS),
            divisors,
        }
    }
}

impl Default for Cyclic {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixCheck for Cyclic {
    fn first_failure(&self, code: &DigitString) -> Option<NonZeroUsize> {
        let mut residual = 0u32;
        for (index, digit) in code.digits().enumerate() {
            residual = (residual * 10 + u32::from(digit)) % self.modulus;
            if residual % self.divisors[index % 10] != 0 {
                return NonZeroUsize::new(index + 1);
            }
        }
        None
    }

    fn max_len(&self) -> Option<usize> {
        None
    }
}

impl HasRule for Cyclic {
    fn rule(&self) -> Rule {
        Rule::Cyclic
    }
}
