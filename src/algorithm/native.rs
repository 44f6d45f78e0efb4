use std::num::NonZeroUsize;

use num_integer::Integer;
use num_traits::PrimInt;

use crate::{DigitString, HasRule, PrefixCheck, Rule};

/// Exact polydivisibility check that accumulates the prefix value in a primitive integer.
///
/// A prefix of `i` digits is less than `10^i`, so the accumulator never overflows as long as the
/// string is no longer than the number of decimal digits `T` can always hold: 19 for `u64`, 38 for
/// `u128`. The constructor precomputes the divisors and digit values so the scan never converts
/// between integer types.
///
/// ~~~
/// // Checks strings of up to 19 digits with a u64 accumulator
/// use polydiv::algorithm::Native;
/// use polydiv::{DigitString, PrefixCheck};
///
/// let checker = Native::<u64>::new(19);
/// let code: DigitString = "3816547290".parse().unwrap();
/// assert!(checker.is_valid(&code));
/// ~~~
#[derive(Debug)]
pub struct Native<T> {
    divisors: Box<[T]>,
    digit_values: [T; 10],
    ten: T,
}

impl<T: PrimInt + Integer> Native<T> {
    /// The longest string a `Native<T>` can check without overflowing.
    pub fn capacity() -> usize {
        let ten = Self::small_values()[10];
        let mut remaining = T::max_value();
        let mut digits = 0;
        while remaining >= ten {
            remaining = remaining / ten;
            digits += 1;
        }
        digits
    }

    /// Creates a checker for strings of up to `max_len` digits.
    pub fn new(max_len: usize) -> Self {
        assert!(
            max_len <= Self::capacity(),
            "Native accumulator holds at most {} digits. Got {}",
            Self::capacity(),
            max_len
        );

        let small = Self::small_values();
        let mut divisors = Vec::with_capacity(max_len);
        let mut divisor = T::zero();
        for _ in 0..max_len {
            divisor = divisor + T::one();
            divisors.push(divisor);
        }

        let mut digit_values = [T::zero(); 10];
        digit_values.copy_from_slice(&small[..10]);

        Self {
            divisors: divisors.into_boxed_slice(),
            digit_values,
            ten: small[10],
        }
    }

    // 0 through 10, built without any fallible conversion
    fn small_values() -> [T; 11] {
        let mut values = [T::zero(); 11];
        for i in 1..values.len() {
            values[i] = values[i - 1] + T::one();
        }
        values
    }
}

impl<T: PrimInt + Integer + Send + Sync> PrefixCheck for Native<T> {
    fn first_failure(&self, code: &DigitString) -> Option<NonZeroUsize> {
        assert!(
            code.len() <= self.divisors.len(),
            "Input is too long. Expected at most {} digits, got {}",
            self.divisors.len(),
            code.len()
        );

        let mut value = T::zero();
        for (index, (digit, divisor)) in code.digits().zip(self.divisors.iter()).enumerate() {
            value = value * self.ten + self.digit_values[digit as usize];
            if !value.is_multiple_of(divisor) {
                return NonZeroUsize::new(index + 1);
            }
        }
        None
    }

    fn max_len(&self) -> Option<usize> {
        Some(self.divisors.len())
    }
}

impl<T> HasRule for Native<T> {
    fn rule(&self) -> Rule {
        Rule::Exact
    }
}
