use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::Reparse;
use crate::{DigitString, PrefixCheck};

/// The seed for the random number generator used to generate
/// random digit strings. It's defined here so that we have deterministic
/// tests
const RNG_SEED: u64 = 1910_11431_4984;

pub fn code(text: &str) -> DigitString {
    DigitString::new(text).unwrap()
}

/// Random strings of exactly `len` digits. Roughly one in ten starts with a zero.
pub fn random_codes(count: usize, len: usize) -> Vec<DigitString> {
    let mut rng = StdRng::seed_from_u64(RNG_SEED ^ len as u64);
    (0..count)
        .map(|_| {
            let text: String = (0..len)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect();
            code(&text)
        })
        .collect()
}

/// Random strings that pass the exact rule for as long as possible: each digit is picked among
/// the ones that keep the prefix valid, falling back to a random digit when none does.
pub fn near_polydivisible_codes(count: usize, len: usize) -> Vec<DigitString> {
    let mut rng = StdRng::seed_from_u64(RNG_SEED.rotate_left(7) ^ len as u64);
    (0..count)
        .map(|_| {
            let mut text = String::with_capacity(len);
            let mut value = 0u128;
            for position in 1..=len {
                let candidates: Vec<u8> = (0..10u8)
                    .filter(|&d| {
                        position <= 38 && (value * 10 + u128::from(d)) % position as u128 == 0
                    })
                    .collect();
                let digit = if candidates.is_empty() {
                    rng.gen_range(0..10u8)
                } else {
                    candidates[rng.gen_range(0..candidates.len())]
                };
                if position <= 37 {
                    value = value * 10 + u128::from(digit);
                }
                text.push(char::from(b'0' + digit));
            }
            code(&text)
        })
        .collect()
}

/// Asserts that `checker` reports the same first failure as the naive reference for every code.
pub fn check_against_reference(checker: &dyn PrefixCheck, codes: &[DigitString]) {
    let reference = Reparse::new(checker.rule());
    for code in codes {
        assert_eq!(
            checker.first_failure(code),
            reference.first_failure(code),
            "rule = {}, code = {}",
            checker.rule(),
            code
        );
    }
}
