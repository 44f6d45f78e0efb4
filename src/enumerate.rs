//! Enumeration of polydivisible numbers.
//!
//! A depth-first search extends each polydivisible prefix by every digit that keeps it
//! polydivisible. No polydivisible number has more than 25 digits, so the search always ends,
//! and the prefix value stays below `10^26` and fits in a `u128`.

/// Number of digits in the largest polydivisible number, 3608528850368400786036725
pub const MAX_POLYDIVISIBLE_LEN: usize = 25;

/// Returns up to `limit` polydivisible numbers with at most `max_len` digits and no leading zero.
///
/// Numbers come out in depth-first order: each number is followed by its own extensions before
/// the next digit is tried at its length, so `1` is followed by `10`, `102`, `1020`, ...
///
/// ~~~
/// use polydiv::enumerate::polydivisible_numbers;
///
/// let numbers = polydivisible_numbers(2, usize::MAX);
/// assert_eq!(&numbers[..4], ["1", "10", "12", "14"]);
/// assert_eq!(numbers.len(), 9 + 45);
/// ~~~
pub fn polydivisible_numbers(max_len: usize, limit: usize) -> Vec<String> {
    let mut results = Vec::new();
    let mut prefix = String::with_capacity(max_len.min(MAX_POLYDIVISIBLE_LEN));
    extend(0, &mut prefix, max_len, limit, &mut results);
    results
}

fn extend(value: u128, prefix: &mut String, max_len: usize, limit: usize, out: &mut Vec<String>) {
    if out.len() >= limit {
        return;
    }
    if !prefix.is_empty() {
        out.push(prefix.clone());
    }
    if prefix.len() == max_len {
        return;
    }

    let next_len = prefix.len() as u128 + 1;
    let first_digit = if prefix.is_empty() { 1 } else { 0 };
    for digit in first_digit..10u8 {
        let next = value * 10 + u128::from(digit);
        if next % next_len == 0 {
            prefix.push(char::from(b'0' + digit));
            extend(next, prefix, max_len, limit, out);
            prefix.pop();
        }
    }
}
