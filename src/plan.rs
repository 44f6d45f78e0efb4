use std::sync::Arc;

use tracing::debug;

use crate::algorithm::{Big, Cyclic, Native};
use crate::check_cache::{Accumulator, CheckCache};
use crate::{PrefixCheck, Rule};

/// The planner is used to choose a polydivisibility algorithm for a given string length and rule.
///
/// ~~~
/// // Check a 30-digit string
/// use std::sync::Arc;
/// use polydiv::{CheckPlanner, DigitString, PrefixCheck, Rule};
///
/// let code: DigitString = "3".repeat(30).parse().unwrap();
///
/// let mut planner = CheckPlanner::new();
/// let checker = planner.plan_check(code.len(), Rule::Exact);
/// assert!(!checker.is_valid(&code));
///
/// // If we plan a checker that needs the same accumulator again, we'll get the cached instance
/// let checker2 = planner.plan_check(25, Rule::Exact);
/// assert!(Arc::ptr_eq(&checker, &checker2));
/// ~~~
///
/// Under [`Rule::Exact`], strings of up to 19 digits get a `u64` accumulator, strings of up to 38
/// digits get a `u128` accumulator and longer strings get an arbitrary-precision one. Every
/// [`Rule::Cyclic`] plan shares one instance, since that rule runs in constant space.
///
/// Each checker is built once per planner and shared through an `Arc`, so keep the planner around
/// when checking many strings.
pub struct CheckPlanner {
    cache: CheckCache,
}

impl CheckPlanner {
    /// Creates a new `CheckPlanner` instance.
    pub fn new() -> Self {
        Self {
            cache: CheckCache::new(),
        }
    }

    /// Returns a checker that can test strings of `len` digits under `rule`.
    pub fn plan_check(&mut self, len: usize, rule: Rule) -> Arc<dyn PrefixCheck> {
        let accumulator = Self::choose_accumulator(len, rule);
        if let Some(check) = self.cache.get(accumulator) {
            return check;
        }

        debug!(?accumulator, len, %rule, "planning polydivisibility check");
        let check: Arc<dyn PrefixCheck> = match accumulator {
            Accumulator::U64 => Arc::new(Native::<u64>::new(Native::<u64>::capacity())),
            Accumulator::U128 => Arc::new(Native::<u128>::new(Native::<u128>::capacity())),
            Accumulator::Big => Arc::new(Big::new()),
            Accumulator::Cyclic => Arc::new(Cyclic::new()),
        };
        self.cache.insert(accumulator, &check);
        check
    }

    fn choose_accumulator(len: usize, rule: Rule) -> Accumulator {
        match rule {
            Rule::Cyclic => Accumulator::Cyclic,
            Rule::Exact if len <= Native::<u64>::capacity() => Accumulator::U64,
            Rule::Exact if len <= Native::<u128>::capacity() => Accumulator::U128,
            Rule::Exact => Accumulator::Big,
        }
    }
}

impl Default for CheckPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CheckPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckPlanner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_choose_accumulator() {
        let expected = [
            (1, Accumulator::U64),
            (19, Accumulator::U64),
            (20, Accumulator::U128),
            (38, Accumulator::U128),
            (39, Accumulator::Big),
            (1000, Accumulator::Big),
        ];
        for (len, accumulator) in expected {
            assert_eq!(
                CheckPlanner::choose_accumulator(len, Rule::Exact),
                accumulator,
                "len = {}",
                len
            );
            assert_eq!(
                CheckPlanner::choose_accumulator(len, Rule::Cyclic),
                Accumulator::Cyclic
            );
        }
    }

    #[test]
    fn test_plan_covers_length() {
        let mut planner = CheckPlanner::new();
        for len in [1, 19, 20, 38, 39, 500] {
            let check = planner.plan_check(len, Rule::Exact);
            assert_eq!(check.rule(), Rule::Exact);
            if let Some(max_len) = check.max_len() {
                assert!(max_len >= len, "len = {}, max_len = {}", len, max_len);
            }
        }
        assert_eq!(planner.plan_check(7, Rule::Cyclic).rule(), Rule::Cyclic);
    }

    #[test]
    fn test_plan_is_cached() {
        let mut planner = CheckPlanner::new();
        assert!(!planner.cache.contains_check(Accumulator::U128));
        let first = planner.plan_check(20, Rule::Exact);
        assert!(planner.cache.contains_check(Accumulator::U128));
        let second = planner.plan_check(38, Rule::Exact);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
