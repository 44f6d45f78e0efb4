use std::num::NonZeroUsize;

use num_bigint::BigUint;
use proptest::prelude::*;

use polydiv::{check_all, CheckPlanner, DigitString, PrefixCheck, Rule, Wording};

fn is_polydivisible(text: &str) -> bool {
    (1..=text.len()).all(|len| {
        let prefix = BigUint::parse_bytes(text[..len].as_bytes(), 10).unwrap();
        (prefix % BigUint::from(len)) == BigUint::from(0u32)
    })
}

fn checker_for(planner: &mut CheckPlanner, code: &DigitString) -> std::sync::Arc<dyn PrefixCheck> {
    planner.plan_check(code.len(), Rule::Exact)
}

proptest! {
    #[test]
    fn valid_iff_every_prefix_divides(text in "[0-9]{1,60}") {
        let code: DigitString = text.parse().unwrap();
        let mut planner = CheckPlanner::new();
        prop_assert_eq!(checker_for(&mut planner, &code).is_valid(&code), is_polydivisible(&text));
    }

    #[test]
    fn first_failure_is_the_first_bad_prefix(text in "[1-9][0-9]{0,30}") {
        let code: DigitString = text.parse().unwrap();
        let mut planner = CheckPlanner::new();
        let failed_at = checker_for(&mut planner, &code).first_failure(&code);
        let expected = (1..=text.len())
            .find(|&len| !is_polydivisible(&text[..len]))
            .and_then(NonZeroUsize::new);
        prop_assert_eq!(failed_at, expected);
    }

    #[test]
    fn single_digit_always_valid(digit in 0u8..10) {
        let code = DigitString::new(digit.to_string()).unwrap();
        let mut planner = CheckPlanner::new();
        prop_assert!(checker_for(&mut planner, &code).is_valid(&code));
        prop_assert!(planner.plan_check(1, Rule::Cyclic).is_valid(&code));
    }

    #[test]
    fn cyclic_agrees_with_exact_up_to_ten_digits(text in "[0-9]{1,10}") {
        let code: DigitString = text.parse().unwrap();
        let mut planner = CheckPlanner::new();
        let exact = planner.plan_check(code.len(), Rule::Exact).first_failure(&code);
        let cyclic = planner.plan_check(code.len(), Rule::Cyclic).first_failure(&code);
        prop_assert_eq!(exact, cyclic);
    }

    #[test]
    fn report_keeps_input_order(texts in prop::collection::vec("[0-9]{1,12}", 0..40)) {
        let codes: Vec<DigitString> = texts.iter().map(|t| t.parse().unwrap()).collect();
        let report = check_all(codes.len(), codes).unwrap();

        let expected_invalid: Vec<&String> = texts.iter().filter(|t| !is_polydivisible(t)).collect();
        let invalid: Vec<&str> = report.invalid().map(|v| v.code.as_str()).collect();
        prop_assert_eq!(invalid.len(), expected_invalid.len());
        for (got, want) in invalid.iter().zip(expected_invalid.iter()) {
            prop_assert_eq!(*got, want.as_str());
        }

        let printed = report.display(Wording::Plain).to_string();
        let mut lines = printed.lines();
        let status = lines.next().unwrap();
        prop_assert_eq!(status, if expected_invalid.is_empty() { "secure" } else { "not secure" });
        prop_assert_eq!(lines.count(), expected_invalid.len());
    }
}
