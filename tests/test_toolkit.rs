//! Generates a test set on disk and replays it.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use polydiv::format::{FormatRules, FormatValidator};
use polydiv::generate::{write_test_set, DEFAULT_SEED};
use polydiv::verify::{verify_dir, AnswerStatus};
use polydiv::{check_all, parse_record, Wording};

fn unique_dir(suffix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after epoch")
        .as_nanos();
    env::temp_dir().join(format!("polydiv-{}-{}-{}", suffix, std::process::id(), nanos))
}

#[test]
fn generated_set_verifies() {
    let root = unique_dir("verify");
    let written = write_test_set(&root, DEFAULT_SEED).unwrap();
    assert_eq!(written.len(), 24);

    let validator = FormatValidator::new(FormatRules::default()).unwrap();
    let outcomes = verify_dir(&root, &validator).unwrap();
    assert_eq!(outcomes.len(), 24);
    for outcome in &outcomes {
        assert!(outcome.passed(), "{:?}", outcome);
    }

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn answers_match_the_checker() {
    let root = unique_dir("answers");
    for input in write_test_set(&root, 7).unwrap() {
        let text = fs::read_to_string(&input).unwrap();
        let expected = fs::read_to_string(input.with_extension("ans")).unwrap();
        let record = parse_record(&text).unwrap();
        let report = check_all(record.count, record.codes).unwrap();
        assert_eq!(report.display(Wording::Plain).to_string(), expected, "{:?}", input);
    }
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn same_seed_same_files() {
    let first = unique_dir("seed-a");
    let second = unique_dir("seed-b");
    let a = write_test_set(&first, 99).unwrap();
    let b = write_test_set(&second, 99).unwrap();
    for (a, b) in a.iter().zip(b.iter()) {
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap(), "{:?}", a.file_name());
    }
    fs::remove_dir_all(&first).unwrap();
    fs::remove_dir_all(&second).unwrap();
}

#[test]
fn tampered_answer_is_reported() {
    let root = unique_dir("tamper");
    write_test_set(&root, DEFAULT_SEED).unwrap();
    fs::write(root.join("sample").join("sample3.ans"), "not secure\n10\n").unwrap();
    fs::remove_file(root.join("secret").join("secret1.ans")).unwrap();

    let validator = FormatValidator::new(FormatRules::default()).unwrap();
    let outcomes = verify_dir(&root, &validator).unwrap();
    let failed: Vec<_> = outcomes.iter().filter(|o| !o.passed()).collect();
    assert_eq!(failed.len(), 2);
    assert!(matches!(failed[0].answer, AnswerStatus::Mismatch { .. }));
    assert_eq!(failed[1].answer, AnswerStatus::Missing);

    fs::remove_dir_all(&root).unwrap();
}
