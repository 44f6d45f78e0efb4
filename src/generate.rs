//! Seeded generation of test cases.
//!
//! A case is a list of passcodes written as a `.in` file in the record format, next to a `.ans`
//! file holding the report the checker prints for it. Secure passcodes are drawn from a pool of
//! enumerated polydivisible numbers; insecure ones are random passcodes that fail the exact rule.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::enumerate::polydivisible_numbers;
use crate::{check_all_with, CheckPlanner, DigitString, PolydivError, Rule, Wording};

/// Seed used by [`write_test_set`] when the caller does not pick one
pub const DEFAULT_SEED: u64 = 123456;

/// Size and depth of the pool secure passcodes are drawn from
const SECURE_POOL_LIMIT: usize = 5000;
const SECURE_POOL_MAX_LEN: usize = 20;

/// Hand-made sample cases, written as `sample1` through `sample4`
pub const SAMPLE_CASES: [&[&str]; 4] = [
    &["381654729", "26", "58", "6"],
    &["381654729", "6", "8"],
    &["10", "12"],
    &["38", "1", "123"],
];

/// What kind of passcodes a generated case holds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CaseMode {
    /// Each passcode is secure or insecure with equal probability
    Mixed,
    /// Distinct passcodes from the secure pool
    AllSecure,
    AllInsecure,
}

/// Generates passcodes and cases from a seeded random source.
#[derive(Debug)]
pub struct CaseGenerator<R> {
    rng: R,
    secure_pool: Vec<String>,
    planner: CheckPlanner,
}

impl CaseGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CaseGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            secure_pool: polydivisible_numbers(SECURE_POOL_MAX_LEN, SECURE_POOL_LIMIT),
            planner: CheckPlanner::new(),
        }
    }

    /// The polydivisible numbers secure passcodes are drawn from.
    pub fn secure_pool(&self) -> &[String] {
        &self.secure_pool
    }

    /// A random passcode of `min_len..=max_len` digits without a leading zero.
    pub fn random_passcode(&mut self, min_len: usize, max_len: usize) -> String {
        assert!(
            min_len >= 1 && min_len <= max_len,
            "Invalid passcode length range {}..={}",
            min_len,
            max_len
        );
        let len = self.rng.gen_range(min_len..=max_len);
        let mut passcode = String::with_capacity(len);
        passcode.push(char::from(b'0' + self.rng.gen_range(1..10u8)));
        for _ in 1..len {
            passcode.push(char::from(b'0' + self.rng.gen_range(0..10u8)));
        }
        passcode
    }

    /// A random passcode that fails the exact rule.
    ///
    /// Every passcode of one digit is polydivisible, so `max_len` must be at least 2.
    pub fn insecure_passcode(&mut self, min_len: usize, max_len: usize) -> String {
        assert!(
            max_len >= 2,
            "No passcode of at most {} digits is insecure",
            max_len
        );
        loop {
            let passcode = self.random_passcode(min_len, max_len);
            if !self.is_secure(&passcode) {
                return passcode;
            }
        }
    }

    /// Generates the passcodes for one case.
    pub fn make_case(
        &mut self,
        count: usize,
        mode: CaseMode,
        min_len: usize,
        max_len: usize,
    ) -> Vec<String> {
        match mode {
            CaseMode::AllSecure => {
                assert!(
                    count <= self.secure_pool.len(),
                    "Secure pool holds {} passcodes, {} requested",
                    self.secure_pool.len(),
                    count
                );
                self.secure_pool
                    .choose_multiple(&mut self.rng, count)
                    .cloned()
                    .collect()
            }
            CaseMode::AllInsecure => (0..count)
                .map(|_| self.insecure_passcode(min_len, max_len))
                .collect(),
            CaseMode::Mixed => (0..count)
                .map(|_| {
                    if self.rng.gen_bool(0.5) {
                        self.secure_pool
                            .choose(&mut self.rng)
                            .cloned()
                            .unwrap_or_default()
                    } else {
                        self.insecure_passcode(min_len, max_len)
                    }
                })
                .collect(),
        }
    }

    fn is_secure(&mut self, passcode: &str) -> bool {
        match DigitString::new(passcode) {
            Ok(code) => self.planner.plan_check(code.len(), Rule::Exact).is_valid(&code),
            Err(_) => false,
        }
    }

    /// Writes the standard test set under `root`: `sample/` gets the hand-made samples, `secret/`
    /// gets twenty generated cases. Returns the paths of the `.in` files written.
    pub fn write_test_set(&mut self, root: &Path) -> Result<Vec<PathBuf>, PolydivError> {
        let sample_dir = root.join("sample");
        let secret_dir = root.join("secret");
        fs::create_dir_all(&sample_dir).map_err(|err| PolydivError::io(&sample_dir, err))?;
        fs::create_dir_all(&secret_dir).map_err(|err| PolydivError::io(&secret_dir, err))?;

        let mut written = Vec::new();
        for (index, codes) in SAMPLE_CASES.iter().enumerate() {
            let codes: Vec<String> = codes.iter().map(|code| code.to_string()).collect();
            let name = format!("sample{}", index + 1);
            written.push(write_case(&sample_dir, &name, &codes)?);
        }

        let mut plan: Vec<(usize, CaseMode, usize, usize)> = Vec::new();
        for count in [1, 2, 3] {
            plan.push((count, CaseMode::Mixed, 1, 20));
        }
        for count in [5, 10, 20] {
            plan.push((count, CaseMode::AllSecure, 1, 20));
        }
        for count in [10, 20] {
            plan.push((count, CaseMode::AllInsecure, 1, 20));
        }
        for count in [50, 75, 100] {
            plan.push((count, CaseMode::Mixed, 1, 20));
        }
        for count in [200, 300, 500] {
            plan.push((count, CaseMode::Mixed, 10, 20));
        }
        while plan.len() < 20 {
            let count = self.rng.gen_range(50..=300);
            let mode = *[CaseMode::Mixed, CaseMode::AllSecure, CaseMode::AllInsecure]
                .choose(&mut self.rng)
                .unwrap_or(&CaseMode::Mixed);
            plan.push((count, mode, 1, 20));
        }

        for (index, (count, mode, min_len, max_len)) in plan.into_iter().enumerate() {
            let codes = self.make_case(count, mode, min_len, max_len);
            let name = format!("secret{}", index + 1);
            written.push(write_case(&secret_dir, &name, &codes)?);
        }

        info!(cases = written.len(), root = %root.display(), "wrote test set");
        Ok(written)
    }
}

/// Writes the standard test set with a fresh generator seeded with `seed`.
pub fn write_test_set(root: &Path, seed: u64) -> Result<Vec<PathBuf>, PolydivError> {
    CaseGenerator::seeded(seed).write_test_set(root)
}

/// The input record for `codes`: the count line, then one passcode per line.
pub fn render_input(codes: &[String]) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", codes.len());
    for code in codes {
        let _ = writeln!(text, "{}", code);
    }
    text
}

/// The report the checker prints for `codes`, using the plain wording and the exact rule.
pub fn render_answer(codes: &[String]) -> Result<String, PolydivError> {
    let lines = codes
        .iter()
        .enumerate()
        .map(|(index, code)| {
            DigitString::new(code.as_str()).map_err(|source| PolydivError::Digits {
                line: index + 2,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let report = check_all_with(&mut CheckPlanner::new(), Rule::Exact, codes.len(), lines)?;
    Ok(report.display(Wording::Plain).to_string())
}

/// Writes `<name>.in` and `<name>.ans` into `dir` and returns the path of the `.in` file.
pub fn write_case(dir: &Path, name: &str, codes: &[String]) -> Result<PathBuf, PolydivError> {
    let in_path = dir.join(format!("{}.in", name));
    let ans_path = dir.join(format!("{}.ans", name));

    fs::write(&in_path, render_input(codes)).map_err(|err| PolydivError::io(&in_path, err))?;
    fs::write(&ans_path, render_answer(codes)?).map_err(|err| PolydivError::io(&ans_path, err))?;

    debug!(case = name, passcodes = codes.len(), "wrote case");
    Ok(in_path)
}
