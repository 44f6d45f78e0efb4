//! Replays a test set: every `.in` file is run through the strict validator and the checker, and
//! the checker's report is compared with the matching `.ans` file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::format::FormatValidator;
use crate::{check_all_with, parse_record, CheckPlanner, PolydivError, Rule, Wording};

/// How the checker's report compared with the expected answer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AnswerStatus {
    Match,
    Mismatch { expected: String, actual: String },
    /// No `.ans` file sits next to the input
    Missing,
}

/// The outcome of replaying one case.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CaseOutcome {
    pub input: PathBuf,
    /// The validator's complaint, if any
    pub format_error: Option<String>,
    pub answer: AnswerStatus,
}

impl CaseOutcome {
    /// A case passes when the input is well formed and the report matches a present answer.
    pub fn passed(&self) -> bool {
        self.format_error.is_none() && self.answer == AnswerStatus::Match
    }
}

/// Collects the `.in` files of `data/sample` and `data/secret`, each directory sorted by name.
/// A missing directory contributes nothing.
pub fn collect_inputs(data: &Path) -> Result<Vec<PathBuf>, PolydivError> {
    let mut inputs = Vec::new();
    for subdir in ["sample", "secret"] {
        let dir = data.join(subdir);
        if !dir.is_dir() {
            continue;
        }
        let mut found = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|err| PolydivError::io(&dir, err))? {
            let path = entry.map_err(|err| PolydivError::io(&dir, err))?.path();
            if path.extension().map_or(false, |ext| ext == "in") {
                found.push(path);
            }
        }
        found.sort();
        inputs.extend(found);
    }
    Ok(inputs)
}

/// Replays a single case.
pub fn verify_case(
    input: &Path,
    validator: &FormatValidator,
    planner: &mut CheckPlanner,
    rule: Rule,
    wording: Wording,
) -> Result<CaseOutcome, PolydivError> {
    let text = fs::read_to_string(input).map_err(|err| PolydivError::io(input, err))?;

    let format_error = validator.validate(&text).err().map(|err| err.to_string());

    let actual = match parse_record(&text)
        .and_then(|record| check_all_with(planner, rule, record.count, record.codes))
    {
        Ok(report) => report.display(wording).to_string(),
        Err(err) => format!("error: {}", err),
    };

    let ans_path = input.with_extension("ans");
    let answer = if ans_path.is_file() {
        let expected =
            fs::read_to_string(&ans_path).map_err(|err| PolydivError::io(&ans_path, err))?;
        if expected.trim() == actual.trim() {
            AnswerStatus::Match
        } else {
            AnswerStatus::Mismatch { expected, actual }
        }
    } else {
        AnswerStatus::Missing
    };

    let outcome = CaseOutcome {
        input: input.to_path_buf(),
        format_error,
        answer,
    };
    if outcome.passed() {
        debug!(input = %input.display(), "case passed");
    } else {
        warn!(input = %input.display(), "case failed");
    }
    Ok(outcome)
}

/// Replays every case under `data` with the exact rule and plain wording.
pub fn verify_dir(
    data: &Path,
    validator: &FormatValidator,
) -> Result<Vec<CaseOutcome>, PolydivError> {
    let mut planner = CheckPlanner::new();
    collect_inputs(data)?
        .iter()
        .map(|input| verify_case(input, validator, &mut planner, Rule::Exact, Wording::Plain))
        .collect()
}

/// The first line where two texts differ, 1-based, with both sides of it.
pub fn first_difference<'a>(
    expected: &'a str,
    actual: &'a str,
) -> Option<(usize, &'a str, &'a str)> {
    let mut expected_lines = expected.trim().lines();
    let mut actual_lines = actual.trim().lines();
    let mut line = 1;
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return None,
            (e, a) if e == a => line += 1,
            (e, a) => return Some((line, e.unwrap_or(""), a.unwrap_or(""))),
        }
    }
}
