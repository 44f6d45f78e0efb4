use std::fmt;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::{CheckPlanner, DigitString, PolydivError, Rule};

/// The status-line wording used when printing a [`Report`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Wording {
    /// `secure` / `not secure`
    #[default]
    Plain,
    /// `Firewall is secure!` / `Vulnerabilities detected:`
    Firewall,
}
impl Wording {
    pub fn secure(&self) -> &'static str {
        match self {
            Self::Plain => "secure",
            Self::Firewall => "Firewall is secure!",
        }
    }
    pub fn insecure(&self) -> &'static str {
        match self {
            Self::Plain => "not secure",
            Self::Firewall => "Vulnerabilities detected:",
        }
    }
}

/// The outcome of checking one input line.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Verdict {
    pub code: DigitString,
    /// 1-based position of the first prefix that failed
    pub failed_at: Option<NonZeroUsize>,
}
impl Verdict {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.failed_at.is_none()
    }
}

/// Verdicts for a whole input record, in input order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Report {
    rule: Rule,
    verdicts: Vec<Verdict>,
}

impl Report {
    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// True if no line failed. An empty record always passes.
    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(Verdict::is_valid)
    }

    /// The failing lines, in input order.
    pub fn invalid(&self) -> impl Iterator<Item = &Verdict> + '_ {
        self.verdicts.iter().filter(|verdict| !verdict.is_valid())
    }

    /// Formats the report as the status line followed by each failing line.
    pub fn display(&self, wording: Wording) -> ReportDisplay<'_> {
        ReportDisplay {
            report: self,
            wording,
        }
    }
}

/// Helper struct for printing a [`Report`] with `format!` and `{}`. Every line, including the
/// last, ends with a newline.
#[derive(Debug)]
pub struct ReportDisplay<'a> {
    report: &'a Report,
    wording: Wording,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.report.all_passed() {
            return writeln!(f, "{}", self.wording.secure());
        }
        writeln!(f, "{}", self.wording.insecure())?;
        for verdict in self.report.invalid() {
            writeln!(f, "{}", verdict.code)?;
        }
        Ok(())
    }
}

/// Checks `count` lines for exact polydivisibility.
///
/// `count` must equal `lines.len()`; the count is what the input record declared, and a mismatch
/// means the caller lost or invented lines.
pub fn check_all(count: usize, lines: Vec<DigitString>) -> Result<Report, PolydivError> {
    check_all_with(&mut CheckPlanner::new(), Rule::Exact, count, lines)
}

/// Like [`check_all`], with a caller-supplied planner and rule.
pub fn check_all_with(
    planner: &mut CheckPlanner,
    rule: Rule,
    count: usize,
    lines: Vec<DigitString>,
) -> Result<Report, PolydivError> {
    if count != lines.len() {
        return Err(PolydivError::CountMismatch {
            declared: count,
            actual: lines.len(),
        });
    }

    let verdicts: Vec<Verdict> = lines
        .into_iter()
        .map(|code| {
            let failed_at = planner.plan_check(code.len(), rule).first_failure(&code);
            trace!(%code, ?failed_at, "checked");
            Verdict { code, failed_at }
        })
        .collect();

    let report = Report { rule, verdicts };
    debug!(
        %rule,
        lines = count,
        invalid = report.invalid().count(),
        "checked input record"
    );
    Ok(report)
}
