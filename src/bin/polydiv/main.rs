//! polydiv CLI entry point
//!
//! Reads a passcode record and reports every passcode that is not polydivisible.

mod cli;
mod logging;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::info;

use cli::{CheckArgs, Cli, Command, GenerateArgs, ValidateArgs, VerifyArgs};
use polydiv::format::FormatValidator;
use polydiv::verify::{first_difference, AnswerStatus};
use polydiv::{check_all_with, parse_record, CheckPlanner, PolydivError, Rule, Wording};

/// Exit status of a successful `validate`, following the problem-package convention
const VALIDATOR_ACCEPT: u8 = 42;
const VALIDATOR_REJECT: u8 = 43;
const RUNTIME_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse_checked();
    logging::init_tracing(logging::log_level(cli.verbose, cli.quiet, cli.explain()));

    let command = cli.command.unwrap_or(Command::Check(cli.check));
    let result = match command {
        Command::Check(args) => run_check(&args),
        Command::Validate(args) => run_validate(&args),
        Command::Generate(args) => run_generate(&args),
        Command::Verify(args) => run_verify(&args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(RUNTIME_ERROR)
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run_check(args: &CheckArgs) -> Result<ExitCode> {
    let text = read_input(args.input.as_deref())?;
    let record = parse_record(&text).context("invalid input record")?;

    let rule = Rule::from(args.rule);
    let mut planner = CheckPlanner::new();
    let report = check_all_with(&mut planner, rule, record.count, record.codes)?;

    if args.explain {
        for verdict in report.invalid() {
            if let Some(position) = verdict.failed_at {
                let position = position.get();
                info!(
                    code = %verdict.code,
                    prefix = &verdict.code.as_str()[..position],
                    divisor = rule.divisor(position),
                    "prefix is not divisible"
                );
            }
        }
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report.display(Wording::from(args.wording)))
        .and_then(|_| stdout.flush())
        .context("failed to write report")?;

    if args.fail_on_insecure && !report.all_passed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_validate(args: &ValidateArgs) -> Result<ExitCode> {
    let text = read_input(args.input.as_deref())?;
    let validator = FormatValidator::new(args.rules())?;

    match validator.validate(&text) {
        Ok(count) => {
            info!(count, "input is well formed");
            Ok(ExitCode::from(VALIDATOR_ACCEPT))
        }
        Err(err @ PolydivError::Format { .. }) => {
            eprintln!("{}", err);
            Ok(ExitCode::from(VALIDATOR_REJECT))
        }
        Err(err) => Err(err.into()),
    }
}

fn run_generate(args: &GenerateArgs) -> Result<ExitCode> {
    let written = polydiv::generate::write_test_set(&args.out, args.seed)
        .with_context(|| format!("failed to write test set to {}", args.out.display()))?;
    println!("wrote {} cases to {}", written.len(), args.out.display());
    Ok(ExitCode::SUCCESS)
}

fn run_verify(args: &VerifyArgs) -> Result<ExitCode> {
    let validator = FormatValidator::new(Default::default())?;
    let outcomes = polydiv::verify::verify_dir(&args.data, &validator)
        .with_context(|| format!("failed to verify {}", args.data.display()))?;
    if outcomes.is_empty() {
        anyhow::bail!(
            "no .in files under {}",
            args.data.join("{sample,secret}").display()
        );
    }

    let mut failures = 0;
    for outcome in &outcomes {
        println!("--- {} ---", outcome.input.display());
        match &outcome.format_error {
            None => println!("validator: OK"),
            Some(reason) => println!("validator: FAIL ({})", reason),
        }
        match &outcome.answer {
            AnswerStatus::Match => println!("output: OK"),
            AnswerStatus::Missing => println!("output: no .ans file"),
            AnswerStatus::Mismatch { expected, actual } => {
                println!("output: MISMATCH");
                if let Some((line, want, got)) = first_difference(expected, actual) {
                    println!("  line {}: expected {:?}, got {:?}", line, want, got);
                }
            }
        }
        if !outcome.passed() {
            failures += 1;
        }
    }

    println!();
    println!("checked {} cases, {} failed", outcomes.len(), failures);
    if failures > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
