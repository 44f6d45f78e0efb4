use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{ArgAction, Args, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use polydiv::format::FormatRules;
use polydiv::{Rule, Wording};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RuleArg {
    /// Every prefix divisible by its length
    Exact,
    /// Prefix modulo 2520, divisor cycling through 1..=10
    Cyclic,
}

impl From<RuleArg> for Rule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Exact => Rule::Exact,
            RuleArg::Cyclic => Rule::Cyclic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum WordingArg {
    /// "secure" / "not secure"
    Plain,
    /// "Firewall is secure!" / "Vulnerabilities detected:"
    Firewall,
}

impl From<WordingArg> for Wording {
    fn from(arg: WordingArg) -> Self {
        match arg {
            WordingArg::Plain => Wording::Plain,
            WordingArg::Firewall => Wording::Firewall,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "polydiv",
    about = "Report which passcodes are not polydivisible",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    #[command(flatten)]
    pub(crate) check: CheckArgs,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub(crate) quiet: bool,
}

/// Ids of the `check` flags that may also appear before any subcommand.
const TOP_LEVEL_CHECK_ARGS: [&str; 5] = ["rule", "wording", "explain", "fail_on_insecure", "input"];

impl Cli {
    /// Parses the process arguments, exiting with a usage error on failure.
    pub(crate) fn parse_checked() -> Self {
        Self::try_parse_checked_from(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    /// Parses `args` like [`Parser::try_parse_from`], then rejects the combinations clap cannot
    /// express on its own: top-level `check` flags given alongside a subcommand, and `--quiet`
    /// together with `--explain`.
    pub(crate) fn try_parse_checked_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Self::command();
        let matches = command.try_get_matches_from_mut(args)?;

        if let Some((name, _)) = matches.subcommand() {
            for id in TOP_LEVEL_CHECK_ARGS {
                if matches.value_source(id) == Some(ValueSource::CommandLine) {
                    return Err(command.error(
                        ErrorKind::ArgumentConflict,
                        format!(
                            "'--{}' cannot be used before the '{}' subcommand",
                            id.replace('_', "-"),
                            name
                        ),
                    ));
                }
            }
        }

        let cli = Self::from_arg_matches(&matches).map_err(|err| err.format(&mut command))?;
        if cli.quiet && cli.explain() {
            return Err(command.error(
                ErrorKind::ArgumentConflict,
                "'--quiet' cannot be used with '--explain'",
            ));
        }
        Ok(cli)
    }

    /// Whether the `check` run, explicit or implied, asked for `--explain`.
    pub(crate) fn explain(&self) -> bool {
        match &self.command {
            None => self.check.explain,
            Some(Command::Check(args)) => args.explain,
            Some(_) => false,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Check an input record and print the report (the default)
    Check(CheckArgs),
    /// Validate an input file against the strict problem format
    Validate(ValidateArgs),
    /// Write sample and secret test cases
    Generate(GenerateArgs),
    /// Replay a test set and compare against its answers
    Verify(VerifyArgs),
}

#[derive(Debug, Clone, Args)]
pub(crate) struct CheckArgs {
    /// Divisibility rule to apply
    #[arg(long, value_enum, env = "POLYDIV_RULE", default_value_t = RuleArg::Exact)]
    pub(crate) rule: RuleArg,

    /// Status-line wording
    #[arg(long, value_enum, env = "POLYDIV_WORDING", default_value_t = WordingArg::Plain)]
    pub(crate) wording: WordingArg,

    /// Log the first failing prefix of each rejected passcode
    #[arg(long, default_value_t = false)]
    pub(crate) explain: bool,

    /// Exit with status 1 when any passcode is rejected
    #[arg(long = "fail-on-insecure", default_value_t = false)]
    pub(crate) fail_on_insecure: bool,

    /// Read the record from a file instead of stdin
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct ValidateArgs {
    /// Read the record from a file instead of stdin
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,

    /// Largest allowed count
    #[arg(long = "max-count", default_value_t = 5000)]
    pub(crate) max_count: usize,

    /// Longest allowed passcode
    #[arg(long = "max-digits", default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..))]
    pub(crate) max_digits: u16,

    /// Accept passcodes that start with 0
    #[arg(long = "allow-leading-zero", default_value_t = false)]
    pub(crate) allow_leading_zero: bool,
}

impl ValidateArgs {
    pub(crate) fn rules(&self) -> FormatRules {
        FormatRules {
            max_count: self.max_count,
            max_digits: usize::from(self.max_digits),
            allow_leading_zero: self.allow_leading_zero,
            ..FormatRules::default()
        }
    }
}

#[derive(Debug, Clone, Args)]
pub(crate) struct GenerateArgs {
    /// Directory that receives sample/ and secret/
    #[arg(long)]
    pub(crate) out: PathBuf,

    /// Seed for the random source
    #[arg(long, default_value_t = polydiv::generate::DEFAULT_SEED)]
    pub(crate) seed: u64,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct VerifyArgs {
    /// Directory holding sample/ and secret/
    #[arg(long)]
    pub(crate) data: PathBuf,
}
