#![forbid(unsafe_code)]

//! Command-line argument parsing for the manual.
//!
//! Parses args manually (no external dependencies). Supports environment
//! variable overrides via the `ACADEMY_MANUAL_*` prefix; flags win over the
//! environment, the environment wins over defaults.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use crate::layout::Columns;
use crate::registry::SectionId;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
Space Academy AI Training Manual

USAGE:
    space-academy-manual [OPTIONS]

OPTIONS:
    --section=ID        Initially selected section (default: intro)
    --columns=N         Grid columns: auto (default), 1 or 2
    --ascii             Use ASCII icons and borders
    --no-mouse          Disable mouse capture
    --dump              Render one frame to stdout as plain text and exit
    --width=N           Width for --dump (default: 100)
    --height=N          Height for --dump (default: full document)
    --list              Print section ids and titles and exit
    --exit-after-ms=N   Quit automatically after N ms (0 = never)
    --log-file=PATH     Write tracing output to PATH
    --help, -h          Show this help message
    --version, -V       Show version

SECTIONS:
    1  intro            Welcome to Space Academy: AI Division
    2  brain            The Neural Core (DQNAgent)
    3  memory           The Memory Banks (ReplayBuffer)
    4  rewards          The Motivation System (RewardShaper)
    5  training         The Training Protocol
    6  achievements     Mission Objectives

KEYBINDINGS:
    click, 1-6          Open a section
    arrows, Tab         Move the focus ring
    Enter, Space        Open the focused section
    PgUp/PgDn/Home/End  Scroll
    m                   Toggle mouse capture
    q, Esc, Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    ACADEMY_MANUAL_SECTION        Override --section
    ACADEMY_MANUAL_COLUMNS        Override --columns
    ACADEMY_MANUAL_ASCII          Set to 1 for --ascii
    ACADEMY_MANUAL_EXIT_AFTER_MS  Override --exit-after-ms
    ACADEMY_MANUAL_LOG            Override --log-file
    RUST_LOG                      Log filter (default: info)";

/// Width used by `--dump` when `--width` is not given.
pub const DEFAULT_DUMP_WIDTH: u16 = 100;

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Section expanded at startup (`None` = registry default).
    pub section: Option<SectionId>,
    pub columns: Columns,
    pub ascii: bool,
    /// Whether mouse events are captured.
    pub mouse: bool,
    pub dump: bool,
    pub width: u16,
    /// Height for `--dump`; `None` renders the whole document.
    pub height: Option<u16>,
    pub list: bool,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            section: None,
            columns: Columns::Auto,
            ascii: false,
            mouse: true,
            dump: false,
            width: DEFAULT_DUMP_WIDTH,
            height: None,
            list: false,
            exit_after_ms: 0,
            log_file: None,
        }
    }
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(Opts),
    Help,
    Version,
}

/// A command-line error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    UnknownArgument(String),
    InvalidValue {
        flag: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
            Self::InvalidValue {
                flag,
                value,
                reason,
            } => write!(f, "Invalid {flag} value '{value}': {reason}"),
        }
    }
}

impl std::error::Error for CliError {}

impl Opts {
    /// Parse the process arguments and environment.
    ///
    /// Exits the process for `--help`, `--version` and invalid input.
    pub fn parse() -> Self {
        match parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(CliAction::Run(opts)) => opts,
            Ok(CliAction::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(CliAction::Version) => {
                println!("space-academy-manual {VERSION}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{e}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }
}

/// Parse `args` with environment lookups through `var`.
///
/// Invalid environment values are ignored; invalid flags are errors.
pub fn parse_from<I, S, F>(args: I, var: F) -> Result<CliAction, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    let mut opts = Opts::default();

    // Apply environment variable defaults first
    if let Some(val) = var("ACADEMY_MANUAL_SECTION")
        && let Ok(id) = val.parse()
    {
        opts.section = Some(id);
    }
    if let Some(val) = var("ACADEMY_MANUAL_COLUMNS")
        && let Ok(columns) = val.parse()
    {
        opts.columns = columns;
    }
    if let Some(val) = var("ACADEMY_MANUAL_ASCII") {
        opts.ascii = is_truthy(&val);
    }
    if let Some(val) = var("ACADEMY_MANUAL_EXIT_AFTER_MS")
        && let Ok(n) = val.trim().parse()
    {
        opts.exit_after_ms = n;
    }
    if let Some(val) = var("ACADEMY_MANUAL_LOG")
        && !val.is_empty()
    {
        opts.log_file = Some(PathBuf::from(val));
    }

    // Parse command-line args (override env vars)
    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "--help" | "-h" => return Ok(CliAction::Help),
            "--version" | "-V" => return Ok(CliAction::Version),
            "--ascii" => opts.ascii = true,
            "--no-mouse" => opts.mouse = false,
            "--dump" => opts.dump = true,
            "--list" => opts.list = true,
            other => {
                if let Some(val) = other.strip_prefix("--section=") {
                    let id = val.parse().map_err(|e| invalid("--section", val, e))?;
                    opts.section = Some(id);
                } else if let Some(val) = other.strip_prefix("--columns=") {
                    opts.columns = val.parse().map_err(|e| invalid("--columns", val, e))?;
                } else if let Some(val) = other.strip_prefix("--width=") {
                    opts.width = parse_dimension("--width", val)?;
                } else if let Some(val) = other.strip_prefix("--height=") {
                    opts.height = Some(parse_dimension("--height", val)?);
                } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                    opts.exit_after_ms = val
                        .parse()
                        .map_err(|e| invalid("--exit-after-ms", val, e))?;
                } else if let Some(val) = other.strip_prefix("--log-file=") {
                    if val.is_empty() {
                        return Err(invalid("--log-file", val, "path is empty"));
                    }
                    opts.log_file = Some(PathBuf::from(val));
                } else {
                    return Err(CliError::UnknownArgument(other.to_string()));
                }
            }
        }
    }

    Ok(CliAction::Run(opts))
}

fn invalid(flag: &'static str, value: &str, reason: impl fmt::Display) -> CliError {
    CliError::InvalidValue {
        flag,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_dimension(flag: &'static str, val: &str) -> Result<u16, CliError> {
    match val.parse::<u16>() {
        Ok(0) => Err(invalid(flag, val, "must be at least 1")),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(flag, val, e)),
    }
}

fn is_truthy(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn run(args: &[&str], env: &[(&str, &str)]) -> Result<CliAction, CliError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        parse_from(args.iter().copied(), |key| env.get(key).cloned())
    }

    fn opts(args: &[&str], env: &[(&str, &str)]) -> Opts {
        match run(args, env) {
            Ok(CliAction::Run(opts)) => opts,
            other => panic!("expected options, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = opts(&[], &[]);
        assert_eq!(opts, Opts::default());
        assert_eq!(opts.section, None);
        assert_eq!(opts.columns, Columns::Auto);
        assert!(opts.mouse);
        assert!(!opts.ascii);
        assert_eq!(opts.width, DEFAULT_DUMP_WIDTH);
        assert_eq!(opts.exit_after_ms, 0);
    }

    #[test]
    fn flags_are_parsed() {
        let opts = opts(
            &[
                "--section=memory",
                "--columns=1",
                "--ascii",
                "--no-mouse",
                "--dump",
                "--width=60",
                "--height=30",
                "--exit-after-ms=250",
                "--log-file=/tmp/manual.log",
            ],
            &[],
        );
        assert_eq!(opts.section, Some(SectionId::Memory));
        assert_eq!(opts.columns, Columns::One);
        assert!(opts.ascii);
        assert!(!opts.mouse);
        assert!(opts.dump);
        assert_eq!(opts.width, 60);
        assert_eq!(opts.height, Some(30));
        assert_eq!(opts.exit_after_ms, 250);
        assert_eq!(opts.log_file, Some(PathBuf::from("/tmp/manual.log")));
    }

    #[test]
    fn env_overrides_defaults() {
        let opts = opts(
            &[],
            &[
                ("ACADEMY_MANUAL_SECTION", "rewards"),
                ("ACADEMY_MANUAL_COLUMNS", "2"),
                ("ACADEMY_MANUAL_ASCII", "yes"),
                ("ACADEMY_MANUAL_EXIT_AFTER_MS", "10"),
                ("ACADEMY_MANUAL_LOG", "manual.log"),
            ],
        );
        assert_eq!(opts.section, Some(SectionId::Rewards));
        assert_eq!(opts.columns, Columns::Two);
        assert!(opts.ascii);
        assert_eq!(opts.exit_after_ms, 10);
        assert_eq!(opts.log_file, Some(PathBuf::from("manual.log")));
    }

    #[test]
    fn flags_override_env() {
        let opts = opts(
            &["--section=brain", "--columns=auto"],
            &[
                ("ACADEMY_MANUAL_SECTION", "rewards"),
                ("ACADEMY_MANUAL_COLUMNS", "1"),
            ],
        );
        assert_eq!(opts.section, Some(SectionId::Brain));
        assert_eq!(opts.columns, Columns::Auto);
    }

    #[test]
    fn invalid_env_is_ignored() {
        let opts = opts(
            &[],
            &[
                ("ACADEMY_MANUAL_SECTION", "warp-drive"),
                ("ACADEMY_MANUAL_EXIT_AFTER_MS", "soon"),
            ],
        );
        assert_eq!(opts.section, None);
        assert_eq!(opts.exit_after_ms, 0);
    }

    #[test]
    fn help_and_version() {
        assert_eq!(run(&["--list", "-h"], &[]), Ok(CliAction::Help));
        assert_eq!(run(&["--version"], &[]), Ok(CliAction::Version));
    }

    #[test]
    fn unknown_argument_is_an_error() {
        let err = run(&["--warp"], &[]).unwrap_err();
        assert_eq!(err, CliError::UnknownArgument("--warp".into()));
        assert_eq!(err.to_string(), "Unknown argument: --warp");
    }

    #[test]
    fn invalid_values_name_the_flag() {
        let err = run(&["--section=warp"], &[]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid --section value 'warp'"));
        assert!(err.to_string().contains("intro"));

        let err = run(&["--width=0"], &[]).unwrap_err();
        assert!(err.to_string().contains("at least 1"));

        assert!(run(&["--columns=3"], &[]).is_err());
        assert!(run(&["--exit-after-ms=-1"], &[]).is_err());
    }
}
