//! Main CLI application

use crate::discovery::{Catalog, Console};
use crate::error::Result;
use crate::ui::Terminal;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Verbosity levels for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet = 0,
    Normal = 1,
    Verbose = 2,
}

impl Verbosity {
    /// Log filter used when `RUST_LOG` is not set
    pub fn filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        }
    }
}

/// Global options preceding the command name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    pub root: Option<PathBuf>,
    pub verbosity: Verbosity,

    /// Command name and its tokens, untouched
    pub command: Vec<String>,
}

/// Build the clap command for the global options.
///
/// Help and version flags are disabled so `--help` reaches the
/// dispatcher; everything from the first positional on is passed through.
fn build_command(program: &str) -> Command {
    Command::new(program.to_string())
        .version(env!("CARGO_PKG_VERSION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Project root (default: nearest directory with a Cargo.toml)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log discovery details")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Split the process arguments into global options and the command line
pub fn parse_global_args(args: &[String]) -> std::result::Result<GlobalArgs, clap::Error> {
    let program = args.first().map(String::as_str).unwrap_or("console");
    let matches = build_command(program).try_get_matches_from(args)?;

    Ok(GlobalArgs {
        root: matches.get_one::<String>("root").map(PathBuf::from),
        verbosity: get_verbosity(&matches),
        command: matches
            .get_many::<String>("command")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
    })
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter()));

    // A host may already have installed a subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the console with the built-in commands only
pub fn run() -> Result<i32> {
    run_with(Catalog::new())
}

/// Run the console with a host catalog of handler types
pub fn run_with(catalog: Catalog) -> Result<i32> {
    let args: Vec<String> = std::env::args().collect();
    let global = match parse_global_args(&args) {
        Ok(global) => global,
        Err(e) => {
            let _ = e.print();
            return Ok(e.exit_code());
        }
    };

    init_logging(global.verbosity);

    let console = match global.root {
        Some(root) => Console::with_root(root, catalog),
        None => Console::new(catalog),
    };

    // argv as the dispatcher sees it: program name, then the command line
    let mut argv = Vec::with_capacity(global.command.len() + 1);
    argv.push(args.first().cloned().unwrap_or_else(|| "console".to_string()));
    argv.extend(global.command);

    let mut ui = Terminal::default();
    console.run(&argv, &mut ui)
}
