use clap::{Args, Parser, Subcommand};
use fixup::config::{select_targets, ConfigFile, RunConfig, Targets, DEFAULT_EXTENSION};
use fixup::fixes::{self, CATALOGUE};
use fixup::{runner, FixupError, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "fixup",
    version,
    about = "One-shot regex cleanups for Dart sources"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available fixes
    List,
    /// Apply one fix to its targets
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Fix name, see `fixup list`
    fix: String,

    /// Files to process instead of the fix's built-in list
    #[arg(conflicts_with = "root")]
    paths: Vec<PathBuf>,

    /// Walk this directory recursively instead of using a file list
    #[arg(long)]
    root: Option<PathBuf>,

    /// Extension matched under --root
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    ext: String,

    /// JSON file with per-fix target overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory relative targets are resolved against
    #[arg(long)]
    base: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn list_fixes() -> io::Result<()> {
    let mut out = io::stdout().lock();
    let width = CATALOGUE.iter().map(|fix| fix.name().len()).max().unwrap_or(0);
    for fix in CATALOGUE {
        writeln!(out, "{:width$}  {}", fix.name(), fix.summary())?;
    }
    Ok(())
}

fn run_fix(args: RunArgs) -> Result<()> {
    let fix = fixes::lookup(&args.fix)?;

    let file = args.config.as_deref().map(ConfigFile::load).transpose()?;
    if let Some(file) = &file {
        file.check_names(fixes::is_known)?;
    }

    let cli_targets = match args.root {
        Some(root) => Some(Targets::tree(root, &args.ext)),
        None if !args.paths.is_empty() => Some(Targets::files(args.paths)),
        None => None,
    };
    let targets = select_targets(fix.name(), cli_targets, file.as_ref(), fix.default_targets());

    let base_dir = args
        .base
        .or_else(|| file.as_ref().and_then(|f| f.base_dir.clone()))
        .unwrap_or_else(|| PathBuf::from("."));
    let run_config = RunConfig::new(targets)
        .with_base_dir(base_dir)
        .with_dry_run(args.dry_run);

    let report = runner::run(fix, &run_config)?;

    let mut out = io::stdout().lock();
    if args.json {
        writeln!(out, "{}", report.to_json()?).map_err(|e| FixupError::io("<stdout>", e))?;
    } else {
        report
            .render_text(&mut out)
            .map_err(|e| FixupError::io("<stdout>", e))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::List => list_fixes().map_err(|e| FixupError::io("<stdout>", e)),
        Command::Run(args) => run_fix(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ {err}");
            ExitCode::FAILURE
        }
    }
}
