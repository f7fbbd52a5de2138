//! Command-line driver for the linedit core.
//!
//! # Responsibility
//! - Resolve the data file and logging settings from flags and environment.
//! - Turn each positional operation into one command of a single batch.
//! - Print listings and one summary line per failed command.
//!
//! # Usage
//!
//! ```bash
//! linedit_cli --file records.txt 'add=John;Doe;john@x.co' 'update=1;Jonathan' undo list
//! ```

use clap::Parser;
use linedit_core::{
    default_log_level, init_logging, Command, CommandError, CommandResult, EditSession, Invoker,
};
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_DATA_FILE: &str = "dataStore.txt";

#[derive(Parser, Debug)]
#[command(name = "linedit_cli")]
#[command(version)]
#[command(about = "Edit a flat file of `<First> <Last> <contact>` records with undo")]
struct Cli {
    /// Record file; created when missing.
    #[arg(long, short, env = "LINEDIT_DATA_PATH", default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "LINEDIT_LOG_DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error (defaults by build mode).
    #[arg(long, env = "LINEDIT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Operations run in order as one batch: `add=<first;last;contact>`,
    /// `delete=<pos>`, `update=<pos;first[;last[;contact]]>`, `list`, `undo`.
    #[arg(required = true)]
    ops: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut session = match EditSession::open(&cli.file) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("cannot open `{}`: {err}", cli.file.display());
            return ExitCode::FAILURE;
        }
    };

    let mut invoker = Invoker::new();
    for op in &cli.ops {
        match parse_op(op) {
            Ok(command) => invoker.push(command),
            Err(err) => {
                warn!(
                    "event=cli_parse module=cli status=error error_code={}",
                    err.kind().as_str()
                );
                println!("Invalid command `{op}`: {err}");
            }
        }
    }

    let report = invoker.run(&mut session);
    for lines in &report.listings {
        for line in lines {
            println!("{line}");
        }
    }
    for failure in &report.failures {
        println!(
            "Failed to execute {} (#{}): {}",
            failure.label,
            failure.position + 1,
            failure.error
        );
    }

    ExitCode::SUCCESS
}

/// Maps one `name[=payload]` argument to a command.
fn parse_op(op: &str) -> CommandResult<Command> {
    let (name, payload) = match op.split_once('=') {
        Some((name, payload)) => (name, Some(payload)),
        None => (op, None),
    };

    match (name.trim().to_ascii_lowercase().as_str(), payload) {
        ("add", Some(payload)) => Command::parse_add(payload),
        ("delete", Some(payload)) => Command::parse_delete(payload),
        ("update", Some(payload)) => Command::parse_update(payload),
        ("list", None) => Ok(Command::list()),
        ("undo", None) => Ok(Command::undo_last()),
        _ => Err(CommandError::InvalidInput(format!(
            "unknown operation `{op}`"
        ))),
    }
}
