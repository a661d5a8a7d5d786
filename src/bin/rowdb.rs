//! rowdb Shell Binary
//!
//! Opens a database by name and runs the interactive shell on stdin/stdout.

use std::io;
use std::process;

use clap::Parser;
use rowdb::repl::Repl;
use rowdb::{Config, DbError, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// rowdb shell
#[derive(Parser, Debug)]
#[command(name = "rowdb")]
#[command(about = "Single-file row store with a line-oriented shell")]
#[command(version)]
struct Args {
    /// Database name (letters and underscores only)
    name: String,

    /// Directory holding database files
    #[arg(short, long, default_value = "db")]
    data_dir: String,
}

fn main() {
    // Logs go to stderr; stdout carries the shell protocol
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::debug!("rowdb v{}", rowdb::VERSION);

    let config = Config::builder().data_dir(&args.data_dir).build();

    let session = match Session::open(&args.name, config) {
        Ok(session) => session,
        Err(e @ DbError::InvalidDatabaseName(_)) => {
            println!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            tracing::error!("Failed to open database {}: {}", args.name, e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock());

    if let Err(e) = repl.run(session) {
        tracing::error!("Shell terminated: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
