use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tasklist::{Config, Session};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "TaskList CLI - Prioritized task list with search, filter and sort")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/tasklist/tasklist.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands interactively from stdin
    Shell,

    /// Execute commands from a script file and print the final view
    Run {
        /// Script with one command per line
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing; logs go to stderr so they never mix with the list
    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }

    let stdout = io::stdout();
    let mut session = Session::new(config, stdout.lock());

    match cli.command {
        Commands::Shell => {
            println!("TaskList shell - type 'help' for commands");
            session.run_lines(io::stdin().lock(), true)?;
        }
        Commands::Run { script } => {
            let file = File::open(&script).with_context(|| format!("Failed to open script {}", script.display()))?;
            session.run_lines(BufReader::new(file), false)?;
            session.render()?;
        }
    }

    Ok(())
}
