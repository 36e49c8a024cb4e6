mod commands;
mod config;
mod project;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{export, init, styles, ExportArgs, InitArgs, StylesArgs};
use tracing_subscriber::EnvFilter;

/// Pagewright CLI - export visual page layouts to static sites
#[derive(Parser, Debug)]
#[command(name = "pagewright")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pagewright project
    Init(InitArgs),

    /// Export a project to HTML, CSS and JavaScript
    Export(ExportArgs),

    /// Print a node's resolved styles for a viewport
    Styles(StylesArgs),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("PAGEWRIGHT_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Export(args) => export(args, &cwd),
            Command::Styles(args) => styles(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
