use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use qualifier::config::QualifierConfig;
use qualifier::error::Result;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    cli::run(&cli, config)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("error"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<QualifierConfig> {
    let config_dir: Option<PathBuf> = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "qualifier", "qualifier").map(|d| d.config_dir().to_path_buf())
    });

    match config_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            QualifierConfig::load(&dir)
        }
        None => Ok(QualifierConfig::default()),
    }
}
