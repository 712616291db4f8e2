use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qualifier")]
#[command(version)]
#[command(about = "Keep quotes, optionally uwu-ified or in pig latin", long_about = None)]
#[command(after_help = "Commands (typed at the prompt or passed with --command):
  quote \"text\"            store a quote as typed
  quote uwu \"text\"        store an uwu-ified quote
  quote piglatin \"text\"   store a pig latin quote
  quote list              list stored quotes

Type quit, q or exit to leave the prompt.")]
pub struct Cli {
    /// Run a single command and exit instead of starting the prompt
    #[arg(short, long, value_name = "LINE")]
    pub command: Option<String>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
