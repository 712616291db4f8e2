use crate::args::Cli;
use qualifier::api::QualifierApi;
use qualifier::config::QualifierConfig;
use qualifier::error::Result;
use qualifier::store::memory::InMemoryStore;
use std::io::{self, IsTerminal};

mod print;
mod prompt;

pub fn run(cli: &Cli, config: QualifierConfig) -> Result<()> {
    let mut api = QualifierApi::new(InMemoryStore::new(), config.rules());

    if let Some(line) = &cli.command {
        let result = api.run_command(line)?;
        print::print_result(&result, config.list_format);
        return Ok(());
    }

    let stdin = io::stdin();
    let show_prompt = stdin.is_terminal();
    prompt::run(&mut api, &config, stdin.lock(), show_prompt)
}
