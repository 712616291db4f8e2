use colored::Colorize;
use qualifier::api::{CmdMessage, CmdResult, MessageLevel};
use qualifier::config::ListFormat;
use qualifier::error::QualifierError;

pub(super) fn print_result(result: &CmdResult, format: ListFormat) {
    for quote in &result.added_quotes {
        println!("{}", quote);
    }
    for line in render_list(&result.listed_quotes, format) {
        println!("{}", line);
    }
    print_messages(&result.messages);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_error(error: &QualifierError) {
    eprintln!("{} {}", "Error:".red(), error);
}

fn render_list(quotes: &[String], format: ListFormat) -> Vec<String> {
    match format {
        ListFormat::Plain => quotes.to_vec(),
        ListFormat::Markdown => quotes
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{}. `{}`", i + 1, q))
            .collect(),
    }
}
