use super::print::{print_error, print_result};
use qualifier::api::QualifierApi;
use qualifier::config::QualifierConfig;
use qualifier::error::Result;
use qualifier::store::QuoteStore;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Reads commands line by line until an exit command or end of input.
///
/// A failing command prints its error and the loop moves on to the next line.
/// Bytes that are not valid UTF-8 are replaced rather than ending the session.
pub(super) fn run<S: QuoteStore, R: BufRead>(
    api: &mut QualifierApi<S>,
    config: &QualifierConfig,
    mut input: R,
    show_prompt: bool,
) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        if show_prompt {
            print!("{}", config.prompt);
            io::stdout().flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            break;
        }
        let line = decode_line(&buf);

        if config.is_exit_command(&line) {
            debug!(command = %line, "exit requested");
            break;
        }

        match api.run_command(&line) {
            Ok(result) => print_result(&result, config.list_format),
            Err(e) => print_error(&e),
        }
    }

    Ok(())
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
