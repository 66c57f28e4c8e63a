use super::EXIT_SUCCESS;
use crate::sink::ConsoleSink;
use packsmith_core::print_styled_error;
use std::io::Read;
use std::path::Path;

pub fn run(file: Option<&Path>) -> Result<u8, String> {
    let log = match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("failed to read stdin: {e}"))?;
            buf
        }
    };
    print_styled_error(&mut ConsoleSink::stdout(), &log);
    Ok(EXIT_SUCCESS)
}
