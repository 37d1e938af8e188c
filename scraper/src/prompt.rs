use crate::error::{Result, ScrapeError};
use std::io::{BufRead, Write};

/// Prints `message` and reads one trimmed line of input.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ScrapeError::Input(format!("no answer to prompt {message:?}")));
    }
    Ok(line.trim().to_string())
}

/// Splits a comma-separated location list, trimming each entry and
/// dropping empty ones.
pub fn parse_locations(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|location| !location.is_empty())
        .map(str::to_string)
        .collect()
}
