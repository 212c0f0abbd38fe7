use std::io::{self, BufRead, Write};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input! Please enter a positive number.")]
    Deposit,
    #[error("Invalid input! Please enter a number between 1 and {max}.")]
    Lines { max: usize },
    #[error("Invalid input! Bet must be between ${min} and ${max}.")]
    Bet { min: u64, max: u64 },
}

/// Plain unsigned decimal: digits only, no sign, no separators.
fn parse_digits(raw: &str) -> Option<u64> {
    let s = raw.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

pub fn parse_deposit(raw: &str) -> Result<u64, InputError> {
    parse_digits(raw)
        .filter(|amount| *amount > 0)
        .ok_or(InputError::Deposit)
}

pub fn parse_lines(raw: &str, max_lines: usize) -> Result<usize, InputError> {
    parse_digits(raw)
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| (1..=max_lines).contains(n))
        .ok_or(InputError::Lines { max: max_lines })
}

pub fn parse_bet(raw: &str, min_bet: u64, max_bet: u64) -> Result<u64, InputError> {
    parse_digits(raw)
        .filter(|n| (min_bet..=max_bet).contains(n))
        .ok_or(InputError::Bet {
            min: min_bet,
            max: max_bet,
        })
}

/// Prompts until `parse` accepts a line, echoing each rejection.
///
/// Returns `Ok(None)` when the input reaches end of file.
pub fn prompt_until<I, O, T, F>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
    parse: F,
) -> io::Result<Option<T>>
where
    I: BufRead,
    O: Write,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}
