//! The continue/stop question asked between pomodoros.

use std::io::{self, BufRead, Write};

/// Question shown after each focus and rest pair.
pub const CONTINUE_PROMPT: &str = "Start another Pomodoro? (Y/N): ";

const RETRY_HINT: &str = "Please enter either \"Y\" or \"N\"";

/// Ask whether to start another pomodoro.
///
/// Re-asks until the answer is `y` or `n` (any case). End of input counts as
/// `n` so a closed stdin ends the session instead of spinning.
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails.
pub fn ask_continue<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    loop {
        write!(output, "{CONTINUE_PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            log::debug!("prompt input closed, stopping");
            return Ok(false);
        }

        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(output, "{RETRY_HINT}")?,
        }
    }
}

fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let answer = ask_continue(&mut reader, &mut out).unwrap();
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y\n"), Some(true));
        assert_eq!(parse_answer("Y"), Some(true));
        assert_eq!(parse_answer("n\r\n"), Some(false));
        assert_eq!(parse_answer("N"), Some(false));
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("maybe"), None);
        assert_eq!(parse_answer("yes"), None);
    }

    #[test]
    fn test_ask_continue_yes() {
        let (answer, out) = ask("Y\n");
        assert!(answer);
        assert_eq!(out, CONTINUE_PROMPT);
    }

    #[test]
    fn test_ask_continue_reprompts_on_invalid_input() {
        let (answer, out) = ask("\nmaybe\nn\n");
        assert!(!answer);
        assert_eq!(out.matches(CONTINUE_PROMPT).count(), 3);
        assert_eq!(out.matches(RETRY_HINT).count(), 2);
    }

    #[test]
    fn test_ask_continue_eof_stops() {
        let (answer, _) = ask("maybe\n");
        assert!(!answer);
    }
}
