//! Startup prompt asking how many points win the match

use std::io::{self, BufRead, Write};

pub const POINTS_PROMPT: &str = "Enter the number of points to win: ";

/// Why an answer to the prompt was rejected. The message is shown before asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PointsError {
    #[error("Invalid input. Please enter an integer.")]
    NotAnInteger,
    #[error("Please enter a positive number.")]
    NotPositive,
    #[error("Please enter a number no larger than {max}.", max = u32::MAX)]
    TooLarge,
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Input closed before a valid number was entered")]
    InputClosed,
}

/// Parse one answer: an optionally signed decimal integer, surrounding whitespace allowed
pub fn parse_points(input: &str) -> Result<u32, PointsError> {
    let text = input.trim();
    let digits = text.strip_prefix(&['+', '-'][..]).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PointsError::NotAnInteger);
    }
    if text.starts_with('-') || digits.bytes().all(|b| b == b'0') {
        return Err(PointsError::NotPositive);
    }
    digits.parse::<u32>().map_err(|_| PointsError::TooLarge)
}

/// Ask until a positive integer is entered. Only I/O failure or end of input stops it.
pub fn prompt_points_to_win<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<u32, PromptError> {
    let mut line = String::new();
    loop {
        write!(output, "{POINTS_PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        match parse_points(&line) {
            Ok(points) => return Ok(points),
            Err(err) => {
                tracing::debug!(input = line.trim(), %err, "rejected points-to-win answer");
                writeln!(output, "{err}")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_prompt(answers: &str) -> (Result<u32, PromptError>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_points_to_win(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_points_valid() {
        assert_eq!(parse_points("5"), Ok(5));
        assert_eq!(parse_points("  11\n"), Ok(11));
        assert_eq!(parse_points("+3"), Ok(3));
        assert_eq!(parse_points("007"), Ok(7));
    }

    #[test]
    fn test_parse_points_not_positive() {
        assert_eq!(parse_points("0"), Err(PointsError::NotPositive));
        assert_eq!(parse_points("-4"), Err(PointsError::NotPositive));
        assert_eq!(parse_points("-0"), Err(PointsError::NotPositive));
    }

    #[test]
    fn test_parse_points_not_an_integer() {
        assert_eq!(parse_points(""), Err(PointsError::NotAnInteger));
        assert_eq!(parse_points("five"), Err(PointsError::NotAnInteger));
        assert_eq!(parse_points("2.5"), Err(PointsError::NotAnInteger));
        assert_eq!(parse_points("-"), Err(PointsError::NotAnInteger));
        assert_eq!(parse_points("1 2"), Err(PointsError::NotAnInteger));
    }

    #[test]
    fn test_parse_points_too_large() {
        assert_eq!(parse_points("99999999999"), Err(PointsError::TooLarge));
    }

    #[test]
    fn test_prompt_accepts_first_valid_answer() {
        let (result, output) = run_prompt("3\n");
        assert_eq!(result.unwrap(), 3);
        assert_eq!(output, POINTS_PROMPT);
    }

    #[test]
    fn test_prompt_reprompts_until_valid() {
        let (result, output) = run_prompt("abc\n0\n-2\n4\n");
        assert_eq!(result.unwrap(), 4);
        let expected = format!(
            "{p}Invalid input. Please enter an integer.\n\
             {p}Please enter a positive number.\n\
             {p}Please enter a positive number.\n\
             {p}",
            p = POINTS_PROMPT
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_prompt_last_line_without_newline() {
        let (result, _output) = run_prompt("x\n8");
        assert_eq!(result.unwrap(), 8);
    }

    #[test]
    fn test_prompt_input_closed() {
        let (result, _output) = run_prompt("nope\n");
        assert!(matches!(result, Err(PromptError::InputClosed)));
    }
}
