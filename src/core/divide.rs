//! Divides two numbers read from the first two lines of a text file.

use std::path::Path;

use crate::core::reader;
use crate::errors::DivideError;

/// Reads the file and parses its first two lines as the dividend and
/// divisor. Extra lines are ignored.
pub fn load_operands(path: &Path) -> Result<(f64, f64), DivideError> {
    let lines = reader::read_lines(path)?;
    parse_operands(&lines)
}

/// Parses the first two entries of `lines` as numbers.
pub fn parse_operands(lines: &[String]) -> Result<(f64, f64), DivideError> {
    if lines.len() < 2 {
        return Err(DivideError::MissingOperands(lines.len()));
    }
    let dividend = parse_number(&lines[0], 1)?;
    let divisor = parse_number(&lines[1], 2)?;
    Ok((dividend, divisor))
}

/// Returns `dividend / divisor`, rejecting a zero divisor.
pub fn divide(dividend: f64, divisor: f64) -> Result<f64, DivideError> {
    if divisor == 0.0 {
        return Err(DivideError::DivideByZero);
    }
    Ok(dividend / divisor)
}

fn parse_number(text: &str, line: usize) -> Result<f64, DivideError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| DivideError::MalformedNumber {
            line,
            text: trimmed.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operands_are_trimmed_before_parsing() {
        let lines = vec!["  10.5 ".to_string(), "\t2".to_string()];

        assert_eq!(parse_operands(&lines).unwrap(), (10.5, 2.0));
    }

    #[test]
    fn malformed_text_names_the_offending_line() {
        let lines = vec!["10".to_string(), "two".to_string()];

        let err = parse_operands(&lines).unwrap_err();

        assert!(matches!(
            err,
            DivideError::MalformedNumber { line: 2, .. }
        ));
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert!(matches!(divide(1.0, 0.0), Err(DivideError::DivideByZero)));
        assert_eq!(divide(9.0, 3.0).unwrap(), 3.0);
    }
}
