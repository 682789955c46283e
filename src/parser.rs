//! Restricted array-literal parsing.
//!
//! The dump files each hold a single line containing a bracketed,
//! comma-separated list of numeric literals, e.g. `[0, 5, 2]` or
//! `[1.5, 2.0, 3.25]`. Only that syntax is accepted: numeric tokens
//! with an optional sign, fraction, and exponent. Nothing in the input
//! is ever evaluated as code.
//!
//! Only the first line of a file is read; any content past it is
//! ignored. An empty file is a parse error, not an empty array
//! (an empty array is spelled `[]`).

use crate::AuditError;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A parsed numeric literal.
///
/// The Int/Float distinction follows the literal's spelling: a token
/// containing `.`, `e`, or `E` is a float, otherwise an integer. The
/// distinction is load-bearing for the element-type check, where an
/// integer-spelled element does not count as floating-point even when
/// numerically equal to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// Numeric value regardless of spelling, for ordering comparisons.
    pub fn value(&self) -> f64 {
        match self {
            Scalar::Int(i) => *i as f64,
            Scalar::Float(f) => *f,
        }
    }

    /// True if this element was spelled as a float literal.
    pub fn is_float(&self) -> bool {
        matches!(self, Scalar::Float(_))
    }

    /// Interpret this element as an array position. Returns None for
    /// float-spelled or negative entries.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Scalar::Int(i) if *i >= 0 => Some(*i as usize),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            // {:?} keeps the trailing ".0" on whole floats
            Scalar::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// Load an array dump: open the file, read its first line, parse it.
pub fn load_array(path: &Path) -> Result<Vec<Scalar>, AuditError> {
    let file = File::open(path).map_err(|e| AuditError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut line = String::new();
    let bytes_read = BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| AuditError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    if bytes_read == 0 {
        return Err(AuditError::Parse {
            path: path.display().to_string(),
            message: "file is empty".to_string(),
        });
    }

    parse_array_literal(&line).map_err(|message| AuditError::Parse {
        path: path.display().to_string(),
        message,
    })
}

/// Parse one array literal. Errors carry a message only; the caller
/// attaches the file path.
pub fn parse_array_literal(line: &str) -> Result<Vec<Scalar>, String> {
    let trimmed = line.trim();

    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| "expected a bracketed array literal".to_string())?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .enumerate()
        .map(|(i, token)| {
            parse_scalar(token.trim())
                .ok_or_else(|| format!("invalid numeric literal {:?} at element {}", token.trim(), i))
        })
        .collect()
}

/// Parse a single numeric token. Spelling decides the variant: `.`,
/// `e`, or `E` makes it a float, otherwise an integer.
fn parse_scalar(token: &str) -> Option<Scalar> {
    if token.is_empty() {
        return None;
    }
    if token.contains(['.', 'e', 'E']) {
        token.parse::<f64>().ok().filter(|f| f.is_finite()).map(Scalar::Float)
    } else {
        token.parse::<i64>().ok().map(Scalar::Int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_array() {
        let parsed = parse_array_literal("[0, 5, 2]").unwrap();
        assert_eq!(parsed, vec![Scalar::Int(0), Scalar::Int(5), Scalar::Int(2)]);
    }

    #[test]
    fn parses_float_array() {
        let parsed = parse_array_literal("[1.5, 2.0, -3.25]").unwrap();
        assert_eq!(
            parsed,
            vec![Scalar::Float(1.5), Scalar::Float(2.0), Scalar::Float(-3.25)]
        );
    }

    #[test]
    fn exponent_spelling_is_float() {
        let parsed = parse_array_literal("[1e3]").unwrap();
        assert_eq!(parsed, vec![Scalar::Float(1000.0)]);
        assert!(parsed[0].is_float());
    }

    #[test]
    fn integer_spelling_is_not_float() {
        let parsed = parse_array_literal("[7]").unwrap();
        assert!(!parsed[0].is_float());
        assert_eq!(parsed[0].as_index(), Some(7));
    }

    #[test]
    fn negative_int_is_not_an_index() {
        assert_eq!(Scalar::Int(-1).as_index(), None);
        assert_eq!(Scalar::Float(2.0).as_index(), None);
    }

    #[test]
    fn empty_brackets_are_an_empty_array() {
        assert_eq!(parse_array_literal("[]").unwrap(), Vec::new());
        assert_eq!(parse_array_literal("[ ]").unwrap(), Vec::new());
    }

    #[test]
    fn rejects_missing_brackets() {
        assert!(parse_array_literal("1, 2, 3").is_err());
        assert!(parse_array_literal("").is_err());
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert!(parse_array_literal("[1, two, 3]").is_err());
        assert!(parse_array_literal("[1,, 3]").is_err());
        assert!(parse_array_literal("[__import__('os')]").is_err());
    }

    #[test]
    fn display_keeps_float_spelling() {
        assert_eq!(Scalar::Float(3.0).to_string(), "3.0");
        assert_eq!(Scalar::Int(3).to_string(), "3");
    }
}
