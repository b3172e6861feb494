//! Integer operand parsing.

use crate::error::{Error, Result};
use crate::operation::{Operand, Operation};
use clio::Input;
use log::{info, warn};
use std::io::{BufRead, BufReader};

/// Parses an integer literal.
///
/// Accepts an optional leading `-`, decimal digits or a `0x`, `0b` or `0o`
/// prefix, and `_` digit separators. The second value reports whether the
/// literal was written with a radix prefix.
fn parse_prefixed(token: &str) -> Option<(i64, bool)> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let (radix, digits) = match body.get(..2) {
        Some("0x" | "0X") => (16, &body[2..]),
        Some("0b" | "0B") => (2, &body[2..]),
        Some("0o" | "0O") => (8, &body[2..]),
        _ => (10, body),
    };

    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits, radix).ok()?;
    let value = if negative { magnitude.checked_neg()? } else { magnitude };
    Some((value, radix != 10))
}

/// Parses an integer literal into a 64-bit value.
#[must_use]
pub fn parse_literal(token: &str) -> Option<i64> {
    parse_prefixed(token).map(|(value, _)| value)
}

/// Checks that `value` can be read as the operand type of `operation`.
///
/// Signed operations also take non-negative prefixed literals up to
/// `u32::MAX`, which are the two's-complement bit pattern of a negative
/// `i32`.
fn fits_operand(value: i64, prefixed: bool, operation: Operation) -> bool {
    match operation.operand() {
        Operand::Unsigned => u32::try_from(value).is_ok(),
        Operand::Signed => {
            i32::try_from(value).is_ok() || (prefixed && u32::try_from(value).is_ok())
        }
    }
}

/// Reads whitespace or comma separated operands for `operation`.
///
/// Text after a `#` on a line is ignored.
pub fn read_values(reader: impl BufRead, operation: Operation) -> Result<Vec<i64>> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(Error::ReadInput)?;
        let line_number = idx + 1;
        let content = line.split_once('#').map_or(line.as_str(), |(c, _)| c);

        for token in content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let (value, prefixed) =
                parse_prefixed(token).ok_or_else(|| Error::InvalidValue {
                    line: line_number,
                    token: token.to_string(),
                })?;

            if !fits_operand(value, prefixed, operation) {
                return Err(Error::ValueOutOfRange {
                    line: line_number,
                    token: token.to_string(),
                    operation,
                });
            }

            values.push(value);
        }
    }

    if values.is_empty() {
        return Err(Error::EmptyInput);
    }

    if values.len() % operation.arity() != 0 {
        warn!(
            "Read {} values, but '{}' consumes them in groups of {}",
            values.len(),
            operation,
            operation.arity()
        );
    }

    Ok(values)
}

/// Reads operands for `operation` from a file or standard input.
pub fn read_input(input: &mut Input, operation: Operation) -> Result<Vec<i64>> {
    if !input.is_std() && input.is_empty().unwrap_or(false) {
        return Err(Error::EmptyInput);
    }

    let source = describe(input);
    let values = read_values(BufReader::new(input), operation)?;
    info!("Read {} values from {}", values.len(), source);
    Ok(values)
}

fn describe(input: &Input) -> String {
    if input.is_std() {
        "<stdin>".to_string()
    } else {
        input.path().to_string_lossy().into_owned()
    }
}
