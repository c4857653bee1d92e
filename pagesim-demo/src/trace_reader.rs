//! TraceReader - reads the reference trace fed to the simulator.
//!
//! A trace is plain text, one memory reference per line:
//!
//! | column    | contents                                         |
//! |-----------|--------------------------------------------------|
//! | operation | `R` (read) or `W` (write), in either case        |
//! | address   | decimal (`4096`) or hexadecimal (`0x1000`)       |
//!
//! Blank lines and lines starting with `#` are skipped, so traces can be
//! annotated. Anything else aborts the run with the offending line number.
//!
//! Hexadecimal addresses may have any number of digits and leading zeros,
//! as long as the value fits in a `usize`.

use std::io::{BufRead, Lines};

use pagesim::Access;

use crate::error::{DemoError, TraceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    pub access: Access,
    pub address: usize,
}

fn parse_access(token: &str) -> Result<Access, TraceError> {
    match token {
        "R" | "r" => Ok(Access::Read),
        "W" | "w" => Ok(Access::Write),
        _ => Err(TraceError::UnknownOp(token.to_string())),
    }
}

fn parse_hex_address(token: &str, digits: &str) -> Result<usize, TraceError> {
    // hex::decode works on whole bytes.
    let padded = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };

    let bytes = hex::decode(&padded).map_err(|_| TraceError::BadAddress(token.to_string()))?;

    let significant: Vec<u8> = bytes.into_iter().skip_while(|&b| b == 0).collect();
    if significant.len() > std::mem::size_of::<usize>() {
        return Err(TraceError::AddressTooWide(token.to_string()));
    }

    Ok(significant
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | usize::from(b)))
}

fn parse_address(token: &str) -> Result<usize, TraceError> {
    if let Some(digits) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        if digits.is_empty() {
            return Err(TraceError::BadAddress(token.to_string()));
        }
        return parse_hex_address(token, digits);
    }

    token.parse::<usize>().map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => TraceError::AddressTooWide(token.to_string()),
        _ => TraceError::BadAddress(token.to_string()),
    })
}

/// Parses a single trace line. `Ok(None)` means the line carries no
/// reference.
pub fn parse_line(line: &str) -> Result<Option<TraceEntry>, TraceError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();

    let access = match tokens.next() {
        Some(token) => parse_access(token)?,
        None => return Ok(None),
    };
    let address = parse_address(tokens.next().ok_or(TraceError::MissingAddress)?)?;

    if let Some(extra) = tokens.next() {
        return Err(TraceError::TrailingInput(extra.to_string()));
    }

    Ok(Some(TraceEntry { access, address }))
}

pub struct TraceReader<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        TraceReader {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceEntry, DemoError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            match parse_line(&line) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => continue,
                Err(reason) => {
                    return Some(Err(DemoError::Trace {
                        line: self.line_no,
                        reason,
                    }))
                }
            }
        }
    }
}
