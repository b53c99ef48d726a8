#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;
use top_core::utils::{GenericError, GenericResult};

/// Reads the next line into the buffer, returns amount of read bytes: zero means end of input.
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> GenericResult<usize> {
    buffer.clear();
    reader.read_line(buffer).map_err(GenericError::from)
}

/// Reads the next line which has to exist.
pub(crate) fn read_required_line<R: Read>(
    reader: &mut BufReader<R>,
    buffer: &mut String,
    line_number: usize,
) -> GenericResult<()> {
    match read_line(reader, buffer)? {
        0 => Err(format!("unexpected end of input at line {line_number}").into()),
        _ => Ok(()),
    }
}

/// Parses a whitespace separated token of the line at the given position.
pub(crate) fn parse_token<T: FromStr>(line: &str, position: usize, line_number: usize) -> GenericResult<T> {
    let token = line
        .split_whitespace()
        .nth(position)
        .ok_or_else(|| GenericError::from(format!("missing value at position {position} in line {line_number}")))?;

    token.parse::<T>().map_err(|_| format!("cannot parse '{token}' in line {line_number}").into())
}
