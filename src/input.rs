use std::io::BufRead;

use crate::{DigitString, PolydivError};

/// A parsed input record: the declared count and exactly that many digit strings.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Record {
    pub count: usize,
    pub codes: Vec<DigitString>,
}

/// Parses the record format: a count line, then `count` lines of digits.
///
/// The count is a plain run of decimal digits, with no sign. Lines are trimmed of surrounding
/// whitespace. Blank lines after the last data line are
/// ignored; anything else there is an error, as is a missing or malformed data line.
pub fn parse_record(text: &str) -> Result<Record, PolydivError> {
    let mut lines = text.lines();

    let count_text = lines.next().unwrap_or("").trim();
    let invalid_count = || PolydivError::InvalidCount {
        text: count_text.to_string(),
    };
    if !count_text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid_count());
    }
    let count: usize = count_text.parse().map_err(|_| invalid_count())?;

    let mut codes = Vec::with_capacity(count.min(1 << 16));
    for index in 0..count {
        let line = lines.next().ok_or(PolydivError::MissingLine {
            expected: count,
            found: index,
        })?;
        let code = DigitString::new(line.trim()).map_err(|source| PolydivError::Digits {
            line: index + 2,
            source,
        })?;
        codes.push(code);
    }

    if let Some(offset) = lines.position(|line| !line.trim().is_empty()) {
        return Err(PolydivError::TrailingInput {
            line: count + 2 + offset,
        });
    }

    Ok(Record { count, codes })
}

/// Reads all of `reader` and parses it with [`parse_record`].
pub fn read_record<R: BufRead>(mut reader: R) -> Result<Record, PolydivError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_record(&text)
}
