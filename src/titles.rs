//! Candidate inputs: titles read from a column of a CSV book dataset.

pub mod parse;

use std::fs;
use std::path::Path;

use log::info;
use nom::combinator::all_consuming;

use crate::alphabet::letter_count;
use crate::error::{Error, Result};

pub const DEFAULT_COLUMN: &str = "original_title";
pub const DEFAULT_TITLE_LENGTH: usize = 13;

/// Values of `column` in a CSV document whose first record is the header.
/// Header names are compared trimmed, ignoring a leading byte order mark.
/// Rows missing the column or leaving it empty are skipped.
pub fn parse_titles(text: &str, column: &str) -> Result<Vec<String>> {
    let records = match all_consuming(parse::records)(text) {
        Ok((_, records)) => records,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) =>
            return Err(Error::Csv { offset: text.len() - e.input.len() }),
        Err(nom::Err::Incomplete(_)) => return Err(Error::Csv { offset: text.len() }),
    };

    let mut rows = records.into_iter();
    let header = rows.next().unwrap_or_default();
    let idx = header.iter()
        .position(|name| name.trim_start_matches('\u{feff}').trim() == column)
        .ok_or_else(|| Error::MissingColumn(column.to_string()))?;

    Ok(rows
        .filter_map(|mut row| if idx < row.len() { Some(row.swap_remove(idx)) } else { None })
        .filter(|title| !title.trim().is_empty())
        .collect())
}

pub fn read_titles<P: AsRef<Path>>(path: P, column: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    info!("Reading titles from {:?}", path);
    let titles = parse_titles(&fs::read_to_string(path)?, column)?;
    info!("Read {} titles", titles.len());
    Ok(titles)
}

/// Titles with exactly `length` word characters.
pub fn titles_of_length(titles: Vec<String>, length: usize) -> Vec<String> {
    titles.into_iter().filter(|title| letter_count(title) == length).collect()
}
