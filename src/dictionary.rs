//! Webster-style dictionary text: upper-case headword lines, each followed by
//! its definition, up to the Project Gutenberg end marker.

pub mod classifier;

use std::fs;
use std::path::Path;

use derive_new::new;
use log::info;
use serde::{Deserialize, Serialize};

use crate::alphabet::normalize;
use crate::error::Result;
use crate::wordlist::plural::pluralize;

pub use classifier::KeywordClassifier;

const END_MARKER: &str = "End of Project";

/// Longest headword kept by [`dictionary_words`] unless told otherwise.
pub const DEFAULT_MAX_WORD_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct DictionaryEntry {
    pub word: String,
    /// The headword line and every line up to the next headword.
    pub definition: String,
}

fn is_headword(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_uppercase()) && line.to_uppercase() == line
}

pub fn parse_entries(text: &str) -> Vec<DictionaryEntry> {
    let lines: Vec<&str> = text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut entries = vec![];
    let mut last_word_line: Option<usize> = None;
    let mut end = lines.len();
    for (n, line) in lines.iter().enumerate() {
        let at_end = line.starts_with(END_MARKER);
        if at_end || is_headword(line) {
            if let Some(start) = last_word_line {
                entries.push(DictionaryEntry::new(lines[start].to_string(), lines[start..n].join("\n")));
            }
            last_word_line = Some(n);
            if at_end {
                end = n;
                break;
            }
        }
    }
    if let Some(start) = last_word_line.filter(|&start| start < end) {
        entries.push(DictionaryEntry::new(lines[start].to_string(), lines[start..end].join("\n")));
    }
    entries
}

pub fn read_entries<P: AsRef<Path>>(path: P) -> Result<Vec<DictionaryEntry>> {
    let path = path.as_ref();
    info!("Reading dictionary from {:?}", path);
    let entries = parse_entries(&fs::read_to_string(path)?);
    info!("Parsed {} dictionary entries", entries.len());
    Ok(entries)
}

/// Searchable words for `entries`: each headword lower-cased and stripped of
/// non-word characters, followed by its plural. Headwords longer than
/// `max_len` letters are left out.
pub fn dictionary_words<'e, I>(entries: I, max_len: usize) -> Vec<String>
    where I: IntoIterator<Item = &'e DictionaryEntry> {
    entries.into_iter()
        .map(|entry| normalize(&entry.word))
        .filter(|word| !word.is_empty() && word.chars().count() <= max_len)
        .flat_map(|word| {
            let plural = pluralize(&word);
            [word, plural]
        })
        .collect()
}
