use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info};
use typed_builder::TypedBuilder;

use crate::alphabet::letter_count;
use crate::error::Result;
use crate::wordlist::pairs::Pair;
use crate::wordlist::plural::pluralize;
use crate::wordlist::trie::{SearchConfig, Trie, TrieBuilder};

pub struct Wordlist {
    trie: Trie,
}

/// How to pull words out of the lines of a word list file.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    /// Words with more letters than this are skipped.
    #[builder(default, setter(strip_option))]
    max_len: Option<usize>,
    /// Also insert each word's plural.
    #[builder(default)]
    pluralize: bool,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let word = match self.delimiter {
            None => line,
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0))?,
        };
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        match self.max_len {
            Some(max_len) if letter_count(word) > max_len => None,
            _ => Some(word),
        }
    }
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(filename: P, format: FileFormat) -> Result<Wordlist> {
        let filename = filename.as_ref();
        info!("Reading words from {:?}", filename);
        let file = File::open(filename)?;
        Wordlist::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: FileFormat) -> Result<Wordlist> {
        let mut trie = TrieBuilder::new();
        let mut count: usize = 0;
        let mut skipped: usize = 0;

        let start = Instant::now();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match format.parse_line(&line) {
                Some(word) => {
                    trie.add(word);
                    if format.pluralize {
                        trie.add(&pluralize(word));
                    }
                    count += 1;
                    if count % 100000 == 0 {
                        debug!("{} {}", count, word);
                    }
                }
                None => skipped += 1,
            }
        }
        info!("Read {} words in {:.3}s ({} skipped)",
              count, start.elapsed().as_secs_f64(), skipped);

        Ok(Wordlist { trie: trie.build() })
    }

    pub fn into_trie(self) -> Trie {
        self.trie
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn anagrams(&self, input: &str) -> Vec<String>;
            pub fn find_word_pairs(&self, input: &str) -> Vec<Pair>;
            pub fn find_word_pairs_with(&self, input: &str, config: &SearchConfig) -> Vec<Pair>;
        }
    }
}
