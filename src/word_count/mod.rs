//! Word-frequency counter built on the Kaula hash map.
//!
//! Text is tokenized into case-folded words (runs of word characters that may
//! contain inner apostrophes), each word is counted in a [`KaulaHashMap`],
//! and the most frequent words are reported.
//!
//! # Example
//!
//! ```
//! use kaula_lib::config::table::TableConfig;
//! use kaula_lib::word_count::top_words;
//!
//! let text = "the cat the dog the cat";
//! let top = top_words(text.as_bytes(), 2, &TableConfig::default()).unwrap();
//! assert_eq!(top, vec![("the".to_string(), 3), ("cat".to_string(), 2)]);
//! ```

use std::cmp::Reverse;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::config::table::TableConfig;
use crate::data_structures::kaula_hash_map::{HashStrategy, KaulaHashMap, KeyHasher};
use crate::error::KaulaResult;

/// A word and the number of times it occurred.
pub type WordCount = (String, u64);

/// A word is a single word character, or word characters around inner apostrophes.
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w[\w']*\w|\w").expect("word pattern is a valid regex"));

/// Splits `line` into lower-cased word tokens.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    WORD_PATTERN
        .find_iter(line)
        .map(|token| token.as_str().to_lowercase())
}

/// Counts word occurrences in a [`KaulaHashMap`].
#[derive(Debug)]
pub struct WordCounter<H> {
    table: KaulaHashMap<u64, H>,
    total_words: u64,
}

impl WordCounter<HashStrategy> {
    /// Creates a counter whose table follows `config`.
    pub fn from_config(config: &TableConfig) -> KaulaResult<Self> {
        Self::new(config.capacity, config.hash_function)
    }
}

impl<H: KeyHasher> WordCounter<H> {
    /// Creates a counter backed by a table of `capacity` buckets.
    ///
    /// # Returns
    ///
    /// * `Ok(WordCounter)` - An empty counter.
    /// * `Err(KaulaError::Table)` - If `capacity` is zero.
    pub fn new(capacity: usize, hasher: H) -> KaulaResult<Self> {
        Ok(Self {
            table: KaulaHashMap::new(capacity, hasher)?,
            total_words: 0,
        })
    }

    /// Counts every word in `line`.
    pub fn count_line(&mut self, line: &str) {
        for word in tokenize(line) {
            let count = self.table.get(&word).copied().unwrap_or(0);
            self.table.put(word, count + 1);
            self.total_words += 1;
        }
    }

    /// Counts every word read from `reader`, line by line.
    pub fn count_reader<R: BufRead>(&mut self, reader: R) -> KaulaResult<()> {
        for line in reader.lines() {
            self.count_line(&line?);
        }
        debug!(
            total_words = self.total_words,
            distinct_words = self.table.len(),
            load = self.table.table_load(),
            empty_buckets = self.table.empty_buckets(),
            "Counted words"
        );
        Ok(())
    }

    /// Returns how many times `word` was seen.
    pub fn count_of(&self, word: &str) -> u64 {
        self.table.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Returns the number of distinct words seen.
    pub fn distinct_words(&self) -> usize {
        self.table.len()
    }

    /// Returns the number of words seen, including repeats.
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Returns the underlying table.
    pub fn table(&self) -> &KaulaHashMap<u64, H> {
        &self.table
    }

    /// Returns the `number` most frequent words, most frequent first.
    ///
    /// Words with equal counts are ordered alphabetically.
    pub fn top(&self, number: usize) -> Vec<WordCount> {
        let mut counts: Vec<WordCount> = self
            .table
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect();
        counts.sort_unstable_by(|(word_a, count_a), (word_b, count_b)| {
            (Reverse(count_a), word_a).cmp(&(Reverse(count_b), word_b))
        });
        counts.truncate(number);
        counts
    }
}

/// Counts the words read from `source` and returns the `number` most frequent.
///
/// # Arguments
///
/// * `source` - Text to count, read line by line.
/// * `number` - How many `(word, count)` pairs to return.
/// * `config` - Capacity and hash strategy of the backing table.
pub fn top_words<R: BufRead>(
    source: R,
    number: usize,
    config: &TableConfig,
) -> KaulaResult<Vec<WordCount>> {
    let mut counter = WordCounter::from_config(config)?;
    counter.count_reader(source)?;
    Ok(counter.top(number))
}

/// Counts the words of the file at `path` and returns the `number` most frequent.
pub fn top_words_from_path<P: AsRef<Path>>(
    path: P,
    number: usize,
    config: &TableConfig,
) -> KaulaResult<Vec<WordCount>> {
    let path = path.as_ref();
    info!(path = %path.display(), number, "Counting words");
    let file = File::open(path)?;
    top_words(BufReader::new(file), number, config)
}
