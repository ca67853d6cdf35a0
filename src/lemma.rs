use itertools::Itertools;
use regex::Regex;
use std::path::Path;

use crate::error::Result;
use crate::shared::{new_hash_set, read_text, HashSet};

/// Parses lemma files: unindented headword lines followed by indented lines
/// of comma-separated inflections.
#[derive(Debug, Clone)]
pub struct LemmaParser {
    // Cross-references such as `-> [bite]` are metadata, not words
    annotation: Regex,
}

impl Default for LemmaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LemmaParser {
    pub fn new() -> Self {
        LemmaParser {
            annotation: Regex::new(r"->\s*\[[^\]]+\]").expect("Illegal regex"),
        }
    }

    /// Collect every headword and inflection as a lower-cased alphabetic word.
    /// Lines that yield nothing usable are skipped.
    pub fn parse_str(&self, contents: &str) -> HashSet<String> {
        let mut words = new_hash_set();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with(char::is_whitespace) {
                words.extend(self.inflections(line));
            } else if let Some(word) = headword(line) {
                words.insert(word);
            } else {
                log::trace!("skipping headword line {:?}", line);
            }
        }
        words
    }

    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<HashSet<String>> {
        Ok(self.parse_str(&read_text(path)?))
    }

    fn inflections(&self, line: &str) -> Vec<String> {
        self.annotation
            .replace_all(line, "")
            .split(',')
            .filter_map(|part| part.split_whitespace().next().and_then(normalize))
            .collect()
    }
}

/// The first token of an unindented line, if it is a usable word.
pub fn headword(line: &str) -> Option<String> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    line.split_whitespace().next().and_then(normalize)
}

/// Unique headwords of a lemma file, sorted.
pub fn headwords(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(headword)
        .unique()
        .sorted()
        .collect()
}

/// Strip trailing `!` markers and lower-case, rejecting anything that is not
/// entirely alphabetic.
fn normalize(token: &str) -> Option<String> {
    let word = token.trim_end_matches('!');
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word.to_lowercase())
    } else {
        log::trace!("rejecting token {:?}", token);
        None
    }
}
