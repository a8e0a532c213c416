//! Dictionary-backed spell checking.
//!
//! Tokens are whitespace-separated. Before lookup a token is normalized: leading
//! and trailing ASCII punctuation is stripped and the rest lowercased. Tokens
//! without any alphabetic character (numbers, stray symbols) are never reported.
//!
//! Suggestions follow the classic edit-distance approach: known words one edit
//! away, otherwise two edits away, ranked by word frequency.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::ops::Range;

const BUILTIN_WORDS: &str = include_str!("../data/words.txt");

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Word → frequency table.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashMap<String, u64>,
}

impl Dictionary {
    /// The embedded English word list, inflected forms and regional spellings
    /// included.
    pub fn builtin() -> Self {
        let mut dictionary = Self::default();
        dictionary.extend_from_word_list(BUILTIN_WORDS);
        dictionary
    }

    /// Build from whitespace-separated words listed most frequent first.
    ///
    /// Frequencies are derived from rank; a repeated word keeps its first rank.
    pub fn from_ranked_words(text: &str) -> Self {
        let ranked: Vec<&str> = text.split_whitespace().collect();
        let total = ranked.len() as u64;
        let mut words = HashMap::with_capacity(ranked.len());
        for (rank, word) in ranked.into_iter().enumerate() {
            words
                .entry(word.to_lowercase())
                .or_insert(total - rank as u64);
        }
        Self { words }
    }

    /// Merge a user word list: one entry per line, `word` or `word count`.
    ///
    /// Blank lines and lines starting with `#` are ignored. Returns the number of
    /// entries read.
    pub fn extend_from_word_list(&mut self, text: &str) -> usize {
        let mut added = 0;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else { continue };
            let count = parts.next().and_then(|c| c.parse::<u64>().ok()).unwrap_or(1);
            let entry = self.words.entry(word.to_lowercase()).or_insert(0);
            *entry = (*entry).max(count);
            added += 1;
        }
        added
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A whitespace-delimited token inside a cell's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte span of the whole token.
    pub span: Range<usize>,
    /// Byte span with leading/trailing punctuation removed.
    pub core: Range<usize>,
    /// Normalized (lowercase, punctuation-stripped) form, `None` if not a word.
    pub word: Option<String>,
}

/// Split text into tokens with their byte offsets.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(make_token(text, s..idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(make_token(text, s..text.len()));
    }
    tokens
}

fn make_token(text: &str, span: Range<usize>) -> Token {
    let raw = &text[span.clone()];
    let trimmed_start = raw.trim_start_matches(|c: char| c.is_ascii_punctuation());
    let lead = raw.len() - trimmed_start.len();
    let core_str = trimmed_start.trim_end_matches(|c: char| c.is_ascii_punctuation());
    let core = span.start + lead..span.start + lead + core_str.len();
    Token {
        span,
        core,
        word: normalize(raw),
    }
}

/// Normalize a raw token for dictionary lookup.
pub fn normalize(token: &str) -> Option<String> {
    let core = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if !core.chars().any(char::is_alphabetic) {
        return None;
    }
    Some(core.to_lowercase())
}

#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Dictionary,
    max_edit_distance: u8,
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new(Dictionary::builtin(), 2)
    }
}

impl SpellChecker {
    /// `max_edit_distance` is clamped to 1..=2.
    pub fn new(dictionary: Dictionary, max_edit_distance: u8) -> Self {
        Self {
            dictionary,
            max_edit_distance: max_edit_distance.clamp(1, 2),
        }
    }

    /// Is the normalized word in the dictionary?
    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Normalized words in `text` that are not in the dictionary.
    pub fn unknown_words(&self, text: &str) -> BTreeSet<String> {
        tokenize(text)
            .into_iter()
            .filter_map(|t| t.word)
            .filter(|w| !self.is_known(w))
            .collect()
    }

    /// Known words close to `word`, most frequent first.
    ///
    /// Empty when nothing within the configured edit distance is known.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        if self.is_known(&word) {
            return vec![word];
        }

        let first = edits1(&word);
        let mut found: HashSet<String> = first
            .iter()
            .filter(|w| self.is_known(w))
            .cloned()
            .collect();

        if found.is_empty() && self.max_edit_distance >= 2 {
            for e1 in &first {
                for e2 in edits1(e1) {
                    if self.is_known(&e2) {
                        found.insert(e2);
                    }
                }
            }
        }

        let mut ranked: Vec<String> = found.into_iter().collect();
        ranked.sort_by(|a, b| {
            let fa = self.dictionary.frequency(a).unwrap_or(0);
            let fb = self.dictionary.frequency(b).unwrap_or(0);
            fb.cmp(&fa).then_with(|| a.cmp(b))
        });
        ranked
    }

    pub fn best_correction(&self, word: &str) -> Option<String> {
        self.candidates(word).into_iter().next()
    }
}

/// All strings one deletion, transposition, replacement or insertion away.
fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut out = HashSet::with_capacity(54 * n + 25);

    for i in 0..=n {
        let (left, right) = chars.split_at(i);
        if !right.is_empty() {
            out.insert(left.iter().chain(&right[1..]).collect());
        }
        if right.len() > 1 {
            let mut swapped: Vec<char> = chars.clone();
            swapped.swap(i, i + 1);
            out.insert(swapped.into_iter().collect());
        }
        for c in ALPHABET.chars() {
            if !right.is_empty() {
                out.insert(
                    left.iter()
                        .copied()
                        .chain(std::iter::once(c))
                        .chain(right[1..].iter().copied())
                        .collect(),
                );
            }
            out.insert(
                left.iter()
                    .copied()
                    .chain(std::iter::once(c))
                    .chain(right.iter().copied())
                    .collect(),
            );
        }
    }
    out.remove(word);
    out
}
