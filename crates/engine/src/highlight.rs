//! Highlight toggles and the tags they produce.
//!
//! The state only records *what* to look for. Tags are recomputed from the
//! current cell text with [`find_matches`], so they always line up with the
//! text being shown and never cross a cell boundary.

use std::collections::BTreeSet;
use std::ops::Range;

use crate::grid::Grid;
use crate::search::find_matches;
use crate::spell::SpellChecker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Unknown to the dictionary
    Spelling,
    /// Matches the user's highlight word
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    pub span: Range<usize>,
}

/// Snapshot of active highlight targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightTargets {
    pub misspelled: Vec<String>,
    pub word: Option<String>,
}

impl HighlightTargets {
    pub fn is_empty(&self) -> bool {
        self.misspelled.is_empty() && self.word.is_none()
    }

    /// Tags for `text`, sorted by start offset and non-overlapping.
    ///
    /// Word tags win over spelling tags where the two overlap.
    pub fn tags(&self, text: &str) -> Vec<Tag> {
        let word_spans: Vec<Range<usize>> = self
            .word
            .as_deref()
            .map(|w| find_matches(text, w))
            .unwrap_or_default();

        let mut tags: Vec<Tag> = word_spans
            .iter()
            .cloned()
            .map(|span| Tag { kind: TagKind::Word, span })
            .collect();

        for target in &self.misspelled {
            for span in find_matches(text, target) {
                let overlaps = word_spans
                    .iter()
                    .any(|w| span.start < w.end && w.start < span.end);
                if !overlaps {
                    tags.push(Tag { kind: TagKind::Spelling, span });
                }
            }
        }

        tags.sort_by_key(|t| (t.span.start, t.span.end));
        tags
    }
}

/// Outcome of pressing the word-highlight toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordToggle {
    /// Now ON; the caller should ask for the word.
    AskForWord,
    /// Now OFF; all word tags cleared.
    Cleared,
}

#[derive(Debug, Clone, Default)]
pub struct HighlightState {
    spelling: Option<BTreeSet<String>>,
    word: Option<Option<String>>,
}

impl HighlightState {
    pub fn spelling_active(&self) -> bool {
        self.spelling.is_some()
    }

    pub fn word_active(&self) -> bool {
        self.word.is_some()
    }

    /// Flip spelling highlight. Turning it on rescans every data cell.
    ///
    /// Returns the new state.
    pub fn toggle_spelling(&mut self, grid: &Grid, checker: &SpellChecker) -> bool {
        if self.spelling.take().is_some() {
            return false;
        }
        let unknown: BTreeSet<String> = grid
            .cells_iter()
            .flat_map(|(_, text)| checker.unknown_words(text))
            .collect();
        log::debug!("spelling highlight on: {} unknown words", unknown.len());
        self.spelling = Some(unknown);
        true
    }

    /// Flip word highlight.
    ///
    /// Turning it on leaves no target until [`set_word`](Self::set_word) is
    /// called with a non-empty answer.
    pub fn toggle_word(&mut self) -> WordToggle {
        if self.word.take().is_some() {
            WordToggle::Cleared
        } else {
            self.word = Some(None);
            WordToggle::AskForWord
        }
    }

    /// Record the answer to the highlight-word prompt.
    ///
    /// Ignored while the toggle is off. Empty or whitespace-only answers keep the
    /// toggle on with nothing highlighted.
    pub fn set_word(&mut self, answer: Option<String>) {
        if let Some(slot) = self.word.as_mut() {
            *slot = answer.filter(|a| !a.trim().is_empty());
        }
    }

    pub fn word(&self) -> Option<&str> {
        self.word.as_ref().and_then(|w| w.as_deref())
    }

    pub fn misspelled(&self) -> impl Iterator<Item = &str> {
        self.spelling.iter().flatten().map(String::as_str)
    }

    pub fn targets(&self) -> HighlightTargets {
        HighlightTargets {
            misspelled: self.misspelled().map(str::to_string).collect(),
            word: self.word().map(str::to_string),
        }
    }

    pub fn tags(&self, text: &str) -> Vec<Tag> {
        self.targets().tags(text)
    }
}
