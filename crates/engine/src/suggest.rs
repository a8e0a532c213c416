//! Interactive spelling-suggestion pass.
//!
//! A pass walks the data cells in scan order and, within each cell, the tokens
//! left to right. Every unknown word either gets a cached "apply to all"
//! correction straight away or stops the pass with a [`PassStep::Prompt`]. The
//! caller shows the prompt, feeds the answer back with [`SuggestionPass::answer`]
//! and, when a correction was given, the yes/no follow-up with
//! [`SuggestionPass::confirm`].
//!
//! The correction cache lives in the pass and is dropped with it.

use std::collections::HashMap;
use std::ops::Range;

use crate::grid::{CellPos, Grid};
use crate::spell::{normalize, tokenize, SpellChecker};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionPrompt {
    pub pos: CellPos,
    /// The word as it appears in the cell, punctuation stripped.
    pub word: String,
    pub candidates: Vec<String>,
    pub best: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassStep {
    /// Ask the user for a correction.
    Prompt(SuggestionPrompt),
    /// Ask whether `correction` applies to every later occurrence of `word`.
    Confirm { word: String, correction: String },
    Done(PassSummary),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub prompted: usize,
    pub replaced: usize,
    pub auto_replaced: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
struct Occurrence {
    pos: CellPos,
    core: Range<usize>,
    /// Normalized form, the cache key
    word: String,
    raw: String,
}

#[derive(Debug, Clone)]
enum Pending {
    Answer(Occurrence),
    Confirm(Occurrence, String),
}

#[derive(Debug, Clone)]
pub struct SuggestionPass {
    cells: Vec<CellPos>,
    cell_idx: usize,
    cursor: usize,
    corrections: HashMap<String, String>,
    pending: Option<Pending>,
    summary: PassSummary,
}

impl Default for SuggestionPass {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionPass {
    pub fn new() -> Self {
        Self {
            cells: Grid::data_positions().collect(),
            cell_idx: 0,
            cursor: 0,
            corrections: HashMap::new(),
            pending: None,
            summary: PassSummary::default(),
        }
    }

    /// Corrections approved for the rest of this pass.
    pub fn corrections(&self) -> &HashMap<String, String> {
        &self.corrections
    }

    pub fn summary(&self) -> PassSummary {
        self.summary
    }

    /// Run until the next prompt or the end of the grid.
    ///
    /// Calling this while a prompt is outstanding returns that prompt again.
    pub fn advance(&mut self, grid: &mut Grid, checker: &SpellChecker) -> PassStep {
        match &self.pending {
            Some(Pending::Answer(occ)) => return PassStep::Prompt(self.prompt_for(occ, checker)),
            Some(Pending::Confirm(occ, correction)) => {
                return PassStep::Confirm {
                    word: occ.raw.clone(),
                    correction: correction.clone(),
                }
            }
            None => {}
        }

        while let Some(&pos) = self.cells.get(self.cell_idx) {
            match self.next_unknown(grid, pos, checker) {
                Some(occ) => {
                    if let Some(correction) = self.corrections.get(&occ.word).cloned() {
                        log::debug!("{pos}: auto-correcting {:?} -> {correction:?}", occ.raw);
                        self.replace(grid, &occ, &correction);
                        self.summary.auto_replaced += 1;
                        continue;
                    }
                    self.summary.prompted += 1;
                    let prompt = self.prompt_for(&occ, checker);
                    self.pending = Some(Pending::Answer(occ));
                    return PassStep::Prompt(prompt);
                }
                None => {
                    self.cell_idx += 1;
                    self.cursor = 0;
                }
            }
        }

        PassStep::Done(self.summary)
    }

    /// Answer the outstanding prompt. `None` or a blank answer skips the word.
    pub fn answer(
        &mut self,
        grid: &mut Grid,
        checker: &SpellChecker,
        response: Option<String>,
    ) -> PassStep {
        let Some(Pending::Answer(occ)) = self.pending.take() else {
            return self.advance(grid, checker);
        };

        match response.map(|r| r.trim().to_string()).filter(|r| !r.is_empty()) {
            Some(correction) => {
                let step = PassStep::Confirm {
                    word: occ.raw.clone(),
                    correction: correction.clone(),
                };
                self.pending = Some(Pending::Confirm(occ, correction));
                step
            }
            None => {
                self.cursor = occ.core.end;
                self.summary.skipped += 1;
                self.advance(grid, checker)
            }
        }
    }

    /// Answer the "apply to all" follow-up and apply the correction.
    pub fn confirm(&mut self, grid: &mut Grid, checker: &SpellChecker, apply_to_all: bool) -> PassStep {
        let Some(Pending::Confirm(occ, correction)) = self.pending.take() else {
            return self.advance(grid, checker);
        };

        if apply_to_all {
            self.corrections.insert(occ.word.clone(), correction.clone());
        }
        if self.still_present(grid, &occ) {
            self.replace(grid, &occ, &correction);
            self.summary.replaced += 1;
        } else {
            self.cursor = occ.core.end.min(grid.get(occ.pos).len());
        }
        self.advance(grid, checker)
    }

    fn next_unknown(&self, grid: &Grid, pos: CellPos, checker: &SpellChecker) -> Option<Occurrence> {
        let text = grid.get(pos);
        tokenize(text)
            .into_iter()
            .filter(|t| t.span.start >= self.cursor)
            .find_map(|t| {
                let word = t.word?;
                if checker.is_known(&word) {
                    return None;
                }
                Some(Occurrence {
                    pos,
                    raw: text[t.core.clone()].to_string(),
                    core: t.core,
                    word,
                })
            })
    }

    fn prompt_for(&self, occ: &Occurrence, checker: &SpellChecker) -> SuggestionPrompt {
        let candidates = checker.candidates(&occ.word);
        SuggestionPrompt {
            pos: occ.pos,
            word: occ.raw.clone(),
            best: candidates.first().cloned(),
            candidates,
        }
    }

    fn still_present(&self, grid: &Grid, occ: &Occurrence) -> bool {
        grid.get(occ.pos)
            .get(occ.core.clone())
            .and_then(normalize)
            .is_some_and(|w| w == occ.word)
    }

    fn replace(&mut self, grid: &mut Grid, occ: &Occurrence, correction: &str) {
        grid.splice(occ.pos, occ.core.clone(), correction);
        self.cursor = occ.core.start + correction.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell::Dictionary;

    fn checker() -> SpellChecker {
        SpellChecker::new(Dictionary::from_ranked_words("the cat sat on a mat hello world"), 2)
    }

    fn pos(row: usize, col: usize) -> CellPos {
        CellPos::new(row, col).unwrap()
    }

    fn expect_prompt(step: PassStep) -> SuggestionPrompt {
        match step {
            PassStep::Prompt(p) => p,
            other => panic!("expected prompt, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_to_all_skips_second_prompt() {
        let spell = checker();
        let mut grid = Grid::new();
        grid.set(pos(0, 1), "teh cat");
        grid.set(pos(2, 0), "on teh mat");

        let mut pass = SuggestionPass::new();
        let prompt = expect_prompt(pass.advance(&mut grid, &spell));
        assert_eq!(prompt.pos, pos(0, 1));
        assert_eq!(prompt.word, "teh");
        assert_eq!(prompt.best.as_deref(), Some("the"));

        let step = pass.answer(&mut grid, &spell, Some("the".to_string()));
        assert_eq!(
            step,
            PassStep::Confirm { word: "teh".to_string(), correction: "the".to_string() }
        );

        let step = pass.confirm(&mut grid, &spell, true);
        let PassStep::Done(summary) = step else { panic!("expected done, got {step:?}") };

        assert_eq!(grid.get(pos(0, 1)), "the cat");
        assert_eq!(grid.get(pos(2, 0)), "on the mat");
        assert_eq!(summary.prompted, 1);
        assert_eq!(summary.replaced, 1);
        assert_eq!(summary.auto_replaced, 1);
    }

    #[test]
    fn test_no_to_all_prompts_again() {
        let spell = checker();
        let mut grid = Grid::new();
        grid.set(pos(0, 1), "teh teh");

        let mut pass = SuggestionPass::new();
        expect_prompt(pass.advance(&mut grid, &spell));
        pass.answer(&mut grid, &spell, Some("the".to_string()));
        let second = expect_prompt(pass.confirm(&mut grid, &spell, false));
        assert_eq!(second.word, "teh");
        assert_eq!(grid.get(pos(0, 1)), "the teh");

        pass.answer(&mut grid, &spell, Some("ten".to_string()));
        assert!(matches!(pass.confirm(&mut grid, &spell, false), PassStep::Done(_)));
        assert_eq!(grid.get(pos(0, 1)), "the ten");
        assert!(pass.corrections().is_empty());
    }

    #[test]
    fn test_cancel_leaves_word_unchanged() {
        let spell = checker();
        let mut grid = Grid::new();
        grid.set(pos(1, 1), "helo wrld");

        let mut pass = SuggestionPass::new();
        let first = expect_prompt(pass.advance(&mut grid, &spell));
        assert_eq!(first.word, "helo");

        let second = expect_prompt(pass.answer(&mut grid, &spell, None));
        assert_eq!(second.word, "wrld");

        let step = pass.answer(&mut grid, &spell, Some("   ".to_string()));
        let PassStep::Done(summary) = step else { panic!("expected done") };
        assert_eq!(grid.get(pos(1, 1)), "helo wrld");
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.replaced, 0);
    }

    #[test]
    fn test_punctuation_preserved_around_correction() {
        let spell = checker();
        let mut grid = Grid::new();
        grid.set(pos(0, 2), "(Teh) cat, teh.");

        let mut pass = SuggestionPass::new();
        let prompt = expect_prompt(pass.advance(&mut grid, &spell));
        assert_eq!(prompt.word, "Teh");
        pass.answer(&mut grid, &spell, Some("The".to_string()));
        assert!(matches!(pass.confirm(&mut grid, &spell, true), PassStep::Done(_)));
        assert_eq!(grid.get(pos(0, 2)), "(The) cat, The.");
    }

    #[test]
    fn test_word_without_candidates_still_prompts() {
        let spell = checker();
        let mut grid = Grid::new();
        grid.set(pos(0, 1), "qzxvbn");

        let mut pass = SuggestionPass::new();
        let prompt = expect_prompt(pass.advance(&mut grid, &spell));
        assert!(prompt.candidates.is_empty());
        assert_eq!(prompt.best, None);
    }

    #[test]
    fn test_advance_repeats_outstanding_prompt() {
        let spell = checker();
        let mut grid = Grid::new();
        grid.set(pos(0, 1), "wrld");

        let mut pass = SuggestionPass::new();
        let a = pass.advance(&mut grid, &spell);
        let b = pass.advance(&mut grid, &spell);
        assert_eq!(a, b);
        assert_eq!(pass.summary().prompted, 1);
    }

    #[test]
    fn test_correction_that_is_itself_unknown_does_not_loop() {
        let spell = checker();
        let mut grid = Grid::new();
        grid.set(pos(0, 1), "teh teh");

        let mut pass = SuggestionPass::new();
        expect_prompt(pass.advance(&mut grid, &spell));
        pass.answer(&mut grid, &spell, Some("tehh".to_string()));
        let step = pass.confirm(&mut grid, &spell, true);
        assert!(matches!(step, PassStep::Done(_)));
        assert_eq!(grid.get(pos(0, 1)), "tehh tehh");
    }

    #[test]
    fn test_clean_grid_finishes_immediately() {
        let spell = checker();
        let mut grid = Grid::new();
        grid.set(pos(0, 1), "the cat sat on the mat");

        let mut pass = SuggestionPass::new();
        assert_eq!(pass.advance(&mut grid, &spell), PassStep::Done(PassSummary::default()));
    }
}
