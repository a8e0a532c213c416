//! Application state shared by every window.

use crate::font::FontSize;
use crate::grid::Grid;
use crate::highlight::HighlightState;
use crate::spell::SpellChecker;
use crate::suggest::{PassStep, SuggestionPass};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub grid: Grid,
    pub highlight: HighlightState,
    pub font_size: FontSize,
    pub spell: SpellChecker,
    /// Present while a suggestion pass is waiting on the user
    suggestion: Option<SuggestionPass>,
}

impl AppState {
    pub fn new(font_size: FontSize, spell: SpellChecker) -> Self {
        Self {
            font_size,
            spell,
            ..Self::default()
        }
    }

    pub fn toggle_spelling(&mut self) -> bool {
        self.highlight.toggle_spelling(&self.grid, &self.spell)
    }

    pub fn suggestion_running(&self) -> bool {
        self.suggestion.is_some()
    }

    /// Start a fresh suggestion pass, discarding any earlier one.
    pub fn start_suggestions(&mut self) -> PassStep {
        let mut pass = SuggestionPass::new();
        let step = pass.advance(&mut self.grid, &self.spell);
        self.keep_unless_done(pass, step)
    }

    /// Feed a prompt answer to the running pass. `None` if no pass is running.
    pub fn answer_suggestion(&mut self, response: Option<String>) -> Option<PassStep> {
        let mut pass = self.suggestion.take()?;
        let step = pass.answer(&mut self.grid, &self.spell, response);
        Some(self.keep_unless_done(pass, step))
    }

    /// Feed the "apply to all" answer to the running pass.
    pub fn confirm_suggestion(&mut self, apply_to_all: bool) -> Option<PassStep> {
        let mut pass = self.suggestion.take()?;
        let step = pass.confirm(&mut self.grid, &self.spell, apply_to_all);
        Some(self.keep_unless_done(pass, step))
    }

    fn keep_unless_done(&mut self, pass: SuggestionPass, step: PassStep) -> PassStep {
        if !matches!(step, PassStep::Done(_)) {
            self.suggestion = Some(pass);
        }
        step
    }
}
