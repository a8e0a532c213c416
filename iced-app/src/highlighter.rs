//! Bridges highlight tags into iced's `text_editor`.
//!
//! The editor asks for highlights one line at a time, so tags are computed
//! per line and never span a line break.

use std::ops::Range;

use iced::advanced::text::highlighter::{self, Format};
use iced::{Color, Font, Theme};

use gridnote_engine::highlight::{HighlightTargets, TagKind};

const SPELLING_COLOR: Color = Color::from_rgb(0.863, 0.149, 0.149); // #dc2626
const WORD_COLOR: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3b82f6

pub struct TagHighlighter {
    targets: HighlightTargets,
    current_line: usize,
}

impl highlighter::Highlighter for TagHighlighter {
    type Settings = HighlightTargets;
    type Highlight = TagKind;
    type Iterator<'a> = std::vec::IntoIter<(Range<usize>, TagKind)>;

    fn new(settings: &Self::Settings) -> Self {
        Self {
            targets: settings.clone(),
            current_line: 0,
        }
    }

    fn update(&mut self, new_settings: &Self::Settings) {
        self.targets = new_settings.clone();
        self.current_line = 0;
    }

    fn change_line(&mut self, line: usize) {
        self.current_line = line;
    }

    fn highlight_line(&mut self, line: &str) -> Self::Iterator<'_> {
        self.current_line += 1;
        if self.targets.is_empty() {
            return Vec::new().into_iter();
        }
        self.targets
            .tags(line)
            .into_iter()
            .map(|tag| (tag.span, tag.kind))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn current_line(&self) -> usize {
        self.current_line
    }
}

pub fn to_format(kind: &TagKind, _theme: &Theme) -> Format<Font> {
    let color = match kind {
        TagKind::Spelling => SPELLING_COLOR,
        TagKind::Word => WORD_COLOR,
    };
    Format {
        color: Some(color),
        font: None,
    }
}
