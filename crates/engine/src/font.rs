//! Process-wide font size.

/// Starting size when settings don't say otherwise.
pub const DEFAULT_FONT_SIZE: u16 = 14;

/// Shared text size for every text surface. Never below 1, no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontSize(u16);

impl Default for FontSize {
    fn default() -> Self {
        Self(DEFAULT_FONT_SIZE)
    }
}

impl FontSize {
    pub fn new(size: u16) -> Self {
        Self(size.max(1))
    }

    #[inline]
    pub fn get(&self) -> u16 {
        self.0
    }

    pub fn increase(&mut self) -> u16 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    pub fn decrease(&mut self) -> u16 {
        if self.0 > 1 {
            self.0 -= 1;
        }
        self.0
    }
}
