// Theme colors - light and dark palettes, picked by `ui.darkMode`

use iced::{Color, Theme};

#[derive(Clone, Copy)]
pub struct ThemeColors {
    pub bg_panel: Color,
    pub bg_cell: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub backdrop: Color,
}

impl ThemeColors {
    pub const fn dark() -> Self {
        Self {
            bg_panel: Color::from_rgb(0.118, 0.161, 0.231),  // #1e293b
            bg_cell: Color::from_rgb(0.059, 0.090, 0.165),   // #0f172a
            text: Color::from_rgb(0.945, 0.961, 0.976),      // #f1f5f9
            text_dim: Color::from_rgb(0.392, 0.439, 0.529),  // #64748b
            border: Color::from_rgb(0.200, 0.255, 0.333),    // #334155
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
        }
    }

    pub const fn light() -> Self {
        Self {
            bg_panel: Color::from_rgb(0.886, 0.910, 0.941),  // #e2e8f0
            bg_cell: Color::from_rgb(1.0, 1.0, 1.0),         // #ffffff
            text: Color::from_rgb(0.059, 0.090, 0.165),      // #0f172a
            text_dim: Color::from_rgb(0.278, 0.333, 0.412),  // #475569
            border: Color::from_rgb(0.796, 0.835, 0.882),    // #cbd5e1
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

pub fn iced_theme(dark: bool) -> Theme {
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
