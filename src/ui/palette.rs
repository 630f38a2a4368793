/// The two fixed colour schemes. Every cell the renderer draws takes its
/// colours from the active palette, so a theme switch recolours the
/// whole view.

use crossterm::style::Color;

use crate::domain::line::LineKind;
use crate::domain::theme::Theme;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub command: Color,
    pub hint: Color,
    pub error: Color,
    pub success: Color,
    pub header_fg: Color,
    pub header_bg: Color,
    pub dim: Color,
}

const GREEN_300: Color = Color::Rgb { r: 134, g: 239, b: 172 };
const GREEN_400: Color = Color::Rgb { r: 74, g: 222, b: 128 };
const GRAY_400: Color = Color::Rgb { r: 156, g: 163, b: 175 };
const GRAY_500: Color = Color::Rgb { r: 107, g: 114, b: 128 };
const RED_500: Color = Color::Rgb { r: 239, g: 68, b: 68 };

const DARK: Palette = Palette {
    bg: Color::Rgb { r: 17, g: 24, b: 39 },
    text: GREEN_300,
    command: GREEN_400,
    hint: GRAY_500,
    error: RED_500,
    success: GREEN_400,
    header_fg: GREEN_300,
    header_bg: Color::Rgb { r: 0, g: 0, b: 0 },
    dim: GRAY_400,
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb { r: 255, g: 255, b: 255 },
    text: Color::Rgb { r: 17, g: 24, b: 39 },
    command: GREEN_400,
    hint: GRAY_500,
    error: RED_500,
    success: GREEN_400,
    header_fg: Color::Rgb { r: 17, g: 24, b: 39 },
    header_bg: Color::Rgb { r: 243, g: 244, b: 246 },
    dim: GRAY_500,
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn line(&self, kind: LineKind) -> Color {
        match kind {
            LineKind::Command => self.command,
            LineKind::Info => self.text,
            LineKind::Hint => self.hint,
            LineKind::Error => self.error,
            LineKind::Success => self.success,
        }
    }
}
