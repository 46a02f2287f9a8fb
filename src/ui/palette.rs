use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

/// Colors for one theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub focus: Color,
    pub danger: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::Gray,
                accent: Color::LightBlue,
                border: Color::DarkGray,
                focus: Color::Cyan,
                danger: Color::LightRed,
            },
            Theme::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                border: Color::Gray,
                focus: Color::Magenta,
                danger: Color::Red,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus)
        } else {
            Style::default().fg(self.border)
        }
    }
}
