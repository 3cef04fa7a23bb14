//! Colors for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::console::LineKind;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    /// Code blocks and the console body
    pub surface: Color,
    pub text: Color,
    /// Dates, summaries, placeholders
    pub muted: Color,
    /// Headings, site name, selection
    pub primary: Color,
    /// Prompts, tags, links
    pub accent: Color,
    pub border: Color,
    pub error: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(10, 10, 10),
    surface: Color::Rgb(23, 23, 23),
    text: Color::Rgb(237, 237, 237),
    muted: Color::Rgb(150, 150, 150),
    primary: Color::Rgb(239, 68, 68),
    accent: Color::Rgb(251, 146, 60),
    border: Color::Rgb(64, 64, 64),
    error: Color::Rgb(248, 113, 113),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 250),
    surface: Color::Rgb(238, 238, 238),
    text: Color::Rgb(23, 23, 23),
    muted: Color::Rgb(100, 100, 100),
    primary: Color::Rgb(220, 38, 38),
    accent: Color::Rgb(234, 88, 12),
    border: Color::Rgb(212, 212, 212),
    error: Color::Rgb(185, 28, 28),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subheading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn strong(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn code(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Transcript line color.
    pub fn line(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Input => Style::default().fg(self.accent),
            LineKind::Output => Style::default().fg(self.text),
            LineKind::Error => Style::default().fg(self.error),
        }
    }
}
