//! Light and dark palettes plus semantic styles.
//!
//! Screens never reach for raw colors; they ask the active [`Theme`] for a
//! style so a `t` press restyles everything on the next frame.

use ratatui::style::{Color, Modifier, Style};

use rolodex_core::ThemeMode;

// ── Palettes ──────────────────────────────────────────────────────────

/// Accent colors shared by both modes.
pub const ACCENT_BLUE: Color = Color::Rgb(0, 122, 255); // #007aff
pub const ACCENT_PINK: Color = Color::Rgb(255, 45, 85); // #ff2d55
pub const ERROR_RED: Color = Color::Rgb(255, 69, 58); // #ff453a

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub highlight_bg: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(245, 245, 247), // #f5f5f7
    surface: Color::Rgb(255, 255, 255),
    text: Color::Rgb(29, 29, 31),        // #1d1d1f
    text_muted: Color::Rgb(110, 110, 115), // #6e6e73
    border: Color::Rgb(210, 210, 215),
    highlight_bg: Color::Rgb(229, 241, 255),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0, 0, 0),
    surface: Color::Rgb(28, 28, 30), // #1c1c1e
    text: Color::Rgb(255, 255, 255),
    text_muted: Color::Rgb(134, 134, 139), // #86868b
    border: Color::Rgb(58, 58, 60),
    highlight_bg: Color::Rgb(0, 40, 85),
};

// ── Theme ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: Palette,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        let palette = if mode.is_dark() { DARK } else { LIGHT };
        Self { mode, palette }
    }

    /// Whole-frame background.
    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .bg(self.palette.background)
    }

    /// Card / panel fill.
    pub fn surface(&self) -> Style {
        Style::default().fg(self.palette.text).bg(self.palette.surface)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(ACCENT_BLUE)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(ACCENT_BLUE)
            .bg(self.palette.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD)
    }

    /// Initial-letter avatar on the detail screen.
    pub fn avatar(&self) -> Style {
        Style::default()
            .fg(ACCENT_BLUE)
            .bg(self.palette.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Current page in the pager.
    pub fn page_active(&self) -> Style {
        Style::default()
            .fg(ACCENT_PINK)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Key hint text (e.g., "q quit  ? help").
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    /// Key hint key character.
    pub fn key_hint_key(&self) -> Style {
        Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
