//! Theme and Colors
//!
//! The movcli palette: a single yellow accent on white and grays.
//!
//! Styles live in a plain [`Theme`] value handed to the renderer; nothing
//! here is mutable at runtime.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Palette
// ============================================================================

/// Accent - logo, labels, highlight
pub const ACCENT_YELLOW: Color = Color::Rgb(0xF5, 0xE6, 0x42);

/// Primary text
pub const TEXT_WHITE: Color = Color::Rgb(0xEE, 0xEE, 0xEE);

/// Secondary text and hints
pub const MUTED_GRAY: Color = Color::Rgb(0x88, 0x88, 0x88);

/// Dividers and unselected metadata
pub const DIM_GRAY: Color = Color::Rgb(0x44, 0x44, 0x44);

/// Text on accent backgrounds
pub const INK_BLACK: Color = Color::Rgb(0x11, 0x11, 0x11);

// ============================================================================
// Theme
// ============================================================================

/// Colors used by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub dim: Color,
    pub ink: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Theme {
    /// The stock palette
    pub const DEFAULT: Theme = Theme {
        accent: ACCENT_YELLOW,
        text: TEXT_WHITE,
        muted: MUTED_GRAY,
        dim: DIM_GRAY,
        ink: INK_BLACK,
    };

    fn bold(color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Border of the centered boxes
    pub fn border(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Border of the error box
    pub fn error_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn logo(&self) -> Style {
        Self::bold(self.accent)
    }

    /// Tagline under the logo
    pub fn tagline(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Section labels (`SEARCH`, `ERROR`)
    pub fn label(&self) -> Style {
        Self::bold(self.accent)
    }

    pub fn divider(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Key badges in hint lines
    pub fn key(&self) -> Style {
        Self::bold(self.ink).bg(self.accent)
    }

    /// Spinner line while waiting
    pub fn loading(&self) -> Style {
        Self::bold(self.text)
    }

    /// Body text (error message, typed query)
    pub fn body(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// `> ` in front of the search field
    pub fn prompt(&self) -> Style {
        Self::bold(self.accent)
    }

    /// Character under the cursor
    pub fn cursor(&self) -> Style {
        Style::default().fg(self.ink).bg(self.accent)
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn selected_title(&self) -> Style {
        Self::bold(self.accent)
    }

    pub fn normal_title(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn selected_desc(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn normal_desc(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// `RESULTS` badge
    pub fn list_header(&self) -> Style {
        Self::bold(self.ink).bg(self.accent)
    }

    /// Result count next to the badge
    pub fn count(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
