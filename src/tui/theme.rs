//! TUI styles derived from the active theme
//!
//! Widgets never hold colours of their own; each draw builds a [`Styles`]
//! from `ThemeManager::current_theme()` so a theme switch repaints
//! everything on the next frame.

use ratatui::style::{Color, Modifier, Style};

use crate::core::task::{Priority, Status};
use crate::theme::{Colors, Rgb, Theme};

/// Style palette for one frame
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    theme: Theme,
}

impl Styles {
    pub fn new(theme: &Theme) -> Self {
        Self { theme: *theme }
    }

    fn colors(&self) -> &Colors {
        &self.theme.colors
    }

    fn c(rgb: Rgb) -> Color {
        rgb.into()
    }

    /// Whole-screen background
    pub fn base(&self) -> Style {
        Style::default()
            .bg(Self::c(self.colors().background))
            .fg(Self::c(self.colors().foreground))
    }

    /// Panel titles
    pub fn title(&self) -> Style {
        Style::default()
            .fg(Self::c(self.colors().primary))
            .add_modifier(Modifier::BOLD)
    }

    /// Panel borders, highlighted when the panel has focus
    pub fn border(&self, focused: bool) -> Style {
        let color = if focused {
            self.colors().focus
        } else {
            self.colors().border
        };
        Style::default().fg(Self::c(color))
    }

    /// Highlighted list row
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(Self::c(self.colors().primary))
            .fg(Self::c(self.colors().text_inverse))
            .add_modifier(Modifier::BOLD)
    }

    /// Normal text
    pub fn normal(&self) -> Style {
        Style::default().fg(Self::c(self.colors().text_primary))
    }

    /// Secondary text
    pub fn muted(&self) -> Style {
        Style::default().fg(Self::c(self.colors().text_secondary))
    }

    pub fn disabled(&self) -> Style {
        Style::default().fg(Self::c(self.colors().text_disabled))
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(Self::c(self.colors().accent))
    }

    pub fn success(&self) -> Style {
        Style::default().fg(Self::c(self.colors().success))
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Self::c(self.colors().error))
    }

    /// Status bar strip
    pub fn status_bar(&self) -> Style {
        Style::default()
            .bg(Self::c(self.colors().surface))
            .fg(Self::c(self.colors().text_secondary))
    }

    /// Help overlay body
    pub fn popup(&self) -> Style {
        Style::default()
            .bg(Self::c(self.colors().surface))
            .fg(Self::c(self.colors().text_primary))
    }

    pub fn priority(&self, priority: Priority) -> Style {
        Style::default().fg(Self::c(self.theme.priority_color(priority)))
    }

    pub fn status(&self, status: Status) -> Style {
        let style = Style::default().fg(Self::c(self.theme.status_color(status)));
        if status.is_finished() {
            style.add_modifier(Modifier::CROSSED_OUT)
        } else {
            style
        }
    }
}
