//! Style rules for the splash screen.
//!
//! Every rule is a pure function of its parameter and the active theme. The
//! container hands buttons rendered inside it a [`ButtonScope`] token instead of
//! reaching into them by selector; a button only picks the override up when the
//! token is applied with [`ButtonStyle::within`].

use crate::theme::{Element, Theme};
use ratatui::{
    style::{Color, Style},
    widgets::Padding,
};

/// Fixed button width, in cells.
pub const BUTTON_WIDTH: u16 = 18;
/// Rows taken by a button: label plus top and bottom border.
pub const BUTTON_HEIGHT: u16 = 3;

/// Style override a container applies to buttons nested inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonScope {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerStyle {
    /// Explicit container height, in rows.
    pub height: u16,
    pub style: Style,
    button_scope: ButtonScope,
}

impl ContainerStyle {
    /// The token to hand to buttons rendered inside this container.
    pub fn button_scope(&self) -> ButtonScope {
        self.button_scope
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub width: u16,
    pub style: Style,
}

impl ButtonStyle {
    /// Apply a container's scoped override.
    pub fn within(self, scope: ButtonScope) -> Self {
        Self {
            style: self.style.bg(scope.background).fg(scope.foreground),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphStyle {
    pub padding: Padding,
    pub style: Style,
}

impl ParagraphStyle {
    /// Rows taken by `lines` lines of text plus vertical padding.
    pub fn outer_height(&self, lines: u16) -> u16 {
        lines + self.padding.top + self.padding.bottom
    }
}

/// Screen-wide rule, applied only while the view asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalStyle {
    pub padding: Padding,
}

pub fn container(height: u16, theme: &Theme) -> ContainerStyle {
    ContainerStyle {
        height,
        style: theme.ratatui_style(Element::Container),
        button_scope: ButtonScope {
            background: theme.colors().accent,
            foreground: theme.colors().background,
        },
    }
}

pub fn button(theme: &Theme) -> ButtonStyle {
    ButtonStyle {
        width: BUTTON_WIDTH,
        style: theme.ratatui_style(Element::Button),
    }
}

pub fn paragraph(theme: &Theme) -> ParagraphStyle {
    ParagraphStyle {
        padding: Padding::new(0, 0, 1, 1),
        style: theme.ratatui_style(Element::Text),
    }
}

pub fn global() -> GlobalStyle {
    GlobalStyle {
        padding: Padding::new(4, 4, 2, 2),
    }
}
