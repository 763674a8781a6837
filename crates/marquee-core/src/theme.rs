//! Everforest theme for Marquee
//!
//! Dark and light palettes, plus the mapping from screen elements to ratatui styles.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeVariant {
    /// Everforest Dark (default)
    #[default]
    EverforestDark,
    /// Everforest Light
    EverforestLight,
}

impl ThemeVariant {
    pub fn toggled(self) -> Self {
        match self {
            Self::EverforestDark => Self::EverforestLight,
            Self::EverforestLight => Self::EverforestDark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color, // green
    pub link: Color,   // aqua
    pub code: Color,   // yellow
    pub border: Color,
    pub surface: Color,
}

/// Elements of the splash screen that carry their own look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Text,
    Logo,
    Code,
    Link,
    Button,
    Container,
    Border,
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::EverforestDark => ColorPalette {
                background: Color::Rgb(45, 53, 59),    // #2d353b
                foreground: Color::Rgb(211, 198, 170), // #d3c6aa
                accent: Color::Rgb(167, 192, 128),     // #a7c080
                link: Color::Rgb(127, 187, 179),       // #7fbbb3
                code: Color::Rgb(219, 188, 127),       // #dbbc7f
                border: Color::Rgb(116, 125, 135),     // #747d87
                surface: Color::Rgb(64, 72, 78),       // #40484e
            },
            ThemeVariant::EverforestLight => ColorPalette {
                background: Color::Rgb(253, 246, 227), // #fdf6e3
                foreground: Color::Rgb(92, 106, 114),  // #5c6a72
                accent: Color::Rgb(141, 161, 1),       // #8da101
                link: Color::Rgb(53, 167, 124),        // #35a77c
                code: Color::Rgb(207, 131, 44),        // #cf832c
                border: Color::Rgb(150, 160, 170),     // #96a0aa
                surface: Color::Rgb(243, 236, 217),    // #f3ecd9
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    /// Switch between the dark and light variants
    pub fn toggle(&mut self) {
        *self = Self::new(self.variant.toggled());
    }

    pub fn ratatui_style(&self, element: Element) -> Style {
        let base = Style::default().bg(self.colors.background);
        match element {
            Element::Text => base.fg(self.colors.foreground),
            Element::Logo => base.fg(self.colors.link).add_modifier(Modifier::BOLD),
            Element::Code => base.fg(self.colors.code),
            Element::Link => base
                .fg(self.colors.link)
                .add_modifier(Modifier::UNDERLINED),
            Element::Button => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.surface)
                .add_modifier(Modifier::BOLD),
            Element::Container => base.fg(self.colors.foreground),
            Element::Border => base.fg(self.colors.border),
            Element::Hint => base
                .fg(self.colors.border)
                .add_modifier(Modifier::ITALIC),
        }
    }
}
