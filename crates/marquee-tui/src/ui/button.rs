//! A fixed-width, bordered push button.
//!
//! The button has no state of its own. Whatever callback it is given receives
//! each activation as-is, once.

use crossterm::event::KeyCode;
use marquee_core::styles::ButtonStyle;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const BUTTON_LABEL: &str = "Just a button";

/// How the button was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Key(KeyCode),
    Click { column: u16, row: u16 },
}

type Handler<'a> = Box<dyn FnMut(Activation) + 'a>;

pub struct Button<'a> {
    label: &'a str,
    style: Option<ButtonStyle>,
    on_activate: Option<Handler<'a>>,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: None,
            on_activate: None,
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn on_activate(mut self, handler: impl FnMut(Activation) + 'a) -> Self {
        self.on_activate = Some(Box::new(handler));
        self
    }

    pub fn activate(&mut self, activation: Activation) {
        if let Some(handler) = self.on_activate.as_mut() {
            handler(activation);
        }
    }

    /// Rendered width: the style's fixed width, or the label plus borders.
    pub fn width(&self) -> u16 {
        self.style
            .map(|s| s.width)
            .unwrap_or_else(|| self.label.chars().count() as u16 + 2)
    }
}

impl Widget for &Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            width: self.width().min(area.width),
            ..area
        };
        let mut block = Block::default().borders(Borders::ALL);
        let mut paragraph = Paragraph::new(self.label).alignment(Alignment::Center);
        if let Some(style) = self.style {
            block = block.style(style.style);
            paragraph = paragraph.style(style.style);
        }
        paragraph.block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{styles, theme::Theme};

    #[test]
    fn test_handler_called_once_per_activation_with_same_argument() {
        let mut received = Vec::new();
        {
            let mut button = Button::new(BUTTON_LABEL).on_activate(|a| received.push(a));
            button.activate(Activation::Key(KeyCode::Enter));
            button.activate(Activation::Click { column: 4, row: 9 });
        }
        assert_eq!(
            received,
            vec![
                Activation::Key(KeyCode::Enter),
                Activation::Click { column: 4, row: 9 }
            ]
        );
    }

    #[test]
    fn test_activation_without_handler_is_harmless() {
        let mut button = Button::new(BUTTON_LABEL);
        button.activate(Activation::Key(KeyCode::Enter));
    }

    #[test]
    fn test_fixed_width_from_style() {
        let style = styles::button(&Theme::default());
        let button = Button::new(BUTTON_LABEL).style(style);
        assert_eq!(button.width(), styles::BUTTON_WIDTH);

        let unstyled = Button::new("ok");
        assert_eq!(unstyled.width(), 4);
    }

    #[test]
    fn test_render_keeps_to_fixed_width() {
        let style = styles::button(&Theme::default());
        let button = Button::new(BUTTON_LABEL).style(style);
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 3));
        (&button).render(buf.area, &mut buf);

        let middle: String = (0..30).map(|x| buf.get(x, 1).symbol()).collect();
        assert!(middle.contains(BUTTON_LABEL));
        // Past the fixed width nothing is drawn
        assert_eq!(buf.get(styles::BUTTON_WIDTH, 1).symbol(), " ");
        assert_eq!(buf.get(styles::BUTTON_WIDTH - 1, 1).symbol(), "│");
    }
}
