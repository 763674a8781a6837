use super::button::{Button, BUTTON_LABEL};
use crate::layout::{HeaderLayout, HeaderSizes};
use marquee_core::{
    styles::{self, BUTTON_HEIGHT},
    theme::{Element, Theme},
    view::ViewRoot,
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use taffy::TaffyError;

pub const LOGO: &str = include_str!("../../assets/logo.txt");
pub const LINK_LABEL: &str = "Learn Ratatui";
pub const LINK_URL: &str = "https://ratatui.rs";

/// Screen regions from the last render, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplashRects {
    /// Content area after the global padding (if any).
    pub body: Rect,
    /// The container as drawn: its style height, clamped to the body.
    pub container: Rect,
    pub link: Rect,
    pub button: Option<Rect>,
}

pub fn render_splash(
    frame: &mut Frame,
    view: &ViewRoot,
    theme: &Theme,
) -> Result<SplashRects, TaffyError> {
    let area = frame.size();
    frame.render_widget(
        Block::new()
            .borders(Borders::NONE)
            .style(theme.ratatui_style(Element::Text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let body = match view.global_style() {
        Some(global) => Block::new().padding(global.padding).inner(chunks[0]),
        None => chunks[0],
    };

    let container_style = view.container_style(theme);
    let container = Rect {
        height: container_style.height.min(body.height),
        ..body
    };
    frame.render_widget(
        Block::new()
            .borders(Borders::ALL)
            .title(format!(" {} rows ", container_style.height))
            .border_style(theme.ratatui_style(Element::Border))
            .style(container_style.style),
        container,
    );

    let paragraph_style = styles::paragraph(theme);
    let edit_line = Line::from(vec![
        Span::styled("Edit ", paragraph_style.style),
        Span::styled("src/ui/splash.rs", theme.ratatui_style(Element::Code)),
        Span::styled(" and rebuild to reload.", paragraph_style.style),
    ]);

    let button = view.show_extras().then(|| {
        Button::new(BUTTON_LABEL)
            .style(styles::button(theme).within(container_style.button_scope()))
    });

    let logo_width = LOGO.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let sizes = HeaderSizes {
        logo: (logo_width as u16, LOGO.lines().count() as u16),
        paragraph: (edit_line.width() as u16, paragraph_style.outer_height(1)),
        link: (LINK_LABEL.chars().count() as u16, 1),
        button: button.as_ref().map(|b| (b.width(), BUTTON_HEIGHT)),
    }
    .fit_height(body.height, 1);
    // Content overflows the container like an unclipped box would.
    let rects = HeaderLayout::new(sizes, body.width)?.compute(body)?;

    // A squeezed paragraph keeps its text row and loses the padding.
    let paragraph_padding = if rects.paragraph.height >= paragraph_style.outer_height(1) {
        paragraph_style.padding
    } else {
        Padding::zero()
    };

    frame.render_widget(
        Paragraph::new(LOGO).style(theme.ratatui_style(Element::Logo)),
        rects.logo,
    );
    frame.render_widget(
        Paragraph::new(edit_line)
            .alignment(Alignment::Center)
            .block(Block::new().padding(paragraph_padding))
            .style(paragraph_style.style),
        rects.paragraph,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(LINK_LABEL, theme.ratatui_style(Element::Link))),
        rects.link,
    );
    if let (Some(button), Some(rect)) = (&button, rects.button) {
        frame.render_widget(button, rect);
    }

    render_hints(frame, chunks[1], theme, view.show_extras());

    Ok(SplashRects {
        body,
        container,
        link: rects.link,
        button: rects.button,
    })
}

fn render_hints(frame: &mut Frame, area: Rect, theme: &Theme, show_button: bool) {
    let hint = theme.ratatui_style(Element::Hint);
    let mut spans = Vec::new();
    if show_button {
        spans.extend([Span::raw("[Enter]"), Span::styled(" button  ", hint)]);
    }
    spans.extend([
        Span::raw("[O]"),
        Span::styled("pen link  ", hint),
        Span::raw("[T]"),
        Span::styled("heme  ", hint),
        Span::raw("[Q]"),
        Span::styled("uit", hint),
    ]);

    frame.render_widget(
        Paragraph::new(Line::from(spans).alignment(Alignment::Center))
            .style(theme.ratatui_style(Element::Text)),
        area,
    );
}
