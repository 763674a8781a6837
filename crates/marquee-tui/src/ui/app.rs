use super::{
    button::{Activation, Button, BUTTON_LABEL},
    splash::{render_splash, SplashRects, LINK_URL},
};
use crate::events::{AppEvent, EventHandler};
use anyhow::Result;
use crossterm::event::EventStream;
use marquee_core::{
    resize::ResizeEvents,
    settings::{Settings, SETTINGS_FILE},
    theme::Theme,
    view::ViewRoot,
};
use ratatui::{
    backend::Backend,
    prelude::{Rect, Terminal},
};
use std::path::PathBuf;

pub struct App {
    should_quit: bool,
    theme: Theme,
    settings: Settings,
    settings_path: PathBuf,
    resize: ResizeEvents,
    view: ViewRoot,
    events: EventHandler,
    hit: SplashRects,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::with_settings_path(settings, SETTINGS_FILE)
    }

    /// Like `new`, but theme changes are saved to `path`.
    pub fn with_settings_path(settings: Settings, path: impl Into<PathBuf>) -> Self {
        let resize = ResizeEvents::new();
        let view = ViewRoot::mount(&resize);
        Self {
            should_quit: false,
            theme: Theme::new(settings.theme),
            events: EventHandler::new(settings.tick_rate()),
            settings,
            settings_path: path.into(),
            resize,
            view,
            hit: SplashRects::default(),
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut stream = EventStream::new();
        while !self.should_quit() {
            self.draw(terminal)?;
            let event = self.events.next_event(&mut stream).await?;
            self.handle_event(event);
        }
        Ok(())
    }

    /// Apply pending resize readings, then redraw.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.view.sync();

        let mut rendered = Ok(SplashRects::default());
        terminal.draw(|frame| rendered = render_splash(frame, &self.view, &self.theme))?;
        self.hit = rendered?;
        Ok(())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::ToggleTheme => self.toggle_theme(),
            AppEvent::Activate(activation) => self.activate_button(activation),
            AppEvent::OpenLink => self.open_link(),
            AppEvent::Click { column, row } => {
                if self.hit.button.is_some_and(|r| contains(r, column, row)) {
                    self.activate_button(Activation::Click { column, row });
                } else if contains(self.hit.link, column, row) {
                    self.open_link();
                }
            }
            AppEvent::Resize(width, height) => self.resize.publish((width, height)),
            AppEvent::None => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn activate_button(&mut self, activation: Activation) {
        // Hidden buttons can't be pressed.
        if !self.view.show_extras() {
            return;
        }
        let view = &mut self.view;
        Button::new(BUTTON_LABEL)
            .on_activate(|_| view.toggle_extras())
            .activate(activation);
    }

    fn open_link(&self) {
        // A detached browser process gets no handle back to us.
        match open::that_detached(LINK_URL) {
            Ok(()) => tracing::info!(url = LINK_URL, "opened link"),
            Err(e) => tracing::warn!(url = LINK_URL, error = %e, "failed to open link"),
        }
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.settings.theme = self.theme.variant();
        if let Err(e) = self.settings.save_to(&self.settings_path) {
            tracing::warn!(error = %e, "failed to persist theme");
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
