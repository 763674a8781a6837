//! The view root: the only owner of the splash screen's state.

use crate::resize::{ResizeEvents, ResizeSubscription, Viewport};
use crate::styles::{self, ContainerStyle, GlobalStyle};
use crate::theme::Theme;

/// Transient UI state, dropped together with the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Last known viewport height, in rows. Zero until the first resize.
    pub viewport_height: u16,
    /// Whether the button and the global style are shown.
    pub show_extras: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            viewport_height: 0,
            show_extras: true,
        }
    }
}

impl ViewState {
    pub fn apply_resize(&mut self, viewport: Viewport) {
        self.viewport_height = viewport.height;
    }

    pub fn toggle_extras(&mut self) {
        self.show_extras = !self.show_extras;
    }
}

/// A mounted view. Holds exactly one resize subscription for its whole
/// lifetime; unmounting (or dropping) releases it.
#[derive(Debug)]
pub struct ViewRoot {
    state: ViewState,
    resize: ResizeSubscription,
}

impl ViewRoot {
    pub fn mount(events: &ResizeEvents) -> Self {
        let resize = events.subscribe();
        tracing::info!("view mounted");
        Self {
            state: ViewState::default(),
            resize,
        }
    }

    /// Apply pending resize readings in the order they were published.
    /// Returns true if the state changed.
    pub fn sync(&mut self) -> bool {
        let before = self.state;
        for viewport in self.resize.drain() {
            self.state.apply_resize(viewport);
            tracing::debug!(height = viewport.height, "viewport height updated");
        }
        self.state != before
    }

    pub fn viewport_height(&self) -> u16 {
        self.state.viewport_height
    }

    pub fn show_extras(&self) -> bool {
        self.state.show_extras
    }

    pub fn toggle_extras(&mut self) {
        self.state.toggle_extras();
        tracing::info!(show_extras = self.state.show_extras, "extras toggled");
    }

    pub fn container_style(&self, theme: &Theme) -> ContainerStyle {
        styles::container(self.state.viewport_height, theme)
    }

    /// The screen-wide rule, present only while extras are shown.
    pub fn global_style(&self) -> Option<GlobalStyle> {
        self.state.show_extras.then(styles::global)
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for ViewRoot {
    fn drop(&mut self) {
        tracing::info!("view unmounted");
    }
}
