//! # Marquee Core Library
//!
//! State and styling for the Marquee splash screen, independent of the terminal
//! backend that draws it.
//!
//! ## Modules
//!
//! - `resize`: the resize notification hub and scoped subscriptions
//! - `view`: the view root that owns the screen's state
//! - `styles`: container, button, paragraph and global style rules
//! - `theme`: Everforest palettes
//! - `settings`: configuration loaded from `marquee.toml`

pub mod resize;
pub mod settings;
pub mod styles;
pub mod theme;
pub mod view;
