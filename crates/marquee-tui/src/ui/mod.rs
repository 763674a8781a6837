pub mod app;
pub mod button;
pub mod splash;
