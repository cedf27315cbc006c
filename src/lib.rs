// Product session manager library - exposes all core modules for testing

pub mod app;
pub mod clock;
pub mod config;
pub mod export;
pub mod form;
pub mod logging;
pub mod registry;
pub mod session;
pub mod view;
