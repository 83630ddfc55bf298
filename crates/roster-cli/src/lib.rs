//! Terminal front-end for the roster record browser.

pub mod command;
pub mod logging;
pub mod render;
pub mod session;
pub mod settings;
