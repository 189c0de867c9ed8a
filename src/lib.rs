pub mod config;
pub mod content;
pub mod internal;
pub mod tui;
pub mod utils;
