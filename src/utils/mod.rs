pub mod text;
pub mod theme_loader;
