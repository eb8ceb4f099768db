pub mod config;
pub mod format;
pub mod list;
pub mod render;
pub mod show;
pub mod utils;
