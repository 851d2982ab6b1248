pub mod logger;
pub mod tui;
