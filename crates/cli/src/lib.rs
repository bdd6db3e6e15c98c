//! Terminal interface: argument parsing, the interactive menu loop, and
//! request/response rendering around the inventory core.

pub mod app;
pub mod args;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;

pub use args::{CliOptions, OutputFormat};
pub use session::Session;
