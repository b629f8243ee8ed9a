pub mod commands;
pub mod handlers;
pub mod output;
pub mod prompt;

pub use commands::*;
pub use handlers::*;
pub use prompt::{Prompter, TerminalPrompter};
