//! Command-line interface module.
//!
//! CLI structure and command handlers for the ideablog binary.

mod blog;
mod commands;
mod serve;
mod think;

pub use blog::run_blog;
pub use commands::{Cli, Commands};
pub use serve::run_serve;
pub use think::run_think;
