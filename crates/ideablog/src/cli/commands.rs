//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ideablog - turn raw ideas into narratives and styled blog posts
#[derive(Parser, Debug)]
#[command(name = "ideablog")]
#[command(about = "Turn raw ideas into expanded narratives and styled blog posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP relay and browser front end
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },

    /// Expand a brain dump into a narrative and refine it interactively
    Think {
        /// Where to write the final narrative
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write the raw interaction log here
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Turn a draft read from stdin into a styled blog post
    Blog {
        /// Where to write the conversion history
        #[arg(long)]
        history: Option<PathBuf>,
    },
}
