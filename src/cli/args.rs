//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::storage::StorageLayout;

/// msgtpl - Compose a message from recipient, author, topic and template libraries
#[derive(Parser, Debug)]
#[command(name = "msgtpl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base directory holding recipients.txt, authors.txt, info_options.txt,
    /// templates/ and output/. Created and seeded with examples on first run.
    /// Defaults to ~/message_templates.
    #[arg(short, long, env = "MSGTPL_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Exit right after the message is written instead of waiting for Enter
    #[arg(long, default_value = "false")]
    pub no_pause: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Cli {
    /// Storage layout rooted at the chosen base directory.
    pub fn layout(&self) -> StorageLayout {
        let base_dir = self
            .base_dir
            .clone()
            .unwrap_or_else(StorageLayout::default_base_dir);
        StorageLayout::new(base_dir)
    }
}
