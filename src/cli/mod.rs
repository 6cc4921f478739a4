//! CLI module for importfeeds

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "importfeeds", about = "Record imported music as M3U playlists")]
#[command(version, author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ~/.config/importfeeds/config.json)
    #[arg(short, long, global = true, env = "IMPORTFEEDS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one import session over the albums and items in manifest files
    Import {
        /// JSON manifests with `albums` and `items`
        #[arg(value_name = "MANIFEST", required = true)]
        manifests: Vec<PathBuf>,

        /// Log write failures and continue with the next album
        #[arg(long)]
        keep_going: bool,
    },

    /// Show the resolved configuration and playlist locations
    Config,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
