//! CLI command handlers

use anyhow::{Context, Result};
use clap_complete::generate;
use colored::Colorize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use importfeeds::feeds::{
    FeedFormat, FeedsConfig, ImportListener, ImportSession, PlaylistWriter, RecordOutcome,
};
use importfeeds::library::ImportManifest;

/// Totals across one import run
#[derive(Debug, Default)]
struct ImportSummary {
    albums: usize,
    items: usize,
    entries: usize,
    skipped: usize,
    failed: usize,
    links: usize,
    playlists: Vec<PathBuf>,
}

impl ImportSummary {
    fn add(&mut self, outcome: RecordOutcome) {
        self.entries += outcome.entries;
        self.skipped += outcome.skipped;
        self.links += outcome.links.len();
        for playlist in outcome.playlists {
            if !self.playlists.contains(&playlist) {
                self.playlists.push(playlist);
            }
        }
    }
}

fn load_config(config_path: Option<&Path>) -> Result<FeedsConfig> {
    FeedsConfig::load(config_path).context("Invalid importfeeds configuration")
}

fn load_manifest(path: &Path) -> Result<ImportManifest> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {:?}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse manifest {:?}", path))
}

/// Handle the `import` command
pub fn import(config_path: Option<PathBuf>, manifests: Vec<PathBuf>, keep_going: bool) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    if config.formats.is_empty() {
        println!(
            "{}",
            "No feed formats configured, nothing will be recorded.".yellow()
        );
    }

    // Read everything up front so a bad manifest doesn't leave a half-written session
    let manifests = manifests
        .iter()
        .map(|path| load_manifest(path))
        .collect::<Result<Vec<_>>>()?;

    let writer = PlaylistWriter::new(config);
    let session = writer.on_import_begin();
    info!("Import session started at {}", session.stamp());

    let mut summary = ImportSummary::default();
    for manifest in &manifests {
        for album in &manifest.albums {
            let result = writer.on_album_imported(&session, album);
            record(&mut summary, result, &album.title, keep_going)?;
            summary.albums += 1;
        }
        for item in &manifest.items {
            let result = writer.on_item_imported(&session, item);
            record(&mut summary, result, &item.title, keep_going)?;
            summary.items += 1;
        }
    }

    print_summary(&session, &summary);
    Ok(())
}

fn record(
    summary: &mut ImportSummary,
    result: importfeeds::feeds::Result<RecordOutcome>,
    name: &str,
    keep_going: bool,
) -> Result<()> {
    match result {
        Ok(outcome) => {
            summary.add(outcome);
            Ok(())
        }
        Err(e) if keep_going => {
            error!("Failed to record '{}': {}", name, e);
            summary.failed += 1;
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("Failed to record '{}'", name)),
    }
}

fn print_summary(session: &ImportSession, summary: &ImportSummary) {
    println!();
    println!("{}", "Import recorded!".green().bold());
    println!("  Session: {}", session.stamp());
    println!("  Albums: {}", summary.albums);
    println!("  Singletons: {}", summary.items);
    println!("  Tracks recorded: {}", summary.entries);
    if summary.skipped > 0 {
        println!("  {}", format!("Tracks without a path: {}", summary.skipped).yellow());
    }
    if summary.failed > 0 {
        println!("  {}", format!("Failed: {}", summary.failed).red());
    }
    if summary.links > 0 {
        println!("  Links created: {}", summary.links);
    }
    for playlist in &summary.playlists {
        println!("  Playlist: {}", playlist.display());
    }
}

/// Handle the `config` command
pub fn show_config(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let writer = PlaylistWriter::new(config);
    let config = writer.config();

    println!("{}", "importfeeds configuration".cyan().bold());
    match config_path.or_else(importfeeds::feeds::ConfigFile::default_path) {
        Some(path) => println!("  File: {}", path.display()),
        None => println!("  File: (none)"),
    }
    println!("  Feeds dir: {}", config.feeds_dir.display());
    if config.formats.is_empty() {
        println!("  Formats: {}", "(none)".yellow());
    } else {
        let names: Vec<_> = config.formats.iter().map(|f| f.name()).collect();
        println!("  Formats: {}", names.join(", "));
    }
    if config.absolute_path {
        println!("  Paths: absolute");
    } else {
        println!("  Paths: relative to {}", config.relative_to.display());
    }

    if config.has(FeedFormat::M3u) {
        println!("  Combined playlist: {}", writer.combined_playlist_path().display());
    }
    if config.has(FeedFormat::M3uSession) {
        let example = writer.session_playlist_path(&ImportSession::begin());
        println!("  Session playlist: {}", example.display());
    }
    if config.has(FeedFormat::M3uMulti) {
        println!(
            "  Album playlists: {}",
            writer.album_playlist_path("<album>").display()
        );
    }

    Ok(())
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    generate(shell, &mut cmd, "importfeeds", &mut io::stdout());
}

// Extension trait for Cli to get clap Command
impl super::Cli {
    fn command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
