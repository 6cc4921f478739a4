//! Playlist writer driven by import events

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::config::{FeedFormat, FeedsConfig};
use super::error::{FeedsError, Result};
use super::session::ImportSession;
use crate::library::{Album, Item};
use crate::utils::paths::{absolute_normalized, relative_to};
use crate::utils::{sanitize_filename, write_m3u, WriteMode};

/// Events a host library fires during an import run
pub trait ImportListener {
    /// An import run is starting
    fn on_import_begin(&self) -> ImportSession;

    /// An album finished importing
    fn on_album_imported(&self, session: &ImportSession, album: &Album) -> Result<RecordOutcome>;

    /// A singleton track finished importing
    fn on_item_imported(&self, session: &ImportSession, item: &Item) -> Result<RecordOutcome>;
}

/// What happened while recording one import event
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordOutcome {
    /// Entries recorded per format
    pub entries: usize,
    /// Items without a usable path
    pub skipped: usize,
    /// Playlist files written
    pub playlists: Vec<PathBuf>,
    /// Symlinks created
    pub links: Vec<PathBuf>,
}

/// Records imported tracks as playlists, links or log lines
pub struct PlaylistWriter {
    config: FeedsConfig,
}

impl PlaylistWriter {
    pub fn new(config: FeedsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedsConfig {
        &self.config
    }

    /// Path of the combined playlist
    pub fn combined_playlist_path(&self) -> PathBuf {
        self.config.feeds_dir.join(&self.config.m3u_name)
    }

    /// Path of the playlist for an import session
    ///
    /// `imports.m3u` becomes `imports_20240309_14h05.m3u`; any subdirectory
    /// in the configured name is kept.
    pub fn session_playlist_path(&self, session: &ImportSession) -> PathBuf {
        let name = self
            .config
            .m3u_name
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = strip_m3u_extension(&name);
        let file_name = format!("{}_{}.m3u", stem, session.stamp());

        match self.config.m3u_name.parent() {
            Some(parent) => self.config.feeds_dir.join(parent).join(file_name),
            None => self.config.feeds_dir.join(file_name),
        }
    }

    /// Path of the playlist for a single album
    pub fn album_playlist_path(&self, title: &str) -> PathBuf {
        self.config
            .feeds_dir
            .join(format!("{}.m3u", sanitize_filename(title)))
    }

    /// Record a batch of items under every configured format
    pub fn record_items(
        &self,
        session: &ImportSession,
        basename: &str,
        items: &[Item],
    ) -> Result<RecordOutcome> {
        let mut outcome = RecordOutcome::default();

        if self.config.formats.is_empty() {
            debug!("No feed formats configured, skipping '{}'", basename);
            return Ok(outcome);
        }

        let base = if self.config.absolute_path {
            None
        } else {
            let relative_to = &self.config.relative_to;
            Some(absolute_normalized(relative_to).map_err(|e| FeedsError::io(relative_to, e))?)
        };

        let mut entries = Vec::with_capacity(items.len());
        for item in items {
            match &item.path {
                Some(path) if !path.as_os_str().is_empty() => {
                    entries.push(entry_path(path, base.as_deref())?);
                }
                _ => {
                    warn!("Track '{}' has no path, leaving it out of feeds", item.title);
                    outcome.skipped += 1;
                }
            }
        }

        if entries.is_empty() {
            debug!("No track paths for '{}', nothing to record", basename);
            return Ok(outcome);
        }
        outcome.entries = entries.len();

        for format in &self.config.formats {
            match format {
                FeedFormat::M3u => {
                    let path = self.combined_playlist_path();
                    write_playlist(&path, &entries, WriteMode::Append)?;
                    outcome.playlists.push(path);
                }
                FeedFormat::M3uSession => {
                    let path = self.session_playlist_path(session);
                    write_playlist(&path, &entries, WriteMode::Append)?;
                    outcome.playlists.push(path);
                }
                FeedFormat::M3uMulti => {
                    let path = self.album_playlist_path(basename);
                    write_playlist(&path, &entries, WriteMode::Overwrite)?;
                    outcome.playlists.push(path);
                }
                FeedFormat::Link => {
                    outcome.links.extend(self.link_entries(&entries)?);
                }
                FeedFormat::Echo => {
                    info!("Location of imported music:");
                    for entry in &entries {
                        info!("  {}", entry.display());
                    }
                }
            }
        }

        Ok(outcome)
    }

    /// Link each entry into the feeds directory, leaving existing files alone
    fn link_entries(&self, entries: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let feeds_dir = &self.config.feeds_dir;
        std::fs::create_dir_all(feeds_dir).map_err(|e| FeedsError::io(feeds_dir, e))?;

        let mut links = Vec::new();
        for entry in entries {
            let Some(file_name) = entry.file_name() else {
                warn!("Cannot link {}: no file name", entry.display());
                continue;
            };
            let dest = feeds_dir.join(file_name);

            if dest.symlink_metadata().is_ok() {
                debug!("Link target exists, skipping: {}", dest.display());
                continue;
            }

            symlink(entry, &dest)?;
            debug!("Linked {} -> {}", dest.display(), entry.display());
            links.push(dest);
        }
        Ok(links)
    }
}

impl ImportListener for PlaylistWriter {
    fn on_import_begin(&self) -> ImportSession {
        let session = ImportSession::begin();
        if self.config.has(FeedFormat::M3uSession) {
            info!(
                "Session playlist: {}",
                self.session_playlist_path(&session).display()
            );
        }
        session
    }

    fn on_album_imported(&self, session: &ImportSession, album: &Album) -> Result<RecordOutcome> {
        debug!(
            "Album imported: {} ({} tracks)",
            album.title,
            album.items.len()
        );
        self.record_items(session, &album.title, &album.items)
    }

    fn on_item_imported(&self, session: &ImportSession, item: &Item) -> Result<RecordOutcome> {
        debug!("Item imported: {}", item.title);
        self.record_items(session, &item.title, std::slice::from_ref(item))
    }
}

/// Form of a track path written to feeds; absolute when `base` is `None`
fn entry_path(path: &Path, base: Option<&Path>) -> Result<PathBuf> {
    let absolute = absolute_normalized(path).map_err(|e| FeedsError::io(path, e))?;

    Ok(match base {
        // No relative form across drives, fall back to the absolute path
        Some(base) => relative_to(&absolute, base).unwrap_or(absolute),
        None => absolute,
    })
}

fn write_playlist(path: &Path, entries: &[PathBuf], mode: WriteMode) -> Result<()> {
    write_m3u(path, entries, mode).map_err(|e| FeedsError::io(path, e))?;
    debug!("Wrote M3U: {} ({} tracks)", path.display(), entries.len());
    Ok(())
}

fn strip_m3u_extension(name: &str) -> &str {
    let split = name.len().saturating_sub(4);
    match (name.get(..split), name.get(split..)) {
        (Some(stem), Some(ext)) if ext.eq_ignore_ascii_case(".m3u") => stem,
        _ => name,
    }
}

#[cfg(unix)]
fn symlink(target: &Path, dest: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, dest).map_err(|e| FeedsError::io(dest, e))
}

#[cfg(windows)]
fn symlink(target: &Path, dest: &Path) -> Result<()> {
    std::os::windows::fs::symlink_file(target, dest).map_err(|e| FeedsError::io(dest, e))
}

#[cfg(not(any(unix, windows)))]
fn symlink(_target: &Path, dest: &Path) -> Result<()> {
    Err(FeedsError::LinkUnsupported(dest.to_path_buf()))
}
