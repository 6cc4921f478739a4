//! Feed configuration
//!
//! Read from ~/.config/importfeeds/config.json (or an explicit path) and
//! resolved once at startup into a typed [`FeedsConfig`].

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use super::error::{FeedsError, Result};
use crate::utils::paths::expand_home;

/// Default name for the combined and session playlists
pub const DEFAULT_M3U_NAME: &str = "imported.m3u";

/// Ways of recording imported tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedFormat {
    /// One combined playlist appended to across all imports
    M3u,
    /// One playlist per album, rewritten on each import
    M3uMulti,
    /// One playlist per import session
    M3uSession,
    /// A symlink per track in the feeds directory
    Link,
    /// Log the track locations
    Echo,
}

impl FeedFormat {
    pub const ALL: [FeedFormat; 5] = [
        FeedFormat::M3u,
        FeedFormat::M3uMulti,
        FeedFormat::M3uSession,
        FeedFormat::Link,
        FeedFormat::Echo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FeedFormat::M3u => "m3u",
            FeedFormat::M3uMulti => "m3u_multi",
            FeedFormat::M3uSession => "m3u_session",
            FeedFormat::Link => "link",
            FeedFormat::Echo => "echo",
        }
    }
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeedFormat {
    type Err = FeedsError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FeedsError::UnknownFormat(name.to_string()))
    }
}

/// `formats` may be written as a single name or a list of names
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FormatList {
    One(String),
    Many(Vec<String>),
}

impl Default for FormatList {
    fn default() -> Self {
        FormatList::Many(Vec::new())
    }
}

impl FormatList {
    fn names(&self) -> Vec<&str> {
        match self {
            FormatList::One(name) => name.split_whitespace().collect(),
            FormatList::Many(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

/// On-disk configuration, as written by the user
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Output directory (defaults to the library directory)
    pub dir: Option<PathBuf>,
    /// Host library base directory
    pub library_dir: Option<PathBuf>,
    pub formats: FormatList,
    /// Combined/session playlist name, may include subdirectories
    pub m3u_name: String,
    /// Base for relative entries (defaults to the output directory)
    pub relative_to: Option<PathBuf>,
    /// Write absolute paths instead of relative ones
    pub absolute_path: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            dir: None,
            library_dir: None,
            formats: FormatList::default(),
            m3u_name: DEFAULT_M3U_NAME.to_string(),
            relative_to: None,
            absolute_path: false,
        }
    }
}

impl ConfigFile {
    /// Load the config file, falling back to defaults when it doesn't exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    debug!("Could not determine config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            debug!("No config found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| FeedsError::Config {
            path: path.clone(),
            source: Box::new(e),
        })?;

        let file: Self = serde_json::from_str(&contents).map_err(|e| FeedsError::Config {
            path: path.clone(),
            source: Box::new(e),
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(file)
    }

    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("importfeeds").join("config.json"))
    }

    /// Validate and fill in defaults
    pub fn resolve(self) -> Result<FeedsConfig> {
        let mut formats = Vec::new();
        for name in self.formats.names() {
            let format: FeedFormat = name.parse()?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }

        let library_dir = self
            .library_dir
            .map(|dir| expand_home(&dir))
            .unwrap_or_else(default_library_dir);

        let feeds_dir = self
            .dir
            .map(|dir| expand_home(&dir))
            .unwrap_or(library_dir);

        let relative_to = self
            .relative_to
            .map(|dir| expand_home(&dir))
            .unwrap_or_else(|| feeds_dir.clone());

        Ok(FeedsConfig {
            feeds_dir,
            formats,
            m3u_name: PathBuf::from(self.m3u_name),
            relative_to,
            absolute_path: self.absolute_path,
        })
    }
}

fn default_library_dir() -> PathBuf {
    dirs::audio_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Music")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolved feed configuration
#[derive(Debug, Clone)]
pub struct FeedsConfig {
    /// Directory all playlists and links are written under
    pub feeds_dir: PathBuf,
    /// Enabled formats, in the order they are written
    pub formats: Vec<FeedFormat>,
    pub m3u_name: PathBuf,
    pub relative_to: PathBuf,
    pub absolute_path: bool,
}

impl FeedsConfig {
    /// Config writing the given formats to `feeds_dir` with default naming
    pub fn new(feeds_dir: impl Into<PathBuf>, formats: &[FeedFormat]) -> Self {
        let feeds_dir = feeds_dir.into();
        let mut deduped = Vec::new();
        for format in formats {
            if !deduped.contains(format) {
                deduped.push(*format);
            }
        }
        Self {
            relative_to: feeds_dir.clone(),
            feeds_dir,
            formats: deduped,
            m3u_name: PathBuf::from(DEFAULT_M3U_NAME),
            absolute_path: false,
        }
    }

    /// Load and resolve in one step
    pub fn load(path: Option<&Path>) -> Result<Self> {
        ConfigFile::load(path)?.resolve()
    }

    pub fn has(&self, format: FeedFormat) -> bool {
        self.formats.contains(&format)
    }
}
