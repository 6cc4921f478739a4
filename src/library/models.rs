//! Album and item models

use serde::Deserialize;
use std::path::PathBuf;

/// A track in the library
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub title: String,
    /// Location on disk; `None` when the host could not resolve one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Item {
    pub fn new(title: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            path: Some(path.into()),
        }
    }
}

/// An album and its tracks, in track order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(alias = "album")]
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Album {
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist: None,
            items,
        }
    }
}

/// Everything imported in one run, as read by the CLI
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportManifest {
    #[serde(default)]
    pub albums: Vec<Album>,
    /// Singleton tracks imported without an album
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ImportManifest {
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let json = r#"{
            "albums": [
                {
                    "album": "album/name",
                    "artist": "Somebody",
                    "items": [
                        { "title": "song", "path": "/music/a/01.flac" },
                        { "title": "lost" }
                    ]
                }
            ],
            "items": [{ "title": "single", "path": "/music/single.mp3" }]
        }"#;

        let manifest: ImportManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.albums.len(), 1);

        let album = &manifest.albums[0];
        assert_eq!(album.title, "album/name");
        assert_eq!(album.id, None);
        assert_eq!(album.items[0].path, Some(PathBuf::from("/music/a/01.flac")));
        assert_eq!(album.items[1].path, None);
        assert_eq!(manifest.items[0].title, "single");
    }

    #[test]
    fn test_empty_manifest() {
        let manifest: ImportManifest = serde_json::from_str("{}").unwrap();
        assert!(manifest.is_empty());
    }
}
