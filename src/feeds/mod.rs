//! Playlist feeds for imported music

pub mod config;
pub mod error;
pub mod session;
pub mod writer;

pub use config::{ConfigFile, FeedFormat, FeedsConfig};
pub use error::{FeedsError, Result};
pub use session::ImportSession;
pub use writer::{ImportListener, PlaylistWriter, RecordOutcome};
