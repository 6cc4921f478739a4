//! importfeeds - Write M3U playlists of freshly imported music

pub mod feeds;
pub mod library;
pub mod utils;
