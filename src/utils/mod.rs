//! Utility functions

mod m3u;
pub mod paths;
mod sanitize;

pub use m3u::{render_m3u, write_m3u, WriteMode};
pub use sanitize::sanitize_filename;
