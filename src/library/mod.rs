//! Library models handed over by the host on import

pub mod models;

pub use models::*;
