//! Scene Cataloguer Library
//!
//! Parses scene release names, catalogs media containers into MediaInfo
//! sidecars and restores their encoded names.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
