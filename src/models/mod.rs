//! Data models.

pub mod config;
pub mod container;
pub mod release;
pub mod source;
