//! Sidecar and manifest generators.

pub mod checksum;
pub mod mnfo;
