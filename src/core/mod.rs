//! Core business logic modules.

pub mod cataloguer;
pub mod parser;
pub mod scanner;
