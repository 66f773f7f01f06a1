//! Storage Layer
//!
//! Configuration loading. Plans and client state live in memory only.

pub mod config;

pub use config::*;
