//! Data Models
//!
//! Wire envelope and configuration models.

pub mod response;
pub mod settings;

pub use response::*;
pub use settings::*;
