//! Action templates: staged builders and resolved instances

pub mod builder;
pub mod config;
pub mod instance;

pub use builder::*;
pub use config::*;
pub use instance::*;
