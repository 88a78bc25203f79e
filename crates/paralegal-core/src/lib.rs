pub mod config;
pub mod parties;
pub mod renderer;
pub mod report;
pub mod tables;
pub mod types;

pub use types::*;
