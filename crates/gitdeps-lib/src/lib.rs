pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod output;
pub mod passthrough;
pub mod urls;
pub mod xml;

pub use config::Config;
pub use error::GitDepsError;
