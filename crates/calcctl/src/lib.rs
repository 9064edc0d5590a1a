//! calcctl library - exposes modules for integration tests

pub mod cli;
pub mod client;
pub mod display;
pub mod errors;
pub mod format;
pub mod logging;
pub mod pages;
