//! Main module for rigref library functionality

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod formats;
pub mod loader;
pub mod resolver;
pub mod testing;
