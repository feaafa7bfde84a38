//! Main module for lexcheck library functionality

pub mod artifact;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod lexing;
pub mod loader;
pub mod logging;
pub mod position;
pub mod testing;
pub mod token;
pub mod validation;
