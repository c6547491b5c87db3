// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod record;
pub mod specs;

pub mod evaluate;
pub mod file;
pub mod gui;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod store;
pub mod table;

pub use error::{Error, Result};
