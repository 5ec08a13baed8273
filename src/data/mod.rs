//! Data loading and external game content
//!
//! This module handles loading the skill catalog and probability tables from
//! external RON files, so tables can be tuned without rebuilding.

pub mod loader;

pub use loader::{DataManager, export_default_data, DEFAULT_DATA_DIR, CATALOG_FILE, PROBABILITIES_FILE};
