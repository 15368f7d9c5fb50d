//! Import pipeline: one wide CSV split back into per-locale files.
//!
//! - `parse`: reads the wide CSV, validates its header and builds the table
//! - `writer`: merges the table with existing locale files and rewrites them

pub mod parse;
pub mod writer;

pub use parse::{ParsedWideCsv, parse_wide_csv, parse_wide_file};
pub use writer::{WriteMode, WrittenLocaleFile, write_back};
