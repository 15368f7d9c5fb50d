//! Labelsync - translation CSV export and import
//!
//! Labelsync moves translation labels between per-locale `key,value` CSV files
//! (`<root>/<locale>/<file>`) and a single spreadsheet-style CSV with one
//! column per locale, the format handed to translators.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `export`: Merge per-locale rows into a table and serialize the wide CSV
//! - `import`: Parse a wide CSV and write it back into per-locale files
//! - `issues`: Non-fatal warnings raised while processing
//! - `locales`: Locale set resolution
//! - `table`: Shared translation table data model
//! - `locale_file`, `csv_writer`: CSV reading and writing helpers

pub mod cli;
pub mod config;
pub mod csv_writer;
pub mod export;
pub mod import;
pub mod issues;
pub mod locale_file;
pub mod locales;
pub mod table;
