//! Table files
//!
//! Provides:
//! - Table Format v0 schema
//! - YAML parser with validation

pub mod format_v0;
pub mod parser;

pub use format_v0::{RawRow, TableFileV0};
pub use parser::{parse_table_file, parse_table_str, read_rows_file, read_rows_str};
