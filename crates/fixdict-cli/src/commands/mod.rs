pub mod catalog;
pub mod consolidate;
