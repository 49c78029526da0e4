// src/lib.rs

//! Scrape a named table from a wiki article into a JSON file of records.

pub mod cli;
pub mod config;
pub mod locate;
pub mod page;
pub mod session;
pub mod table;
pub mod write;
