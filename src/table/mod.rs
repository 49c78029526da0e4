// src/table/mod.rs

pub mod cell;
pub mod extract;
pub mod record;

pub use cell::{Cell, RowSpan};
pub use extract::{extract, tabulate};
pub use record::{remove_empty_values, Record, Table};
