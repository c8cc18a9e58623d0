//! Compare two perft move-count tables.
//!
//! A perft divide run prints one node count per root move.  When two move
//! generators disagree on a total, diffing their divide outputs tells you
//! which root move to descend into.  This crate parses the two outputs
//! into [`CountTable`]s and reports the per-move difference as a
//! [`DiffTable`].

pub mod count_table;
pub mod diff_table;
pub mod error;
pub mod table_format;

pub use crate::count_table::CountTable;
pub use crate::diff_table::{DiffEntry, DiffTable, MissingPolicy};
pub use crate::error::Error;
pub use crate::table_format::{TableFormat, ALL_FORMATS, NUM_FORMATS};
