use failure::Fail;
use std::io;

/// Sometimes, bad stuff happens.
#[derive(Debug, Fail)]
pub enum Error {
    /// The input file could not be opened or read
    #[fail(display = "Unable to read {}: {}", path, err)]
    Read { path: String, err: io::Error },

    /// A line does not have enough whitespace-separated fields for the
    /// format it was parsed under
    #[fail(
        display = "Malformed line {}:{}: expected at least {} fields, found {}",
        source, line, needed, found
    )]
    MalformedLine {
        source: String,
        line: usize,
        needed: usize,
        found: usize,
    },

    /// The count field of a line is not a valid integer
    #[fail(display = "Invalid count '{}' at {}:{}", token, source, line)]
    InvalidCount {
        source: String,
        line: usize,
        token: String,
    },

    /// A move from the first table has no entry in the second
    #[fail(display = "Key {} not found in {}", key, table)]
    MissingKey { key: String, table: String },

    /// The table format name is not one we know
    #[fail(
        display = "Unknown table format: {}.  Expected 'standard' or 'perft'.",
        name
    )]
    UnknownFormat { name: String },
}
