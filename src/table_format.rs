use crate::error::Error;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represent the column layout of a count file: which whitespace-separated
/// field holds the move, and which holds the node count.
#[derive(PartialOrd, Ord, PartialEq, Eq, Copy, Clone, Debug, Hash, ValueEnum)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum TableFormat {
    /// `<move> <ignored> <count> ...`
    Standard,
    /// `<ignored> <move> <ignored> <ignored> <count> ...`, the numbered
    /// layout some engines print from divide
    Perft,
}

/// How many table formats are there?
pub const NUM_FORMATS: usize = 2;
/// List all table formats
pub const ALL_FORMATS: [TableFormat; NUM_FORMATS] = [TableFormat::Standard, TableFormat::Perft];

impl TableFormat {
    /// Index of the field holding the move notation.
    #[inline]
    pub fn key_field(&self) -> usize {
        match *self {
            TableFormat::Standard => 0,
            TableFormat::Perft => 1,
        }
    }

    /// Index of the field holding the node count.
    #[inline]
    pub fn count_field(&self) -> usize {
        match *self {
            TableFormat::Standard => 2,
            TableFormat::Perft => 4,
        }
    }

    /// Fewest fields a line must have to be parsed under this format.
    #[inline]
    pub fn min_fields(&self) -> usize {
        self.count_field() + 1
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TableFormat::Standard => write!(f, "standard"),
            TableFormat::Perft => write!(f, "perft"),
        }
    }
}

impl FromStr for TableFormat {
    type Err = Error;

    /// Convert a format name to a `TableFormat`.
    ///
    /// ```
    /// use perft_cmp::TableFormat;
    /// use std::str::FromStr;
    ///
    /// assert_eq!(TableFormat::from_str("perft").unwrap(), TableFormat::Perft);
    /// assert!(TableFormat::from_str("pgn").is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "standard" => Ok(TableFormat::Standard),
            "perft" => Ok(TableFormat::Perft),
            _ => Err(Error::UnknownFormat {
                name: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_positions() {
        assert_eq!(TableFormat::Standard.key_field(), 0);
        assert_eq!(TableFormat::Standard.count_field(), 2);
        assert_eq!(TableFormat::Perft.key_field(), 1);
        assert_eq!(TableFormat::Perft.count_field(), 4);
    }

    #[test]
    fn min_fields_covers_both_columns() {
        for format in ALL_FORMATS.iter() {
            assert!(format.min_fields() > format.key_field());
            assert!(format.min_fields() > format.count_field());
        }
    }

    #[test]
    fn round_trip_names() {
        for format in ALL_FORMATS.iter() {
            assert_eq!(<TableFormat as FromStr>::from_str(&format.to_string()).unwrap(), *format);
        }
    }

    #[test]
    fn unknown_name() {
        match <TableFormat as FromStr>::from_str("uci") {
            Err(Error::UnknownFormat { name }) => assert_eq!(name, "uci"),
            _ => panic!("expected UnknownFormat"),
        }
    }
}
