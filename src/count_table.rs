use crate::error::Error;
use crate::table_format::TableFormat;

use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Represents one engine's move-count table: an ordered mapping from move
/// notation to the node count reported for that move.
///
/// Entries keep the order they had in the input, because the comparison
/// report follows the first table's order.  If a move appears twice, the
/// last count wins.
///
/// ```
/// use perft_cmp::{CountTable, TableFormat};
///
/// let table = CountTable::parse("e2e4 20 600\nd2d4 20 560\n", TableFormat::Standard, "ours.txt")
///     .expect("Valid table");
/// assert_eq!(table.get("e2e4"), Some(600));
/// assert_eq!(table.get("d2d4"), Some(560));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountTable {
    source: String,
    entries: Vec<(String, i64)>,
    index: HashMap<String, usize>,
}

impl CountTable {
    /// Parse a count table from text.  `source` is the label (usually the
    /// file name) used in diagnostics.
    ///
    /// Lines that are empty after trimming are skipped.  A line with fewer
    /// fields than `format` requires, or whose count field is not an
    /// integer, fails the whole parse.
    pub fn parse(text: &str, format: TableFormat, source: &str) -> Result<CountTable, Error> {
        let mut result = CountTable {
            source: source.to_string(),
            entries: vec![],
            index: HashMap::new(),
        };

        for (number, raw) in text.lines().enumerate() {
            let fields: Vec<&str> = raw.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if fields.len() < format.min_fields() {
                return Err(Error::MalformedLine {
                    source: source.to_string(),
                    line: number + 1,
                    needed: format.min_fields(),
                    found: fields.len(),
                });
            }

            let key = fields[format.key_field()];
            let token = fields[format.count_field()];
            let count = token.parse::<i64>().map_err(|_| Error::InvalidCount {
                source: source.to_string(),
                line: number + 1,
                token: token.to_string(),
            })?;

            result.insert(key, count);
        }

        debug!("parsed {} moves from {}", result.len(), source);
        Ok(result)
    }

    /// Read and parse a count table from a file.
    pub fn from_file(path: &Path, format: TableFormat) -> Result<CountTable, Error> {
        let text = fs::read_to_string(path).map_err(|err| Error::Read {
            path: path.display().to_string(),
            err: err,
        })?;

        CountTable::parse(&text, format, &path.display().to_string())
    }

    /// Get the count for a move, if the move is in the table.
    #[inline]
    pub fn get(&self, key: &str) -> Option<i64> {
        self.index.get(key).map(|at| self.entries[*at].1)
    }

    /// The label this table was parsed from, used in diagnostics.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// How many moves are in the table?
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (move, count) pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|entry| (entry.0.as_str(), entry.1))
    }

    fn insert(&mut self, key: &str, count: i64) {
        match self.index.get(key) {
            Some(at) => self.entries[*at].1 = count,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), count));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standard() {
        let table =
            CountTable::parse("e2e4 20 600\nd2d4 20 560\ng1f3 20 440\n", TableFormat::Standard, "inp.txt")
                .expect("Valid table");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("e2e4"), Some(600));
        assert_eq!(table.get("g1f3"), Some(440));
        assert_eq!(table.get("b1c3"), None);

        let keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["e2e4", "d2d4", "g1f3"]);
    }

    #[test]
    fn parse_perft() {
        let table = CountTable::parse(
            "1: e2e4 -> nodes 600\n2: d2d4 -> nodes 560\n",
            TableFormat::Perft,
            "inp2.txt",
        )
        .expect("Valid table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("e2e4"), Some(600));
        assert_eq!(table.get("d2d4"), Some(560));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = CountTable::parse("\ne2e4 20 600\n   \nd2d4 20 560\n\n", TableFormat::Standard, "inp.txt")
            .expect("Valid table");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn short_line_fails_standard() {
        match CountTable::parse("e2e4 20\n", TableFormat::Standard, "inp.txt") {
            Err(Error::MalformedLine { line, needed, found, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(needed, 3);
                assert_eq!(found, 2);
            }
            _ => panic!("expected MalformedLine"),
        }
    }

    #[test]
    fn short_line_fails_perft() {
        // Enough fields for the standard layout, not for the numbered one.
        match CountTable::parse("e2e4 20 600\n", TableFormat::Perft, "inp2.txt") {
            Err(Error::MalformedLine { line, needed, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(needed, 5);
            }
            _ => panic!("expected MalformedLine"),
        }
    }

    #[test]
    fn bad_count_fails() {
        match CountTable::parse("e2e4 20 abc\n", TableFormat::Standard, "inp.txt") {
            Err(Error::InvalidCount { line, token, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "abc");
            }
            _ => panic!("expected InvalidCount"),
        }
    }

    #[test]
    fn error_names_offending_line() {
        let text = "e2e4 20 600\nd2d4 20 x\n";
        match CountTable::parse(text, TableFormat::Standard, "inp.txt") {
            Err(Error::InvalidCount { source, line, .. }) => {
                assert_eq!(source, "inp.txt");
                assert_eq!(line, 2);
            }
            _ => panic!("expected InvalidCount"),
        }
    }

    #[test]
    fn reparse_is_identical() {
        let text = "e2e4 20 600\nd2d4 20 560\n";
        let once = CountTable::parse(text, TableFormat::Standard, "inp.txt").expect("Valid table");
        let twice = CountTable::parse(text, TableFormat::Standard, "inp.txt").expect("Valid table");
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicate_move_last_count_wins() {
        let table = CountTable::parse("e2e4 20 600\ne2e4 20 601\n", TableFormat::Standard, "inp.txt")
            .expect("Valid table");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("e2e4"), Some(601));
    }

    #[test]
    fn negative_counts_parse() {
        let table = CountTable::parse("e2e4 20 -5\n", TableFormat::Standard, "inp.txt")
            .expect("Valid table");
        assert_eq!(table.get("e2e4"), Some(-5));
    }

    #[test]
    fn empty_input_is_an_empty_table() {
        let table = CountTable::parse("", TableFormat::Standard, "inp.txt").expect("Valid table");
        assert!(table.is_empty());
    }
}
