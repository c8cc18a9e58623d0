use crate::count_table::CountTable;
use crate::error::Error;

use log::warn;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// What to do when a move from the first table has no entry in the second.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MissingPolicy {
    /// Stop at the first missing move and report nothing.
    FailFast,
    /// Warn, leave that move out of the report, and keep going.
    Skip,
}

/// One move's count difference between the two tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DiffEntry {
    /// The move notation both tables were keyed by.
    pub key: String,
    /// First table's count minus the second table's count.
    pub delta: i64,
}

/// Represents the comparison of two count tables: for every move in the
/// first table, the first count minus the second count, in the first
/// table's order.
///
/// The `Display` impl renders the report, one `<move> --> <delta>` line per
/// entry.
///
/// ```
/// use perft_cmp::{CountTable, DiffTable, MissingPolicy, TableFormat};
///
/// let ours = CountTable::parse("e2e4 20 600\n", TableFormat::Standard, "ours.txt")
///     .expect("Valid table");
/// let theirs = CountTable::parse("1: e2e4 -> nodes 598\n", TableFormat::Perft, "theirs.txt")
///     .expect("Valid table");
///
/// let diff = DiffTable::diff(&ours, &theirs, MissingPolicy::FailFast).expect("No missing moves");
/// assert_eq!(format!("{}", diff), "e2e4 --> 2\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DiffTable {
    entries: Vec<DiffEntry>,
}

impl DiffTable {
    /// Compare two count tables.
    ///
    /// Walks `first` in input order and subtracts `second`'s count for the
    /// same move.  A move missing from `second` either fails the whole
    /// comparison (`MissingPolicy::FailFast`, no partial result survives)
    /// or is skipped with a warning (`MissingPolicy::Skip`).  Moves that
    /// only exist in `second` are ignored.
    pub fn diff(
        first: &CountTable,
        second: &CountTable,
        policy: MissingPolicy,
    ) -> Result<DiffTable, Error> {
        let mut entries = Vec::with_capacity(first.len());

        for (key, count) in first.iter() {
            match second.get(key) {
                Some(theirs) => entries.push(DiffEntry {
                    key: key.to_string(),
                    delta: count - theirs,
                }),
                None => match policy {
                    MissingPolicy::FailFast => {
                        return Err(Error::MissingKey {
                            key: key.to_string(),
                            table: second.source().to_string(),
                        });
                    }
                    MissingPolicy::Skip => {
                        warn!("Key {} not found in {}", key, second.source());
                    }
                },
            }
        }

        Ok(DiffTable { entries: entries })
    }

    /// How many moves were compared?
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the report empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many compared moves have different counts?
    pub fn mismatches(&self) -> usize {
        self.entries.iter().filter(|entry| entry.delta != 0).count()
    }

    /// Iterate over the entries in report order.
    pub fn iter(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries.iter()
    }
}

impl fmt::Display for DiffTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{} --> {}", entry.key, entry.delta)?;
        }
        Ok(())
    }
}

#[cfg(test)]
use crate::table_format::TableFormat;

#[cfg(test)]
fn table(text: &str, format: TableFormat, source: &str) -> CountTable {
    CountTable::parse(text, format, source).expect("Valid table")
}

#[test]
fn equal_counts_diff_to_zero() {
    let first = table("e4 20 10\n", TableFormat::Standard, "inp.txt");
    let second = table("a e4 b c 10 d\n", TableFormat::Perft, "inp2.txt");

    let diff = DiffTable::diff(&first, &second, MissingPolicy::FailFast).expect("No missing moves");
    assert_eq!(diff.len(), 1);
    assert_eq!(diff.mismatches(), 0);
    assert_eq!(format!("{}", diff), "e4 --> 0\n");
}

#[test]
fn report_follows_first_table_order() {
    let first = table("g1f3 20 440\ne2e4 20 600\nd2d4 20 560\n", TableFormat::Standard, "inp.txt");
    let second = table("e2e4 20 600\nd2d4 20 561\ng1f3 20 439\n", TableFormat::Standard, "inp2.txt");

    let diff = DiffTable::diff(&first, &second, MissingPolicy::FailFast).expect("No missing moves");
    assert_eq!(format!("{}", diff), "g1f3 --> 1\ne2e4 --> 0\nd2d4 --> -1\n");
    assert_eq!(diff.mismatches(), 2);
}

#[test]
fn missing_move_fails_fast() {
    let first = table("e4 20 10\nd4 20 8\n", TableFormat::Standard, "inp.txt");
    let second = table("a e4 b c 5 d\n", TableFormat::Perft, "inp2.txt");

    match DiffTable::diff(&first, &second, MissingPolicy::FailFast) {
        Err(Error::MissingKey { key, table }) => {
            assert_eq!(key, "d4");
            assert_eq!(table, "inp2.txt");
        }
        _ => panic!("expected MissingKey"),
    }
}

#[test]
fn missing_move_diagnostic_names_the_table() {
    let first = table("d4 20 8\n", TableFormat::Standard, "inp.txt");
    let second = table("e4 20 5\n", TableFormat::Standard, "inp2.txt");

    let err = DiffTable::diff(&first, &second, MissingPolicy::FailFast).unwrap_err();
    assert_eq!(format!("{}", err), "Key d4 not found in inp2.txt");
}

#[test]
fn first_missing_move_wins() {
    // Both b1c3 and g1f3 are missing; the diagnostic must name the one
    // that comes first in the first table.
    let first = table("e2e4 20 600\nb1c3 20 440\ng1f3 20 440\n", TableFormat::Standard, "inp.txt");
    let second = table("e2e4 20 600\n", TableFormat::Standard, "inp2.txt");

    match DiffTable::diff(&first, &second, MissingPolicy::FailFast) {
        Err(Error::MissingKey { key, .. }) => assert_eq!(key, "b1c3"),
        _ => panic!("expected MissingKey"),
    }
}

#[test]
fn skip_policy_reports_the_rest() {
    let first = table("e2e4 20 600\nb1c3 20 440\nd2d4 20 560\n", TableFormat::Standard, "inp.txt");
    let second = table("e2e4 20 598\nd2d4 20 560\n", TableFormat::Standard, "inp2.txt");

    let diff = DiffTable::diff(&first, &second, MissingPolicy::Skip).expect("Skip never fails");
    assert_eq!(diff.len(), 2);
    assert_eq!(format!("{}", diff), "e2e4 --> 2\nd2d4 --> 0\n");
}

#[test]
fn extra_moves_in_second_are_ignored() {
    let first = table("e4 20 10\n", TableFormat::Standard, "inp.txt");
    let second = table("a e4 b c 10 d\na d4 b c 3 d\n", TableFormat::Perft, "inp2.txt");

    let diff = DiffTable::diff(&first, &second, MissingPolicy::FailFast).expect("No missing moves");
    assert_eq!(diff.len(), 1);
    assert_eq!(format!("{}", diff), "e4 --> 0\n");
}

#[test]
fn empty_first_table_renders_nothing() {
    let first = table("", TableFormat::Standard, "inp.txt");
    let second = table("e2e4 20 600\n", TableFormat::Standard, "inp2.txt");

    let diff = DiffTable::diff(&first, &second, MissingPolicy::FailFast).expect("No missing moves");
    assert!(diff.is_empty());
    assert_eq!(format!("{}", diff), "");
}

#[test]
fn entries_expose_key_and_delta() {
    let first = table("e2e4 20 600\n", TableFormat::Standard, "inp.txt");
    let second = table("e2e4 20 540\n", TableFormat::Standard, "inp2.txt");

    let diff = DiffTable::diff(&first, &second, MissingPolicy::FailFast).expect("No missing moves");
    let entries: Vec<&DiffEntry> = diff.iter().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].key, "e2e4");
    assert_eq!(entries[0].delta, 60);
}
