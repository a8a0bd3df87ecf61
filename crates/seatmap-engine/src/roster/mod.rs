// Roster parser: delimited guest text -> guest records + table groups.
//
// Fatal problems (empty input, missing required columns, no usable rows)
// abort the load with a `RosterError`. A malformed data row is skipped and
// reported in `ParsedRoster::skipped`; the rest of the roster still loads.

pub mod header;
mod parser;

use hashbrown::HashMap;
use seatmap_core::{GuestRecord, TableGroup};
use tracing::{info, warn};

pub use header::{Columns, REQUIRED_COLUMNS};

/// Parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterOptions {
    /// Field delimiter. Default: `,`.
    pub delimiter: char,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

/// Errors that make a roster unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// The input has no content.
    #[error("roster is empty")]
    Empty,

    /// The header lacks one or more required columns.
    #[error("roster is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Every data row was blank or malformed.
    #[error("roster contains no valid guest rows")]
    NoGuests,
}

/// Why a data row was left out of the roster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("table id {0:?} is not a positive integer")]
    InvalidTableId(String),

    #[error("guest name is empty")]
    MissingName,
}

/// A data row that was skipped, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRoster {
    /// Guest records in roster order.
    pub guests: Vec<GuestRecord>,

    /// Table groups in first-seen order, not yet positioned.
    pub tables: Vec<TableGroup>,

    /// Malformed rows that were left out.
    pub skipped: Vec<SkippedRow>,
}

impl ParsedRoster {
    /// Group the given records into tables by first-seen table id.
    ///
    /// `table_names` supplies the name carried by each record's row, parallel
    /// to `guests`; the first row referencing an id names its table.
    fn group(guests: Vec<GuestRecord>, table_names: Vec<String>, skipped: Vec<SkippedRow>) -> Self {
        let mut tables: Vec<TableGroup> = Vec::new();
        let mut by_id: HashMap<u32, usize> = HashMap::new();

        for (index, (guest, table_name)) in guests.iter().zip(&table_names).enumerate() {
            let slot = *by_id.entry(guest.table_id).or_insert_with(|| {
                tables.push(TableGroup::new(guest.table_id, table_name));
                tables.len() - 1
            });
            tables[slot].members.push(index);
        }

        Self {
            guests,
            tables,
            skipped,
        }
    }
}

/// Parse roster text.
///
/// The first line is the header; blank lines are ignored everywhere after
/// it. See [`RosterError`] for what aborts the parse and [`SkipReason`] for
/// what only drops a row.
pub fn parse_roster(text: &str, options: &RosterOptions) -> Result<ParsedRoster, RosterError> {
    if text.trim().is_empty() {
        return Err(RosterError::Empty);
    }

    let mut lines = parser::lines(text);
    let (_, header_line) = lines.next().ok_or(RosterError::Empty)?;
    let header = parser::split_fields(parser::strip_bom(header_line), options.delimiter);
    let columns = Columns::from_header(&header)?;

    let mut guests = Vec::new();
    let mut table_names = Vec::new();
    let mut skipped = Vec::new();

    for (line, content) in lines {
        if content.trim().is_empty() {
            continue;
        }
        let fields = parser::split_fields(content, options.delimiter);
        match parser::parse_row(&fields, &columns, line) {
            Ok(row) => {
                guests.push(row.guest);
                table_names.push(row.table_name);
            }
            Err(reason) => {
                warn!(line, %reason, "skipping malformed roster row");
                skipped.push(SkippedRow { line, reason });
            }
        }
    }

    if guests.is_empty() {
        return Err(RosterError::NoGuests);
    }

    let roster = ParsedRoster::group(guests, table_names, skipped);
    info!(
        guests = roster.guests.len(),
        tables = roster.tables.len(),
        skipped = roster.skipped.len(),
        "parsed roster"
    );
    Ok(roster)
}
