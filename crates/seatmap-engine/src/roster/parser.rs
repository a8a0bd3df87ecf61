// Line and field splitting, and conversion of one data row into a record.

use seatmap_core::{GuestRecord, Side};
use tracing::debug;

use super::SkipReason;
use super::header::Columns;

/// UTF-8 byte order mark some spreadsheet exports put before the header.
const BOM: char = '\u{FEFF}';

/// Split text into `(line_number, line)` pairs.
///
/// Lines end at `\n`; a `\r` right before it is dropped, so both `\n` and
/// `\r\n` files read the same. Line numbers are 1-based.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(i, line)| (i + 1, line))
}

/// Strip a leading byte order mark from the header line.
pub(crate) fn strip_bom(line: &str) -> &str {
    line.strip_prefix(BOM).unwrap_or(line)
}

/// Split a line on the delimiter. No quoting rules apply.
pub(crate) fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).collect()
}

/// A data row converted to a guest record plus the table name it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedRow {
    pub guest: GuestRecord,
    pub table_name: String,
}

/// Convert the fields of one data line into a record.
///
/// Values are trimmed; columns past the end of a short row read as empty.
pub(crate) fn parse_row(
    fields: &[&str],
    columns: &Columns,
    line: usize,
) -> Result<ParsedRow, SkipReason> {
    let value = |idx: usize| fields.get(idx).map_or("", |v| v.trim());
    let optional = |idx: Option<usize>| idx.map(value).filter(|v| !v.is_empty());

    let name = value(columns.name);
    if name.is_empty() {
        return Err(SkipReason::MissingName);
    }

    let raw_table_id = value(columns.table_id);
    let table_id = match raw_table_id.parse::<u32>() {
        Ok(id) if id > 0 => id,
        _ => return Err(SkipReason::InvalidTableId(raw_table_id.to_string())),
    };

    let seat = optional(columns.seat).and_then(|raw| match raw.parse::<u32>() {
        Ok(seat) if seat > 0 => Some(seat),
        _ => {
            debug!(line, seat = raw, "ignoring unparsable seat value");
            None
        }
    });

    let guest = GuestRecord {
        name: name.to_string(),
        vietnamese_name: optional(columns.vietnamese_name).map(str::to_string),
        table_id,
        seat,
        side: Side::from_roster_value(value(columns.side)),
    };

    Ok(ParsedRow {
        guest,
        table_name: value(columns.table_name).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Columns {
        Columns::from_header(&[
            "name",
            "table_id",
            "table_name",
            "seat",
            "vietnamese_name",
            "side",
        ])
        .unwrap()
    }

    #[test]
    fn lines_handle_both_line_endings() {
        let got: Vec<_> = lines("a\r\nb\nc").collect();
        assert_eq!(got, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn lone_carriage_return_is_not_a_line_break() {
        let got: Vec<_> = lines("a\rb\n").collect();
        assert_eq!(got, vec![(1, "a\rb"), (2, "")]);
    }

    #[test]
    fn strip_bom_only_touches_leading_mark() {
        assert_eq!(strip_bom("\u{FEFF}name,side"), "name,side");
        assert_eq!(strip_bom("name,side"), "name,side");
    }

    #[test]
    fn parse_full_row() {
        let fields = split_fields("Anna Tran , 3,Family,2,Trần Anna,groom", ',');
        let row = parse_row(&fields, &columns(), 2).unwrap();
        assert_eq!(row.guest.name, "Anna Tran");
        assert_eq!(row.guest.table_id, 3);
        assert_eq!(row.guest.seat, Some(2));
        assert_eq!(row.guest.vietnamese_name.as_deref(), Some("Trần Anna"));
        assert_eq!(row.guest.side, Side::Groom);
        assert_eq!(row.table_name, "Family");
    }

    #[test]
    fn short_row_reads_missing_values_as_empty() {
        let fields = split_fields("Bao,4", ',');
        let row = parse_row(&fields, &columns(), 2).unwrap();
        assert_eq!(row.guest.table_id, 4);
        assert_eq!(row.guest.seat, None);
        assert_eq!(row.guest.vietnamese_name, None);
        assert_eq!(row.guest.side, Side::Bride);
        assert_eq!(row.table_name, "");
    }

    #[test]
    fn non_numeric_table_id_is_rejected() {
        let fields = split_fields("Chi,abc,Friends,,,bride", ',');
        assert_eq!(
            parse_row(&fields, &columns(), 5),
            Err(SkipReason::InvalidTableId("abc".to_string()))
        );
    }

    #[test]
    fn zero_table_id_is_rejected() {
        let fields = split_fields("Chi,0,Friends,,,bride", ',');
        assert_eq!(
            parse_row(&fields, &columns(), 5),
            Err(SkipReason::InvalidTableId("0".to_string()))
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let fields = split_fields(" ,1,Friends,,,bride", ',');
        assert_eq!(parse_row(&fields, &columns(), 5), Err(SkipReason::MissingName));
    }

    #[test]
    fn bad_seat_keeps_the_row() {
        let fields = split_fields("Dung,1,Friends,x,,bride", ',');
        let row = parse_row(&fields, &columns(), 5).unwrap();
        assert_eq!(row.guest.seat, None);
    }

    #[test]
    fn custom_delimiter() {
        let fields = split_fields("Em;2;Work;;;groom", ';');
        let row = parse_row(&fields, &columns(), 2).unwrap();
        assert_eq!(row.guest.name, "Em");
        assert_eq!(row.guest.side, Side::Groom);
    }
}
