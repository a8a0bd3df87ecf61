// Header row: column names and their positions.

use super::RosterError;

pub const COL_NAME: &str = "name";
pub const COL_TABLE_ID: &str = "table_id";
pub const COL_TABLE_NAME: &str = "table_name";
pub const COL_SIDE: &str = "side";
pub const COL_SEAT: &str = "seat";
pub const COL_VIETNAMESE_NAME: &str = "vietnamese_name";

/// Columns every roster must declare.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_NAME, COL_TABLE_ID, COL_TABLE_NAME, COL_SIDE];

/// Positions of the known columns within a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub name: usize,
    pub table_id: usize,
    pub table_name: usize,
    pub side: usize,
    pub seat: Option<usize>,
    pub vietnamese_name: Option<usize>,
}

impl Columns {
    /// Resolve column positions from the (already split) header fields.
    ///
    /// Header names are trimmed. When a name repeats, the last occurrence
    /// wins. Unknown columns are ignored. All missing required columns are
    /// reported at once.
    pub fn from_header(fields: &[&str]) -> Result<Self, RosterError> {
        let find = |wanted: &str| fields.iter().rposition(|f| f.trim() == wanted);

        let mut missing = Vec::new();
        let mut require = |wanted: &str| {
            find(wanted).unwrap_or_else(|| {
                missing.push(wanted.to_string());
                0
            })
        };
        let name = require(COL_NAME);
        let table_id = require(COL_TABLE_ID);
        let table_name = require(COL_TABLE_NAME);
        let side = require(COL_SIDE);
        if !missing.is_empty() {
            return Err(RosterError::MissingColumns(missing));
        }

        Ok(Self {
            name,
            table_id,
            table_name,
            side,
            seat: find(COL_SEAT),
            vietnamese_name: find(COL_VIETNAMESE_NAME),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_required_and_optional_columns() {
        let cols = Columns::from_header(&[
            "name",
            "vietnamese_name",
            "table_id",
            "table_name",
            "seat",
            "side",
        ])
        .unwrap();
        assert_eq!(cols.name, 0);
        assert_eq!(cols.vietnamese_name, Some(1));
        assert_eq!(cols.table_id, 2);
        assert_eq!(cols.table_name, 3);
        assert_eq!(cols.seat, Some(4));
        assert_eq!(cols.side, 5);
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let cols = Columns::from_header(&["side", "table_name", "table_id", "name"]).unwrap();
        assert_eq!(cols.name, 3);
        assert!(cols.seat.is_none());
        assert!(cols.vietnamese_name.is_none());
    }

    #[test]
    fn header_names_are_trimmed() {
        let cols = Columns::from_header(&[" name", "table_id ", "table_name", "side "]).unwrap();
        assert_eq!(cols.side, 3);
    }

    #[test]
    fn reports_every_missing_column() {
        let err = Columns::from_header(&["name", "table_id"]).unwrap_err();
        assert_eq!(
            err,
            RosterError::MissingColumns(vec!["table_name".to_string(), "side".to_string()])
        );
    }

    #[test]
    fn last_duplicate_column_wins() {
        let cols =
            Columns::from_header(&["name", "table_id", "table_name", "side", "name"]).unwrap();
        assert_eq!(cols.name, 4);
    }
}
