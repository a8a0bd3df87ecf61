// Guest record: one parsed roster row.

use crate::side::Side;

/// A single guest as read from the roster.
///
/// Records are identified by their position in the roster; two rows with
/// the same name stay two records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRecord {
    /// Display name. Never empty.
    pub name: String,

    /// Alternative (Vietnamese) spelling of the name, if the roster has one.
    pub vietnamese_name: Option<String>,

    /// Table the guest sits at. Always >= 1.
    pub table_id: u32,

    /// Seat number at the table, if assigned. Always >= 1 when present.
    pub seat: Option<u32>,

    /// Wedding party side.
    pub side: Side,
}

impl GuestRecord {
    /// Create a record with no alternative name and no seat.
    pub fn new(name: impl Into<String>, table_id: u32, side: Side) -> Self {
        Self {
            name: name.into(),
            vietnamese_name: None,
            table_id,
            seat: None,
            side,
        }
    }

    /// Set the alternative spelling.
    pub fn with_vietnamese_name(mut self, name: impl Into<String>) -> Self {
        self.vietnamese_name = Some(name.into());
        self
    }

    /// Set the seat number.
    pub fn with_seat(mut self, seat: u32) -> Self {
        self.seat = Some(seat);
        self
    }
}
