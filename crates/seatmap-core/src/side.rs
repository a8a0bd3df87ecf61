// Wedding party side: the partition every search is restricted to.

use std::fmt;
use std::str::FromStr;

/// Which wedding party a guest belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Bride's side. Rows with a missing or unrecognized side land here.
    #[default]
    Bride,
    /// Groom's side.
    Groom,
}

/// Error returned when a side name given by a caller is not recognized.
///
/// Roster rows never produce this; they fall back to [`Side::Bride`]
/// through [`Side::from_roster_value`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown side: {0:?} (expected \"bride\" or \"groom\")")]
pub struct ParseSideError(pub String);

impl Side {
    /// Both sides, in display order.
    pub const ALL: [Side; 2] = [Side::Bride, Side::Groom];

    /// Lenient conversion used by the roster parser.
    ///
    /// Comparison is case-insensitive after trimming. Anything other than
    /// `bride` or `groom`, including an empty cell, yields the default side.
    pub fn from_roster_value(value: &str) -> Side {
        value.parse().unwrap_or_default()
    }

    /// Lowercase name as it appears in roster files.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Bride => "bride",
            Side::Groom => "groom",
        }
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("bride") {
            Ok(Side::Bride)
        } else if trimmed.eq_ignore_ascii_case("groom") {
            Ok(Side::Groom)
        } else {
            Err(ParseSideError(s.to_string()))
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
