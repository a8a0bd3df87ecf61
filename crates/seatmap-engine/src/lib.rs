// seatmap-engine: the guest lookup engine.
//
// Architecture:
//   - `roster`: delimited text -> guest records + table groups
//   - `layout`: table ids -> canvas positions, fixed floor plan
//   - `matcher`: query + side -> one guest (exact, substring, similarity)
//   - `locale`: seat labels and notices in the two supported languages
//   - `source`: where roster text comes from (file, in-memory text)
//   - `handle`: session object owning one loaded roster and its layout

pub mod locale;
pub mod roster;
pub mod source;

#[cfg(feature = "layout")]
pub mod layout;

#[cfg(feature = "matcher")]
pub mod matcher;

#[cfg(feature = "handle")]
pub mod handle;

pub use roster::{ParsedRoster, RosterError, RosterOptions, SkipReason, SkippedRow, parse_roster};
