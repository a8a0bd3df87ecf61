// seatmap-core: data model shared by the roster parser, layout generator,
// guest matcher and the front ends.

pub mod guest;
pub mod side;
pub mod table;
pub mod text;
pub mod venue;

pub use guest::GuestRecord;
pub use side::{ParseSideError, Side};
pub use table::{Position, TableGroup};
pub use venue::{FixtureShape, VenueFixture, VenueLayout};
