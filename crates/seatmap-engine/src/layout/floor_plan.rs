// The venue floor plan: declared table spots and static fixtures.

use seatmap_core::{FixtureShape, Position, VenueFixture};

/// Canvas width in canvas units.
pub const CANVAS_WIDTH: u32 = 1000;

/// Canvas height in canvas units.
pub const CANVAS_HEIGHT: u32 = 800;

/// Highest table id with a declared spot on the floor plan.
pub const MAX_DECLARED_TABLE: u32 = 45;

/// Overflow row: x of the spot just before the first overflow table.
pub const OVERFLOW_X_ORIGIN: i32 = 400;

/// Overflow row: horizontal step between consecutive ids.
pub const OVERFLOW_X_STEP: i32 = 80;

/// Overflow row: y of every overflow table.
pub const OVERFLOW_Y: i32 = 710;

/// Declared table spots; entry `i` belongs to table id `i + 1`.
///
/// Rows 1-4 run seven tables each on both sides of the dance floor,
/// row 5 has five, and the remaining ids fill the corner blocks.
pub(crate) const TABLE_SPOTS: [(i32, i32); MAX_DECLARED_TABLE as usize] = [
    // Row 1
    (200, 150), (300, 150), (400, 150), (600, 150), (700, 150), (800, 150), (900, 150),
    // Row 2
    (200, 230), (300, 230), (400, 230), (600, 230), (700, 230), (800, 230), (900, 230),
    // Row 3
    (200, 310), (300, 310), (400, 310), (600, 310), (700, 310), (800, 310), (900, 310),
    // Row 4
    (200, 390), (300, 390), (400, 390), (600, 390), (700, 390), (800, 390), (900, 390),
    // Row 5
    (200, 470), (300, 470), (400, 470), (600, 470), (700, 470),
    // Right block (34-37)
    (800, 470), (900, 470), (800, 550), (900, 550),
    // Bottom right block (38-41)
    (800, 630), (900, 630), (800, 710), (900, 710),
    // Bottom left block (42-45)
    (200, 630), (300, 630), (200, 710), (300, 710),
];

const fn rect(
    name: &'static str,
    label: &'static str,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) -> VenueFixture {
    VenueFixture {
        name,
        label,
        center: Position::new(x, y),
        shape: FixtureShape::Rectangle { width, height },
    }
}

/// Static fixtures, drawn beneath the tables.
pub fn venue_fixtures() -> Vec<VenueFixture> {
    vec![
        rect("stage", "Stage", 500, 80, 500, 70),
        rect("brideGroom", "Bride and Groom", 500, 180, 200, 60),
        rect("danceFloor", "Dance Floor", 500, 340, 200, 150),
        rect("cake", "Cake", 700, 180, 100, 60),
        rect("bar", "Bar", 150, 180, 100, 60),
        rect("gifts", "Gifts", 300, 560, 100, 60),
        rect("vipTable", "VIP Table", 500, 560, 150, 60),
    ]
}
