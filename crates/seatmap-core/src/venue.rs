// Venue layout: canvas extent, static fixtures and positioned tables.

use crate::table::{Position, TableGroup};

/// Outline of a static venue fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureShape {
    Rectangle { width: u32, height: u32 },
    Circle { radius: u32 },
}

/// A fixed element of the floor plan (stage, dance floor, bar, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueFixture {
    /// Stable key, e.g. `"danceFloor"`. Front ends use it to pick styling
    /// and translated labels.
    pub name: &'static str,

    /// Default (English) display label.
    pub label: &'static str,

    /// Centre of the fixture.
    pub center: Position,

    pub shape: FixtureShape,
}

impl VenueFixture {
    /// Bounding box as `(left, top, width, height)`.
    pub fn bounds(&self) -> (i32, i32, u32, u32) {
        let (width, height) = match self.shape {
            FixtureShape::Rectangle { width, height } => (width, height),
            FixtureShape::Circle { radius } => (radius * 2, radius * 2),
        };
        (
            self.center.x - (width / 2) as i32,
            self.center.y - (height / 2) as i32,
            width,
            height,
        )
    }
}

/// The whole venue as drawn on the map.
///
/// Tables keep roster first-seen order and carry their final positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueLayout {
    pub width: u32,
    pub height: u32,
    pub fixtures: Vec<VenueFixture>,
    pub tables: Vec<TableGroup>,
}

impl VenueLayout {
    /// Find a table by id.
    pub fn table(&self, id: u32) -> Option<&TableGroup> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Find a fixture by its key.
    pub fn fixture(&self, name: &str) -> Option<&VenueFixture> {
        self.fixtures.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage() -> VenueFixture {
        VenueFixture {
            name: "stage",
            label: "Stage",
            center: Position::new(500, 80),
            shape: FixtureShape::Rectangle {
                width: 500,
                height: 70,
            },
        }
    }

    #[test]
    fn rectangle_bounds_are_centred() {
        assert_eq!(stage().bounds(), (250, 45, 500, 70));
    }

    #[test]
    fn circle_bounds_use_diameter() {
        let fountain = VenueFixture {
            name: "fountain",
            label: "Fountain",
            center: Position::new(100, 100),
            shape: FixtureShape::Circle { radius: 20 },
        };
        assert_eq!(fountain.bounds(), (80, 80, 40, 40));
    }

    #[test]
    fn lookup_by_id_and_name() {
        let layout = VenueLayout {
            width: 1000,
            height: 800,
            fixtures: vec![stage()],
            tables: vec![TableGroup::new(2, "B"), TableGroup::new(1, "A")],
        };
        assert_eq!(layout.table(1).map(|t| t.name.as_str()), Some("A"));
        assert!(layout.table(3).is_none());
        assert!(layout.fixture("stage").is_some());
        assert!(layout.fixture("bar").is_none());
    }
}
