// Layout generator: deterministic canvas positions for table groups.
//
// Policy: a fixed lookup table maps ids 1..=45 onto the venue floor plan.
// Larger ids go to an overflow row along the bottom edge, one step per id
// past the last declared table. The overflow row never collides with
// itself but may overlap declared spots when ids jump far past 45.

pub mod floor_plan;

use seatmap_core::{Position, TableGroup, VenueLayout};

pub use floor_plan::{
    CANVAS_HEIGHT, CANVAS_WIDTH, MAX_DECLARED_TABLE, OVERFLOW_X_ORIGIN, OVERFLOW_X_STEP,
    OVERFLOW_Y, venue_fixtures,
};

/// Position of the table with the given id.
///
/// Depends on nothing but `id`.
pub fn table_position(id: u32) -> Position {
    match id {
        1..=MAX_DECLARED_TABLE => {
            let (x, y) = floor_plan::TABLE_SPOTS[(id - 1) as usize];
            Position::new(x, y)
        }
        _ => {
            let past = id.saturating_sub(MAX_DECLARED_TABLE) as i64;
            let x = OVERFLOW_X_ORIGIN as i64 + past * OVERFLOW_X_STEP as i64;
            Position::new(x.clamp(i32::MIN as i64, i32::MAX as i64) as i32, OVERFLOW_Y)
        }
    }
}

/// Assign a position to every table. Only `position` is written.
pub fn arrange_tables(tables: &mut [TableGroup]) {
    for table in tables.iter_mut() {
        table.position = table_position(table.id);
    }
}

/// Position the tables and place them on the venue canvas.
pub fn build_venue(mut tables: Vec<TableGroup>) -> VenueLayout {
    arrange_tables(&mut tables);
    VenueLayout {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        fixtures: venue_fixtures(),
        tables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_corners() {
        assert_eq!(table_position(1), Position::new(200, 150));
        assert_eq!(table_position(7), Position::new(900, 150));
        assert_eq!(table_position(29), Position::new(200, 470));
        assert_eq!(table_position(33), Position::new(700, 470));
        assert_eq!(table_position(37), Position::new(900, 550));
        assert_eq!(table_position(41), Position::new(900, 710));
        assert_eq!(table_position(45), Position::new(300, 710));
    }

    #[test]
    fn overflow_row_steps_linearly() {
        assert_eq!(table_position(46), Position::new(480, 710));
        assert_eq!(table_position(47), Position::new(560, 710));
        assert_eq!(table_position(50), Position::new(800, 710));
    }

    #[test]
    fn huge_ids_do_not_overflow_coordinates() {
        assert_eq!(table_position(u32::MAX).y, OVERFLOW_Y);
        assert_eq!(table_position(u32::MAX).x, i32::MAX);
    }

    #[test]
    fn arrange_only_touches_positions() {
        let mut tables = vec![TableGroup::new(3, "Family"), TableGroup::new(50, "")];
        tables[0].members = vec![0, 2];
        arrange_tables(&mut tables);
        assert_eq!(tables[0].position, Position::new(400, 150));
        assert_eq!(tables[0].members, vec![0, 2]);
        assert_eq!(tables[0].name, "Family");
        assert_eq!(tables[1].position, Position::new(800, 710));
    }

    #[test]
    fn layout_is_pure_in_the_id_set() {
        let first = build_venue(vec![TableGroup::new(2, "A"), TableGroup::new(9, "B")]);
        let mut other_names = vec![TableGroup::new(2, "X"), TableGroup::new(9, "Y")];
        other_names[1].members.push(5);
        let second = build_venue(other_names);
        let positions = |l: &VenueLayout| l.tables.iter().map(|t| (t.id, t.position)).collect::<Vec<_>>();
        assert_eq!(positions(&first), positions(&second));
    }

    #[test]
    fn overflow_ids_never_share_a_spot() {
        let mut spots: Vec<Position> = (46..=80).map(table_position).collect();
        spots.dedup();
        assert_eq!(spots.len(), 35);
    }

    #[test]
    fn overflow_may_land_on_a_declared_spot() {
        // Known limitation of the linear overflow row.
        assert_eq!(table_position(50), table_position(40));
    }

    #[test]
    fn venue_carries_canvas_and_fixtures() {
        let venue = build_venue(vec![TableGroup::new(1, "")]);
        assert_eq!((venue.width, venue.height), (1000, 800));
        assert!(venue.fixture("danceFloor").is_some());
        assert_eq!(venue.tables[0].position, Position::new(200, 150));
    }
}
