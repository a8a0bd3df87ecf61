// Table groups and canvas positions.

/// Display diameter of a table on the venue canvas.
pub const TABLE_SIZE: u32 = 60;

/// A point on the venue canvas, in canvas units (origin top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// All guests sharing one table id.
///
/// A group is created the first time a roster row references its id.
/// `members` holds indices into the roster's guest list, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    /// Table id, unique within a roster. Always >= 1.
    pub id: u32,

    /// Display name; `"Table {id}"` when the roster gave none.
    pub name: String,

    /// Centre on the canvas. Zero until the layout generator runs.
    pub position: Position,

    /// Display diameter.
    pub size: u32,

    /// Roster indices of the guests at this table.
    pub members: Vec<usize>,
}

impl TableGroup {
    /// Create an empty, unpositioned group.
    ///
    /// A blank `name` is replaced with the synthesized `"Table {id}"` label.
    pub fn new(id: u32, name: &str) -> Self {
        let name = name.trim();
        let name = if name.is_empty() {
            Self::default_name(id)
        } else {
            name.to_string()
        };
        Self {
            id,
            name,
            position: Position::default(),
            size: TABLE_SIZE,
            members: Vec::new(),
        }
    }

    /// The label used for tables that have no name in the roster.
    pub fn default_name(id: u32) -> String {
        format!("Table {id}")
    }

    /// Label drawn on the map: `"{id}: {name}"`.
    pub fn map_label(&self) -> String {
        format!("{}: {}", self.id, self.name)
    }
}
