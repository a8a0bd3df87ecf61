// SeatmapHandle: one loaded roster and everything derived from it.
//
// Owns the guest records, the positioned venue layout, the matcher strategy
// and the display options, and answers lookups against them. Everything is
// built in one go by a load; queries only take `&self`, so nothing a query
// reads can change underneath it. A reload swaps the whole state at once and
// leaves the old state untouched when it fails.

use hashbrown::HashMap;
use seatmap_core::{GuestRecord, Position, TableGroup, VenueFixture, VenueLayout};
use tracing::{info, warn};

use crate::layout::build_venue;
use crate::locale::Locale;
use crate::matcher::{
    GuestMatch, MatchKind, MatchOptions, MatchStrategy, SearchOutcome, find_guest_with,
    tablemates,
};
use crate::roster::{RosterError, RosterOptions, SkippedRow, parse_roster};
use crate::source::{RosterSource, TextSource, TransportError};

pub use seatmap_core::Side;

/// Why a load failed. `Display` gives the single message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatmapError {
    /// The roster text could not be fetched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The roster text was fetched but is unusable.
    #[error("invalid roster: {0}")]
    Validation(#[from] RosterError),
}

/// Everything the page shows for a found guest.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestView {
    pub guest_name: String,
    pub table_id: u32,
    pub table_label: String,
    /// Centre of the table to highlight on the map.
    pub table_position: Position,
    /// Locale-formatted seat, empty when the guest has no seat.
    pub seat_label: String,
    /// Names of the other guests at the table, in roster order.
    pub tablemates: Vec<String>,
    pub match_kind: MatchKind,
    /// Set for similarity matches.
    pub approximate: bool,
    /// Closest-match notice, present exactly when `approximate` is set.
    pub notice: Option<String>,
}

/// Top-level handle for one loaded roster.
pub struct SeatmapHandle {
    /// Guest records in roster order.
    guests: Vec<GuestRecord>,

    /// Canvas, fixtures and positioned tables.
    layout: VenueLayout,

    /// Table id -> index into `layout.tables`.
    table_index: HashMap<u32, usize>,

    /// Rows dropped by the parser.
    skipped: Vec<SkippedRow>,

    strategy: MatchStrategy,

    // -- Options --
    roster_options: RosterOptions,
    match_options: MatchOptions,
    locale: Locale,
}

impl SeatmapHandle {
    /// Build a handle from roster text.
    pub fn from_text(text: &str, roster_options: RosterOptions) -> Result<Self, SeatmapError> {
        let roster = parse_roster(text, &roster_options)?;
        let layout = build_venue(roster.tables);
        let table_index = layout
            .tables
            .iter()
            .enumerate()
            .map(|(i, table)| (table.id, i))
            .collect();

        Ok(Self {
            guests: roster.guests,
            layout,
            table_index,
            skipped: roster.skipped,
            strategy: MatchStrategy::default(),
            roster_options,
            match_options: MatchOptions::default(),
            locale: Locale::default(),
        })
    }

    /// Fetch roster text from `source` and build a handle from it.
    pub fn load(
        source: &dyn RosterSource,
        roster_options: RosterOptions,
    ) -> Result<Self, SeatmapError> {
        let origin = source.describe();
        let text = source.fetch().inspect_err(|e| warn!(%origin, error = %e, "roster fetch failed"))?;
        let handle = Self::from_text(&text, roster_options)
            .inspect_err(|e| warn!(%origin, error = %e, "roster rejected"))?;
        info!(
            %origin,
            guests = handle.guests.len(),
            tables = handle.layout.tables.len(),
            "roster loaded"
        );
        Ok(handle)
    }

    /// Re-run the whole load from `source`, keeping the current options.
    ///
    /// On failure the handle keeps serving the previously loaded roster.
    pub fn reload(&mut self, source: &dyn RosterSource) -> Result<(), SeatmapError> {
        let fresh = Self::load(source, self.roster_options)?;
        self.guests = fresh.guests;
        self.layout = fresh.layout;
        self.table_index = fresh.table_index;
        self.skipped = fresh.skipped;
        Ok(())
    }

    /// [`reload`](Self::reload) from in-memory text.
    pub fn reload_text(&mut self, text: &str) -> Result<(), SeatmapError> {
        self.reload(&TextSource::new(text))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Search for a guest on one side.
    pub fn search(&self, query: &str, side: Side) -> SearchOutcome {
        find_guest_with(&self.strategy, &self.guests, query, side, &self.match_options)
    }

    /// Search and build the view for the page.
    ///
    /// `None` covers both an empty query and no match; use
    /// [`search`](Self::search) to tell them apart.
    pub fn lookup(&self, query: &str, side: Side) -> Option<GuestView> {
        self.outcome_view(&self.search(query, side), query)
    }

    /// View for a search outcome. `raw_query` is quoted in the notice.
    pub fn outcome_view(&self, outcome: &SearchOutcome, raw_query: &str) -> Option<GuestView> {
        outcome.found().and_then(|m| self.view(m, raw_query))
    }

    fn view(&self, found: &GuestMatch, raw_query: &str) -> Option<GuestView> {
        let guest = self.guests.get(found.index)?;
        let table = self.table(guest.table_id);
        let approximate = found.is_approximate();
        Some(GuestView {
            guest_name: guest.name.clone(),
            table_id: guest.table_id,
            table_label: table.map_or_else(|| TableGroup::default_name(guest.table_id), |t| t.name.clone()),
            table_position: table.map(|t| t.position).unwrap_or_default(),
            seat_label: self.locale.seat_label(guest.seat),
            tablemates: self
                .tablemates(found.index)
                .into_iter()
                .map(|g| g.name.clone())
                .collect(),
            match_kind: found.kind,
            approximate,
            notice: approximate.then(|| self.locale.closest_match_notice(raw_query)),
        })
    }

    /// Other guests at the table of the guest at `index`.
    pub fn tablemates(&self, index: usize) -> Vec<&GuestRecord> {
        tablemates(&self.guests, index)
    }

    pub fn guests(&self) -> &[GuestRecord] {
        &self.guests
    }

    pub fn guest(&self, index: usize) -> Option<&GuestRecord> {
        self.guests.get(index)
    }

    pub fn layout(&self) -> &VenueLayout {
        &self.layout
    }

    /// Table by id.
    pub fn table(&self, id: u32) -> Option<&TableGroup> {
        self.table_index.get(&id).map(|&i| &self.layout.tables[i])
    }

    /// Members of a table, in roster order.
    pub fn table_members(&self, id: u32) -> Vec<&GuestRecord> {
        self.table(id)
            .map(|t| t.members.iter().filter_map(|&i| self.guests.get(i)).collect())
            .unwrap_or_default()
    }

    /// Rows the parser skipped during the last successful load.
    pub fn skipped_rows(&self) -> &[SkippedRow] {
        &self.skipped
    }

    /// Fixture label in the current locale.
    pub fn fixture_label(&self, fixture: &VenueFixture) -> &'static str {
        self.locale.fixture_label(fixture.name).unwrap_or(fixture.label)
    }

    /// Get the library version string.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the similarity threshold, clamped to `[0, 1]`. Non-finite values
    /// are ignored.
    pub fn set_threshold(&mut self, threshold: f64) {
        if threshold.is_finite() {
            self.match_options.threshold = threshold.clamp(0.0, 1.0);
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        self.match_options
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Delimiter used by future reloads.
    pub fn set_delimiter(&mut self, delimiter: char) {
        self.roster_options.delimiter = delimiter;
    }

    /// Replace the matcher strategy.
    pub fn set_strategy(&mut self, strategy: MatchStrategy) {
        self.strategy = strategy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{ExactPass, MatchPass};

    const ROSTER: &str = "\
name,vietnamese_name,table_id,table_name,seat,side
Anna Tran,Trần Anna,1,Family,1,bride
Bao Nguyen,,1,Family,2,bride
Chi Le,,2,,,bride
Minh Le,,1,Family,3,groom
Broken,,x,Family,,bride
";

    fn handle() -> SeatmapHandle {
        SeatmapHandle::from_text(ROSTER, RosterOptions::default()).unwrap()
    }

    #[test]
    fn load_builds_guests_tables_and_index() {
        let h = handle();
        assert_eq!(h.guests().len(), 4);
        assert_eq!(h.layout().tables.len(), 2);
        assert_eq!(h.table(2).map(|t| t.name.as_str()), Some("Table 2"));
        assert_eq!(h.table(1).map(|t| t.position), Some(Position::new(200, 150)));
        assert_eq!(h.skipped_rows().len(), 1);
        assert_eq!(h.skipped_rows()[0].line, 6);
    }

    #[test]
    fn exact_lookup_view() {
        let view = handle().lookup("anna tran", Side::Bride).unwrap();
        assert_eq!(view.guest_name, "Anna Tran");
        assert_eq!(view.table_id, 1);
        assert_eq!(view.table_label, "Family");
        assert_eq!(view.seat_label, "Seat 1");
        // Minh Le sits at table 1 too, on the other side.
        assert_eq!(view.tablemates, vec!["Bao Nguyen", "Minh Le"]);
        assert!(!view.approximate);
        assert_eq!(view.notice, None);
    }

    #[test]
    fn approximate_lookup_carries_notice() {
        let mut h = handle();
        h.set_locale(Locale::Vi);
        let view = h.lookup("ana tran", Side::Bride).unwrap();
        assert_eq!(view.guest_name, "Anna Tran");
        assert!(view.approximate);
        assert_eq!(view.seat_label, "Ghế số 1");
        assert_eq!(
            view.notice.as_deref(),
            Some("Hiển thị kết quả gần nhất cho \"ana tran\"")
        );
    }

    #[test]
    fn malformed_row_is_not_a_tablemate() {
        let view = handle().lookup("bao nguyen", Side::Bride).unwrap();
        assert!(!view.tablemates.iter().any(|n| n == "Broken"));
        assert!(handle().lookup("broken", Side::Bride).is_none());
    }

    #[test]
    fn no_search_and_not_found_both_yield_no_view() {
        let h = handle();
        assert_eq!(h.search("   ", Side::Bride), SearchOutcome::NoSearch);
        assert_eq!(h.search("qqqqqqqq", Side::Groom), SearchOutcome::NotFound);
        assert!(h.lookup("   ", Side::Bride).is_none());
    }

    #[test]
    fn missing_seat_gives_empty_label() {
        let view = handle().lookup("chi le", Side::Bride).unwrap();
        assert_eq!(view.seat_label, "");
        assert_eq!(view.table_label, "Table 2");
        assert!(view.tablemates.is_empty());
    }

    #[test]
    fn missing_columns_fail_the_load() {
        let err = SeatmapHandle::from_text("name,side\nAnna,bride\n", RosterOptions::default())
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "invalid roster: roster is missing required columns: table_id, table_name"
        );
    }

    #[test]
    fn failed_reload_keeps_previous_roster() {
        let mut h = handle();
        let err = h.reload_text("").unwrap_err();
        assert_eq!(err, SeatmapError::Validation(RosterError::Empty));
        assert_eq!(h.guests().len(), 4);
        assert!(h.lookup("anna tran", Side::Bride).is_some());
    }

    #[test]
    fn reload_replaces_roster_and_keeps_options() {
        let mut h = handle();
        h.set_locale(Locale::Vi);
        h.reload_text("name,table_id,table_name,side\nHoa,46,,groom\n").unwrap();
        assert_eq!(h.locale(), Locale::Vi);
        assert_eq!(h.guests().len(), 1);
        assert_eq!(h.table(46).map(|t| t.position), Some(Position::new(480, 710)));
        assert!(h.table(1).is_none());
    }

    #[test]
    fn transport_failure_is_reported() {
        struct Offline;
        impl RosterSource for Offline {
            fn describe(&self) -> String {
                "guests.csv".to_string()
            }
            fn fetch(&self) -> Result<String, TransportError> {
                Err(TransportError::new("guests.csv", "404 Not Found"))
            }
        }
        let err = SeatmapHandle::load(&Offline, RosterOptions::default()).err().unwrap();
        assert_eq!(err.to_string(), "failed to fetch guests.csv: 404 Not Found");
    }

    #[test]
    fn threshold_setter_clamps_and_ignores_nan() {
        let mut h = handle();
        h.set_threshold(1.5);
        assert_eq!(h.match_options().threshold, 1.0);
        h.set_threshold(f64::NAN);
        assert_eq!(h.match_options().threshold, 1.0);
        // Nothing scores strictly above 1.0.
        assert!(h.lookup("ana tran", Side::Bride).is_none());
        h.set_threshold(0.4);
        assert!(h.lookup("ana tran", Side::Bride).is_some());
    }

    #[test]
    fn custom_strategy_is_used() {
        let mut h = handle();
        h.set_strategy(MatchStrategy::new(vec![Box::new(ExactPass)]));
        assert_eq!(ExactPass.name(), "exact");
        assert!(h.lookup("anna", Side::Bride).is_none());
        assert!(h.lookup("anna tran", Side::Bride).is_some());
    }

    #[test]
    fn table_members_in_roster_order() {
        let h = handle();
        let names: Vec<&str> = h.table_members(1).iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Anna Tran", "Bao Nguyen", "Minh Le"]);
        assert!(h.table_members(9).is_empty());
    }

    #[test]
    fn fixture_labels_follow_locale() {
        let mut h = handle();
        let bar = h.layout().fixture("bar").cloned().unwrap();
        assert_eq!(h.fixture_label(&bar), "Bar");
        h.set_locale(Locale::Vi);
        assert_eq!(h.fixture_label(&bar), "Quầy bar");
    }
}
