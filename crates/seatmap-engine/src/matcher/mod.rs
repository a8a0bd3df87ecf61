// Guest matcher: resolves a free-text query on one side of the party to at
// most one guest record.
//
// Passes, in precedence order (see `strategy`):
//   1. exact      -- normalized name or alternative name equals the query
//   2. substring  -- either contains the other
//   3. similarity -- best normalized edit-distance score, strictly above the
//                    threshold
//
// Only records on the requested side are candidates. An empty query is not
// a search at all.

pub mod similarity;
pub mod status;
pub mod strategy;

use seatmap_core::text::normalize;
use seatmap_core::{GuestRecord, Side};
use tracing::debug;

pub use similarity::{best_similarity, similarity};
pub use status::MatchStatus;
pub use strategy::{ExactPass, MatchPass, MatchStrategy, SimilarityPass, SubstringPass};

/// Default similarity threshold. A candidate must score strictly above it.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Matcher options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// Minimum similarity score (exclusive) for a fallback match.
    pub threshold: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Which pass produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Exact,
    Substring,
    Similarity,
}

/// A matched guest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuestMatch {
    /// Roster index of the matched record.
    pub index: usize,
    pub kind: MatchKind,
    /// 1.0 for exact hits, otherwise the similarity score.
    pub score: f64,
}

impl GuestMatch {
    /// `true` when the match came from the similarity fallback, i.e. the
    /// page should say it is showing the closest match.
    pub fn is_approximate(&self) -> bool {
        self.kind == MatchKind::Similarity
    }
}

/// Result of one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// The query was empty after trimming; nothing was searched.
    NoSearch,
    Found(GuestMatch),
    NotFound,
}

impl SearchOutcome {
    /// The match, if any.
    pub fn found(&self) -> Option<&GuestMatch> {
        match self {
            SearchOutcome::Found(m) => Some(m),
            _ => None,
        }
    }
}

/// A record prepared for matching: normalized names plus its roster index.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub index: usize,
    pub guest: &'a GuestRecord,
    /// Normalized name.
    pub name: String,
    /// Normalized alternative name; `None` when absent or blank.
    pub vietnamese_name: Option<String>,
}

impl<'a> Candidate<'a> {
    pub fn new(index: usize, guest: &'a GuestRecord) -> Self {
        Self {
            index,
            guest,
            name: normalize(&guest.name),
            vietnamese_name: guest
                .vietnamese_name
                .as_deref()
                .map(normalize)
                .filter(|n| !n.is_empty()),
        }
    }

    /// The normalized names to compare against: the name, then the
    /// alternative name if present.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.vietnamese_name.as_deref())
    }
}

/// Search `guests` for `query` on `side` with the default strategy.
pub fn find_guest(
    guests: &[GuestRecord],
    query: &str,
    side: Side,
    options: &MatchOptions,
) -> SearchOutcome {
    find_guest_with(&MatchStrategy::default(), guests, query, side, options)
}

/// Search `guests` for `query` on `side` with an explicit strategy.
pub fn find_guest_with(
    strategy: &MatchStrategy,
    guests: &[GuestRecord],
    query: &str,
    side: Side,
    options: &MatchOptions,
) -> SearchOutcome {
    let query = normalize(query);
    if query.is_empty() {
        return SearchOutcome::NoSearch;
    }

    let candidates: Vec<Candidate<'_>> = guests
        .iter()
        .enumerate()
        .filter(|(_, guest)| guest.side == side)
        .map(|(index, guest)| Candidate::new(index, guest))
        .collect();

    let mut status = MatchStatus::new(&query, options.threshold);
    let pass = strategy.run(&candidates, &mut status);
    let outcome = status.into_outcome();
    debug!(
        query = %query,
        %side,
        candidates = candidates.len(),
        pass = pass.unwrap_or("none"),
        found = outcome.found().is_some(),
        "guest search finished"
    );
    outcome
}

/// Everyone else at the matched guest's table, in roster order.
pub fn tablemates(guests: &[GuestRecord], index: usize) -> Vec<&GuestRecord> {
    let Some(guest) = guests.get(index) else {
        return Vec::new();
    };
    guests
        .iter()
        .enumerate()
        .filter(|&(i, other)| i != index && other.table_id == guest.table_id)
        .map(|(_, other)| other)
        .collect()
}
