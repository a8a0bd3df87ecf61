// Per-search state: the resolved match, or the best similarity candidate
// seen so far.

use super::{GuestMatch, MatchKind, SearchOutcome};

/// Tracks one search while the passes run.
///
/// A pass either resolves the search outright (exact or substring hit) or
/// offers scored candidates. Offers keep the first of equally good
/// candidates. The best offer only becomes a match if its score is strictly
/// above the threshold.
#[derive(Debug, Clone)]
pub struct MatchStatus<'q> {
    /// The normalized query.
    query: &'q str,
    /// Minimum score a similarity candidate must exceed.
    threshold: f64,
    /// Set once a pass resolves the search.
    resolved: Option<GuestMatch>,
    /// Best `(roster index, score)` offered so far.
    best: Option<(usize, f64)>,
}

impl<'q> MatchStatus<'q> {
    pub fn new(query: &'q str, threshold: f64) -> Self {
        Self {
            query,
            threshold,
            resolved: None,
            best: None,
        }
    }

    /// The normalized query being searched for.
    pub fn query(&self) -> &'q str {
        self.query
    }

    /// Returns `true` once a pass has resolved the search; later passes
    /// must not run.
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Resolve the search with a definite hit. The first resolution sticks.
    pub fn resolve(&mut self, index: usize, kind: MatchKind, score: f64) {
        if self.resolved.is_none() {
            self.resolved = Some(GuestMatch { index, kind, score });
        }
    }

    /// Offer a similarity candidate. Replaces the current best only when
    /// strictly better.
    pub fn offer(&mut self, index: usize, score: f64) {
        match self.best {
            Some((_, best)) if score <= best => {}
            _ => self.best = Some((index, score)),
        }
    }

    /// The best offer so far, regardless of threshold.
    pub fn best(&self) -> Option<(usize, f64)> {
        self.best
    }

    /// Finish the search.
    pub fn into_outcome(self) -> SearchOutcome {
        if let Some(found) = self.resolved {
            return SearchOutcome::Found(found);
        }
        match self.best {
            Some((index, score)) if score > self.threshold => SearchOutcome::Found(GuestMatch {
                index,
                kind: MatchKind::Similarity,
                score,
            }),
            _ => SearchOutcome::NotFound,
        }
    }
}
