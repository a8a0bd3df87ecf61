// Match passes and the strategy that chains them.

use super::Candidate;
use super::MatchKind;
use super::similarity::best_similarity;
use super::status::MatchStatus;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One stage of the search.
///
/// A pass walks the candidates in roster order and either resolves the
/// search or offers scored candidates to `status`.
pub trait MatchPass {
    /// Short name, used in logs.
    fn name(&self) -> &'static str;

    fn run(&self, candidates: &[Candidate<'_>], status: &mut MatchStatus<'_>);
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

/// Normalized name or alternative name equals the query.
pub struct ExactPass;

impl MatchPass for ExactPass {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn run(&self, candidates: &[Candidate<'_>], status: &mut MatchStatus<'_>) {
        let query = status.query();
        if let Some(hit) = candidates.iter().find(|c| c.names().any(|n| n == query)) {
            status.resolve(hit.index, MatchKind::Exact, 1.0);
        }
    }
}

/// The query contains a name, or a name contains the query.
///
/// A missing alternative name takes no part; an empty string would
/// otherwise be contained in every query.
pub struct SubstringPass;

impl MatchPass for SubstringPass {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn run(&self, candidates: &[Candidate<'_>], status: &mut MatchStatus<'_>) {
        let query = status.query();
        let hit = candidates
            .iter()
            .find(|c| c.names().any(|n| n.contains(query) || query.contains(n)));
        if let Some(hit) = hit {
            let score = hit.score(query);
            status.resolve(hit.index, MatchKind::Substring, score);
        }
    }
}

/// Scores every candidate by normalized edit distance and offers it.
pub struct SimilarityPass;

impl MatchPass for SimilarityPass {
    fn name(&self) -> &'static str {
        "similarity"
    }

    fn run(&self, candidates: &[Candidate<'_>], status: &mut MatchStatus<'_>) {
        let query = status.query();
        for candidate in candidates {
            status.offer(candidate.index, candidate.score(query));
        }
    }
}

impl Candidate<'_> {
    /// Similarity score of this candidate against a normalized query.
    pub fn score(&self, query: &str) -> f64 {
        best_similarity(query, &self.name, self.vietnamese_name.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// An ordered list of passes. Runs them until one resolves the search.
pub struct MatchStrategy {
    pub(crate) passes: Vec<Box<dyn MatchPass + Send + Sync>>,
}

impl MatchStrategy {
    pub fn new(passes: Vec<Box<dyn MatchPass + Send + Sync>>) -> Self {
        Self { passes }
    }

    /// Run the passes in order; returns the name of the pass that resolved
    /// the search, if any.
    pub fn run(
        &self,
        candidates: &[Candidate<'_>],
        status: &mut MatchStatus<'_>,
    ) -> Option<&'static str> {
        for pass in &self.passes {
            pass.run(candidates, status);
            if status.is_resolved() {
                return Some(pass.name());
            }
        }
        None
    }
}

impl Default for MatchStrategy {
    /// Exact, then substring, then similarity.
    fn default() -> Self {
        Self::new(vec![
            Box::new(ExactPass),
            Box::new(SubstringPass),
            Box::new(SimilarityPass),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatmap_core::{GuestRecord, Side};

    fn candidates(guests: &[GuestRecord]) -> Vec<Candidate<'_>> {
        guests
            .iter()
            .enumerate()
            .map(|(index, guest)| Candidate::new(index, guest))
            .collect()
    }

    #[test]
    fn default_strategy_has_three_passes() {
        let names: Vec<_> = MatchStrategy::default().passes.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["exact", "substring", "similarity"]);
    }

    #[test]
    fn exact_pass_uses_alternative_name() {
        let guests = vec![
            GuestRecord::new("Anna Tran", 1, Side::Bride).with_vietnamese_name("Trần Anna"),
        ];
        let cands = candidates(&guests);
        let mut status = MatchStatus::new("trần anna", 0.4);
        ExactPass.run(&cands, &mut status);
        assert!(status.is_resolved());
    }

    #[test]
    fn substring_pass_is_bidirectional() {
        let guests = vec![GuestRecord::new("An", 1, Side::Bride)];
        let cands = candidates(&guests);
        let mut status = MatchStatus::new("an nguyen", 0.4);
        SubstringPass.run(&cands, &mut status);
        assert!(status.is_resolved());
    }

    #[test]
    fn substring_pass_ignores_missing_alternative() {
        let guests = vec![GuestRecord::new("Bao", 1, Side::Bride)];
        let cands = candidates(&guests);
        let mut status = MatchStatus::new("xyz", 0.4);
        SubstringPass.run(&cands, &mut status);
        assert!(!status.is_resolved());
    }

    #[test]
    fn strategy_stops_at_first_resolving_pass() {
        let guests = vec![
            GuestRecord::new("Anna", 1, Side::Bride),
            GuestRecord::new("Anna Tran", 2, Side::Bride),
        ];
        let cands = candidates(&guests);
        let mut status = MatchStatus::new("anna tran", 0.4);
        let pass = MatchStrategy::default().run(&cands, &mut status);
        assert_eq!(pass, Some("exact"));
        // The similarity pass never ran.
        assert_eq!(status.best(), None);
    }

    #[test]
    fn similarity_pass_only_offers() {
        let guests = vec![GuestRecord::new("Anna Tran", 1, Side::Bride)];
        let cands = candidates(&guests);
        let mut status = MatchStatus::new("ana tran", 0.4);
        SimilarityPass.run(&cands, &mut status);
        assert!(!status.is_resolved());
        assert_eq!(status.best().map(|(i, _)| i), Some(0));
    }
}
