//! Variance-targeting number placement.
//!
//! Runs random number placement a fixed number of times, ranks the trials
//! by a balance metric, and commits the layout at the requested percentile.
//! This is a bounded random search: it always succeeds and at worst returns
//! the least balanced trial it saw.

use rand::Rng;
use tracing::{info, trace};

use crate::board::{Board, Deck, RollNumber};
use crate::error::BoardError;
use crate::stats::VarianceKind;

/// Trials per search unless configured otherwise.
pub const DEFAULT_TRIALS: usize = 500;

/// Outcome of one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Variance of the committed layout.
    pub variance: f64,
    /// Rank of the committed layout among the trials, 0 = most balanced.
    pub index: usize,
    pub min_variance: f64,
    pub max_variance: f64,
}

/// Rank of the trial to commit for percentile `p` over `trials` sorted
/// trials: `max(floor((1 - p) * trials) - 1, 0)`, clamped to the last trial.
pub fn selection_index(p: f64, trials: usize) -> usize {
    if trials == 0 {
        return 0;
    }
    let raw = ((1.0 - p) * trials as f64).floor() as i64 - 1;
    raw.clamp(0, trials as i64 - 1) as usize
}

/// Places numbers by sampling `trials` random layouts from `deck` and
/// keeping the one at percentile `p` of `kind` variance. `p` near 1 picks a
/// balanced layout, `p` near 0 a skewed one.
///
/// The deck itself is never consumed; every trial draws from a fresh copy.
pub fn place_numbers_by_variance<R: Rng + ?Sized>(
    board: &mut Board,
    deck: &Deck<RollNumber>,
    p: f64,
    kind: VarianceKind,
    trials: usize,
    rng: &mut R,
) -> Result<SearchResult, BoardError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(BoardError::InvalidProbability {
            algorithm: kind.name(),
            value: Some(p),
        });
    }
    if trials == 0 {
        return Err(BoardError::Config("trials must be at least 1".to_string()));
    }
    if kind == VarianceKind::SettlementResource && board.settlement_spots().is_none() {
        return Err(BoardError::SettlementSpotsNotDerived);
    }

    let mut samples: Vec<(Vec<Option<RollNumber>>, f64)> = Vec::with_capacity(trials);
    for trial in 0..trials {
        board.place_numbers_random(deck.clone(), rng)?;
        let variance = board.variance(kind)?;
        trace!(trial, variance, "variance trial");
        samples.push((board.number_layout().to_vec(), variance));
    }
    samples.sort_by(|a, b| a.1.total_cmp(&b.1));

    let index = selection_index(p, trials);
    let min_variance = samples[0].1;
    let max_variance = samples[trials - 1].1;
    let (layout, variance) = samples.swap_remove(index);
    board.commit_numbers(layout);

    info!(
        metric = kind.name(),
        percentile = p,
        index,
        variance,
        min_variance,
        max_variance,
        "committed number layout"
    );
    Ok(SearchResult {
        variance,
        index,
        min_variance,
        max_variance,
    })
}
