use crate::{SearchConfig, SearchError};
use log::debug;
use rayon::prelude::*;
use simlatro_core::{score_hand_with, Card, HandLevels, Joker, ScoreBreakdown, ScoringConstants};
use std::cmp::Ordering;

pub fn best_hands(
    hand: &[Card],
    jokers: &[Joker],
    levels: &HandLevels,
    config: &SearchConfig,
) -> Result<Vec<ScoreBreakdown>, SearchError> {
    best_hands_with(hand, jokers, levels, config, &ScoringConstants::default())
}

/// Enumerate every playable subset of `hand` (sizes 1..=max, largest first),
/// score each with its complement as the held set, and return the top
/// breakdowns sorted strictly descending by final score. Ties keep
/// enumeration order. Indices in the returned breakdowns refer to positions
/// in `hand`.
pub fn best_hands_with(
    hand: &[Card],
    jokers: &[Joker],
    levels: &HandLevels,
    config: &SearchConfig,
    consts: &ScoringConstants,
) -> Result<Vec<ScoreBreakdown>, SearchError> {
    if hand.len() > config.max_hand_size {
        return Err(SearchError::HandTooLarge {
            len: hand.len(),
            max: config.max_hand_size,
        });
    }

    let mut combos: Vec<Vec<usize>> = Vec::new();
    let max_size = config.max_play_size.min(hand.len());
    for size in (1..=max_size).rev() {
        enumerate_combinations(hand.len(), size, &mut combos);
    }
    debug!(
        "evaluating {} candidate plays from a hand of {}",
        combos.len(),
        hand.len()
    );

    let evaluate =
        |indices: &Vec<usize>| evaluate_subset(hand, indices, jokers, levels, consts);
    // Every evaluation is independent; both paths preserve enumeration
    // order so the stable sort below is the only tie-break.
    let mut results: Vec<ScoreBreakdown> = if combos.len() >= config.parallel_threshold {
        combos.par_iter().map(evaluate).collect()
    } else {
        combos.iter().map(evaluate).collect()
    };

    results.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });
    results.truncate(config.top_n);
    Ok(results)
}

fn evaluate_subset(
    hand: &[Card],
    indices: &[usize],
    jokers: &[Joker],
    levels: &HandLevels,
    consts: &ScoringConstants,
) -> ScoreBreakdown {
    let played: Vec<Card> = indices.iter().map(|&idx| hand[idx]).collect();
    let held: Vec<Card> = (0..hand.len())
        .filter(|idx| !indices.contains(idx))
        .map(|idx| hand[idx])
        .collect();
    let mut breakdown = score_hand_with(&played, &held, jokers, levels, consts);
    breakdown.scoring_indices = breakdown
        .scoring_indices
        .iter()
        .map(|&pos| indices[pos])
        .collect();
    breakdown.played_indices = indices.to_vec();
    breakdown
}

fn enumerate_combinations(n: usize, k: usize, out: &mut Vec<Vec<usize>>) {
    if n == 0 || k == 0 || k > n {
        return;
    }
    let mut current = Vec::with_capacity(k);
    recurse_combinations(0, n, k, &mut current, out);
}

fn recurse_combinations(
    start: usize,
    n: usize,
    k: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    let remaining = k - current.len();
    let max_idx = n - remaining;
    for idx in start..=max_idx {
        current.push(idx);
        recurse_combinations(idx + 1, n, k, current, out);
        current.pop();
    }
}
