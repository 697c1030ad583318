use crate::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    FiveOfAKind,
    FlushHouse,
    FlushFive,
}

impl HandKind {
    pub const ALL: [HandKind; 12] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::Trips,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::Quads,
        HandKind::StraightFlush,
        HandKind::FiveOfAKind,
        HandKind::FlushHouse,
        HandKind::FlushFive,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::Trips => "trips",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::Quads => "quads",
            HandKind::StraightFlush => "straight_flush",
            HandKind::FiveOfAKind => "five_kind",
            HandKind::FlushHouse => "flush_house",
            HandKind::FlushFive => "flush_five",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::Trips => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::Quads => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::FiveOfAKind => "Five of a Kind",
            HandKind::FlushHouse => "Flush House",
            HandKind::FlushFive => "Flush Five",
        }
    }

    /// Strength number exposed to callers for tie-break and escalation
    /// heuristics. 1 = High Card, 12 = Flush Five.
    pub fn rank_num(self) -> u8 {
        match self {
            HandKind::HighCard => 1,
            HandKind::Pair => 2,
            HandKind::TwoPair => 3,
            HandKind::Trips => 4,
            HandKind::Straight => 5,
            HandKind::Flush => 6,
            HandKind::FullHouse => 7,
            HandKind::Quads => 8,
            HandKind::StraightFlush => 9,
            HandKind::FiveOfAKind => 10,
            HandKind::FlushHouse => 11,
            HandKind::FlushFive => 12,
        }
    }

    pub fn from_id(value: &str) -> Option<HandKind> {
        HandKind::ALL.iter().copied().find(|kind| kind.id() == value)
    }
}

/// Classify a played card set. Returns the hand kind and the indices of the
/// cards that score for it, ascending. Total: an empty input is the weakest
/// hand with no scoring cards.
///
/// The cascade is a strict priority order; the first matching branch wins.
pub fn classify(cards: &[Card]) -> (HandKind, Vec<usize>) {
    if cards.is_empty() {
        return (HandKind::HighCard, Vec::new());
    }

    let n = cards.len();
    let groups = rank_groups(cards);
    let (top_rank, top_count) = groups[0];

    let is_flush = n >= 5
        && cards[0].suit != Suit::Unknown
        && cards.iter().all(|card| card.suit == cards[0].suit);
    let is_straight = n >= 5 && is_straight_run(cards);

    if top_count >= 5 {
        let scoring = indices_of_rank(cards, top_rank, 5);
        let kind = if is_flush {
            HandKind::FlushFive
        } else {
            HandKind::FiveOfAKind
        };
        return (kind, scoring);
    }

    if is_flush && is_straight {
        return (HandKind::StraightFlush, (0..n).collect());
    }

    if top_count >= 4 {
        let mut scoring = indices_of_rank(cards, top_rank, usize::MAX);
        let kicker = (0..n).find(|idx| !scoring.contains(idx));
        scoring.extend(kicker);
        scoring.sort_unstable();
        return (HandKind::Quads, scoring);
    }

    if groups.len() >= 2 && top_count == 3 && groups[1].1 >= 2 {
        let mut scoring = indices_of_rank(cards, top_rank, 3);
        scoring.extend(indices_of_rank(cards, groups[1].0, 2));
        scoring.sort_unstable();
        let kind = if is_flush {
            HandKind::FlushHouse
        } else {
            HandKind::FullHouse
        };
        return (kind, scoring);
    }

    if is_flush {
        return (HandKind::Flush, (0..n).collect());
    }

    if is_straight {
        return (HandKind::Straight, (0..n).collect());
    }

    if top_count == 3 {
        return (HandKind::Trips, indices_of_rank(cards, top_rank, 3));
    }

    if groups.len() >= 2 && top_count == 2 && groups[1].1 == 2 {
        let mut scoring: Vec<usize> = (0..n)
            .filter(|&idx| {
                let order = cards[idx].rank.order();
                order == top_rank || order == groups[1].0
            })
            .collect();
        scoring.truncate(4);
        return (HandKind::TwoPair, scoring);
    }

    if top_count == 2 {
        return (HandKind::Pair, indices_of_rank(cards, top_rank, 2));
    }

    (HandKind::HighCard, vec![highest_card_index(cards)])
}

/// Rank groups as (order value, count), sorted by count descending; ties
/// keep first-seen order so group picks are position-stable.
fn rank_groups(cards: &[Card]) -> Vec<(u8, usize)> {
    let mut groups: Vec<(u8, usize)> = Vec::new();
    for card in cards {
        let order = card.rank.order();
        match groups.iter_mut().find(|(value, _)| *value == order) {
            Some(entry) => entry.1 += 1,
            None => groups.push((order, 1)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}

fn indices_of_rank(cards: &[Card], order: u8, limit: usize) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.rank.order() == order)
        .map(|(idx, _)| idx)
        .take(limit)
        .collect()
}

/// Five consecutive distinct rank values, wheel (A-2-3-4-5) included.
/// Unknown ranks never participate.
fn is_straight_run(cards: &[Card]) -> bool {
    let mut values: Vec<u8> = cards
        .iter()
        .map(|card| card.rank.order())
        .filter(|&value| value != 0)
        .collect();
    values.sort_unstable();
    values.dedup();
    if values.len() != 5 {
        return false;
    }
    if values == [2, 3, 4, 5, 14] {
        return true;
    }
    values[4] - values[0] == 4
}

/// Position-stable max: the first card holding the highest rank order.
fn highest_card_index(cards: &[Card]) -> usize {
    let mut best = 0;
    for (idx, card) in cards.iter().enumerate() {
        if card.rank.order() > cards[best].rank.order() {
            best = idx;
        }
    }
    best
}

/// Static containment relation: does a classification also satisfy the
/// condition of a weaker hand kind? Modifier conditionals gate on this, not
/// on kind equality. Every hand contains High Card; a Full House contains a
/// Two Pair; flush-variant hands contain their plain counterparts.
pub fn hand_contains(hand: HandKind, target: HandKind) -> bool {
    use HandKind::*;
    if hand == target {
        return true;
    }
    match target {
        HighCard => true,
        Pair => matches!(
            hand,
            TwoPair | FullHouse | Quads | FiveOfAKind | FlushHouse | FlushFive
        ),
        TwoPair => matches!(hand, FullHouse | FlushHouse),
        Trips => matches!(hand, FullHouse | Quads | FiveOfAKind | FlushHouse | FlushFive),
        Straight => matches!(hand, StraightFlush),
        Flush => matches!(hand, StraightFlush | FlushHouse | FlushFive),
        FullHouse => matches!(hand, FlushHouse),
        Quads => matches!(hand, FiveOfAKind | FlushFive),
        FiveOfAKind => matches!(hand, FlushFive),
        StraightFlush | FlushHouse | FlushFive => false,
    }
}
