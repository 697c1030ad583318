use crate::HandKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Level-1 base (chips, mult) for each hand kind.
pub fn hand_base(kind: HandKind) -> (i64, f64) {
    match kind {
        HandKind::HighCard => (5, 1.0),
        HandKind::Pair => (10, 2.0),
        HandKind::TwoPair => (20, 2.0),
        HandKind::Trips => (30, 3.0),
        HandKind::Straight => (30, 4.0),
        HandKind::Flush => (35, 4.0),
        HandKind::FullHouse => (40, 4.0),
        HandKind::Quads => (60, 7.0),
        HandKind::StraightFlush => (100, 8.0),
        HandKind::FiveOfAKind => (120, 12.0),
        HandKind::FlushHouse => (140, 14.0),
        HandKind::FlushFive => (160, 16.0),
    }
}

/// Per-level (chips, mult) gained by each planet upgrade past level 1.
pub fn level_bonus(kind: HandKind) -> (i64, f64) {
    match kind {
        HandKind::HighCard => (10, 1.0),
        HandKind::Pair => (15, 1.0),
        HandKind::TwoPair => (20, 2.0),
        HandKind::Trips => (20, 2.0),
        HandKind::Straight => (30, 3.0),
        HandKind::Flush => (15, 2.0),
        HandKind::FullHouse => (25, 2.0),
        HandKind::Quads => (30, 3.0),
        HandKind::StraightFlush => (40, 4.0),
        HandKind::FiveOfAKind => (35, 3.0),
        HandKind::FlushHouse => (40, 4.0),
        HandKind::FlushFive => (50, 3.0),
    }
}

/// Per-hand upgrade state for one decision cycle: the planet level of every
/// hand kind, plus optional authoritative (chips, mult) overrides reported
/// by the live game.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HandLevels {
    #[serde(default)]
    levels: HashMap<HandKind, u32>,
    #[serde(default)]
    overrides: HashMap<HandKind, (i64, f64)>,
}

impl HandLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, kind: HandKind) -> u32 {
        self.levels.get(&kind).copied().unwrap_or(1).max(1)
    }

    pub fn set_level(&mut self, kind: HandKind, level: u32) {
        self.levels.insert(kind, level.max(1));
    }

    /// Record a game-reported (chips, mult) pair for a hand kind. The pair
    /// is stored as-is; `base_for` decides whether it is usable.
    pub fn set_override(&mut self, kind: HandKind, chips: i64, mult: f64) {
        self.overrides.insert(kind, (chips, mult));
    }

    /// Base (chips, mult) for a hand kind. An override wins when present,
    /// unless both of its components are non-positive; an all-zero report
    /// means "no override provided", not "award zero".
    pub fn base_for(&self, kind: HandKind) -> (i64, f64) {
        if let Some(&(chips, mult)) = self.overrides.get(&kind) {
            if chips > 0 || mult > 0.0 {
                return (chips, mult);
            }
        }
        let (base_chips, base_mult) = hand_base(kind);
        let level = self.level(kind);
        if level <= 1 {
            return (base_chips, base_mult);
        }
        let (bonus_chips, bonus_mult) = level_bonus(kind);
        let extra = (level - 1) as i64;
        (
            base_chips.saturating_add(bonus_chips.saturating_mul(extra)),
            base_mult + bonus_mult * extra as f64,
        )
    }
}
