use crate::effects::{effect_for, EffectContext, JokerEffect};
use crate::{classify, Card, Edition, Enhancement, HandKind, HandLevels, Joker, ScoringConstants, Seal};
use serde::{Deserialize, Serialize};

/// The one piece of controlled mutable state: running chips and running
/// mult, updated strictly in trigger order. Mult is both added to and
/// multiplied; the two interleave, which is why no summed pools exist.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Score {
    pub fn total_raw(&self) -> f64 {
        self.chips as f64 * self.mult
    }

    pub fn total(&self) -> i64 {
        self.total_raw().floor() as i64
    }

    pub fn apply(&mut self, effect: &RuleEffect) {
        match effect {
            RuleEffect::AddChips(value) => self.chips += value,
            RuleEffect::AddMult(value) => self.mult += value,
            RuleEffect::MultiplyMult(value) => self.mult *= value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RuleEffect {
    AddChips(i64),
    AddMult(f64),
    MultiplyMult(f64),
}

/// One applied effect in an opt-in diagnostic trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreTraceStep {
    pub source: String,
    pub effect: RuleEffect,
    pub before: Score,
    pub after: Score,
}

/// Wraps the running `Score` with per-operation tallies (diagnostics only;
/// they never feed back into the arithmetic) and the optional trace.
#[derive(Debug)]
pub struct Accumulator {
    score: Score,
    card_chips: i64,
    add_chips: i64,
    add_mult: f64,
    x_mult: f64,
    trace: Option<Vec<ScoreTraceStep>>,
}

impl Accumulator {
    fn new(base: Score, traced: bool) -> Self {
        Self {
            score: base,
            card_chips: 0,
            add_chips: 0,
            add_mult: 0.0,
            x_mult: 1.0,
            trace: traced.then(Vec::new),
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Chips contributed by a scoring card itself (rank value, stone value,
    /// enhancement chips). Tallied apart from joker/edition chips.
    pub fn add_card_chips(&mut self, source: &str, value: i64) {
        if value == 0 {
            return;
        }
        self.card_chips += value;
        self.record(source, RuleEffect::AddChips(value));
    }

    pub fn apply(&mut self, source: &str, effect: RuleEffect) {
        match effect {
            RuleEffect::AddChips(0) => return,
            RuleEffect::AddChips(value) => self.add_chips += value,
            RuleEffect::AddMult(value) if value == 0.0 => return,
            RuleEffect::AddMult(value) => self.add_mult += value,
            RuleEffect::MultiplyMult(value) if value == 1.0 => return,
            RuleEffect::MultiplyMult(value) => self.x_mult *= value,
        }
        self.record(source, effect);
    }

    fn record(&mut self, source: &str, effect: RuleEffect) {
        let before = self.score;
        self.score.apply(&effect);
        if let Some(trace) = self.trace.as_mut() {
            trace.push(ScoreTraceStep {
                source: source.to_string(),
                effect,
                before,
                after: self.score,
            });
        }
    }
}

/// Full result of scoring one candidate play. Created fresh per evaluation;
/// the tallied fields describe how the final score was reached but take no
/// part in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub hand: HandKind,
    pub hand_rank: u8,
    pub base_chips: i64,
    pub base_mult: f64,
    pub card_chips: i64,
    pub add_chips: i64,
    pub add_mult: f64,
    pub x_mult: f64,
    pub final_score: f64,
    pub scoring_indices: Vec<usize>,
    pub played_indices: Vec<usize>,
}

impl ScoreBreakdown {
    /// Chips are purely additive, so the tallies reconstruct the final
    /// chip count exactly.
    pub fn total_chips(&self) -> i64 {
        self.base_chips + self.card_chips + self.add_chips
    }

    pub fn final_total(&self) -> i64 {
        self.final_score.floor() as i64
    }
}

pub fn score_hand(
    played: &[Card],
    held: &[Card],
    jokers: &[Joker],
    levels: &HandLevels,
) -> ScoreBreakdown {
    score_hand_with(played, held, jokers, levels, &ScoringConstants::default())
}

pub fn score_hand_with(
    played: &[Card],
    held: &[Card],
    jokers: &[Joker],
    levels: &HandLevels,
    consts: &ScoringConstants,
) -> ScoreBreakdown {
    run_pipeline(played, held, jokers, levels, consts, false).0
}

/// As `score_hand_with`, also returning the step-by-step trace.
pub fn score_hand_traced(
    played: &[Card],
    held: &[Card],
    jokers: &[Joker],
    levels: &HandLevels,
    consts: &ScoringConstants,
) -> (ScoreBreakdown, Vec<ScoreTraceStep>) {
    let (breakdown, trace) = run_pipeline(played, held, jokers, levels, consts, true);
    (breakdown, trace.unwrap_or_default())
}

fn run_pipeline(
    played: &[Card],
    held: &[Card],
    jokers: &[Joker],
    levels: &HandLevels,
    consts: &ScoringConstants,
    traced: bool,
) -> (ScoreBreakdown, Option<Vec<ScoreTraceStep>>) {
    let (hand, scoring) = classify(played);
    let (base_chips, base_mult) = levels.base_for(hand);

    let mut acc = Accumulator::new(
        Score {
            chips: base_chips,
            mult: base_mult,
        },
        traced,
    );
    let ctx = EffectContext {
        hand,
        played,
        scoring: &scoring,
        held,
        jokers,
        consts,
    };
    // Resolved once; slot order is preserved.
    let effects: Vec<JokerEffect> = jokers
        .iter()
        .map(|joker| effect_for(&joker.name).unwrap_or_default())
        .collect();

    // Phase 2: scoring cards, ascending position; a red seal repeats the
    // whole card trigger exactly once more.
    for &idx in &scoring {
        let card = &played[idx];
        let triggers = if card.seal == Some(Seal::Red) { 2 } else { 1 };
        for _ in 0..triggers {
            trigger_scoring_card(&ctx, &effects, idx, &mut acc);
        }
    }

    // Phase 3: held cards, ascending position.
    for card in held {
        trigger_held_card(consts, card, &mut acc);
    }

    // Phase 4: each joker's independent effect, immediately followed by its
    // own edition bonus. The interleaving is load-bearing: a polychrome on
    // slot 0 must multiply before slot 1 adds.
    for (slot, joker) in jokers.iter().enumerate() {
        if let Some(handler) = effects[slot].independent {
            handler(&ctx, slot, &mut acc);
        }
        apply_edition("joker_edition", joker.edition, consts, &mut acc);
    }

    let score = acc.score();
    let breakdown = ScoreBreakdown {
        hand,
        hand_rank: hand.rank_num(),
        base_chips,
        base_mult,
        card_chips: acc.card_chips,
        add_chips: acc.add_chips,
        add_mult: acc.add_mult,
        x_mult: acc.x_mult,
        final_score: score.total_raw(),
        scoring_indices: scoring,
        played_indices: (0..played.len()).collect(),
    };
    (breakdown, acc.trace)
}

fn trigger_scoring_card(
    ctx: &EffectContext<'_>,
    effects: &[JokerEffect],
    idx: usize,
    acc: &mut Accumulator,
) {
    let card = &ctx.played[idx];

    // (a) card chips: rank value, or the flat stone value in its place.
    // (b) enhancement bonus, expected-value substituted where probabilistic.
    match card.enhancement {
        Some(Enhancement::Stone) => acc.add_card_chips("card_stone", ctx.consts.stone_chips),
        _ => {
            acc.add_card_chips("card", card.rank.chip_value());
            match card.enhancement {
                Some(Enhancement::Bonus) => {
                    acc.add_card_chips("enhancement_bonus", ctx.consts.bonus_chips);
                }
                Some(Enhancement::Mult) => {
                    acc.apply("enhancement_mult", RuleEffect::AddMult(ctx.consts.mult_card_mult));
                }
                Some(Enhancement::Glass) => {
                    acc.apply("enhancement_glass", RuleEffect::MultiplyMult(ctx.consts.glass_x_mult));
                }
                Some(Enhancement::Lucky) => {
                    acc.apply("enhancement_lucky", RuleEffect::AddMult(ctx.consts.lucky_expected_mult));
                }
                _ => {}
            }
        }
    }

    // (c) edition bonus.
    apply_edition("card_edition", card.edition, ctx.consts, acc);

    // (d) per-scoring-card joker effects, in slot order.
    for effect in effects {
        if let Some(handler) = effect.on_scored {
            handler(ctx, idx, acc);
        }
    }
}

/// While-held triggers are a narrow fixed set: a steel card multiplies the
/// running mult, amplified by its own edition, and a red seal runs the
/// trigger once more.
fn trigger_held_card(consts: &ScoringConstants, card: &Card, acc: &mut Accumulator) {
    if card.enhancement != Some(Enhancement::Steel) {
        return;
    }
    let triggers = if card.seal == Some(Seal::Red) { 2 } else { 1 };
    for _ in 0..triggers {
        acc.apply("held_steel", RuleEffect::MultiplyMult(consts.steel_held_x_mult));
        apply_edition("held_edition", card.edition, consts, acc);
    }
}

fn apply_edition(
    source: &str,
    edition: Option<Edition>,
    consts: &ScoringConstants,
    acc: &mut Accumulator,
) {
    match edition {
        Some(Edition::Foil) => acc.apply(source, RuleEffect::AddChips(consts.foil_chips)),
        Some(Edition::Holographic) => {
            acc.apply(source, RuleEffect::AddMult(consts.holographic_mult));
        }
        Some(Edition::Polychrome) => {
            acc.apply(source, RuleEffect::MultiplyMult(consts.polychrome_x_mult));
        }
        Some(Edition::Negative) | None => {}
    }
}
