use crate::{
    hand_contains, Accumulator, Card, Enhancement, HandKind, Joker, Rank, RuleEffect,
    ScoringConstants, Suit,
};

/// Read-only view handed to effect handlers. Handlers mutate nothing but the
/// accumulator.
pub struct EffectContext<'a> {
    pub hand: HandKind,
    pub played: &'a [Card],
    pub scoring: &'a [usize],
    pub held: &'a [Card],
    pub jokers: &'a [Joker],
    pub consts: &'a ScoringConstants,
}

/// Fires once per scoring-card trigger; the index points into `ctx.played`.
pub type CardHandler = fn(&EffectContext<'_>, usize, &mut Accumulator);

/// Fires once per hand in the independent phase; the index is the joker's
/// own slot.
pub type IndependentHandler = fn(&EffectContext<'_>, usize, &mut Accumulator);

#[derive(Clone, Copy, Default)]
pub struct JokerEffect {
    pub on_scored: Option<CardHandler>,
    pub independent: Option<IndependentHandler>,
}

fn scored(handler: CardHandler) -> JokerEffect {
    JokerEffect {
        on_scored: Some(handler),
        independent: None,
    }
}

fn independent(handler: IndependentHandler) -> JokerEffect {
    JokerEffect {
        on_scored: None,
        independent: Some(handler),
    }
}

/// Canonical registry keys of every modeled effect, for callers that need
/// to distinguish "not implemented" from "implemented but inactive".
pub const IMPLEMENTED_EFFECTS: &[&str] = &[
    "abstract_joker",
    "arrowhead",
    "banner",
    "blackboard",
    "bloodstone",
    "blue_joker",
    "clever_joker",
    "crafty_joker",
    "crazy_joker",
    "devious_joker",
    "droll_joker",
    "even_steven",
    "fibonacci",
    "gluttonous_joker",
    "greedy_joker",
    "green_joker",
    "half_joker",
    "hiker",
    "joker",
    "joker_stencil",
    "jolly_joker",
    "loyalty_card",
    "lusty_joker",
    "mad_joker",
    "misprint",
    "mystic_summit",
    "odd_todd",
    "onyx_agate",
    "photograph",
    "raised_fist",
    "red_card",
    "ride_the_bus",
    "scary_face",
    "scholar",
    "sly_joker",
    "steel_joker",
    "supernova",
    "swashbuckler",
    "the_duo",
    "the_family",
    "the_order",
    "the_tribe",
    "the_trio",
    "walkie_talkie",
    "wily_joker",
    "wrathful_joker",
    "zany_joker",
];

pub fn is_implemented(name: &str) -> bool {
    effect_for(name).is_some()
}

/// Map a modifier name to its handlers. Unrecognized names get no handlers
/// and therefore contribute nothing.
pub fn effect_for(name: &str) -> Option<JokerEffect> {
    let key = effect_key(name);
    let effect = match key.as_str() {
        "joker" => independent(|ctx, _, acc| {
            acc.apply("joker", RuleEffect::AddMult(ctx.consts.joker_mult));
        }),

        // Suit- and rank-conditioned effects fire per scoring card.
        "greedy_joker" => scored(|ctx, idx, acc| {
            if ctx.played[idx].suit == Suit::Diamonds {
                acc.apply("greedy_joker", RuleEffect::AddChips(ctx.consts.greedy_chips_per_diamond));
            }
        }),
        "lusty_joker" => scored(|ctx, idx, acc| {
            if ctx.played[idx].suit == Suit::Hearts {
                acc.apply("lusty_joker", RuleEffect::AddMult(ctx.consts.lusty_mult_per_heart));
            }
        }),
        "wrathful_joker" => scored(|ctx, idx, acc| {
            if ctx.played[idx].suit == Suit::Spades {
                acc.apply("wrathful_joker", RuleEffect::AddMult(ctx.consts.wrathful_mult_per_spade));
            }
        }),
        "gluttonous_joker" => scored(|ctx, idx, acc| {
            if ctx.played[idx].suit == Suit::Clubs {
                acc.apply("gluttonous_joker", RuleEffect::AddMult(ctx.consts.gluttonous_mult_per_club));
            }
        }),
        "arrowhead" => scored(|ctx, idx, acc| {
            if ctx.played[idx].suit == Suit::Spades {
                acc.apply("arrowhead", RuleEffect::AddChips(ctx.consts.arrowhead_chips_per_spade));
            }
        }),
        "onyx_agate" => scored(|ctx, idx, acc| {
            if ctx.played[idx].suit == Suit::Clubs {
                acc.apply("onyx_agate", RuleEffect::AddMult(ctx.consts.onyx_agate_mult_per_club));
            }
        }),
        "bloodstone" => scored(|ctx, idx, acc| {
            if ctx.played[idx].suit == Suit::Hearts {
                acc.apply(
                    "bloodstone",
                    RuleEffect::MultiplyMult(ctx.consts.bloodstone_expected_x_mult),
                );
            }
        }),
        "scary_face" => scored(|ctx, idx, acc| {
            if ctx.played[idx].is_face() {
                acc.apply("scary_face", RuleEffect::AddChips(ctx.consts.scary_face_chips_per_face));
            }
        }),
        "fibonacci" => scored(|ctx, idx, acc| {
            if matches!(
                ctx.played[idx].rank,
                Rank::Ace | Rank::Two | Rank::Three | Rank::Five | Rank::Eight
            ) {
                acc.apply("fibonacci", RuleEffect::AddMult(ctx.consts.fibonacci_mult_per_card));
            }
        }),
        "even_steven" => scored(|ctx, idx, acc| {
            if matches!(
                ctx.played[idx].rank,
                Rank::Two | Rank::Four | Rank::Six | Rank::Eight | Rank::Ten
            ) {
                acc.apply("even_steven", RuleEffect::AddMult(ctx.consts.even_steven_mult_per_card));
            }
        }),
        "odd_todd" => scored(|ctx, idx, acc| {
            if matches!(
                ctx.played[idx].rank,
                Rank::Ace | Rank::Three | Rank::Five | Rank::Seven | Rank::Nine
            ) {
                acc.apply("odd_todd", RuleEffect::AddChips(ctx.consts.odd_todd_chips_per_card));
            }
        }),
        "scholar" => scored(|ctx, idx, acc| {
            if ctx.played[idx].rank == Rank::Ace {
                acc.apply("scholar", RuleEffect::AddChips(ctx.consts.scholar_chips_per_ace));
                acc.apply("scholar", RuleEffect::AddMult(ctx.consts.scholar_mult_per_ace));
            }
        }),
        "walkie_talkie" => scored(|ctx, idx, acc| {
            if matches!(ctx.played[idx].rank, Rank::Ten | Rank::Four) {
                acc.apply("walkie_talkie", RuleEffect::AddChips(ctx.consts.walkie_talkie_chips_per_card));
                acc.apply("walkie_talkie", RuleEffect::AddMult(ctx.consts.walkie_talkie_mult_per_card));
            }
        }),
        "photograph" => scored(|ctx, idx, acc| {
            let first_face = ctx
                .scoring
                .iter()
                .copied()
                .find(|&pos| ctx.played[pos].is_face());
            if first_face == Some(idx) {
                acc.apply("photograph", RuleEffect::MultiplyMult(ctx.consts.photograph_x_mult));
            }
        }),

        // Hand-conditioned effects consult the containment relation, not
        // kind equality.
        "jolly_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Pair) {
                acc.apply("jolly_joker", RuleEffect::AddMult(ctx.consts.jolly_mult));
            }
        }),
        "zany_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Trips) {
                acc.apply("zany_joker", RuleEffect::AddMult(ctx.consts.zany_mult));
            }
        }),
        "mad_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::TwoPair) {
                acc.apply("mad_joker", RuleEffect::AddMult(ctx.consts.mad_mult));
            }
        }),
        "crazy_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Straight) {
                acc.apply("crazy_joker", RuleEffect::AddMult(ctx.consts.crazy_mult));
            }
        }),
        "droll_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Flush) {
                acc.apply("droll_joker", RuleEffect::AddMult(ctx.consts.droll_mult));
            }
        }),
        "sly_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Pair) {
                acc.apply("sly_joker", RuleEffect::AddChips(ctx.consts.sly_chips));
            }
        }),
        "wily_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Trips) {
                acc.apply("wily_joker", RuleEffect::AddChips(ctx.consts.wily_chips));
            }
        }),
        "clever_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::TwoPair) {
                acc.apply("clever_joker", RuleEffect::AddChips(ctx.consts.clever_chips));
            }
        }),
        "devious_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Straight) {
                acc.apply("devious_joker", RuleEffect::AddChips(ctx.consts.devious_chips));
            }
        }),
        "crafty_joker" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Flush) {
                acc.apply("crafty_joker", RuleEffect::AddChips(ctx.consts.crafty_chips));
            }
        }),
        "the_duo" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Pair) {
                acc.apply("the_duo", RuleEffect::MultiplyMult(ctx.consts.duo_x_mult));
            }
        }),
        "the_trio" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Trips) {
                acc.apply("the_trio", RuleEffect::MultiplyMult(ctx.consts.trio_x_mult));
            }
        }),
        "the_family" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Quads) {
                acc.apply("the_family", RuleEffect::MultiplyMult(ctx.consts.family_x_mult));
            }
        }),
        "the_order" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Straight) {
                acc.apply("the_order", RuleEffect::MultiplyMult(ctx.consts.order_x_mult));
            }
        }),
        "the_tribe" => independent(|ctx, _, acc| {
            if hand_contains(ctx.hand, HandKind::Flush) {
                acc.apply("the_tribe", RuleEffect::MultiplyMult(ctx.consts.tribe_x_mult));
            }
        }),

        "half_joker" => independent(|ctx, _, acc| {
            if ctx.played.len() <= ctx.consts.half_joker_max_cards {
                acc.apply("half_joker", RuleEffect::AddMult(ctx.consts.half_joker_mult));
            }
        }),
        "joker_stencil" | "stencil_joker" => independent(|ctx, _, acc| {
            let empty = ctx
                .consts
                .stencil_assumed_slots
                .saturating_sub(ctx.jokers.len());
            if empty > 0 {
                acc.apply("joker_stencil", RuleEffect::MultiplyMult(1.0 + empty as f64));
            }
        }),
        "abstract_joker" => independent(|ctx, _, acc| {
            let mult = ctx.consts.abstract_mult_per_joker * ctx.jokers.len() as f64;
            acc.apply("abstract_joker", RuleEffect::AddMult(mult));
        }),
        "raised_fist" => independent(|ctx, _, acc| {
            let lowest = ctx
                .held
                .iter()
                .map(|card| card.rank.order())
                .fold(None, |best: Option<u8>, value| {
                    Some(best.map_or(value, |current| current.min(value)))
                });
            if let Some(value) = lowest {
                acc.apply("raised_fist", RuleEffect::AddMult(value as f64));
            }
        }),
        "blackboard" => independent(|ctx, _, acc| {
            let all_black = !ctx.held.is_empty()
                && ctx
                    .held
                    .iter()
                    .all(|card| matches!(card.suit, Suit::Spades | Suit::Clubs));
            if all_black {
                acc.apply("blackboard", RuleEffect::MultiplyMult(ctx.consts.blackboard_x_mult));
            }
        }),
        "steel_joker" => independent(|ctx, _, acc| {
            let steel = ctx
                .held
                .iter()
                .filter(|card| card.enhancement == Some(Enhancement::Steel))
                .count();
            if steel > 0 {
                let factor = 1.0 + ctx.consts.steel_joker_x_mult_per_card * steel as f64;
                acc.apply("steel_joker", RuleEffect::MultiplyMult(factor));
            }
        }),
        "swashbuckler" => independent(|ctx, slot, acc| {
            let mut total = 0i64;
            let mut reported = false;
            for (idx, peer) in ctx.jokers.iter().enumerate() {
                if idx == slot {
                    continue;
                }
                if let Some(value) = peer.sell_value {
                    total += value;
                    reported = true;
                }
            }
            let mult = if reported {
                total as f64
            } else {
                ctx.consts.swashbuckler_mult_estimate
            };
            acc.apply("swashbuckler", RuleEffect::AddMult(mult));
        }),

        // Effects whose real trigger depends on context the snapshot cannot
        // carry; each applies its documented estimate.
        "green_joker" => independent(|ctx, _, acc| {
            acc.apply("green_joker", RuleEffect::AddMult(ctx.consts.green_joker_mult_estimate));
        }),
        "blue_joker" => independent(|ctx, _, acc| {
            acc.apply("blue_joker", RuleEffect::AddChips(ctx.consts.blue_joker_chips_estimate));
        }),
        "red_card" => independent(|ctx, _, acc| {
            acc.apply("red_card", RuleEffect::AddMult(ctx.consts.red_card_mult_estimate));
        }),
        "misprint" => independent(|ctx, _, acc| {
            acc.apply("misprint", RuleEffect::AddMult(ctx.consts.misprint_mult_estimate));
        }),
        "banner" => independent(|ctx, _, acc| {
            acc.apply("banner", RuleEffect::AddMult(ctx.consts.banner_mult_estimate));
        }),
        "mystic_summit" => independent(|ctx, _, acc| {
            acc.apply("mystic_summit", RuleEffect::AddMult(ctx.consts.mystic_summit_mult_estimate));
        }),
        "loyalty_card" => independent(|ctx, _, acc| {
            acc.apply("loyalty_card", RuleEffect::MultiplyMult(ctx.consts.loyalty_x_mult_estimate));
        }),
        "ride_the_bus" => independent(|ctx, _, acc| {
            acc.apply("ride_the_bus", RuleEffect::AddMult(ctx.consts.ride_the_bus_mult_estimate));
        }),
        "supernova" => independent(|ctx, _, acc| {
            acc.apply("supernova", RuleEffect::AddMult(ctx.consts.supernova_mult_estimate));
        }),
        "hiker" => independent(|ctx, _, acc| {
            acc.apply("hiker", RuleEffect::AddChips(ctx.consts.hiker_chips_estimate));
        }),

        _ => return None,
    };
    Some(effect)
}

/// Lowercase, space/hyphen-insensitive registry key.
fn effect_key(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '-'], "_")
}
