use serde::{Deserialize, Serialize};

/// Every tunable magnitude the pipeline and the effect registry read.
///
/// Fields named `*_estimate` or `*_expected_*` are closed-form stand-ins for
/// game context the snapshot cannot carry (remaining deck size, round
/// history, probabilistic triggers). They are approximations by design;
/// override them instead of editing handlers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringConstants {
    // Card enhancements.
    pub stone_chips: i64,
    pub bonus_chips: i64,
    pub mult_card_mult: f64,
    pub glass_x_mult: f64,
    /// Expected additive mult of a Lucky card: a 1-in-5 roll for +20 mult
    /// contributes exactly 20/5.
    pub lucky_expected_mult: f64,
    pub steel_held_x_mult: f64,

    // Card and joker editions.
    pub foil_chips: i64,
    pub holographic_mult: f64,
    pub polychrome_x_mult: f64,

    // Per-scoring-card joker effects.
    pub greedy_chips_per_diamond: i64,
    pub lusty_mult_per_heart: f64,
    pub wrathful_mult_per_spade: f64,
    pub gluttonous_mult_per_club: f64,
    pub arrowhead_chips_per_spade: i64,
    pub onyx_agate_mult_per_club: f64,
    /// Expected factor per scoring heart: a 1-in-2 roll for x1.5.
    pub bloodstone_expected_x_mult: f64,
    pub scary_face_chips_per_face: i64,
    pub fibonacci_mult_per_card: f64,
    pub even_steven_mult_per_card: f64,
    pub odd_todd_chips_per_card: i64,
    pub scholar_chips_per_ace: i64,
    pub scholar_mult_per_ace: f64,
    pub walkie_talkie_chips_per_card: i64,
    pub walkie_talkie_mult_per_card: f64,
    pub photograph_x_mult: f64,

    // Hand-contains joker effects.
    pub jolly_mult: f64,
    pub zany_mult: f64,
    pub mad_mult: f64,
    pub crazy_mult: f64,
    pub droll_mult: f64,
    pub sly_chips: i64,
    pub wily_chips: i64,
    pub clever_chips: i64,
    pub devious_chips: i64,
    pub crafty_chips: i64,
    pub duo_x_mult: f64,
    pub trio_x_mult: f64,
    pub family_x_mult: f64,
    pub order_x_mult: f64,
    pub tribe_x_mult: f64,

    // Other independent joker effects.
    pub joker_mult: f64,
    pub half_joker_mult: f64,
    pub half_joker_max_cards: usize,
    pub stencil_assumed_slots: usize,
    pub abstract_mult_per_joker: f64,
    pub blackboard_x_mult: f64,
    pub steel_joker_x_mult_per_card: f64,

    // Estimates for context the snapshot does not carry.
    pub green_joker_mult_estimate: f64,
    pub blue_joker_chips_estimate: i64,
    pub red_card_mult_estimate: f64,
    pub swashbuckler_mult_estimate: f64,
    pub misprint_mult_estimate: f64,
    pub banner_mult_estimate: f64,
    pub mystic_summit_mult_estimate: f64,
    pub loyalty_x_mult_estimate: f64,
    pub ride_the_bus_mult_estimate: f64,
    pub supernova_mult_estimate: f64,
    pub hiker_chips_estimate: i64,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            stone_chips: 50,
            bonus_chips: 30,
            mult_card_mult: 4.0,
            glass_x_mult: 2.0,
            lucky_expected_mult: 4.0,
            steel_held_x_mult: 1.5,

            foil_chips: 50,
            holographic_mult: 10.0,
            polychrome_x_mult: 1.5,

            greedy_chips_per_diamond: 3,
            lusty_mult_per_heart: 3.0,
            wrathful_mult_per_spade: 3.0,
            gluttonous_mult_per_club: 3.0,
            arrowhead_chips_per_spade: 50,
            onyx_agate_mult_per_club: 7.0,
            bloodstone_expected_x_mult: 1.25,
            scary_face_chips_per_face: 30,
            fibonacci_mult_per_card: 8.0,
            even_steven_mult_per_card: 4.0,
            odd_todd_chips_per_card: 31,
            scholar_chips_per_ace: 20,
            scholar_mult_per_ace: 4.0,
            walkie_talkie_chips_per_card: 10,
            walkie_talkie_mult_per_card: 4.0,
            photograph_x_mult: 2.0,

            jolly_mult: 8.0,
            zany_mult: 12.0,
            mad_mult: 10.0,
            crazy_mult: 12.0,
            droll_mult: 10.0,
            sly_chips: 50,
            wily_chips: 100,
            clever_chips: 80,
            devious_chips: 100,
            crafty_chips: 80,
            duo_x_mult: 2.0,
            trio_x_mult: 3.0,
            family_x_mult: 4.0,
            order_x_mult: 3.0,
            tribe_x_mult: 2.0,

            joker_mult: 4.0,
            half_joker_mult: 20.0,
            half_joker_max_cards: 3,
            stencil_assumed_slots: 5,
            abstract_mult_per_joker: 3.0,
            blackboard_x_mult: 3.0,
            steel_joker_x_mult_per_card: 0.2,

            green_joker_mult_estimate: 3.0,
            blue_joker_chips_estimate: 60,
            red_card_mult_estimate: 3.0,
            swashbuckler_mult_estimate: 8.0,
            misprint_mult_estimate: 12.0,
            banner_mult_estimate: 30.0,
            mystic_summit_mult_estimate: 8.0,
            loyalty_x_mult_estimate: 1.2,
            ride_the_bus_mult_estimate: 3.0,
            supernova_mult_estimate: 3.0,
            hiker_chips_estimate: 15,
        }
    }
}
