use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
    /// Sentinel for symbols the snapshot reports but the engine cannot
    /// place. Never completes a flush.
    #[serde(other)]
    Unknown,
}

impl Suit {
    pub fn from_symbol(value: &str) -> Suit {
        match normalize(value).as_str() {
            "spades" | "spade" => Suit::Spades,
            "hearts" | "heart" => Suit::Hearts,
            "clubs" | "club" => Suit::Clubs,
            "diamonds" | "diamond" => Suit::Diamonds,
            _ => Suit::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    #[serde(alias = "2")]
    Two,
    #[serde(alias = "3")]
    Three,
    #[serde(alias = "4")]
    Four,
    #[serde(alias = "5")]
    Five,
    #[serde(alias = "6")]
    Six,
    #[serde(alias = "7")]
    Seven,
    #[serde(alias = "8")]
    Eight,
    #[serde(alias = "9")]
    Nine,
    #[serde(alias = "10")]
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    /// Sentinel for unparseable rank symbols. Scores zero chips and never
    /// extends a straight.
    #[serde(other)]
    Unknown,
}

impl Rank {
    /// Chip value contributed when the card scores.
    pub fn chip_value(self) -> i64 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            Rank::Unknown => 0,
        }
    }

    /// Ordering number used for straights and high-card selection
    /// (2..=14, ace high; the wheel is special-cased by the classifier).
    pub fn order(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::Unknown => 0,
        }
    }

    pub fn from_symbol(value: &str) -> Rank {
        match normalize(value).as_str() {
            "two" | "2" => Rank::Two,
            "three" | "3" => Rank::Three,
            "four" | "4" => Rank::Four,
            "five" | "5" => Rank::Five,
            "six" | "6" => Rank::Six,
            "seven" | "7" => Rank::Seven,
            "eight" | "8" => Rank::Eight,
            "nine" | "9" => Rank::Nine,
            "ten" | "10" | "t" => Rank::Ten,
            "jack" | "j" => Rank::Jack,
            "queen" | "q" => Rank::Queen,
            "king" | "k" => Rank::King,
            "ace" | "a" => Rank::Ace,
            _ => Rank::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Enhancement {
    #[serde(alias = "Bonus Card")]
    Bonus,
    #[serde(alias = "Mult Card")]
    Mult,
    #[serde(alias = "Wild Card")]
    Wild,
    #[serde(alias = "Glass Card")]
    Glass,
    #[serde(alias = "Steel Card")]
    Steel,
    #[serde(alias = "Stone Card")]
    Stone,
    #[serde(alias = "Lucky Card")]
    Lucky,
    #[serde(alias = "Gold Card")]
    Gold,
}

impl Enhancement {
    /// Snapshots spell "no enhancement" several ways; all of them, and any
    /// unrecognized symbol, canonicalize to `None`.
    pub fn from_symbol(value: &str) -> Option<Enhancement> {
        match normalize(value).trim_end_matches(" card").trim() {
            "bonus" => Some(Enhancement::Bonus),
            "mult" => Some(Enhancement::Mult),
            "wild" => Some(Enhancement::Wild),
            "glass" => Some(Enhancement::Glass),
            "steel" => Some(Enhancement::Steel),
            "stone" => Some(Enhancement::Stone),
            "lucky" => Some(Enhancement::Lucky),
            "gold" => Some(Enhancement::Gold),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Edition {
    Foil,
    Holographic,
    Polychrome,
    Negative,
}

impl Edition {
    pub fn from_symbol(value: &str) -> Option<Edition> {
        match normalize(value).as_str() {
            "foil" => Some(Edition::Foil),
            "holographic" | "holo" => Some(Edition::Holographic),
            "polychrome" => Some(Edition::Polychrome),
            "negative" => Some(Edition::Negative),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seal {
    #[serde(alias = "Red Seal")]
    Red,
    #[serde(alias = "Blue Seal")]
    Blue,
    #[serde(alias = "Gold Seal")]
    Gold,
    #[serde(alias = "Purple Seal")]
    Purple,
}

impl Seal {
    pub fn from_symbol(value: &str) -> Option<Seal> {
        match normalize(value).trim_end_matches(" seal").trim() {
            "red" => Some(Seal::Red),
            "blue" => Some(Seal::Blue),
            "gold" => Some(Seal::Gold),
            "purple" => Some(Seal::Purple),
            _ => None,
        }
    }
}

/// A playing card as reported by one decision-cycle snapshot. Immutable for
/// the duration of the cycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    #[serde(default)]
    pub enhancement: Option<Enhancement>,
    #[serde(default)]
    pub edition: Option<Edition>,
    #[serde(default)]
    pub seal: Option<Seal>,
    /// Stable position in the hand the snapshot reported the card at.
    #[serde(default)]
    pub index: usize,
}

impl Card {
    pub fn standard(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            enhancement: None,
            edition: None,
            seal: None,
            index: 0,
        }
    }

    /// Build a card from raw snapshot symbols. Total: unknown symbols fall
    /// back to the sentinels / `None` instead of failing.
    pub fn from_symbols(
        rank: &str,
        suit: &str,
        enhancement: &str,
        edition: &str,
        seal: &str,
        index: usize,
    ) -> Self {
        Self {
            rank: Rank::from_symbol(rank),
            suit: Suit::from_symbol(suit),
            enhancement: Enhancement::from_symbol(enhancement),
            edition: Edition::from_symbol(edition),
            seal: Seal::from_symbol(seal),
            index,
        }
    }

    pub fn is_stone(&self) -> bool {
        matches!(self.enhancement, Some(Enhancement::Stone))
    }

    pub fn is_face(&self) -> bool {
        matches!(self.rank, Rank::Jack | Rank::Queen | Rank::King)
    }
}

/// An equipped modifier card. Its slot position is its index in the equipped
/// slice and is semantically significant; the engine never reorders it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Joker {
    pub name: String,
    #[serde(default)]
    pub edition: Option<Edition>,
    #[serde(default)]
    pub sell_value: Option<i64>,
}

impl Joker {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edition: None,
            sell_value: None,
        }
    }

    pub fn with_edition(name: impl Into<String>, edition: Edition) -> Self {
        Self {
            name: name.into(),
            edition: Some(edition),
            sell_value: None,
        }
    }
}

pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
