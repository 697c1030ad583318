use simlatro_core::{classify, hand_contains, Card, HandKind, Rank, Suit};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::standard(rank, suit)
}

#[test]
fn empty_input_is_high_card_with_no_scoring_cards() {
    let (kind, scoring) = classify(&[]);
    assert_eq!(kind, HandKind::HighCard);
    assert!(scoring.is_empty());
}

#[test]
fn high_card_scores_only_the_highest_card() {
    let cards = [
        card(Rank::Nine, Suit::Spades),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::HighCard);
    assert_eq!(scoring, vec![2]);
}

#[test]
fn pair_scores_the_two_matching_cards() {
    let cards = [
        card(Rank::Seven, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::Pair);
    assert_eq!(scoring, vec![0, 2]);
}

#[test]
fn two_pair_scores_all_four_cards() {
    let cards = [
        card(Rank::Jack, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Nine, Suit::Hearts),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::TwoPair);
    assert_eq!(scoring, vec![0, 1, 2, 3]);
}

#[test]
fn mixed_suit_consecutive_ranks_classify_as_straight() {
    let cards = [
        card(Rank::Five, Suit::Spades),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Eight, Suit::Diamonds),
        card(Rank::Nine, Suit::Spades),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::Straight);
    assert_eq!(scoring, vec![0, 1, 2, 3, 4]);
}

#[test]
fn wheel_counts_as_a_straight_regardless_of_suits() {
    let cards = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Spades),
    ];
    let (kind, _) = classify(&cards);
    assert_eq!(kind, HandKind::Straight);
}

#[test]
fn suited_run_is_a_straight_flush() {
    let cards = [
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::King, Suit::Hearts),
        card(Rank::Ace, Suit::Hearts),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::StraightFlush);
    assert_eq!(scoring, vec![0, 1, 2, 3, 4]);
}

#[test]
fn quads_take_the_first_remaining_card_as_kicker() {
    let cards = [
        card(Rank::King, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
        card(Rank::King, Suit::Clubs),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::Quads);
    assert_eq!(scoring, vec![0, 1, 2, 3, 4]);
}

#[test]
fn quads_without_kicker_score_four_cards() {
    let cards = [
        card(Rank::Nine, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::Quads);
    assert_eq!(scoring, vec![0, 1, 2, 3]);
}

#[test]
fn full_house_and_its_flush_variant() {
    let plain = [
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Four, Suit::Spades),
    ];
    assert_eq!(classify(&plain).0, HandKind::FullHouse);

    let suited = [
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Spades),
        card(Rank::Four, Suit::Spades),
        card(Rank::Four, Suit::Spades),
    ];
    assert_eq!(classify(&suited).0, HandKind::FlushHouse);
}

#[test]
fn five_of_a_kind_and_flush_five() {
    let mixed = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Ace, Suit::Spades),
    ];
    assert_eq!(classify(&mixed).0, HandKind::FiveOfAKind);

    let suited = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Hearts),
    ];
    assert_eq!(classify(&suited).0, HandKind::FlushFive);
}

#[test]
fn flush_beats_trips_in_the_cascade_only_when_suited() {
    let cards = [
        card(Rank::Two, Suit::Clubs),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::Flush);
    assert_eq!(scoring.len(), 5);
}

#[test]
fn three_of_a_kind_scores_only_the_trips() {
    let cards = [
        Card::standard(Rank::Ten, Suit::Hearts),
        Card::standard(Rank::Ten, Suit::Diamonds),
        Card::standard(Rank::Ten, Suit::Spades),
        Card::standard(Rank::Two, Suit::Clubs),
        Card::standard(Rank::Three, Suit::Diamonds),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::Trips);
    assert_eq!(scoring, vec![0, 1, 2]);
}

#[test]
fn unknown_suits_never_complete_a_flush() {
    assert_eq!(Suit::from_symbol("???"), Suit::Unknown);
    let cards = [
        card(Rank::Two, Suit::Unknown),
        card(Rank::Five, Suit::Unknown),
        card(Rank::Nine, Suit::Unknown),
        card(Rank::Jack, Suit::Unknown),
        card(Rank::King, Suit::Unknown),
    ];
    let (kind, scoring) = classify(&cards);
    assert_eq!(kind, HandKind::HighCard);
    assert_eq!(scoring, vec![4]);
}

#[test]
fn unknown_ranks_score_zero_and_never_extend_a_straight() {
    assert_eq!(Rank::from_symbol("nonsense"), Rank::Unknown);
    assert_eq!(Rank::Unknown.chip_value(), 0);
    let cards = [
        card(Rank::Unknown, Suit::Spades),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Spades),
    ];
    let (kind, _) = classify(&cards);
    assert_ne!(kind, HandKind::Straight);
}

#[test]
fn containment_follows_the_static_table() {
    assert!(hand_contains(HandKind::TwoPair, HandKind::Pair));
    assert!(hand_contains(HandKind::FullHouse, HandKind::Pair));
    assert!(hand_contains(HandKind::FullHouse, HandKind::TwoPair));
    assert!(hand_contains(HandKind::Quads, HandKind::Trips));
    assert!(hand_contains(HandKind::FiveOfAKind, HandKind::Pair));
    assert!(hand_contains(HandKind::StraightFlush, HandKind::Straight));
    assert!(hand_contains(HandKind::StraightFlush, HandKind::Flush));
    assert!(hand_contains(HandKind::FlushHouse, HandKind::FullHouse));
    assert!(hand_contains(HandKind::FlushFive, HandKind::Quads));
    assert!(hand_contains(HandKind::Straight, HandKind::HighCard));

    assert!(!hand_contains(HandKind::Trips, HandKind::Pair));
    assert!(!hand_contains(HandKind::Flush, HandKind::Straight));
    assert!(!hand_contains(HandKind::TwoPair, HandKind::Trips));
    assert!(!hand_contains(HandKind::Straight, HandKind::StraightFlush));
}
