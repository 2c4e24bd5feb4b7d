use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::errors::GameError;

#[test]
fn names_match_source_table() {
    let cases = [
        (0, "Spade A"),
        (4, "Spade 5"),
        (9, "Spade 10"),
        (10, "Spade J"),
        (11, "Spade Q"),
        (12, "Spade K"),
        (13, "Club A"),
        (26, "Heart A"),
        (39, "Diamond A"),
        (52, "Spade A"),
        (65, "Club A"),
        (78, "Heart A"),
        (91, "Diamond A"),
    ];
    for (id, name) in cases {
        let card = Card::new(id);
        assert_eq!(card.id, id);
        assert_eq!(card.name(), name, "id {}", id);
        assert_eq!(card.to_string(), name);
    }
}

#[test]
fn point_values_by_rank() {
    assert_eq!(Card::new(0).points(), &[1, 11]);
    assert_eq!(Card::new(4).points(), &[5]);
    assert_eq!(Card::new(9).points(), &[10]);
    for face in [10, 11, 12] {
        assert_eq!(Card::new(face).points(), &[10]);
    }
    for ace in [13, 26, 39] {
        assert_eq!(Card::new(ace).points(), &[1, 11]);
    }
}

#[test]
fn derivation_depends_only_on_id_mod_13_and_div_13() {
    for id in 0..(52 * 6) {
        let card = Card::new(id);
        let same_rank = Card::new(id % 13);
        assert_eq!(card.rank, same_rank.rank);
        assert_eq!(card.points(), same_rank.points());
        let same_suit = Card::new(((id / 13) % 4) * 13);
        assert_eq!(card.suit, same_suit.suit);
        assert_eq!(card, Card::new(id));
    }
}

#[test]
fn invalid_ids_are_rejected() {
    for id in [-1i64, -100] {
        assert_eq!(Card::try_from(id), Err(GameError::InvalidCardId(id)));
    }
    let too_big = i64::from(u32::MAX) + 1;
    assert!(Card::try_from(too_big).is_err());
    let card = Card::try_from(38i64).expect("valid id");
    assert_eq!((card.suit, card.rank), (Suit::Heart, Rank::King));
}
