use blackjack_engine::hand::Hand;
use blackjack_engine::rules::HandStatus;

fn hand_of(ids: &[u32]) -> Hand {
    let mut h = Hand::new("You");
    for &id in ids {
        h.draw(id);
    }
    h
}

#[test]
fn empty_hand_totals_zero() {
    let h = Hand::new("You");
    assert_eq!(h.total_values(), vec![0]);
    assert_eq!(h.status(), HandStatus::Open);
    assert!(h.card_names().is_empty());
}

#[test]
fn draw_keeps_order_of_cards() {
    let h = hand_of(&[0, 4]);
    assert_eq!(h.card_names(), vec!["Spade A", "Spade 5"]);
    let ids: Vec<u32> = h.cards().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![0, 4]);
}

#[test]
fn single_ace_is_soft() {
    assert_eq!(hand_of(&[0]).total_values(), vec![1, 11]);
}

#[test]
fn two_aces_give_three_totals() {
    assert_eq!(hand_of(&[0, 13]).total_values(), vec![2, 12, 22]);
}

#[test]
fn two_aces_and_jack_do_not_collapse() {
    let h = hand_of(&[0, 13, 10]);
    assert_eq!(h.total_values(), vec![12, 22, 32]);
    assert_eq!(h.best_total(), 32);
    assert_eq!(h.status(), HandStatus::Open);
}

#[test]
fn ace_jack_is_blackjack() {
    let h = hand_of(&[0, 10]);
    assert_eq!(h.total_values(), vec![11, 21]);
    assert_eq!(h.status(), HandStatus::Blackjack);
}

#[test]
fn three_faces_bust() {
    let h = hand_of(&[10, 11, 12]);
    assert_eq!(h.total_values(), vec![30]);
    assert_eq!(h.status(), HandStatus::Bust);
}

#[test]
fn bust_with_aces_collapses_to_smallest() {
    let h = hand_of(&[0, 13, 10, 11]);
    assert_eq!(h.total_values(), vec![22]);
    assert_eq!(h.status(), HandStatus::Bust);
}

#[test]
fn many_aces_stay_small() {
    let ids: Vec<u32> = (0..8).map(|d| d * 13).collect();
    let h = hand_of(&ids);
    // 8 aces: 8, 18, 28, ... 88
    assert_eq!(h.total_values().len(), 9);
    assert_eq!(h.total_values()[0], 8);
}

#[test]
fn reset_returns_to_fresh_state() {
    let mut h = hand_of(&[0, 1, 2]);
    assert_ne!(h.total_values(), vec![0]);
    h.reset();
    assert!(h.cards().is_empty());
    assert_eq!(h.total_values(), vec![0]);
    assert_eq!(h.status(), HandStatus::Open);
    assert_eq!(h.name(), "You");
}

#[test]
fn views_expose_or_hide_scoring() {
    let h = hand_of(&[0, 10]);
    let open = h.view();
    assert_eq!(open.cards, vec!["Spade A", "Spade J"]);
    assert_eq!(open.totals, Some(vec![11, 21]));
    assert_eq!(open.status, Some(HandStatus::Blackjack));
    assert_eq!(open.best_total(), Some(21));

    let hidden = h.view_hiding_hole();
    assert_eq!(hidden.cards, vec!["Spade A"]);
    assert_eq!(hidden.hidden_cards, 1);
    assert_eq!(hidden.totals, None);
    assert_eq!(hidden.status, None);
}
