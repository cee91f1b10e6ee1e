//! Point-in-card tests.

use cardtable_engine::coords::Vec2;

use crate::card::Card;

/// Inclusive range test: `min <= value <= max`.
///
/// Expects `min <= max`; an inverted range never matches.
#[inline]
pub fn is_between(min: f32, max: f32, value: f32) -> bool {
    min <= value && value <= max
}

/// True if `p` lies inside the card or on its edge.
pub fn card_contains_point(card: &Card, p: Vec2) -> bool {
    let r = card.rect();
    is_between(r.origin.x, r.origin.x + r.size.x, p.x)
        && is_between(r.origin.y, r.origin.y + r.size.y, p.y)
}

/// Index of the top-most card under `p`.
///
/// Later cards are drawn on top, so the scan runs from the back.
pub fn topmost_card_at(cards: &[Card], p: Vec2) -> Option<usize> {
    cards.iter().rposition(|card| card_contains_point(card, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardId;
    use cardtable_engine::coords::Rect;
    use cardtable_engine::paint::Color;

    fn card(id: u32, x: f32, y: f32) -> Card {
        Card::new(CardId(id), Rect::new(x, y, 100.0, 150.0), Color::black())
    }

    #[test]
    fn is_between_is_inclusive() {
        assert!(is_between(0.0, 10.0, 0.0));
        assert!(is_between(0.0, 10.0, 10.0));
        assert!(is_between(0.0, 10.0, 5.0));
        assert!(!is_between(0.0, 10.0, -0.01));
        assert!(!is_between(0.0, 10.0, 10.01));
    }

    #[test]
    fn edges_and_corners_are_hits() {
        let c = card(0, 10.0, 20.0);
        assert!(card_contains_point(&c, Vec2::new(10.0, 20.0)));
        assert!(card_contains_point(&c, Vec2::new(110.0, 170.0)));
        assert!(card_contains_point(&c, Vec2::new(60.0, 20.0)));
        assert!(!card_contains_point(&c, Vec2::new(110.5, 100.0)));
        assert!(!card_contains_point(&c, Vec2::new(60.0, 19.5)));
    }

    #[test]
    fn later_card_wins_in_overlap() {
        let cards = [card(0, 0.0, 0.0), card(1, 50.0, 0.0)];
        assert_eq!(topmost_card_at(&cards, Vec2::new(75.0, 10.0)), Some(1));
        assert_eq!(topmost_card_at(&cards, Vec2::new(25.0, 10.0)), Some(0));
        assert_eq!(topmost_card_at(&cards, Vec2::new(500.0, 10.0)), None);
    }

    #[test]
    fn empty_table_has_no_hit() {
        assert_eq!(topmost_card_at(&[], Vec2::zero()), None);
    }
}
