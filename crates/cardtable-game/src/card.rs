use std::fmt;

use cardtable_engine::coords::{Rect, Vec2};
use cardtable_engine::paint::Color;

/// Stable card identity, assigned when the table is dealt.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A colored card on the table.
///
/// The size is fixed at creation; only the position can change.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    id: CardId,
    rect: Rect,
    color: Color,
}

impl Card {
    pub fn new(id: CardId, rect: Rect, color: Color) -> Self {
        Self { id, rect, color }
    }

    #[inline]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Top-left corner.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.rect.origin
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.rect.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn set_position(&mut self, origin: Vec2) {
        self.rect = self.rect.with_origin(origin);
    }

    /// Moves the card so that `p` is its center.
    pub fn move_center_to(&mut self, p: Vec2) {
        let size = self.rect.size;
        self.set_position(Vec2::new(p.x - size.x / 2.0, p.y - size.y / 2.0));
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rect { origin, size } = self.rect;
        write!(
            f,
            "card {} at ({}, {}) size {}x{}",
            self.id, origin.x, origin.y, size.x, size.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_displays_as_decimal() {
        assert_eq!(CardId(0).to_string(), "0");
        assert_eq!(CardId(17).to_string(), "17");
    }

    #[test]
    fn move_center_keeps_size() {
        let mut card = Card::new(CardId(3), Rect::new(0.0, 0.0, 240.0, 360.0), Color::black());
        card.move_center_to(Vec2::new(500.0, 400.0));
        assert_eq!(card.position(), Vec2::new(380.0, 220.0));
        assert_eq!(card.center(), Vec2::new(500.0, 400.0));
        assert_eq!(card.size(), Vec2::new(240.0, 360.0));
    }
}
