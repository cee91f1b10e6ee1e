use cardtable_engine::coords::{Rect, Vec2, Viewport};

use crate::card::{Card, CardId};
use crate::config::TableConfig;
use crate::error::TableError;
use crate::geometry::topmost_card_at;

/// Drag state machine.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Holding the card at `index` in [`Table::cards`].
    Dragging { index: usize },
}

/// Cards plus the current drag.
///
/// Cards are dealt once and never added or removed, so an index held in
/// [`DragState::Dragging`] stays valid for the table's lifetime.
#[derive(Debug, Clone)]
pub struct Table {
    cards: Vec<Card>,
    drag: DragState,
}

impl Table {
    /// Lays out one card per palette color along the bottom of `viewport`.
    ///
    /// Cards fan out left to right, each overlapping a third of its
    /// neighbour, and hang off the bottom edge by a third of their height.
    pub fn deal(config: &TableConfig, viewport: Viewport) -> Result<Self, TableError> {
        let colors = config.validate()?;
        if !viewport.is_valid() {
            return Err(TableError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let Vec2 { x: w, y: h } = config.card_size;
        let n = colors.len() as f32;
        let start_x = viewport.width / 2.0 - (n * w) / 2.5 + w / 4.0;
        let y = viewport.height - (h / 3.0) * 2.0;

        let cards = colors
            .into_iter()
            .enumerate()
            .map(|(i, color)| {
                let x = start_x + (i as f32 * w / 3.0) * 2.0;
                Card::new(CardId(i as u32), Rect::new(x, y, w, h), color)
            })
            .collect::<Vec<_>>();

        log::info!(
            "dealt {} cards for a {}x{} viewport",
            cards.len(),
            viewport.width,
            viewport.height
        );

        Ok(Self::from_cards(cards))
    }

    /// Builds a table from an explicit card list (bottom to top).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, drag: DragState::Idle }
    }

    /// Cards in draw order; the last one is on top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// The card being dragged, if any.
    pub fn held(&self) -> Option<&Card> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging { index } => self.cards.get(index),
        }
    }

    /// Picks up the top-most card under `p`.
    ///
    /// A press over empty space leaves the current state as it is.
    pub fn pointer_down(&mut self, p: Vec2) {
        if let Some(index) = topmost_card_at(&self.cards, p) {
            log::debug!("picked up card {} at ({}, {})", self.cards[index].id(), p.x, p.y);
            self.drag = DragState::Dragging { index };
        }
    }

    /// Centers the held card on `p`. No-op while idle.
    pub fn pointer_move(&mut self, p: Vec2) {
        if let DragState::Dragging { index } = self.drag {
            if let Some(card) = self.cards.get_mut(index) {
                card.move_center_to(p);
            }
        }
    }

    /// Drops whatever is held.
    pub fn pointer_up(&mut self) {
        if let Some(card) = self.held() {
            log::debug!("dropped {card}");
        }
        self.drag = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtable_engine::paint::Color;

    fn two_overlapping() -> Table {
        Table::from_cards(vec![
            Card::new(CardId(0), Rect::new(0.0, 0.0, 100.0, 100.0), Color::black()),
            Card::new(CardId(1), Rect::new(50.0, 0.0, 100.0, 100.0), Color::black()),
        ])
    }

    #[test]
    fn deal_uses_the_fan_layout() {
        let table = Table::deal(&TableConfig::default(), Viewport::new(1920.0, 1080.0)).unwrap();
        let cards = table.cards();
        assert_eq!(cards.len(), 8);

        // 960 - 1920/2.5 + 60
        let start = 960.0 - 768.0 + 60.0;
        assert_eq!(cards[0].position(), Vec2::new(start, 1080.0 - 240.0));
        assert_eq!(cards[1].position().x, start + 160.0);
        assert_eq!(cards[7].position().x, start + 7.0 * 160.0);
        assert_eq!(table.drag_state(), DragState::Idle);
    }

    #[test]
    fn deal_rejects_invalid_config() {
        let cfg = TableConfig::default().palette(Vec::<String>::new());
        assert_eq!(
            Table::deal(&cfg, Viewport::new(800.0, 600.0)).unwrap_err(),
            TableError::EmptyPalette
        );
    }

    #[test]
    fn deal_rejects_empty_viewport() {
        let err = Table::deal(&TableConfig::default(), Viewport::new(0.0, 600.0)).unwrap_err();
        assert_eq!(err, TableError::InvalidViewport { width: 0.0, height: 600.0 });
    }

    #[test]
    fn press_holds_the_top_card() {
        let mut t = two_overlapping();
        t.pointer_down(Vec2::new(75.0, 50.0));
        assert_eq!(t.drag_state(), DragState::Dragging { index: 1 });
        assert_eq!(t.held().map(Card::id), Some(CardId(1)));
    }

    #[test]
    fn second_press_on_empty_space_keeps_held_card() {
        let mut t = two_overlapping();
        t.pointer_down(Vec2::new(10.0, 10.0));
        t.pointer_down(Vec2::new(900.0, 900.0));
        assert_eq!(t.drag_state(), DragState::Dragging { index: 0 });
    }

    #[test]
    fn move_while_idle_changes_nothing() {
        let mut t = two_overlapping();
        let before = t.cards().to_vec();
        t.pointer_move(Vec2::new(300.0, 300.0));
        assert_eq!(t.cards(), before.as_slice());
    }

    #[test]
    fn release_clears_drag() {
        let mut t = two_overlapping();
        t.pointer_down(Vec2::new(10.0, 10.0));
        t.pointer_up();
        assert_eq!(t.drag_state(), DragState::Idle);
        assert!(t.held().is_none());
    }
}
