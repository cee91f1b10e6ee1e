use cardtable_engine::coords::Viewport;
use cardtable_engine::scene::{draw_rounded_rect, Surface};

use crate::config::TableConfig;
use crate::table::Table;

/// Paints the whole table: background first, then every card in order.
pub fn paint_table<S>(surface: &mut S, table: &Table, viewport: Viewport, config: &TableConfig)
where
    S: Surface + ?Sized,
{
    surface.fill_rect(viewport.rect(), config.background);

    for card in table.cards() {
        let r = card.rect();
        draw_rounded_rect(
            surface,
            r.origin.x,
            r.origin.y,
            r.size.x,
            r.size.y,
            config.corner_radius,
            card.color(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtable_engine::scene::{DrawCmd, DrawList};

    #[test]
    fn background_then_cards_in_order() {
        let config = TableConfig::default();
        let viewport = Viewport::new(1280.0, 720.0);
        let table = Table::deal(&config, viewport).unwrap();

        let mut dl = DrawList::new();
        paint_table(&mut dl, &table, viewport, &config);

        assert_eq!(dl.len(), 1 + table.cards().len());

        let DrawCmd::Rect(bg) = &dl.items()[0] else { panic!("expected background rect") };
        assert_eq!(bg.rect, viewport.rect());
        assert_eq!(bg.color, config.background);

        for (cmd, card) in dl.items()[1..].iter().zip(table.cards()) {
            let DrawCmd::Path(p) = cmd else { panic!("expected a card path") };
            assert_eq!(p.color, card.color());
        }
    }
}
