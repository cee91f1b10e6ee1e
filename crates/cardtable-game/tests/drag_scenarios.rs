use std::collections::HashSet;
use std::time::{Duration, Instant};

use cardtable_engine::input::{
    InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use cardtable_engine::scene::{DrawCmd, DrawList};
use cardtable_game::prelude::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn default_table() -> Table {
    Table::deal(&TableConfig::default(), Viewport::new(1920.0, 1080.0)).unwrap()
}

fn press(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerButton(PointerButtonEvent {
        button: MouseButton::Left,
        state: MouseButtonState::Pressed,
        position: Some(Vec2::new(x, y)),
    })
}

fn release(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerButton(PointerButtonEvent {
        button: MouseButton::Left,
        state: MouseButtonState::Released,
        position: Some(Vec2::new(x, y)),
    })
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMoved(PointerMoveEvent { x, y })
}

fn positions(table: &Table) -> Vec<Vec2> {
    table.cards().iter().map(Card::position).collect()
}

#[test]
fn deals_eight_distinct_cards() {
    let table = default_table();
    let cards = table.cards();

    let ids: Vec<String> = cards.iter().map(|c| c.id().to_string()).collect();
    assert_eq!(ids, ["0", "1", "2", "3", "4", "5", "6", "7"]);

    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            assert_ne!(a.color(), b.color(), "cards {} and {}", a.id(), b.id());
            assert_ne!(a.position(), b.position(), "cards {} and {}", a.id(), b.id());
        }
    }

    let sizes: HashSet<(u32, u32)> =
        cards.iter().map(|c| (c.size().x as u32, c.size().y as u32)).collect();
    assert_eq!(sizes.len(), 1);
}

#[test]
fn overlap_resolves_to_the_later_card() {
    let table = default_table();
    let cards = table.cards();

    // Card 1 starts two thirds of a width after card 0, so they share a strip.
    let a = cards[0].rect();
    let b = cards[1].rect();
    let overlap = Vec2::new((b.origin.x + a.origin.x + a.size.x) / 2.0, a.origin.y + 10.0);
    assert!(card_contains_point(&cards[0], overlap));
    assert!(card_contains_point(&cards[1], overlap));
    assert_eq!(topmost_card_at(cards, overlap), Some(1));
}

#[test]
fn dragged_card_follows_the_pointer_and_others_stay_put() {
    let t0 = Instant::now();
    let mut table = default_table();
    let mut input = TableInput::new(ms(16));
    let before = positions(&table);

    let grab = table.cards()[3].center();
    input.handle(&mut table, &press(grab.x, grab.y), t0);
    assert_eq!(table.drag_state(), DragState::Dragging { index: 3 });

    let target = Vec2::new(400.0, 300.0);
    assert!(input.handle(&mut table, &moved(target.x, target.y), t0 + ms(20)));

    assert_eq!(table.cards()[3].center(), target);
    let after = positions(&table);
    for (i, (b, a)) in before.iter().zip(&after).enumerate() {
        if i != 3 {
            assert_eq!(a, b, "card {i} moved");
        }
    }
}

#[test]
fn moves_after_release_change_nothing() {
    let t0 = Instant::now();
    let mut table = default_table();
    let mut input = TableInput::new(ms(16));

    let grab = table.cards()[7].center();
    input.handle(&mut table, &press(grab.x, grab.y), t0);
    input.handle(&mut table, &moved(500.0, 500.0), t0 + ms(20));
    input.handle(&mut table, &release(500.0, 500.0), t0 + ms(30));
    assert!(table.held().is_none());

    let settled = positions(&table);
    input.handle(&mut table, &moved(900.0, 100.0), t0 + ms(60));
    input.handle(&mut table, &moved(100.0, 900.0), t0 + ms(90));
    assert_eq!(positions(&table), settled);
}

#[test]
fn moves_inside_the_interval_are_dropped() {
    let t0 = Instant::now();
    let mut table = default_table();
    let mut input = TableInput::new(ms(16));

    let grab = table.cards()[0].center();
    input.handle(&mut table, &press(grab.x, grab.y), t0);

    assert!(input.handle(&mut table, &moved(300.0, 300.0), t0 + ms(1)));
    assert!(!input.handle(&mut table, &moved(600.0, 600.0), t0 + ms(6)));
    assert_eq!(table.cards()[0].center(), Vec2::new(300.0, 300.0));
}

#[test]
fn pressing_empty_space_holds_nothing() {
    let t0 = Instant::now();
    let mut table = default_table();
    let mut input = TableInput::new(ms(16));
    let before = positions(&table);

    input.handle(&mut table, &press(5.0, 5.0), t0);
    assert_eq!(table.drag_state(), DragState::Idle);

    input.handle(&mut table, &moved(700.0, 700.0), t0 + ms(20));
    assert_eq!(positions(&table), before);
}

#[test]
fn pressing_exactly_on_an_edge_picks_the_card() {
    let t0 = Instant::now();
    let mut table = default_table();
    let mut input = TableInput::new(ms(16));

    // The last card's right edge is not covered by any other card.
    let r = table.cards()[7].rect();
    input.handle(&mut table, &press(r.origin.x + r.size.x, r.origin.y + 50.0), t0);
    assert_eq!(table.held().map(Card::id), Some(CardId(7)));
}

#[test]
fn painted_frame_tracks_card_order() {
    let config = TableConfig::default();
    let viewport = Viewport::new(1920.0, 1080.0);
    let mut table = Table::deal(&config, viewport).unwrap();

    let grab = table.cards()[2].center();
    table.pointer_down(grab);
    table.pointer_move(Vec2::new(50.0, 50.0));
    table.pointer_up();

    let mut dl = DrawList::new();
    paint_table(&mut dl, &table, viewport, &config);
    assert_eq!(dl.len(), 9);

    // Background first, then cards in deal order: card 2 keeps its slot.
    let DrawCmd::Path(cmd) = &dl.items()[3] else { panic!("expected card 2's path") };
    assert_eq!(cmd.color, table.cards()[2].color());

    let Vec2 { x: w, y: h } = config.card_size;
    let start = cmd.path.subpaths()[0].points[0];
    assert_eq!(start, Vec2::new(50.0 - w / 2.0 + config.corner_radius, 50.0 - h / 2.0));
}
