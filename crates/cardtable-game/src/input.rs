use std::time::{Duration, Instant};

use cardtable_engine::coords::Vec2;
use cardtable_engine::input::{InputEvent, MouseButtonState, PointerButtonEvent};
use cardtable_engine::time::Throttled;

use crate::table::Table;

type MoveHandler = fn(&mut Table, Vec2);

/// Routes engine input events to a [`Table`].
///
/// Presses and releases apply immediately, with any mouse button. A press
/// with no known pointer position is ignored; a release always drops. Pointer
/// moves go through a [`Throttled`] handler: moves arriving sooner than the
/// configured interval after the last accepted one are dropped, whether or
/// not a card is held.
pub struct TableInput {
    on_move: Throttled<MoveHandler>,
}

impl TableInput {
    pub fn new(move_interval: Duration) -> Self {
        Self { on_move: Throttled::new(move_interval, Table::pointer_move as MoveHandler) }
    }

    /// Applies `event` to `table`. Returns whether the table may have changed.
    pub fn handle(&mut self, table: &mut Table, event: &InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::PointerMoved(m) => self.on_move.call(now, table, m.pos()),

            InputEvent::PointerButton(PointerButtonEvent { state, position, .. }) => {
                match (state, position) {
                    (MouseButtonState::Pressed, Some(p)) => table.pointer_down(*p),
                    (MouseButtonState::Pressed, None) => return false,
                    (MouseButtonState::Released, _) => table.pointer_up(),
                }
                true
            }

            InputEvent::PointerLeft | InputEvent::Focused(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtable_engine::coords::Rect;
    use cardtable_engine::input::{MouseButton, PointerMoveEvent};
    use cardtable_engine::paint::Color;

    use crate::card::{Card, CardId};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn table() -> Table {
        Table::from_cards(vec![Card::new(
            CardId(0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Color::black(),
        )])
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            position: Some(Vec2::new(x, y)),
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[test]
    fn any_button_picks_up() {
        let t0 = Instant::now();
        let mut t = table();
        let mut input = TableInput::new(ms(16));
        input.handle(&mut t, &button(MouseButton::Right, MouseButtonState::Pressed, 5.0, 5.0), t0);
        assert!(t.held().is_some());
        input.handle(&mut t, &button(MouseButton::Middle, MouseButtonState::Released, 5.0, 5.0), t0);
        assert!(t.held().is_none());
    }

    #[test]
    fn idle_move_consumes_the_throttle_slot() {
        let t0 = Instant::now();
        let mut t = table();
        let mut input = TableInput::new(ms(16));

        assert!(input.handle(&mut t, &moved(1.0, 1.0), t0));
        input.handle(&mut t, &button(MouseButton::Left, MouseButtonState::Pressed, 5.0, 5.0), t0 + ms(2));

        // Still inside the window opened by the idle move.
        assert!(!input.handle(&mut t, &moved(300.0, 300.0), t0 + ms(10)));
        assert_eq!(t.cards()[0].position(), Vec2::zero());

        assert!(input.handle(&mut t, &moved(300.0, 300.0), t0 + ms(16)));
        assert_eq!(t.cards()[0].center(), Vec2::new(300.0, 300.0));
    }

    #[test]
    fn press_without_known_position_holds_nothing() {
        let t0 = Instant::now();
        // A card covering the origin, where a guessed position would land.
        let mut t = Table::from_cards(vec![Card::new(
            CardId(0),
            Rect::new(-40.0, -40.0, 100.0, 100.0),
            Color::black(),
        )]);
        let mut input = TableInput::new(ms(16));

        let unknown = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            position: None,
        });
        assert!(!input.handle(&mut t, &unknown, t0));
        assert!(t.held().is_none());
    }

    #[test]
    fn release_without_known_position_still_drops() {
        let t0 = Instant::now();
        let mut t = table();
        let mut input = TableInput::new(ms(16));
        input.handle(&mut t, &button(MouseButton::Left, MouseButtonState::Pressed, 5.0, 5.0), t0);

        let released = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            position: None,
        });
        assert!(input.handle(&mut t, &released, t0 + ms(1)));
        assert!(t.held().is_none());
    }

    #[test]
    fn pointer_left_is_ignored() {
        let mut t = table();
        let mut input = TableInput::new(ms(16));
        assert!(!input.handle(&mut t, &InputEvent::PointerLeft, Instant::now()));
    }
}
