use std::time::{Duration, Instant};

/// Admits at most one call per `interval`.
///
/// A call is accepted when no call has been accepted yet, or when at least
/// `interval` has passed since the last accepted one. Rejected calls do not
/// move the window; they are simply dropped.
#[derive(Debug, Clone)]
pub struct RateGate {
    interval: Duration,
    last: Option<Instant>,
}

impl RateGate {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    /// Returns `true` and records `now` if a call at `now` is admitted.
    pub fn try_pass(&mut self, now: Instant) -> bool {
        let open = match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if open {
            self.last = Some(now);
        }
        open
    }
}

/// A handler wrapped in a [`RateGate`].
///
/// `F` is the concrete handler type, so the wrapper keeps its signature:
/// a `Throttled<F>` with `F: FnMut(&mut S, E)` is invoked as
/// `call(now, &mut S, E)`. The state is passed in rather than captured, so the
/// handler can mutate state the caller owns.
pub struct Throttled<F> {
    gate: RateGate,
    handler: F,
}

impl<F> Throttled<F> {
    pub fn new(interval: Duration, handler: F) -> Self {
        Self { gate: RateGate::new(interval), handler }
    }

    /// Runs the handler if the gate admits a call at `now`.
    ///
    /// Returns whether the handler ran.
    pub fn call<S: ?Sized, E>(&mut self, now: Instant, state: &mut S, event: E) -> bool
    where
        F: FnMut(&mut S, E),
    {
        if !self.gate.try_pass(now) {
            return false;
        }
        (self.handler)(state, event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_call_always_passes() {
        let mut gate = RateGate::new(ms(16));
        assert!(gate.try_pass(Instant::now()));
    }

    #[test]
    fn drops_calls_inside_the_interval() {
        let t0 = Instant::now();
        let mut gate = RateGate::new(ms(16));
        assert!(gate.try_pass(t0));
        assert!(!gate.try_pass(t0 + ms(5)));
        assert!(!gate.try_pass(t0 + ms(15)));
        assert!(gate.try_pass(t0 + ms(16)));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let t0 = Instant::now();
        let mut gate = RateGate::new(ms(16));
        assert!(gate.try_pass(t0));
        assert!(!gate.try_pass(t0 + ms(10)));
        // Measured from t0, not from the dropped call at +10ms.
        assert!(gate.try_pass(t0 + ms(17)));
    }

    #[test]
    fn throttled_handler_sees_only_admitted_events() {
        let t0 = Instant::now();
        let mut seen: Vec<u32> = Vec::new();
        let mut h = Throttled::new(ms(16), |log: &mut Vec<u32>, v: u32| log.push(v));

        assert!(h.call(t0, &mut seen, 1));
        assert!(!h.call(t0 + ms(8), &mut seen, 2));
        assert!(h.call(t0 + ms(20), &mut seen, 3));

        assert_eq!(seen, vec![1, 3]);
    }
}
