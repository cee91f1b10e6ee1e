use std::time::{Duration, Instant};

/// Fixed-period ticker polled from the event loop.
///
/// The first `poll` arms the ticker; it fires one period later and then once
/// per period. Missed periods are not replayed: after a stall the ticker fires
/// once and re-arms from the current time.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Returns `true` if a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            None => {
                self.next = Some(now + self.period);
                false
            }
            Some(next) if now >= next => {
                let mut following = next + self.period;
                if following <= now {
                    following = now + self.period;
                }
                self.next = Some(following);
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn does_not_fire_on_first_poll() {
        let mut iv = Interval::new(ms(500));
        assert!(!iv.poll(Instant::now()));
    }

    #[test]
    fn fires_once_per_period() {
        let t0 = Instant::now();
        let mut iv = Interval::new(ms(500));
        assert!(!iv.poll(t0));
        assert!(!iv.poll(t0 + ms(499)));
        assert!(iv.poll(t0 + ms(500)));
        assert!(!iv.poll(t0 + ms(700)));
        assert!(iv.poll(t0 + ms(1000)));
    }

    #[test]
    fn stall_fires_once_then_rearms() {
        let t0 = Instant::now();
        let mut iv = Interval::new(ms(500));
        iv.poll(t0);
        assert!(iv.poll(t0 + ms(3000)));
        assert!(!iv.poll(t0 + ms(3100)));
        assert!(iv.poll(t0 + ms(3500)));
    }
}
