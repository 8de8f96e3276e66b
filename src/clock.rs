//! Fixed-interval tick scheduling.
//!
//! `Ticker` plays the role of a repeating timer: started when a run begins,
//! stopped when it ends. Time comes from a `Clock` so tests can drive it by hand.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Monotonic time since an arbitrary origin.
    fn now(&self) -> Duration;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Option<Duration>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.next.is_some()
    }

    /// (Re)arm the timer; the first tick fires one interval from now.
    pub fn start(&mut self, clock: &impl Clock) {
        self.next = Some(clock.now() + self.interval);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    /// Start or stop so the timer is active exactly when `running` is.
    pub fn sync(&mut self, running: bool, clock: &impl Clock) {
        match (running, self.is_active()) {
            (true, false) => self.start(clock),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    /// Time left before the next tick, or `None` when stopped.
    pub fn until_next(&self, clock: &impl Clock) -> Option<Duration> {
        self.next.map(|next| next.saturating_sub(clock.now()))
    }

    /// Consume one due tick. Late ticks are not replayed: a stalled loop
    /// resumes one interval after the tick it finally runs.
    pub fn poll(&mut self, clock: &impl Clock) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        let now = clock.now();
        if now < next {
            return false;
        }
        let mut following = next + self.interval;
        if following <= now {
            following = now + self.interval;
        }
        self.next = Some(following);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS16: Duration = Duration::from_millis(16);

    #[test]
    fn stopped_ticker_never_fires() {
        let mut clock = ManualClock::default();
        let mut t = Ticker::new(MS16);
        clock.advance(Duration::from_secs(1));
        assert!(!t.poll(&clock));
        assert_eq!(t.until_next(&clock), None);
    }

    #[test]
    fn fires_once_per_interval() {
        let mut clock = ManualClock::default();
        let mut t = Ticker::new(MS16);
        t.start(&clock);
        clock.advance(Duration::from_millis(15));
        assert!(!t.poll(&clock));
        assert_eq!(t.until_next(&clock), Some(Duration::from_millis(1)));
        clock.advance(Duration::from_millis(1));
        assert!(t.poll(&clock));
        assert!(!t.poll(&clock));
        clock.advance(MS16);
        assert!(t.poll(&clock));
    }

    #[test]
    fn stall_does_not_burst() {
        let mut clock = ManualClock::default();
        let mut t = Ticker::new(MS16);
        t.start(&clock);
        clock.advance(Duration::from_millis(100));
        assert!(t.poll(&clock));
        assert!(!t.poll(&clock));
    }

    #[test]
    fn sync_follows_running_flag() {
        let clock = ManualClock::default();
        let mut t = Ticker::new(MS16);
        t.sync(true, &clock);
        assert!(t.is_active());
        t.sync(false, &clock);
        assert!(!t.is_active());
    }
}
