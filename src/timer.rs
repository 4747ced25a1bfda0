use std::fmt;
use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Per-second countdown that reports into a context `C`.
///
/// The timer never schedules anything on its own: the owner feeds it
/// elapsed time through [`CountdownTimer::tick`] or
/// [`CountdownTimer::advance`] from the same queue that delivers input, so a
/// stopped timer can never fire again.
pub struct CountdownTimer<C> {
    duration: u32,
    remaining: u32,
    running: bool,
    carry: Duration,
    on_tick: fn(&mut C, u32),
    on_complete: fn(&mut C),
}

impl<C> CountdownTimer<C> {
    pub fn new(duration: u32, on_tick: fn(&mut C, u32), on_complete: fn(&mut C)) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
            carry: Duration::ZERO,
            on_tick,
            on_complete,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.carry = Duration::ZERO;
    }

    /// Cancel pending ticks. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.running = false;
        self.carry = Duration::ZERO;
    }

    /// Stop and rewind to the full duration without restarting.
    pub fn reset(&mut self) {
        self.stop();
        self.remaining = self.duration;
    }

    /// One elapsed second.
    pub fn tick(&mut self, ctx: &mut C) {
        if !self.running {
            return;
        }

        self.remaining = self.remaining.saturating_sub(1);
        (self.on_tick)(ctx, self.remaining);

        if self.remaining == 0 {
            self.stop();
            (self.on_complete)(ctx);
        }
    }

    /// Accumulate wall-clock time and emit one tick per whole second.
    pub fn advance(&mut self, elapsed: Duration, ctx: &mut C) {
        if !self.running {
            return;
        }

        self.carry += elapsed;
        while self.running && self.carry >= ONE_SECOND {
            self.carry -= ONE_SECOND;
            self.tick(ctx);
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl<C> fmt::Debug for CountdownTimer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("duration", &self.duration)
            .field("remaining", &self.remaining)
            .field("running", &self.running)
            .finish()
    }
}

/// `MM:SS`, both fields zero-padded
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        ticks: Vec<u32>,
        completions: usize,
    }

    fn record_tick(r: &mut Recorder, remaining: u32) {
        r.ticks.push(remaining);
    }

    fn record_complete(r: &mut Recorder) {
        r.completions += 1;
    }

    fn timer(duration: u32) -> CountdownTimer<Recorder> {
        CountdownTimer::new(duration, record_tick, record_complete)
    }

    #[test]
    fn test_new_timer_is_idle_and_full() {
        let t = timer(30);
        assert!(!t.is_running());
        assert_eq!(t.remaining(), 30);
        assert_eq!(t.duration(), 30);
    }

    #[test]
    fn test_ticks_count_down_then_complete_once() {
        let mut rec = Recorder::default();
        let mut t = timer(3);
        t.start();

        t.tick(&mut rec);
        t.tick(&mut rec);
        t.tick(&mut rec);
        assert_eq!(rec.ticks, vec![2, 1, 0]);
        assert_eq!(rec.completions, 1);
        assert!(!t.is_running());

        t.tick(&mut rec);
        assert_eq!(rec.ticks, vec![2, 1, 0]);
        assert_eq!(rec.completions, 1);
    }

    #[test]
    fn test_idle_timer_ignores_ticks() {
        let mut rec = Recorder::default();
        let mut t = timer(3);

        t.tick(&mut rec);
        assert!(rec.ticks.is_empty());
        assert_eq!(t.remaining(), 3);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut rec = Recorder::default();
        let mut never_started = timer(5);
        never_started.stop();
        never_started.stop();
        assert!(!never_started.is_running());

        let mut t = timer(5);
        t.start();
        t.tick(&mut rec);
        t.stop();
        t.stop();
        t.tick(&mut rec);
        t.advance(Duration::from_secs(10), &mut rec);

        assert_eq!(rec.ticks, vec![4]);
        assert_eq!(rec.completions, 0);
        assert_eq!(t.remaining(), 4);
    }

    #[test]
    fn test_reset_rewinds_without_restarting() {
        let mut rec = Recorder::default();
        let mut t = timer(5);
        t.start();
        t.tick(&mut rec);
        t.tick(&mut rec);

        t.reset();
        assert_eq!(t.remaining(), 5);
        assert!(!t.is_running());

        t.tick(&mut rec);
        assert_eq!(rec.ticks, vec![4, 3]);
    }

    #[test]
    fn test_advance_accumulates_partial_seconds() {
        let mut rec = Recorder::default();
        let mut t = timer(10);
        t.start();

        for _ in 0..9 {
            t.advance(Duration::from_millis(100), &mut rec);
        }
        assert!(rec.ticks.is_empty());

        t.advance(Duration::from_millis(100), &mut rec);
        assert_eq!(rec.ticks, vec![9]);

        t.advance(Duration::from_millis(2500), &mut rec);
        assert_eq!(rec.ticks, vec![9, 8, 7]);
    }

    #[test]
    fn test_advance_stops_at_completion() {
        let mut rec = Recorder::default();
        let mut t = timer(2);
        t.start();

        t.advance(Duration::from_secs(60), &mut rec);
        assert_eq!(rec.ticks, vec![1, 0]);
        assert_eq!(rec.completions, 1);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(30), "00:30");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(600), "10:00");
    }
}
