use std::time::Duration;

/// Countdown behind a toast's auto-dismiss and progress bar. Pausing freezes
/// the remaining time; resuming continues from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimer {
    total: Duration,
    remaining: Duration,
    paused: bool,
}

impl ToastTimer {
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
            paused: false,
        }
    }

    /// Returns true once the toast should be dismissed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.paused {
            self.remaining = self.remaining.saturating_sub(elapsed);
        }
        self.is_expired()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Fraction of the countdown still left, from 1.0 down to 0.0.
    pub fn progress(&self) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        self.remaining.as_secs_f64() / self.total.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_SECONDS: Duration = Duration::from_millis(3000);

    #[test]
    fn expires_after_three_seconds() {
        let mut timer = ToastTimer::new(THREE_SECONDS);
        assert!(!timer.advance(Duration::from_millis(2999)));
        assert!(timer.advance(Duration::from_millis(1)));
    }

    #[test]
    fn hover_pauses_without_dismissing() {
        let mut timer = ToastTimer::new(THREE_SECONDS);
        timer.advance(Duration::from_millis(1000));
        timer.pause();
        for _ in 0..100 {
            assert!(!timer.advance(Duration::from_millis(100)));
        }
        assert_eq!(timer.remaining(), Duration::from_millis(2000));
    }

    #[test]
    fn leaving_resumes_the_remaining_countdown() {
        let mut timer = ToastTimer::new(THREE_SECONDS);
        timer.advance(Duration::from_millis(2000));
        timer.pause();
        timer.advance(Duration::from_secs(5));
        timer.resume();

        assert!(!timer.advance(Duration::from_millis(999)));
        assert!(timer.advance(Duration::from_millis(1)));
    }

    #[test]
    fn progress_tracks_remaining_share() {
        let mut timer = ToastTimer::new(THREE_SECONDS);
        assert_eq!(timer.progress(), 1.0);
        timer.advance(Duration::from_millis(1500));
        assert!((timer.progress() - 0.5).abs() < f64::EPSILON);
    }
}
