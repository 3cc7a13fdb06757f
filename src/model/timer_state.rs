use std::time::{Duration, Instant};

/// Monotonic game timer, immune to wall-clock adjustments.
#[derive(Clone, Copy, Debug)]
pub struct TimerState {
    pub started: Instant,
    pub ended: Option<Instant>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::started_at(Instant::now())
    }
}

impl TimerState {
    pub fn started_at(now: Instant) -> Self {
        Self {
            started: now,
            ended: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        let until = self.ended.unwrap_or_else(Instant::now);
        until.saturating_duration_since(self.started)
    }

    pub fn ended(&self, now: Instant) -> TimerState {
        let mut new_state = *self;
        new_state.ended = Some(now);
        new_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_with_end() {
        let now = Instant::now();
        let timer = TimerState::started_at(now).ended(now + Duration::from_secs(10));

        assert_eq!(timer.elapsed(), Duration::from_secs(10));
    }

    #[test]
    fn test_elapsed_running() {
        let timer = TimerState::default();
        std::thread::sleep(Duration::from_millis(5));

        assert!(timer.ended.is_none());
        assert!(timer.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_end_before_start_saturates() {
        let now = Instant::now();
        let timer = TimerState {
            started: now + Duration::from_secs(1),
            ended: Some(now),
        };

        assert_eq!(timer.elapsed(), Duration::ZERO);
    }
}
