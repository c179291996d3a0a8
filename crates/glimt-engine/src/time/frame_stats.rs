use std::time::{Duration, Instant};

const WINDOW: usize = 10;

/// Rolling frame-time statistics.
///
/// Keeps the durations of the last ten frames and reports their average
/// as a frames-per-second figure. Frame rate is measured, never
/// controlled; pacing is left to the swap interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    last: Instant,
    samples: [Duration; WINDOW],
    filled: usize,
    index: usize,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            samples: [Duration::ZERO; WINDOW],
            filled: 0,
            index: 0,
        }
    }

    /// Marks a frame boundary, recording the time since the previous
    /// tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.record(now.saturating_duration_since(self.last));
        self.last = now;
    }

    fn record(&mut self, frame_time: Duration) {
        self.samples[self.index] = frame_time;
        self.index = (self.index + 1) % WINDOW;
        if self.filled < WINDOW {
            self.filled += 1;
        }
    }

    /// Average frames per second over the current window, or `None`
    /// before the first recorded frame.
    pub fn fps(&self) -> Option<u32> {
        if self.filled == 0 {
            return None;
        }
        let total: Duration = self.samples[..self.filled].iter().sum();
        if total.is_zero() {
            return None;
        }
        Some((self.filled as f64 / total.as_secs_f64()).round() as u32)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_has_no_fps() {
        assert_eq!(FrameStats::new().fps(), None);
    }

    #[test]
    fn averages_over_recorded_frames() {
        let mut stats = FrameStats::new();
        for _ in 0..4 {
            stats.record(Duration::from_millis(20));
        }
        assert_eq!(stats.fps(), Some(50));
    }

    #[test]
    fn window_keeps_only_the_last_ten_frames() {
        let mut stats = FrameStats::new();
        // Ten slow frames, then ten fast ones; the slow frames must
        // have been evicted.
        for _ in 0..10 {
            stats.record(Duration::from_millis(100));
        }
        for _ in 0..10 {
            stats.record(Duration::from_millis(10));
        }
        assert_eq!(stats.fps(), Some(100));
    }
}
