use std::time::Instant;

/// Frame timing snapshot
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick
    pub dt: f32,

    /// Monotonic timestamp taken at the tick
    pub now: Instant,

    /// Monotonic frame counter
    pub frame_index: u64,
}

/// Monotonic frame clock
///
/// `dt` is the plain difference between consecutive ticks; it is not
/// clamped, so a stall shows up as one long step.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            frame_index: 0,
        }
    }

    /// Resets the baseline, e.g. once the window is up and the first frame
    /// is about to run
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock to now
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames counted over one reporting window
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FpsReport {
    pub frames: u32,
}

/// Counts frames and reports once per elapsed second
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    elapsed: f32,
    frames: u32,
}

impl FpsCounter {
    const WINDOW: f32 = 1.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that took `dt` seconds
    ///
    /// Returns a report when a full second has accumulated. The overshoot
    /// carries into the next window.
    pub fn record(&mut self, dt: f32) -> Option<FpsReport> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < Self::WINDOW {
            return None;
        }

        let report = FpsReport {
            frames: self.frames,
        };
        self.frames = 0;
        self.elapsed -= Self::WINDOW;
        // A long stall produces one report, not a burst of near-empty ones
        if self.elapsed >= Self::WINDOW {
            self.elapsed = 0.0;
        }
        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_clock_dt_is_difference() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let ft = clock.tick_at(start + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 0);

        let ft = clock.tick_at(start + Duration::from_millis(66));
        assert!((ft.dt - 0.05).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn test_clock_long_stall_not_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let ft = clock.tick_at(start + Duration::from_secs(3));
        assert!((ft.dt - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_fps_reports_once_per_second() {
        let mut fps = FpsCounter::new();
        let mut reports = Vec::new();
        // 60 frames of 1/50 s: 1.2 s total
        for _ in 0..60 {
            if let Some(r) = fps.record(0.02) {
                reports.push(r);
            }
        }
        assert_eq!(reports.len(), 1);
        assert!((49..=51).contains(&reports[0].frames));
    }

    #[test]
    fn test_fps_stall_reports_single_frame() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.record(5.0), Some(FpsReport { frames: 1 }));
        assert_eq!(fps.record(0.01), None);
        assert_eq!(fps.record(0.995), Some(FpsReport { frames: 2 }));
    }
}
