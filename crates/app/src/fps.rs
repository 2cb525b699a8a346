use std::time::Instant;

/// How many interval measurements feed the rolling average.
const HISTORY_LEN: usize = 10;

/// Frame-rate measurement over fixed frame intervals, with a rolling
/// average of the last few measurements and a run summary at the end.
pub struct FpsTracker {
    interval: u64,
    frame_count: u64,
    interval_start: Instant,
    history: Vec<f64>,
    current: f64,
    average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsSample {
    pub frame_count: u64,
    pub current: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsSummary {
    pub frames: u64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl FpsTracker {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frame_count: 0,
            interval_start: Instant::now(),
            history: Vec::new(),
            current: 0.0,
            average: 0.0,
        }
    }

    pub fn tick(&mut self) -> Option<FpsSample> {
        self.tick_at(Instant::now())
    }

    /// Count one frame; yields a sample at the end of each interval.
    pub fn tick_at(&mut self, now: Instant) -> Option<FpsSample> {
        self.frame_count += 1;
        if self.frame_count % self.interval != 0 {
            return None;
        }

        let elapsed = now.duration_since(self.interval_start).as_secs_f64();
        if elapsed <= 0.0 {
            return None;
        }

        self.current = self.interval as f64 / elapsed;
        self.history.push(self.current);
        if self.history.len() > HISTORY_LEN {
            self.history.remove(0);
        }
        self.average = self.history.iter().sum::<f64>() / self.history.len() as f64;
        self.interval_start = now;

        Some(FpsSample {
            frame_count: self.frame_count,
            current: self.current,
            average: self.average,
        })
    }

    /// Final statistics, or `None` if no interval completed.
    pub fn summary(&self) -> Option<FpsSummary> {
        if self.history.is_empty() {
            return None;
        }
        let min = self.history.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.history.iter().copied().fold(0.0f64, f64::max);
        Some(FpsSummary {
            frames: self.frame_count,
            average: self.average,
            min,
            max,
        })
    }
}
