//! Wall-clock pacing: survival time, difficulty steps, dialog rotation
//!
//! Frame-driven motion ignores wall time; only these gauges read it. All of
//! them run on "active" time, i.e. wall time since the run started minus time
//! spent paused, so pausing never advances difficulty or dialog.

/// Active-time bookkeeping for one run (timestamps in milliseconds)
#[derive(Debug, Clone)]
pub struct Pacing {
    started_ms: f64,
    paused_total_ms: f64,
    pause_started_ms: Option<f64>,
    difficulty_mark_ms: f64,
    dialog_mark_ms: f64,
    difficulty_interval_ms: f64,
    dialog_interval_ms: f64,
}

impl Pacing {
    pub fn new(now_ms: f64, difficulty_interval_ms: f64, dialog_interval_ms: f64) -> Self {
        Self {
            started_ms: now_ms,
            paused_total_ms: 0.0,
            pause_started_ms: None,
            difficulty_mark_ms: 0.0,
            dialog_mark_ms: 0.0,
            difficulty_interval_ms,
            dialog_interval_ms,
        }
    }

    /// Milliseconds of unpaused play since the run started
    pub fn active_ms(&self, now_ms: f64) -> f64 {
        let paused_now = self
            .pause_started_ms
            .map_or(0.0, |start| (now_ms - start).max(0.0));
        (now_ms - self.started_ms - self.paused_total_ms - paused_now).max(0.0)
    }

    /// Whole seconds survived
    pub fn survival_secs(&self, now_ms: f64) -> u64 {
        (self.active_ms(now_ms) / 1000.0).floor() as u64
    }

    pub fn is_paused(&self) -> bool {
        self.pause_started_ms.is_some()
    }

    pub fn begin_pause(&mut self, now_ms: f64) {
        if self.pause_started_ms.is_none() {
            self.pause_started_ms = Some(now_ms);
        }
    }

    pub fn end_pause(&mut self, now_ms: f64) {
        if let Some(start) = self.pause_started_ms.take() {
            self.paused_total_ms += (now_ms - start).max(0.0);
        }
    }

    pub fn paused_total_ms(&self) -> f64 {
        self.paused_total_ms
    }

    /// Number of difficulty increments due since the last call (one per interval)
    pub fn difficulty_steps(&mut self, now_ms: f64) -> u32 {
        if self.difficulty_interval_ms <= 0.0 {
            return 0;
        }
        let behind = self.active_ms(now_ms) - self.difficulty_mark_ms;
        if behind < self.difficulty_interval_ms {
            return 0;
        }
        let steps = (behind / self.difficulty_interval_ms).floor();
        self.difficulty_mark_ms += steps * self.difficulty_interval_ms;
        // Float to int casts saturate
        steps as u32
    }

    /// True when a new dialog line is due; missed rotations collapse into one
    pub fn dialog_due(&mut self, now_ms: f64) -> bool {
        if self.dialog_interval_ms <= 0.0 {
            return false;
        }
        let behind = self.active_ms(now_ms) - self.dialog_mark_ms;
        if behind < self.dialog_interval_ms {
            return false;
        }
        let missed = (behind / self.dialog_interval_ms).floor();
        self.dialog_mark_ms += missed * self.dialog_interval_ms;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacing() -> Pacing {
        Pacing::new(1_000.0, 60_000.0, 10_000.0)
    }

    #[test]
    fn test_survival_excludes_pauses() {
        let mut p = pacing();
        assert_eq!(p.survival_secs(11_000.0), 10);

        p.begin_pause(11_000.0);
        // Time frozen while paused
        assert_eq!(p.survival_secs(41_000.0), 10);
        p.end_pause(41_000.0);
        assert_eq!(p.paused_total_ms(), 30_000.0);
        assert_eq!(p.survival_secs(46_000.0), 15);
    }

    #[test]
    fn test_difficulty_once_per_interval() {
        let mut p = pacing();
        assert_eq!(p.difficulty_steps(60_999.0), 0);
        assert_eq!(p.difficulty_steps(61_000.0), 1);
        assert_eq!(p.difficulty_steps(61_016.0), 0);
        // A long gap catches up one step per elapsed interval
        assert_eq!(p.difficulty_steps(181_000.0), 2);
    }

    #[test]
    fn test_difficulty_catch_up_is_constant_time() {
        let mut p = Pacing::new(0.0, 1e-6, 10_000.0);
        let steps = p.difficulty_steps(2_000.0);
        assert!(steps > 1_000_000_000);
        // The mark caught up, so the next frame adds only what elapsed since
        assert!(p.difficulty_steps(2_000.0) <= 1);

        let mut p = Pacing::new(0.0, 60_000.0, 10_000.0);
        assert_eq!(p.difficulty_steps(1e15), u32::MAX);
    }

    #[test]
    fn test_difficulty_ignores_paused_time() {
        let mut p = pacing();
        p.begin_pause(31_000.0);
        p.end_pause(331_000.0);
        assert_eq!(p.difficulty_steps(331_000.0), 0);
        assert_eq!(p.difficulty_steps(361_000.0), 1);
    }

    #[test]
    fn test_dialog_rotation_collapses() {
        let mut p = pacing();
        assert!(!p.dialog_due(5_000.0));
        assert!(p.dialog_due(11_000.0));
        assert!(!p.dialog_due(12_000.0));
        // 35 s later: one rotation, not three
        assert!(p.dialog_due(46_000.0));
        assert!(!p.dialog_due(46_500.0));
    }

    #[test]
    fn test_double_pause_is_idempotent() {
        let mut p = pacing();
        p.begin_pause(2_000.0);
        p.begin_pause(5_000.0);
        p.end_pause(6_000.0);
        p.end_pause(9_000.0);
        assert_eq!(p.paused_total_ms(), 4_000.0);
    }
}
