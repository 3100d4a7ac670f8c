use crate::constants::*;

/// Recurring fixed-period timer fed with frame time.
///
/// There is no way to stop or pause it: once created it keeps firing for as
/// long as the owner keeps calling `update`.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    period: f32,
    elapsed: f64,
}

impl AutoAdvance {
    pub fn new(period: f32) -> Self {
        Self { period, elapsed: 0.0 }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    /// Accumulates `dt` seconds and returns how many whole periods elapsed.
    ///
    /// The remainder is carried over, so a long frame yields several ticks
    /// instead of dropping them. A non-positive or non-finite period never fires.
    pub fn update(&mut self, dt: f32) -> u32 {
        if !(self.period > 0.0 && self.period.is_finite()) || !(dt > 0.0 && dt.is_finite()) {
            return 0;
        }

        let period = self.period as f64;
        self.elapsed += dt as f64;
        let ticks = (self.elapsed / period).floor().min(u32::MAX as f64);
        self.elapsed = (self.elapsed - ticks * period).max(0.0);
        ticks as u32
    }
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(AUTO_ADVANCE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut timer = AutoAdvance::new(5.0);
        assert_eq!(timer.update(4.0), 0);
        assert_eq!(timer.update(1.0), 1);
        assert_eq!(timer.update(4.5), 0);
        assert_eq!(timer.update(0.5), 1);
    }

    #[test]
    fn long_frame_yields_every_elapsed_tick() {
        let mut timer = AutoAdvance::new(5.0);
        assert_eq!(timer.update(12.0), 2);
        // 2 seconds carried over
        assert_eq!(timer.update(3.0), 1);
    }

    #[test]
    fn huge_frame_counts_every_period_at_once() {
        // 2^-10 s is exact in binary, so the expected count is exact too
        let mut timer = AutoAdvance::new(0.0009765625);
        assert_eq!(timer.update(20000.0), 20_480_000);
        assert_eq!(timer.update(40000.0), 40_960_000);
        assert_eq!(timer.update(0.0009765625), 1);
    }

    #[test]
    fn tick_count_saturates_instead_of_overflowing() {
        let mut timer = AutoAdvance::new(0.0009765625);
        assert_eq!(timer.update(f32::MAX), u32::MAX);
    }

    #[test]
    fn frame_split_does_not_change_tick_count() {
        let mut timer = AutoAdvance::new(0.5);
        let ticks: u32 = (0..100).map(|_| timer.update(0.125)).sum();
        assert_eq!(ticks, 25);
    }

    #[test]
    fn default_period_is_five_seconds() {
        let mut timer = AutoAdvance::default();
        assert_eq!(timer.period(), 5.0);
        assert_eq!(timer.update(4.5), 0);
        assert_eq!(timer.update(0.5), 1);
    }

    #[test]
    fn invalid_period_never_fires() {
        for period in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mut timer = AutoAdvance::new(period);
            assert_eq!(timer.update(100.0), 0);
        }
    }

    #[test]
    fn negative_or_nan_dt_is_ignored() {
        let mut timer = AutoAdvance::new(1.0);
        assert_eq!(timer.update(-5.0), 0);
        assert_eq!(timer.update(f32::NAN), 0);
        assert_eq!(timer.update(f32::INFINITY), 0);
        assert_eq!(timer.update(1.0), 1);
    }
}
