use std::time::Duration;

/// Turns frame deltas into whole ticks of a fixed period.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Adds `dt` and returns how many periods completed. The remainder carries over.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }

        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut interval = Interval::new(Duration::from_millis(7000));
        assert_eq!(interval.advance(Duration::from_millis(3000)), 0);
        assert_eq!(interval.advance(Duration::from_millis(3999)), 0);
        assert_eq!(interval.advance(Duration::from_millis(1)), 1);
        assert_eq!(interval.advance(Duration::from_millis(6999)), 0);
    }

    #[test]
    fn long_frame_fires_several_ticks_and_keeps_remainder() {
        let mut interval = Interval::new(Duration::from_millis(5000));
        assert_eq!(interval.advance(Duration::from_millis(12_500)), 2);
        assert_eq!(interval.advance(Duration::from_millis(2_500)), 1);
    }

    #[test]
    fn reset_drops_accumulated_time() {
        let mut interval = Interval::new(Duration::from_millis(5000));
        interval.advance(Duration::from_millis(4900));
        interval.reset();
        assert_eq!(interval.advance(Duration::from_millis(200)), 0);
    }

    #[test]
    fn zero_period_never_fires() {
        let mut interval = Interval::new(Duration::ZERO);
        assert_eq!(interval.advance(Duration::from_secs(10)), 0);
    }
}
