//! Remaining-distance easing for lifting parts (door slabs, crate lids)

/// Vertical lift that eases toward a target
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LiftAnimation {
    current: f32,
    target: f32,
}

/// Closer than this the lift snaps onto its target
const SETTLE_DISTANCE: f32 = 1e-3;

impl LiftAnimation {
    /// Lift resting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lift
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Target lift
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Set the target. The current value is untouched, so there is no pop.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance: the step is proportional to the remaining distance
    pub fn step(&mut self, dt: f32, rate: f32) {
        let remaining = self.target - self.current;
        if remaining.abs() <= SETTLE_DISTANCE {
            self.current = self.target;
            return;
        }
        self.current += remaining * (rate * dt).min(1.0);
    }

    /// Whether the lift has reached its target
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Current lift as a fraction of `full`
    pub fn fraction(&self, full: f32) -> f32 {
        if full.abs() <= f32::EPSILON {
            1.0
        } else {
            (self.current / full).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_continuous_and_settles() {
        let mut lift = LiftAnimation::new();
        lift.set_target(3.0);

        let mut last = 0.0;
        let mut frames = 0;
        while !lift.is_settled() {
            lift.step(1.0 / 60.0, 3.0);
            let delta = lift.current() - last;
            assert!(delta >= 0.0);
            // Never more than a 5 % jump per frame
            assert!(delta <= 3.0 * 0.05 + 1e-5);
            last = lift.current();
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(lift.current(), 3.0);
    }

    #[test]
    fn test_fraction() {
        let mut lift = LiftAnimation::new();
        lift.set_target(2.0);
        lift.step(1.0, 0.5);
        assert_eq!(lift.fraction(2.0), 0.5);
        assert_eq!(lift.fraction(0.0), 1.0);
    }
}
