use std::fmt::Display;

/// Constant-velocity motion in a one-dimensional world.
#[derive(Clone, Debug, Default)]
pub struct LinearMotion {
    /// Position at time zero.
    pub x0: f64,
    /// Rate of change of the position, per unit of time.
    pub velocity: f64,
}

impl LinearMotion {
    /// Position of the moving body at the given time.
    pub fn position(&self, time: f64) -> f64 {
        self.x0 + self.velocity * time
    }

    /// Noiseless trajectory sampled at `time = dt * k` for `k = 0..=steps`.
    ///
    /// The returned sequence has `steps + 1` entries and starts with the
    /// seed position `x0`.
    pub fn trajectory(&self, dt: f64, steps: usize) -> Vec<f64> {
        (0..=steps).map(|k| self.position(dt * k as f64)).collect()
    }
}

impl Display for LinearMotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x0: {}, velocity: {}", self.x0, self.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_linear_in_time() {
        let motion = LinearMotion {
            x0: 160.0,
            velocity: 1.0,
        };
        assert_eq!(motion.position(0.0), 160.0);
        assert_eq!(motion.position(4.0), 164.0);
    }

    #[test]
    fn trajectory_includes_seed_point() {
        let motion = LinearMotion {
            x0: 160.0,
            velocity: 1.0,
        };
        let trajectory = motion.trajectory(1.0, 10);
        assert_eq!(trajectory.len(), 11);
        assert_eq!(trajectory[0], 160.0);
        assert_eq!(trajectory[10], 170.0);
    }
}
