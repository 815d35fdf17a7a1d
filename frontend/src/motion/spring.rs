/// Configuration for a damped spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Displacement under which the spring may come to rest
    pub rest_delta: f64,
    /// Speed (units per second) under which the spring may come to rest
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Critically damped, no overshoot. Used for the stats count-up.
    pub const COUNT_UP: Self = Self {
        stiffness: 100.0,
        damping: 20.0,
        mass: 1.0,
        rest_delta: 0.01,
        rest_speed: 0.05,
    };

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Undamped angular frequency, rad/s
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::COUNT_UP
    }
}

/// Hard stop for any spring, in milliseconds.
const MAX_DURATION_MS: f64 = 10_000.0;

/// Spring released from rest at `origin`, converging on `target`.
///
/// Position is evaluated from the closed-form solution of the damped
/// oscillator rather than integrated, so it stays continuous and doesn't
/// depend on the frame rate.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    origin: f64,
    target: f64,
    elapsed_ms: f64,
    position: f64,
    velocity: f64,
    settled: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, origin: f64, target: f64) -> Self {
        Self {
            config,
            origin,
            target,
            elapsed_ms: 0.0,
            position: origin,
            velocity: 0.0,
            settled: origin == target,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advances the simulation by `dt_ms` and returns the new position.
    /// Once settled the position is exactly the target and stays there.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        if self.settled {
            return self.position;
        }
        self.elapsed_ms += dt_ms.max(0.0);

        let (displacement, velocity) = self.state_at(self.elapsed_ms / 1000.0);
        self.velocity = velocity;
        self.position = self.target + displacement;

        let at_rest = displacement.abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed;
        if at_rest || self.elapsed_ms >= MAX_DURATION_MS {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
        self.position
    }

    /// Offset from the target and its rate of change (units per second)
    /// at `t` seconds, starting at rest.
    fn state_at(&self, t: f64) -> (f64, f64) {
        let x0 = self.origin - self.target;
        let omega = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            let decay = (-omega * t).exp();
            (decay * x0 * (1.0 + omega * t), -decay * omega * omega * x0 * t)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            (
                decay * x0 * (cos + (zeta * omega / omega_d) * sin),
                -decay * x0 * (omega * omega / omega_d) * sin,
            )
        } else {
            let omega_h = omega * (zeta * zeta - 1.0).sqrt();
            let decay = (-zeta * omega * t).exp();
            let (sinh, cosh) = ((omega_h * t).sinh(), (omega_h * t).cosh());
            (
                decay * x0 * (cosh + (zeta * omega / omega_h) * sinh),
                -decay * x0 * (omega * omega / omega_h) * sinh,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNCY: SpringConfig = SpringConfig {
        stiffness: 400.0,
        damping: 17.0,
        ..SpringConfig::COUNT_UP
    };

    const OVERDAMPED: SpringConfig = SpringConfig {
        damping: 40.0,
        ..SpringConfig::COUNT_UP
    };

    fn run_to_rest(spring: &mut Spring) -> Vec<f64> {
        let mut positions = Vec::new();
        for _ in 0..2_000 {
            positions.push(spring.step(1000.0 / 60.0));
            if spring.is_settled() {
                break;
            }
        }
        positions
    }

    #[test]
    fn test_count_up_config_is_critically_damped() {
        assert!((SpringConfig::COUNT_UP.damping_ratio() - 1.0).abs() < 1e-9);
        assert!(BOUNCY.damping_ratio() < 1.0);
    }

    #[test]
    fn test_spring_settles_exactly_on_target() {
        let mut spring = Spring::new(SpringConfig::COUNT_UP, 0.0, 100.0);
        run_to_rest(&mut spring);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 100.0);
        assert_eq!(spring.velocity(), 0.0);
        assert_eq!(spring.step(16.0), 100.0);
    }

    #[test]
    fn test_critically_damped_spring_never_overshoots() {
        let mut spring = Spring::new(SpringConfig::COUNT_UP, 0.0, 100.0);
        let positions = run_to_rest(&mut spring);
        for pair in positions.windows(2) {
            assert!(pair[1] >= pair[0]);
            assert!(pair[1] <= 100.0);
        }
    }

    #[test]
    fn test_underdamped_spring_overshoots_then_settles() {
        let mut spring = Spring::new(BOUNCY, 0.0, 1.0);
        let positions = run_to_rest(&mut spring);
        let peak = positions.iter().cloned().fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "expected overshoot, peak was {}", peak);
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn test_overdamped_spring_converges() {
        let mut spring = Spring::new(OVERDAMPED, 0.0, 10.0);
        run_to_rest(&mut spring);
        assert!(spring.is_settled());
        assert_eq!(spring.position(), 10.0);
    }

    #[test]
    fn test_spring_already_at_target_is_settled() {
        let spring = Spring::new(SpringConfig::COUNT_UP, 5.0, 5.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_position_is_continuous_between_frames() {
        let mut spring = Spring::new(SpringConfig::COUNT_UP, 0.0, 100.0);
        let mut last = spring.position();
        while !spring.is_settled() {
            let next = spring.step(1.0);
            assert!((next - last).abs() < 1.0);
            last = next;
        }
    }

    #[test]
    fn test_velocity_is_the_derivative_of_position() {
        for config in [SpringConfig::COUNT_UP, BOUNCY, OVERDAMPED] {
            let spring = Spring::new(config, 0.0, 50.0);
            for t in [0.05, 0.1, 0.3, 0.6] {
                let h = 1e-6;
                let (ahead, _) = spring.state_at(t + h);
                let (behind, _) = spring.state_at(t - h);
                let numeric = (ahead - behind) / (2.0 * h);
                let (_, velocity) = spring.state_at(t);
                assert!(
                    (velocity - numeric).abs() < 1e-3 * (1.0 + numeric.abs()),
                    "{:?} at {}s: {} vs {}",
                    config,
                    t,
                    velocity,
                    numeric
                );
            }
        }
    }

    #[test]
    fn test_released_from_rest() {
        for config in [SpringConfig::COUNT_UP, BOUNCY, OVERDAMPED] {
            let spring = Spring::new(config, 0.0, 50.0);
            assert_eq!(spring.state_at(0.0), (-50.0, 0.0));
        }
    }
}
