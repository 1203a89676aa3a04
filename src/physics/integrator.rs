/// Classical fixed-step 4th-order Runge-Kutta integrator for the
/// second-order scalar system `x' = v, v' = a(x, v)`.
///
/// The integrator knows nothing about the physical meaning of the state: it
/// is handed the current `(x, v)` pair and an acceleration evaluator, and it
/// returns the state one step of size `dt` later. Apart from the configured
/// step size it carries no state between calls, so a single instance can be
/// reused across models and is safe to call repeatedly.
///
/// There is no error estimate and no adaptive refinement; non-finite input
/// simply propagates to non-finite output.
#[derive(Debug, Clone, PartialEq)]
pub struct Rk4Integrator {
    dt: f64,
}

impl Rk4Integrator {
    /// Create an integrator with a fixed step size `dt` (seconds)
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }

    /// The configured step size in seconds
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Advance `(x, v)` by one step.
    ///
    /// # Arguments
    /// - `x`: current position-like state.
    /// - `v`: current velocity-like state.
    /// - `accel`: acceleration evaluator `a(x, v)`, sampled at the four
    ///   Runge-Kutta stage points.
    pub fn integrate<F>(&self, x: f64, v: f64, accel: F) -> (f64, f64)
    where
        F: Fn(f64, f64) -> f64,
    {
        let dt = self.dt;

        let v1 = v;
        let a1 = accel(x, v1);

        let x2 = x + 0.5 * v1 * dt;
        let v2 = v + 0.5 * a1 * dt;
        let a2 = accel(x2, v2);

        let x3 = x + 0.5 * v2 * dt;
        let v3 = v + 0.5 * a2 * dt;
        let a3 = accel(x3, v3);

        let x4 = x + v3 * dt;
        let v4 = v + a3 * dt;
        let a4 = accel(x4, v4);

        let x_next = x + (dt / 6.0) * (v1 + 2.0 * v2 + 2.0 * v3 + v4);
        let v_next = v + (dt / 6.0) * (a1 + 2.0 * a2 + 2.0 * a3 + a4);

        (x_next, v_next)
    }
}
