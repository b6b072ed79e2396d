//! Time-based animation specifications with easing curves and spring physics.
//!
//! The navigation core only decides *what* should animate (start value, rest
//! value, duration/easing descriptor); the presentation layer owns the clock
//! and drives [`TweenAnimation`] / [`SpringAnimation`] frame by frame.

/// Easing functions for tween animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction, with a
    // bisection fallback when the derivative degenerates.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..16 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Tween specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy).
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold to stop animation, in units per second.
    pub velocity_threshold: f32,
    /// Position threshold to stop animation, in units.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Create a spring from damping ratio and stiffness, with thresholds
    /// suitable for pixel-valued animations.
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            velocity_threshold: 0.5,
            position_threshold: 0.5,
        }
    }

    /// Create a spring from a response period in seconds and a damping
    /// fraction, the parameterization used by platform spring APIs.
    ///
    /// With unit mass, `stiffness = (2π / response)²`.
    pub fn from_response(response_secs: f32, damping_ratio: f32) -> Self {
        let response = response_secs.max(1e-3);
        let stiffness = (std::f32::consts::TAU / response).powi(2);
        Self::new(damping_ratio, stiffness)
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(1.0, 1500.0)
    }
}

/// Descriptor for how a state transition should be presented.
///
/// Emitted by the navigation core; `None` means the new value applies
/// instantaneously with no visual interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationPlan {
    /// Apply the target value immediately.
    None,
    /// Interpolate over a fixed duration with an easing curve.
    Tween(AnimationSpec),
    /// Settle with spring physics.
    Spring(SpringSpec),
}

impl AnimationPlan {
    /// Whether this plan performs any visual interpolation.
    pub fn is_animated(&self) -> bool {
        !matches!(self, AnimationPlan::None)
    }
}

/// A running tween between two scalar values, sampled by elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct TweenAnimation {
    start: f32,
    end: f32,
    spec: AnimationSpec,
}

impl TweenAnimation {
    pub fn new(start: f32, end: f32, spec: AnimationSpec) -> Self {
        Self { start, end, spec }
    }

    /// Sample the animated value `elapsed_millis` after the start.
    pub fn value_at(&self, elapsed_millis: u64) -> f32 {
        let duration = self.spec.duration_millis.max(1);
        let linear = (elapsed_millis as f32 / duration as f32).clamp(0.0, 1.0);
        let progress = self.spec.easing.transform(linear);
        self.start + (self.end - self.start) * progress
    }

    pub fn is_finished(&self, elapsed_millis: u64) -> bool {
        elapsed_millis >= self.spec.duration_millis
    }

    pub fn end_value(&self) -> f32 {
        self.end
    }
}

/// A running spring simulation, stepped by frame delta time.
///
/// Semi-implicit Euler with a fixed internal timestep for stability.
#[derive(Debug, Clone, Copy)]
pub struct SpringAnimation {
    value: f32,
    velocity: f32,
    target: f32,
    spec: SpringSpec,
}

/// Internal integration timestep (~60fps).
const SPRING_TIMESTEP: f32 = 0.016;

impl SpringAnimation {
    /// Create a spring currently at `value` heading for `target`.
    pub fn new(value: f32, target: f32, spec: SpringSpec) -> Self {
        Self {
            value,
            velocity: 0.0,
            target,
            spec,
        }
    }

    /// Seed the spring with an initial velocity (units per second).
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance the simulation by `dt_secs` and return the new value.
    pub fn step(&mut self, dt_secs: f32) -> f32 {
        let dt = dt_secs.clamp(0.0, 0.25);
        let stiffness = self.spec.stiffness.max(0.0);
        if stiffness == 0.0 {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let damping = 2.0 * self.spec.damping_ratio.max(0.0) * stiffness.sqrt();
        let mut advanced = 0.0f32;
        while advanced < dt {
            let step = SPRING_TIMESTEP.min(dt - advanced);
            let displacement = self.value - self.target;
            let acceleration = -stiffness * displacement - damping * self.velocity;
            self.velocity += acceleration * step;
            self.value += self.velocity * step;
            advanced += step;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }

    /// Whether the spring has come to rest at its target.
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.spec.position_threshold
            && self.velocity.abs() < self.spec.velocity_threshold
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
