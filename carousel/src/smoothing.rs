/// How a value approaches its target each frame.
///
/// Both modes approach the target asymptotically and never overshoot it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Smoothing {
    /// `lerp(current, target, clamp01(rate * dt))`.
    ///
    /// Not frame-rate independent: the same `rate` settles faster at low frame rates, and any
    /// frame with `rate * dt >= 1` snaps straight to the target.
    #[default]
    FrameLerp,
    /// `lerp(current, target, 1 - exp(-rate * dt))`.
    ///
    /// Frame-rate independent exponential decay with `rate` as the decay constant (1/s).
    ExponentialDecay,
}

impl Smoothing {
    /// Returns the interpolation factor in `[0, 1]` for a frame of `dt` seconds.
    pub fn factor(self, rate: f32, dt: f32) -> f32 {
        let x = rate * dt;
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        match self {
            Self::FrameLerp => x.min(1.0),
            Self::ExponentialDecay => (1.0 - libm::expf(-x)).clamp(0.0, 1.0),
        }
    }

    /// Moves `current` toward `target` for one frame.
    pub fn approach(self, current: f32, target: f32, rate: f32, dt: f32) -> f32 {
        lerp(current, target, self.factor(rate, dt))
    }
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t >= 1.0 {
        return b;
    }
    let v = a + (b - a) * t;
    // Rounding must not carry the result past `b`.
    if a <= b { v.max(a).min(b) } else { v.min(a).max(b) }
}
