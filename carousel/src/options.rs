use crate::{Scale3, Smoothing};

/// Default approach rate used for both the offset glide and the scale emphasis.
pub const DEFAULT_CENTER_SPEED: f32 = 20.0;

/// Default scale applied to the centered child.
pub const DEFAULT_CENTER_SCALE: Scale3 = Scale3::splat(1.2);

/// Configuration for [`crate::CenteringEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CenteringOptions {
    /// Approach rate (must be finite and `> 0`).
    pub center_speed: f32,
    /// Target scale of the centered child. Other children return to [`Scale3::ONE`].
    pub center_scale: Scale3,
    pub smoothing: Smoothing,
    /// Whether the container glides toward its target on `tick`.
    pub auto_centering: bool,
    /// Whether child scales are animated on `tick`.
    pub scaling: bool,
}

impl Default for CenteringOptions {
    fn default() -> Self {
        Self {
            center_speed: DEFAULT_CENTER_SPEED,
            center_scale: DEFAULT_CENTER_SCALE,
            smoothing: Smoothing::FrameLerp,
            auto_centering: true,
            scaling: true,
        }
    }
}

impl CenteringOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the approach rate. Non-finite or non-positive values are ignored.
    pub fn with_center_speed(mut self, center_speed: f32) -> Self {
        if is_valid_speed(center_speed) {
            self.center_speed = center_speed;
        }
        self
    }

    pub fn with_center_scale(mut self, center_scale: Scale3) -> Self {
        self.center_scale = center_scale;
        self
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_auto_centering(mut self, auto_centering: bool) -> Self {
        self.auto_centering = auto_centering;
        self
    }

    pub fn with_scaling(mut self, scaling: bool) -> Self {
        self.scaling = scaling;
        self
    }

    /// Returns a copy with an invalid `center_speed` replaced by the default.
    pub(crate) fn sanitized(mut self) -> Self {
        if !is_valid_speed(self.center_speed) {
            cwarn!(
                center_speed = self.center_speed,
                "CenteringOptions: invalid center_speed, using default"
            );
            self.center_speed = DEFAULT_CENTER_SPEED;
        }
        self
    }
}

pub(crate) fn is_valid_speed(speed: f32) -> bool {
    speed.is_finite() && speed > 0.0
}
