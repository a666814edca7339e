/// The scroll axis the engine drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

/// Layout strategy tag of the scroll container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    Grid,
    Horizontal,
    Vertical,
}

impl LayoutMode {
    pub fn axis(self) -> Axis {
        match self {
            Self::Grid | Self::Horizontal => Axis::X,
            Self::Vertical => Axis::Y,
        }
    }
}

/// Layout strategy of the scroll container together with its mode-specific parameters.
///
/// Grid cells all share `cell_size`; linear layouts read each child's own size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    Grid { cell_size: Size, spacing: Vec2 },
    Horizontal { spacing: f32 },
    Vertical { spacing: f32 },
}

impl Layout {
    pub fn mode(&self) -> LayoutMode {
        match self {
            Self::Grid { .. } => LayoutMode::Grid,
            Self::Horizontal { .. } => LayoutMode::Horizontal,
            Self::Vertical { .. } => LayoutMode::Vertical,
        }
    }

    pub fn axis(&self) -> Axis {
        self.mode().axis()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A 2D local offset of the scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn get(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns a copy with the component on `axis` replaced.
    pub fn with(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
        self
    }
}

/// A per-child scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Scale3 {
    pub const ONE: Self = Self::splat(1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Applies `f` to each component pair of `self` and `other`.
    pub fn zip_with(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
            z: f(self.z, other.z),
        }
    }
}

impl Default for Scale3 {
    fn default() -> Self {
        Self::ONE
    }
}

/// The result of a nearest-offset search over a [`crate::PositionTable`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nearest {
    pub index: usize,
    /// The container offset at which `index` is centered.
    pub offset: f32,
}

/// Coarse animation phase of a [`crate::CenteringEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The container is at (or within epsilon of) its target, or nothing drives it.
    Settled,
    /// A drag owns the container offset; auto-centering is suppressed.
    Dragging,
    /// Auto-centering is gliding the container toward its target.
    Animating,
}
