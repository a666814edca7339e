use alloc::vec;
use alloc::vec::Vec;

use crate::options::is_valid_speed;
use crate::{
    Axis, CenterError, CenterState, CenteringOptions, Layout, LayoutMode, Nearest, Phase,
    PositionTable, Result, Scale3, Size, Smoothing, Vec2,
};

/// Offset distance under which [`CenteringEngine::phase`] reports [`Phase::Settled`].
pub const SETTLE_EPSILON: f32 = 0.01;

/// A headless auto-centering engine for a scrollable carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it the container geometry once, then drag offsets as they happen.
/// - Each frame, `tick(dt)` returns the container offset to apply, and `scales()` holds the
///   per-child scale to apply.
///
/// For host bindings (item enumeration, click-to-center), see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct CenteringEngine {
    options: CenteringOptions,
    layout_mode: Option<LayoutMode>,
    axis: Option<Axis>,
    positions: PositionTable,
    scales: Vec<Scale3>,

    offset: Vec2,
    target_offset: f32,
    centered_index: Option<usize>,
    dragging: bool,
}

impl CenteringEngine {
    /// Builds the position table and seeds the centered index from `offset`.
    ///
    /// `layout = None` stands for a container without a recognized layout: the engine is created
    /// with an empty table and no axis, and every frame update becomes a no-op.
    pub fn new(
        layout: Option<Layout>,
        viewport: Size,
        child_sizes: &[Size],
        offset: Vec2,
        options: CenteringOptions,
    ) -> Self {
        let options = options.sanitized();
        let positions = match &layout {
            Some(layout) => PositionTable::build(layout, viewport, child_sizes),
            None => {
                cwarn!(
                    children = child_sizes.len(),
                    "CenteringEngine::new: no recognized layout, centering disabled"
                );
                PositionTable::default()
            }
        };
        let mut engine = Self {
            layout_mode: layout.as_ref().map(Layout::mode),
            axis: layout.as_ref().map(Layout::axis),
            scales: vec![Scale3::ONE; positions.len()],
            positions,
            options,
            offset,
            target_offset: 0.0,
            centered_index: None,
            dragging: false,
        };
        cdebug!(
            layout_mode = ?engine.layout_mode,
            count = engine.positions.len(),
            "CenteringEngine::new"
        );
        if let Some(axis) = engine.axis {
            engine.find_nearest(offset.get(axis));
        }
        engine
    }

    pub fn options(&self) -> &CenteringOptions {
        &self.options
    }

    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.layout_mode
    }

    /// The axis offsets operate on, or `None` for a misconfigured container.
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn centered_index(&self) -> Option<usize> {
        self.centered_index
    }

    pub fn target_offset(&self) -> f32 {
        self.target_offset
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Mirrors the host container offset into the engine without changing any target.
    ///
    /// Adapters call this before `tick` when the host may have moved the container itself.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    pub fn is_auto_centering(&self) -> bool {
        self.options.auto_centering
    }

    pub fn set_auto_centering(&mut self, enabled: bool) {
        self.options.auto_centering = enabled;
    }

    pub fn is_scaling(&self) -> bool {
        self.options.scaling
    }

    pub fn set_scaling(&mut self, enabled: bool) {
        self.options.scaling = enabled;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn center_speed(&self) -> f32 {
        self.options.center_speed
    }

    /// Sets the approach rate. Returns `false` (and keeps the old rate) for a non-finite or
    /// non-positive value.
    pub fn set_center_speed(&mut self, center_speed: f32) -> bool {
        if !is_valid_speed(center_speed) {
            cwarn!(center_speed, "CenteringEngine: rejected center_speed");
            return false;
        }
        self.options.center_speed = center_speed;
        true
    }

    pub fn center_scale(&self) -> Scale3 {
        self.options.center_scale
    }

    pub fn set_center_scale(&mut self, center_scale: Scale3) {
        self.options.center_scale = center_scale;
    }

    pub fn set_smoothing(&mut self, smoothing: Smoothing) {
        self.options.smoothing = smoothing;
    }

    pub fn scale(&self, index: usize) -> Option<Scale3> {
        self.scales.get(index).copied()
    }

    pub fn scales(&self) -> &[Scale3] {
        &self.scales
    }

    /// Seeds a child's current scale (e.g. from the host's initial transform).
    ///
    /// Returns `false` if `index` is out of range.
    pub fn set_scale(&mut self, index: usize, scale: Scale3) -> bool {
        match self.scales.get_mut(index) {
            Some(s) => {
                *s = scale;
                true
            }
            None => false,
        }
    }

    /// Finds the table entry nearest to `offset` and makes it the centered item and target.
    ///
    /// Ties resolve to the lowest index. On an empty table this returns `None` and leaves the
    /// state untouched.
    pub fn find_nearest(&mut self, offset: f32) -> Option<Nearest> {
        let nearest = self.positions.nearest(offset)?;
        self.centered_index = Some(nearest.index);
        self.target_offset = nearest.offset;
        Some(nearest)
    }

    fn find_nearest_to_current(&mut self) -> Option<Nearest> {
        let axis = self.axis?;
        self.find_nearest(self.offset.get(axis))
    }

    /// A drag began at `offset`. Auto-centering is suspended until [`Self::on_drag_end`].
    pub fn on_drag_start(&mut self, offset: Vec2) -> Option<Nearest> {
        ctrace!(x = offset.x, y = offset.y, "on_drag_start");
        self.on_drag(offset)
    }

    /// The drag moved the container to `offset`.
    ///
    /// The centered index follows the drag so scaling stays in sync, but the container is not
    /// animated.
    pub fn on_drag(&mut self, offset: Vec2) -> Option<Nearest> {
        self.dragging = true;
        self.options.auto_centering = false;
        self.offset = offset;
        self.find_nearest_to_current()
    }

    /// The drag stopped at `offset`; the container glides the rest of the way to the nearest
    /// entry.
    pub fn on_drag_end(&mut self, offset: Vec2) -> Option<Nearest> {
        ctrace!(x = offset.x, y = offset.y, "on_drag_end");
        self.offset = offset;
        let nearest = self.find_nearest_to_current();
        self.dragging = false;
        self.options.auto_centering = true;
        nearest
    }

    /// Makes `index` the centered item and target.
    ///
    /// Enable flags are untouched: during a drag the container only starts moving after the drag
    /// ends. Returns the new target offset.
    pub fn request_center(&mut self, index: usize) -> Result<f32> {
        let Some(target) = self.positions.get(index) else {
            cwarn!(
                index,
                len = self.positions.len(),
                "request_center: index out of range"
            );
            return Err(CenterError::IndexOutOfRange {
                index,
                len: self.positions.len(),
            });
        };
        ctrace!(index, target, "request_center");
        self.centered_index = Some(index);
        self.target_offset = target;
        Ok(target)
    }

    /// Advances the animations by `dt` seconds.
    ///
    /// Returns the new container offset when auto-centering moved it, `None` otherwise. Child
    /// scales are updated in place (see [`Self::scales`]).
    pub fn tick(&mut self, dt: f32) -> Option<Vec2> {
        let axis = self.axis?;
        if self.positions.is_empty() {
            return None;
        }
        let CenteringOptions {
            center_speed,
            center_scale,
            smoothing,
            auto_centering,
            scaling,
        } = self.options;
        let t = smoothing.factor(center_speed, dt);

        if scaling {
            for (i, scale) in self.scales.iter_mut().enumerate() {
                let target = if Some(i) == self.centered_index {
                    center_scale
                } else {
                    Scale3::ONE
                };
                *scale = scale.zip_with(target, |cur, to| crate::lerp(cur, to, t));
            }
        }

        // Only `on_drag_end` hands the offset back to the engine.
        if !auto_centering || self.dragging {
            return None;
        }
        let current = self.offset.get(axis);
        let next = crate::lerp(current, self.target_offset, t);
        self.offset = self.offset.with(axis, next);
        Some(self.offset)
    }

    /// Returns the coarse animation phase.
    pub fn phase(&self) -> Phase {
        if self.dragging {
            return Phase::Dragging;
        }
        if self.options.auto_centering && !self.is_settled(SETTLE_EPSILON) {
            return Phase::Animating;
        }
        Phase::Settled
    }

    /// Whether the container is within `epsilon` of its target on the active axis.
    ///
    /// A misconfigured engine is always settled.
    pub fn is_settled(&self, epsilon: f32) -> bool {
        match self.axis {
            Some(axis) if self.centered_index.is_some() => {
                (self.offset.get(axis) - self.target_offset).abs() <= epsilon
            }
            _ => true,
        }
    }

    /// Returns a lightweight snapshot of the current state.
    pub fn state(&self) -> CenterState {
        CenterState {
            offset: self.offset,
            centered_index: self.centered_index,
            target_offset: self.target_offset,
            auto_centering: self.options.auto_centering,
            scaling: self.options.scaling,
            dragging: self.dragging,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// A centered index that no longer fits the table is dropped; the target is then re-derived
    /// from the restored offset.
    pub fn restore_state(&mut self, state: CenterState) {
        self.offset = state.offset;
        self.options.auto_centering = state.auto_centering;
        self.options.scaling = state.scaling;
        self.dragging = state.dragging;
        match state.centered_index {
            Some(index) if index < self.positions.len() => {
                self.centered_index = Some(index);
                self.target_offset = state.target_offset;
            }
            _ => {
                if state.centered_index.is_some() {
                    cwarn!(
                        index = state.centered_index,
                        len = self.positions.len(),
                        "restore_state: dropping out-of-range centered index"
                    );
                }
                self.centered_index = None;
                self.target_offset = state.target_offset;
                self.find_nearest_to_current();
            }
        }
    }
}
