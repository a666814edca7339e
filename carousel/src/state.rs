use crate::Vec2;

/// A lightweight, serializable snapshot of the engine's mutable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Restoring it lets a
/// UI keep the same centered item across sessions without re-running a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenterState {
    pub offset: Vec2,
    pub centered_index: Option<usize>,
    pub target_offset: f32,
    pub auto_centering: bool,
    pub scaling: bool,
    pub dragging: bool,
}
