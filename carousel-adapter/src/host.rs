//! Traits a host UI implements so the adapter can drive its scroll container.
//!
//! Handles returned by [`Node::displayable`] and [`Node::clickable`] are owned values (typically
//! cheap, clonable references into the host's widget tree or ECS).

use alloc::boxed::Box;

use carousel::{Axis, Layout, Scale3, Size, Vec2};

/// A callback the host invokes when a clickable is activated.
pub type ClickHandler = Box<dyn FnMut()>;

/// The visual part of a child whose scale the engine animates.
pub trait Displayable {
    fn scale(&self) -> Scale3;
    fn set_scale(&mut self, scale: Scale3);
}

/// The interactive part of a child.
pub trait Clickable {
    /// Subscribes `handler` to click events. The host calls it synchronously on its UI thread.
    fn on_click(&mut self, handler: ClickHandler);
}

/// A child of the scroll container.
pub trait Node {
    type Displayable: Displayable;
    type Clickable: Clickable;

    /// Size of the child in container-local units.
    fn size(&self) -> Size;

    fn displayable(&self) -> Option<Self::Displayable>;

    fn clickable(&self) -> Option<Self::Clickable>;
}

/// The scrollable parent holding all carousel items.
pub trait Container {
    type Node: Node;

    /// The container's layout strategy, or `None` if it has none the engine understands.
    fn layout(&self) -> Option<Layout>;

    /// Size of the visible scroll area.
    fn viewport(&self) -> Size;

    /// Number of children. Must stay stable after the view is created.
    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<&Self::Node>;

    /// Local offset of the content relative to the viewport.
    fn offset(&self) -> Vec2;

    fn set_offset(&mut self, offset: Vec2);

    /// Turns off elastic/clamped scrolling so the content can sit at any offset.
    fn set_unrestricted(&mut self);

    fn set_axis_enabled(&mut self, axis: Axis, enabled: bool);
}
