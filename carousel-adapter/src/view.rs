use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell, RefMut};

use carousel::{Axis, CenterError, CenteringEngine, CenteringOptions, Layout, Nearest, Vec2};

use crate::{Container, Node};

/// A centering engine shared between the view and the click handlers it hands to the host.
pub type SharedEngine = Rc<RefCell<CenteringEngine>>;

/// Requests centering on `index` through a shared engine.
///
/// Fails with [`CenterError::EngineBusy`] if the engine is already borrowed (e.g. a host that
/// fires click callbacks from inside another engine call).
pub fn request_center_shared(engine: &SharedEngine, index: usize) -> carousel::Result<f32> {
    let Ok(mut engine) = engine.try_borrow_mut() else {
        cwarn!(index, "request_center: engine is busy, dropping request");
        return Err(CenterError::EngineBusy);
    };
    engine.request_center(index)
}

/// Binds a [`CenteringEngine`] to a host scroll container.
///
/// The view reads the container's live offset on every drag notification and frame, and writes
/// the animated offset back. Child scales are left to [`crate::Controller`], which owns the
/// per-item displayables.
#[derive(Debug)]
pub struct CenterView<C> {
    container: C,
    engine: SharedEngine,
}

impl<C: Container> CenterView<C> {
    /// Configures `container` for programmatic scrolling and builds the engine from its current
    /// geometry.
    pub fn new(mut container: C, options: CenteringOptions) -> Self {
        container.set_unrestricted();
        let layout = container.layout();
        match layout {
            Some(Layout::Horizontal { .. }) => container.set_axis_enabled(Axis::X, true),
            Some(Layout::Vertical { .. }) => container.set_axis_enabled(Axis::Y, true),
            Some(Layout::Grid { .. }) | None => {}
        }

        let sizes: Vec<_> = (0..container.child_count())
            .map(|i| container.child(i).map(Node::size).unwrap_or_default())
            .collect();
        let engine = CenteringEngine::new(
            layout,
            container.viewport(),
            &sizes,
            container.offset(),
            options,
        );
        Self {
            container,
            engine: Rc::new(RefCell::new(engine)),
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }

    pub fn engine(&self) -> Ref<'_, CenteringEngine> {
        self.engine.borrow()
    }

    pub fn engine_mut(&self) -> RefMut<'_, CenteringEngine> {
        self.engine.borrow_mut()
    }

    /// Returns a handle to the engine for host callbacks.
    pub fn shared_engine(&self) -> SharedEngine {
        Rc::clone(&self.engine)
    }

    /// The child currently considered centered.
    pub fn centered_node(&self) -> Option<&C::Node> {
        let index = self.engine.borrow().centered_index()?;
        self.container.child(index)
    }

    pub fn on_drag_start(&mut self) -> Option<Nearest> {
        let offset = self.container.offset();
        self.engine.borrow_mut().on_drag_start(offset)
    }

    pub fn on_drag(&mut self) -> Option<Nearest> {
        let offset = self.container.offset();
        self.engine.borrow_mut().on_drag(offset)
    }

    pub fn on_drag_end(&mut self) -> Option<Nearest> {
        let offset = self.container.offset();
        self.engine.borrow_mut().on_drag_end(offset)
    }

    pub fn request_center(&mut self, index: usize) -> carousel::Result<f32> {
        request_center_shared(&self.engine, index)
    }

    /// Advances the engine by `dt` seconds and applies the resulting offset to the container.
    ///
    /// Returns the offset written, if any.
    pub fn tick(&mut self, dt: f32) -> Option<Vec2> {
        let live = self.container.offset();
        let next = {
            let mut engine = self.engine.borrow_mut();
            engine.set_offset(live);
            engine.tick(dt)
        }?;
        self.container.set_offset(next);
        Some(next)
    }
}
