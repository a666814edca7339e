use alloc::boxed::Box;
use alloc::vec::Vec;

use carousel::{CenteringOptions, Nearest, Vec2};

use crate::{CenterView, Clickable, Container, Displayable, Item, request_center_shared};

/// A framework-neutral controller that enumerates the carousel's items and wires them to a
/// [`CenterView`].
///
/// This type does not own any UI objects beyond the handles the host hands out. Adapters drive
/// it by calling:
/// - `on_drag_start` / `on_drag` / `on_drag_end` when the user drags the container
/// - `tick(dt)` each frame (offset glide and scale emphasis)
///
/// Clicks need no forwarding: every clickable item is subscribed at construction and requests
/// centering on its own index.
#[derive(Debug)]
pub struct Controller<C: Container> {
    view: CenterView<C>,
    items: Vec<Item<C::Node>>,
}

impl<C: Container> Controller<C> {
    pub fn new(container: C, options: CenteringOptions) -> Self {
        Self::from_view(CenterView::new(container, options))
    }

    /// Builds one [`Item`] per container child, in child order, and binds its click.
    pub fn from_view(view: CenterView<C>) -> Self {
        let count = view.container().child_count();
        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            let mut item = Item::new(index);
            match view.container().child(index) {
                Some(node) => item.initialize(node),
                None => {
                    cwarn!(index, "Controller: container reported a missing child");
                }
            }

            if let Some(d) = item.displayable() {
                view.engine_mut().set_scale(index, d.scale());
            }

            if let Some(clickable) = item.clickable_mut() {
                let engine = view.shared_engine();
                clickable.on_click(Box::new(move || {
                    // Rejections are logged by the engine; a click has no caller to report to.
                    request_center_shared(&engine, index).ok();
                }));
            }
            items.push(item);
        }
        cdebug!(count, "Controller::from_view");
        Self { view, items }
    }

    pub fn view(&self) -> &CenterView<C> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CenterView<C> {
        &mut self.view
    }

    pub fn into_view(self) -> CenterView<C> {
        self.view
    }

    pub fn items(&self) -> &[Item<C::Node>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item<C::Node>> {
        self.items.get(index)
    }

    /// Same as clicking item `index`.
    pub fn on_item_click(&mut self, index: usize) -> carousel::Result<f32> {
        ctrace!(index, "Controller::on_item_click");
        self.view.request_center(index)
    }

    pub fn on_drag_start(&mut self) -> Option<Nearest> {
        self.view.on_drag_start()
    }

    pub fn on_drag(&mut self) -> Option<Nearest> {
        self.view.on_drag()
    }

    pub fn on_drag_end(&mut self) -> Option<Nearest> {
        self.view.on_drag_end()
    }

    /// Advances the view by `dt` seconds, then writes every animated scale to its item.
    ///
    /// Items without a displayable are skipped. Returns the container offset written, if any.
    pub fn tick(&mut self, dt: f32) -> Option<Vec2> {
        let offset = self.view.tick(dt);
        self.apply_scales();
        offset
    }

    fn apply_scales(&mut self) {
        let engine = self.view.engine();
        if !engine.is_scaling() {
            return;
        }
        for item in &mut self.items {
            let Some(scale) = engine.scale(item.index()) else {
                continue;
            };
            if let Some(d) = item.displayable_mut() {
                d.set_scale(scale);
            }
        }
    }
}
