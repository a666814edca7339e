// Example: a minimal in-memory host wired through the adapter's Controller.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use carousel::{Axis, CenteringOptions, Layout, Scale3, Size, Vec2};
use carousel_adapter::{ClickHandler, Clickable, Container, Controller, Displayable, Node};

#[derive(Clone, Default)]
struct Sprite(Rc<Cell<Scale3>>);

impl Displayable for Sprite {
    fn scale(&self) -> Scale3 {
        self.0.get()
    }

    fn set_scale(&mut self, scale: Scale3) {
        self.0.set(scale);
    }
}

#[derive(Clone, Default)]
struct Button(Rc<RefCell<Vec<ClickHandler>>>);

impl Button {
    fn press(&self) {
        for handler in self.0.borrow_mut().iter_mut() {
            handler();
        }
    }
}

impl Clickable for Button {
    fn on_click(&mut self, handler: ClickHandler) {
        self.0.borrow_mut().push(handler);
    }
}

struct Card {
    width: f32,
    sprite: Sprite,
    button: Button,
}

impl Node for Card {
    type Displayable = Sprite;
    type Clickable = Button;

    fn size(&self) -> Size {
        Size::new(self.width, 80.0)
    }

    fn displayable(&self) -> Option<Sprite> {
        Some(self.sprite.clone())
    }

    fn clickable(&self) -> Option<Button> {
        Some(self.button.clone())
    }
}

struct Strip {
    cards: Vec<Card>,
    offset: Vec2,
}

impl Container for Strip {
    type Node = Card;

    fn layout(&self) -> Option<Layout> {
        Some(Layout::Horizontal { spacing: 12.0 })
    }

    fn viewport(&self) -> Size {
        Size::new(320.0, 100.0)
    }

    fn child_count(&self) -> usize {
        self.cards.len()
    }

    fn child(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn set_unrestricted(&mut self) {}

    fn set_axis_enabled(&mut self, _axis: Axis, _enabled: bool) {}
}

fn main() {
    let cards = [60.0, 120.0, 90.0, 150.0]
        .into_iter()
        .map(|width| Card {
            width,
            sprite: Sprite::default(),
            button: Button::default(),
        })
        .collect();
    let mut controller = Controller::new(
        Strip {
            cards,
            offset: Vec2::ZERO,
        },
        CenteringOptions::default().with_center_scale(Scale3::splat(1.5)),
    );

    // The host delivers a click on the fourth card.
    controller.view().container().cards[3].button.press();

    for frame in 1..=40 {
        controller.tick(1.0 / 60.0);
        if frame % 10 == 0 {
            let strip = controller.view().container();
            let scales: Vec<f32> = strip.cards.iter().map(|c| c.sprite.scale().x).collect();
            println!("frame={frame} offset={:.2} scales={scales:.2?}", strip.offset.x);
        }
    }
}
