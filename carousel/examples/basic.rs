// Example: drive the engine the way a UI adapter would (drag, release, click, frames).
use carousel::{CenteringEngine, CenteringOptions, Layout, Size, Vec2};

fn main() {
    let sizes = vec![Size::new(100.0, 100.0); 5];
    let mut engine = CenteringEngine::new(
        Some(Layout::Horizontal { spacing: 10.0 }),
        Size::new(300.0, 120.0),
        &sizes,
        Vec2::ZERO,
        CenteringOptions::default(),
    );
    println!("positions={:?}", engine.positions().as_slice());
    println!("initial centered={:?}", engine.centered_index());

    // The user drags the content to the left and lets go.
    engine.on_drag_start(Vec2::new(-40.0, 0.0));
    engine.on_drag(Vec2::new(-150.0, 0.0));
    engine.on_drag_end(Vec2::new(-150.0, 0.0));

    for frame in 1..=30 {
        let off = engine.tick(1.0 / 60.0);
        if frame % 10 == 0 {
            println!(
                "frame={frame} off={:?} phase={:?} scale={:?}",
                off,
                engine.phase(),
                engine.scale(engine.centered_index().unwrap_or(0))
            );
        }
    }

    // Simulate a click on the last item.
    let last = engine.len() - 1;
    match engine.request_center(last) {
        Ok(target) => println!("click -> index {last} target {target}"),
        Err(err) => println!("click rejected: {err}"),
    }
    if let Err(err) = engine.request_center(99) {
        println!("click rejected: {err}");
    }

    while !engine.is_settled(0.01) {
        engine.tick(1.0 / 60.0);
    }
    println!("done: state={:?}", engine.state());
}
