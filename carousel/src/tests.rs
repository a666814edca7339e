use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    /// Integer-valued floats keep exact ties reachable.
    fn gen_offset(&mut self, span: i64) -> f32 {
        let v = (self.next_u64() % (2 * span as u64 + 1)) as i64 - span;
        v as f32
    }
}

fn expected_nearest(table: &[f32], q: f32) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &p) in table.iter().enumerate() {
        let d = (p - q).abs();
        match best {
            Some(b) if (table[b] - q).abs() <= d => {}
            _ => best = Some(i),
        }
    }
    best
}

fn sizes(n: usize, width: f32, height: f32) -> Vec<Size> {
    (0..n).map(|_| Size::new(width, height)).collect()
}

/// Horizontal, 3 items of width 100, spacing 10, viewport 300.
fn three_item_engine(offset_x: f32) -> CenteringEngine {
    CenteringEngine::new(
        Some(Layout::Horizontal { spacing: 10.0 }),
        Size::new(300.0, 100.0),
        &sizes(3, 100.0, 100.0),
        Vec2::new(offset_x, 0.0),
        CenteringOptions::default(),
    )
}

#[test]
fn horizontal_table_matches_worked_example() {
    let e = three_item_engine(95.0);
    assert_eq!(e.positions().as_slice(), &[100.0, -10.0, -120.0]);
    assert_eq!(e.axis(), Some(Axis::X));
    assert_eq!(e.layout_mode(), Some(LayoutMode::Horizontal));
    assert_eq!(e.centered_index(), Some(0));
    assert_eq!(e.target_offset(), 100.0);
}

#[test]
fn horizontal_table_uses_neighbor_widths() {
    let table = PositionTable::build(
        &Layout::Horizontal { spacing: 4.0 },
        Size::new(200.0, 50.0),
        &[
            Size::new(40.0, 10.0),
            Size::new(80.0, 10.0),
            Size::new(20.0, 10.0),
        ],
    );
    // 100 - 20; then -(40 + 20 + 4); then -(10 + 40 + 4).
    assert_eq!(table.as_slice(), &[80.0, 16.0, -38.0]);
}

#[test]
fn grid_table_is_an_arithmetic_progression() {
    let table = PositionTable::build(
        &Layout::Grid {
            cell_size: Size::new(60.0, 60.0),
            spacing: Vec2::new(5.0, 7.0),
        },
        Size::new(400.0, 100.0),
        // Child sizes are ignored for grids.
        &[Size::new(1.0, 1.0), Size::new(999.0, 1.0), Size::new(3.0, 1.0)],
    );
    assert_eq!(table.as_slice(), &[170.0, 105.0, 40.0]);
}

#[test]
fn vertical_table_steps_downwards_on_y() {
    let mut e = CenteringEngine::new(
        Some(Layout::Vertical { spacing: 10.0 }),
        Size::new(100.0, 300.0),
        &[
            Size::new(100.0, 100.0),
            Size::new(100.0, 60.0),
            Size::new(100.0, 100.0),
        ],
        Vec2::new(5.0, 0.0),
        CenteringOptions::default(),
    );
    // -150 + 50; then +(30 + 50 + 10); then +(50 + 30 + 10).
    assert_eq!(e.positions().as_slice(), &[-100.0, -10.0, 80.0]);
    assert_eq!(e.axis(), Some(Axis::Y));
    assert_eq!(e.centered_index(), Some(1));

    e.request_center(2).unwrap();
    for _ in 0..200 {
        e.tick(1.0 / 60.0);
    }
    assert!((e.offset().y - 80.0).abs() < 1e-3);
    // The cross axis is never touched.
    assert_eq!(e.offset().x, 5.0);
}

#[test]
fn empty_children_build_empty_table() {
    let table = PositionTable::build(
        &Layout::Horizontal { spacing: 10.0 },
        Size::new(300.0, 100.0),
        &[],
    );
    assert!(table.is_empty());
    assert_eq!(table.nearest(12.0), None);
}

#[test]
fn nearest_matches_brute_force() {
    let mut rng = Lcg::new(0xC0FFEE);
    for _ in 0..500 {
        let n = rng.gen_range_usize(1, 12);
        let table: Vec<f32> = (0..n).map(|_| rng.gen_offset(50)).collect();
        let q = rng.gen_offset(60);

        let got = PositionTable::from_offsets(table.clone()).nearest(q).unwrap();
        let want = expected_nearest(&table, q).unwrap();
        assert_eq!(got.index, want, "table={table:?} q={q}");
        assert_eq!(got.offset, table[want]);
    }
}

#[test]
fn nearest_ties_resolve_to_lowest_index() {
    let table = PositionTable::from_offsets(alloc::vec![10.0, -10.0, 10.0]);
    assert_eq!(table.nearest(0.0).unwrap().index, 0);
    assert_eq!(table.nearest(10.0).unwrap().index, 0);
}

#[test]
fn find_nearest_prefers_closer_entry() {
    let mut e = three_item_engine(0.0);
    let n = e.find_nearest(95.0).unwrap();
    assert_eq!(n.index, 0);
    assert_eq!(n.offset, 100.0);
    assert_eq!(e.centered_index(), Some(0));

    let n = e.find_nearest(-70.0).unwrap();
    assert_eq!(n.index, 2);
    assert_eq!(e.target_offset(), -120.0);
}

#[test]
fn request_center_then_tick_moves_monotonically() {
    let mut e = three_item_engine(95.0);
    assert_eq!(e.request_center(2), Ok(-120.0));
    assert_eq!(e.centered_index(), Some(2));
    assert!(e.is_auto_centering());

    let mut last = e.offset().x;
    assert_eq!(last, 95.0);
    for _ in 0..300 {
        let off = e.tick(1.0 / 60.0).unwrap();
        assert!(off.x <= last, "moved away: {} -> {}", last, off.x);
        assert!(off.x >= -120.0, "overshot: {}", off.x);
        last = off.x;
    }
    assert!((last + 120.0).abs() < 1e-3);
    assert!(e.is_settled(1e-3));
}

#[test]
fn convergence_is_strictly_monotonic_until_settled() {
    for smoothing in [Smoothing::FrameLerp, Smoothing::ExponentialDecay] {
        assert_monotonic_convergence(smoothing);
    }
}

fn assert_monotonic_convergence(smoothing: Smoothing) {
    let mut rng = Lcg::new(7);
    for _ in 0..50 {
        let start = rng.gen_offset(400);
        let mut e = CenteringEngine::new(
            Some(Layout::Horizontal { spacing: 10.0 }),
            Size::new(300.0, 100.0),
            &sizes(8, 100.0, 100.0),
            Vec2::new(start, 0.0),
            CenteringOptions::default()
                .with_center_speed(6.0)
                .with_smoothing(smoothing),
        );
        let target = e.target_offset();
        let mut prev_dist = (e.offset().x - target).abs();
        for _ in 0..2000 {
            let x = e.tick(1.0 / 60.0).unwrap().x;
            let dist = (x - target).abs();
            assert!(dist <= prev_dist, "{smoothing:?} moved away at {x}");
            if prev_dist > 1e-3 {
                assert!(dist < prev_dist, "{smoothing:?} stalled at {x} (target {target})");
            }
            // Never crosses to the other side of the target.
            assert!(
                (start - target) * (x - target) >= 0.0,
                "{smoothing:?} overshot to {x} (target {target})"
            );
            prev_dist = dist;
        }
        assert!(prev_dist < 1e-3);
    }
}

#[test]
fn large_frame_snaps_without_overshoot() {
    let mut e = three_item_engine(95.0);
    e.request_center(1).unwrap();
    // speed * dt = 20 * 0.5 >= 1
    let off = e.tick(0.5).unwrap();
    assert_eq!(off.x, -10.0);
}

#[test]
fn exponential_decay_is_frame_rate_independent() {
    let opts = CenteringOptions::default()
        .with_center_speed(5.0)
        .with_smoothing(Smoothing::ExponentialDecay);
    let run = |frames: usize, dt: f32| {
        let mut e = CenteringEngine::new(
            Some(Layout::Horizontal { spacing: 10.0 }),
            Size::new(300.0, 100.0),
            &sizes(3, 100.0, 100.0),
            Vec2::new(95.0, 0.0),
            opts,
        );
        e.request_center(2).unwrap();
        for _ in 0..frames {
            e.tick(dt);
        }
        e.offset().x
    };
    // Half a second at 30 fps vs 120 fps.
    let slow = run(15, 1.0 / 30.0);
    let fast = run(60, 1.0 / 120.0);
    assert!((slow - fast).abs() < 0.01, "slow={slow} fast={fast}");
    assert!(slow > -120.0);
}

#[test]
fn scales_converge_to_center_and_unit() {
    let mut e = three_item_engine(95.0);
    e.request_center(1).unwrap();
    e.set_scale(2, Scale3::new(2.0, 0.5, 1.5));
    for _ in 0..300 {
        e.tick(1.0 / 60.0);
    }
    let center = e.center_scale();
    for (i, s) in e.scales().iter().enumerate() {
        let want = if i == 1 { center } else { Scale3::ONE };
        assert!((s.x - want.x).abs() < 1e-4, "i={i} s={s:?}");
        assert!((s.y - want.y).abs() < 1e-4, "i={i} s={s:?}");
        assert!((s.z - want.z).abs() < 1e-4, "i={i} s={s:?}");
    }
}

#[test]
fn scaling_disabled_leaves_scales_untouched() {
    let mut e = CenteringEngine::new(
        Some(Layout::Horizontal { spacing: 10.0 }),
        Size::new(300.0, 100.0),
        &sizes(3, 100.0, 100.0),
        Vec2::new(95.0, 0.0),
        CenteringOptions::default().with_scaling(false),
    );
    for _ in 0..10 {
        e.tick(1.0 / 60.0);
    }
    assert!(e.scales().iter().all(|s| *s == Scale3::ONE));
    assert!(e.offset().x > 99.0);
}

#[test]
fn request_center_is_idempotent() {
    let mut once = three_item_engine(95.0);
    once.request_center(2).unwrap();

    let mut twice = three_item_engine(95.0);
    twice.request_center(2).unwrap();
    twice.request_center(2).unwrap();

    assert_eq!(once.state(), twice.state());
}

#[test]
fn request_center_out_of_range_is_rejected_without_side_effects() {
    let mut e = three_item_engine(95.0);
    let before = e.state();
    assert_eq!(
        e.request_center(3),
        Err(CenterError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(e.state(), before);
}

#[test]
fn drag_suppresses_motion() {
    let mut e = three_item_engine(95.0);
    e.on_drag_start(Vec2::new(40.0, 0.0));
    assert_eq!(e.phase(), Phase::Dragging);
    assert!(!e.is_auto_centering());

    e.request_center(2).unwrap();
    for _ in 0..30 {
        assert_eq!(e.tick(1.0 / 60.0), None);
        assert_eq!(e.offset().x, 40.0);
    }
    assert_eq!(e.target_offset(), -120.0);
}

#[test]
fn reenabling_auto_centering_mid_drag_does_not_move() {
    let mut e = three_item_engine(95.0);
    e.on_drag_start(Vec2::new(40.0, 0.0));
    e.request_center(2).unwrap();
    e.set_auto_centering(true);
    for _ in 0..10 {
        assert_eq!(e.tick(1.0 / 60.0), None);
    }
    assert_eq!(e.offset().x, 40.0);
    assert_eq!(e.phase(), Phase::Dragging);

    e.on_drag_end(Vec2::new(40.0, 0.0));
    assert!(e.tick(1.0 / 60.0).is_some());
}

#[test]
fn restored_drag_state_does_not_move() {
    let mut e = three_item_engine(95.0);
    e.restore_state(CenterState {
        offset: Vec2::new(40.0, 0.0),
        centered_index: Some(2),
        target_offset: -120.0,
        auto_centering: true,
        scaling: true,
        dragging: true,
    });
    assert_eq!(e.tick(1.0 / 60.0), None);
    assert_eq!(e.offset().x, 40.0);
}

#[test]
fn grid_engine_glides_to_requested_cell() {
    let mut e = CenteringEngine::new(
        Some(Layout::Grid {
            cell_size: Size::new(60.0, 60.0),
            spacing: Vec2::new(5.0, 7.0),
        }),
        Size::new(400.0, 100.0),
        &sizes(4, 60.0, 60.0),
        Vec2::new(160.0, 12.0),
        CenteringOptions::default(),
    );
    assert_eq!(e.axis(), Some(Axis::X));
    assert_eq!(e.layout_mode(), Some(LayoutMode::Grid));
    assert_eq!(e.positions().as_slice(), &[170.0, 105.0, 40.0, -25.0]);
    assert_eq!(e.centered_index(), Some(0));

    e.request_center(3).unwrap();
    let mut last = e.offset().x;
    for _ in 0..300 {
        let off = e.tick(1.0 / 60.0).unwrap();
        assert!(off.x <= last && off.x >= -25.0, "x={}", off.x);
        assert_eq!(off.y, 12.0);
        last = off.x;
    }
    assert!((last + 25.0).abs() < 1e-3);
    assert!((e.scales()[3].x - e.center_scale().x).abs() < 1e-4);
}

#[test]
fn drag_updates_centered_index_for_scaling() {
    let mut e = three_item_engine(95.0);
    e.on_drag_start(Vec2::new(90.0, 0.0));
    assert_eq!(e.centered_index(), Some(0));
    e.on_drag(Vec2::new(-20.0, 0.0));
    assert_eq!(e.centered_index(), Some(1));

    for _ in 0..300 {
        e.tick(1.0 / 60.0);
    }
    assert!((e.scales()[1].x - e.center_scale().x).abs() < 1e-4);
    assert_eq!(e.offset().x, -20.0);
}

#[test]
fn drag_end_glides_to_nearest() {
    let mut e = three_item_engine(95.0);
    e.on_drag_start(Vec2::new(60.0, 0.0));
    e.on_drag(Vec2::new(-80.0, 0.0));
    let n = e.on_drag_end(Vec2::new(-80.0, 0.0)).unwrap();
    assert_eq!(n.index, 2);
    assert!(e.is_auto_centering());
    assert_eq!(e.phase(), Phase::Animating);

    for _ in 0..300 {
        e.tick(1.0 / 60.0);
    }
    assert!((e.offset().x + 120.0).abs() < 1e-3);
    assert_eq!(e.phase(), Phase::Settled);
}

#[test]
fn request_during_drag_applies_after_drag_end_recomputes() {
    let mut e = three_item_engine(95.0);
    e.on_drag_start(Vec2::new(100.0, 0.0));
    e.request_center(2).unwrap();
    assert_eq!(e.centered_index(), Some(2));
    // Drag end derives the target from where the drag stopped.
    e.on_drag_end(Vec2::new(100.0, 0.0));
    assert_eq!(e.centered_index(), Some(0));
    assert_eq!(e.target_offset(), 100.0);
}

#[test]
fn missing_layout_degrades_to_no_ops() {
    let mut e = CenteringEngine::new(
        None,
        Size::new(300.0, 100.0),
        &sizes(3, 100.0, 100.0),
        Vec2::new(95.0, 3.0),
        CenteringOptions::default(),
    );
    assert!(e.is_empty());
    assert_eq!(e.axis(), None);
    assert_eq!(e.centered_index(), None);
    assert_eq!(e.find_nearest(0.0), None);
    assert_eq!(e.tick(1.0 / 60.0), None);
    assert_eq!(e.offset(), Vec2::new(95.0, 3.0));
    assert_eq!(e.on_drag_end(Vec2::new(1.0, 2.0)), None);
    assert!(e.request_center(0).is_err());
    assert_eq!(e.phase(), Phase::Settled);
}

#[test]
fn layout_without_children_does_not_move() {
    let mut e = CenteringEngine::new(
        Some(Layout::Horizontal { spacing: 10.0 }),
        Size::new(300.0, 100.0),
        &[],
        Vec2::new(42.0, 0.0),
        CenteringOptions::default(),
    );
    assert_eq!(e.centered_index(), None);
    assert_eq!(e.tick(1.0 / 60.0), None);
    assert_eq!(e.offset().x, 42.0);
}

#[test]
fn invalid_center_speed_is_rejected() {
    let opts = CenteringOptions::default().with_center_speed(-1.0);
    assert_eq!(opts.center_speed, DEFAULT_CENTER_SPEED);

    let mut e = three_item_engine(95.0);
    assert!(!e.set_center_speed(f32::NAN));
    assert!(!e.set_center_speed(0.0));
    assert_eq!(e.center_speed(), DEFAULT_CENTER_SPEED);
    assert!(e.set_center_speed(8.0));
    assert_eq!(e.center_speed(), 8.0);

    let raw = CenteringOptions {
        center_speed: f32::INFINITY,
        ..CenteringOptions::default()
    };
    let e = CenteringEngine::new(
        Some(Layout::Horizontal { spacing: 10.0 }),
        Size::new(300.0, 100.0),
        &sizes(3, 100.0, 100.0),
        Vec2::ZERO,
        raw,
    );
    assert_eq!(e.center_speed(), DEFAULT_CENTER_SPEED);
}

#[test]
fn zero_or_negative_dt_is_a_no_op_step() {
    let mut e = three_item_engine(95.0);
    e.request_center(2).unwrap();
    assert_eq!(e.tick(0.0).unwrap().x, 95.0);
    assert_eq!(e.tick(-1.0).unwrap().x, 95.0);
}

#[test]
fn state_round_trips_through_restore() {
    let mut a = three_item_engine(95.0);
    a.on_drag_start(Vec2::new(-30.0, 0.0));
    a.on_drag_end(Vec2::new(-30.0, 0.0));
    a.tick(1.0 / 60.0);
    let snap = a.state();

    let mut b = three_item_engine(0.0);
    b.restore_state(snap);
    assert_eq!(b.state(), snap);
    assert_eq!(b.centered_index(), Some(1));
}

#[test]
fn restore_drops_out_of_range_centered_index() {
    let mut e = three_item_engine(95.0);
    e.restore_state(CenterState {
        offset: Vec2::new(-115.0, 0.0),
        centered_index: Some(9),
        target_offset: 555.0,
        auto_centering: true,
        scaling: true,
        dragging: false,
    });
    assert_eq!(e.centered_index(), Some(2));
    assert_eq!(e.target_offset(), -120.0);
}

#[test]
fn lerp_clamps_factor() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
    assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
    assert_eq!(lerp(10.0, -10.0, 0.25), 5.0);
}

#[test]
fn vec2_axis_helpers() {
    let v = Vec2::new(1.0, 2.0);
    assert_eq!(v.get(Axis::X), 1.0);
    assert_eq!(v.get(Axis::Y), 2.0);
    assert_eq!(v.with(Axis::Y, 9.0), Vec2::new(1.0, 9.0));
    assert_eq!(LayoutMode::Grid.axis(), Axis::X);
}
