// Host-side tests for the scene aggregate and its per-frame ordering.

mod common;

use common::core::config::FxParams;
use common::core::constants::*;
use common::core::scene::*;
use common::core::surface::Viewport;
use common::{DrawOp, FailingSurface, NullSurface, RecordingSurface};
use glam::Vec2;

fn scene(reduced_motion: bool) -> Scene {
    let mut s = Scene::new(FxParams::default(), 42, reduced_motion);
    s.resize(Viewport::from_css(800.0, 600.0, 1.0));
    s
}

fn run(scene: &mut Scene, ticks: usize) {
    let mut surface = NullSurface;
    for _ in 0..ticks {
        scene.tick(&mut surface).unwrap();
    }
}

#[test]
fn frame_order_is_fade_then_ribbons_then_particles() {
    let mut s = scene(false);
    run(&mut s, 120);
    assert!(!s.ribbons().is_empty() && !s.particles().is_empty());

    let mut surface = RecordingSurface::default();
    s.tick(&mut surface).unwrap();
    assert!(matches!(surface.ops[0], DrawOp::Rect { .. }));
    let last_polyline = surface
        .ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::Polyline { .. }))
        .unwrap();
    let first_disc = surface
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Disc { .. }))
        .unwrap();
    assert!(last_polyline < first_disc);
    assert_eq!(surface.polylines().count(), s.ribbons().len() * 2);
    assert_eq!(surface.discs().count(), s.particles().len() * 2);
}

#[test]
fn fade_covers_the_logical_surface() {
    let mut s = scene(false);
    let mut surface = RecordingSurface::default();
    s.tick(&mut surface).unwrap();
    match &surface.ops[0] {
        DrawOp::Rect { size, color } => {
            assert_eq!(*size, Vec2::new(800.0, 600.0));
            assert!((color.a - FADE_ALPHA).abs() < 1e-6);
            assert_eq!([color.r, color.g, color.b], BACKGROUND_RGB);
        }
        other => panic!("unexpected first op {other:?}"),
    }
}

#[test]
fn particle_pool_stays_under_ceiling() {
    let mut s = scene(false);
    let mut surface = NullSurface;
    for _ in 0..2000 {
        s.tick(&mut surface).unwrap();
        assert!(s.particles().len() <= s.params().max_particles);
    }
}

#[test]
fn disabling_particles_drains_pool_monotonically() {
    let mut s = scene(false);
    run(&mut s, 300);
    assert!(!s.particles().is_empty());
    assert!(!s.toggle(Feature::Particles));

    let mut prev = s.particles().len();
    let mut surface = NullSurface;
    for _ in 0..2000 {
        s.tick(&mut surface).unwrap();
        assert!(s.particles().len() <= prev);
        prev = s.particles().len();
    }
    assert!(s.particles().is_empty());
}

#[test]
fn disabling_trails_stops_all_ribbon_emission() {
    let mut s = scene(false);
    run(&mut s, 60);
    s.set_feature(Feature::Trails, false);
    let mut prev = s.ribbons().len();
    let mut surface = NullSurface;
    for i in 0..400 {
        s.pointer_moved(Vec2::new(100.0 + i as f32, 200.0));
        s.tick(&mut surface).unwrap();
        assert!(s.ribbons().len() <= prev);
        prev = s.ribbons().len();
    }
    assert!(s.ribbons().is_empty());
}

#[test]
fn disabling_parallax_zeroes_offset_on_next_frame() {
    let mut s = scene(false);
    s.pointer_moved(Vec2::new(800.0, 0.0));
    run(&mut s, 50);
    assert_ne!(s.camera_offset(), Vec2::ZERO);

    s.toggle(Feature::Parallax);
    run(&mut s, 1);
    assert_eq!(s.camera_offset(), Vec2::ZERO);
}

#[test]
fn parallax_drifts_toward_pointer_target() {
    let mut s = scene(false);
    s.pointer_moved(Vec2::new(800.0, 600.0));
    run(&mut s, 1);
    let first = s.camera_offset();
    assert!((first.x - 0.5 * PARALLAX_SCALE_X * PARALLAX_SMOOTHING).abs() < 1e-5);
    assert!((first.y - 0.5 * PARALLAX_SCALE_Y * PARALLAX_SMOOTHING).abs() < 1e-5);
    run(&mut s, 400);
    let settled = s.camera_offset();
    assert!((settled.x - 0.5 * PARALLAX_SCALE_X).abs() < 1e-2);
    assert!((settled.y - 0.5 * PARALLAX_SCALE_Y).abs() < 1e-2);
}

#[test]
fn pointer_move_emits_low_power_ribbon_when_up() {
    let mut s = scene(true);
    s.set_feature(Feature::Trails, true);
    assert!(s.pointer_moved(Vec2::new(0.2 * 800.0, 0.5 * 600.0)));
    assert!(s.pointer_moved(Vec2::new(0.8 * 800.0, 0.5 * 600.0)));
    assert!(s.ribbons().len() >= 1);
    assert!(s
        .ribbons()
        .iter()
        .all(|r| (r.power - POWER_POINTER_UP).abs() < 1e-6));
    let v = s.pointer().velocity;
    assert!((v.x - 0.6).abs() < 1e-5 && v.y.abs() < 1e-6);
}

#[test]
fn pointer_move_while_down_emits_higher_power_ribbon() {
    let mut up = scene(true);
    up.set_feature(Feature::Trails, true);
    up.pointer_moved(Vec2::new(160.0, 300.0));
    up.pointer_moved(Vec2::new(640.0, 300.0));

    let mut down = scene(true);
    down.set_feature(Feature::Trails, true);
    down.pointer_pressed();
    down.pointer_moved(Vec2::new(160.0, 300.0));
    down.pointer_moved(Vec2::new(640.0, 300.0));

    let up_power = up.ribbons().iter().map(|r| r.power).fold(0.0, f32::max);
    let down_power = down.ribbons().iter().map(|r| r.power).fold(0.0, f32::max);
    assert!(down_power > up_power);
    assert!((down_power - POWER_POINTER_DOWN).abs() < 1e-6);
}

#[test]
fn each_move_event_emits_exactly_one_ribbon() {
    let mut s = scene(true);
    s.set_feature(Feature::Trails, true);
    s.pointer_moved(Vec2::new(0.0, 0.0));
    s.pointer_moved(Vec2::new(800.0, 600.0));
    assert_eq!(s.ribbons().len(), 2);
    // emitted at raw coordinates, not normalized ones
    assert!(s
        .ribbons()
        .iter()
        .any(|r| r.head() == Some(Vec2::new(800.0, 600.0))));
}

#[test]
fn press_and_release_only_flip_down() {
    let mut s = scene(false);
    let before = s.pointer().position;
    s.pointer_pressed();
    assert!(s.pointer().down);
    assert_eq!(s.pointer().position, before);
    assert!(s.ribbons().is_empty());
    s.pointer_released();
    assert!(!s.pointer().down);
}

#[test]
fn pointer_events_on_empty_surface_are_ignored() {
    let mut s = Scene::new(FxParams::default(), 1, false);
    let before = *s.pointer();
    assert!(!s.pointer_moved(Vec2::new(10.0, 10.0)));
    assert_eq!(*s.pointer(), before);
    assert!(s.ribbons().is_empty());

    let mut sized = scene(false);
    assert!(!sized.pointer_moved(Vec2::new(f32::NAN, 3.0)));
}

#[test]
fn reduced_motion_disables_trails_and_particles_up_front() {
    let mut s = scene(true);
    let flags = s.flags();
    assert!(!flags.trails && !flags.particles);

    // five seconds at 60 Hz, with the pointer moving throughout
    let mut surface = NullSurface;
    for i in 0..300 {
        s.pointer_moved(Vec2::new((i % 800) as f32, 300.0));
        s.tick(&mut surface).unwrap();
        assert!(s.particles().is_empty());
        assert!(s.ribbons().is_empty());
    }
}

#[test]
fn resize_rescales_backing_store_but_not_entities() {
    let mut s = scene(false);
    run(&mut s, 30);
    let particles: Vec<_> = s.particles().iter().map(|p| p.position).collect();
    let ribbons: Vec<_> = s.ribbons().iter().map(|r| r.head()).collect();

    let vp = Viewport::from_css(1024.5, 700.9, 1.5);
    s.resize(vp);
    assert_eq!(s.viewport().width, 1024.0);
    assert_eq!(s.viewport().height, 700.0);
    assert_eq!(s.viewport().backing_width(), 1536);
    assert_eq!(s.viewport().backing_height(), 1050);

    let after: Vec<_> = s.particles().iter().map(|p| p.position).collect();
    let after_ribbons: Vec<_> = s.ribbons().iter().map(|r| r.head()).collect();
    assert_eq!(particles, after);
    assert_eq!(ribbons, after_ribbons);
}

#[test]
fn freeze_pauses_figure_only() {
    let mut s = scene(false);
    run(&mut s, 30);
    assert!(s.toggle_freeze());
    assert!(s.is_frozen());
    let tick = s.tick_count();
    run(&mut s, 30);
    assert_eq!(s.tick_count(), tick + 30);
    assert!(!s.particles().is_empty());
    assert!(!s.toggle_freeze());
}

#[test]
fn failing_surface_drops_the_frame_but_simulation_advances() {
    let mut s = scene(false);
    run(&mut s, 60);
    let before: Vec<Vec2> = s.particles().iter().map(|p| p.position).collect();
    let mut surface = FailingSurface::default();
    for _ in 0..10 {
        assert!(s.tick(&mut surface).is_err());
    }
    assert_eq!(s.tick_count(), 70);
    assert!(surface.calls >= 10);
    let after: Vec<Vec2> = s.particles().iter().map(|p| p.position).collect();
    assert_ne!(before, after);

    // the next frame on a healthy surface draws normally
    let mut healthy = RecordingSurface::default();
    assert!(s.tick(&mut healthy).is_ok());
    assert!(!healthy.ops.is_empty());
}

#[test]
fn toggles_report_new_state_and_labels() {
    let mut s = scene(false);
    assert!(!s.toggle(Feature::Trails));
    assert!(!s.flags().trails);
    assert!(s.toggle(Feature::Trails));
    assert_eq!(Feature::Trails.label(true), "Qi Trails: On");
    assert_eq!(Feature::Particles.label(false), "Particles: Off");
    assert_eq!(Feature::Parallax.label(true), "Parallax: On");
}

#[test]
fn pointer_flood_stays_under_ribbon_ceiling() {
    let mut s = scene(false);
    let mut surface = NullSurface;
    for frame in 0..180 {
        for i in 0..8 {
            s.pointer_moved(Vec2::new(((frame * 8 + i) % 800) as f32, 300.0));
        }
        s.tick(&mut surface).unwrap();
        assert!(s.ribbons().len() <= MAX_RIBBONS);
    }

    for i in 0..100_000 {
        s.pointer_moved(Vec2::new((i % 800) as f32, 200.0));
    }
    assert_eq!(s.ribbons().len(), MAX_RIBBONS);
}

#[test]
fn ribbon_ceiling_follows_params() {
    let params = FxParams {
        max_ribbons: 5,
        ..FxParams::default()
    };
    let mut s = Scene::new(params, 7, false);
    s.resize(Viewport::from_css(800.0, 600.0, 1.0));
    for i in 0..50 {
        s.pointer_moved(Vec2::new(i as f32, 10.0));
    }
    assert_eq!(s.ribbons().len(), 5);
}
