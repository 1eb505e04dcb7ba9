use tree_core::constants::*;
use tree_core::morph::*;

#[test]
fn damp_approaches_target_without_overshoot() {
    let mut v = 0.0;
    let mut last = v;
    for _ in 0..600 {
        v = damp(v, 1.0, 1.5, 1.0 / 60.0);
        assert!(v >= last);
        assert!(v <= 1.0);
        last = v;
    }
    assert!(v > 0.99);
}

#[test]
fn damp_gap_strictly_shrinks() {
    for (start, target) in [(0.0f32, 1.0f32), (1.0, 0.0)] {
        let mut v = start;
        let mut gap = (target - v).abs();
        for _ in 0..240 {
            v = damp(v, target, 1.0, 1.0 / 60.0);
            let next_gap = (target - v).abs();
            assert!(next_gap < gap, "gap stuck at {next_gap}");
            gap = next_gap;
        }
    }
}

#[test]
fn damp_works_downwards_too() {
    let mut v = 1.0;
    for _ in 0..120 {
        let next = damp(v, 0.0, 1.2, 1.0 / 60.0);
        assert!(next <= v && next >= 0.0);
        v = next;
    }
}

#[test]
fn damp_ignores_bad_deltas() {
    assert_eq!(damp(0.3, 1.0, 1.5, -0.5), 0.3);
    assert_eq!(damp(0.3, 1.0, 1.5, f32::NAN), 0.3);
    assert_eq!(damp(0.3, 1.0, 1.5, f32::INFINITY), 0.3);
    assert_eq!(damp(0.3, 1.0, 1.5, 0.0), 0.3);
}

#[test]
fn damp_is_frame_rate_independent() {
    let mut fine = 0.0;
    for _ in 0..120 {
        fine = damp(fine, 1.0, 1.5, 1.0 / 120.0);
    }
    let mut coarse = 0.0;
    for _ in 0..30 {
        coarse = damp(coarse, 1.0, 1.5, 1.0 / 30.0);
    }
    assert!((fine - coarse).abs() < 1e-3);
}

#[test]
fn progress_stays_in_unit_range() {
    let mut p = MorphProgress::new(FOLIAGE_DAMPING);
    for _ in 0..1000 {
        p.step(1.0, 0.5);
        assert!((0.0..=1.0).contains(&p.value()));
    }
    // out-of-range targets are clamped
    p.step(5.0, 10.0);
    assert!(p.value() <= 1.0);
    let p = MorphProgress::with_value(1.0, -3.0);
    assert_eq!(p.value(), 0.0);
}

#[test]
fn faster_rates_lead_after_the_same_time() {
    let mut fast = MorphProgress::new(FOLIAGE_DAMPING);
    let mut slow = MorphProgress::new(RIBBON_DAMPING);
    for _ in 0..30 {
        fast.step(1.0, 1.0 / 60.0);
        slow.step(1.0, 1.0 / 60.0);
    }
    assert!(fast.value() > slow.value());
}

#[test]
fn hover_scale_grows_smoothly_to_peak() {
    let mut h = HoverScale::new(PHOTO_HOVER_SCALE, PHOTO_HOVER_DAMPING);
    assert_eq!(h.value(), 1.0);
    h.pointer_enter();
    let mut last = h.value();
    for _ in 0..300 {
        let v = h.step(1.0 / 60.0);
        assert!(v >= last);
        // no jumps between frames
        assert!(v - last < 0.1);
        last = v;
    }
    assert!((last - 1.8).abs() < 0.01);

    h.pointer_leave();
    for _ in 0..300 {
        h.step(1.0 / 60.0);
    }
    assert!((h.value() - 1.0).abs() < 0.01);
}
