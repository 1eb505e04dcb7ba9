// Host-side tests for the point samplers.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::geometry::*;

const N: usize = 20_000;

#[test]
fn sphere_points_stay_inside_radius() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N {
        let p = random_sphere_point(&mut rng, 25.0);
        assert!(p.length() <= 25.0 + 1e-3, "{p:?} outside sphere");
    }
}

#[test]
fn sphere_points_are_uniform_by_volume() {
    // (r / R)^3 is uniform in [0, 1] for a volume-uniform sampler
    let mut rng = StdRng::seed_from_u64(2);
    let radius = 10.0;
    let mut bins = [0usize; 10];
    for _ in 0..N {
        let r = random_sphere_point(&mut rng, radius).length() / radius;
        let b = ((r * r * r) * 10.0).floor().min(9.0) as usize;
        bins[b] += 1;
    }
    let expected = N as f32 / 10.0;
    for (i, &count) in bins.iter().enumerate() {
        let dev = (count as f32 - expected).abs() / expected;
        assert!(dev < 0.1, "bin {i} has {count}, expected about {expected}");
    }
}

#[test]
fn cone_points_respect_height_and_taper() {
    let mut rng = StdRng::seed_from_u64(3);
    let (h, r) = (11.0, 5.0);
    let mut below_middle = 0;
    for _ in 0..N {
        let p = cone_point(&mut rng, h, r);
        assert!(p.y >= -h / 2.0 - 1e-4 && p.y <= h / 2.0 + 1e-4);
        let horizontal = (p.x * p.x + p.z * p.z).sqrt();
        assert!(horizontal <= cone_radius_at(p.y, h, r) + 1e-3);
        if p.y < 0.0 {
            below_middle += 1;
        }
    }
    // u^0.2 piles samples towards the base
    assert!(below_middle as f32 / N as f32 > 0.8);
}

#[test]
fn degenerate_cone_collapses_to_axis() {
    let mut rng = StdRng::seed_from_u64(4);
    let p = cone_point(&mut rng, 11.0, 0.0);
    assert!(p.x.abs() < 1e-6 && p.z.abs() < 1e-6);
}

#[test]
fn spiral_runs_from_base_to_tip() {
    let base = spiral_point(0.0, 11.0, 5.2, 6.5);
    assert!((base - Vec3::new(5.2, -5.5, 0.0)).length() < 1e-4);
    let tip = spiral_point(1.0, 11.0, 5.2, 6.5);
    assert!((tip - Vec3::new(0.0, 5.5, 0.0)).length() < 1e-4);
}

#[test]
fn spiral_radius_shrinks_and_height_rises() {
    let mut last_y = f32::MIN;
    let mut last_r = f32::MAX;
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        let p = spiral_point(t, 11.0, 5.2, 6.5);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!(p.y > last_y);
        assert!(r <= last_r + 1e-4);
        last_y = p.y;
        last_r = r;
    }
}

#[test]
fn spiral_angle_strictly_increases() {
    let turns = 6.5;
    let mut last_angle = f32::MIN;
    let mut raw_last = 0.0f32;
    let mut unwrapped = 0.0f32;
    // t = 1 is the tip, where the angle is undefined
    for i in 0..100 {
        let t = i as f32 / 100.0;
        let p = spiral_point(t, 11.0, 5.2, turns);
        let raw = p.z.atan2(p.x);
        if i > 0 {
            let mut step = raw - raw_last;
            while step < -std::f32::consts::PI {
                step += std::f32::consts::TAU;
            }
            while step > std::f32::consts::PI {
                step -= std::f32::consts::TAU;
            }
            unwrapped += step;
        }
        raw_last = raw;
        assert!(unwrapped > last_angle, "angle stalled at t={t}");
        assert!((unwrapped - t * turns * std::f32::consts::TAU).abs() < 1e-2);
        last_angle = unwrapped;
    }
}

#[test]
fn wavy_spiral_stays_near_spiral() {
    for i in 0..=50 {
        let t = i as f32 / 50.0;
        let d = wavy_spiral_point(t, 11.0, 5.2, 3.5) - spiral_point(t, 11.0, 5.2, 3.5);
        assert!(d.length() <= 0.15 * 3f32.sqrt() + 1e-4);
    }
}

#[test]
fn swirl_skips_points_on_the_axis() {
    let p = Vec3::new(0.0, 3.0, 0.0);
    assert_eq!(swirl(p, 1.3), p);
}

#[test]
fn swirl_preserves_radius_and_height() {
    let p = Vec3::new(3.0, 1.5, -4.0);
    let q = swirl(p, 0.7);
    assert!((q.y - p.y).abs() < 1e-6);
    let r0 = (p.x * p.x + p.z * p.z).sqrt();
    let r1 = (q.x * q.x + q.z * q.z).sqrt();
    assert!((r0 - r1).abs() < 1e-4);
    // zero angle is the identity
    assert!((swirl(p, 0.0) - p).length() < 1e-4);
}

#[test]
fn push_out_scales_only_horizontal_offset() {
    let p = push_out(Vec3::new(1.0, 2.0, -3.0), 1.2);
    assert!((p - Vec3::new(1.2, 2.0, -3.6)).length() < 1e-5);
}

#[test]
fn catmull_rom_passes_through_endpoints() {
    let pts = [
        Vec3::ZERO,
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(3.0, 1.0, 1.0),
    ];
    assert!((catmull_rom(&pts, 0.0) - pts[0]).length() < 1e-5);
    assert!((catmull_rom(&pts, 1.0) - pts[3]).length() < 1e-5);
    // interior knots are interpolated too
    assert!((catmull_rom(&pts, 1.0 / 3.0) - pts[1]).length() < 1e-4);
    assert_eq!(catmull_rom(&[], 0.5), Vec3::ZERO);
}

#[test]
fn lerp_hits_both_ends() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}
