//! Procedural point generators for the scattered cloud and the tree silhouette.
//!
//! All samplers take the random source explicitly so callers decide whether a
//! layout is reproducible (seeded) or not.

use crate::constants::{CONE_DEPTH_EXPONENT, RIBBON_NOISE_AMP, RIBBON_NOISE_FREQ};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Uniform point inside a sphere, uniform by volume (cube-root radius).
pub fn random_sphere_point<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = TAU * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let r = rng.gen::<f32>().cbrt() * radius;
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

/// Point inside a tip-up cone centred on the origin.
///
/// Distance from the tip is `height * u^0.2`, which piles samples up near the
/// base. Within the slice the radius uses `sqrt(u)` for uniform areal density.
pub fn cone_point<R: Rng + ?Sized>(rng: &mut R, height: f32, bottom_radius: f32) -> Vec3 {
    let d = height * rng.gen::<f32>().powf(CONE_DEPTH_EXPONENT);
    let y = height / 2.0 - d;
    let r_at_height = if height > 0.0 {
        (d / height) * bottom_radius
    } else {
        0.0
    };
    let r = r_at_height * rng.gen::<f32>().sqrt();
    let theta = rng.gen::<f32>() * TAU;
    Vec3::new(r * theta.cos(), y, r * theta.sin())
}

/// Taper radius of the cone at height `y`.
#[inline]
pub fn cone_radius_at(y: f32, height: f32, bottom_radius: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let d = (height / 2.0 - y).clamp(0.0, height);
    d / height * bottom_radius
}

/// Helix from the base (`t = 0`, full radius) to the tip (`t = 1`, zero radius).
pub fn spiral_point(t: f32, height: f32, bottom_radius: f32, turns: f32) -> Vec3 {
    let y = (t - 0.5) * height;
    let r = (1.0 - t) * bottom_radius;
    let angle = t * turns * TAU;
    Vec3::new(r * angle.cos(), y, r * angle.sin())
}

/// Spiral point with low-amplitude sinusoidal noise so ribbons are not a perfect helix.
pub fn wavy_spiral_point(t: f32, height: f32, bottom_radius: f32, turns: f32) -> Vec3 {
    let base = spiral_point(t, height, bottom_radius, turns);
    let wave = Vec3::new(
        (t * RIBBON_NOISE_FREQ).sin(),
        (t * RIBBON_NOISE_FREQ * 1.5).cos(),
        (t * RIBBON_NOISE_FREQ * 0.5).sin(),
    ) * RIBBON_NOISE_AMP;
    base + wave
}

/// Scale the horizontal (XZ) offset of a point, leaving its height untouched.
#[inline]
pub fn push_out(p: Vec3, factor: f32) -> Vec3 {
    Vec3::new(p.x * factor, p.y, p.z * factor)
}

/// Rotate a point about the vertical axis by `angle`.
///
/// Points on the axis are returned unchanged; their angle is undefined.
pub fn swirl(p: Vec3, angle: f32) -> Vec3 {
    let radius = (p.x * p.x + p.z * p.z).sqrt();
    if radius <= f32::EPSILON {
        return p;
    }
    let a = p.z.atan2(p.x) + angle;
    Vec3::new(radius * a.cos(), p.y, radius * a.sin())
}

/// Uniform Catmull–Rom sample at `u` in `[0, 1]` across the whole polyline.
pub fn catmull_rom(points: &[Vec3], u: f32) -> Vec3 {
    match points.len() {
        0 => return Vec3::ZERO,
        1 => return points[0],
        _ => {}
    }
    let segments = (points.len() - 1) as f32;
    let scaled = u.clamp(0.0, 1.0) * segments;
    let i = (scaled.floor() as usize).min(points.len() - 2);
    let t = scaled - i as f32;

    let p1 = points[i];
    let p2 = points[i + 1];
    let p0 = if i == 0 { p1 * 2.0 - p2 } else { points[i - 1] };
    let p3 = if i + 2 < points.len() {
        points[i + 2]
    } else {
        p2 * 2.0 - p1
    };

    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

/// Random Euler seed with each angle drawn from `[0, PI)`.
pub fn random_euler<R: Rng + ?Sized>(rng: &mut R, with_z: bool) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
        if with_z { rng.gen::<f32>() * PI } else { 0.0 },
    )
}
