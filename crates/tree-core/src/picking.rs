use crate::state::Camera;
use glam::{Vec3, Vec4};

/// Distance along a normalized ray to the first hit with a sphere, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // Origin inside the sphere
    let t = -b + sq;
    (t >= 0.0).then_some(0.0)
}

/// World-space ray through pixel `(sx, sy)` of a `width` x `height` viewport.
///
/// Returns `(ray_origin, ray_direction)`.
pub fn screen_ray(camera: &Camera, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
    let width = width.max(1.0);
    let height = height.max(1.0);
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize_or_zero();
    (ro, rd)
}
