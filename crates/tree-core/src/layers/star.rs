use super::{BuildContext, Layer, LayerFrame};
use crate::constants::*;
use crate::geometry::{lerp, lerp_vec3, random_sphere_point};
use crate::instance::{FrameOutput, InstanceRaw, MeshKind, PointLight, Transform};
use crate::morph::MorphProgress;
use crate::seed::{stream_rng, Stream};
use crate::theme::Rgb;
use glam::Vec3;

/// The star tumbles freely while scattered and its orientation is integrated
/// frame by frame, so unlike other layers it keeps rotation state.
pub struct StarLayer {
    scatter: Vec3,
    tree: Vec3,
    rotation: Vec3,
    color: Rgb,
    light_color: Rgb,
    progress: MorphProgress,
}

impl Default for StarLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Emissive pulse between 0.5 and 2.5.
#[inline]
pub fn star_emissive(t: f32) -> f32 {
    let pulse = ((t * 2.5).sin() + 1.0) * 0.5;
    0.5 + pulse * 2.0
}

/// Advance the star orientation by one frame.
pub fn step_star_rotation(rotation: Vec3, p: f32, dt: f32) -> Vec3 {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    if p < STAR_SETTLE_THRESHOLD {
        rotation + Vec3::new(0.5, 0.3, 0.2) * dt
    } else {
        let settle = (dt * 2.0).min(1.0);
        Vec3::new(
            lerp(rotation.x, 0.0, settle),
            rotation.y + dt * 0.5,
            lerp(rotation.z, 0.0, settle),
        )
    }
}

impl StarLayer {
    pub fn new() -> Self {
        Self {
            scatter: Vec3::ZERO,
            tree: Vec3::new(0.0, TREE_APEX_Y, 0.0),
            rotation: Vec3::ZERO,
            color: Rgb::default(),
            light_color: Rgb::default(),
            progress: MorphProgress::new(STAR_DAMPING),
        }
    }

    pub fn scatter(&self) -> Vec3 {
        self.scatter
    }

    pub fn tree(&self) -> Vec3 {
        self.tree
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn transform(&self, p: f32) -> Transform {
        Transform::new(
            lerp_vec3(self.scatter, self.tree, p),
            self.rotation,
            lerp(STAR_SCATTERED_SCALE, STAR_TREE_SCALE, p),
        )
    }
}

impl Layer for StarLayer {
    fn name(&self) -> &'static str {
        "star"
    }

    fn rebuild(&mut self, ctx: &BuildContext<'_>) {
        let mut rng = stream_rng(ctx.seed, Stream::Star);
        self.scatter = random_sphere_point(&mut rng, STAR_SCATTER_RADIUS);
        self.color = ctx.theme.ornaments;
        self.light_color = ctx.theme.bloom;
    }

    fn step(&mut self, frame: &LayerFrame, out: &mut FrameOutput) {
        let p = self.progress.step(frame.target(), frame.dt());
        self.rotation = step_star_rotation(self.rotation, p, frame.dt());
        let transform = self.transform(p);
        out.push(
            MeshKind::Star,
            InstanceRaw::new(transform.matrix(), self.color, 1.0, star_emissive(frame.time())),
        );
        out.push_light(PointLight {
            position: transform.translation,
            color: self.light_color,
            intensity: 3.0,
            range: 8.0,
        });
    }

    fn entity_count(&self) -> usize {
        1
    }

    fn progress(&self) -> Option<f32> {
        Some(self.progress.value())
    }
}
