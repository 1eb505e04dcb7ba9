//! Foliage needles plus the trunk and the glowing core.

use super::{BuildContext, Layer, LayerFrame};
use crate::constants::*;
use crate::geometry::{cone_point, lerp, lerp_vec3, random_euler, random_sphere_point, swirl};
use crate::instance::{FrameOutput, InstanceRaw, MeshKind, PointLight, Transform};
use crate::morph::MorphProgress;
use crate::seed::{stream_rng, Stream};
use crate::theme::{Rgb, Theme, TRUNK_BARK};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Needle {
    pub scatter: Vec3,
    pub tree: Vec3,
    pub scale: f32,
    pub color: Rgb,
    pub speed: f32,
    pub phase: f32,
    pub rotation: Vec3,
}

impl Needle {
    /// Position at progress `p` and time `t`, before rotation and scale.
    pub fn position(&self, p: f32, t: f32) -> Vec3 {
        let mut pos = lerp_vec3(self.scatter, self.tree, p);
        let amplitude = BREATHE_BASE + (1.0 - p) * BREATHE_SCATTERED_EXTRA;
        pos.y += (t * self.speed + self.phase).sin() * amplitude;
        let spin = (1.0 - p) * (t * SWIRL_FREQUENCY).sin() * SWIRL_AMPLITUDE;
        swirl(pos, spin)
    }

    pub fn transform(&self, p: f32, t: f32) -> Transform {
        let rotation = Vec3::new(
            lerp(self.rotation.x, FOLIAGE_SETTLED_TILT, p),
            self.rotation.y + t * 0.1,
            0.0,
        );
        let scale = lerp(FOLIAGE_SCATTERED_SCALE, self.scale, p);
        Transform::new(self.position(p, t), rotation, scale)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trunk {
    pub scatter: Vec3,
    pub tree: Vec3,
}

impl Trunk {
    pub fn transform(&self, p: f32, t: f32) -> Transform {
        let wobble = 1.0 - p;
        let rotation = Vec3::new(t.cos() * 0.5 * wobble, 0.0, t.sin() * 0.5 * wobble);
        Transform::new(lerp_vec3(self.scatter, self.tree, p), rotation, lerp(0.1, 1.0, p))
    }
}

/// Pulse dominates while scattered; a steady brighter glow replaces it once assembled.
#[inline]
pub fn glow_intensity(p: f32, t: f32) -> f32 {
    let pulse = (t * 2.0).sin() * 0.5 + 1.0;
    lerp(pulse, 2.0, p)
}

pub fn build_needles<R: Rng + ?Sized>(rng: &mut R, theme: &Theme, count: usize) -> Vec<Needle> {
    let mut needles = Vec::with_capacity(count);
    for _ in 0..count {
        let scatter = random_sphere_point(rng, FOLIAGE_SCATTER_RADIUS);
        let mut tree = cone_point(rng, TREE_HEIGHT, TREE_RADIUS);
        let y_norm = ((tree.y + TREE_HEIGHT / 2.0) / TREE_HEIGHT).clamp(0.0, 1.0);

        tree += Vec3::new(
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.5,
        ) * FOLIAGE_JITTER;

        // Smaller needles towards the tip, with wide per-needle variation
        let base_scale = 1.0 - y_norm * 0.6;
        let scale = base_scale * (0.3 + rng.gen::<f32>() * 1.5);

        // Lighter color becomes more likely higher up
        let secondary_chance = 0.1 + y_norm * 0.5;
        let color = if rng.gen::<f32>() < secondary_chance {
            theme.particles_secondary
        } else {
            theme.particles_primary
        };

        needles.push(Needle {
            scatter,
            tree,
            scale,
            color,
            speed: 0.2 + rng.gen::<f32>() * 0.8,
            phase: rng.gen::<f32>() * TAU,
            rotation: random_euler(rng, false),
        });
    }
    needles
}

pub struct FoliageLayer {
    needles: Vec<Needle>,
    trunk: Trunk,
    trunk_color: Rgb,
    glow_color: Rgb,
    progress: MorphProgress,
}

impl Default for FoliageLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl FoliageLayer {
    pub fn new() -> Self {
        Self {
            needles: Vec::new(),
            trunk: Trunk {
                scatter: Vec3::ZERO,
                tree: Vec3::from(TRUNK_TREE_POSITION),
            },
            trunk_color: Rgb::from_hex(TRUNK_BARK),
            glow_color: Rgb::default(),
            progress: MorphProgress::new(FOLIAGE_DAMPING),
        }
    }

    pub fn needles(&self) -> &[Needle] {
        &self.needles
    }

    pub fn trunk(&self) -> &Trunk {
        &self.trunk
    }
}

impl Layer for FoliageLayer {
    fn name(&self) -> &'static str {
        "foliage"
    }

    fn rebuild(&mut self, ctx: &BuildContext<'_>) {
        let mut rng = stream_rng(ctx.seed, Stream::Foliage);
        self.needles = build_needles(&mut rng, ctx.theme, ctx.counts.foliage);
        self.trunk.scatter = random_sphere_point(&mut rng, TRUNK_SCATTER_RADIUS);
        self.glow_color = ctx.theme.bloom;
        log::debug!("[layout] foliage needles={}", self.needles.len());
    }

    fn step(&mut self, frame: &LayerFrame, out: &mut FrameOutput) {
        let p = self.progress.step(frame.target(), frame.dt());
        let t = frame.time();

        let batch = out.batch_mut(MeshKind::Needle);
        batch.reserve(self.needles.len());
        for needle in &self.needles {
            let m = needle.transform(p, t).matrix();
            batch.push(InstanceRaw::new(m, needle.color, 1.0, 0.0));
        }

        out.push(
            MeshKind::Trunk,
            InstanceRaw::new(self.trunk.transform(p, t).matrix(), self.trunk_color, 1.0, 0.0),
        );

        let intensity = glow_intensity(p, t);
        let glow_pos = Vec3::from(GLOW_POSITION);
        let glow = Transform::new(glow_pos, Vec3::ZERO, GLOW_RADIUS * intensity * 0.5);
        out.push(
            MeshKind::Sphere,
            InstanceRaw::new(glow.matrix(), self.glow_color, 0.4, 1.0),
        );
        out.push_light(PointLight {
            position: glow_pos,
            color: self.glow_color,
            intensity: intensity * 3.0,
            range: 12.0,
        });
    }

    fn entity_count(&self) -> usize {
        self.needles.len() + 2
    }

    fn progress(&self) -> Option<f32> {
        Some(self.progress.value())
    }
}
