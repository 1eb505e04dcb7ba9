use super::{BuildContext, Layer, LayerFrame};
use crate::constants::*;
use crate::geometry::{lerp_vec3, push_out, random_sphere_point, spiral_point};
use crate::instance::{FrameOutput, InstanceRaw, MeshKind, Transform};
use crate::morph::MorphProgress;
use crate::seed::{stream_rng, Stream};
use crate::theme::{Rgb, FROSTED_WHITE, WARM_AMBER};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

const LIGHT_EMISSIVE: f32 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct FairyLight {
    pub scatter: Vec3,
    pub tree: Vec3,
    pub color: Rgb,
    pub phase: f32,
    pub speed: f32,
}

impl FairyLight {
    /// Lights twinkle by pulsing size and vanish when scattered.
    pub fn transform(&self, p: f32, t: f32) -> Transform {
        let twinkle = (t * self.speed + self.phase).sin();
        let scale = LIGHT_BASE_SCALE * (0.8 + 0.4 * twinkle) * p;
        Transform::new(lerp_vec3(self.scatter, self.tree, p), Vec3::ZERO, scale)
    }
}

pub fn build_fairy_lights<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<FairyLight> {
    let warm = Rgb::from_hex(WARM_AMBER);
    let white = Rgb::from_hex(FROSTED_WHITE);
    let mut lights = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f32 / count as f32;
        let t_noisy = (t + (rng.gen::<f32>() - 0.5) * 0.02).clamp(0.0, 1.0);
        let on_spiral = spiral_point(t_noisy, TREE_HEIGHT, SPIRAL_RADIUS, LIGHT_TURNS);
        let tree = push_out(on_spiral, 0.9 + rng.gen::<f32>() * 0.2);
        let scatter = random_sphere_point(rng, LIGHT_SCATTER_RADIUS);
        let phase = rng.gen::<f32>() * TAU;
        let speed = 2.0 + rng.gen::<f32>() * 3.0;
        let color = if rng.gen::<f32>() > 0.4 { warm } else { white };
        lights.push(FairyLight {
            scatter,
            tree,
            color,
            phase,
            speed,
        });
    }
    lights
}

pub struct FairyLightsLayer {
    lights: Vec<FairyLight>,
    progress: MorphProgress,
}

impl Default for FairyLightsLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl FairyLightsLayer {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            progress: MorphProgress::new(LIGHT_DAMPING),
        }
    }

    pub fn lights(&self) -> &[FairyLight] {
        &self.lights
    }
}

impl Layer for FairyLightsLayer {
    fn name(&self) -> &'static str {
        "fairy_lights"
    }

    fn rebuild(&mut self, ctx: &BuildContext<'_>) {
        let mut rng = stream_rng(ctx.seed, Stream::FairyLights);
        self.lights = build_fairy_lights(&mut rng, ctx.counts.fairy_lights);
        log::debug!("[layout] fairy lights={}", self.lights.len());
    }

    fn step(&mut self, frame: &LayerFrame, out: &mut FrameOutput) {
        let p = self.progress.step(frame.target(), frame.dt());
        let t = frame.time();
        for light in &self.lights {
            let m = light.transform(p, t).matrix();
            out.push(
                MeshKind::Sphere,
                InstanceRaw::new(m, light.color, 1.0, LIGHT_EMISSIVE),
            );
        }
    }

    fn entity_count(&self) -> usize {
        self.lights.len()
    }

    fn progress(&self) -> Option<f32> {
        Some(self.progress.value())
    }
}
