use super::{BuildContext, Layer, LayerFrame};
use crate::constants::ATMOSPHERE_RADIUS;
use crate::geometry::{random_euler, random_sphere_point};
use crate::instance::{FrameOutput, InstanceRaw, MeshKind, Transform};
use crate::seed::{stream_rng, Stream};
use crate::theme::Rgb;
use glam::Vec3;
use rand::Rng;

const ATMOSPHERE_ALPHA: f32 = 0.15;

#[derive(Clone, Debug, PartialEq)]
pub struct AtmosphereCube {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub speed: f32,
}

impl AtmosphereCube {
    pub fn transform(&self, index: usize, t: f32) -> Transform {
        let phase = index as f32;
        let mut position = self.position;
        position.y += (t * self.speed + phase).sin() * 0.05;
        let rotation = self.rotation + Vec3::new(t * self.speed, t * self.speed, 0.0);
        let pulse = (t * 0.5 + phase).sin() * 0.1 + 1.0;
        Transform::new(position, rotation, self.scale * pulse)
    }
}

pub fn build_cubes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<AtmosphereCube> {
    (0..count)
        .map(|_| AtmosphereCube {
            position: random_sphere_point(rng, ATMOSPHERE_RADIUS),
            rotation: random_euler(rng, false),
            scale: rng.gen::<f32>() * 0.5 + 0.2,
            speed: rng.gen::<f32>() * 0.2 + 0.05,
        })
        .collect()
}

/// Faint wireframe-colored cubes drifting far outside the tree.
///
/// They ignore the mode entirely; they only bob, tumble and pulse.
pub struct AtmosphereLayer {
    cubes: Vec<AtmosphereCube>,
    color: Rgb,
}

impl Default for AtmosphereLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AtmosphereLayer {
    pub fn new() -> Self {
        Self {
            cubes: Vec::new(),
            color: Rgb::default(),
        }
    }

    pub fn cubes(&self) -> &[AtmosphereCube] {
        &self.cubes
    }
}

impl Layer for AtmosphereLayer {
    fn name(&self) -> &'static str {
        "atmosphere"
    }

    fn rebuild(&mut self, ctx: &BuildContext<'_>) {
        let mut rng = stream_rng(ctx.seed, Stream::Atmosphere);
        self.cubes = build_cubes(&mut rng, ctx.counts.atmosphere);
        self.color = ctx.theme.wireframe;
    }

    fn step(&mut self, frame: &LayerFrame, out: &mut FrameOutput) {
        let t = frame.time();
        for (i, cube) in self.cubes.iter().enumerate() {
            let m = cube.transform(i, t).matrix();
            out.push(MeshKind::Cube, InstanceRaw::new(m, self.color, ATMOSPHERE_ALPHA, 0.0));
        }
    }

    fn entity_count(&self) -> usize {
        self.cubes.len()
    }

    fn progress(&self) -> Option<f32> {
        None
    }
}
