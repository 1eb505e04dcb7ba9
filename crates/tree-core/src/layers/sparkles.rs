//! Ambient particle fields around the tree: snow, gold dust, emerald motes
//! and a distant starfield. None of them react to the mode.

use super::{BuildContext, Layer, LayerCounts, LayerFrame};
use crate::constants::*;
use crate::instance::{FrameOutput, InstanceRaw, MeshKind, Transform};
use crate::seed::{stream_rng, Stream};
use crate::theme::{Rgb, DEEP_EMERALD, FROSTED_WHITE, WARM_AMBER};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SparkleKind {
    Snow,
    GoldDust,
    EmeraldMote,
    Star,
}

/// Tuning for one drifting field, placed in a cube of side `box_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleField {
    pub kind: SparkleKind,
    pub box_size: f32,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    pub color: u32,
}

pub const SNOW_FIELD: SparkleField = SparkleField {
    kind: SparkleKind::Snow,
    box_size: 25.0,
    size: 2.0,
    speed: 0.15,
    opacity: 0.6,
    color: FROSTED_WHITE,
};

pub const GOLD_DUST_FIELD: SparkleField = SparkleField {
    kind: SparkleKind::GoldDust,
    box_size: 15.0,
    size: 1.0,
    speed: 0.08,
    opacity: 0.8,
    color: WARM_AMBER,
};

pub const EMERALD_FIELD: SparkleField = SparkleField {
    kind: SparkleKind::EmeraldMote,
    box_size: 30.0,
    size: 3.0,
    speed: 0.2,
    opacity: 0.3,
    color: DEEP_EMERALD,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub kind: SparkleKind,
    pub position: Vec3,
    pub scale: f32,
    pub speed: f32,
    /// Drift amplitude in world units; zero for stars.
    pub drift: f32,
    pub phase: f32,
    pub alpha: f32,
    pub color: Rgb,
}

impl Sparkle {
    pub fn transform(&self, t: f32) -> Transform {
        let a = t * self.speed + self.phase;
        let offset = Vec3::new(a.sin(), (a * 0.8 + self.phase).sin(), (a * 0.6).cos()) * self.drift;
        let twinkle = match self.kind {
            SparkleKind::Star => 0.8 + 0.2 * (t * STARFIELD_TWINKLE_SPEED * 4.0 + self.phase).sin(),
            _ => 0.75 + 0.25 * (t * 2.0 + self.phase).sin(),
        };
        Transform::new(self.position + offset, Vec3::ZERO, self.scale * twinkle)
    }
}

fn box_point<R: Rng + ?Sized>(rng: &mut R, size: f32) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
        rng.gen::<f32>() - 0.5,
    ) * size
}

/// Uniform direction on the unit sphere.
fn unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = TAU * rng.gen::<f32>();
    let z: f32 = rng.gen::<f32>() * 2.0 - 1.0;
    let s = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(s * theta.cos(), s * theta.sin(), z)
}

pub fn build_field<R: Rng + ?Sized>(rng: &mut R, field: &SparkleField, count: usize) -> Vec<Sparkle> {
    let color = Rgb::from_hex(field.color);
    (0..count)
        .map(|_| Sparkle {
            kind: field.kind,
            position: box_point(rng, field.box_size),
            scale: field.size * SPARKLE_UNIT * (0.5 + rng.gen::<f32>() * 0.5),
            speed: field.speed * (0.5 + rng.gen::<f32>()),
            drift: field.speed * field.box_size * SPARKLE_DRIFT,
            phase: rng.gen::<f32>() * TAU,
            alpha: field.opacity,
            color,
        })
        .collect()
}

/// Stars on a shell between `STARFIELD_RADIUS` and `STARFIELD_RADIUS + STARFIELD_DEPTH`.
pub fn build_starfield<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Sparkle> {
    let color = Rgb::from_hex(0xFFFFFF);
    (0..count)
        .map(|_| {
            let r = STARFIELD_RADIUS + rng.gen::<f32>() * STARFIELD_DEPTH;
            Sparkle {
                kind: SparkleKind::Star,
                position: unit_direction(rng) * r,
                scale: STARFIELD_UNIT * STARFIELD_FACTOR * (0.5 + rng.gen::<f32>() * 0.5),
                speed: STARFIELD_TWINKLE_SPEED,
                drift: 0.0,
                phase: rng.gen::<f32>() * TAU,
                alpha: 1.0,
                color,
            }
        })
        .collect()
}

pub fn build_sparkles<R: Rng + ?Sized>(rng: &mut R, counts: &LayerCounts) -> Vec<Sparkle> {
    let mut all = build_field(rng, &SNOW_FIELD, counts.snowflakes);
    all.extend(build_field(rng, &GOLD_DUST_FIELD, counts.gold_dust));
    all.extend(build_field(rng, &EMERALD_FIELD, counts.emerald_motes));
    all.extend(build_starfield(rng, counts.stars));
    all
}

#[derive(Default)]
pub struct SparkleLayer {
    sparkles: Vec<Sparkle>,
}

impl SparkleLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn of_kind(&self, kind: SparkleKind) -> impl Iterator<Item = &Sparkle> {
        self.sparkles.iter().filter(move |s| s.kind == kind)
    }
}

impl Layer for SparkleLayer {
    fn name(&self) -> &'static str {
        "sparkles"
    }

    fn rebuild(&mut self, ctx: &BuildContext<'_>) {
        let mut rng = stream_rng(ctx.seed, Stream::Sparkles);
        self.sparkles = build_sparkles(&mut rng, ctx.counts);
        log::debug!("[layout] sparkles={}", self.sparkles.len());
    }

    fn step(&mut self, frame: &LayerFrame, out: &mut FrameOutput) {
        let t = frame.time();
        let batch = out.batch_mut(MeshKind::Spark);
        batch.reserve(self.sparkles.len());
        for s in &self.sparkles {
            let m = s.transform(t).matrix();
            batch.push(InstanceRaw::new(m, s.color, s.alpha, 1.0));
        }
    }

    fn entity_count(&self) -> usize {
        self.sparkles.len()
    }

    fn progress(&self) -> Option<f32> {
        None
    }
}
