//! Ribbon wound around the tree, split into independently morphing segments.
//!
//! Each segment keeps its curve relative to its own centroid, so the segment
//! can fly in and tumble as a rigid piece. The renderer draws the curve as a
//! string of small beads.

use super::{BuildContext, Layer, LayerFrame};
use crate::constants::*;
use crate::geometry::{catmull_rom, lerp, lerp_vec3, random_euler, random_sphere_point, wavy_spiral_point};
use crate::instance::{FrameOutput, InstanceRaw, MeshKind, Transform};
use crate::morph::MorphProgress;
use crate::seed::{stream_rng, Stream};
use crate::theme::{Rgb, CHAMPAGNE_GOLD};
use glam::{Mat4, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

const RIBBON_ALPHA: f32 = 0.8;
const RIBBON_EMISSIVE: f32 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct RibbonSegment {
    /// Curve points relative to `tree`.
    pub curve: Vec<Vec3>,
    pub scatter: Vec3,
    /// Centroid of the curve in tree space.
    pub tree: Vec3,
    pub rotation: Vec3,
    pub phase: f32,
}

impl RibbonSegment {
    pub fn transform(&self, p: f32, t: f32) -> Transform {
        let mut position = lerp_vec3(self.scatter, self.tree, p);
        position.y += (t * 0.5 + self.phase).sin() * 0.05;

        // Tumbles while scattered, settles to a very slow orbit on the tree
        let rotation = Vec3::new(
            lerp(self.rotation.x + t * 0.2, 0.0, p),
            lerp(self.rotation.y + t * 0.2, t * 0.02, p),
            lerp(self.rotation.z, 0.0, p),
        );
        Transform::new(position, rotation, lerp(0.1, 1.0, p))
    }

    /// Bead position `u` in `[0, 1]` along the local curve.
    pub fn bead(&self, u: f32) -> Vec3 {
        catmull_rom(&self.curve, u)
    }
}

/// Sample one wavy spiral stretch and recentre it on its centroid.
pub fn segment_curve(start_t: f32, end_t: f32) -> (Vec<Vec3>, Vec3) {
    let steps = RIBBON_CURVE_STEPS;
    let points: Vec<Vec3> = (0..=steps)
        .map(|i| {
            let t = lerp(start_t, end_t, i as f32 / steps as f32);
            wavy_spiral_point(t, TREE_HEIGHT, SPIRAL_RADIUS, RIBBON_TURNS)
        })
        .collect();
    let center = points.iter().copied().sum::<Vec3>() / points.len() as f32;
    let local = points.into_iter().map(|p| p - center).collect();
    (local, center)
}

pub fn build_segments<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<RibbonSegment> {
    if count == 0 {
        return Vec::new();
    }
    let size = 1.0 / count as f32;
    let gap = RIBBON_GAP.min(size * 0.5);
    (0..count)
        .map(|i| {
            let start = i as f32 * size;
            let end = (i + 1) as f32 * size - gap;
            let (curve, tree) = segment_curve(start, end);
            RibbonSegment {
                curve,
                scatter: random_sphere_point(rng, RIBBON_SCATTER_RADIUS),
                tree,
                rotation: random_euler(rng, true),
                phase: rng.gen::<f32>() * TAU,
            }
        })
        .collect()
}

pub struct RibbonLayer {
    segments: Vec<RibbonSegment>,
    progress: Vec<MorphProgress>,
    color: Rgb,
}

impl Default for RibbonLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RibbonLayer {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            progress: Vec::new(),
            color: Rgb::from_hex(CHAMPAGNE_GOLD),
        }
    }

    pub fn segments(&self) -> &[RibbonSegment] {
        &self.segments
    }

    pub fn segment_progress(&self) -> impl Iterator<Item = f32> + '_ {
        self.progress.iter().map(MorphProgress::value)
    }
}

impl Layer for RibbonLayer {
    fn name(&self) -> &'static str {
        "ribbon"
    }

    fn rebuild(&mut self, ctx: &BuildContext<'_>) {
        let mut rng = stream_rng(ctx.seed, Stream::Ribbon);
        self.segments = build_segments(&mut rng, ctx.counts.ribbon_segments);
        // Segments that survive a rebuild keep their progress
        let carried = self.progress.first().map(MorphProgress::value).unwrap_or(0.0);
        self.progress
            .resize(self.segments.len(), MorphProgress::with_value(RIBBON_DAMPING, carried));
        log::debug!("[layout] ribbon segments={}", self.segments.len());
    }

    fn step(&mut self, frame: &LayerFrame, out: &mut FrameOutput) {
        let t = frame.time();
        let bead_scale = Mat4::from_scale(Vec3::splat(RIBBON_BEAD_RADIUS));
        let batch = out.batch_mut(MeshKind::Sphere);
        for (segment, progress) in self.segments.iter().zip(self.progress.iter_mut()) {
            let p = progress.step(frame.target(), frame.dt());
            let seg = segment.transform(p, t).matrix();
            for b in 0..RIBBON_BEADS_PER_SEGMENT {
                let u = b as f32 / (RIBBON_BEADS_PER_SEGMENT - 1) as f32;
                let m = seg * Mat4::from_translation(segment.bead(u)) * bead_scale;
                batch.push(InstanceRaw::new(m, self.color, RIBBON_ALPHA, RIBBON_EMISSIVE));
            }
        }
    }

    fn entity_count(&self) -> usize {
        self.segments.len()
    }

    fn progress(&self) -> Option<f32> {
        if self.progress.is_empty() {
            return None;
        }
        let sum: f32 = self.progress.iter().map(MorphProgress::value).sum();
        Some(sum / self.progress.len() as f32)
    }
}
