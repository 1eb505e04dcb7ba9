//! Baubles, gifts, bells, crystals and berries.
//!
//! The five groups share one progress value and hang at increasing radial
//! offsets outside the foliage so they stay visible once assembled.

use super::{BuildContext, Layer, LayerCounts, LayerFrame};
use crate::constants::*;
use crate::geometry::{cone_point, lerp_vec3, push_out, random_euler, random_sphere_point};
use crate::instance::{FrameOutput, InstanceRaw, MeshKind, Transform};
use crate::morph::MorphProgress;
use crate::seed::{stream_rng, Stream};
use crate::theme::{Rgb, Theme, CHAMPAGNE_GOLD, DEEP_EMERALD, FROSTED_WHITE, MOON_GOLD, RUBY};
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentKind {
    Bauble,
    Gift,
    Bell,
    Crystal,
    Berry,
}

impl OrnamentKind {
    pub fn mesh(self) -> MeshKind {
        match self {
            OrnamentKind::Bauble | OrnamentKind::Berry => MeshKind::Sphere,
            OrnamentKind::Gift => MeshKind::Cube,
            OrnamentKind::Bell => MeshKind::Cone,
            OrnamentKind::Crystal => MeshKind::Octahedron,
        }
    }

    pub fn push(self) -> f32 {
        match self {
            OrnamentKind::Bauble => BAUBLE_PUSH,
            OrnamentKind::Gift => GIFT_PUSH,
            OrnamentKind::Bell => BELL_PUSH,
            OrnamentKind::Crystal => CRYSTAL_PUSH,
            OrnamentKind::Berry => BERRY_PUSH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ornament {
    pub kind: OrnamentKind,
    pub scatter: Vec3,
    pub tree: Vec3,
    pub scale: f32,
    pub color: Rgb,
    /// Spin phase (baubles), spin speed (gifts) or sway speed (bells).
    pub motion: f32,
    pub rotation: Vec3,
}

impl Ornament {
    /// Ornaments grow from nothing as the tree assembles.
    pub fn transform(&self, index: usize, p: f32, t: f32) -> Transform {
        let position = lerp_vec3(self.scatter, self.tree, p);
        let rotation = match self.kind {
            OrnamentKind::Bauble => Vec3::new(0.0, t * 0.5 + self.motion, 0.0),
            OrnamentKind::Gift => Vec3::new(t * self.motion, t * self.motion, 0.0),
            OrnamentKind::Bell => {
                Vec3::new(0.0, 0.0, (t * self.motion + index as f32).sin() * 0.2)
            }
            OrnamentKind::Crystal => self.rotation + Vec3::new(0.0, t * 0.5, 0.0),
            OrnamentKind::Berry => Vec3::ZERO,
        };
        Transform::new(position, rotation, self.scale * p)
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgb]) -> Rgb {
    palette[rng.gen_range(0..palette.len())]
}

fn placement<R: Rng + ?Sized>(rng: &mut R, kind: OrnamentKind) -> (Vec3, Vec3) {
    let scatter = random_sphere_point(rng, ORNAMENT_SCATTER_RADIUS);
    let mut tree = cone_point(rng, TREE_HEIGHT, TREE_RADIUS);
    if kind == OrnamentKind::Gift && rng.gen::<f32>() > 0.3 {
        // most gifts sit low on the tree
        tree.y -= 2.0;
    }
    (scatter, push_out(tree, kind.push()))
}

pub fn build_ornaments<R: Rng + ?Sized>(
    rng: &mut R,
    theme: &Theme,
    counts: &LayerCounts,
) -> Vec<Ornament> {
    let total = counts.baubles + counts.gifts + counts.bells + counts.crystals + counts.berries;
    let mut items = Vec::with_capacity(total);

    let bauble_palette = [
        theme.ornaments,
        theme.particles_primary,
        Rgb::from_hex(MOON_GOLD),
        Rgb::from_hex(FROSTED_WHITE),
    ];
    for _ in 0..counts.baubles {
        let (scatter, tree) = placement(rng, OrnamentKind::Bauble);
        let scale = 0.3 + rng.gen::<f32>() * 0.4;
        let color = pick(rng, &bauble_palette);
        items.push(Ornament {
            kind: OrnamentKind::Bauble,
            scatter,
            tree,
            scale,
            color,
            motion: rng.gen::<f32>() * 10.0,
            rotation: Vec3::ZERO,
        });
    }

    let gift_palette = [
        Rgb::from_hex(RUBY),
        Rgb::from_hex(MOON_GOLD),
        Rgb::from_hex(DEEP_EMERALD),
    ];
    for _ in 0..counts.gifts {
        let (scatter, tree) = placement(rng, OrnamentKind::Gift);
        let scale = 0.4 + rng.gen::<f32>() * 0.3;
        let color = pick(rng, &gift_palette);
        items.push(Ornament {
            kind: OrnamentKind::Gift,
            scatter,
            tree,
            scale,
            color,
            motion: rng.gen::<f32>() - 0.5,
            rotation: Vec3::ZERO,
        });
    }

    let bell_color = Rgb::from_hex(CHAMPAGNE_GOLD);
    for _ in 0..counts.bells {
        let (scatter, tree) = placement(rng, OrnamentKind::Bell);
        items.push(Ornament {
            kind: OrnamentKind::Bell,
            scatter,
            tree,
            scale: 0.25 + rng.gen::<f32>() * 0.1,
            color: bell_color,
            motion: 2.0 + rng.gen::<f32>(),
            rotation: Vec3::ZERO,
        });
    }

    let crystal_color = Rgb::from_hex(FROSTED_WHITE);
    for _ in 0..counts.crystals {
        let (scatter, tree) = placement(rng, OrnamentKind::Crystal);
        items.push(Ornament {
            kind: OrnamentKind::Crystal,
            scatter,
            tree,
            scale: 0.2 + rng.gen::<f32>() * 0.2,
            color: crystal_color,
            motion: 0.0,
            rotation: random_euler(rng, false),
        });
    }

    let berry_color = Rgb::from_hex(RUBY);
    for _ in 0..counts.berries {
        let (scatter, tree) = placement(rng, OrnamentKind::Berry);
        items.push(Ornament {
            kind: OrnamentKind::Berry,
            scatter,
            tree,
            scale: 0.08 + rng.gen::<f32>() * 0.05,
            color: berry_color,
            motion: 0.0,
            rotation: Vec3::ZERO,
        });
    }
    items
}

pub struct OrnamentsLayer {
    items: Vec<Ornament>,
    progress: MorphProgress,
}

impl Default for OrnamentsLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrnamentsLayer {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            progress: MorphProgress::new(ORNAMENT_DAMPING),
        }
    }

    pub fn items(&self) -> &[Ornament] {
        &self.items
    }

    pub fn of_kind(&self, kind: OrnamentKind) -> impl Iterator<Item = &Ornament> {
        self.items.iter().filter(move |o| o.kind == kind)
    }
}

impl Layer for OrnamentsLayer {
    fn name(&self) -> &'static str {
        "ornaments"
    }

    fn rebuild(&mut self, ctx: &BuildContext<'_>) {
        let mut rng = stream_rng(ctx.seed, Stream::Ornaments);
        self.items = build_ornaments(&mut rng, ctx.theme, ctx.counts);
        log::debug!("[layout] ornaments items={}", self.items.len());
    }

    fn step(&mut self, frame: &LayerFrame, out: &mut FrameOutput) {
        let p = self.progress.step(frame.target(), frame.dt());
        let t = frame.time();

        // Sway index restarts per group so neighbouring bells stay out of phase
        let mut group_index = 0usize;
        let mut last_kind = None;
        for item in &self.items {
            if last_kind != Some(item.kind) {
                group_index = 0;
                last_kind = Some(item.kind);
            }
            let m = item.transform(group_index, p, t).matrix();
            out.push(item.kind.mesh(), InstanceRaw::new(m, item.color, 1.0, 0.0));
            group_index += 1;
        }
    }

    fn entity_count(&self) -> usize {
        self.items.len()
    }

    fn progress(&self) -> Option<f32> {
        Some(self.progress.value())
    }
}
