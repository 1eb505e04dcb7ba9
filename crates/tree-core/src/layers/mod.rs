//! Visual layers. Each owns its entity collection and its morph progress.
//!
//! A layer is rebuilt when the theme (or, for photos, the photo list) changes
//! and stepped once per frame. Mode changes never touch entity data; they only
//! move the damping target seen in [`LayerFrame`].

pub mod atmosphere;
pub mod fairy_lights;
pub mod foliage;
pub mod ornaments;
pub mod photos;
pub mod ribbon;
pub mod sparkles;
pub mod star;

pub use atmosphere::AtmosphereLayer;
pub use fairy_lights::FairyLightsLayer;
pub use foliage::FoliageLayer;
pub use ornaments::OrnamentsLayer;
pub use photos::PhotoLayer;
pub use ribbon::RibbonLayer;
pub use sparkles::SparkleLayer;
pub use star::StarLayer;

use crate::constants::*;
use crate::instance::{FrameClock, FrameOutput};
use crate::mode::TreeMode;
use crate::photo::Photo;
use crate::theme::Theme;

/// Inputs shared by every layout build.
#[derive(Clone, Copy, Debug)]
pub struct BuildContext<'a> {
    pub theme: &'a Theme,
    pub seed: u64,
    pub counts: &'a LayerCounts,
    pub photos: &'a [Photo],
}

/// Inputs shared by every per-frame step.
#[derive(Clone, Copy, Debug)]
pub struct LayerFrame {
    pub mode: TreeMode,
    pub clock: FrameClock,
}

impl LayerFrame {
    #[inline]
    pub fn target(&self) -> f32 {
        self.mode.target()
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.clock.elapsed
    }

    #[inline]
    pub fn dt(&self) -> f32 {
        self.clock.delta
    }
}

pub trait Layer {
    fn name(&self) -> &'static str;

    /// Regenerate entity data from the build inputs. Progress is preserved.
    fn rebuild(&mut self, ctx: &BuildContext<'_>);

    /// Advance progress and append this frame's instances to `out`.
    fn step(&mut self, frame: &LayerFrame, out: &mut FrameOutput);

    fn entity_count(&self) -> usize;

    /// Current morph progress, or `None` for layers that never morph.
    fn progress(&self) -> Option<f32>;
}

/// Per-layer entity counts; the defaults are the tuned production values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerCounts {
    pub foliage: usize,
    pub baubles: usize,
    pub gifts: usize,
    pub bells: usize,
    pub crystals: usize,
    pub berries: usize,
    pub fairy_lights: usize,
    pub ribbon_segments: usize,
    pub atmosphere: usize,
    pub snowflakes: usize,
    pub gold_dust: usize,
    pub emerald_motes: usize,
    pub stars: usize,
}

impl Default for LayerCounts {
    fn default() -> Self {
        Self {
            foliage: FOLIAGE_COUNT,
            baubles: BAUBLE_COUNT,
            gifts: GIFT_COUNT,
            bells: BELL_COUNT,
            crystals: CRYSTAL_COUNT,
            berries: BERRY_COUNT,
            fairy_lights: FAIRY_LIGHT_COUNT,
            ribbon_segments: RIBBON_SEGMENT_COUNT,
            atmosphere: ATMOSPHERE_COUNT,
            snowflakes: SNOWFLAKE_COUNT,
            gold_dust: GOLD_DUST_COUNT,
            emerald_motes: EMERALD_MOTE_COUNT,
            stars: STARFIELD_COUNT,
        }
    }
}

impl LayerCounts {
    /// Scale every count by `density`, keeping at least one entity per
    /// non-empty layer. `density` is clamped to `[0, MAX_DENSITY]`.
    pub fn scaled(density: f32) -> Self {
        let d = if density.is_nan() {
            0.0
        } else {
            density.clamp(0.0, MAX_DENSITY)
        };
        let s = |n: usize| {
            if n == 0 || d == 0.0 {
                0
            } else {
                ((n as f32 * d).round() as usize).max(1)
            }
        };
        let base = Self::default();
        Self {
            foliage: s(base.foliage),
            baubles: s(base.baubles),
            gifts: s(base.gifts),
            bells: s(base.bells),
            crystals: s(base.crystals),
            berries: s(base.berries),
            fairy_lights: s(base.fairy_lights),
            ribbon_segments: s(base.ribbon_segments),
            atmosphere: s(base.atmosphere),
            snowflakes: s(base.snowflakes),
            gold_dust: s(base.gold_dust),
            emerald_motes: s(base.emerald_motes),
            stars: s(base.stars),
        }
    }
}
