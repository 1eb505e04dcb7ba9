//! The whole visualization: a flat set of layers sharing mode, theme and clock.

use crate::error::PhotoError;
use crate::instance::{FrameClock, FrameOutput};
use crate::layers::{
    AtmosphereLayer, BuildContext, FairyLightsLayer, FoliageLayer, Layer, LayerCounts, LayerFrame,
    OrnamentsLayer, PhotoLayer, RibbonLayer, SparkleLayer, StarLayer,
};
use crate::mode::TreeMode;
use crate::photo::{keep_decoded, Photo};
use crate::snapshot::SceneSnapshot;
use crate::theme::{Theme, ThemeId};
use glam::Vec3;

/// Seed used by both frontends unless told otherwise.
pub const DEFAULT_SEED: u64 = 0x7EE5_2024;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub seed: u64,
    pub mode: TreeMode,
    pub theme: ThemeId,
    pub counts: LayerCounts,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            mode: TreeMode::default(),
            theme: ThemeId::default(),
            counts: LayerCounts::default(),
        }
    }
}

pub struct Scene {
    seed: u64,
    counts: LayerCounts,
    mode: TreeMode,
    theme: Theme,
    photos: Vec<Photo>,
    foliage: FoliageLayer,
    ornaments: OrnamentsLayer,
    fairy_lights: FairyLightsLayer,
    ribbon: RibbonLayer,
    star: StarLayer,
    atmosphere: AtmosphereLayer,
    sparkles: SparkleLayer,
    photo_layer: PhotoLayer,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let mut scene = Self {
            seed: config.seed,
            counts: config.counts,
            mode: config.mode,
            theme: config.theme.theme(),
            photos: Vec::new(),
            foliage: FoliageLayer::new(),
            ornaments: OrnamentsLayer::new(),
            fairy_lights: FairyLightsLayer::new(),
            ribbon: RibbonLayer::new(),
            star: StarLayer::new(),
            atmosphere: AtmosphereLayer::new(),
            sparkles: SparkleLayer::new(),
            photo_layer: PhotoLayer::new(),
        };
        scene.rebuild_all();
        log::info!(
            "[scene] seed={:#x} theme={} mode={} entities={}",
            scene.seed,
            scene.theme.id,
            scene.mode,
            scene.entity_count()
        );
        scene
    }

    fn layers(&self) -> [&dyn Layer; 8] {
        [
            &self.foliage,
            &self.ornaments,
            &self.fairy_lights,
            &self.ribbon,
            &self.star,
            &self.atmosphere,
            &self.sparkles,
            &self.photo_layer,
        ]
    }

    fn layers_mut(&mut self) -> [&mut dyn Layer; 8] {
        [
            &mut self.foliage,
            &mut self.ornaments,
            &mut self.fairy_lights,
            &mut self.ribbon,
            &mut self.star,
            &mut self.atmosphere,
            &mut self.sparkles,
            &mut self.photo_layer,
        ]
    }

    fn rebuild_all(&mut self) {
        // Layers borrow the build inputs while the scene lends them out mutably
        let theme = self.theme.clone();
        let counts = self.counts.clone();
        let photos = std::mem::take(&mut self.photos);
        let ctx = BuildContext {
            theme: &theme,
            seed: self.seed,
            counts: &counts,
            photos: &photos,
        };
        for layer in self.layers_mut() {
            layer.rebuild(&ctx);
        }
        self.photos = photos;
    }

    fn rebuild_photos(&mut self) {
        let ctx = BuildContext {
            theme: &self.theme,
            seed: self.seed,
            counts: &self.counts,
            photos: &self.photos,
        };
        self.photo_layer.rebuild(&ctx);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mode(&self) -> TreeMode {
        self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Retarget every layer; entity data is untouched.
    pub fn set_mode(&mut self, mode: TreeMode) {
        if self.mode != mode {
            log::info!("[scene] mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Assemble the tree so photos being added become visible; they only grow
    /// in while the tree is assembled. Returns whether the mode changed.
    pub fn reveal_photos(&mut self) -> bool {
        if self.mode == TreeMode::TreeShape {
            return false;
        }
        self.set_mode(TreeMode::TreeShape);
        true
    }

    /// Swap palettes. Positions stay put because every layer reseeds its own stream.
    pub fn set_theme(&mut self, id: ThemeId) {
        if self.theme.id == id {
            return;
        }
        log::info!("[scene] theme {} -> {}", self.theme.id, id);
        self.theme = id.theme();
        self.rebuild_all();
    }

    pub fn cycle_theme(&mut self) {
        self.set_theme(self.theme.id.next());
    }

    pub fn set_photos(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
        self.rebuild_photos();
    }

    pub fn push_photo(&mut self, photo: Photo) {
        self.photos.push(photo);
        self.rebuild_photos();
    }

    pub fn extend_photos(&mut self, photos: impl IntoIterator<Item = Photo>) {
        let before = self.photos.len();
        self.photos.extend(photos);
        if self.photos.len() != before {
            self.rebuild_photos();
        }
    }

    pub fn set_hovered_photo(&mut self, index: Option<usize>) {
        self.photo_layer.set_hovered(index);
    }

    pub fn hovered_photo(&self) -> Option<usize> {
        self.photo_layer.hovered()
    }

    /// Nearest photo under the world-space ray.
    pub fn pick_photo(&self, origin: Vec3, dir: Vec3) -> Option<usize> {
        self.photo_layer.pick(origin, dir)
    }

    /// Step every layer once and refill `out` for this frame.
    pub fn update(&mut self, clock: FrameClock, out: &mut FrameOutput) {
        out.clear();
        let frame = LayerFrame {
            mode: self.mode,
            clock,
        };
        for layer in self.layers_mut() {
            layer.step(&frame, out);
        }
    }

    pub fn entity_count(&self) -> usize {
        self.layers().iter().map(|l| l.entity_count()).sum()
    }

    /// `(layer name, progress)` for every morphing layer.
    pub fn progress(&self) -> Vec<(&'static str, f32)> {
        self.layers()
            .iter()
            .filter_map(|l| l.progress().map(|p| (l.name(), p)))
            .collect()
    }

    pub fn foliage(&self) -> &FoliageLayer {
        &self.foliage
    }

    pub fn ornaments(&self) -> &OrnamentsLayer {
        &self.ornaments
    }

    pub fn fairy_lights(&self) -> &FairyLightsLayer {
        &self.fairy_lights
    }

    pub fn ribbon(&self) -> &RibbonLayer {
        &self.ribbon
    }

    pub fn star(&self) -> &StarLayer {
        &self.star
    }

    pub fn atmosphere(&self) -> &AtmosphereLayer {
        &self.atmosphere
    }

    pub fn sparkles(&self) -> &SparkleLayer {
        &self.sparkles
    }

    pub fn photo_layer(&self) -> &PhotoLayer {
        &self.photo_layer
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            mode: self.mode,
            theme_id: self.theme.id,
            photos: self.photos.iter().map(|p| p.source.clone()).collect(),
        }
    }

    /// Restore mode, theme and photos. `load` resolves each stored photo
    /// source; sources that fail are logged and skipped.
    pub fn apply_snapshot<F>(&mut self, snapshot: &SceneSnapshot, mut load: F)
    where
        F: FnMut(&str) -> Result<Photo, PhotoError>,
    {
        self.set_mode(snapshot.mode);
        self.set_theme(snapshot.theme_id);
        let photos = keep_decoded(
            snapshot
                .photos
                .iter()
                .map(|src| (short_label(src), load(src))),
        );
        self.set_photos(photos);
    }
}

/// Data URLs are too long to log in full.
fn short_label(source: &str) -> String {
    if source.len() > 48 {
        let cut = (0..=48).rev().find(|i| source.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &source[..cut])
    } else {
        source.to_string()
    }
}
