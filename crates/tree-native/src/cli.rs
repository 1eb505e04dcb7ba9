use clap::Parser;
use std::path::PathBuf;
use tree_core::layers::LayerCounts;
use tree_core::{Scene, SceneConfig, ThemeId, TreeMode, DEFAULT_SEED};

#[derive(Debug, Parser)]
#[command(name = "tree-native", about = "Particle Christmas tree that morphs between scattered and assembled")]
pub struct Args {
    /// Layout seed; the same seed always builds the same tree.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Starting palette (aurora-green, luxury-gold). Overrides `--load`.
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ThemeId>,

    /// Starting mode (scattered, tree). Overrides `--load`; without it,
    /// `--photo` starts assembled so the photos are visible.
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<TreeMode>,

    /// Image files to hang on the tree. May be repeated.
    #[arg(long = "photo", value_name = "PATH")]
    pub photos: Vec<PathBuf>,

    /// Restore a saved scene. Explicit `--mode` and `--theme` still apply
    /// afterwards and `--photo` images are appended.
    #[arg(long, value_name = "JSON")]
    pub load: Option<PathBuf>,

    /// Where `S` writes the scene.
    #[arg(long, value_name = "JSON", default_value = "evergreen-snapshot.json")]
    pub save: PathBuf,

    /// Multiplier on every particle count, clamped to `0..=MAX_DENSITY`.
    #[arg(long, default_value_t = 1.0)]
    pub density: f32,
}

impl Args {
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            seed: self.seed,
            mode: self.mode.unwrap_or_default(),
            theme: self.theme.unwrap_or_default(),
            counts: if self.density == 1.0 {
                LayerCounts::default()
            } else {
                LayerCounts::scaled(self.density)
            },
        }
    }

    /// Re-apply explicit options over a restored snapshot. Without an explicit
    /// mode, passing photos assembles the tree so they are visible.
    pub fn apply_overrides(&self, scene: &mut Scene) {
        if let Some(theme) = self.theme {
            scene.set_theme(theme);
        }
        match self.mode {
            Some(mode) => scene.set_mode(mode),
            None if !self.photos.is_empty() => {
                scene.reveal_photos();
            }
            None => {}
        }
    }
}

fn parse_theme(s: &str) -> Result<ThemeId, String> {
    s.parse::<ThemeId>().map_err(|e| e.to_string())
}

fn parse_mode(s: &str) -> Result<TreeMode, String> {
    TreeMode::parse(s).ok_or_else(|| format!("unknown mode `{s}`"))
}
