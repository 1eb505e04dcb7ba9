use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the particles should gather into the tree or drift apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TreeMode {
    #[default]
    Scattered,
    TreeShape,
}

impl TreeMode {
    /// Morph target for this mode: 0 scattered, 1 assembled.
    #[inline]
    pub fn target(self) -> f32 {
        match self {
            TreeMode::Scattered => 0.0,
            TreeMode::TreeShape => 1.0,
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            TreeMode::Scattered => TreeMode::TreeShape,
            TreeMode::TreeShape => TreeMode::Scattered,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "scattered" | "scatter" => Some(TreeMode::Scattered),
            "tree" | "tree_shape" | "tree-shape" | "assembled" => Some(TreeMode::TreeShape),
            _ => None,
        }
    }
}

impl fmt::Display for TreeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeMode::Scattered => f.write_str("scattered"),
            TreeMode::TreeShape => f.write_str("tree"),
        }
    }
}
