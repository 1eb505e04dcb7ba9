//! Persistable scene record: mode, theme and the photo list.
//!
//! Layout is a deterministic function of these inputs and the build seed, so
//! restoring a snapshot reproduces the same visualization.

use crate::error::SnapshotError;
use crate::mode::TreeMode;
use crate::theme::ThemeId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub mode: TreeMode,
    pub theme_id: ThemeId,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl SceneSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
