//! Snapshot persistence in `localStorage`.

use tree_core::SceneSnapshot;
use web_sys as web;

pub const STORAGE_KEY: &str = "evergreen.snapshot";

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load() -> Option<SceneSnapshot> {
    let json = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    match SceneSnapshot::from_json(&json) {
        Ok(snap) => Some(snap),
        Err(e) => {
            log::warn!("[storage] ignoring stored snapshot: {}", e);
            None
        }
    }
}

pub fn save(snapshot: &SceneSnapshot) -> anyhow::Result<()> {
    let json = snapshot.to_json()?;
    let store = storage().ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))?;
    store
        .set_item(STORAGE_KEY, &json)
        .map_err(|e| anyhow::anyhow!(format!("localStorage write failed: {:?}", e)))?;
    log::info!(
        "[storage] saved mode={} theme={} photos={}",
        snapshot.mode,
        snapshot.theme_id,
        snapshot.photos.len()
    );
    Ok(())
}
