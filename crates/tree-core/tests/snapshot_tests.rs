use tree_core::layers::LayerCounts;
use tree_core::{Photo, PhotoError, PhotoSummary, Rgb, Scene, SceneConfig, SceneSnapshot, ThemeId, TreeMode};

fn tiny_scene() -> Scene {
    Scene::new(SceneConfig {
        counts: LayerCounts::scaled(0.01),
        ..SceneConfig::default()
    })
}

fn summary() -> PhotoSummary {
    PhotoSummary {
        width: 2,
        height: 2,
        tint: Rgb([0.5, 0.5, 0.5]),
    }
}

#[test]
fn snapshot_json_uses_stable_field_names() {
    let snap = SceneSnapshot {
        mode: TreeMode::TreeShape,
        theme_id: ThemeId::LuxuryGold,
        photos: vec!["a.png".into()],
    };
    let json = snap.to_json().expect("serialize");
    assert!(json.contains("\"mode\": \"TREE_SHAPE\""));
    assert!(json.contains("\"themeId\": \"LUXURY_GOLD\""));
    assert!(json.contains("\"photos\""));
    assert_eq!(SceneSnapshot::from_json(&json).expect("parse"), snap);
}

#[test]
fn missing_photos_default_to_empty() {
    let snap = SceneSnapshot::from_json(r#"{"mode":"SCATTERED","themeId":"AURORA_GREEN"}"#)
        .expect("parse");
    assert_eq!(snap.mode, TreeMode::Scattered);
    assert_eq!(snap.theme_id, ThemeId::AuroraGreen);
    assert!(snap.photos.is_empty());
}

#[test]
fn unknown_theme_is_rejected() {
    let err = SceneSnapshot::from_json(r#"{"mode":"SCATTERED","themeId":"NEON_PINK","photos":[]}"#);
    assert!(err.is_err());
    assert!("NEON_PINK".parse::<ThemeId>().is_err());
    assert_eq!("luxury_gold".parse::<ThemeId>().ok(), Some(ThemeId::LuxuryGold));
}

#[test]
fn scene_round_trips_through_a_snapshot() {
    let mut scene = tiny_scene();
    scene.set_mode(TreeMode::TreeShape);
    scene.set_theme(ThemeId::LuxuryGold);
    scene.set_photos(vec![Photo::new("one", summary()), Photo::new("two", summary())]);
    let json = scene.snapshot().to_json().expect("serialize");

    let mut restored = tiny_scene();
    let snap = SceneSnapshot::from_json(&json).expect("parse");
    restored.apply_snapshot(&snap, |src| Ok(Photo::new(src, summary())));
    assert_eq!(restored.mode(), TreeMode::TreeShape);
    assert_eq!(restored.theme().id, ThemeId::LuxuryGold);
    assert_eq!(restored.snapshot(), scene.snapshot());
    assert_eq!(
        restored.photo_layer().frames()[1].placement,
        scene.photo_layer().frames()[1].placement
    );
    assert_eq!(restored.foliage().needles(), scene.foliage().needles());
}

#[test]
fn photos_that_fail_to_load_are_skipped() {
    let mut scene = tiny_scene();
    let snap = SceneSnapshot {
        mode: TreeMode::Scattered,
        theme_id: ThemeId::AuroraGreen,
        photos: vec!["good".into(), "bad".into(), "also-good".into()],
    };
    scene.apply_snapshot(&snap, |src| {
        if src == "bad" {
            Err(PhotoError::Empty)
        } else {
            Ok(Photo::new(src, summary()))
        }
    });
    let sources: Vec<_> = scene.photos().iter().map(|p| p.source.as_str()).collect();
    assert_eq!(sources, ["good", "also-good"]);
}
