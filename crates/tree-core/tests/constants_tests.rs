// Relationships between the tuning constants that the animation relies on.

use tree_core::constants::*;
use tree_core::layers::LayerCounts;

#[test]
#[allow(clippy::assertions_on_constants)]
fn structural_layers_settle_before_decorations() {
    assert!(FOLIAGE_DAMPING > RIBBON_DAMPING);
    assert!(STAR_DAMPING > LIGHT_DAMPING);
    assert!(FOLIAGE_DAMPING > ORNAMENT_DAMPING);
    assert!(PHOTO_HOVER_DAMPING > PHOTO_SCALE_DAMPING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_sits_on_the_apex_above_photos() {
    assert!((TREE_APEX_Y - 5.5).abs() < 1e-6);
    assert!(PHOTO_Y_CLAMP < TREE_APEX_Y);
    assert!(PHOTO_Y_MIN < PHOTO_Y_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_range_contains_default_distance() {
    assert!(CAMERA_MIN_DISTANCE < CAMERA_DISTANCE);
    assert!(CAMERA_DISTANCE < CAMERA_MAX_DISTANCE);
}

#[test]
fn density_scales_counts() {
    let full = LayerCounts::default();
    assert_eq!(full.foliage, FOLIAGE_COUNT);
    let half = LayerCounts::scaled(0.5);
    assert_eq!(half.foliage, FOLIAGE_COUNT / 2);
    // tiny densities keep at least one of everything
    let tiny = LayerCounts::scaled(0.0001);
    assert_eq!(tiny.ribbon_segments, 1);
    assert_eq!(LayerCounts::scaled(0.0).foliage, 0);
}

#[test]
fn density_is_clamped() {
    let capped = LayerCounts::scaled(MAX_DENSITY);
    assert_eq!(LayerCounts::scaled(1e30), capped);
    assert_eq!(LayerCounts::scaled(f32::INFINITY), capped);
    assert_eq!(capped.foliage, (FOLIAGE_COUNT as f32 * MAX_DENSITY).round() as usize);
    assert_eq!(LayerCounts::scaled(-3.0).foliage, 0);
    assert_eq!(LayerCounts::scaled(f32::NAN).stars, 0);
}
