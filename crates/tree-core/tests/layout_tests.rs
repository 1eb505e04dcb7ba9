use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::constants::*;
use tree_core::geometry::cone_radius_at;
use tree_core::layers::fairy_lights::build_fairy_lights;
use tree_core::layers::foliage::build_needles;
use tree_core::layers::ornaments::{build_ornaments, OrnamentKind};
use tree_core::layers::photos::{ascent, photo_placement};
use tree_core::layers::ribbon::build_segments;
use tree_core::layers::sparkles::{build_sparkles, SparkleKind, EMERALD_FIELD, GOLD_DUST_FIELD, SNOW_FIELD};
use tree_core::layers::LayerCounts;
use tree_core::theme::ThemeId;

fn small_counts() -> LayerCounts {
    LayerCounts {
        foliage: 400,
        baubles: 30,
        gifts: 10,
        bells: 10,
        crystals: 10,
        berries: 40,
        fairy_lights: 60,
        ribbon_segments: 8,
        atmosphere: 20,
        snowflakes: 35,
        gold_dust: 50,
        emerald_motes: 20,
        stars: 100,
    }
}

#[test]
fn needles_are_reproducible_from_the_same_seed() {
    let theme = ThemeId::AuroraGreen.theme();
    let a = build_needles(&mut StdRng::seed_from_u64(42), &theme, 200);
    let b = build_needles(&mut StdRng::seed_from_u64(42), &theme, 200);
    assert_eq!(a, b);
    let c = build_needles(&mut StdRng::seed_from_u64(43), &theme, 200);
    assert_ne!(a, c);
}

#[test]
fn needles_use_only_theme_particle_colors() {
    let theme = ThemeId::LuxuryGold.theme();
    let needles = build_needles(&mut StdRng::seed_from_u64(7), &theme, 500);
    for n in &needles {
        assert!(n.color == theme.particles_primary || n.color == theme.particles_secondary);
        assert!(n.scatter.length() <= FOLIAGE_SCATTER_RADIUS + 1e-3);
        assert!(n.scale > 0.0);
    }
    // secondary color is the minority
    let secondary = needles
        .iter()
        .filter(|n| n.color == theme.particles_secondary)
        .count();
    assert!(secondary > 0 && secondary < needles.len() / 2);
}

#[test]
fn ornaments_hang_outside_the_foliage_in_push_order() {
    let theme = ThemeId::AuroraGreen.theme();
    let items = build_ornaments(&mut StdRng::seed_from_u64(9), &theme, &small_counts());
    assert_eq!(items.len(), 100);
    for o in &items {
        let factor = o.kind.push();
        let horizontal = (o.tree.x * o.tree.x + o.tree.z * o.tree.z).sqrt();
        // gifts may be lowered by 2, measure against the original height
        let y = if o.kind == OrnamentKind::Gift { o.tree.y + 2.0 } else { o.tree.y };
        let bound = cone_radius_at(y.min(TREE_HEIGHT / 2.0), TREE_HEIGHT, TREE_RADIUS) * factor;
        assert!(horizontal <= bound + 1e-3 || o.kind == OrnamentKind::Gift);
    }
    assert!(BERRY_PUSH < BAUBLE_PUSH);
    assert!(BAUBLE_PUSH <= BELL_PUSH);
    assert!(BELL_PUSH < CRYSTAL_PUSH);
    assert!(CRYSTAL_PUSH < GIFT_PUSH);
}

#[test]
fn single_color_groups_share_one_color() {
    let theme = ThemeId::AuroraGreen.theme();
    let items = build_ornaments(&mut StdRng::seed_from_u64(10), &theme, &small_counts());
    for kind in [OrnamentKind::Bell, OrnamentKind::Crystal, OrnamentKind::Berry] {
        let mut colors = items.iter().filter(|o| o.kind == kind).map(|o| o.color);
        let first = colors.next().expect("group is not empty");
        assert!(colors.all(|c| c == first));
    }
}

#[test]
fn fairy_lights_follow_the_spiral() {
    let lights = build_fairy_lights(&mut StdRng::seed_from_u64(11), 300);
    assert_eq!(lights.len(), 300);
    for l in &lights {
        assert!(l.tree.y >= -TREE_HEIGHT / 2.0 - 1e-4 && l.tree.y <= TREE_HEIGHT / 2.0 + 1e-4);
        let horizontal = (l.tree.x * l.tree.x + l.tree.z * l.tree.z).sqrt();
        assert!(horizontal <= SPIRAL_RADIUS * 1.1 + 1e-3);
        assert!(l.speed >= 2.0 && l.speed <= 5.0);
    }
    // first light sits near the base, last near the tip
    assert!(lights[0].tree.y < -5.0);
    assert!(lights[299].tree.y > 5.0);
}

#[test]
fn ribbon_segments_are_centred_on_their_curve() {
    let segments = build_segments(&mut StdRng::seed_from_u64(12), 8);
    assert_eq!(segments.len(), 8);
    for s in &segments {
        assert_eq!(s.curve.len(), RIBBON_CURVE_STEPS + 1);
        let centroid = s.curve.iter().copied().fold(Vec3::ZERO, |a, b| a + b) / s.curve.len() as f32;
        assert!(centroid.length() < 1e-3);
    }
    // lower segments come first
    assert!(segments[0].tree.y < segments[7].tree.y);
    assert!(build_segments(&mut StdRng::seed_from_u64(12), 0).is_empty());
}

#[test]
fn photo_placement_depends_only_on_index() {
    for i in 0..30 {
        assert_eq!(photo_placement(i), photo_placement(i));
    }
    assert_ne!(photo_placement(0), photo_placement(1));
}

#[test]
fn photo_heights_stay_below_the_star() {
    for i in 0..100 {
        let p = photo_placement(i);
        assert!(p.position.y <= PHOTO_Y_CLAMP + 1e-5);
        assert!(p.position.y >= PHOTO_Y_MIN - PHOTO_Y_JITTER);
        let r = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
        assert!((r - PHOTO_RADIUS).abs() <= PHOTO_RADIUS_JITTER / 2.0 + 1e-3);
        assert!(p.scatter.length() <= PHOTO_SCATTER_RADIUS + 1e-3);
    }
    assert!(PHOTO_Y_CLAMP < TREE_APEX_Y);
}

#[test]
fn ascent_climbs_then_wraps() {
    assert_eq!(ascent(0), 0.0);
    assert_eq!(ascent(PHOTOS_PER_ASCENT - 1), 1.0);
    assert_eq!(ascent(PHOTOS_PER_ASCENT), 0.0);
    for i in 1..PHOTOS_PER_ASCENT {
        assert!(ascent(i) > ascent(i - 1));
    }
}

#[test]
fn sparkle_fields_fill_their_boxes() {
    let counts = small_counts();
    let sparkles = build_sparkles(&mut StdRng::seed_from_u64(11), &counts);
    assert_eq!(
        sparkles.len(),
        counts.snowflakes + counts.gold_dust + counts.emerald_motes + counts.stars
    );
    for field in [SNOW_FIELD, GOLD_DUST_FIELD, EMERALD_FIELD] {
        let half = field.box_size / 2.0;
        let members: Vec<_> = sparkles.iter().filter(|s| s.kind == field.kind).collect();
        assert!(!members.is_empty());
        for s in members {
            assert!(s.position.abs().max_element() <= half + 1e-4);
            assert!((s.alpha - field.opacity).abs() < 1e-6);
            // drift keeps them near their box
            let moved = s.transform(123.0).translation - s.position;
            assert!(moved.length() <= s.drift * 3f32.sqrt() + 1e-4);
        }
    }
}

#[test]
fn starfield_sits_on_a_distant_shell() {
    let counts = small_counts();
    let sparkles = build_sparkles(&mut StdRng::seed_from_u64(12), &counts);
    let stars: Vec<_> = sparkles
        .iter()
        .filter(|s| s.kind == SparkleKind::Star)
        .collect();
    assert_eq!(stars.len(), counts.stars);
    for s in stars {
        let r = s.position.length();
        assert!(r >= STARFIELD_RADIUS - 1e-3);
        assert!(r <= STARFIELD_RADIUS + STARFIELD_DEPTH + 1e-3);
        assert_eq!(s.transform(5.0).translation, s.position);
    }
}
