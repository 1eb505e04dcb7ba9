use glam::Vec3;
use tree_core::layers::ornaments::OrnamentKind;
use tree_core::layers::LayerCounts;
use tree_core::{
    FrameClock, FrameOutput, MeshKind, Photo, PhotoSummary, Rgb, Scene, SceneConfig, ThemeId,
    TreeMode, BREATHE_BASE, MAX_POINT_LIGHTS, TREE_APEX_Y,
};

const DT: f32 = 1.0 / 60.0;

fn small_config() -> SceneConfig {
    SceneConfig {
        seed: 1234,
        mode: TreeMode::Scattered,
        theme: ThemeId::AuroraGreen,
        counts: LayerCounts {
            foliage: 300,
            baubles: 20,
            gifts: 8,
            bells: 8,
            crystals: 8,
            berries: 30,
            fairy_lights: 40,
            ribbon_segments: 8,
            atmosphere: 10,
            snowflakes: 12,
            gold_dust: 15,
            emerald_motes: 6,
            stars: 30,
        },
    }
}

fn photo(name: &str) -> Photo {
    Photo::new(
        name,
        PhotoSummary {
            width: 4,
            height: 3,
            tint: Rgb([0.8, 0.2, 0.2]),
        },
    )
}

fn run(scene: &mut Scene, clock: &mut FrameClock, out: &mut FrameOutput, seconds: f32) {
    let frames = (seconds / DT).round() as usize;
    for _ in 0..frames {
        clock.advance(DT);
        scene.update(*clock, out);
    }
}

fn progress_of(scene: &Scene, name: &str) -> f32 {
    scene
        .progress()
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, p)| p)
        .unwrap_or(f32::NAN)
}

#[test]
fn tree_assembles_after_toggling_mode() {
    let mut scene = Scene::new(small_config());
    let mut clock = FrameClock::default();
    let mut out = FrameOutput::new();

    run(&mut scene, &mut clock, &mut out, 1.0);
    for (name, p) in scene.progress() {
        assert!(p < 1e-6, "{name} moved while scattered: {p}");
    }

    scene.toggle_mode();
    assert_eq!(scene.mode(), TreeMode::TreeShape);
    run(&mut scene, &mut clock, &mut out, 0.5);
    // star and foliage settle faster than the ribbon
    assert!(progress_of(&scene, "foliage") > progress_of(&scene, "ribbon"));
    assert!(progress_of(&scene, "star") > progress_of(&scene, "fairy_lights"));

    run(&mut scene, &mut clock, &mut out, 6.0);
    for (name, p) in scene.progress() {
        assert!(p > 0.99, "{name} only reached {p}");
        assert!(p <= 1.0);
    }

    // rendered positions land on the stored tree positions, up to breathing
    let needles = out.batch(MeshKind::Needle);
    assert_eq!(needles.len(), scene.foliage().needles().len());
    for (inst, needle) in needles.iter().zip(scene.foliage().needles()) {
        let d = (inst.translation() - needle.tree).length();
        assert!(d <= BREATHE_BASE + 0.05, "needle {d} from its tree slot");
    }

    let star = out.batch(MeshKind::Star)[0].translation();
    assert!((star - Vec3::new(0.0, TREE_APEX_Y, 0.0)).length() < 0.05);

    for item in scene.ornaments().items() {
        let batch = out.batch(item.kind.mesh());
        let nearest = batch
            .iter()
            .map(|inst| (inst.translation() - item.tree).length())
            .fold(f32::MAX, f32::min);
        assert!(nearest < 0.05, "{:?} {nearest} from its tree slot", item.kind);
    }
    assert!(scene.ornaments().of_kind(OrnamentKind::Berry).count() > 0);
}

#[test]
fn scattering_again_reverses_progress() {
    let mut scene = Scene::new(SceneConfig {
        mode: TreeMode::TreeShape,
        ..small_config()
    });
    let mut clock = FrameClock::default();
    let mut out = FrameOutput::new();
    run(&mut scene, &mut clock, &mut out, 5.0);
    let assembled = progress_of(&scene, "foliage");
    scene.set_mode(TreeMode::Scattered);
    run(&mut scene, &mut clock, &mut out, 1.0);
    assert!(progress_of(&scene, "foliage") < assembled);
}

#[test]
fn frame_output_covers_every_entity() {
    let mut scene = Scene::new(small_config());
    let mut out = FrameOutput::new();
    scene.update(FrameClock::new(0.0, DT), &mut out);

    let cfg = small_config();
    assert_eq!(out.batch(MeshKind::Needle).len(), cfg.counts.foliage);
    assert_eq!(out.batch(MeshKind::Trunk).len(), 1);
    assert_eq!(out.batch(MeshKind::Star).len(), 1);
    assert_eq!(out.batch(MeshKind::Cone).len(), cfg.counts.bells);
    assert_eq!(out.batch(MeshKind::Octahedron).len(), cfg.counts.crystals);
    assert_eq!(
        out.batch(MeshKind::Cube).len(),
        cfg.counts.gifts + cfg.counts.atmosphere
    );
    assert_eq!(
        out.batch(MeshKind::Spark).len(),
        cfg.counts.snowflakes + cfg.counts.gold_dust + cfg.counts.emerald_motes + cfg.counts.stars
    );
    // no photos, no quads
    assert!(out.batch(MeshKind::Quad).is_empty());
    assert!(out.lights.len() <= MAX_POINT_LIGHTS);

    // the buffer is reused, not appended to
    let before = out.instance_count();
    scene.update(FrameClock::new(DT, DT), &mut out);
    assert_eq!(out.instance_count(), before);
}

#[test]
fn same_seed_gives_same_layout() {
    let a = Scene::new(small_config());
    let b = Scene::new(small_config());
    assert_eq!(a.foliage().needles(), b.foliage().needles());
    assert_eq!(a.ornaments().items(), b.ornaments().items());
    assert_eq!(a.ribbon().segments(), b.ribbon().segments());
    assert_eq!(a.star().scatter(), b.star().scatter());
}

#[test]
fn theme_change_only_recolors() {
    let mut scene = Scene::new(small_config());
    let needles_before = scene.foliage().needles().to_vec();
    let ornaments_before = scene.ornaments().items().to_vec();
    let star_before = scene.star().scatter();

    scene.set_theme(ThemeId::LuxuryGold);
    assert_eq!(scene.theme().id, ThemeId::LuxuryGold);

    let needles_after = scene.foliage().needles();
    assert_eq!(needles_before.len(), needles_after.len());
    let mut recolored = 0;
    for (a, b) in needles_before.iter().zip(needles_after) {
        assert_eq!(a.scatter, b.scatter);
        assert_eq!(a.tree, b.tree);
        assert_eq!(a.scale, b.scale);
        if a.color != b.color {
            recolored += 1;
        }
    }
    assert_eq!(recolored, needles_before.len());
    for (a, b) in ornaments_before.iter().zip(scene.ornaments().items()) {
        assert_eq!(a.tree, b.tree);
        assert_eq!(a.scatter, b.scatter);
    }
    assert_eq!(scene.star().scatter(), star_before);
}

#[test]
fn theme_change_keeps_progress() {
    let mut scene = Scene::new(SceneConfig {
        mode: TreeMode::TreeShape,
        ..small_config()
    });
    let mut clock = FrameClock::default();
    let mut out = FrameOutput::new();
    run(&mut scene, &mut clock, &mut out, 1.0);
    let before = progress_of(&scene, "foliage");
    scene.cycle_theme();
    assert_eq!(progress_of(&scene, "foliage"), before);
}

#[test]
fn appending_photos_keeps_earlier_ones_in_place() {
    let mut scene = Scene::new(small_config());
    scene.set_photos(vec![photo("a"), photo("b"), photo("c")]);
    let before: Vec<_> = scene
        .photo_layer()
        .frames()
        .iter()
        .map(|f| f.placement)
        .collect();
    scene.extend_photos(vec![photo("d"), photo("e")]);
    let after = scene.photo_layer().frames();
    assert_eq!(after.len(), 5);
    for (i, placement) in before.iter().enumerate() {
        assert_eq!(after[i].placement, *placement);
    }
}

#[test]
fn photos_emit_a_plate_and_two_faces() {
    let mut scene = Scene::new(SceneConfig {
        counts: LayerCounts {
            atmosphere: 0,
            gifts: 0,
            ..small_config().counts
        },
        ..small_config()
    });
    scene.push_photo(photo("a"));
    scene.push_photo(photo("b"));
    let mut out = FrameOutput::new();
    scene.update(FrameClock::new(0.0, DT), &mut out);
    assert_eq!(out.batch(MeshKind::Quad).len(), 4);
    assert_eq!(out.batch(MeshKind::Cube).len(), 2);
}

#[test]
fn hovering_a_photo_scales_it_up() {
    let mut scene = Scene::new(SceneConfig {
        mode: TreeMode::TreeShape,
        ..small_config()
    });
    scene.set_photos(vec![photo("a"), photo("b")]);
    let mut clock = FrameClock::default();
    let mut out = FrameOutput::new();
    run(&mut scene, &mut clock, &mut out, 4.0);

    scene.set_hovered_photo(Some(1));
    assert_eq!(scene.hovered_photo(), Some(1));
    run(&mut scene, &mut clock, &mut out, 3.0);
    let frames = scene.photo_layer().frames();
    assert!((frames[1].hover_scale() - 1.8).abs() < 0.01);
    assert!((frames[0].hover_scale() - 1.0).abs() < 1e-6);
    assert!(frames[1].display_scale() > frames[0].display_scale());

    scene.set_hovered_photo(None);
    assert_eq!(scene.hovered_photo(), None);
}

#[test]
fn picking_finds_the_photo_under_the_ray() {
    let mut scene = Scene::new(SceneConfig {
        mode: TreeMode::TreeShape,
        ..small_config()
    });
    scene.set_photos(vec![photo("a")]);
    let mut clock = FrameClock::default();
    let mut out = FrameOutput::new();
    run(&mut scene, &mut clock, &mut out, 4.0);

    let center = scene.photo_layer().frames()[0].world_center();
    let origin = center * 3.0;
    let dir = (center - origin).normalize();
    assert_eq!(scene.pick_photo(origin, dir), Some(0));
    assert_eq!(scene.pick_photo(origin, -dir), None);
    assert_eq!(scene.pick_photo(Vec3::new(0.0, 100.0, 0.0), Vec3::Y), None);
}

#[test]
fn zero_photos_is_a_no_op() {
    let mut scene = Scene::new(small_config());
    scene.set_photos(Vec::new());
    let mut out = FrameOutput::new();
    scene.update(FrameClock::new(0.0, DT), &mut out);
    assert!(out.batch(MeshKind::Quad).is_empty());
    assert!(scene.photo_layer().frames().is_empty());
    assert!(scene.progress().iter().all(|(name, _)| *name != "photos"));
}

#[test]
fn adding_photos_while_scattered_assembles_the_tree() {
    let mut scene = Scene::new(small_config());
    let mut clock = FrameClock::default();
    let mut out = FrameOutput::new();
    scene.push_photo(photo("a"));
    run(&mut scene, &mut clock, &mut out, 1.0);
    // scattered photos stay collapsed
    assert_eq!(scene.photo_layer().frames()[0].display_scale(), 0.0);

    assert!(scene.reveal_photos());
    assert_eq!(scene.mode(), TreeMode::TreeShape);
    run(&mut scene, &mut clock, &mut out, 2.0);
    assert!(scene.photo_layer().frames()[0].display_scale() > 0.9);
    let quads = out.batch(MeshKind::Quad);
    assert_eq!(quads.len(), 2);
    assert!(quads[0].max_scale() > 0.5);

    // already assembled: nothing to do
    assert!(!scene.reveal_photos());
    assert_eq!(scene.mode(), TreeMode::TreeShape);
}

#[test]
fn sparkles_ignore_the_mode() {
    let mut scene = Scene::new(small_config());
    let mut out = FrameOutput::new();
    scene.update(FrameClock::new(3.0, DT), &mut out);
    let scattered = out.batch(MeshKind::Spark).to_vec();
    scene.toggle_mode();
    scene.update(FrameClock::new(3.0, DT), &mut out);
    assert_eq!(out.batch(MeshKind::Spark), scattered.as_slice());
    assert!(scene.progress().iter().all(|(name, _)| *name != "sparkles"));
}
