//! Floating photo frames spiralling loosely around the tree.
//!
//! Placement is keyed by photo index only, so the layout is identical across
//! rebuilds and appending photos never moves the ones already placed.

use super::{BuildContext, Layer, LayerFrame};
use crate::constants::*;
use crate::geometry::{lerp, lerp_vec3, random_sphere_point};
use crate::instance::{FrameOutput, InstanceRaw, MeshKind, PointLight, Transform};
use crate::morph::{HoverScale, MorphProgress};
use crate::picking::ray_sphere;
use crate::seed::photo_rng;
use crate::theme::Rgb;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;

const PLATE_SIZE: [f32; 3] = [1.7, 1.4, 0.04];
const FACE_SIZE: [f32; 2] = [1.5, 1.2];
const FACE_OFFSET: f32 = 0.03;
const BOB_AMPLITUDE: f32 = 0.15;

/// Resting placement of the photo at a given index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoPlacement {
    pub position: Vec3,
    pub scatter: Vec3,
    pub rotation: Vec3,
    /// Horizontal angle around the tree.
    pub angle: f32,
}

/// Fraction of the climb from base to top for the photo at `index`.
#[inline]
pub fn ascent(index: usize) -> f32 {
    let step = index % PHOTOS_PER_ASCENT;
    step as f32 / (PHOTOS_PER_ASCENT - 1) as f32
}

pub fn photo_placement(index: usize) -> PhotoPlacement {
    let mut rng = photo_rng(index);
    let r1 = rng.gen::<f32>();
    let r2 = rng.gen::<f32>();
    let r3 = rng.gen::<f32>();

    let mut y = lerp(PHOTO_Y_MIN, PHOTO_Y_MAX, ascent(index));
    y += (r1 - 0.5) * PHOTO_Y_JITTER;
    y = y.min(PHOTO_Y_CLAMP);

    let angle = index as f32 * PHOTO_ANGLE_STEP + (r2 - 0.5) * PHOTO_ANGLE_JITTER;
    let radius = PHOTO_RADIUS + (r3 - 0.5) * PHOTO_RADIUS_JITTER;
    let position = Vec3::new(angle.sin() * radius, y, angle.cos() * radius);

    // Face roughly towards the trunk with a loose tilt and roll
    let rotation = Vec3::new(
        (r2 - 0.5) * 0.4,
        angle + PI + (r1 - 0.5) * 0.6,
        (r3 - 0.5) * 0.2,
    );

    PhotoPlacement {
        position,
        scatter: random_sphere_point(&mut rng, PHOTO_SCATTER_RADIUS),
        rotation,
        angle,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoFrame {
    pub source: String,
    pub tint: Rgb,
    pub placement: PhotoPlacement,
    progress: MorphProgress,
    hover: HoverScale,
    world_center: Vec3,
    world_scale: f32,
}

impl PhotoFrame {
    fn new(source: String, tint: Rgb, placement: PhotoPlacement) -> Self {
        Self {
            source,
            tint,
            placement,
            progress: MorphProgress::new(PHOTO_SCALE_DAMPING),
            hover: HoverScale::new(PHOTO_HOVER_SCALE, PHOTO_HOVER_DAMPING),
            world_center: placement.scatter,
            world_scale: 0.0,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    #[inline]
    pub fn hover_scale(&self) -> f32 {
        self.hover.value()
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hover.is_hovered()
    }

    /// Displayed scale: assembly progress times the hover multiplier.
    #[inline]
    pub fn display_scale(&self) -> f32 {
        self.progress.value() * self.hover.value()
    }

    pub fn world_center(&self) -> Vec3 {
        self.world_center
    }

    /// Local transform (before the carousel rotation).
    pub fn transform(&self, index: usize, t: f32) -> Transform {
        let p = self.progress.value();
        let mut position = lerp_vec3(self.placement.scatter, self.placement.position, p);
        // Hovered photos bob slower so they are easier to look at
        let bob_speed = if self.is_hovered() { 0.2 } else { 0.8 };
        position.y += (t * bob_speed + index as f32 * 13.0).sin() * BOB_AMPLITUDE;
        Transform::new(position, self.placement.rotation, self.display_scale())
    }
}

pub struct PhotoLayer {
    frames: Vec<PhotoFrame>,
    carousel: f32,
    plate_color: Rgb,
    light_color: Rgb,
}

impl Default for PhotoLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoLayer {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            carousel: 0.0,
            plate_color: Rgb::default(),
            light_color: Rgb::default(),
        }
    }

    pub fn frames(&self) -> &[PhotoFrame] {
        &self.frames
    }

    /// Current rotation of the whole carousel about the vertical axis.
    pub fn carousel_angle(&self) -> f32 {
        self.carousel
    }

    /// Route pointer enter/leave: only `index` (if any) is hovered afterwards.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        for (i, frame) in self.frames.iter_mut().enumerate() {
            if Some(i) == index {
                frame.hover.pointer_enter();
            } else {
                frame.hover.pointer_leave();
            }
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.frames.iter().position(PhotoFrame::is_hovered)
    }

    /// Nearest photo hit by the ray, using last frame's world placement.
    pub fn pick(&self, origin: Vec3, dir: Vec3) -> Option<usize> {
        let mut best = None::<(usize, f32)>;
        for (i, frame) in self.frames.iter().enumerate() {
            if frame.world_scale < 0.05 {
                continue;
            }
            let radius = PHOTO_PICK_RADIUS * frame.world_scale;
            if let Some(t) = ray_sphere(origin, dir, frame.world_center, radius) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(i, _)| i)
    }
}

impl Layer for PhotoLayer {
    fn name(&self) -> &'static str {
        "photos"
    }

    fn rebuild(&mut self, ctx: &BuildContext<'_>) {
        let mut previous = std::mem::take(&mut self.frames);
        self.frames = ctx
            .photos
            .iter()
            .enumerate()
            .map(|(i, photo)| {
                let placement = photo_placement(i);
                let mut frame = PhotoFrame::new(photo.source.clone(), photo.summary.tint, placement);
                // A photo that stays at its index keeps its animation state
                if let Some(old) = previous.get_mut(i).filter(|o| o.source == photo.source) {
                    frame.progress = old.progress;
                    frame.hover = old.hover;
                    frame.world_center = old.world_center;
                    frame.world_scale = old.world_scale;
                }
                frame
            })
            .collect();
        self.plate_color = ctx.theme.ornaments;
        self.light_color = ctx.theme.bloom;
        log::debug!("[layout] photos={}", self.frames.len());
    }

    fn step(&mut self, frame: &LayerFrame, out: &mut FrameOutput) {
        if self.frames.is_empty() {
            return;
        }
        let dt = frame.dt();
        let t = frame.time();
        self.carousel += dt.max(0.0) * PHOTO_CAROUSEL_SPEED;
        let carousel = Mat4::from_rotation_y(self.carousel);

        let plate = Mat4::from_scale(Vec3::from(PLATE_SIZE));
        let face_scale = Vec3::new(FACE_SIZE[0], FACE_SIZE[1], 1.0);
        let front = Mat4::from_scale_rotation_translation(
            face_scale,
            Quat::IDENTITY,
            Vec3::new(0.0, 0.0, FACE_OFFSET),
        );
        let back = Mat4::from_scale_rotation_translation(
            face_scale,
            Quat::from_euler(EulerRot::XYZ, 0.0, PI, 0.0),
            Vec3::new(0.0, 0.0, -FACE_OFFSET),
        );

        for (i, photo) in self.frames.iter_mut().enumerate() {
            photo.progress.step(frame.target(), dt);
            photo.hover.step(dt);
            let local = photo.transform(i, t);
            let world = carousel * local.matrix();
            photo.world_center = world.transform_point3(Vec3::ZERO);
            photo.world_scale = local.scale.x;

            out.push(
                MeshKind::Cube,
                InstanceRaw::new(world * plate, self.plate_color, 1.0, 0.0),
            );
            out.push(MeshKind::Quad, InstanceRaw::new(world * front, photo.tint, 1.0, 1.0));
            out.push(MeshKind::Quad, InstanceRaw::new(world * back, photo.tint, 1.0, 1.0));

            if photo.is_hovered() {
                out.push_light(PointLight {
                    position: photo.world_center,
                    color: self.light_color,
                    intensity: 2.0,
                    range: 3.0,
                });
            }
        }
    }

    fn entity_count(&self) -> usize {
        self.frames.len()
    }

    fn progress(&self) -> Option<f32> {
        if self.frames.is_empty() {
            return None;
        }
        let sum: f32 = self.frames.iter().map(PhotoFrame::progress).sum();
        Some(sum / self.frames.len() as f32)
    }
}
