//! Per-frame output handed to the rendering surface.
//!
//! Layers append one [`InstanceRaw`] per drawable to the batch of the mesh they
//! use. The renderer uploads each batch as an instance buffer and issues one
//! instanced draw per mesh kind.

use crate::constants::MAX_POINT_LIGHTS;
use crate::theme::Rgb;
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;

/// Unit geometries available to layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Needle,
    Sphere,
    Cube,
    Cone,
    Octahedron,
    Trunk,
    Star,
    Quad,
    Spark,
}

impl MeshKind {
    pub const COUNT: usize = 9;
    pub const ALL: [MeshKind; Self::COUNT] = [
        MeshKind::Needle,
        MeshKind::Sphere,
        MeshKind::Cube,
        MeshKind::Cone,
        MeshKind::Octahedron,
        MeshKind::Trunk,
        MeshKind::Star,
        MeshKind::Quad,
        MeshKind::Spark,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Decomposed transform; Euler angles use XYZ order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new(translation: Vec3, euler: Vec3, scale: f32) -> Self {
        Self {
            translation,
            rotation: Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z),
            scale: Vec3::splat(scale),
        }
    }

    pub fn with_scale3(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// x: emissive strength, yzw reserved
    pub params: [f32; 4],
}

impl InstanceRaw {
    pub fn new(model: Mat4, color: Rgb, alpha: f32, emissive: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.with_alpha(alpha),
            params: [emissive, 0.0, 0.0, 0.0],
        }
    }

    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }

    /// Largest axis scale encoded in the model matrix.
    pub fn max_scale(&self) -> f32 {
        let m = Mat4::from_cols_array_2d(&self.model);
        m.x_axis
            .truncate()
            .length()
            .max(m.y_axis.truncate().length())
            .max(m.z_axis.truncate().length())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Rgb,
    pub intensity: f32,
    pub range: f32,
}

/// Elapsed and delta time for one frame, in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    pub elapsed: f32,
    pub delta: f32,
}

impl FrameClock {
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// Advance by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.delta = delta.max(0.0);
        self.elapsed += self.delta;
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Default)]
pub struct FrameOutput {
    batches: [Vec<InstanceRaw>; MeshKind::COUNT],
    pub lights: SmallVec<[PointLight; MAX_POINT_LIGHTS]>,
}

impl FrameOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's instances but keep the allocations.
    pub fn clear(&mut self) {
        for b in &mut self.batches {
            b.clear();
        }
        self.lights.clear();
    }

    #[inline]
    pub fn push(&mut self, mesh: MeshKind, instance: InstanceRaw) {
        self.batches[mesh.index()].push(instance);
    }

    #[inline]
    pub fn batch(&self, mesh: MeshKind) -> &[InstanceRaw] {
        &self.batches[mesh.index()]
    }

    pub fn batch_mut(&mut self, mesh: MeshKind) -> &mut Vec<InstanceRaw> {
        &mut self.batches[mesh.index()]
    }

    /// Lights beyond the renderer's budget are dropped.
    pub fn push_light(&mut self, light: PointLight) {
        if self.lights.len() < MAX_POINT_LIGHTS {
            self.lights.push(light);
        }
    }

    pub fn instance_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    pub fn batches(&self) -> impl Iterator<Item = (MeshKind, &[InstanceRaw])> {
        MeshKind::ALL
            .iter()
            .map(move |k| (*k, self.batches[k.index()].as_slice()))
    }
}
