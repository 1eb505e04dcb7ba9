//! Unit geometry for every [`MeshKind`]. Instances scale and place them.
//!
//! Faceted shapes duplicate vertices per face so flat normals survive; the
//! sphere and the round side walls share vertices for smooth shading.

use crate::instance::MeshKind;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let i = self.vertices.len() as u16;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        });
        i
    }

    /// Flat-shaded triangle, wound counter-clockwise seen from outside.
    fn tri(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let n = (b - a).cross(c - a);
        let ia = self.push(a, n);
        let ib = self.push(b, n);
        let ic = self.push(c, n);
        self.indices.extend_from_slice(&[ia, ib, ic]);
    }

    fn quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) {
        self.tri(a, b, c);
        self.tri(a, c, d);
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

pub fn mesh_for(kind: MeshKind) -> MeshData {
    match kind {
        MeshKind::Needle => tetrahedron(0.15),
        MeshKind::Sphere => uv_sphere(1.0, 12, 16),
        MeshKind::Cube => cube(1.0),
        MeshKind::Cone => cone(0.5, 1.2, 16),
        MeshKind::Octahedron => octahedron(1.0),
        MeshKind::Trunk => frustum(0.4, 1.4, 3.5, 8),
        MeshKind::Star => star_prism(0.8, 0.38, 0.2, 5),
        MeshKind::Quad => quad(1.0, 1.0),
        MeshKind::Spark => octahedron(1.0),
    }
}

pub fn tetrahedron(radius: f32) -> MeshData {
    let k = radius / 3f32.sqrt();
    let v = [
        Vec3::new(k, k, k),
        Vec3::new(-k, -k, k),
        Vec3::new(-k, k, -k),
        Vec3::new(k, -k, -k),
    ];
    let mut m = MeshData::default();
    m.tri(v[2], v[1], v[0]);
    m.tri(v[0], v[3], v[2]);
    m.tri(v[1], v[3], v[0]);
    m.tri(v[2], v[3], v[1]);
    m
}

pub fn octahedron(radius: f32) -> MeshData {
    let px = Vec3::X * radius;
    let nx = -px;
    let py = Vec3::Y * radius;
    let ny = -py;
    let pz = Vec3::Z * radius;
    let nz = -pz;
    let mut m = MeshData::default();
    m.tri(px, py, pz);
    m.tri(pz, py, nx);
    m.tri(nx, py, nz);
    m.tri(nz, py, px);
    m.tri(px, pz, ny);
    m.tri(pz, nx, ny);
    m.tri(nx, nz, ny);
    m.tri(nz, px, ny);
    m
}

pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    let c = |x: f32, y: f32, z: f32| Vec3::new(x * h, y * h, z * h);
    let mut m = MeshData::default();
    m.quad(c(-1., -1., 1.), c(1., -1., 1.), c(1., 1., 1.), c(-1., 1., 1.));
    m.quad(c(1., -1., -1.), c(-1., -1., -1.), c(-1., 1., -1.), c(1., 1., -1.));
    m.quad(c(1., -1., 1.), c(1., -1., -1.), c(1., 1., -1.), c(1., 1., 1.));
    m.quad(c(-1., -1., -1.), c(-1., -1., 1.), c(-1., 1., 1.), c(-1., 1., -1.));
    m.quad(c(-1., 1., 1.), c(1., 1., 1.), c(1., 1., -1.), c(-1., 1., -1.));
    m.quad(c(-1., -1., -1.), c(1., -1., -1.), c(1., -1., 1.), c(-1., -1., 1.));
    m
}

/// Unit quad in the XY plane facing +Z.
pub fn quad(width: f32, height: f32) -> MeshData {
    let (w, h) = (width * 0.5, height * 0.5);
    let mut m = MeshData::default();
    m.quad(
        Vec3::new(-w, -h, 0.0),
        Vec3::new(w, -h, 0.0),
        Vec3::new(w, h, 0.0),
        Vec3::new(-w, h, 0.0),
    );
    m
}

pub fn uv_sphere(radius: f32, stacks: u32, sectors: u32) -> MeshData {
    let mut m = MeshData::default();
    for i in 0..=stacks {
        let phi = PI * i as f32 / stacks as f32;
        for j in 0..=sectors {
            let theta = TAU * j as f32 / sectors as f32;
            let n = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            m.push(n * radius, n);
        }
    }
    let row = sectors + 1;
    for i in 0..stacks {
        for j in 0..sectors {
            let a = (i * row + j) as u16;
            let b = a + row as u16;
            m.indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    m
}

/// Truncated cone centred on the origin along Y. A zero `top` gives a cone.
pub fn frustum(top: f32, bottom: f32, height: f32, segments: u32) -> MeshData {
    let h = height * 0.5;
    let slope = (bottom - top) / height;
    let mut m = MeshData::default();
    let ring = |r: f32, y: f32, a: f32| Vec3::new(a.cos() * r, y, a.sin() * r);
    for s in 0..segments {
        let a0 = TAU * s as f32 / segments as f32;
        let a1 = TAU * (s + 1) as f32 / segments as f32;
        let n0 = Vec3::new(a0.cos(), slope, a0.sin());
        let n1 = Vec3::new(a1.cos(), slope, a1.sin());
        let i0 = m.push(ring(bottom, -h, a0), n0);
        let i1 = m.push(ring(bottom, -h, a1), n1);
        let i2 = m.push(ring(top, h, a1), n1);
        let i3 = m.push(ring(top, h, a0), n0);
        m.indices.extend_from_slice(&[i0, i2, i1, i0, i3, i2]);

        m.tri(Vec3::new(0.0, -h, 0.0), ring(bottom, -h, a0), ring(bottom, -h, a1));
        if top > 0.0 {
            m.tri(Vec3::new(0.0, h, 0.0), ring(top, h, a1), ring(top, h, a0));
        }
    }
    m
}

pub fn cone(radius: f32, height: f32, segments: u32) -> MeshData {
    frustum(0.0, radius, height, segments)
}

/// Extruded five-pointed star lying in the XY plane, centred on the origin.
pub fn star_prism(outer: f32, inner: f32, depth: f32, points: u32) -> MeshData {
    let n = points * 2;
    let outline: Vec<Vec3> = (0..n)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = PI * 0.5 + PI * i as f32 / points as f32;
            Vec3::new(a.cos() * r, a.sin() * r, 0.0)
        })
        .collect();
    let front = Vec3::Z * depth * 0.5;
    let mut m = MeshData::default();
    for i in 0..n as usize {
        let a = outline[i];
        let b = outline[(i + 1) % n as usize];
        m.tri(front, a + front, b + front);
        m.tri(-front, b - front, a - front);
        m.quad(a - front, b - front, b + front, a + front);
    }
    m
}
