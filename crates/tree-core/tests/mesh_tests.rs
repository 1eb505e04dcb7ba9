use tree_core::mesh::{mesh_for, uv_sphere};
use tree_core::MeshKind;

#[test]
fn every_mesh_has_valid_triangles() {
    for kind in MeshKind::ALL {
        let m = mesh_for(kind);
        assert!(!m.vertices.is_empty(), "{kind:?} has no vertices");
        assert_eq!(m.indices.len() % 3, 0, "{kind:?} index count");
        for &i in &m.indices {
            assert!((i as usize) < m.vertices.len(), "{kind:?} index {i} out of range");
        }
        for v in &m.vertices {
            let [x, y, z] = v.normal;
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < 1e-3, "{kind:?} normal not unit");
        }
    }
}

#[test]
fn sphere_vertices_sit_on_radius() {
    let m = uv_sphere(2.0, 8, 12);
    for v in &m.vertices {
        let [x, y, z] = v.position;
        assert!(((x * x + y * y + z * z).sqrt() - 2.0).abs() < 1e-4);
    }
}

#[test]
fn needle_fits_its_radius() {
    let m = mesh_for(MeshKind::Needle);
    for v in &m.vertices {
        let [x, y, z] = v.position;
        assert!((x * x + y * y + z * z).sqrt() <= 0.15 + 1e-4);
    }
}
