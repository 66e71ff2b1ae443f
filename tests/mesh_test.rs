use cgmath::{InnerSpace, Vector3};
use still_life::data_structures::mesh::{MeshData, MeshKind};

fn face_normal(mesh: &MeshData, tri: &[u32]) -> Vector3<f32> {
    let p = |i: u32| Vector3::from(mesh.vertices[i as usize].position);
    (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]))
}

fn assert_well_formed(mesh: &MeshData) {
    assert!(!mesh.vertices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0);
    assert!(
        mesh.indices
            .iter()
            .all(|&i| (i as usize) < mesh.vertices.len())
    );
    for v in &mesh.vertices {
        let n = Vector3::from(v.normal);
        assert!((n.magnitude() - 1.0).abs() < 1e-4, "normal {:?} is not unit length", n);
    }
}

/// Front faces wind counter-clockwise, so the face normal points the same
/// way as the vertex normals.
fn assert_ccw(mesh: &MeshData) {
    for tri in mesh.indices.chunks_exact(3) {
        let face = face_normal(mesh, tri);
        if face.magnitude2() < 1e-12 {
            continue;
        }
        let vertex_normals: Vector3<f32> = tri
            .iter()
            .map(|&i| Vector3::from(mesh.vertices[i as usize].normal))
            .fold(Vector3::new(0.0, 0.0, 0.0), |acc, n| acc + n);
        assert!(
            face.dot(vertex_normals) > 0.0,
            "triangle {:?} winds clockwise",
            tri
        );
    }
}

#[test]
fn should_generate_plane_facing_up() {
    let plane = MeshData::plane();

    assert_well_formed(&plane);
    assert_ccw(&plane);
    assert_eq!(plane.vertices.len(), 4);
    assert_eq!(plane.indices, vec![0, 1, 2, 0, 2, 3]);
    assert!(plane.vertices.iter().all(|v| v.position[1] == 0.0));
}

#[test]
fn should_generate_unit_capped_cylinder() {
    let cylinder = MeshData::cylinder(12);

    assert_well_formed(&cylinder);
    assert_ccw(&cylinder);
    for v in &cylinder.vertices {
        let [x, y, z] = v.position;
        assert!((0.0..=1.0).contains(&y));
        assert!((x * x + z * z).sqrt() <= 1.0 + 1e-5);
    }
    // side wall plus two caps
    assert_eq!(cylinder.indices.len(), 12 * 6 + 2 * 12 * 3);
}

#[test]
fn should_generate_torus_around_the_origin() {
    let torus = MeshData::torus(1.0, 0.1, 16, 8);

    assert_well_formed(&torus);
    assert_ccw(&torus);
    for v in &torus.vertices {
        let [x, y, z] = v.position;
        let ring_distance = ((x * x + y * y).sqrt() - 1.0).hypot(z);
        assert!((ring_distance - 0.1).abs() < 1e-4);
    }
}

#[test]
fn should_generate_every_kind() {
    for kind in MeshKind::ALL {
        let mesh = MeshData::for_kind(kind);
        assert_well_formed(&mesh);
        assert_ccw(&mesh);
    }
}
