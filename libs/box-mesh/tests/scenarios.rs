use approx::assert_relative_eq;
use box_mesh::{BoxMeshGenerator, BoxSpec, MeshError, RebuildAction, TopologyState};
use glam::DVec3;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn unit_cube_without_subdivisions() {
    init_logging();
    let mut generator = BoxMeshGenerator::new();
    let mesh = generator.build(BoxSpec::new([2.0; 3], [0, 0, 0]).unwrap()).unwrap();

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.polygon_count(), 6);
    assert_eq!(mesh.poly_counts(), &[4; 6]);
    assert_eq!(mesh.bounding_box(), (DVec3::splat(-1.0), DVec3::ONE));
    assert!(mesh.validate().is_ok());
}

#[test]
fn single_cut_along_x() {
    init_logging();
    let mut generator = BoxMeshGenerator::new();
    let mesh = generator.build(BoxSpec::new([2.0; 3], [1, 0, 0]).unwrap()).unwrap();

    // two unit cubes glued along x = 0: 10 outer quads, 12 vertices
    assert_eq!(mesh.polygon_count(), 10);
    assert_eq!(mesh.vertex_count(), 12);
    let on_cut = mesh.positions().iter().filter(|p| p.x == 0.0).count();
    assert_eq!(on_cut, 4);
    assert!(mesh.validate().is_ok());
}

#[test]
fn resize_x_keeps_topology() {
    init_logging();
    let mut generator = BoxMeshGenerator::new();
    let before = generator
        .build(BoxSpec::new([2.0; 3], [1, 1, 1]).unwrap())
        .unwrap()
        .clone();
    let after = generator
        .build(BoxSpec::new([4.0, 2.0, 2.0], [1, 1, 1]).unwrap())
        .unwrap()
        .clone();

    assert_eq!(generator.last_action(), Some(RebuildAction::Reposition));
    assert_eq!(after.vertex_count(), before.vertex_count());
    assert_eq!(after.polygon_count(), before.polygon_count());
    assert_eq!(after.poly_connects(), before.poly_connects());
    for (old, new) in before.positions().iter().zip(after.positions()) {
        assert_relative_eq!(new.x, 2.0 * old.x);
        assert_eq!(new.y, old.y);
        assert_eq!(new.z, old.z);
    }
}

#[test]
fn subdivision_edit_after_resize_rebuilds() {
    init_logging();
    let mut generator = BoxMeshGenerator::new();
    generator.build(BoxSpec::new([1.0; 3], [1, 1, 1]).unwrap()).unwrap();
    generator.build(BoxSpec::new([3.0; 3], [1, 1, 1]).unwrap()).unwrap();
    assert_eq!(generator.last_action(), Some(RebuildAction::Reposition));

    let mesh = generator.build(BoxSpec::new([3.0; 3], [1, 1, 2]).unwrap()).unwrap();
    assert_eq!(mesh.vertex_count(), 8 + 4 * 4 + 2 * (1 + 2 + 2));
    assert_eq!(generator.last_action(), Some(RebuildAction::FullRebuild));
    assert_eq!(generator.build_state().topology, TopologyState::Valid);
}

#[test]
fn rejected_input_keeps_last_mesh() {
    init_logging();
    let mut generator = BoxMeshGenerator::new();
    let good = generator
        .build(BoxSpec::new([1.0; 3], [2, 0, 1]).unwrap())
        .unwrap()
        .clone();

    assert!(matches!(
        BoxSpec::new([1.0; 3], [0, -1, 0]),
        Err(MeshError::InvalidSubdivision { axis: 'y', value: -1 })
    ));
    let bad = BoxSpec {
        size: DVec3::new(0.0, 1.0, 1.0),
        ..BoxSpec::default()
    };
    assert!(matches!(
        generator.build(bad),
        Err(MeshError::InvalidSize { axis: 'x', .. })
    ));
    assert_eq!(generator.snapshot(), Some(&good));
}

#[test]
fn triangulated_export_keeps_winding() {
    init_logging();
    let mut generator = BoxMeshGenerator::new();
    let mesh = generator.build(BoxSpec::new([2.0; 3], [1, 2, 0]).unwrap()).unwrap();
    let tris = mesh.triangulate();
    assert_eq!(tris.len(), mesh.polygon_count() * 6);

    let p = mesh.positions();
    for tri in tris.chunks_exact(3) {
        let (a, b, c) = (p[tri[0] as usize], p[tri[1] as usize], p[tri[2] as usize]);
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0);
    }
    assert_eq!(mesh.positions_f32().len(), mesh.vertex_count() * 3);
}
