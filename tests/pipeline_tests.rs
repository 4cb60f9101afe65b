mod support;

use approx::assert_relative_eq;
use nalgebra::{Point2, Point3};
use tikzsphere::float_types::Real;
use tikzsphere::order::depth_sorted;
use tikzsphere::view::{Bounds2, Viewport, depth_key, project};
use tikzsphere::{IndexedMesh, RenderConfig, Scene};

#[test]
fn equal_keys_keep_input_order() {
    let mesh = IndexedMesh::from_parts(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ],
        vec![[0, 1, 2], [3, 4, 5], [1, 2, 0], [2, 0, 1]],
    )
    .unwrap();

    let order: Vec<_> = depth_sorted(&mesh).iter().map(|r| r.indices).collect();
    assert_eq!(order, vec![[3, 4, 5], [0, 1, 2], [1, 2, 0], [2, 0, 1]]);
}

#[test]
fn sphere_records_are_sorted_by_depth_key() {
    let scene = support::default_scene();
    let records = scene.depth_sorted();
    assert_eq!(records.len(), 320);
    for pair in records.windows(2) {
        assert!(pair[0].key <= pair[1].key);
    }
    for r in records {
        assert_eq!(r.key, depth_key(&r.centroid));
    }
}

#[test]
fn projection_is_affine() {
    let p1 = Point3::new(0.3, -1.2, 0.7);
    let p2 = Point3::new(-0.5, 0.25, 2.0);
    for a in [0.0, 0.25, 0.5, 1.5, -2.0] {
        let b: Real = 1.0 - a;
        let combined = Point3::from(p1.coords * a + p2.coords * b);
        let expected = Point2::from(project(&p1).coords * a + project(&p2).coords * b);
        assert_relative_eq!(project(&combined), expected, epsilon = 1e-12);
    }
}

#[test]
fn front_faces_exceed_the_threshold() {
    let scene = support::default_scene();
    assert_eq!(scene.front().len(), 97);
    assert!(scene.front().iter().all(|r| r.key > 0.6));
    assert_eq!(scene.front_colors().len(), scene.front().len());
}

#[test]
fn culling_is_conservative() {
    let scene = support::default_scene();
    let viewport = Viewport::default();

    for tri in scene.visible() {
        assert!(!viewport.culls(&tri.bounds));
    }

    // every front triangle fully inside the viewport is drawn
    let visible: Vec<_> = scene.visible().iter().map(|t| t.indices).collect();
    for record in scene.front() {
        let points = record.indices.map(|i| project(&scene.mesh().vertices()[i]));
        let bounds = Bounds2::from_points(&points).unwrap();
        if support::fully_inside(&viewport, &bounds) {
            assert!(visible.contains(&record.indices));
        }
        if viewport.culls(&bounds) {
            assert!(!visible.contains(&record.indices));
        }
    }

    assert_eq!(scene.visible().len(), 70);
}

#[test]
fn far_away_triangles_are_culled() {
    let mesh = IndexedMesh::from_parts(
        vec![
            Point3::new(5.0, 0.0, 5.0),
            Point3::new(5.1, 0.0, 5.0),
            Point3::new(5.0, 0.0, 5.1),
        ],
        vec![[0, 1, 2]],
    )
    .unwrap();
    let scene = Scene::build(mesh, &RenderConfig::default()).unwrap();
    assert_eq!(scene.front().len(), 1);
    assert!(scene.visible().is_empty());
    assert_eq!(scene.coloring().colors(), &[1]);
}

#[test]
fn visible_colors_match_front_colors() {
    let scene = support::default_scene();
    for tri in scene.visible() {
        let pos = scene
            .front()
            .iter()
            .position(|r| r.indices == tri.indices)
            .unwrap();
        assert_eq!(tri.color, scene.front_colors()[pos]);
    }
    // the front-most triangle is visited first and takes color 1
    assert_eq!(scene.front_colors().last(), Some(&1));
}
