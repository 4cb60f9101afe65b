mod support;

use support::shares_vertex;
use tikzsphere::coloring::{DEFAULT_PALETTE, greedy_color};
use tikzsphere::errors::ColoringError;
use tikzsphere::mesh::Triangle;

/// Visitation order used by the scene: front-facing triangles, front-most first
fn sphere_visitation() -> Vec<Triangle> {
    let scene = support::default_scene();
    scene.front().iter().rev().map(|r| r.indices).collect()
}

#[test]
fn triangles_sharing_an_edge_get_colors_one_and_two() {
    let coloring = greedy_color(&[[0, 1, 2], [1, 2, 3]], DEFAULT_PALETTE).unwrap();
    assert_eq!(coloring.colors(), &[1, 2]);
}

#[test]
fn triangles_sharing_one_vertex_conflict() {
    let coloring = greedy_color(&[[0, 1, 2], [2, 3, 4], [5, 6, 7]], DEFAULT_PALETTE).unwrap();
    assert_eq!(coloring.colors(), &[1, 2, 1]);
}

#[test]
fn sphere_coloring_is_valid() {
    let triangles = sphere_visitation();
    let coloring = greedy_color(&triangles, DEFAULT_PALETTE).unwrap();

    for i in 0..triangles.len() {
        for j in (i + 1)..triangles.len() {
            if shares_vertex(&triangles[i], &triangles[j]) {
                assert_ne!(
                    coloring.color(i),
                    coloring.color(j),
                    "triangles {:?} and {:?} share a vertex and a color",
                    triangles[i],
                    triangles[j]
                );
            }
        }
    }
}

#[test]
fn sphere_coloring_is_greedy_minimal() {
    let triangles = sphere_visitation();
    let coloring = greedy_color(&triangles, DEFAULT_PALETTE).unwrap();

    for (i, tri) in triangles.iter().enumerate() {
        let earlier_neighbour_colors: Vec<u8> = (0..i)
            .filter(|&j| shares_vertex(tri, &triangles[j]))
            .map(|j| coloring.color(j))
            .collect();
        let expected = (1..=DEFAULT_PALETTE)
            .find(|c| !earlier_neighbour_colors.contains(c))
            .unwrap();
        assert_eq!(coloring.color(i), expected, "triangle {i} is not minimal");
    }
}

#[test]
fn whole_sphere_fits_the_default_palette() {
    let sphere = support::default_sphere();
    let coloring = greedy_color(sphere.triangles(), DEFAULT_PALETTE).unwrap();
    assert_eq!(coloring.len(), sphere.triangle_count());
    // a vertex of the icosphere touches at most 6 triangles
    assert!(coloring.colors_used() <= 13);
}

#[test]
fn palette_exhaustion_is_reported_not_wrapped() {
    // six triangles around vertex 0 need six colors
    let fan: Vec<Triangle> = (0..6).map(|i| [0, 1 + i, 1 + (i + 1) % 6]).collect();
    assert!(greedy_color(&fan, 6).is_ok());

    match greedy_color(&fan, 5) {
        Err(ColoringError::PaletteExhausted {
            triangle, palette, ..
        }) => {
            assert_eq!(triangle, 5);
            assert_eq!(palette, 5);
        },
        other => panic!("expected PaletteExhausted, got {other:?}"),
    }
}

#[test]
fn coloring_is_deterministic() {
    let triangles = sphere_visitation();
    assert_eq!(
        greedy_color(&triangles, DEFAULT_PALETTE).unwrap(),
        greedy_color(&triangles, DEFAULT_PALETTE).unwrap()
    );
}
