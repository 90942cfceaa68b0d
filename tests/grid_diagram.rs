// tests/grid_diagram.rs
//
// End-to-end properties of a diagram over a regular unit grid: the inner
// sites carry exact, hand-checkable square cells.

use glam::Vec2;
use zonemap::prelude::*;

/// 5x5 unit grid centered at the origin; the window covers the central
/// 2x2 area so every site owning window area has a closed fan.
fn grid_diagram() -> (Diagram, SiteId) {
    let mut sites = Vec::new();
    let mut center = SiteId(0);
    for (i, (x, y)) in (-2..=2)
        .flat_map(|y| (-2..=2).map(move |x| (x as f32, y as f32)))
        .enumerate()
    {
        if x == 0.0 && y == 0.0 {
            center = SiteId(i);
        }
        sites.push(Site::new(SiteId(i), format!("g{}", i), Vec2::new(x, y)));
    }
    let window = Window::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)).unwrap();
    (Diagram::build(sites, window).unwrap(), center)
}

#[test]
fn interior_cell_is_the_perpendicular_bisector_square() {
    let (diagram, center) = grid_diagram();
    let cell = diagram.cell(center).expect("interior cell must build");

    assert_eq!(cell.vertex_count(), 4);
    assert!((cell.area() - 1.0).abs() < 1e-4);
    // every cell edge lies halfway to the neighbor sharing it
    for expected in [
        Vec2::new(0.5, 0.5),
        Vec2::new(-0.5, 0.5),
        Vec2::new(-0.5, -0.5),
        Vec2::new(0.5, -0.5),
    ] {
        assert!(
            cell.vertices()
                .iter()
                .any(|v| v.distance_squared(expected) < 1e-6),
            "missing bisector corner {:?}",
            expected
        );
    }
}

#[test]
fn built_cells_cover_the_window_exactly() {
    let (diagram, _) = grid_diagram();
    let total: f32 = diagram
        .outcomes()
        .iter()
        .filter_map(|o| o.polygon())
        .map(|p| p.area())
        .sum();
    assert!(
        (total - diagram.window().area()).abs() < 1e-3,
        "cells cover {} of {}",
        total,
        diagram.window().area()
    );
}

#[test]
fn every_interior_site_builds_a_cell() {
    let (diagram, _) = grid_diagram();
    for site in diagram.sites() {
        if site.position.x.abs() <= 1.0 && site.position.y.abs() <= 1.0 {
            assert!(
                diagram.cell(site.id).is_some(),
                "no cell for interior {}",
                site.id
            );
        }
    }
}

#[test]
fn site_at_picks_the_nearest_site() {
    let (diagram, center) = grid_diagram();
    assert_eq!(diagram.site_at(Vec2::new(0.1, 0.2)), Some(center));

    let owner = diagram.site_at(Vec2::new(0.9, 0.9)).unwrap();
    let site = diagram.site(owner).unwrap();
    assert!(site.position.distance_squared(Vec2::new(1.0, 1.0)) < 1e-6);
}

#[test]
fn cell_triangulations_sum_to_cell_area() {
    let (diagram, _) = grid_diagram();
    for outcome in diagram.outcomes() {
        let Some(cell) = outcome.polygon() else {
            continue;
        };
        if cell.is_empty() {
            continue;
        }
        let sum: f32 = cell.triangles().iter().map(|t| t.area()).sum();
        assert!((sum - cell.area()).abs() < 1e-4);
    }
}
