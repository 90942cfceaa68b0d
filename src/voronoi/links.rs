// src/voronoi/links.rs

use super::diagram::Diagram;
use crate::geometry::Polygon;
use crate::site::SiteId;
use crate::utils::constants::{CLIP_EPSILON, EPSILON};
use glam::Vec2;

/// Nachbarschaftsbeziehung zweier Sites über eine gemeinsame Zellkante.
///
/// `distance` ist die Weglänge über den Kantenmittelpunkt, nicht die
/// Luftlinie der beiden Sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: SiteId,
    pub b: SiteId,
    pub midpoint: Vec2,
    pub distance: f32,
}

fn ring_edges(polygon: &Polygon) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    polygon
        .vertices()
        .windows(2)
        .map(|w| (w[0], w[1]))
        .filter(|(a, b)| a.distance_squared(*b) > EPSILON * EPSILON)
}

fn same_edge(e1: (Vec2, Vec2), e2: (Vec2, Vec2)) -> bool {
    let near = |p: Vec2, q: Vec2| p.distance_squared(q) < CLIP_EPSILON * CLIP_EPSILON;
    (near(e1.0, e2.0) && near(e1.1, e2.1)) || (near(e1.0, e2.1) && near(e1.1, e2.0))
}

/// Alle Site-Paare, deren Zellen eine Kante teilen, mit Kantenmittelpunkt
/// und Weglänge über diesen Mittelpunkt. Fehlgeschlagene Zellen bleiben
/// unverbunden.
pub fn shared_edge_links(diagram: &Diagram) -> Vec<Link> {
    let sites = diagram.sites();
    let mut links = Vec::new();

    for i in 0..sites.len() {
        let Some(cell_i) = diagram.cell(SiteId(i)) else {
            continue;
        };
        for j in (i + 1)..sites.len() {
            let Some(cell_j) = diagram.cell(SiteId(j)) else {
                continue;
            };
            let shared = ring_edges(cell_i)
                .find(|&e1| ring_edges(cell_j).any(|e2| same_edge(e1, e2)));
            if let Some((p, q)) = shared {
                let midpoint = (p + q) * 0.5;
                let distance = midpoint.distance(sites[i].position)
                    + midpoint.distance(sites[j].position);
                links.push(Link {
                    a: SiteId(i),
                    b: SiteId(j),
                    midpoint,
                    distance,
                });
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Site;
    use crate::types::Window;
    use crate::utils::comparison::nearly_equal_eps;

    #[test]
    fn test_same_edge_ignores_direction() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 0.0);
        assert!(same_edge((a, b), (b, a)));
        assert!(same_edge((a, b), (a, b)));
        assert!(!same_edge((a, b), (a, Vec2::new(0.0, 1.0))));
    }

    #[test]
    fn test_links_connect_grid_neighbors() {
        // 5x5 unit grid; the window keeps only the central area, and the
        // center site's four axis neighbors are interior grid sites
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
        let diagram = Diagram::build(sites, window).unwrap();

        let links = shared_edge_links(&diagram);
        let center_links: Vec<&Link> = links
            .iter()
            .filter(|l| l.a == center || l.b == center)
            .collect();
        assert_eq!(center_links.len(), 4);
        for link in center_links {
            // neighbor spacing 1, crossing point on the shared bisector edge
            assert!(nearly_equal_eps(link.distance, 1.0, 1e-3));
            assert!(nearly_equal_eps(link.midpoint.distance(Vec2::ZERO), 0.5, 1e-3));
        }
    }
}
