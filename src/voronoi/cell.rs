// src/voronoi/cell.rs

use super::mesh::TriangleProvider;
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::{Polygon, Triangle};
use crate::types::Window;
use crate::utils::comparison::nearly_equal;
use crate::utils::constants::EPSILON;
use glam::Vec2;

/// Topologie des Dreiecksfächers um eine Site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanKind {
    /// Zyklischer Fächer einer inneren Site; `first` ist ein beliebiges Mitglied.
    Closed { first: usize },
    /// Fächer einer Hüllen-Site mit zwei freien Kettenenden; `first` ist
    /// der Kettenanfang, dessen `next`-Kante unerwidert bleibt.
    Open { first: usize },
}

fn same_point(a: Vec2, b: Vec2) -> bool {
    nearly_equal(a.x, b.x) && nearly_equal(a.y, b.y)
}

/// Indizes aller nicht-degenerierten Dreiecke, die `site` als Eckpunkt tragen.
pub fn incident_fan(site: Vec2, triangles: &[Triangle]) -> Vec<usize> {
    triangles
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.is_degenerate() && t.has_vertex(site))
        .map(|(i, _)| i)
        .collect()
}

/// Bestimmt, ob der Fächer offen oder geschlossen ist; `None` für einen
/// leeren Fächer.
///
/// Offen genau dann, wenn ein Mitglied eine `next`-Kante besitzt, die von
/// keinem anderen Mitglied als `prev`-Kante erwidert wird; dieses Mitglied
/// ist dann der Kettenanfang.
pub fn classify_fan(fan: &[usize], triangles: &[Triangle], site: Vec2) -> Option<FanKind> {
    let &head = fan.first()?;
    for &t in fan {
        let Some(next) = triangles[t].next_vertex(site) else {
            continue;
        };
        let matched = fan.iter().any(|&o| {
            o != t
                && triangles[o]
                    .prev_vertex(site)
                    .is_some_and(|p| same_point(p, next))
        });
        if !matched {
            return Some(FanKind::Open { first: t });
        }
    }
    Some(FanKind::Closed { first: head })
}

/// Schnittpunkt des Strahls `origin + k * direction` (k > 0) mit dem
/// Fensterrand; `None` für eine verschwindende Richtung.
fn border_projection(origin: Vec2, direction: Vec2, window: &Window) -> Option<Vec2> {
    let mut k_min = f32::INFINITY;

    if direction.x > EPSILON {
        k_min = k_min.min((window.xmax() - origin.x) / direction.x);
    } else if direction.x < -EPSILON {
        k_min = k_min.min((window.xmin() - origin.x) / direction.x);
    }
    if direction.y > EPSILON {
        k_min = k_min.min((window.ymax() - origin.y) / direction.y);
    } else if direction.y < -EPSILON {
        k_min = k_min.min((window.ymin() - origin.y) / direction.y);
    }

    (k_min.is_finite() && k_min > 0.0).then(|| origin + direction * k_min)
}

/// Baut die Zelle einer Site aus dem Fächer ihrer inzidenten Dreiecke.
///
/// Der Lauf hängt Umkreismittelpunkte in CCW-Reihenfolge aneinander; bei
/// offenen Fächern werden beide Kettenenden bis zum Fensterrand verlängert,
/// sofern ihr Mittelpunkt im Fenster liegt. Das Ergebnis wird geclippt und
/// trianguliert.
pub fn build_cell<P: TriangleProvider>(site: Vec2, provider: &P) -> GeometryResult<Polygon> {
    let triangles = provider.triangles();
    let window = provider.window();

    let fan = incident_fan(site, triangles);
    if fan.len() < 3 {
        return Err(GeometryError::MalformedFan {
            reason: format!("{} incident triangles at {:?}", fan.len(), site),
        });
    }

    let kind = classify_fan(&fan, triangles, site).ok_or_else(|| GeometryError::MalformedFan {
        reason: format!("empty fan at {:?}", site),
    })?;
    let first = match kind {
        FanKind::Closed { first } | FanKind::Open { first } => first,
    };

    let mut centers: Vec<Vec2> = Vec::with_capacity(fan.len());
    let mut current = first;
    let last = loop {
        let center = triangles[current]
            .center()
            .ok_or(GeometryError::DegenerateTriangle)?;
        centers.push(center);

        let target = triangles[current]
            .prev_vertex(site)
            .ok_or_else(|| GeometryError::MalformedFan {
                reason: format!("triangle lost vertex {:?} mid-walk", site),
            })?;
        let successor = fan.iter().copied().find(|&t| {
            t != current
                && triangles[t]
                    .next_vertex(site)
                    .is_some_and(|n| same_point(n, target))
        });

        match successor {
            Some(t) if t == first => break current,
            Some(t) => {
                if centers.len() >= fan.len() {
                    return Err(GeometryError::MalformedFan {
                        reason: format!("walk at {:?} exceeded {} fan triangles", site, fan.len()),
                    });
                }
                current = t;
            }
            None => break current,
        }
    };

    match kind {
        FanKind::Closed { .. } => {
            if centers.len() != fan.len() {
                return Err(GeometryError::MalformedFan {
                    reason: format!(
                        "closed walk at {:?} visited {} of {} triangles",
                        site,
                        centers.len(),
                        fan.len()
                    ),
                });
            }
        }
        FanKind::Open { .. } => {
            // Kettenanfang: Verlängerung vor dem ersten Mittelpunkt
            if let Some(c) = triangles[first].center()
                && provider.is_in_window(c)
                && let Some(n) = triangles[first].next_edge_normal(site)
                && let Some(p) = border_projection(c, n, window)
            {
                centers.insert(0, p);
            }
            // Kettenende: Verlängerung nach dem letzten Mittelpunkt
            if let Some(c) = triangles[last].center()
                && provider.is_in_window(c)
                && let Some(n) = triangles[last].prev_edge_normal(site)
                && let Some(p) = border_projection(c, n, window)
            {
                centers.push(p);
            }
        }
    }

    // benachbarte Dreiecke können denselben Umkreismittelpunkt tragen
    // (kozirkuläre Punktlagen); Doppelpunkte würden die Ohr-Abschneidung stören
    centers.dedup_by(|a, b| same_point(*a, *b));
    if centers.len() > 1
        && let (Some(&f), Some(&l)) = (centers.first(), centers.last())
        && same_point(f, l)
    {
        centers.pop();
    }

    let mut cell = Polygon::new();
    for c in centers {
        cell.push_vertex(c);
    }
    cell.clip(window);
    cell.triangulate()?;
    Ok(cell)
}
