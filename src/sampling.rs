// src/sampling.rs

use crate::site::{Site, SiteId};
use crate::types::Window;
use glam::Vec2;
use rand::Rng;

/// Gleichverteilte Zufallspositionen im Fenster, mit Randabstand `margin`.
pub fn random_positions<R: Rng>(rng: &mut R, window: &Window, count: usize, margin: f32) -> Vec<Vec2> {
    let x0 = window.xmin() + margin;
    let x1 = (window.xmax() - margin).max(x0);
    let y0 = window.ymin() + margin;
    let y1 = (window.ymax() - margin).max(y0);

    (0..count)
        .map(|_| {
            Vec2::new(
                rng.random_range(x0..=x1),
                rng.random_range(y0..=y1),
            )
        })
        .collect()
}

/// Durchnummerierte Zufalls-Sites für einen Diagramm-Durchlauf.
pub fn random_sites<R: Rng>(rng: &mut R, window: &Window, count: usize, margin: f32) -> Vec<Site> {
    random_positions(rng, window, count, margin)
        .into_iter()
        .enumerate()
        .map(|(i, p)| Site::new(SiteId(i), format!("site-{}", i), p))
        .collect()
}
