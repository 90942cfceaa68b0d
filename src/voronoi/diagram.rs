// src/voronoi/diagram.rs

use super::cell::build_cell;
use super::mesh::{DelaunayMesh, TriangleProvider};
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::Polygon;
use crate::site::{Site, SiteId};
use crate::types::Window;
use glam::Vec2;
use rayon::prelude::*;
use tracing::{info, warn};

/// Ergebnis des Zellaufbaus für eine einzelne Site.
///
/// Ein lokaler Geometriefehler degradiert zu einer fehlenden Zelle und
/// bricht nie den gesamten Durchlauf ab.
#[derive(Debug)]
pub enum CellOutcome {
    Built(Polygon),
    Failed(GeometryError),
}

impl CellOutcome {
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Built(p) => Some(p),
            Self::Failed(_) => None,
        }
    }
}

/// Fertiges Diagramm eines Durchlaufs: pro Site eine geclippte,
/// triangulierte Zelle (oder ihr Fehlschlag).
///
/// Der Aufbau arbeitet auf einem unveränderlichen Schnappschuss der
/// Site-Positionen; die Zellen entstehen parallel, da jede nur die fertige
/// Triangulierung liest und ihre eigene Zelle schreibt.
#[derive(Debug)]
pub struct Diagram {
    window: Window,
    sites: Vec<Site>,
    cells: Vec<CellOutcome>,
}

impl Diagram {
    pub fn build(sites: Vec<Site>, window: Window) -> GeometryResult<Self> {
        let positions: Vec<Vec2> = sites.iter().map(|s| s.position).collect();
        let mesh = DelaunayMesh::build(&positions, window)?;

        let cells: Vec<CellOutcome> = sites
            .par_iter()
            .map(|site| match build_cell(site.position, &mesh) {
                Ok(polygon) => CellOutcome::Built(polygon),
                Err(e) => {
                    warn!("cell construction for {} ({}) failed: {}", site.id, site.name, e);
                    CellOutcome::Failed(e)
                }
            })
            .collect();

        let built = cells.iter().filter(|c| c.polygon().is_some()).count();
        info!(
            "diagram built: {}/{} cells over {} triangles in {}",
            built,
            sites.len(),
            mesh.triangles().len(),
            window
        );
        Ok(Self {
            window,
            sites,
            cells,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn site(&self, id: SiteId) -> Option<&Site> {
        self.sites.get(id.index())
    }

    pub fn outcomes(&self) -> &[CellOutcome] {
        &self.cells
    }

    /// Die Zelle einer Site; `None` für unbekannte Ids und fehlgeschlagene Zellen.
    pub fn cell(&self, id: SiteId) -> Option<&Polygon> {
        self.cells.get(id.index()).and_then(|c| c.polygon())
    }

    /// Sites, deren Zellaufbau fehlgeschlagen ist, mit Diagnose.
    pub fn failures(&self) -> impl Iterator<Item = (SiteId, &GeometryError)> {
        self.cells.iter().enumerate().filter_map(|(i, c)| match c {
            CellOutcome::Failed(e) => Some((SiteId(i), e)),
            CellOutcome::Built(_) => None,
        })
    }

    /// Die erste Site, deren Zelle den Punkt enthält.
    pub fn site_at(&self, point: Vec2) -> Option<SiteId> {
        self.cells
            .iter()
            .position(|c| c.polygon().is_some_and(|p| p.contains(point)))
            .map(SiteId)
    }
}
