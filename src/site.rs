// src/site.rs

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stabiler Index einer Site innerhalb eines Diagramm-Durchlaufs.
///
/// Zellen, Nachbarschaftslinks und Punktabfragen referenzieren Sites
/// ausschließlich über diesen Index, nie über Adressen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteId(pub usize);

impl SiteId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "site#{}", self.0)
    }
}

/// Ein fester Punkt, dem eine exklusive Zelle des Fensters zugeteilt wird.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub position: Vec2,
}

impl Site {
    pub fn new(id: SiteId, name: impl Into<String>, position: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }
}
