// src/bin/svg_demo.rs

//! Baut ein Diagramm aus Zufalls-Sites und schreibt es als SVG.
//!
//! Aufruf: `svg_demo [anzahl-sites] [ausgabedatei]`

use glam::Vec2;
use tracing::info;
use zonemap::debug::create_diagram_svg;
use zonemap::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let count: usize = match args.next() {
        Some(s) => s.parse()?,
        None => 24,
    };
    let output = args.next().unwrap_or_else(|| "diagram.svg".to_string());

    let window = Window::new(Vec2::ZERO, Vec2::new(1000.0, 700.0))?;
    let mut rng = rand::rng();
    let sites = random_sites(&mut rng, &window, count, 40.0);

    let diagram = Diagram::build(sites, window)?;
    for (id, error) in diagram.failures() {
        info!("Zelle von {} nicht gebaut: {}", id, error);
    }

    let links = shared_edge_links(&diagram);
    info!(
        "{} Sites, {} Nachbarschaftslinks -> {}",
        diagram.sites().len(),
        links.len(),
        output
    );
    create_diagram_svg(&output, &diagram, &links, 900.0)?;
    Ok(())
}
