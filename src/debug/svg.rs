// src/debug/svg.rs

use crate::types::Window;
use crate::voronoi::{Diagram, Link};
use glam::Vec2;
use std::io::Write;
use tracing::info;

/// Ein Helfer zum Erstellen einer SVG-Datei.
struct SvgBuilder {
    content: String,
    point_radius: f64,
}

impl SvgBuilder {
    /// Erstellt ein neues SVG-Grundgerüst mit Header, Stil und Hintergrund.
    fn new(window: &Window, svg_pixel_size: f64) -> Self {
        let viewbox_min_x = window.xmin() as f64;
        let viewbox_min_y = window.ymin() as f64;
        let viewbox_width = window.width() as f64;
        let viewbox_height = window.height() as f64;

        let stroke_w_normal = (viewbox_width + viewbox_height) / 2.0 * 0.005;
        let stroke_w_thin = (viewbox_width + viewbox_height) / 2.0 * 0.002;
        let point_radius = (viewbox_width + viewbox_height) / 2.0 * 0.004;
        let font_size_coord = point_radius * 1.5;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{svg_pixel_size}" height="{svg_pixel_size}" viewBox="{viewbox_min_x} {viewbox_min_y} {viewbox_width} {viewbox_height}" xmlns="http://www.w3.org/2000/svg">
  <style>
    .background {{ fill: #f0f0f0; fill-opacity: 1.0; }}
    .window-bounds {{ fill: none; stroke: #888888; stroke-width: {stroke_w_thin}; stroke-dasharray: 2,2; }}
    .cell {{ fill: rgba(150, 255, 150, 0.5); stroke: #00aa00; stroke-width: {stroke_w_normal}; }}
    .site-point {{ fill: #ffaaaa; stroke: #cc0000; stroke-width: {stroke_w_thin}; }}
    .link {{ fill: none; stroke: #5500aa; stroke-width: {stroke_w_thin}; stroke-dasharray: 4,2; }}
    .site-label {{
        font-family: monospace;
        font-size: {font_size_coord:.3}px;
        fill: #000000;
        stroke: white;
        stroke-width: {stroke_w_thin:.3};
        paint-order: stroke fill;
        text-anchor: middle;
        dominant-baseline: middle;
    }}
  </style>
  <rect x="{viewbox_min_x}" y="{viewbox_min_y}" width="{viewbox_width}" height="{viewbox_height}" class="background" />
"#,
        );

        Self {
            content,
            point_radius,
        }
    }

    /// Zeichnet ein Polygon.
    fn draw_polygon(&mut self, vertices: &[Vec2], class: &str) {
        if vertices.len() < 2 {
            return;
        }
        let points_str: String = vertices
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"  <polygon points="{}" class="{}" />
"#,
            points_str, class
        ));
    }

    /// Zeichnet einen Kreis.
    fn draw_circle(&mut self, center: &Vec2, radius: f64, class: &str) {
        self.content.push_str(&format!(
            r#"  <circle cx="{:.3}" cy="{:.3}" r="{:.3}" class="{}" />
"#,
            center.x, center.y, radius, class
        ));
    }

    /// Zeichnet eine Linie.
    fn draw_line(&mut self, from: &Vec2, to: &Vec2, class: &str) {
        self.content.push_str(&format!(
            r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" class="{}" />
"#,
            from.x, from.y, to.x, to.y, class
        ));
    }

    /// Zeichnet Text.
    fn draw_text(&mut self, pos: &Vec2, text: &str, class: &str) {
        self.content.push_str(&format!(
            r#"  <text x="{:.3}" y="{:.3}" class="{}">{}</text>
"#,
            pos.x, pos.y, class, text
        ));
    }

    /// Zeichnet das Baufenster.
    fn draw_window(&mut self, window: &Window, class: &str) {
        self.content.push_str(&format!(
            r#"  <rect x="{}" y="{}" width="{}" height="{}" class="{}" />
"#,
            window.xmin(),
            window.ymin(),
            window.width(),
            window.height(),
            class
        ));
    }

    /// Speichert die SVG-Datei und schließt die Tags.
    fn save(mut self, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.content.push_str("</svg>");
        let mut file = std::fs::File::create(filename)?;
        file.write_all(self.content.as_bytes())?;
        info!("Debug SVG '{}' wurde erstellt.", filename);
        Ok(())
    }
}

/// Erstellt eine SVG-Datei mit allen gebauten Zellen, den Sites und
/// optional den Nachbarschaftslinks eines Diagramms.
pub fn create_diagram_svg(
    filename: &str,
    diagram: &Diagram,
    links: &[Link],
    svg_pixel_size: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = SvgBuilder::new(diagram.window(), svg_pixel_size);

    for outcome in diagram.outcomes() {
        if let Some(cell) = outcome.polygon() {
            builder.draw_polygon(cell.vertices(), "cell");
        }
    }

    for link in links {
        let (Some(a), Some(b)) = (
            diagram.site(link.a).map(|s| s.position),
            diagram.site(link.b).map(|s| s.position),
        ) else {
            continue;
        };
        builder.draw_line(&a, &link.midpoint, "link");
        builder.draw_line(&link.midpoint, &b, "link");
    }

    for site in diagram.sites() {
        let radius = builder.point_radius;
        builder.draw_circle(&site.position, radius, "site-point");
        let label_pos = site.position + Vec2::new(0.0, -2.0 * builder.point_radius as f32);
        builder.draw_text(&label_pos, &site.name, "site-label");
    }

    builder.draw_window(diagram.window(), "window-bounds");
    builder.save(filename)
}
