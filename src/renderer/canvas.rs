//! Canvas viewport estimation and document assembly

use log::{debug, warn};

use crate::document::{Canvas, Display};
use crate::error::Diagnostic;
use crate::geometry::{BoundingBox, Extents};

use super::shapes::map_display;
use super::svg::SvgBuilder;
use super::SvgConfig;

/// Result of rendering one canvas
#[derive(Debug)]
pub struct RenderedCanvas {
    /// Position of the canvas in the document
    pub index: usize,
    pub title: Option<String>,
    /// The SVG document, absent when the canvas draws nothing
    pub svg: Option<String>,
    /// Number of primitives in `svg`
    pub element_count: usize,
    /// Displays that were skipped, including ones that failed to decode
    pub diagnostics: Vec<Diagnostic>,
}

/// Estimate the viewport covering every visible display
///
/// Each display contributes its unrotated extent, scaled, plus
/// `stroke_margin` on each side; the combined extents are padded by
/// `padding`.
/// Rotation is ignored, so rotated shapes can overhang the estimate.
pub fn estimate_bounds(displays: &[Display], config: &SvgConfig) -> Option<BoundingBox> {
    displays
        .iter()
        .filter(|d| d.visible)
        .map(|d| {
            let half_width = d.width * d.scale.x.abs() / 2.0 + config.stroke_margin;
            let half_height = d.height * d.scale.y.abs() / 2.0 + config.stroke_margin;
            Extents::around(d.position(), half_width, half_height)
        })
        .reduce(Extents::merge)
        .map(|e| e.expand(config.padding).to_box())
}

/// Visible displays in stacking order, lowest `zOrder` first
///
/// The sort is stable, so equal `zOrder` values keep file order.
pub fn draw_order(displays: &[Display]) -> Vec<&Display> {
    let mut ordered: Vec<&Display> = displays.iter().filter(|d| d.visible).collect();
    ordered.sort_by_key(|d| d.z_order);
    ordered
}

/// Render a canvas into a standalone SVG document
pub fn render_canvas(index: usize, canvas: Canvas, config: &SvgConfig) -> RenderedCanvas {
    let Canvas {
        title,
        displays,
        rejected,
        ..
    } = canvas;
    let mut diagnostics = rejected;
    for diag in &diagnostics {
        warn!("canvas {}: {}", index, diag);
    }

    let mut rendered = RenderedCanvas {
        index,
        title,
        svg: None,
        element_count: 0,
        diagnostics: vec![],
    };

    let Some(viewbox) = estimate_bounds(&displays, config) else {
        debug!("canvas {} has no visible displays", index);
        rendered.diagnostics = diagnostics;
        return rendered;
    };

    let mut builder = SvgBuilder::new(config.clone());
    builder.set_title(format!(
        "Canvas {}: {}",
        index,
        rendered.title.as_deref().unwrap_or("untitled")
    ));

    for display in draw_order(&displays) {
        match map_display(display) {
            Ok(Some(element)) => builder.push(element),
            Ok(None) => {}
            Err(e) => {
                let diag = Diagnostic::new(display.index, Some(display.kind.name().to_string()), e);
                warn!("canvas {}: {}", index, diag);
                diagnostics.push(diag);
            }
        }
    }

    rendered.diagnostics = diagnostics;
    if builder.is_empty() {
        debug!("canvas {} produced no drawable shapes", index);
        return rendered;
    }

    rendered.element_count = builder.len();
    rendered.svg = Some(builder.build(viewbox));
    rendered
}
