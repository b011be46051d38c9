//! SVG renderer for project canvases
//!
//! Maps each display to an SVG primitive and wraps a canvas's primitives
//! in a standalone document sized in physical units.

pub mod canvas;
pub mod config;
pub mod paint;
pub mod shapes;
pub mod svg;
pub mod transform;

pub use canvas::{draw_order, estimate_bounds, render_canvas, RenderedCanvas};
pub use config::SvgConfig;
pub use paint::{resolve_color, resolve_fill, resolve_stroke, Stroke};
pub use shapes::map_display;
pub use svg::{SvgBuilder, SvgElement};
pub use transform::Transform;
