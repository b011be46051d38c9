//! Color, fill, and stroke resolution
//!
//! None of these fail: unusable input degrades to a default.

use crate::document::{ColorValue, FillStyle, StrokeStyle};

/// Color used wherever a value cannot be interpreted
pub const DEFAULT_COLOR: &str = "#000000";

/// Resolve a stored color to an SVG color string
///
/// Packed `0xRRGGBB` numbers (and numeric strings) become `#rrggbb`.
/// Strings starting with `#` pass through, other strings are returned
/// verbatim, and anything else is black.
pub fn resolve_color(value: &ColorValue) -> String {
    match value {
        ColorValue::Number(n) => packed_to_hex(*n as i64),
        ColorValue::Text(s) if s.starts_with('#') => s.clone(),
        ColorValue::Text(s) => match s.trim().parse::<i64>() {
            Ok(packed) => packed_to_hex(packed),
            Err(_) => s.clone(),
        },
        ColorValue::Other(_) => DEFAULT_COLOR.to_string(),
    }
}

fn packed_to_hex(packed: i64) -> String {
    let r = (packed >> 16) & 0xff;
    let g = (packed >> 8) & 0xff;
    let b = packed & 0xff;
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Resolve the fill paint; an invisible fill is `none`
///
/// Opacity is not folded in, callers emit it as `fill-opacity`.
pub fn resolve_fill(fill: &FillStyle) -> String {
    if !fill.visible {
        return "none".to_string();
    }
    resolve_color(&fill.color)
}

/// A visible stroke, ready for attribute output
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub opacity: f64,
    pub cap: String,
    pub join: String,
}

impl Stroke {
    /// Solid black hairline used for lines that declare no stroke
    pub fn fallback() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            width: 1.0,
            opacity: 1.0,
            cap: "butt".to_string(),
            join: "miter".to_string(),
        }
    }
}

/// Resolve the stroke; `None` when the stroke is not visible
pub fn resolve_stroke(stroke: &StrokeStyle) -> Option<Stroke> {
    if !stroke.visible {
        return None;
    }
    Some(Stroke {
        color: resolve_color(&stroke.color),
        width: stroke.width,
        opacity: stroke.alpha,
        cap: stroke.cap.clone(),
        join: stroke.join.clone(),
    })
}
