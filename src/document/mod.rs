//! Project document loader
//!
//! Parses the JSON project format into canvases of typed displays. The
//! document structure itself must be well formed; individual display
//! records that fail to decode are set aside as diagnostics so one bad
//! shape never costs the whole canvas.

pub mod model;

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConvertError, Diagnostic, ShapeError};

use model::null_as_default;

pub use model::{
    BitmapShape, ColorValue, Display, DisplayKind, FillStyle, LineShape, PathShape, RectShape,
    Scale, StrokeStyle, TextShape, TextStyle,
};

/// A loaded project: an ordered sequence of canvases
#[derive(Debug)]
pub struct Document {
    pub canvases: Vec<Canvas>,
}

/// One page of displays with its own viewport
#[derive(Debug)]
pub struct Canvas {
    pub title: Option<String>,
    /// The `extendInfo.type` tag, e.g. "2d"
    pub kind: String,
    /// Decoded displays in file order
    pub displays: Vec<Display>,
    /// Records that could not be decoded
    pub rejected: Vec<Diagnostic>,
}

impl Canvas {
    /// Total number of display records, decoded or not
    pub fn record_count(&self) -> usize {
        self.displays.len() + self.rejected.len()
    }

    pub fn visible_count(&self) -> usize {
        self.displays.iter().filter(|d| d.visible).count()
    }
}

#[derive(Deserialize)]
struct RawDocument {
    canvas: Vec<RawCanvas>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCanvas {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    extend_info: ExtendInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    displays: Vec<serde_json::Value>,
}

#[derive(Default, Deserialize)]
struct ExtendInfo {
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl Document {
    /// Load a project file from disk
    pub fn from_file(path: &Path) -> Result<Self, ConvertError> {
        let source = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        Self::from_json(&source)
    }

    /// Parse a project document from its JSON text
    pub fn from_json(source: &str) -> Result<Self, ConvertError> {
        let raw: RawDocument = serde_json::from_str(source)?;
        let canvases = raw.canvas.into_iter().map(decode_canvas).collect();
        Ok(Document { canvases })
    }
}

fn decode_canvas(raw: RawCanvas) -> Canvas {
    let mut displays = Vec::with_capacity(raw.displays.len());
    let mut rejected = vec![];

    for (index, value) in raw.displays.into_iter().enumerate() {
        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        match serde_json::from_value::<Display>(value) {
            Ok(mut display) => {
                display.index = index;
                displays.push(display);
            }
            Err(e) => rejected.push(Diagnostic::new(index, kind, ShapeError::Decode(e))),
        }
    }

    Canvas {
        title: raw.title,
        kind: raw.extend_info.kind.unwrap_or_else(|| "2d".to_string()),
        displays,
        rejected,
    }
}
