//! xcs2svg - convert laser-cutter project files to SVG
//!
//! A project file is a JSON document holding one or more canvases of
//! path, rectangle, line, bitmap, and text displays. Each canvas that
//! draws something becomes a standalone SVG sized in millimetres.
//!
//! # Example
//!
//! ```rust
//! use xcs2svg::{convert, SvgConfig};
//!
//! let canvases = convert(
//!     r#"{ "canvas": [ { "title": "Panel", "displays": [
//!         { "type": "RECT", "x": 5, "y": 5, "width": 10, "height": 4 }
//!     ] } ] }"#,
//!     &SvgConfig::default(),
//! )
//! .unwrap();
//!
//! let svg = canvases[0].svg.as_deref().unwrap();
//! assert!(svg.contains("<rect"));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod writer;

use std::path::{Path, PathBuf};

use log::info;

pub use config::{ConfigError, ConvertConfig, OutputConfig};
pub use document::{Canvas, Display, DisplayKind, Document};
pub use error::{ConvertError, Diagnostic, ShapeError};
pub use renderer::{render_canvas, RenderedCanvas, SvgConfig};

/// Outcome of a conversion run
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Per-canvas files, in canvas order
    pub written: Vec<PathBuf>,
    /// The main output, if one was written
    pub main_output: Option<PathBuf>,
    /// Every display that was skipped, across all canvases
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert project JSON to one rendered result per canvas
///
/// Fails only when the document as a whole cannot be parsed; problems with
/// individual displays end up in each canvas's diagnostics.
pub fn convert(source: &str, config: &SvgConfig) -> Result<Vec<RenderedCanvas>, ConvertError> {
    let doc = Document::from_json(source)?;
    Ok(render_document(doc, config))
}

/// Render every canvas of a loaded document
pub fn render_document(doc: Document, config: &SvgConfig) -> Vec<RenderedCanvas> {
    doc.canvases
        .into_iter()
        .enumerate()
        .map(|(index, canvas)| {
            info!(
                "Canvas {} ({}): type={}, {} displays ({} visible)",
                index,
                canvas
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("canvas_{}", index)),
                canvas.kind,
                canvas.record_count(),
                canvas.visible_count()
            );
            render_canvas(index, canvas, config)
        })
        .collect()
}

/// Convert the project file at `input` and write the results
pub fn run(input: &Path, config: &ConvertConfig) -> Result<ConversionReport, ConvertError> {
    let doc = Document::from_file(input)?;
    let canvases = render_document(doc, &config.svg);

    let written = writer::write_canvases(&canvases, &config.output)?;
    let main_output = match config.output.main_canvas {
        Some(index) => {
            writer::write_main(&canvases, index, &config.output.main_path(input))?
        }
        None => None,
    };

    let diagnostics = canvases.into_iter().flat_map(|c| c.diagnostics).collect();

    Ok(ConversionReport {
        written,
        main_output,
        diagnostics,
    })
}
