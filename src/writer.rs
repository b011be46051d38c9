//! Writes rendered canvases to disk

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::OutputConfig;
use crate::error::ConvertError;
use crate::renderer::RenderedCanvas;

/// Write one SVG document, creating parent directories as needed
pub fn write_svg(path: &Path, svg: &str) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
    }
    fs::write(path, svg).map_err(|e| ConvertError::io(path, e))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Write every canvas that produced a document; returns the paths written
pub fn write_canvases(
    canvases: &[RenderedCanvas],
    output: &OutputConfig,
) -> Result<Vec<PathBuf>, ConvertError> {
    let mut written = vec![];
    for canvas in canvases {
        if let Some(svg) = &canvas.svg {
            let path = output.canvas_path(canvas.index);
            write_svg(&path, svg)?;
            written.push(path);
        }
    }
    Ok(written)
}

/// Write the designated main canvas to `path`
///
/// Returns `None` when the main canvas does not exist or drew nothing.
pub fn write_main(
    canvases: &[RenderedCanvas],
    index: usize,
    path: &Path,
) -> Result<Option<PathBuf>, ConvertError> {
    let Some(canvas) = canvases.get(index) else {
        warn!(
            "main canvas {} does not exist (document has {} canvases)",
            index,
            canvases.len()
        );
        return Ok(None);
    };
    match &canvas.svg {
        Some(svg) => {
            write_svg(path, svg)?;
            Ok(Some(path.to_path_buf()))
        }
        None => {
            warn!("main canvas {} produced no output", index);
            Ok(None)
        }
    }
}
