//! SVG rasterization backed by resvg.
//!
//! The [`Rasterize`] trait is the seam between the driver loop and the
//! conversion backend; [`SvgRasterizer`] is the production implementation.
//! The source document is re-read and re-parsed on every call so that a
//! malformed or unreadable input only fails the variant being rendered.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use resvg::{tiny_skia, usvg};

use crate::error::{Error, Result};

/// Tiny built-in document rendered once at startup to verify the whole
/// parse-render-encode pipeline actually works on this host.
const PROBE_SVG: &[u8] =
    br##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"><rect width="8" height="8" fill="#000"/></svg>"##;

/// Converts one vector document into one square raster file.
pub trait Rasterize {
    /// Render `source` at `size`x`size` pixels and write a PNG to `dest`.
    ///
    /// `dest` is overwritten if present; its parent directory must exist.
    /// Errors are returned, never panicked, so a caller can treat each
    /// variant independently.
    fn rasterize(&self, source: &Path, dest: &Path, size: u32) -> Result<()>;
}

/// Production rasterizer: usvg parsing + tiny-skia rendering.
pub struct SvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgRasterizer {
    /// Acquire the rasterization capability.
    ///
    /// Loads the system font database (text elements in the source SVG
    /// render with real glyphs) and proves the pipeline end to end with a
    /// probe render. Failure here is fatal to the run: the driver aborts
    /// before attempting any conversion.
    pub fn ensure() -> Result<Self> {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        log::debug!("loaded {} font faces", fontdb.len());

        let rasterizer = Self {
            fontdb: Arc::new(fontdb),
        };
        rasterizer.probe()?;
        Ok(rasterizer)
    }

    fn probe(&self) -> Result<()> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_data(PROBE_SVG, &options)
            .map_err(|e| Error::InitializationError(format!("probe parse failed: {}", e)))?;
        let mut pixmap = tiny_skia::Pixmap::new(1, 1)
            .ok_or_else(|| Error::InitializationError("probe pixmap allocation failed".into()))?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
        Ok(())
    }

    fn render_to_pixmap(&self, svg_data: &[u8], size: u32) -> Result<tiny_skia::Pixmap> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| Error::LoadError(format!("invalid SVG: {}", e)))?;

        let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or_else(|| {
            Error::RenderError(format!("failed to allocate {}x{} pixmap", size, size))
        })?;

        // Scale the document to fill the square target exactly.
        let scale_x = size as f32 / tree.size().width();
        let scale_y = size as f32 / tree.size().height();
        let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());
        Ok(pixmap)
    }
}

impl Rasterize for SvgRasterizer {
    fn rasterize(&self, source: &Path, dest: &Path, size: u32) -> Result<()> {
        let svg_data = fs::read(source)
            .map_err(|e| Error::IoError(format!("read {}: {}", source.display(), e)))?;

        let pixmap = self.render_to_pixmap(&svg_data, size)?;

        pixmap
            .save_png(dest)
            .map_err(|e| Error::IoError(format!("write {}: {}", dest.display(), e)))?;
        Ok(())
    }
}
