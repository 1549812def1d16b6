//! Favicon production.
//!
//! A 32x32 raster is rendered to a temporary file, then repackaged as a
//! single-entry ICO container at `favicon.ico`. Built without the `ico`
//! feature the container step is unavailable and the raster is renamed to
//! `favicon.png` instead.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::raster::Rasterize;

/// Pixel size of the favicon raster
pub const FAVICON_SIZE: u32 = 32;

/// Name of the intermediate raster written before packaging
pub const FAVICON_TEMP_NAME: &str = "favicon-32.png";

/// Name of the final favicon artifact
#[cfg(feature = "ico")]
pub const FAVICON_NAME: &str = "favicon.ico";

/// Name of the final favicon artifact (plain-raster fallback)
#[cfg(not(feature = "ico"))]
pub const FAVICON_NAME: &str = "favicon.png";

/// Render the 32px variant and produce the final favicon artifact.
///
/// Returns the path of the artifact that was written. The temporary
/// raster never survives a successful call: it is deleted after ICO
/// packaging, or becomes the artifact itself via rename in the fallback
/// build.
pub fn generate_favicon(
    rasterizer: &dyn Rasterize,
    source: &Path,
    base_dir: &Path,
) -> Result<PathBuf> {
    let temp = base_dir.join(FAVICON_TEMP_NAME);
    rasterizer.rasterize(source, &temp, FAVICON_SIZE)?;

    let dest = base_dir.join(FAVICON_NAME);
    package(&temp, &dest)?;
    Ok(dest)
}

/// Repackage the temporary raster as a single-entry ICO and delete it.
#[cfg(feature = "ico")]
fn package(temp: &Path, dest: &Path) -> Result<()> {
    use resvg::tiny_skia;

    let pixmap = tiny_skia::Pixmap::load_png(temp)
        .map_err(|e| Error::PackagingError(format!("decode {}: {}", temp.display(), e)))?;

    let (width, height) = (pixmap.width(), pixmap.height());
    let image = ico::IconImage::from_rgba_data(width, height, pixmap.take());

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    let entry = ico::IconDirEntry::encode(&image)
        .map_err(|e| Error::PackagingError(format!("encode {}x{} entry: {}", width, height, e)))?;
    icon_dir.add_entry(entry);

    let file = fs::File::create(dest)
        .map_err(|e| Error::IoError(format!("create {}: {}", dest.display(), e)))?;
    icon_dir
        .write(file)
        .map_err(|e| Error::PackagingError(format!("write {}: {}", dest.display(), e)))?;

    fs::remove_file(temp)
        .map_err(|e| Error::IoError(format!("remove {}: {}", temp.display(), e)))?;
    Ok(())
}

/// No container packager compiled in; keep the raster under the fallback name.
#[cfg(not(feature = "ico"))]
fn package(temp: &Path, dest: &Path) -> Result<()> {
    fs::rename(temp, dest).map_err(|e| {
        Error::IoError(format!(
            "rename {} -> {}: {}",
            temp.display(),
            dest.display(),
            e
        ))
    })
}
