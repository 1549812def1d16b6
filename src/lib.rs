//! Icongen
//!
//! A one-shot generator for a web application's icon set: renders the
//! source vector icon at every size the web manifest needs, produces a
//! favicon, and emits the matching manifest `icons` entries.
//!
//! # Features
//!
//! - **ico** (default): package the favicon as a single-entry ICO
//!   container; without it the 32px raster is kept as `favicon.png`
//! - **Deterministic**: identical inputs produce byte-identical outputs
//!
//! # Example
//!
//! ```no_run
//! use icongen::{generate_icons, GeneratorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = generate_icons(&GeneratorConfig::default())?;
//! println!("{}/{} icons generated", summary.generated, summary.attempted);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod favicon;
pub mod manifest;
pub mod raster;

use raster::{Rasterize, SvgRasterizer};

pub use favicon::{FAVICON_NAME, FAVICON_SIZE};

/// Raster sizes required by the web manifest, in the order they are
/// attempted and reported.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Default directory holding the source icon and receiving every output
pub const PUBLIC_DIR: &str = "public";

/// File name of the source vector icon inside the base directory
pub const SOURCE_NAME: &str = "icon-base.svg";

/// File name of the raster variant for a given pixel size
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

/// Configuration for an icon generation run
///
/// Sizes and file names are fixed; the only knob is where the run is
/// rooted, which defaults to the web app's `public/` directory.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory containing `icon-base.svg`; all outputs land here too
    pub base_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(PUBLIC_DIR),
        }
    }
}

impl GeneratorConfig {
    /// Path of the source vector icon
    pub fn source_path(&self) -> PathBuf {
        self.base_dir.join(SOURCE_NAME)
    }

    /// Destination path of the raster variant for `size`
    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.base_dir.join(icon_file_name(size))
    }
}

/// How the favicon step ended
#[derive(Debug, Clone, PartialEq)]
pub enum FaviconOutcome {
    /// ICO container written at the given path
    Packaged(PathBuf),
    /// No container packager compiled in; raster kept at the given path
    RasterKept(PathBuf),
    /// Rendering or packaging failed; reported, not fatal
    Failed,
}

/// Result of a full generation run
///
/// Per-size failures and a failed favicon step are tolerated and show up
/// here rather than as an `Err`; only the fatal gates (missing source,
/// rasterizer initialization) abort the run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of raster variants written
    pub generated: usize,
    /// Number of raster variants attempted (always the full size list)
    pub attempted: usize,
    /// Outcome of the favicon step
    pub favicon: FaviconOutcome,
}

impl RunSummary {
    /// True when every variant and the favicon were produced
    pub fn complete(&self) -> bool {
        self.generated == self.attempted && self.favicon != FaviconOutcome::Failed
    }
}

/// Run the generator with the production rasterizer.
///
/// Checks the source exists, acquires the rasterization capability, then
/// delegates to [`generate_icons_with`]. Both gates are fatal: nothing is
/// attempted if either fails.
pub fn generate_icons(config: &GeneratorConfig) -> Result<RunSummary> {
    let source = config.source_path();
    if !source.exists() {
        return Err(Error::MissingSource(source));
    }

    let rasterizer = SvgRasterizer::ensure()?;
    generate_icons_with(config, &rasterizer)
}

/// Run the generator through an explicit [`Rasterize`] backend.
///
/// Every size in [`ICON_SIZES`] is attempted regardless of earlier
/// failures; each attempt is reported with a per-file console line, then
/// the favicon and manifest steps run.
pub fn generate_icons_with(
    config: &GeneratorConfig,
    rasterizer: &dyn Rasterize,
) -> Result<RunSummary> {
    let source = config.source_path();
    if !source.exists() {
        return Err(Error::MissingSource(source));
    }

    println!("Generating web app icons...");
    let mut generated = 0;
    for &size in ICON_SIZES.iter() {
        let dest = config.icon_path(size);
        match rasterizer.rasterize(&source, &dest, size) {
            Ok(()) => {
                println!("✓ Generated {} ({}x{})", dest.display(), size, size);
                generated += 1;
            }
            Err(e) => {
                log::warn!("rasterization failed for {}: {}", dest.display(), e);
                println!("✗ Failed to generate {}: {}", dest.display(), e);
            }
        }
    }

    println!();
    println!(
        "Generated {}/{} icons successfully!",
        generated,
        ICON_SIZES.len()
    );

    let favicon = match favicon::generate_favicon(rasterizer, &source, &config.base_dir) {
        Ok(path) => {
            println!("✓ Generated {}", path.display());
            #[cfg(feature = "ico")]
            {
                FaviconOutcome::Packaged(path)
            }
            #[cfg(not(feature = "ico"))]
            {
                FaviconOutcome::RasterKept(path)
            }
        }
        Err(e) => {
            log::warn!("favicon step failed: {}", e);
            println!("✗ Failed to generate favicon: {}", e);
            FaviconOutcome::Failed
        }
    };

    match manifest::write_manifest(&config.base_dir) {
        Ok(path) => println!("✓ Wrote {}", path.display()),
        Err(e) => {
            log::warn!("manifest write failed: {}", e);
            println!("✗ Failed to write {}: {}", manifest::MANIFEST_NAME, e);
        }
    }

    Ok(RunSummary {
        generated,
        attempted: ICON_SIZES.len(),
        favicon,
    })
}
