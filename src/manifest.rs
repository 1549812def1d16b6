//! Web manifest entries for the generated icon set.
//!
//! The manifest `icons` array is what actually consumes the rendered
//! files; emitting it alongside them keeps the two in lockstep.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::{icon_file_name, ICON_SIZES};

/// File the icon entries are written to, inside the output directory
pub const MANIFEST_NAME: &str = "icons.json";

/// One entry of a web manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestIcon {
    /// Path of the raster file, relative to the manifest
    pub src: String,
    /// Dimensions in `WxH` notation, e.g. `"192x192"`
    pub sizes: String,
    /// MIME type of the raster file
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Display purposes the icon is suitable for
    pub purpose: String,
}

impl ManifestIcon {
    fn for_size(size: u32) -> Self {
        Self {
            src: icon_file_name(size),
            sizes: format!("{}x{}", size, size),
            mime_type: "image/png".to_string(),
            purpose: "any maskable".to_string(),
        }
    }
}

/// Entries for every generated size, in declaration order.
pub fn manifest_icons() -> Vec<ManifestIcon> {
    ICON_SIZES.iter().map(|&size| ManifestIcon::for_size(size)).collect()
}

/// Write the icon entries as pretty JSON to `icons.json` in `base_dir`.
///
/// Field order is fixed by the struct, so repeated runs produce
/// byte-identical output.
pub fn write_manifest(base_dir: &Path) -> Result<PathBuf> {
    let dest = base_dir.join(MANIFEST_NAME);
    let json = serde_json::to_string_pretty(&manifest_icons())
        .map_err(|e| Error::Other(format!("serialize manifest icons: {}", e)))?;
    fs::write(&dest, json)
        .map_err(|e| Error::IoError(format!("write {}: {}", dest.display(), e)))?;
    Ok(dest)
}
