use std::fs;
use std::path::Path;
use std::sync::Mutex;

use icongen::raster::{Rasterize, SvgRasterizer};
use icongen::{
    generate_icons, generate_icons_with, Error, FaviconOutcome, GeneratorConfig, ICON_SIZES,
};
use resvg::tiny_skia;

const FIXTURE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="512" height="512" viewBox="0 0 512 512">
  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#3B82F6"/>
      <stop offset="100%" stop-color="#1E40AF"/>
    </linearGradient>
  </defs>
  <circle cx="256" cy="256" r="240" fill="url(#bg)" stroke="#1E3A8A" stroke-width="8"/>
  <rect x="160" y="280" width="190" height="20" rx="10" fill="#F3F4F6"/>
</svg>"##;

fn config_with_fixture(dir: &Path) -> GeneratorConfig {
    fs::write(dir.join("icon-base.svg"), FIXTURE_SVG).expect("write fixture");
    GeneratorConfig {
        base_dir: dir.to_path_buf(),
    }
}

/// Test backend: succeeds with a blank raster, except for chosen sizes.
struct FlakyRasterizer {
    fail_sizes: Vec<u32>,
    attempts: Mutex<Vec<u32>>,
}

impl FlakyRasterizer {
    fn failing_at(fail_sizes: Vec<u32>) -> Self {
        Self {
            fail_sizes,
            attempts: Mutex::new(Vec::new()),
        }
    }
}

impl Rasterize for FlakyRasterizer {
    fn rasterize(&self, _source: &Path, dest: &Path, size: u32) -> icongen::Result<()> {
        self.attempts.lock().expect("attempts lock").push(size);
        if self.fail_sizes.contains(&size) {
            return Err(Error::RenderError(format!("simulated failure at {}", size)));
        }
        let pixmap = tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| Error::RenderError("pixmap allocation".into()))?;
        pixmap
            .save_png(dest)
            .map_err(|e| Error::IoError(e.to_string()))
    }
}

#[test]
fn full_run_generates_every_size() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_with_fixture(dir.path());

    let summary = generate_icons(&config).expect("run");
    assert_eq!(summary.generated, 8);
    assert_eq!(summary.attempted, 8);
    assert!(summary.complete());

    for &size in ICON_SIZES.iter() {
        let path = config.icon_path(size);
        let pixmap = tiny_skia::Pixmap::load_png(&path)
            .unwrap_or_else(|e| panic!("decode {}: {}", path.display(), e));
        assert_eq!(pixmap.width(), size);
        assert_eq!(pixmap.height(), size);
    }

    assert!(dir.path().join("icons.json").exists());
}

#[cfg(feature = "ico")]
#[test]
fn full_run_packages_the_favicon_container() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_with_fixture(dir.path());

    let summary = generate_icons(&config).expect("run");
    let artifact = dir.path().join("favicon.ico");
    assert_eq!(summary.favicon, FaviconOutcome::Packaged(artifact.clone()));

    let bytes = fs::read(&artifact).expect("read favicon");
    // ICONDIR header: reserved 0, type 1 (icon), count 1
    assert_eq!(&bytes[0..6], &[0, 0, 1, 0, 1, 0]);
    assert!(!dir.path().join("favicon-32.png").exists());
}

#[cfg(not(feature = "ico"))]
#[test]
fn full_run_keeps_the_plain_raster_favicon() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_with_fixture(dir.path());

    let summary = generate_icons(&config).expect("run");
    let artifact = dir.path().join("favicon.png");
    assert_eq!(summary.favicon, FaviconOutcome::RasterKept(artifact.clone()));

    let pixmap = tiny_skia::Pixmap::load_png(&artifact).expect("decode favicon");
    assert_eq!(pixmap.width(), 32);
    assert!(!dir.path().join("favicon-32.png").exists());
}

#[test]
fn missing_source_aborts_before_any_conversion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = GeneratorConfig {
        base_dir: dir.path().to_path_buf(),
    };

    let result = generate_icons(&config);
    assert!(matches!(result, Err(Error::MissingSource(_))));

    let written = fs::read_dir(dir.path()).expect("read_dir").count();
    assert_eq!(written, 0, "no outputs expected after a missing-source abort");
}

#[test]
fn malformed_source_fails_every_item_but_not_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("icon-base.svg"), "not an svg at all").expect("write fixture");
    let config = GeneratorConfig {
        base_dir: dir.path().to_path_buf(),
    };

    let summary = generate_icons(&config).expect("run should survive bad input");
    assert_eq!(summary.generated, 0);
    assert_eq!(summary.attempted, 8);
    assert_eq!(summary.favicon, FaviconOutcome::Failed);

    for &size in ICON_SIZES.iter() {
        assert!(!config.icon_path(size).exists());
    }
}

#[test]
fn simulated_failures_do_not_stop_remaining_sizes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_with_fixture(dir.path());
    let rasterizer = FlakyRasterizer::failing_at(vec![96, 152, 384]);

    let summary = generate_icons_with(&config, &rasterizer).expect("run");
    assert_eq!(summary.generated, 5);
    assert_eq!(summary.attempted, 8);
    assert!(!summary.complete());

    let attempts = rasterizer.attempts.lock().expect("attempts lock");
    // All 8 sizes attempted in declaration order, then the 32px favicon.
    assert_eq!(&attempts[..8], &ICON_SIZES);
    assert_eq!(attempts[8], 32);
}

#[test]
fn production_rasterizer_never_panics_on_bad_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = dir.path().join("icon-base.svg");
    fs::write(&source, "<svg><broken").expect("write fixture");

    let rasterizer = SvgRasterizer::ensure().expect("ensure");
    let result = rasterizer.rasterize(&source, &dir.path().join("icon-72.png"), 72);
    assert!(result.is_err());
}
