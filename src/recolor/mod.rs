//! Sprite recoloring.
//!
//! Derives coloured sprite variants from a base set. Every image in
//! `<base_dir>/<base>/` is copied to `<base_dir>/<variant>/` with the pixels
//! listed in the remap table replaced by that variant's colour.

mod colour;
mod table;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::{RegenError, Result};
use crate::output::{display_path, Printer};

pub use colour::Colour;
pub use table::{RecolorConfig, VariantMap};

/// Totals for one recolor run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecolorReport {
    /// Images written across all variants.
    pub images: usize,
    /// Pixels replaced across all variants.
    pub pixels: usize,
}

/// Replace every pixel found in `colours`. Returns the new image and the
/// number of pixels replaced.
pub fn recolor_image(image: &RgbaImage, colours: &HashMap<Colour, Colour>) -> (RgbaImage, usize) {
    let mut out = image.clone();
    let mut replaced = 0;

    for pixel in out.pixels_mut() {
        if let Some(&to) = colours.get(&Colour::from(*pixel)) {
            *pixel = to.into();
            replaced += 1;
        }
    }

    (out, replaced)
}

/// Source images of the base variant, sorted by name. Files without a known
/// image extension are skipped with a warning.
fn source_images(dir: &Path, printer: &Printer) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| RegenError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to read sprite directory: {}", e),
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    Ok(files
        .into_iter()
        .filter(|path| {
            let known = ImageFormat::from_path(path).is_ok();
            if !known {
                printer.warning("Skipping", &display_path(path));
            }
            known
        })
        .collect())
}

/// Run a recolor config end to end.
pub fn recolor(config: &RecolorConfig, printer: &Printer) -> Result<RecolorReport> {
    let variants = config.variant_maps()?;
    let source_dir = config.source_dir();
    let mut report = RecolorReport::default();

    for source in source_images(&source_dir, printer)? {
        let image = image::open(&source)
            .map_err(|e| RegenError::Image {
                path: source.clone(),
                message: e.to_string(),
            })?
            .to_rgba8();

        // `source_images` only yields files, so a file name is present.
        let Some(file_name) = source.file_name() else {
            continue;
        };

        for variant in &variants {
            let out_dir = config.base_dir.join(&variant.name);
            fs::create_dir_all(&out_dir).map_err(|e| RegenError::Io {
                path: out_dir.clone(),
                message: format!("Failed to create output directory: {}", e),
            })?;

            let (recolored, replaced) = recolor_image(&image, &variant.colours);
            let out_path = out_dir.join(file_name);
            recolored.save(&out_path).map_err(|e| RegenError::Image {
                path: out_path.clone(),
                message: format!("Failed to write image: {}", e),
            })?;

            printer.status(
                "Recolored",
                &format!("{} -> {}", display_path(&source), display_path(&out_path)),
            );
            report.images += 1;
            report.pixels += replaced;
        }
    }

    Ok(report)
}
