//! Decoding, binarization and PNG export of two-level rasters

use crate::io::configuration::{BINARIZE_THRESHOLD, MAX_HEIGHT, MAX_WIDTH};
use crate::io::error::{Result, ShareError, image_export, image_load, invalid_input};
use crate::raster::{BinaryPixel, BinaryRaster};
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma, Rgb};
use ndarray::Array2;
use std::path::Path;

/// How a decoded image is reduced to a two-level raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessConfig {
    /// Images wider than this are scaled down
    pub max_width: u32,
    /// Images taller than this are scaled down
    pub max_height: u32,
    /// Luma levels strictly above this become white
    pub threshold: u8,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
            threshold: BINARIZE_THRESHOLD,
        }
    }
}

/// Scale an image down to fit the configured bounds, keeping aspect ratio
///
/// Images already within bounds are returned unchanged.
pub fn fit_within(img: DynamicImage, config: &PreprocessConfig) -> DynamicImage {
    if img.width() > config.max_width || img.height() > config.max_height {
        img.resize(config.max_width, config.max_height, FilterType::Triangle)
    } else {
        img
    }
}

/// Convert to 8-bit luma with BT.601 weights (0.299, 0.587, 0.114)
///
/// Alpha is ignored. Gray input passes through unchanged.
pub fn luminance(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
        Luma([((weighted + 500) / 1000) as u8])
    })
}

/// Threshold a grayscale image into a raster
///
/// # Errors
///
/// Returns `InvalidInput` if the image has no pixels
pub fn binarize(gray: &GrayImage, threshold: u8) -> Result<BinaryRaster> {
    BinaryRaster::from_fn(gray.width() as usize, gray.height() as usize, |row, col| {
        match gray.get_pixel_checked(col as u32, row as u32) {
            Some(Luma([level])) if *level > threshold => BinaryPixel::White,
            _ => BinaryPixel::Black,
        }
    })
}

/// Load any supported image and reduce it to a two-level raster
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image has no pixels
pub fn load_binary_raster(path: &Path, config: &PreprocessConfig) -> Result<BinaryRaster> {
    let img = image::open(path).map_err(image_load(path))?;
    let gray = luminance(&fit_within(img, config));
    binarize(&gray, config.threshold)
}

/// Load a previously exported share without any preprocessing
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - Any pixel is not exactly black or white
pub fn load_share(path: &Path) -> Result<BinaryRaster> {
    let gray = image::open(path).map_err(image_load(path))?.to_luma8();
    let levels = Array2::from_shape_vec(
        (gray.height() as usize, gray.width() as usize),
        gray.into_raw(),
    )
    .map_err(|e| invalid_input(&e))?;
    BinaryRaster::from_luma(levels.view()).map_err(|e| match e {
        ShareError::InvalidInput { reason } => ShareError::InvalidInput {
            reason: format!("'{}' is not a share: {reason}", path.display()),
        },
        other => other,
    })
}

/// Convert a raster to an 8-bit grayscale image
pub fn raster_to_gray_image(raster: &BinaryRaster) -> GrayImage {
    GrayImage::from_fn(raster.width() as u32, raster.height() as u32, |x, y| {
        Luma([raster
            .get(y as usize, x as usize)
            .unwrap_or_default()
            .to_luma()])
    })
}

/// Export a raster as a grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_raster_as_png(raster: &BinaryRaster, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ShareError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    raster_to_gray_image(raster)
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(image_export(output_path))?;

    Ok(())
}
