//! Animated GIF preview of one share sliding over the other

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, ShareError, image_export, invalid_parameter};
use crate::raster::{BinaryPixel, BinaryRaster};
use crate::scheme::SharePair;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

/// Frames of the first share moving across the second until aligned
///
/// Where the sheets overlap the frame shows their overlay; elsewhere only
/// the second share is visible. The last frame is the reconstruction.
pub struct OverlayAnimation<'a> {
    first: &'a BinaryRaster,
    second: &'a BinaryRaster,
    steps: usize,
}

impl<'a> OverlayAnimation<'a> {
    /// Animate two rasters in `steps` moves
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The rasters differ in size
    /// - `steps` is zero
    pub fn new(first: &'a BinaryRaster, second: &'a BinaryRaster, steps: usize) -> Result<Self> {
        if first.dimensions() != second.dimensions() {
            return Err(ShareError::DimensionMismatch {
                first: first.dimensions(),
                second: second.dimensions(),
            });
        }
        if steps == 0 {
            return Err(invalid_parameter("steps", &steps, &"must be positive"));
        }
        Ok(Self {
            first,
            second,
            steps,
        })
    }

    /// Animate both shares of a pair
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero
    pub fn from_pair(pair: &'a SharePair, steps: usize) -> Result<Self> {
        Self::new(pair.first(), pair.second(), steps)
    }

    /// Number of frames, including the starting position
    pub const fn frame_count(&self) -> usize {
        self.steps + 1
    }

    /// Horizontal shift of the first share at `step`, clamped to the last step
    pub fn offset(&self, step: usize) -> usize {
        let remaining = self.steps - step.min(self.steps);
        self.first.width() * remaining / self.steps
    }

    /// Raster shown at `step`
    pub fn frame(&self, step: usize) -> BinaryRaster {
        let shift = self.offset(step);
        let pixels = Array2::from_shape_fn(self.second.pixels().dim(), |(row, col)| {
            let below = self.second.get(row, col).unwrap_or_default();
            let above = col
                .checked_sub(shift)
                .and_then(|src_col| self.first.get(row, src_col))
                .unwrap_or(BinaryPixel::White);
            above & below
        });
        BinaryRaster::from_array_unchecked(pixels)
    }

    /// Export every frame as a looping GIF
    ///
    /// Delays below what viewers reliably honour are raised to
    /// `VIEWER_MIN_FRAME_DELAY_MS`; the aligned frame is held longer.
    /// Delays the GIF format cannot represent are capped by the encoder.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);

        let mut frames: Vec<Frame> = (0..self.frame_count())
            .map(|step| render_frame(&self.frame(step), delay_ms))
            .collect();
        if let Some(last) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms.saturating_mul(FINAL_FRAME_HOLD), 1),
            ));
        }

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ShareError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| ShareError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(image_export(output_path))?;
        encoder
            .encode_frames(frames)
            .map_err(image_export(output_path))?;

        Ok(())
    }
}

fn render_frame(raster: &BinaryRaster, delay_ms: u32) -> Frame {
    let img = RgbaImage::from_fn(raster.width() as u32, raster.height() as u32, |x, y| {
        let level = raster
            .get(y as usize, x as usize)
            .unwrap_or_default()
            .to_luma();
        Rgba([level, level, level, 255])
    });
    Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
}
