//! Two-out-of-two visual secret sharing for black and white images
//!
//! Every pixel of a binary image is expanded into a 2x2 block on each of two
//! shares. Either share alone is uniformly random noise; stacking both, a
//! logical AND where black wins, turns black pixels fully black and leaves
//! white pixels half black, so the secret becomes legible by contrast.

#![forbid(unsafe_code)]

/// Contrast and balance measurements
pub mod analysis;
/// Image loading, export, test patterns and the command-line front end
pub mod io;
/// Two-level pixels, sub-pixel blocks and rasters
pub mod raster;
/// Share generation and reconstruction
pub mod scheme;

pub use io::error::{Result, ShareError};
pub use raster::{BinaryPixel, BinaryRaster, Dimensions, SubPixelBlock};
pub use scheme::{EntropySource, SharePair, generate_shares, overlay};
