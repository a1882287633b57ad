/// Command-line interface
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding, binarization and export
pub mod image;
/// Progress display
pub mod progress;
/// Built-in test images
pub mod sample;
/// Overlay animation export
pub mod visualization;
