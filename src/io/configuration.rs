//! Preprocessing constants and runtime configuration defaults

// Larger inputs are scaled down before binarization, keeping aspect ratio
/// Maximum source width in pixels
pub const MAX_WIDTH: u32 = 400;
/// Maximum source height in pixels
pub const MAX_HEIGHT: u32 = 400;

/// Luma levels strictly above this become white, the rest black
pub const BINARIZE_THRESHOLD: u8 = 128;

// Output settings
/// Suffix for the first share
pub const SHARE1_SUFFIX: &str = "_share1";
/// Suffix for the second share
pub const SHARE2_SUFFIX: &str = "_share2";
/// Suffix for the overlaid reconstruction
pub const RESULT_SUFFIX: &str = "_result";
/// Suffix for the overlay animation
pub const OVERLAY_GIF_SUFFIX: &str = "_overlay";
/// Default file name for a reconstruction made from stored shares
pub const DEFAULT_OVERLAY_OUTPUT: &str = "result.png";

// Overlay animation settings
/// Number of frames while the first share slides into place
pub const SLIDE_FRAMES: usize = 12;
/// Delay between animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// The aligned frame is held this many times longer than the others
pub const FINAL_FRAME_HOLD: u32 = 25;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Demo settings
/// Text rendered into the demo image
pub const DEMO_TEXT: &str = "TEST";
/// Demo image width
pub const DEMO_WIDTH: usize = 100;
/// Demo image height
pub const DEMO_HEIGHT: usize = 100;
/// File name of the rendered demo image
pub const DEMO_ORIGINAL_NAME: &str = "original";
