/// Contrast and share balance measurements
pub mod contrast;
