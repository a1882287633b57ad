/// Random bit sources and entropy configuration
pub mod entropy;
/// Share generation
pub mod generator;
/// Overlay reconstruction
pub mod reconstruct;
/// Share pairs
pub mod share;

pub use entropy::{BitSource, EntropySource, FixedBits, RandomBits};
#[cfg(feature = "parallel")]
pub use generator::generate_shares_parallel;
pub use generator::{generate_shares, split_luma};
pub use reconstruct::overlay;
pub use share::SharePair;
