//! Command-line interface for splitting images into shares and overlaying them

use crate::analysis::contrast::{ContrastReport, measure_contrast, unbalanced_blocks};
use crate::io::configuration::{
    BINARIZE_THRESHOLD, DEFAULT_OVERLAY_OUTPUT, DEMO_HEIGHT, DEMO_ORIGINAL_NAME, DEMO_TEXT,
    DEMO_WIDTH, GIF_FRAME_DELAY_MS, MAX_HEIGHT, MAX_WIDTH, OVERLAY_GIF_SUFFIX, RESULT_SUFFIX,
    SHARE1_SUFFIX, SHARE2_SUFFIX, SLIDE_FRAMES,
};
use crate::io::error::{Result, ShareError, invalid_parameter};
use crate::io::image::{PreprocessConfig, export_raster_as_png, load_binary_raster, load_share};
use crate::io::progress::{ProgressManager, Stage};
use crate::io::sample::banner;
use crate::io::visualization::OverlayAnimation;
use crate::raster::BinaryRaster;
use crate::scheme::{EntropySource, SharePair, generate_shares, overlay};
use clap::{Args, Parser, Subcommand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Image extensions picked up when the target is a directory
const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Parser)]
#[command(name = "visualshare")]
#[command(
    author,
    version,
    about = "Split black and white images into two visual cryptography shares"
)]
/// Command-line arguments for the share tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Split an image, or every image in a directory, into two shares
    Split(SplitArgs),
    /// Reconstruct an image by overlaying two stored shares
    Overlay(OverlayArgs),
    /// Render a test image and run it through the whole pipeline
    Demo(DemoArgs),
}

/// Arguments for `split`
#[derive(Args)]
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct SplitArgs {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible shares (fresh entropy if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Images wider than this are scaled down first
    #[arg(short = 'W', long, default_value_t = MAX_WIDTH)]
    pub max_width: u32,

    /// Images taller than this are scaled down first
    #[arg(short = 'H', long, default_value_t = MAX_HEIGHT)]
    pub max_height: u32,

    /// Luma levels above this become white
    #[arg(short, long, default_value_t = BINARIZE_THRESHOLD)]
    pub threshold: u8,

    /// Skip writing the overlaid reconstruction
    #[arg(long)]
    pub no_overlay: bool,

    /// Also write an animated GIF of the shares sliding together
    #[arg(short, long)]
    pub visualize: bool,

    /// Report contrast and share balance for every file
    #[arg(short, long)]
    pub check: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Generate rows in parallel with per-row generators
    #[cfg(feature = "parallel")]
    #[arg(short, long)]
    pub parallel: bool,
}

impl SplitArgs {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Preprocessing settings from the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a maximum dimension is zero
    pub fn preprocess_config(&self) -> Result<PreprocessConfig> {
        if self.max_width == 0 {
            return Err(invalid_parameter(
                "max-width",
                &self.max_width,
                &"must be positive",
            ));
        }
        if self.max_height == 0 {
            return Err(invalid_parameter(
                "max-height",
                &self.max_height,
                &"must be positive",
            ));
        }
        Ok(PreprocessConfig {
            max_width: self.max_width,
            max_height: self.max_height,
            threshold: self.threshold,
        })
    }
}

/// Arguments for `overlay`
#[derive(Args)]
pub struct OverlayArgs {
    /// First share
    #[arg(value_name = "SHARE_A")]
    pub first: PathBuf,

    /// Second share
    #[arg(value_name = "SHARE_B")]
    pub second: PathBuf,

    /// Where to write the reconstruction
    #[arg(short, long, default_value = DEFAULT_OVERLAY_OUTPUT)]
    pub output: PathBuf,
}

/// Arguments for `demo`
#[derive(Args)]
pub struct DemoArgs {
    /// Directory receiving the demo images
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Text drawn into the test image
    #[arg(long, default_value = DEMO_TEXT)]
    pub text: String,

    /// Test image width
    #[arg(long, default_value_t = DEMO_WIDTH)]
    pub width: usize,

    /// Test image height
    #[arg(long, default_value_t = DEMO_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible shares (fresh entropy if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Run the selected operation
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the operation
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Split(args) => FileProcessor::new(args).process(),
            Command::Overlay(args) => run_overlay(&args),
            Command::Demo(args) => run_demo(&args).map(|_| ()),
        }
    }
}

/// Paths of the images written for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// First share
    pub share1: PathBuf,
    /// Second share
    pub share2: PathBuf,
    /// Overlaid reconstruction
    pub result: PathBuf,
    /// Overlay animation
    pub animation: PathBuf,
}

impl OutputPaths {
    /// Output paths next to `input_path`, named after its stem
    pub fn for_input(input_path: &Path) -> Self {
        Self {
            share1: sibling_path(input_path, SHARE1_SUFFIX, "png"),
            share2: sibling_path(input_path, SHARE2_SUFFIX, "png"),
            result: sibling_path(input_path, RESULT_SUFFIX, "png"),
            animation: sibling_path(input_path, OVERLAY_GIF_SUFFIX, "gif"),
        }
    }
}

fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

fn file_stem_string(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

// Only an output whose input sits in the same directory counts as generated
fn is_generated_output(path: &Path, input_stems: &HashSet<String>) -> bool {
    let stem = file_stem_string(path);
    [SHARE1_SUFFIX, SHARE2_SUFFIX, RESULT_SUFFIX, OVERLAY_GIF_SUFFIX]
        .iter()
        .filter_map(|suffix| stem.strip_suffix(suffix))
        .any(|source| input_stems.contains(source))
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Orchestrates batch splitting of image files with progress tracking
pub struct FileProcessor {
    args: SplitArgs,
    progress_manager: Option<ProgressManager>,
    entropy: EntropySource,
}

impl FileProcessor {
    /// Create a new file processor with the given arguments
    pub fn new(args: SplitArgs) -> Self {
        let progress_manager = args.should_show_progress().then(ProgressManager::new);
        let entropy = EntropySource::from_seed(args.seed);

        Self {
            args,
            progress_manager,
            entropy,
        }
    }

    /// Process files according to the arguments
    ///
    /// With a seed, one generator is shared by all files in sorted order,
    /// so a whole directory run is reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let config = self.args.preprocess_config()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut rng = self.entropy.rng();
        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, &config, &mut rng)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Files the processor would handle, after skipping existing outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a supported image nor a
    /// readable directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            if has_supported_extension(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"must be a PNG, JPEG, BMP or GIF image",
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| ShareError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut images = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file() && has_supported_extension(&path) {
                    images.push(path);
                }
            }
            let stems: HashSet<String> = images.iter().map(|p| file_stem_string(p)).collect();
            let mut files: Vec<PathBuf> = images
                .iter()
                .filter(|path| !is_generated_output(path, &stems))
                .filter(|path| self.should_process_file(path))
                .cloned()
                .collect();
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.args.skip_existing() {
            return true;
        }

        let outputs = OutputPaths::for_input(input_path);
        if outputs.share1.exists() && outputs.share2.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.args.quiet {
                eprintln!("Skipping: {} (shares exist)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn set_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.set_stage(index, stage);
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        config: &PreprocessConfig,
        rng: &mut rand::rngs::StdRng,
    ) -> Result<()> {
        let outputs = OutputPaths::for_input(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        let source = load_binary_raster(input_path, config)?;

        self.set_stage(index, Stage::Split);
        let pair = self.split(&source, rng);

        self.set_stage(index, Stage::Export);
        export_raster_as_png(pair.first(), &outputs.share1)?;
        export_raster_as_png(pair.second(), &outputs.share2)?;

        let reconstructed = pair.reconstruct();
        if !self.args.no_overlay {
            export_raster_as_png(&reconstructed, &outputs.result)?;
        }

        if self.args.visualize {
            self.set_stage(index, Stage::Preview);
            OverlayAnimation::from_pair(&pair, SLIDE_FRAMES)?
                .export_gif(&outputs.animation, GIF_FRAME_DELAY_MS)?;
        }

        if self.args.check {
            let report = measure_contrast(&source, &reconstructed)?;
            let unbalanced =
                unbalanced_blocks(pair.first())? + unbalanced_blocks(pair.second())?;
            self.report(input_path, &report, unbalanced);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn split(&self, source: &BinaryRaster, rng: &mut rand::rngs::StdRng) -> SharePair {
        if self.args.parallel {
            crate::scheme::generate_shares_parallel(source, rng)
        } else {
            generate_shares(source, &mut crate::scheme::RandomBits::new(rng))
        }
    }

    #[cfg(not(feature = "parallel"))]
    #[allow(clippy::unused_self)]
    fn split(&self, source: &BinaryRaster, rng: &mut rand::rngs::StdRng) -> SharePair {
        generate_shares(source, &mut crate::scheme::RandomBits::new(rng))
    }

    // Allow print for the requested check report
    #[allow(clippy::print_stderr)]
    fn report(&self, input_path: &Path, report: &ContrastReport, unbalanced: usize) {
        let line = format!(
            "{}: black {:.2} / white {:.2} (contrast {:.2}), {unbalanced} unbalanced blocks{}",
            input_path.display(),
            report.black_source_density,
            report.white_source_density,
            report.contrast,
            if report.is_faithful() && unbalanced == 0 {
                ""
            } else {
                " [FAILED]"
            }
        );
        match self.progress_manager {
            Some(ref pm) => pm.println(&line),
            None => eprintln!("{line}"),
        }
    }
}

fn run_overlay(args: &OverlayArgs) -> Result<()> {
    let first = load_share(&args.first)?;
    let second = load_share(&args.second)?;
    let result = overlay(&first, &second)?;
    export_raster_as_png(&result, &args.output)
}

/// Render the demo image and write it with its shares and reconstruction
///
/// Returns the rendered source raster.
///
/// # Errors
///
/// Returns an error if the demo dimensions are zero or any file cannot be
/// written
pub fn run_demo(args: &DemoArgs) -> Result<BinaryRaster> {
    let source = banner(&args.text, args.width, args.height)?;
    let original_path = args.output_dir.join(format!("{DEMO_ORIGINAL_NAME}.png"));
    export_raster_as_png(&source, &original_path)?;

    let mut bits = EntropySource::from_seed(args.seed).bits();
    let pair = generate_shares(&source, &mut bits);
    let outputs = OutputPaths::for_input(&original_path);
    export_raster_as_png(pair.first(), &outputs.share1)?;
    export_raster_as_png(pair.second(), &outputs.share2)?;
    export_raster_as_png(&pair.reconstruct(), &outputs.result)?;
    OverlayAnimation::from_pair(&pair, SLIDE_FRAMES)?
        .export_gif(&outputs.animation, GIF_FRAME_DELAY_MS)?;

    Ok(source)
}
