//! Command-line interface for batch converting images into stitch charts

use crate::analysis::usage::color_usage;
use crate::chart::converter::{Chart, ChartSettings, convert};
use crate::chart::palette::rgb_to_hex;
use crate::io::configuration::{
    CHART_SUFFIX, DATA_SUFFIX, DEFAULT_NUM_COLORS, DEFAULT_PREVIEW_BLOCK_SIZE,
    DEFAULT_STITCH_WIDTH, PREVIEW_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::export::{
    PreviewOptions, chart_csv, dimensions_summary, encode_png, encode_preview_png,
};
use crate::io::image::load_path;
use crate::io::progress::{ProgressManager, Stage};
use clap::Parser;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "stitchchart")]
#[command(
    author,
    version,
    about = "Convert images into pixelated crochet stitch charts"
)]
/// Command-line arguments for the chart conversion tool
pub struct Cli {
    /// Input image (PNG, JPEG or GIF) or directory to process
    ///
    /// In a directory, `<name>_chart` and `<name>_preview` images are skipped
    /// when `<name>` is also an image there
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Chart width in stitches (10-100)
    #[arg(short, long, default_value_t = DEFAULT_STITCH_WIDTH)]
    pub width: u32,

    /// Maximum number of yarn colors (2-20)
    #[arg(short, long, default_value_t = DEFAULT_NUM_COLORS)]
    pub colors: usize,

    /// Preview pixels per stitch
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_BLOCK_SIZE)]
    pub block_size: u32,

    /// Draw grid lines between stitches in the preview
    #[arg(short, long)]
    pub grid_lines: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Chart settings selected on the command line
    pub const fn settings(&self) -> ChartSettings {
        ChartSettings::new(self.width, self.colors)
    }

    /// Preview options selected on the command line
    pub const fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            block_size: self.block_size,
            grid_lines: self.grid_lines,
        }
    }
}

/// Orchestrates batch conversion of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the settings or preview options are invalid, target
    /// validation fails or any file fails to convert
    pub fn process(&mut self) -> Result<()> {
        self.cli.settings().validate()?;
        self.cli.preview_options().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_supported_image(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a PNG, JPEG or GIF image",
                ))
            }
        } else if target.is_dir() {
            let mut images = Vec::new();
            let entries = std::fs::read_dir(target)
                .map_err(|e| file_system_error(target, "read directory", e))?;
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(target, "read directory", e))?
                    .path();
                if path.is_file() && is_supported_image(&path) {
                    images.push(path);
                }
            }
            images.sort();

            let stems: BTreeSet<String> =
                images.iter().filter_map(|path| file_stem(path)).collect();
            Ok(images
                .into_iter()
                .filter(|path| !is_generated_output(path, &stems))
                .filter(|path| self.should_process_file(path))
                .collect())
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_chart_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }
        let image = load_path(input_path)?;

        self.enter_stage(index, Stage::Convert);
        let chart = convert(&image, self.cli.settings())?;

        self.enter_stage(index, Stage::Export);
        // Build every buffer before writing any file
        let chart_png = encode_png(&chart)?;
        let preview_png = encode_preview_png(&chart, &self.cli.preview_options())?;
        let data_csv = chart_csv(&chart);

        write_output(&Self::get_data_path(input_path), data_csv.as_bytes())?;
        write_output(&Self::get_preview_path(input_path), &preview_png)?;
        // Chart goes last; its presence marks the input as converted
        write_output(&Self::get_chart_path(input_path), &chart_png)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }

        if !self.cli.quiet {
            match self.progress_manager {
                Some(ref pm) => pm.suspend(|| report_chart(input_path, &chart)),
                None => report_chart(input_path, &chart),
            }
        }

        Ok(())
    }

    fn enter_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.enter_stage(index, stage);
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

    /// Path of the low-resolution chart PNG written for an input
    pub fn get_chart_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, CHART_SUFFIX, "png")
    }

    /// Path of the enlarged preview PNG written for an input
    pub fn get_preview_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, PREVIEW_SUFFIX, "png")
    }

    /// Path of the row table CSV written for an input
    pub fn get_data_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, DATA_SUFFIX, "csv")
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(ToString::to_string)
}

// A chart or preview counts as generated only when its source image sits beside it
fn is_generated_output(path: &Path, stems: &BTreeSet<String>) -> bool {
    file_stem(path).is_some_and(|stem| {
        [CHART_SUFFIX, PREVIEW_SUFFIX].iter().any(|suffix| {
            stem.strip_suffix(suffix)
                .is_some_and(|source| stems.contains(source))
        })
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|e| file_system_error(path, "write output", e))
}

// Allow print for the per-file chart summary
#[allow(clippy::print_stdout)]
fn report_chart(input_path: &Path, chart: &Chart) {
    println!(
        "✅ {}: {}",
        input_path.display(),
        dimensions_summary(chart)
    );
    for usage in color_usage(chart) {
        println!(
            "   Color {:>2}  {}  {} stitches",
            usage.index + 1,
            rgb_to_hex(usage.rgb),
            usage.stitch_count
        );
    }
}
