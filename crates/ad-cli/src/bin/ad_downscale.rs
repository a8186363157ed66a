use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::RgbImage;

use ad_area::downsample;
use ad_core::{Image, PackedRgb};

// Usage errors exit with 2 through clap. The remaining stages get their
// own codes so scripts can tell them apart.
const EXIT_UNREADABLE_INPUT: u8 = 3;
const EXIT_INVALID_TARGET: u8 = 4;
const EXIT_UNWRITABLE_OUTPUT: u8 = 5;

#[derive(Parser, Debug)]
#[command(name = "ad_downscale")]
#[command(about = "Downscale an image by exact area-weighted averaging")]
struct Cli {
    /// Image to downscale; any format the `image` crate can decode.
    input: PathBuf,
    /// Where to save the result; format is inferred from the extension.
    output: PathBuf,
    /// Target width, at most the input width.
    target_width: usize,
    /// Target height, at most the input height.
    target_height: usize,
}

struct Failure {
    exit: u8,
    error: anyhow::Error,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let started = Instant::now();

    match run(&cli) {
        Ok((source_width, source_height)) => {
            println!(
                "[ad-downscale] {source_width}x{source_height} -> {}x{} ({} ms)",
                cli.target_width,
                cli.target_height,
                started.elapsed().as_millis()
            );
            ExitCode::SUCCESS
        }
        Err(failure) => {
            eprintln!("[ad-downscale] error: {:#}", failure.error);
            ExitCode::from(failure.exit)
        }
    }
}

fn run(cli: &Cli) -> Result<(usize, usize), Failure> {
    let src = load_input(&cli.input).map_err(|error| Failure {
        exit: EXIT_UNREADABLE_INPUT,
        error,
    })?;
    let (source_width, source_height) = (src.width(), src.height());

    let resized =
        downsample(&src.as_view(), cli.target_width, cli.target_height).map_err(|err| Failure {
            exit: EXIT_INVALID_TARGET,
            error: anyhow::Error::new(err).context(format!(
                "downscaling {source_width}x{source_height} to {}x{}",
                cli.target_width, cli.target_height
            )),
        })?;

    save_output(&cli.output, &resized).map_err(|error| Failure {
        exit: EXIT_UNWRITABLE_OUTPUT,
        error,
    })?;

    Ok((source_width, source_height))
}

fn load_input(path: &Path) -> Result<Image<PackedRgb>> {
    let decoded =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let rgb = decoded.to_rgb8();
    let (w, h) = rgb.dimensions();

    let pixels = rgb
        .pixels()
        .map(|px| PackedRgb::from_channels(px.0))
        .collect();

    Image::from_vec(w as usize, h as usize, pixels)
        .with_context(|| format!("constructing pixel grid from {}", path.display()))
}

fn save_output(path: &Path, img: &Image<PackedRgb>) -> Result<()> {
    let mut raw = Vec::with_capacity(img.width() * img.height() * 3);
    for px in img.data() {
        raw.extend_from_slice(&px.channels());
    }

    let encoded = RgbImage::from_raw(img.width() as u32, img.height() as u32, raw)
        .context("constructing RgbImage from raw channels")?;
    encoded
        .save(path)
        .with_context(|| format!("saving output image {}", path.display()))
}
