//! Pad a spiral points file and save it.

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    cli::create_spinner, deserialise::load_points, output, padding::PaddedPoints, paths::IoPaths,
    reading::PointFormat,
};

pub fn pad(paths: &IoPaths, format: &PointFormat) -> Result<String> {
    let (points, delimiter) = load_points(&paths.input, format)?;
    let padded = PaddedPoints::new(points);

    let bar = create_spinner(format!("Writing {}...", paths.output.display()));
    output::save_points(&padded, delimiter, &paths.output)
        .with_context(|| format!("writing `{}`", paths.output.display()))?;
    bar.finish_with_message("Padded points written");

    info!(total = padded.total(), "Total spiral points");

    Ok(paths.output.to_string_lossy().to_string())
}

// -- Tests -------------------------------------------------------------------
