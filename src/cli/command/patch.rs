//! Replicate pole values across the polar rows of a grid file.

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    cli::create_spinner, deserialise::load_grid, output, patching::locate_poles, paths::IoPaths,
};

pub fn patch(paths: &IoPaths) -> Result<String> {
    let grid = load_grid(&paths.input)?;
    let poles = locate_poles(&grid)
        .with_context(|| format!("locating poles in `{}`", paths.input.display()))?;

    info!(
        south = %poles.south.value,
        north = %poles.north.value,
        column = poles.column,
        "Pole values found"
    );

    let bar = create_spinner(format!("Writing {}...", paths.output.display()));
    output::save_grid(&grid, &poles, &paths.output)
        .with_context(|| format!("writing `{}`", paths.output.display()))?;
    bar.finish_with_message("Patched grid written");

    Ok(paths.output.to_string_lossy().to_string())
}

// -- Tests -------------------------------------------------------------------
