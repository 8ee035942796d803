//! Loads input files from disk and deserialises them, showing a spinner while doing so.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    cli::create_spinner,
    reading::{parse_points, Delimiter, GridFile, PointFormat, SpiralPoint},
};

/// Loads a spiral points file. Returns the points and the delimiter the file uses.
pub fn load_points(path: &Path, format: &PointFormat) -> Result<(Vec<SpiralPoint>, Delimiter)> {
    let bar = create_spinner(format!("Reading {}...", path.display()));
    let text = fs::read_to_string(path).with_context(|| format!("reading `{}`", path.display()))?;
    let (points, delimiter) = parse_points(&text, format)
        .with_context(|| format!("parsing spiral points `{}`", path.display()))?;
    bar.finish_with_message("Spiral points read");

    info!(count = points.len(), ?delimiter, "Spiral points detected");

    Ok((points, delimiter))
}

/// Loads a grid file.
pub fn load_grid(path: &Path) -> Result<GridFile> {
    let bar = create_spinner(format!("Reading {}...", path.display()));
    let text = fs::read_to_string(path).with_context(|| format!("reading `{}`", path.display()))?;
    let grid = GridFile::parse(&text)
        .with_context(|| format!("parsing grid `{}`", path.display()))?;
    bar.finish_with_message("Grid read");

    let header = &grid.header;
    info!(
        xnodes = header.xnodes,
        ynodes = header.ynodes,
        x = ?(header.xmin, header.xmax),
        y = ?(header.ymin, header.ymax),
        z = ?(&header.zmin, &header.zmax),
        "Grid header"
    );

    Ok(grid)
}
