//! Replaces the polar rows of a grid with the value found at longitude 0.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::{
    error::{Result, SpherePadError},
    reading::{GridFile, GridHeader, RowLayout, VALUES_PER_LINE},
};

/// Slack allowed when deciding that longitude 0 falls on a column.
const COLUMN_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
/// A pole value and where it was read from.
pub struct PoleValue {
    /// Token text as written in the grid.
    pub value: String,
    /// 1-based file line.
    pub line: usize,
    /// 1-based position on that line.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Poles {
    /// 1-based column of longitude 0.
    pub column: usize,
    pub south: PoleValue,
    pub north: PoleValue,
}

/// 1-based column of longitude 0, failing unless both poles are grid nodes.
pub fn prime_meridian_column(header: &GridHeader) -> Result<usize> {
    if header.ymin != -90.0 || header.ymax != 90.0 {
        return Err(SpherePadError::PoleNotOnGrid(format!(
            "latitude spans [{}, {}], not [-90, 90]",
            header.ymin, header.ymax
        )));
    }
    if header.xmin >= 0.0 || header.xmax <= 0.0 {
        return Err(SpherePadError::PoleNotOnGrid(format!(
            "longitude range [{}, {}] does not contain 0",
            header.xmin, header.xmax
        )));
    }

    let delta_x = (header.xmax - header.xmin) / (header.xnodes - 1) as f64;
    let m = -header.xmin / delta_x + 1.0;
    let column = m.round();
    if (m - column).abs() > COLUMN_TOLERANCE || column < 1.0 || column > header.xnodes as f64 {
        return Err(SpherePadError::PoleNotOnGrid(format!(
            "longitude 0 falls between columns (index {:.6}, spacing {})",
            m, delta_x
        )));
    }

    Ok(column as usize)
}

/// Finds the south (first row) and north (last row) values at longitude 0.
pub fn locate_poles(grid: &GridFile) -> Result<Poles> {
    let header = &grid.header;
    let column = prime_meridian_column(header)?;
    let layout = header.layout();

    debug!(
        full_lines = layout.full_lines(),
        partial_width = layout.partial_width(),
        lines_per_row = layout.lines_per_row(),
        column,
        "Grid row layout"
    );

    let south = read_pole(grid, layout, 0, column)?;
    let north = read_pole(grid, layout, header.ynodes - 1, column)?;

    Ok(Poles {
        column,
        south,
        north,
    })
}

fn read_pole(grid: &GridFile, layout: RowLayout, row: usize, column: usize) -> Result<PoleValue> {
    let (offset, position) = layout.locate(row, column);
    let value = grid.token(offset, position)?;
    let line = GridFile::file_line(offset);

    if value.parse::<f64>().is_err() {
        return Err(SpherePadError::malformed(
            line,
            format!("pole value `{}` is not a number", value),
        ));
    }

    Ok(PoleValue {
        value: value.to_string(),
        line,
        position: position + 1,
    })
}

/// One row holding `value` in every column, separator included. Lines end with `eol`.
pub fn constant_row(value: &str, layout: RowLayout, eol: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(layout.lines_per_row());

    let mut full = vec![value; VALUES_PER_LINE].join(" ");
    full.push(' ');
    full.push_str(eol);
    lines.extend(std::iter::repeat(full).take(layout.full_lines()));

    if layout.partial_width() != 0 {
        let mut partial = vec![value; layout.partial_width()].join(" ");
        partial.push_str(eol);
        lines.push(partial);
    }
    lines.push(eol.to_string());

    lines
}

/// The patched file, line by line: header, constant south row, untouched middle rows and
/// constant north row. Lines after the last row are dropped.
pub fn patch_lines<'a>(grid: &'a GridFile, poles: &Poles) -> Vec<Cow<'a, str>> {
    let layout = grid.header.layout();
    let ynodes = grid.header.ynodes;
    let eol = grid.line_ending();

    let trailing = grid.trailing_lines();
    if trailing > 0 {
        warn!(lines = trailing, "Discarding lines after the last grid row");
    }

    let header = grid.header_lines.iter().map(|l| Cow::Borrowed(l.as_str()));
    let middle = grid
        .row_lines(1..ynodes - 1)
        .iter()
        .map(|l| Cow::Borrowed(l.as_str()));
    let south = constant_row(&poles.south.value, layout, eol)
        .into_iter()
        .map(Cow::Owned);
    let north = constant_row(&poles.north.value, layout, eol)
        .into_iter()
        .map(Cow::Owned);

    header.chain(south).chain(middle).chain(north).collect()
}

// -- Tests -------------------------------------------------------------------
