//! ASCII grid files: a five line header followed by rows of values wrapped ten per line.
//!
//! ```text
//! DSAA
//! 361 181
//! -180 180
//! -90 90
//! 0.1 9.7
//! v1 v2 ... v10
//! ...
//! v361
//!
//! ```
//!
//! Rows run south to north, values within a row west to east. Every row is followed by an
//! empty separator line.

use crate::error::{Result, SpherePadError};

const HEADER_LINES: usize = 5;

/// Values per physical line.
pub const VALUES_PER_LINE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct GridHeader {
    pub xnodes: usize,
    pub ynodes: usize,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    /// Kept as written.
    pub zmin: String,
    pub zmax: String,
}

impl GridHeader {
    pub fn layout(&self) -> RowLayout {
        RowLayout {
            xnodes: self.xnodes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How one grid row is spread over physical lines.
pub struct RowLayout {
    pub xnodes: usize,
}

impl RowLayout {
    /// Lines holding a full ten values.
    pub fn full_lines(&self) -> usize {
        self.xnodes / VALUES_PER_LINE
    }

    /// Values on the trailing partial line, zero if there is none.
    pub fn partial_width(&self) -> usize {
        self.xnodes % VALUES_PER_LINE
    }

    pub fn value_lines(&self) -> usize {
        self.xnodes.div_ceil(VALUES_PER_LINE)
    }

    /// Value lines plus the separator.
    pub fn lines_per_row(&self) -> usize {
        self.value_lines() + 1
    }

    /// Data line offset and token position of `(row, column)`. `row` is 0-based, `column`
    /// 1-based.
    pub fn locate(&self, row: usize, column: usize) -> (usize, usize) {
        let col = column - 1;
        (
            row * self.lines_per_row() + col / VALUES_PER_LINE,
            col % VALUES_PER_LINE,
        )
    }
}

#[derive(Debug, Clone)]
pub struct GridFile {
    pub header: GridHeader,
    /// The five header lines, terminators included.
    pub header_lines: Vec<String>,
    /// Everything after the header, one entry per line, terminators included.
    pub data_lines: Vec<String>,
}

impl GridFile {
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();

        if lines.len() < HEADER_LINES {
            return Err(SpherePadError::malformed(
                lines.len() + 1,
                format!(
                    "grid header needs {} lines, found {}",
                    HEADER_LINES,
                    lines.len()
                ),
            ));
        }
        let data_lines = lines.split_off(HEADER_LINES);
        let header = parse_header(&lines)?;

        let grid = GridFile {
            header,
            header_lines: lines,
            data_lines,
        };
        grid.check_length()?;

        Ok(grid)
    }

    /// 1-based file line number of a data line offset.
    pub fn file_line(offset: usize) -> usize {
        HEADER_LINES + offset + 1
    }

    /// Token `position` of data line `offset`, as written.
    pub fn token(&self, offset: usize, position: usize) -> Result<&str> {
        let line_no = Self::file_line(offset);
        let line = self
            .data_lines
            .get(offset)
            .ok_or_else(|| SpherePadError::malformed(line_no, "line is missing"))?;

        line.split_whitespace().nth(position).ok_or_else(|| {
            SpherePadError::malformed(
                line_no,
                format!("expected at least {} values", position + 1),
            )
        })
    }

    /// Data lines belonging to rows `rows`, verbatim.
    pub fn row_lines(&self, rows: std::ops::Range<usize>) -> &[String] {
        let per_row = self.header.layout().lines_per_row();
        let start = (rows.start * per_row).min(self.data_lines.len());
        let end = (rows.end * per_row).min(self.data_lines.len());
        &self.data_lines[start..end]
    }

    /// Terminator of the title line, reused for generated lines.
    pub fn line_ending(&self) -> &'static str {
        match self.header_lines.first() {
            Some(line) if line.ends_with("\r\n") => "\r\n",
            _ => "\n",
        }
    }

    /// Data lines past the last declared row.
    pub fn trailing_lines(&self) -> usize {
        let declared = self.header.ynodes * self.header.layout().lines_per_row();
        self.data_lines.len().saturating_sub(declared)
    }

    // The last row's separator may be absent.
    fn check_length(&self) -> Result<()> {
        let expected = self
            .header
            .ynodes
            .checked_mul(self.header.layout().lines_per_row())
            .ok_or_else(|| {
                SpherePadError::malformed(
                    2,
                    format!(
                        "{} x {} grid is too large",
                        self.header.xnodes, self.header.ynodes
                    ),
                )
            })?;
        let found = self.data_lines.len();
        if found + 1 < expected {
            return Err(SpherePadError::malformed(
                Self::file_line(found),
                format!(
                    "{} x {} grid needs {} data lines, found {}",
                    self.header.xnodes, self.header.ynodes, expected, found
                ),
            ));
        }

        Ok(())
    }
}

fn parse_header(lines: &[String]) -> Result<GridHeader> {
    let nodes = tokens(&lines[1], 2, "node counts")?;
    let xnodes = parse_count(nodes[0], "xnodes")?;
    let ynodes = parse_count(nodes[1], "ynodes")?;

    let xrange = tokens(&lines[2], 3, "x range")?;
    let yrange = tokens(&lines[3], 4, "y range")?;
    let zrange = tokens(&lines[4], 5, "z range")?;

    Ok(GridHeader {
        xnodes,
        ynodes,
        xmin: parse_float(xrange[0], "xmin", 3)?,
        xmax: parse_float(xrange[1], "xmax", 3)?,
        ymin: parse_float(yrange[0], "ymin", 4)?,
        ymax: parse_float(yrange[1], "ymax", 4)?,
        zmin: zrange[0].to_string(),
        zmax: zrange[1].to_string(),
    })
}

fn tokens<'a>(line: &'a str, line_no: usize, what: &str) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(SpherePadError::malformed(
            line_no,
            format!("{} needs two values, found {}", what, parts.len()),
        ));
    }

    Ok(parts)
}

fn parse_count(s: &str, name: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(n) if n >= 2 => Ok(n),
        _ => Err(SpherePadError::malformed(
            2,
            format!("{} `{}` must be an integer of at least 2", name, s),
        )),
    }
}

fn parse_float(s: &str, name: &str, line_no: usize) -> Result<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            SpherePadError::malformed(line_no, format!("{} `{}` is not a number", name, s))
        })
}

// -- Tests -------------------------------------------------------------------
