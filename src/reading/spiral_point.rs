//! Spiral point records: `latitude longitude payload...`, one per line.

use crate::error::{Result, SpherePadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
/// Field separator of a spiral points file.
pub enum Delimiter {
    /// Comma if the first data line contains one, whitespace otherwise.
    #[default]
    Auto,
    Comma,
    Whitespace,
}

impl Delimiter {
    /// Resolves `Auto` against a sample data line.
    pub fn detect(self, sample: &str) -> Self {
        match self {
            Delimiter::Auto if sample.contains(',') => Delimiter::Comma,
            Delimiter::Auto => Delimiter::Whitespace,
            other => other,
        }
    }

    /// Separator written between output fields.
    pub fn separator(self) -> &'static str {
        match self {
            Delimiter::Comma => ", ",
            _ => " ",
        }
    }

    fn split(self, line: &str) -> Vec<&str> {
        match self {
            Delimiter::Comma => line.split(',').map(str::trim).collect(),
            _ => line.split_whitespace().collect(),
        }
    }
}

#[derive(Debug, Clone)]
/// How a spiral points file is laid out.
pub struct PointFormat {
    pub delimiter: Delimiter,
    pub has_header: bool,
    pub payload_fields: usize,
}

impl Default for PointFormat {
    fn default() -> Self {
        PointFormat {
            delimiter: Delimiter::Auto,
            has_header: true,
            payload_fields: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpiralPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Carried through untouched.
    pub payload: Vec<String>,
}

impl SpiralPoint {
    /// Parses one data line. `line_no` is 1-based and only used for error reports.
    pub fn from_line(
        line: &str,
        line_no: usize,
        delimiter: Delimiter,
        payload_fields: usize,
    ) -> Result<Self> {
        let fields = delimiter.split(line);
        let expected = payload_fields + 2;
        if fields.len() != expected {
            return Err(SpherePadError::malformed(
                line_no,
                format!("expected {} fields, found {}", expected, fields.len()),
            ));
        }

        let latitude = parse_coordinate(fields[0], "latitude", line_no)?;
        let longitude = parse_coordinate(fields[1], "longitude", line_no)?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SpherePadError::malformed(
                line_no,
                format!("latitude {} is outside [-90, 90]", latitude),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SpherePadError::malformed(
                line_no,
                format!("longitude {} is outside [-180, 180]", longitude),
            ));
        }

        let payload = fields[2..].iter().map(|f| f.to_string()).collect();

        Ok(SpiralPoint {
            latitude,
            longitude,
            payload,
        })
    }

    /// Same payload at a new position. Used for padded copies, which may lie outside the
    /// sphere's range.
    pub fn moved_to(&self, latitude: f64, longitude: f64) -> Self {
        SpiralPoint {
            latitude,
            longitude,
            payload: self.payload.clone(),
        }
    }

    /// `%.15f` coordinates followed by the payload as read.
    pub fn to_line(&self, delimiter: Delimiter) -> String {
        let sep = delimiter.separator();
        let mut line = format!("{:.15}{}{:.15}", self.latitude, sep, self.longitude);
        for field in &self.payload {
            line.push_str(sep);
            line.push_str(field);
        }
        line
    }
}

fn parse_coordinate(field: &str, name: &str, line_no: usize) -> Result<f64> {
    field
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            SpherePadError::malformed(line_no, format!("{} `{}` is not a number", name, field))
        })
}

/// Parses a whole spiral points file. Returns the points and the resolved delimiter.
pub fn parse_points(text: &str, format: &PointFormat) -> Result<(Vec<SpiralPoint>, Delimiter)> {
    let skip = usize::from(format.has_header);
    let mut data = text
        .lines()
        .enumerate()
        .skip(skip)
        .filter(|(_, line)| !line.trim().is_empty())
        .peekable();

    let delimiter = match data.peek() {
        Some((_, first)) => format.delimiter.detect(first),
        None => {
            return Err(SpherePadError::malformed(
                skip + 1,
                "no spiral points found",
            ))
        }
    };

    let points = data
        .map(|(idx, line)| {
            SpiralPoint::from_line(line, idx + 1, delimiter, format.payload_fields)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((points, delimiter))
}

// -- Tests -------------------------------------------------------------------
