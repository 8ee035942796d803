//! Padded spiral points file.

use std::path::Path;

use tracing::info;

use crate::{error::Result, padding::PaddedPoints, reading::Delimiter};

use super::write_atomically;

/// Writes the original points followed by every padding block, one record per line.
pub fn save_points(padded: &PaddedPoints, delimiter: Delimiter, file_path: &Path) -> Result<()> {
    write_atomically(file_path, |w| {
        for point in padded.iter() {
            writeln!(w, "{}", point.to_line(delimiter))?;
        }
        Ok(())
    })?;

    info!(
        count = padded.original.len(),
        "Original spiral points written"
    );
    for (mode, block) in &padded.blocks {
        info!(count = block.len(), %mode, "Padding points written");
    }

    Ok(())
}
