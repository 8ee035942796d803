//! Pole-patched grid file.

use std::path::Path;

use tracing::info;

use crate::{
    error::Result,
    patching::{patch_lines, Poles},
    reading::GridFile,
};

use super::write_atomically;

pub fn save_grid(grid: &GridFile, poles: &Poles, file_path: &Path) -> Result<()> {
    let lines = patch_lines(grid, poles);

    write_atomically(file_path, |w| {
        for line in &lines {
            w.write_all(line.as_bytes())?;
        }
        Ok(())
    })?;

    info!(lines = lines.len(), path = %file_path.display(), "Patched grid written");

    Ok(())
}
