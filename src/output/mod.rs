//! Writes results to disk. Output is staged in a temporary file beside the destination and only
//! moved into place once it is complete.

pub mod grid;
pub mod points;

use std::{
    io::{BufWriter, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::error::Result;

pub use grid::save_grid;
pub use points::save_points;

/// Runs `write` against a temporary file and renames it over `file_path` on success.
pub fn write_atomically<F>(file_path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let dir = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    staged.as_file().sync_all()?;
    staged.persist(file_path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::SpherePadError;

    #[test]
    fn should_replace_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "old").unwrap();

        write_atomically(&path, |w| {
            w.write_all(b"new")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn should_leave_nothing_behind_on_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let result = write_atomically(&path, |w| {
            w.write_all(b"partial")?;
            Err(SpherePadError::malformed(1, "stop"))
        });

        assert!(result.is_err());
        assert!(!path.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
