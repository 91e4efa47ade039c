//! Writes generated source/header text to disk.

use std::fs;
use std::path::Path;

use crate::error::{WriteError, WriteResult};
use crate::models::{OutputPair, OutputPaths};

/// Write one buffer, replacing any existing file.
pub fn write_file(path: &Path, content: &str) -> WriteResult<()> {
    fs::write(path, content).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the source file, then the header file.
///
/// No rollback: if the header write fails the source file stays on disk.
pub fn write_outputs(pair: &OutputPair, paths: &OutputPaths) -> WriteResult<()> {
    write_file(&paths.source, &pair.source)?;
    write_file(&paths.header, &pair.header)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> OutputPair {
        OutputPair {
            source: "int x;\n".to_string(),
            header: "extern int x;\n".to_string(),
        }
    }

    #[test]
    fn test_write_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths {
            source: dir.path().join("data.c"),
            header: dir.path().join("data.h"),
        };

        write_outputs(&pair(), &paths).unwrap();

        assert_eq!(fs::read_to_string(&paths.source).unwrap(), "int x;\n");
        assert_eq!(fs::read_to_string(&paths.header).unwrap(), "extern int x;\n");
    }

    #[test]
    fn test_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.c");
        fs::write(&path, "old content that is longer\n").unwrap();

        write_file(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths {
            source: dir.path().join("missing_dir").join("data.c"),
            header: dir.path().join("missing_dir").join("data.h"),
        };

        let err = write_outputs(&pair(), &paths).unwrap_err();
        assert!(err.to_string().contains("missing_dir"));
    }
}
