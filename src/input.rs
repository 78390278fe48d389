//! Resolving the protein argument, which may be a literal sequence or a file

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::MrnaError;

/// Return the protein named by `arg`.
///
/// If `arg` is the path of an existing file, its contents are read and
/// trailing whitespace is stripped. Otherwise `arg` is used verbatim.
pub fn resolve_protein(arg: &str) -> Result<String, MrnaError> {
    let path = Path::new(arg);
    if !path.is_file() {
        debug!("Using protein argument as a literal sequence");
        return Ok(arg.to_string());
    }

    info!("Reading protein from file {path:?}");
    let contents = fs::read_to_string(path).map_err(|source| MrnaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_literal_protein() {
        assert_eq!(resolve_protein("MA").unwrap(), "MA");
        assert_eq!(resolve_protein("").unwrap(), "");
    }

    #[test]
    fn test_literal_is_not_trimmed() {
        assert_eq!(resolve_protein("MA \n").unwrap(), "MA \n");
    }

    #[test]
    fn test_file_protein_is_trimmed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "MA\n").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(resolve_protein(path).unwrap(), "MA");
    }

    #[test]
    fn test_file_trailing_whitespace_only() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "MKV  \r\n\n").unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(resolve_protein(path).unwrap(), "MKV");
    }

    #[test]
    fn test_directory_is_literal() {
        let dir = tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        assert_eq!(resolve_protein(path).unwrap(), path);
    }
}
