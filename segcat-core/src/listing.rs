use crate::error::{Result, SegcatError};
use std::path::Path;
use walkdir::WalkDir;

/// Names of the direct children of `dir`, in whatever order the filesystem
/// returns them. Names that are not valid UTF-8 are converted lossily; they
/// can never equal a generated segment name.
pub fn read_names(dir: &Path) -> Result<Vec<String>> {
    let read_err = |source: std::io::Error| SegcatError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let md = std::fs::metadata(dir).map_err(read_err)?;
    if !md.is_dir() {
        return Err(read_err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "not a directory",
        )));
    }

    let mut names = Vec::new();
    for e in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let e = e.map_err(|e| read_err(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
        names.push(e.file_name().to_string_lossy().into_owned());
    }
    tracing::debug!(dir = %dir.display(), entries = names.len(), "directory listed");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_files_and_dirs_one_level() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.ts"), b"a").unwrap();
        fs::write(tmp.path().join("b.ts"), b"b").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("deep.ts"), b"d").unwrap();

        let mut names = read_names(tmp.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["a.ts", "b.ts", "sub"]);
    }

    #[test]
    fn missing_dir_is_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("gone");
        assert!(matches!(
            read_names(&gone),
            Err(SegcatError::ReadDir { .. })
        ));
    }

    #[test]
    fn file_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let f = tmp.path().join("plain");
        fs::write(&f, b"x").unwrap();
        assert!(matches!(read_names(&f), Err(SegcatError::ReadDir { .. })));
    }
}
