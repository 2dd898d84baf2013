use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::shared::constants::{MULTI_FACE_MARKER, SAMPLE_EXTENSIONS};

/// Accepts only paths with a JPEG extension (case-sensitive suffix).
pub fn validate_extension(path: &Path) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str());
    match ext {
        Some(e) if SAMPLE_EXTENSIONS.contains(&e) => Ok(()),
        _ => Err(Error::WrongExtension {
            path: path.to_path_buf(),
        }),
    }
}

/// True when the path carries the multi-face marker substring.
///
/// Marked files hold several faces on purpose and are out of scope for
/// single-face walks, so callers skip them silently.
pub fn is_multi_face_sample(path: &Path) -> bool {
    path.to_string_lossy().contains(MULTI_FACE_MARKER)
}

/// Recursively yields sample files under `root` in deterministic
/// (file-name sorted) order.
///
/// Directories and marker files are skipped silently. Extensions are NOT
/// checked here: callers validate each yielded path right before
/// processing it, so work done on earlier files survives a later file's
/// rejection.
pub fn walk_samples(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    let root = root.to_path_buf();
    WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.clone());
                Some(Err(Error::Io {
                    path,
                    source: e.into(),
                }))
            }
            Ok(entry) => {
                if entry.file_type().is_dir() {
                    return None;
                }
                let path = entry.path();
                if is_multi_face_sample(path) {
                    return None;
                }
                Some(Ok(path.to_path_buf()))
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;

    #[rstest]
    #[case::jpg("alice.jpg", true)]
    #[case::jpeg("alice.jpeg", true)]
    #[case::png("eve.png", false)]
    #[case::uppercase("alice.JPG", false)]
    #[case::no_extension("alice", false)]
    fn test_validate_extension(#[case] name: &str, #[case] accepted: bool) {
        let result = validate_extension(Path::new(name));
        assert_eq!(result.is_ok(), accepted);
    }

    #[test]
    fn test_wrong_extension_carries_path() {
        let err = validate_extension(Path::new("samples/eve.png")).unwrap_err();
        match err {
            Error::WrongExtension { path } => assert_eq!(path, Path::new("samples/eve.png")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_marker_detected_anywhere_in_path() {
        assert!(is_multi_face_sample(Path::new("group_multiple.jpg")));
        assert!(is_multi_face_sample(Path::new("multiple_faces/a.jpg")));
        assert!(!is_multi_face_sample(Path::new("samples/alice.jpg")));
    }

    #[test]
    fn test_walk_samples_sorted_and_marker_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bob.jpg"), b"x").unwrap();
        fs::write(dir.path().join("alice.jpg"), b"x").unwrap();
        fs::write(dir.path().join("group_multiple.jpg"), b"x").unwrap();

        let files: Vec<_> = walk_samples(dir.path())
            .collect::<Result<Vec<_>>>()
            .unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["alice.jpg", "bob.jpg"]);
    }

    #[test]
    fn test_walk_samples_recurses_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("carol.jpg"), b"x").unwrap();
        fs::write(dir.path().join("alice.jpg"), b"x").unwrap();

        let files: Vec<_> = walk_samples(dir.path())
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_walk_samples_yields_disallowed_extensions_unvalidated() {
        // Validation is the caller's per-file responsibility
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("eve.png"), b"x").unwrap();

        let files: Vec<_> = walk_samples(dir.path())
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(validate_extension(&files[0]).is_err());
    }

    #[test]
    fn test_walk_samples_missing_root_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let first = walk_samples(&missing).next().unwrap();
        assert!(matches!(first, Err(Error::Io { .. })));
    }
}
