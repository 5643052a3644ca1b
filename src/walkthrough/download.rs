use super::Walkthrough;
use crate::errors::WalkthroughError;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Local destination for an object key, rejecting keys that would leave `work_dir`
pub fn local_path_for(work_dir: &Path, key: &str) -> Result<PathBuf, WalkthroughError> {
    let relative = Path::new(key);
    let stays_inside = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if key.is_empty() || !stays_inside {
        return Err(WalkthroughError::io(
            relative,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "object key is not a usable local file name",
            ),
        ));
    }
    Ok(work_dir.join(relative))
}

// Fails if the file already exists. The handle is closed on every return path.
fn write_new_file(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(content)?;
    file.flush()
}

impl Walkthrough<'_> {
    /// Re-list the bucket and write every object next to the upload file.
    ///
    /// Unlike the step boundary, the loop is not isolated per object: the
    /// first failed transfer ends the step and later keys are skipped.
    pub(super) fn download_all(&self, downloaded: &mut Vec<String>) -> Result<(), WalkthroughError> {
        let bucket = &self.settings.bucket;
        let objects = self.store.list_objects(bucket)?;
        debug!("Downloading {} objects from '{bucket}'", objects.len());

        for object in &objects {
            debug!(key = %object.key, size = ?object.size, "Fetching object");
            let path = local_path_for(&self.settings.work_dir, &object.key)?;
            let content = self.store.get_object(bucket, &object.key)?;
            write_new_file(&path, &content).map_err(|e| WalkthroughError::io(&path, e))?;

            self.reporter
                .success(&format!("Downloaded: {}", object.key));
            downloaded.push(object.key.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_map_into_work_dir() {
        let path = local_path_for(Path::new("/data"), "3f2a-key").unwrap();
        assert_eq!(path, PathBuf::from("/data/3f2a-key"));
    }

    #[test]
    fn nested_keys_map_to_nested_paths() {
        // the parent directory is not created here; writing there fails if it is missing
        let path = local_path_for(Path::new("/data"), "reports/jan.csv").unwrap();
        assert_eq!(path, PathBuf::from("/data/reports/jan.csv"));
    }

    #[test]
    fn escaping_keys_are_rejected() {
        for key in ["../secret", "/etc/passwd", "a/../../b", ""] {
            let err = local_path_for(Path::new("/data"), key).unwrap_err();
            assert!(
                matches!(err, WalkthroughError::Io { .. }),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn existing_files_are_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken");
        std::fs::write(&path, b"original").unwrap();

        let err = write_new_file(&path, b"new").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(std::fs::read(&path).unwrap(), b"original");
    }
}
