use super::Walkthrough;
use crate::errors::WalkthroughError;
use std::fs;
use tracing::debug;
use uuid::Uuid;

/// Fresh random key for an upload
#[must_use]
pub fn generate_object_key() -> String {
    Uuid::new_v4().to_string()
}

impl Walkthrough<'_> {
    pub(super) fn create_bucket(&self) -> Result<(), WalkthroughError> {
        let bucket = &self.settings.bucket;
        self.store.create_bucket(bucket)?;
        self.reporter.success(&format!("Bucket created: {bucket}"));
        Ok(())
    }

    pub(super) fn list_buckets(&self) -> Result<(), WalkthroughError> {
        let buckets = self.store.list_buckets()?;
        self.reporter.success("Buckets:");
        for bucket in &buckets {
            self.reporter.success(&format!("- {}", bucket.name));
        }
        Ok(())
    }

    pub(super) fn list_objects(&self) -> Result<(), WalkthroughError> {
        let bucket = &self.settings.bucket;
        let objects = self.store.list_objects(bucket)?;
        self.reporter.success(&format!("Objects in bucket {bucket}:"));
        for object in &objects {
            self.reporter.success(&format!("- {}", object.key));
        }
        Ok(())
    }

    pub(super) fn upload_file(&self) -> Result<String, WalkthroughError> {
        let key = generate_object_key();
        let local_path = self.settings.work_dir.join(&self.settings.upload_file);

        let content = fs::read(&local_path).map_err(|e| WalkthroughError::io(&local_path, e))?;
        debug!(
            "Uploading {} bytes from {} as '{key}'",
            content.len(),
            local_path.display()
        );

        self.store.put_object(&self.settings.bucket, &key, content)?;

        let file_name = self
            .settings
            .upload_file
            .file_name()
            .unwrap_or(self.settings.upload_file.as_os_str())
            .to_string_lossy();
        self.reporter
            .success(&format!("File '{file_name}' uploaded as: {key}"));
        Ok(key)
    }

    pub(super) fn delete_object(&self) -> Result<(), WalkthroughError> {
        let key = &self.settings.delete_key;
        self.store.delete_object(&self.settings.bucket, key)?;
        self.reporter.success(&format!("Object deleted: {key}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_uuids_and_unique() {
        let a = generate_object_key();
        let b = generate_object_key();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
        assert_eq!(a.len(), 36);
    }
}
