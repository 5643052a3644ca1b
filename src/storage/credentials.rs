use crate::errors::{Result, StorageError};
use crate::storage::models::StaticCredentialFiles;
use aws_credential_types::Credentials;
use std::fs;
use std::path::Path;

/// Read a single value from a file, trimming whitespace and newlines
pub fn read_value_from_file(file_path: &Path) -> Result<String> {
    let value = fs::read_to_string(file_path).map_err(|e| {
        StorageError::Config(format!("Failed to read '{}': {}", file_path.display(), e))
    })?;

    let value = value.trim();
    if value.is_empty() {
        return Err(StorageError::Config(format!(
            "'{}' is empty",
            file_path.display()
        )));
    }
    Ok(value.to_string())
}

impl StaticCredentialFiles {
    /// Load the key pair into SDK credentials
    pub fn load(&self) -> Result<Credentials> {
        let access_key_id = read_value_from_file(&self.access_key_id_filepath)?;
        let secret_key = read_value_from_file(&self.secret_key_filepath)?;

        Ok(Credentials::new(
            access_key_id,
            secret_key,
            None, // No session token
            None, // No expiry
            "WalkthroughStaticCredentials",
        ))
    }
}
