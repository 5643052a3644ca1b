use std::fs;
use std::path::PathBuf;

use super::types::Args;

/// Checks if a directory is readable
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if path.is_dir() && fs::metadata(&path).is_ok() && fs::read_dir(&path).is_ok() {
        Ok(path)
    } else {
        Err(format!("The dir '{dir}' is not readable."))
    }
}

/// Checks if a file is readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if path.is_file() && fs::metadata(&path).is_ok() {
        Ok(path)
    } else {
        Err(format!("The file '{file}' is not readable."))
    }
}

/// Validate the parsed arguments as a whole
pub fn validate(args: &Args) -> Result<(), String> {
    if args.bucket.trim().is_empty() {
        return Err("--bucket must not be empty.".to_string());
    }

    if args.delete_key.is_empty() {
        return Err("--delete-key must not be empty.".to_string());
    }

    if let Some(endpoint) = &args.endpoint_url {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(format!(
                "--endpoint-url '{endpoint}' must start with http:// or https://"
            ));
        }
    }

    match (&args.access_key_id_filepath, &args.secret_key_filepath) {
        (Some(id), Some(secret)) => {
            for path in [id, secret] {
                let path_str = path
                    .to_str()
                    .ok_or("Invalid path: contains non-UTF-8 characters")?;
                check_readable_file(path_str)?;
            }
        }
        (None, None) => {}
        _ => {
            return Err(
                "--access-key-id-filepath and --secret-key-filepath must be given together."
                    .to_string(),
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_dir_accepts_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let checked = check_readable_dir(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(checked, dir.path());
    }

    #[test]
    fn readable_dir_rejects_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = check_readable_dir(missing.to_str().unwrap()).unwrap_err();
        assert!(err.contains("is not readable"));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Args::default()).is_ok());
    }

    #[test]
    fn endpoint_needs_scheme() {
        let args = Args {
            endpoint_url: Some("localhost:9000".to_string()),
            ..Default::default()
        };
        assert!(validate(&args).unwrap_err().contains("http://"));
    }

    #[test]
    fn lone_credential_path_is_rejected() {
        let args = Args {
            access_key_id_filepath: Some(PathBuf::from("/tmp/id")),
            ..Default::default()
        };
        assert!(validate(&args).unwrap_err().contains("together"));
    }
}
