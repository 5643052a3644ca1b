use clap::Parser;
use std::path::PathBuf;

use super::validators::{check_readable_dir, validate};
use crate::storage::{ClientSettings, StaticCredentialFiles};
use crate::walkthrough::{
    DEFAULT_BUCKET, DEFAULT_DELETE_KEY, DEFAULT_UPLOAD_FILE, WalkthroughSettings,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Bucket used by every step
    #[arg(long, value_name = "NAME", default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// File uploaded by the upload step, relative to the work dir
    #[arg(long, value_name = "FILE", default_value = DEFAULT_UPLOAD_FILE)]
    pub upload_file: PathBuf,

    /// Object key removed by the delete step
    #[arg(long, value_name = "KEY", default_value = DEFAULT_DELETE_KEY)]
    pub delete_key: String,

    /// Directory the upload is read from and downloads are written to
    #[arg(
        short = 'w',
        long,
        value_name = "DIR",
        default_value = ".",
        value_parser = check_readable_dir
    )]
    pub work_dir: PathBuf,

    /// Region override; otherwise the AWS default chain decides
    #[arg(long)]
    pub region: Option<String>,

    /// Custom endpoint for S3-compatible services, e.g. http://localhost:9000
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Use path-style addressing (bucket in the path, not the host)
    #[arg(long)]
    pub force_path_style: bool,

    /// Pass as filepath
    #[arg(long, value_name = "PATH")]
    pub access_key_id_filepath: Option<PathBuf>,

    /// Pass as filepath
    #[arg(long, value_name = "PATH")]
    pub secret_key_filepath: Option<PathBuf>,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            upload_file: PathBuf::from(DEFAULT_UPLOAD_FILE),
            delete_key: DEFAULT_DELETE_KEY.to_string(),
            work_dir: PathBuf::from("."),
            region: None,
            endpoint_url: None,
            force_path_style: false,
            access_key_id_filepath: None,
            secret_key_filepath: None,
            verbose: 0,
        }
    }
}

impl Args {
    /// Validate combinations clap cannot express on its own
    ///
    /// # Errors
    ///
    /// Returns an error message describing the first invalid argument.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }

    /// Settings for the client provider
    #[must_use]
    pub fn client_settings(&self) -> ClientSettings {
        let credential_files = match (&self.access_key_id_filepath, &self.secret_key_filepath) {
            (Some(id), Some(secret)) => Some(StaticCredentialFiles {
                access_key_id_filepath: id.clone(),
                secret_key_filepath: secret.clone(),
            }),
            _ => None,
        };

        ClientSettings {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            force_path_style: self.force_path_style,
            credential_files,
        }
    }

    /// Settings for the walkthrough driver
    #[must_use]
    pub fn walkthrough_settings(&self) -> WalkthroughSettings {
        WalkthroughSettings {
            bucket: self.bucket.clone(),
            work_dir: self.work_dir.clone(),
            upload_file: self.upload_file.clone(),
            delete_key: self.delete_key.clone(),
        }
    }
}
