use std::path::PathBuf;

/// A bucket as returned by `ListBuckets`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub name: String,
}

/// An object as returned by a single `ListObjectsV2` page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: String,
    pub size: Option<i64>,
}

impl BucketSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ObjectSummary {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: None,
        }
    }
}

/// Static credentials read from files
pub struct StaticCredentialFiles {
    pub access_key_id_filepath: PathBuf,
    pub secret_key_filepath: PathBuf,
}

/// Settings for building an S3-compatible client.
///
/// Anything left as `None` falls through to the AWS default chain
/// (environment, profile, IMDS).
#[derive(Default)]
pub struct ClientSettings {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
    pub credential_files: Option<StaticCredentialFiles>,
}

/// Blocking wrapper around the async `aws_sdk_s3::Client`
pub struct S3StorageClient {
    pub(crate) client: aws_sdk_s3::Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) region: Option<String>,
}
