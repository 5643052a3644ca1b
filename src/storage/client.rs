use crate::errors::{Result, StorageError};
use crate::interfaces::ObjectStore;
use crate::storage::models::{BucketSummary, ClientSettings, ObjectSummary, S3StorageClient};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use tracing::debug;

impl S3StorageClient {
    /// Create a new S3-compatible client from the provided settings
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let runtime = build_runtime()?;

        let credentials = settings
            .credential_files
            .as_ref()
            .map(|files| files.load())
            .transpose()?;

        debug!(
            region = settings.region.as_deref().unwrap_or("<default chain>"),
            endpoint = settings.endpoint_url.as_deref().unwrap_or("<default>"),
            force_path_style = settings.force_path_style,
            static_credentials = credentials.is_some(),
            "Creating S3-compatible client"
        );
        if let Some(creds) = &credentials {
            let prefix: String = creds.access_key_id().chars().take(4).collect();
            debug!("Key ID: {prefix}****");
        }

        let sdk_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = &settings.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(creds) = credentials {
                loader = loader.credentials_provider(creds);
            }
            loader.load().await
        });

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(settings.force_path_style);
        if let Some(endpoint) = &settings.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self::with_runtime(builder.build(), runtime))
    }

    /// Wrap an already-built SDK config, creating the blocking runtime
    pub fn from_conf(config: aws_sdk_s3::Config) -> Result<Self> {
        Ok(Self::with_runtime(config, build_runtime()?))
    }

    fn with_runtime(config: aws_sdk_s3::Config, runtime: tokio::runtime::Runtime) -> Self {
        let region = config.region().map(|r| r.as_ref().to_string());
        debug!(region = ?region, "S3 client ready");
        Self {
            client: Client::from_conf(config),
            runtime,
            region,
        }
    }

    /// Region the client signs for, if one was resolved
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

// One request in flight at a time; every call blocks on this runtime.
fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| StorageError::Runtime(format!("Failed to create runtime: {e}")))
}

/// Convert an SDK failure into a [`StorageError::Service`], keeping the error code
pub(crate) fn service_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    debug!("{operation} error details: {}", DisplayErrorContext(&err));
    StorageError::Service {
        operation,
        code: err.code().map(str::to_string),
        message: err
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| DisplayErrorContext(&err).to_string()),
    }
}

impl ObjectStore for S3StorageClient {
    fn create_bucket(&self, bucket: &str) -> Result<()> {
        S3StorageClient::create_bucket(self, bucket)
    }

    fn list_buckets(&self) -> Result<Vec<BucketSummary>> {
        S3StorageClient::list_buckets(self)
    }

    fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>> {
        S3StorageClient::list_objects(self, bucket)
    }

    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        S3StorageClient::put_object(self, bucket, key, body)
    }

    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        S3StorageClient::get_object(self, bucket, key)
    }

    fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        S3StorageClient::delete_object(self, bucket, key)
    }
}
