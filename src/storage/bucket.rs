use crate::errors::{Result, StorageError};
use crate::storage::client::service_error;
use crate::storage::models::{BucketSummary, ObjectSummary, S3StorageClient};
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use tracing::debug;

// us-east-1 rejects an explicit location constraint
const DEFAULT_REGION: &str = "us-east-1";

impl S3StorageClient {
    /// Create a bucket with no configuration beyond its location
    pub fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.runtime.block_on(async {
            let mut request = self.client.create_bucket().bucket(bucket);

            if let Some(region) = self.region.as_deref().filter(|r| *r != DEFAULT_REGION) {
                debug!("Adding location constraint '{region}' for bucket '{bucket}'");
                request = request.create_bucket_configuration(
                    CreateBucketConfiguration::builder()
                        .location_constraint(BucketLocationConstraint::from(region))
                        .build(),
                );
            }

            request
                .send()
                .await
                .map_err(|e| service_error("CreateBucket", e))?;

            debug!("Successfully created bucket '{bucket}'");
            Ok::<(), StorageError>(())
        })
    }

    /// List all buckets owned by the account, in service order
    pub fn list_buckets(&self) -> Result<Vec<BucketSummary>> {
        self.runtime.block_on(async {
            let response = self
                .client
                .list_buckets()
                .send()
                .await
                .map_err(|e| service_error("ListBuckets", e))?;

            let buckets: Vec<BucketSummary> = response
                .buckets()
                .iter()
                .filter_map(|b| b.name().map(BucketSummary::new))
                .collect();

            debug!("Found {} buckets", buckets.len());
            Ok::<_, StorageError>(buckets)
        })
    }

    /// List the first page of objects in a bucket
    pub fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>> {
        self.runtime.block_on(async {
            debug!("Listing objects in bucket '{bucket}'");

            let response = self
                .client
                .list_objects_v2()
                .bucket(bucket)
                .send()
                .await
                .map_err(|e| service_error("ListObjects", e))?;

            if response.is_truncated().unwrap_or(false) {
                debug!("Listing of '{bucket}' is truncated; only the first page is used");
            }

            let objects: Vec<ObjectSummary> = response
                .contents()
                .iter()
                .filter_map(|o| {
                    o.key().map(|key| ObjectSummary {
                        key: key.to_string(),
                        size: o.size(),
                    })
                })
                .collect();

            debug!("Found {} objects in '{bucket}'", objects.len());
            Ok::<_, StorageError>(objects)
        })
    }
}
