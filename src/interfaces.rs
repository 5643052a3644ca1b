use crate::errors::StorageError;
use crate::storage::models::{BucketSummary, ObjectSummary};
use mockall::automock;

/// Blocking object-storage operations driven by the walkthrough.
///
/// Each call is a single request/response pair; retries, signing and
/// transport belong to the implementation.
#[automock]
pub trait ObjectStore {
    fn create_bucket(&self, bucket: &str) -> Result<(), StorageError>;
    fn list_buckets(&self) -> Result<Vec<BucketSummary>, StorageError>;
    /// Single page only, no continuation token.
    fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>, StorageError>;
    fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), StorageError>;
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;
    fn delete_object(&self, bucket: &str, key: &str) -> Result<(), StorageError>;
}

/// Sink for the human-readable lines each step produces.
pub trait StepReporter {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
    /// Diagnostic line shown only in verbose mode
    fn progress(&self, _message: &str) {}
}
