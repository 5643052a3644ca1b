pub mod bucket;
pub mod client;
pub mod credentials;
pub mod models;
pub mod object;

// Re-export types for convenient access from other modules
pub use models::{BucketSummary, ClientSettings, ObjectSummary, S3StorageClient, StaticCredentialFiles};
