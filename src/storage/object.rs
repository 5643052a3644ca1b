use crate::errors::{Result, StorageError};
use crate::storage::client::service_error;
use crate::storage::models::S3StorageClient;
use aws_sdk_s3::primitives::ByteStream;
use tracing::debug;

impl S3StorageClient {
    /// Upload a byte buffer under `key`
    pub fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.runtime.block_on(async {
            debug!(
                "S3 upload request details: bucket={bucket} key={key} bytes={}",
                body.len()
            );

            let response = self
                .client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(ByteStream::from(body))
                .send()
                .await
                .map_err(|e| service_error("PutObject", e))?;

            debug!("Upload complete, E-Tag: {:?}", response.e_tag());
            Ok::<(), StorageError>(())
        })
    }

    /// Download the full content of an object
    pub fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.runtime.block_on(async {
            debug!("S3 download request details: bucket={bucket} key={key}");

            let response = self
                .client
                .get_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| service_error("GetObject", e))?;

            debug!(
                "S3 download response received, content length: {:?}, E-Tag: {:?}",
                response.content_length(),
                response.e_tag()
            );

            let bytes = response.body.collect().await.map_err(|e| StorageError::Body {
                key: key.to_string(),
                message: e.to_string(),
            })?;

            let content = bytes.into_bytes().to_vec();
            debug!("Downloaded {} bytes from '{key}'", content.len());
            Ok::<_, StorageError>(content)
        })
    }

    /// Delete a single object
    pub fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.runtime.block_on(async {
            self.client
                .delete_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| service_error("DeleteObject", e))?;

            debug!("Deleted '{key}' from '{bucket}'");
            Ok::<(), StorageError>(())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::StorageError;
    use crate::storage::client::test_support::{canned_client, ok_client};

    #[test]
    fn delete_object_sends_delete_for_the_key() {
        let (client, http) = ok_client("us-east-1");
        client
            .delete_object("nome-do-bucket", "identificador-do-arquivo")
            .unwrap();

        let request = http.only_request();
        assert_eq!(request.method, "DELETE");
        assert!(
            request
                .uri
                .starts_with("http://localhost:9000/nome-do-bucket/identificador-do-arquivo"),
            "unexpected uri {}",
            request.uri
        );
    }

    #[test]
    fn put_object_targets_bucket_and_key() {
        let (client, http) = ok_client("us-east-1");
        client
            .put_object("nome-do-bucket", "some-key", b"hello".to_vec())
            .unwrap();

        let request = http.only_request();
        assert_eq!(request.method, "PUT");
        assert!(request.uri.contains("/nome-do-bucket/some-key"));
    }

    #[test]
    fn get_object_returns_the_whole_body() {
        let (client, http) = canned_client("us-east-1", 200, "ola mundo\nsegunda linha\n");

        let content = client.get_object("nome-do-bucket", "some-key").unwrap();
        assert_eq!(content, b"ola mundo\nsegunda linha\n");

        let request = http.only_request();
        assert_eq!(request.method, "GET");
        assert!(request.uri.contains("/nome-do-bucket/some-key"));
    }

    #[test]
    fn get_object_for_a_missing_key_reports_no_such_key() {
        let (client, _http) = canned_client(
            "us-east-1",
            404,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message><Key>gone</Key></Error>"#,
        );

        let err = client.get_object("nome-do-bucket", "gone").unwrap_err();
        assert!(matches!(
            err,
            StorageError::Service { operation: "GetObject", code: Some(ref c), .. } if c == "NoSuchKey"
        ));
    }
}
