/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use aws_smithy_types::byte_stream::ByteStream;
use bytes::Bytes;
use tracing::Instrument;

use crate::error::{self, Error, ErrorKind};
use crate::types::ObjectMetadata;
use crate::Config;

/// Handle to a single Amazon S3 bucket.
///
/// Every operation is forwarded to the underlying [`aws_sdk_s3::Client`] as a single request.
/// Errors returned by the SDK are propagated unchanged inside [`Error`].
///
/// Cloning a `Bucket` is cheap; clones share the same client.
#[derive(Debug, Clone)]
pub struct Bucket {
    name: String,
    client: aws_sdk_s3::Client,
}

impl Bucket {
    /// Creates a handle to the bucket `name`, sending requests through a client built from
    /// `config`.
    pub fn new(config: &Config, name: impl Into<String>) -> Result<Bucket, Error> {
        Bucket::from_client(config.s3_client(), name)
    }

    /// Creates a handle to the bucket `name` using an existing S3 client.
    pub fn from_client(
        client: aws_sdk_s3::Client,
        name: impl Into<String>,
    ) -> Result<Bucket, Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(error::invalid_input("bucket name must not be empty"));
        }
        Ok(Bucket { name, client })
    }

    /// Returns the bucket name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The Amazon S3 client instance requests are sent with.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }

    /// Store `value` under `key`.
    ///
    /// The value is uploaded as-is in a single `PutObject` request. The SDK response is
    /// returned unchanged.
    pub async fn put(
        &self,
        key: impl Into<String>,
        value: impl Into<Bytes>,
    ) -> Result<PutObjectOutput, Error> {
        let key = validate_key(key)?;
        let body: Bytes = value.into();
        let span = tracing::debug_span!("put", bucket = %self.name, key = %key);

        async move {
            tracing::debug!(content_length = body.len(), "put object");
            let output = self
                .client
                .put_object()
                .bucket(&self.name)
                .key(key)
                .body(ByteStream::from(body))
                .send()
                .await?;
            tracing::trace!(e_tag = ?output.e_tag(), "put object complete");
            Ok::<_, Error>(output)
        }
        .instrument(span)
        .await
    }

    /// Fetch the object stored under `key`, returning its payload and metadata.
    pub async fn get(&self, key: impl Into<String>) -> Result<(Bytes, ObjectMetadata), Error> {
        let key = validate_key(key)?;
        let span = tracing::debug_span!("get", bucket = %self.name, key = %key);

        async move {
            tracing::debug!("get object");
            let output = self
                .client
                .get_object()
                .bucket(&self.name)
                .key(key)
                .send()
                .await?;

            let metadata = ObjectMetadata::from(&output);
            let data = output.body.collect().await?.into_bytes();
            tracing::trace!(content_length = data.len(), "get object complete");
            Ok::<_, Error>((data, metadata))
        }
        .instrument(span)
        .await
    }

    /// Fetch only the metadata of the object stored under `key`.
    pub async fn head(&self, key: impl Into<String>) -> Result<ObjectMetadata, Error> {
        let key = validate_key(key)?;
        let span = tracing::debug_span!("head", bucket = %self.name, key = %key);

        async move {
            tracing::debug!("head object");
            let output = self
                .client
                .head_object()
                .bucket(&self.name)
                .key(key)
                .send()
                .await?;
            Ok::<_, Error>(ObjectMetadata::from(&output))
        }
        .instrument(span)
        .await
    }

    /// Returns whether an object is stored under `key`.
    ///
    /// Only a not-found response maps to `false`; any other error is returned.
    pub async fn exists(&self, key: impl Into<String>) -> Result<bool, Error> {
        match self.head(key).await {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == &ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Delete the object stored under `key`.
    ///
    /// S3 reports success for keys that do not exist.
    pub async fn delete(&self, key: impl Into<String>) -> Result<DeleteObjectOutput, Error> {
        let key = validate_key(key)?;
        let span = tracing::debug_span!("delete", bucket = %self.name, key = %key);

        async move {
            tracing::debug!("delete object");
            let output = self
                .client
                .delete_object()
                .bucket(&self.name)
                .key(key)
                .send()
                .await?;
            Ok::<_, Error>(output)
        }
        .instrument(span)
        .await
    }
}

fn validate_key(key: impl Into<String>) -> Result<String, Error> {
    let key = key.into();
    if key.is_empty() {
        return Err(error::invalid_input("object key must not be empty"));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::operation::get_object::GetObjectOutput;
    use aws_sdk_s3::operation::head_object::HeadObjectOutput;
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    #[test]
    fn test_empty_bucket_name_rejected() {
        let err = Bucket::new(&crate::init("AKID", "secret"), "").unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);
    }

    #[tokio::test]
    async fn test_put_then_get_round_trip() {
        let value = r#"{"a": 1, "b": 2}"#;

        let put_object = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|input| {
                input.bucket() == Some("my-bucket") && input.key() == Some("json_data_1")
            })
            .then_output(|| PutObjectOutput::builder().e_tag("\"json-etag\"").build());
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|input| {
                input.bucket() == Some("my-bucket") && input.key() == Some("json_data_1")
            })
            .then_output(move || {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(value.as_bytes()))
                    .content_length(value.len() as i64)
                    .e_tag("\"json-etag\"")
                    .build()
            });
        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&put_object, &get_object]
        );

        let bucket = Bucket::from_client(client, "my-bucket").unwrap();
        let ack = bucket.put("json_data_1", value).await.unwrap();
        assert_eq!(ack.e_tag(), Some("\"json-etag\""));

        let (data, metadata) = bucket.get("json_data_1").await.unwrap();
        assert_eq!(&data[..], value.as_bytes());
        assert_eq!(metadata.e_tag.as_deref(), Some("\"json-etag\""));
        assert_eq!(metadata.content_length, Some(value.len() as i64));
        assert_eq!(put_object.num_calls(), 1);
        assert_eq!(get_object.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_key_sends_nothing() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .then_output(|| GetObjectOutput::builder().build());
        let client = mock_client!(aws_sdk_s3, &[&get_object]);
        let bucket = Bucket::from_client(client, "my-bucket").unwrap();

        let err = bucket.get("").await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);
        let err = bucket.put("", "value").await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);
        assert_eq!(get_object.num_calls(), 0);
    }

    #[tokio::test]
    async fn test_exists_true_for_stored_object() {
        let head_object = mock!(aws_sdk_s3::Client::head_object)
            .then_output(|| HeadObjectOutput::builder().content_length(3).build());
        let client = mock_client!(aws_sdk_s3, &[&head_object]);
        let bucket = Bucket::from_client(client, "my-bucket").unwrap();

        assert!(bucket.exists("present").await.unwrap());
        assert_eq!(head_object.num_calls(), 1);
    }
}
