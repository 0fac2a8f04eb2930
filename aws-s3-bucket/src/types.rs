/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::head_object::HeadObjectOutput;
use aws_smithy_types::DateTime;

/// Metadata describing a stored object.
///
/// Returned alongside the payload by [`Bucket::get`](crate::Bucket::get) and on its own by
/// [`Bucket::head`](crate::Bucket::head).
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct ObjectMetadata {
    /// Size of the object body in bytes
    pub content_length: Option<i64>,

    /// A standard MIME type describing the format of the object data
    pub content_type: Option<String>,

    /// Entity tag of the object
    pub e_tag: Option<String>,

    /// Date and time the object was last modified
    pub last_modified: Option<DateTime>,

    /// Version of the object, if versioning is enabled on the bucket
    pub version_id: Option<String>,

    /// User-defined metadata (`x-amz-meta-*` headers, without the prefix)
    pub metadata: HashMap<String, String>,
}

impl ObjectMetadata {
    /// Returns the value of a single user-defined metadata entry
    pub fn user_metadata(&self, name: &str) -> Option<&str> {
        self.metadata.get(name).map(String::as_str)
    }
}

macro_rules! object_metadata_from {
    ($output:ty) => {
        impl From<&$output> for ObjectMetadata {
            fn from(value: &$output) -> Self {
                ObjectMetadata {
                    content_length: value.content_length(),
                    content_type: value.content_type().map(str::to_owned),
                    e_tag: value.e_tag().map(str::to_owned),
                    last_modified: value.last_modified().cloned(),
                    version_id: value.version_id().map(str::to_owned),
                    metadata: value.metadata().cloned().unwrap_or_default(),
                }
            }
        }
    };
}

object_metadata_from!(GetObjectOutput);
object_metadata_from!(HeadObjectOutput);

#[cfg(test)]
mod tests {
    use super::ObjectMetadata;
    use aws_sdk_s3::operation::head_object::HeadObjectOutput;

    #[test]
    fn test_from_head_object_output() {
        let output = HeadObjectOutput::builder()
            .content_length(42)
            .content_type("application/json")
            .e_tag("\"etag\"")
            .metadata("origin", "unit-test")
            .build();

        let meta = ObjectMetadata::from(&output);
        assert_eq!(meta.content_length, Some(42));
        assert_eq!(meta.content_type.as_deref(), Some("application/json"));
        assert_eq!(meta.e_tag.as_deref(), Some("\"etag\""));
        assert_eq!(meta.user_metadata("origin"), Some("unit-test"));
        assert_eq!(meta.version_id, None);
    }

    #[test]
    fn test_missing_user_metadata_is_empty() {
        let meta = ObjectMetadata::from(&HeadObjectOutput::builder().build());
        assert!(meta.metadata.is_empty());
        assert_eq!(meta.user_metadata("origin"), None);
    }
}
