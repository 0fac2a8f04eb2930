/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};

/// Errors returned by this library
///
/// Errors from the SDK are never rewritten. They are kept as the [`source`] of the error and can
/// be recovered with [`Error::as_sdk_error`].
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
///
/// [`source`]: std::error::Error::source
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of bucket errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input validation issues (e.g. empty key, missing credentials)
    InputInvalid,

    /// Resource not found (e.g. bucket or key not found)
    NotFound,

    /// Any other error returned by the SDK, such as authentication, permission, or network failures
    ServiceError,

    /// I/O errors while reading a response body
    IOError,

    /// Some kind of internal runtime issue (e.g. the blocking runtime could not be built)
    RuntimeError,
}

impl Error {
    /// Creates a new bucket [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the underlying SDK error if this error was returned by operation `E`.
    ///
    /// ```no_run
    /// # async fn example(bucket: &aws_s3_bucket::Bucket) {
    /// use aws_sdk_s3::operation::get_object::GetObjectError;
    ///
    /// if let Err(err) = bucket.get("my-key").await {
    ///     let missing = err
    ///         .as_sdk_error::<GetObjectError>()
    ///         .and_then(|sdk_err| sdk_err.as_service_error())
    ///         .is_some_and(|service_err| service_err.is_no_such_key());
    ///     # let _ = missing;
    /// }
    /// # }
    /// ```
    pub fn as_sdk_error<E>(&self) -> Option<&SdkError<E>>
    where
        E: std::error::Error + 'static,
    {
        self.source.downcast_ref::<SdkError<E>>()
    }

    /// Consumes the error, returning its source.
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::ServiceError => write!(f, "service error"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        let kind = match value.code() {
            Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => ErrorKind::NotFound,
            _ => ErrorKind::ServiceError,
        };

        Error::new(kind, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_names_kind() {
        let err = invalid_input("key must not be empty");
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);
        assert_eq!(err.to_string(), "invalid input");
        assert_eq!(
            err.source().map(|s| s.to_string()).as_deref(),
            Some("key must not be empty")
        );
    }

    #[test]
    fn test_as_sdk_error_on_non_sdk_source() {
        use aws_sdk_s3::operation::get_object::GetObjectError;
        let err = Error::new(ErrorKind::IOError, "connection reset");
        assert!(err.as_sdk_error::<GetObjectError>().is_none());
        assert_eq!(err.into_source().to_string(), "connection reset");
    }
}
