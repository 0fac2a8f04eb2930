/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Blocking versions of the bucket operations.
//!
//! Each call runs the corresponding [`crate::Bucket`] operation to completion on a private
//! current-thread runtime owned by the handle.
//!
//! NOTE: these methods panic when called from within an async runtime. Use [`crate::Bucket`]
//! there instead.

use std::future::Future;

use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;
use aws_sdk_s3::operation::put_object::PutObjectOutput;
use bytes::Bytes;

use crate::error::{Error, ErrorKind};
use crate::types::ObjectMetadata;
use crate::Config;

/// Synchronous handle to a single Amazon S3 bucket.
#[derive(Debug)]
pub struct Bucket {
    inner: crate::Bucket,
    runtime: tokio::runtime::Runtime,
}

impl Bucket {
    /// Creates a handle to the bucket `name`, sending requests through a client built from
    /// `config`.
    pub fn new(config: &Config, name: impl Into<String>) -> Result<Bucket, Error> {
        Bucket::from_async(crate::Bucket::new(config, name)?)
    }

    /// Creates a handle to the bucket `name` using an existing S3 client.
    pub fn from_client(
        client: aws_sdk_s3::Client,
        name: impl Into<String>,
    ) -> Result<Bucket, Error> {
        Bucket::from_async(crate::Bucket::from_client(client, name)?)
    }

    fn from_async(inner: crate::Bucket) -> Result<Bucket, Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| Error::new(ErrorKind::RuntimeError, err))?;
        Ok(Bucket { inner, runtime })
    }

    /// Returns the bucket name
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns the asynchronous handle this handle drives
    pub fn as_async(&self) -> &crate::Bucket {
        &self.inner
    }

    /// Store `value` under `key`. See [`crate::Bucket::put`].
    pub fn put(
        &self,
        key: impl Into<String>,
        value: impl Into<Bytes>,
    ) -> Result<PutObjectOutput, Error> {
        self.block_on(self.inner.put(key, value))
    }

    /// Fetch the object stored under `key`. See [`crate::Bucket::get`].
    pub fn get(&self, key: impl Into<String>) -> Result<(Bytes, ObjectMetadata), Error> {
        self.block_on(self.inner.get(key))
    }

    /// Fetch only the metadata of the object stored under `key`. See [`crate::Bucket::head`].
    pub fn head(&self, key: impl Into<String>) -> Result<ObjectMetadata, Error> {
        self.block_on(self.inner.head(key))
    }

    /// Returns whether an object is stored under `key`. See [`crate::Bucket::exists`].
    pub fn exists(&self, key: impl Into<String>) -> Result<bool, Error> {
        self.block_on(self.inner.exists(key))
    }

    /// Delete the object stored under `key`. See [`crate::Bucket::delete`].
    pub fn delete(&self, key: impl Into<String>) -> Result<DeleteObjectOutput, Error> {
        self.block_on(self.inner.delete(key))
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
