/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Minimal put/get handles for Amazon S3 buckets.
//!
//! `aws-s3-bucket` is a thin layer over the [AWS SDK for Rust]. A [`Config`] records the
//! credentials to sign requests with, and a [`Bucket`] binds a bucket name to an S3 client
//! built from that configuration. Signing, retries, and transport all stay in the SDK.
//!
//! [AWS SDK for Rust]: https://docs.rs/aws-sdk-s3
//!
//! # Examples
//!
//! Initialize from explicit keys and round-trip an object:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_bucket::error::Error> {
//! let config = aws_s3_bucket::init("AKIDEXAMPLE", "secret");
//! let bucket = aws_s3_bucket::Bucket::new(&config, "my-bucket")?;
//!
//! bucket.put("json_data_1", r#"{"a": 1, "b": 2}"#).await?;
//! let (data, metadata) = bucket.get("json_data_1").await?;
//! # let _ = (data, metadata);
//! # Ok(())
//! # }
//! ```
//!
//! Load credentials and region from the environment:
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_bucket::error::Error> {
//! let config = aws_s3_bucket::from_env().load().await?;
//! let bucket = aws_s3_bucket::Bucket::new(&config, "my-bucket")?;
//! # let _ = bucket;
//! # Ok(())
//! # }
//! ```
//!
//! See [`blocking`] for a synchronous version of [`Bucket`].

/// Region used when neither the configuration nor the environment provides one
pub(crate) const DEFAULT_REGION: &str = "us-east-1";

/// Error types emitted by `aws-s3-bucket`
pub mod error;

/// Common types used by `aws-s3-bucket`
pub mod types;

/// Client configuration
pub mod config;

/// Bucket handles
pub mod bucket;

/// Synchronous bucket handles
pub mod blocking;

pub use self::bucket::Bucket;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader that resolves credentials and region from the environment
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}

/// Create a [`Config`] from an access key pair.
///
/// The keys are not validated; the first request made with them will fail if they are wrong.
pub fn init(access_key_id: impl Into<String>, secret_key: impl Into<String>) -> Config {
    Config::from_keys(access_key_id, secret_key)
}
