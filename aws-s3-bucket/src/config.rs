/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_credential_types::Credentials;
use aws_sdk_s3::config::BehaviorVersion;
use aws_smithy_runtime_api::client::http::{HttpClient, SharedHttpClient};
use aws_types::SdkConfig;

use crate::error::{self, Error};
use crate::DEFAULT_REGION;

pub use aws_types::region::Region;

pub(crate) mod loader;

/// Provider name attached to credentials created from an explicit key pair
const STATIC_PROVIDER_NAME: &str = "aws-s3-bucket";

/// Configuration for a [`Bucket`](crate::Bucket)
///
/// A `Config` holds everything needed to construct the S3 client a bucket handle sends its
/// requests through. It is immutable once built and cheap to clone.
#[derive(Debug, Clone)]
pub struct Config {
    credentials_provider: SharedCredentialsProvider,
    region: Option<Region>,
    endpoint_url: Option<String>,
    force_path_style: Option<bool>,
    http_client: Option<SharedHttpClient>,
    sdk_config: Option<SdkConfig>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Create a configuration that signs requests with the given access key pair.
    pub fn from_keys(access_key_id: impl Into<String>, secret_key: impl Into<String>) -> Config {
        let credentials = static_credentials(access_key_id, secret_key);
        Config {
            credentials_provider: SharedCredentialsProvider::new(credentials),
            region: None,
            endpoint_url: None,
            force_path_style: None,
            http_client: None,
            sdk_config: None,
        }
    }

    /// Returns the credentials provider requests will be signed with
    pub fn credentials_provider(&self) -> &SharedCredentialsProvider {
        &self.credentials_provider
    }

    /// Returns the region requests will be sent to.
    ///
    /// Falls back to the region of the base [`SdkConfig`], then to `us-east-1`.
    pub fn region(&self) -> Region {
        self.region
            .clone()
            .or_else(|| self.sdk_config.as_ref().and_then(|c| c.region().cloned()))
            .unwrap_or_else(|| Region::from_static(DEFAULT_REGION))
    }

    /// Returns the custom endpoint URL, if one was set
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Returns whether path-style addressing was explicitly enabled or disabled
    pub fn force_path_style(&self) -> Option<bool> {
        self.force_path_style
    }

    /// Returns the base SDK configuration, if one was set
    pub fn sdk_config(&self) -> Option<&SdkConfig> {
        self.sdk_config.as_ref()
    }

    /// The Amazon S3 client configuration every bucket handle is constructed from.
    pub fn s3_config(&self) -> aws_sdk_s3::Config {
        let mut builder = match &self.sdk_config {
            Some(sdk_config) => aws_sdk_s3::config::Builder::from(sdk_config),
            None => aws_sdk_s3::Config::builder().behavior_version(BehaviorVersion::latest()),
        };

        builder = builder
            .credentials_provider(self.credentials_provider.clone())
            .region(self.region());

        if let Some(endpoint_url) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }
        if let Some(force_path_style) = self.force_path_style {
            builder = builder.force_path_style(force_path_style);
        }
        if let Some(http_client) = &self.http_client {
            builder = builder.http_client(http_client.clone());
        }

        builder.build()
    }

    /// Construct a new Amazon S3 client from this configuration.
    pub fn s3_client(&self) -> aws_sdk_s3::Client {
        aws_sdk_s3::Client::from_conf(self.s3_config())
    }
}

fn static_credentials(
    access_key_id: impl Into<String>,
    secret_key: impl Into<String>,
) -> Credentials {
    Credentials::new(access_key_id, secret_key, None, None, STATIC_PROVIDER_NAME)
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    credentials_provider: Option<SharedCredentialsProvider>,
    region: Option<Region>,
    endpoint_url: Option<String>,
    force_path_style: Option<bool>,
    http_client: Option<SharedHttpClient>,
    sdk_config: Option<SdkConfig>,
}

impl Builder {
    /// Sign requests with the given access key pair.
    pub fn access_keys(
        self,
        access_key_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.credentials(static_credentials(access_key_id, secret_key))
    }

    /// Sign requests with the given static credentials (e.g. including a session token).
    pub fn credentials(self, credentials: Credentials) -> Self {
        self.credentials_provider(credentials)
    }

    /// Sign requests with credentials resolved from the given provider.
    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials_provider = Some(SharedCredentialsProvider::new(provider));
        self
    }

    /// Set the region requests are sent to.
    ///
    /// Default is the region of the base [`SdkConfig`] if one is set, otherwise `us-east-1`.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Send requests to a custom endpoint, e.g. an S3 compatible service.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Use path-style (`https://host/bucket/key`) rather than virtual-hosted-style addressing.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = Some(force_path_style);
        self
    }

    /// Set an explicit HTTP client to send requests with.
    pub fn http_client(mut self, http_client: impl HttpClient + 'static) -> Self {
        self.http_client = Some(SharedHttpClient::new(http_client));
        self
    }

    /// Start from an existing SDK configuration (retry, timeout, and identity settings).
    ///
    /// If no credentials are set on this builder, the credentials provider of `sdk_config` is
    /// used.
    pub fn sdk_config(mut self, sdk_config: SdkConfig) -> Self {
        self.sdk_config = Some(sdk_config);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    ///
    /// Fails if no credentials were set on the builder or on the base [`SdkConfig`].
    pub fn build(self) -> Result<Config, Error> {
        let credentials_provider = self
            .credentials_provider
            .or_else(|| {
                self.sdk_config
                    .as_ref()
                    .and_then(SdkConfig::credentials_provider)
            })
            .ok_or_else(|| error::invalid_input("credentials must be set"))?;

        Ok(Config {
            credentials_provider,
            region: self.region,
            endpoint_url: self.endpoint_url,
            force_path_style: self.force_path_style,
            http_client: self.http_client,
            sdk_config: self.sdk_config,
        })
    }
}
