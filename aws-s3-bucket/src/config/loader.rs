/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::config::BehaviorVersion;

use crate::config::{Builder, Region};
use crate::error::Error;
use crate::Config;

/// Load [`Config`] from the environment.
///
/// Credentials and region are resolved through the default AWS provider chains
/// (environment variables such as `AWS_ACCESS_KEY_ID`/`AWS_SECRET_ACCESS_KEY`, shared config
/// and credentials files, container and instance metadata). Values set on the loader take
/// precedence.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    profile_name: Option<String>,
}

impl ConfigLoader {
    /// Override the region resolved from the environment.
    pub fn region(mut self, region: Region) -> Self {
        self.builder = self.builder.region(region);
        self
    }

    /// Sign requests with the given access key pair instead of the default credentials chain.
    pub fn access_keys(
        mut self,
        access_key_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.builder = self.builder.access_keys(access_key_id, secret_key);
        self
    }

    /// Sign requests with credentials from the given provider instead of the default chain.
    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.builder = self.builder.credentials_provider(provider);
        self
    }

    /// Send requests to a custom endpoint, e.g. an S3 compatible service.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.builder = self.builder.endpoint_url(endpoint_url);
        self
    }

    /// Use path-style rather than virtual-hosted-style addressing.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.builder = self.builder.force_path_style(force_path_style);
        self
    }

    /// Read settings from the named profile of the shared config files.
    pub fn profile_name(mut self, profile_name: impl Into<String>) -> Self {
        self.profile_name = Some(profile_name.into());
        self
    }

    /// Load the configuration
    ///
    /// If fields have been overridden during loader construction, the override values will be
    /// used. Otherwise, the values resolved from the environment are provided.
    ///
    /// Credentials from the default chain are resolved lazily, so missing or invalid
    /// credentials only surface as an error on the first request.
    pub async fn load(self) -> Result<Config, Error> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile_name) = &self.profile_name {
            loader = loader.profile_name(profile_name);
        }
        // skip the default chains for anything already set explicitly
        if let Some(provider) = &self.builder.credentials_provider {
            loader = loader.credentials_provider(provider.clone());
        }
        if let Some(region) = &self.builder.region {
            loader = loader.region(region.clone());
        }

        let sdk_config = loader.load().await;
        tracing::debug!(region = ?sdk_config.region(), "loaded configuration from environment");

        self.builder.sdk_config(sdk_config).build()
    }
}
