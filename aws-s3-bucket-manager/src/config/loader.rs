/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_types::region::Region;

use crate::config::Builder;
use crate::Config;

/// Load bucket manager [`Config`] from the environment.
///
/// Credentials and region are resolved through the standard AWS provider chains
/// (environment variables, shared config/credentials files, IMDS, ...).
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    region: Option<String>,
    endpoint_url: Option<String>,
    force_path_style: bool,
}

impl ConfigLoader {
    /// Override the region resolved from the environment.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Send requests to a custom endpoint, e.g. an S3 compatible service running locally.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Address buckets as `https://host/bucket` instead of `https://bucket.host`.
    /// Default is false.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Maximum number of keys to delete with a single `DeleteObjects` request.
    ///
    /// Default is 1000, which is also the maximum.
    pub fn delete_batch_size(mut self, batch_size: usize) -> Self {
        self.builder = self.builder.delete_batch_size(batch_size);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Config {
        let mut loader = aws_config::from_env();
        if let Some(region) = self.region {
            loader = loader.region(Region::new(region));
        }
        let shared_config = loader.load().await;

        tracing::debug!(
            region = ?shared_config.region(),
            endpoint_url = self.endpoint_url.as_deref().unwrap_or_default(),
            "loaded shared config"
        );

        let mut s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(self.force_path_style);
        s3_config.set_endpoint_url(self.endpoint_url);
        let s3_client = aws_sdk_s3::Client::from_conf(s3_config.build());

        self.builder.client(s3_client).build()
    }
}
