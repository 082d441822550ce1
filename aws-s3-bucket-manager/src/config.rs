/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::MAX_DELETE_BATCH_SIZE;
use std::cmp;

/// Configuration loader
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    delete_batch_size: usize,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the maximum number of keys sent in a single `DeleteObjects` request.
    pub fn delete_batch_size(&self) -> usize {
        self.delete_batch_size
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    delete_batch_size: Option<usize>,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Maximum number of keys to delete with a single `DeleteObjects` request.
    ///
    /// S3 accepts at most 1000 keys per request, larger values are clamped. A value of zero
    /// is rounded up to one. Default is 1000.
    pub fn delete_batch_size(mut self, batch_size: usize) -> Self {
        self.delete_batch_size = Some(batch_size.clamp(1, MAX_DELETE_BATCH_SIZE));
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// # Panics
    ///
    /// Panics if no S3 client was set.
    pub fn build(self) -> Config {
        Config {
            delete_batch_size: cmp::min(
                self.delete_batch_size.unwrap_or(MAX_DELETE_BATCH_SIZE),
                MAX_DELETE_BATCH_SIZE,
            ),
            client: self.client.expect("client set"),
        }
    }
}
