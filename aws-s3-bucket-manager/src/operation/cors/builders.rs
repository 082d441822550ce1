/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::operation::required;
use crate::types::{CorsConfiguration, CorsRule};

/// Fluent builder for reading the CORS rules of a bucket
#[derive(Debug)]
pub struct GetBucketCorsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl GetBucketCorsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Read the rules
    ///
    /// A bucket without a CORS configuration yields an empty list.
    #[tracing::instrument(skip_all, level = "debug", name = "get-bucket-cors", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<Vec<CorsRule>, Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::get_bucket_cors(&self.handle, &bucket).await
    }

    /// The bucket whose rules to read.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }
}

/// Fluent builder for replacing the CORS configuration of a bucket
#[derive(Debug)]
pub struct PutBucketCorsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    rules: Vec<CorsRule>,
}

impl PutBucketCorsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            rules: Vec::new(),
        }
    }

    /// Replace the configuration
    #[tracing::instrument(skip_all, level = "debug", name = "put-bucket-cors", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
        rules = self.rules.len(),
    ))]
    pub async fn send(self) -> Result<(), Error> {
        let bucket = required(self.bucket, "bucket")?;
        let configuration = CorsConfiguration::new(self.rules);
        super::put_bucket_cors(&self.handle, &bucket, &configuration).await
    }

    /// The bucket to configure.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Append a rule.
    ///
    /// At least one rule is required.
    pub fn rule(mut self, input: CorsRule) -> Self {
        self.rules.push(input);
        self
    }

    /// Use every rule of `configuration`, replacing rules added so far.
    pub fn configuration(mut self, input: CorsConfiguration) -> Self {
        self.rules = input.cors_rules;
        self
    }
}

/// Fluent builder for removing the CORS configuration of a bucket
#[derive(Debug)]
pub struct DeleteBucketCorsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl DeleteBucketCorsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Remove the configuration
    #[tracing::instrument(skip_all, level = "debug", name = "delete-bucket-cors", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<(), Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::delete_bucket_cors(&self.handle, &bucket).await
    }

    /// The bucket to change.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }
}
