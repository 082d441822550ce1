/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::operation::required;
use crate::types::PolicyDocument;

/// Fluent builder for reading a bucket policy
#[derive(Debug)]
pub struct GetBucketPolicyFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl GetBucketPolicyFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Read the policy JSON text
    ///
    /// A bucket without a policy yields `None`.
    #[tracing::instrument(skip_all, level = "debug", name = "get-bucket-policy", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<Option<String>, Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::get_bucket_policy(&self.handle, &bucket).await
    }

    /// The bucket whose policy to read.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }
}

/// Fluent builder for attaching a policy to a bucket
#[derive(Debug)]
pub struct PutBucketPolicyFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    policy: Option<String>,
}

impl PutBucketPolicyFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            policy: None,
        }
    }

    /// Attach the policy
    #[tracing::instrument(skip_all, level = "debug", name = "put-bucket-policy", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<(), Error> {
        let bucket = required(self.bucket, "bucket")?;
        let policy = required(self.policy, "policy")?;
        super::put_bucket_policy(&self.handle, &bucket, policy).await
    }

    /// The bucket to attach the policy to.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The policy as JSON text.
    /// Either this or [`document`](Self::document) is required.
    pub fn policy(mut self, input: impl Into<String>) -> Self {
        self.policy = Some(input.into());
        self
    }

    /// The policy as a structured document.
    pub fn document(mut self, input: &PolicyDocument) -> Result<Self, Error> {
        self.policy = Some(input.to_json()?);
        Ok(self)
    }
}

/// Fluent builder for removing a bucket policy
#[derive(Debug)]
pub struct DeleteBucketPolicyFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl DeleteBucketPolicyFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Remove the policy
    #[tracing::instrument(skip_all, level = "debug", name = "delete-bucket-policy", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<(), Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::delete_bucket_policy(&self.handle, &bucket).await
    }

    /// The bucket to change.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }
}
