/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::operation::required;

use super::DeleteBucketWithContentsOutput;

/// Fluent builder for creating a bucket
#[derive(Debug)]
pub struct CreateBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    region: Option<String>,
}

impl CreateBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            region: None,
        }
    }

    /// Create the bucket
    #[tracing::instrument(skip_all, level = "debug", name = "create-bucket", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
        region = self.region.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<(), Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::create_bucket(&self.handle, &bucket, self.region.as_deref()).await
    }

    /// The name of the bucket to create.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The name of the bucket to create.
    pub fn get_bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The region to create the bucket in, e.g. `us-west-2`.
    /// If not provided, the region of the S3 client is used.
    pub fn region(mut self, input: impl Into<String>) -> Self {
        self.region = Some(input.into());
        self
    }

    /// The region to create the bucket in.
    pub fn set_region(mut self, input: Option<String>) -> Self {
        self.region = input;
        self
    }

    /// The region to create the bucket in.
    pub fn get_region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Fluent builder for listing bucket names
#[derive(Debug)]
pub struct ListBucketsFluentBuilder {
    handle: Arc<crate::client::Handle>,
}

impl ListBucketsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self { handle }
    }

    /// List the bucket names
    #[tracing::instrument(skip_all, level = "debug", name = "list-buckets")]
    pub async fn send(self) -> Result<Vec<String>, Error> {
        super::list_buckets(&self.handle).await
    }
}

/// Fluent builder for checking whether a bucket exists
#[derive(Debug)]
pub struct BucketExistsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl BucketExistsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Check for the bucket
    #[tracing::instrument(skip_all, level = "debug", name = "bucket-exists", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<bool, Error> {
        let bucket = required(self.bucket, "bucket")?;
        let names = super::list_buckets(&self.handle).await?;
        Ok(names.contains(&bucket))
    }

    /// The name of the bucket to look for.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }
}

/// Fluent builder for deleting an empty bucket
#[derive(Debug)]
pub struct DeleteBucketFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl DeleteBucketFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Delete the bucket
    #[tracing::instrument(skip_all, level = "debug", name = "delete-bucket", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<(), Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::delete_bucket(&self.handle, &bucket).await
    }

    /// The name of the bucket to delete.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }
}

/// Fluent builder for deleting a bucket and every object in it
#[derive(Debug)]
pub struct DeleteBucketWithContentsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl DeleteBucketWithContentsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Delete the objects, then the bucket
    #[tracing::instrument(skip_all, level = "debug", name = "delete-bucket-with-contents", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<DeleteBucketWithContentsOutput, Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::delete_bucket_with_contents(&self.handle, &bucket).await
    }

    /// The name of the bucket to delete.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }
}
