/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::types::BucketCannedAcl;

use crate::error::Error;
use crate::operation::required;
use crate::types::BucketAcl;

/// Fluent builder for reading a bucket ACL
#[derive(Debug)]
pub struct GetBucketAclFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
}

impl GetBucketAclFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
        }
    }

    /// Read the ACL
    #[tracing::instrument(skip_all, level = "debug", name = "get-bucket-acl", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<BucketAcl, Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::get_bucket_acl(&self.handle, &bucket).await
    }

    /// The bucket whose ACL to read.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }
}

/// Fluent builder for applying a canned ACL to a bucket
#[derive(Debug)]
pub struct PutBucketAclFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    acl: Option<BucketCannedAcl>,
}

impl PutBucketAclFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            acl: None,
        }
    }

    /// Apply the ACL
    #[tracing::instrument(skip_all, level = "debug", name = "put-bucket-acl", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<(), Error> {
        let bucket = required(self.bucket, "bucket")?;
        let acl = required(self.acl, "acl")?;
        super::put_bucket_acl(&self.handle, &bucket, acl).await
    }

    /// The bucket to change.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The canned ACL, e.g. [`BucketCannedAcl::Private`].
    /// Required.
    ///
    /// Buckets with object ownership set to `BucketOwnerEnforced` (the default for new
    /// buckets) only accept `private`.
    pub fn acl(mut self, input: impl Into<BucketCannedAcl>) -> Self {
        self.acl = Some(input.into());
        self
    }
}
