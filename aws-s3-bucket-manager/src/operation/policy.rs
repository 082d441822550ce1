/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};

use crate::client::Handle;
use crate::error::Error;

/// Operation builders
pub mod builders;

/// Error code S3 returns when a bucket has no policy attached.
const NO_SUCH_BUCKET_POLICY: &str = "NoSuchBucketPolicy";

pub(crate) async fn get_bucket_policy(
    handle: &Handle,
    bucket: &str,
) -> Result<Option<String>, Error> {
    match handle.client().get_bucket_policy().bucket(bucket).send().await {
        Ok(output) => Ok(output.policy().map(str::to_owned)),
        Err(err) if err.code() == Some(NO_SUCH_BUCKET_POLICY) => {
            tracing::info!(
                "bucket '{bucket}' has no policy: {}",
                DisplayErrorContext(&err)
            );
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) async fn put_bucket_policy(
    handle: &Handle,
    bucket: &str,
    policy: String,
) -> Result<(), Error> {
    handle
        .client()
        .put_bucket_policy()
        .bucket(bucket)
        .policy(policy)
        .send()
        .await?;
    Ok(())
}

pub(crate) async fn delete_bucket_policy(handle: &Handle, bucket: &str) -> Result<(), Error> {
    handle
        .client()
        .delete_bucket_policy()
        .bucket(bucket)
        .send()
        .await?;
    Ok(())
}
