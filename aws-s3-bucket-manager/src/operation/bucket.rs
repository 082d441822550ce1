/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use crate::client::Handle;
use crate::error::Error;
use crate::operation::object;

/// Operation builders
pub mod builders;

/// Region S3 creates buckets in when no location constraint is sent.
const DEFAULT_BUCKET_REGION: &str = "us-east-1";

/// Output type for deleting a bucket together with its objects
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketWithContentsOutput {
    /// The number of objects removed before the bucket was deleted
    pub objects_deleted: u64,
}

impl DeleteBucketWithContentsOutput {
    /// The number of objects removed before the bucket was deleted
    pub fn objects_deleted(&self) -> u64 {
        self.objects_deleted
    }
}

/// The bucket configuration to send for `region`, if any.
///
/// S3 rejects an explicit `us-east-1` location constraint, buckets land there by default.
fn create_bucket_configuration(region: Option<&str>) -> Option<CreateBucketConfiguration> {
    match region {
        None | Some(DEFAULT_BUCKET_REGION) => None,
        Some(region) => Some(
            CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region))
                .build(),
        ),
    }
}

pub(crate) async fn create_bucket(
    handle: &Handle,
    bucket: &str,
    region: Option<&str>,
) -> Result<(), Error> {
    let client_region = handle.client().config().region().map(|r| r.as_ref());
    let region = region.or(client_region);
    handle
        .client()
        .create_bucket()
        .bucket(bucket)
        .set_create_bucket_configuration(create_bucket_configuration(region))
        .send()
        .await?;
    tracing::info!("created bucket '{bucket}'");
    Ok(())
}

pub(crate) async fn list_buckets(handle: &Handle) -> Result<Vec<String>, Error> {
    let output = handle.client().list_buckets().send().await?;
    let names = output
        .buckets()
        .iter()
        .filter_map(|bucket| bucket.name().map(str::to_owned))
        .collect();
    Ok(names)
}

pub(crate) async fn delete_bucket(handle: &Handle, bucket: &str) -> Result<(), Error> {
    handle.client().delete_bucket().bucket(bucket).send().await?;
    tracing::info!("deleted bucket '{bucket}'");
    Ok(())
}

pub(crate) async fn delete_bucket_with_contents(
    handle: &Handle,
    bucket: &str,
) -> Result<DeleteBucketWithContentsOutput, Error> {
    let keys = object::list_objects(handle, bucket, None).await?;

    let mut objects_deleted = 0;
    if !keys.is_empty() {
        let output = object::delete_objects(handle, bucket, &keys).await?;
        for failed in output.failed() {
            tracing::warn!(
                "failed to delete '{}' from '{bucket}': {}",
                failed.key(),
                failed.message().unwrap_or_default()
            );
        }
        objects_deleted = output.deleted().len() as u64;
    }

    delete_bucket(handle, bucket).await?;
    tracing::info!("Bucket '{bucket}' and all its {objects_deleted} objects were deleted.");
    Ok(DeleteBucketWithContentsOutput { objects_deleted })
}
