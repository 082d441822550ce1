/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::types::BucketCannedAcl;

use crate::client::Handle;
use crate::error::Error;
use crate::types::{AclGrant, AclOwner, BucketAcl};

/// Operation builders
pub mod builders;

pub(crate) async fn get_bucket_acl(handle: &Handle, bucket: &str) -> Result<BucketAcl, Error> {
    let output = handle.client().get_bucket_acl().bucket(bucket).send().await?;
    Ok(BucketAcl {
        owner: output.owner().map(AclOwner::from),
        grants: output.grants().iter().map(AclGrant::from).collect(),
    })
}

pub(crate) async fn put_bucket_acl(
    handle: &Handle,
    bucket: &str,
    acl: BucketCannedAcl,
) -> Result<(), Error> {
    tracing::debug!("applying canned ACL '{}' to '{bucket}'", acl.as_str());
    handle
        .client()
        .put_bucket_acl()
        .bucket(bucket)
        .acl(acl)
        .send()
        .await?;
    Ok(())
}
