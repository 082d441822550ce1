/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::error::ProvideErrorMetadata;

use crate::client::Handle;
use crate::error::Error;
use crate::types::{CorsConfiguration, CorsRule};

/// Operation builders
pub mod builders;

/// Error code S3 returns when a bucket has no CORS configuration.
const NO_SUCH_CORS_CONFIGURATION: &str = "NoSuchCORSConfiguration";

pub(crate) async fn get_bucket_cors(handle: &Handle, bucket: &str) -> Result<Vec<CorsRule>, Error> {
    match handle.client().get_bucket_cors().bucket(bucket).send().await {
        Ok(output) => Ok(output.cors_rules().iter().map(CorsRule::from).collect()),
        Err(err) if err.code() == Some(NO_SUCH_CORS_CONFIGURATION) => {
            tracing::debug!("bucket '{bucket}' has no CORS configuration");
            Ok(Vec::new())
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) async fn put_bucket_cors(
    handle: &Handle,
    bucket: &str,
    configuration: &CorsConfiguration,
) -> Result<(), Error> {
    let configuration = configuration.to_sdk()?;
    handle
        .client()
        .put_bucket_cors()
        .bucket(bucket)
        .cors_configuration(configuration)
        .send()
        .await?;
    Ok(())
}

pub(crate) async fn delete_bucket_cors(handle: &Handle, bucket: &str) -> Result<(), Error> {
    handle
        .client()
        .delete_bucket_cors()
        .bucket(bucket)
        .send()
        .await?;
    Ok(())
}
