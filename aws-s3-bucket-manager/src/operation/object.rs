/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::client::Handle;
use crate::error::{self, Error};

use super::validate_target_is_dir;

/// Operation builders
pub mod builders;

mod local;
pub(crate) use local::discover_files;

mod output;
pub use output::{DeleteObjectsOutput, DownloadObjectsOutput, FailedDeletion, UploadObjectsOutput};

pub(crate) async fn list_objects(
    handle: &Handle,
    bucket: &str,
    prefix: Option<&str>,
) -> Result<Vec<String>, Error> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;
    loop {
        let output = handle
            .client()
            .list_objects_v2()
            .bucket(bucket)
            .set_prefix(prefix.map(str::to_owned))
            .set_continuation_token(continuation_token.take())
            .send()
            .await?;

        keys.extend(
            output
                .contents()
                .iter()
                .filter_map(|object| object.key().map(str::to_owned)),
        );

        match output.next_continuation_token() {
            Some(token) if output.is_truncated().unwrap_or(false) => {
                continuation_token = Some(token.to_owned());
            }
            _ => break,
        }
    }

    if keys.is_empty() {
        tracing::info!("Bucket '{bucket}' is empty.");
    }
    Ok(keys)
}

pub(crate) async fn upload_object(
    handle: &Handle,
    bucket: &str,
    path: &Path,
    key: Option<&str>,
) -> Result<String, Error> {
    let key = match key {
        Some(key) => key.to_owned(),
        None => path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                error::invalid_input(format!(
                    "can not derive an object key from {}",
                    path.display()
                ))
            })?,
    };

    let body = ByteStream::from_path(path).await?;
    handle
        .client()
        .put_object()
        .bucket(bucket)
        .key(&key)
        .body(body)
        .send()
        .await?;
    tracing::info!("uploaded {} to s3://{bucket}/{key}", path.display());
    Ok(key)
}

pub(crate) async fn upload_objects(
    handle: &Handle,
    bucket: &str,
    source: &Path,
    key_prefix: Option<&str>,
    recursive: bool,
) -> Result<UploadObjectsOutput, Error> {
    validate_target_is_dir(source).await?;

    let files = discover_files(source, recursive).await?;
    let mut keys = Vec::with_capacity(files.len());
    for path in files {
        let relative = path
            .strip_prefix(source)
            .map_err(|_| error::invalid_input(format!("{} escapes the source", path.display())))?;
        let key = local::derive_object_key(relative, key_prefix)?;
        keys.push(upload_object(handle, bucket, &path, Some(&key)).await?);
    }

    Ok(UploadObjectsOutput { keys })
}

pub(crate) async fn download_objects(
    handle: &Handle,
    bucket: &str,
    keys: &[String],
    destination: &Path,
    flatten: bool,
) -> Result<DownloadObjectsOutput, Error> {
    fs::create_dir_all(destination).await?;

    let mut files = Vec::with_capacity(keys.len());
    for key in keys {
        let Some(path) = local::local_key_path(destination, key, flatten)? else {
            tracing::debug!("skipping directory marker '{key}'");
            continue;
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        download_object(handle, bucket, key, &path).await?;
        tracing::info!("Downloaded {key} to {}", path.display());
        files.push(path);
    }

    Ok(DownloadObjectsOutput { files })
}

async fn download_object(
    handle: &Handle,
    bucket: &str,
    key: &str,
    path: &Path,
) -> Result<(), Error> {
    let output = handle
        .client()
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await?;

    let mut body = output.body;
    let mut dest = fs::File::create(path).await?;
    while let Some(chunk) = body.try_next().await? {
        dest.write_all(&chunk).await?;
    }
    dest.flush().await?;
    Ok(())
}

pub(crate) async fn delete_objects(
    handle: &Handle,
    bucket: &str,
    keys: &[String],
) -> Result<DeleteObjectsOutput, Error> {
    match keys {
        [] => Err(error::invalid_input("at least one key must be given")),
        [key] => {
            handle
                .client()
                .delete_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await?;
            Ok(DeleteObjectsOutput {
                deleted: vec![key.clone()],
                failed: Vec::new(),
            })
        }
        keys => {
            let mut output = DeleteObjectsOutput::default();
            for batch in keys.chunks(handle.config.delete_batch_size()) {
                delete_batch(handle, bucket, batch, &mut output).await?;
            }
            Ok(output)
        }
    }
}

async fn delete_batch(
    handle: &Handle,
    bucket: &str,
    batch: &[String],
    output: &mut DeleteObjectsOutput,
) -> Result<(), Error> {
    let objects = batch
        .iter()
        .map(|key| ObjectIdentifier::builder().key(key).build())
        .collect::<Result<Vec<_>, _>>()?;
    let delete = Delete::builder()
        .set_objects(Some(objects))
        .quiet(false)
        .build()?;

    tracing::debug!("deleting batch of {} keys from '{bucket}'", batch.len());
    let response = handle
        .client()
        .delete_objects()
        .bucket(bucket)
        .delete(delete)
        .send()
        .await?;

    output.deleted.extend(
        response
            .deleted()
            .iter()
            .filter_map(|deleted| deleted.key().map(str::to_owned)),
    );
    output
        .failed
        .extend(response.errors().iter().map(FailedDeletion::from));
    Ok(())
}
