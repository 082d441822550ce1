/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Error;
use crate::operation::required;

use super::{DeleteObjectsOutput, DownloadObjectsOutput, UploadObjectsOutput};

/// Fluent builder for uploading a single file
#[derive(Debug)]
pub struct UploadObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    path: Option<PathBuf>,
    key: Option<String>,
}

impl UploadObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            path: None,
            key: None,
        }
    }

    /// Upload the file, returning the key it was stored under
    #[tracing::instrument(skip_all, level = "debug", name = "upload-object", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
        key = self.key.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<String, Error> {
        let bucket = required(self.bucket, "bucket")?;
        let path = required(self.path, "path")?;
        super::upload_object(&self.handle, &bucket, &path, self.key.as_deref()).await
    }

    /// The bucket to upload to.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The local file to upload.
    /// Required.
    pub fn path(mut self, input: impl Into<PathBuf>) -> Self {
        self.path = Some(input.into());
        self
    }

    /// The object key.
    /// If not provided, the file name of [`path`](Self::path) is used.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }
}

/// Fluent builder for uploading the files of a local directory
#[derive(Debug)]
pub struct UploadObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    source: Option<PathBuf>,
    key_prefix: Option<String>,
    recursive: bool,
}

impl UploadObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            source: None,
            key_prefix: None,
            recursive: false,
        }
    }

    /// Upload the files
    #[tracing::instrument(skip_all, level = "debug", name = "upload-objects", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
        source = self.source.as_deref().map(|p| p.to_str().unwrap_or_default()).unwrap_or_default(),
        key_prefix = self.key_prefix.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<UploadObjectsOutput, Error> {
        let bucket = required(self.bucket, "bucket")?;
        let source = required(self.source, "source")?;
        super::upload_objects(
            &self.handle,
            &bucket,
            &source,
            self.key_prefix.as_deref(),
            self.recursive,
        )
        .await
    }

    /// The bucket to upload to.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The local directory to upload from.
    /// Required.
    pub fn source(mut self, input: impl Into<PathBuf>) -> Self {
        self.source = Some(input.into());
        self
    }

    /// The local directory to upload from.
    pub fn get_source(&self) -> Option<&std::path::Path> {
        self.source.as_deref()
    }

    /// The S3 key prefix to use for each object.
    /// If not provided, files will be uploaded to the root of the bucket.
    pub fn key_prefix(mut self, input: impl Into<String>) -> Self {
        self.key_prefix = Some(input.into());
        self
    }

    /// Whether to recurse into subdirectories when traversing local file tree.
    /// Defaults to false.
    pub fn recursive(mut self, input: bool) -> Self {
        self.recursive = input;
        self
    }
}

/// Fluent builder for listing object keys
#[derive(Debug)]
pub struct ListObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    prefix: Option<String>,
}

impl ListObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            prefix: None,
        }
    }

    /// List every key, following continuation tokens
    #[tracing::instrument(skip_all, level = "debug", name = "list-objects", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
        prefix = self.prefix.as_deref().unwrap_or_default(),
    ))]
    pub async fn send(self) -> Result<Vec<String>, Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::list_objects(&self.handle, &bucket, self.prefix.as_deref()).await
    }

    /// The bucket to list.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Only list keys starting with this prefix.
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }
}

/// Fluent builder for downloading objects into a local directory
#[derive(Debug)]
pub struct DownloadObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    keys: Vec<String>,
    destination: Option<PathBuf>,
    flatten: bool,
}

impl DownloadObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            keys: Vec::new(),
            destination: None,
            flatten: true,
        }
    }

    /// Download the objects
    #[tracing::instrument(skip_all, level = "debug", name = "download-objects", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
        destination = self.destination.as_deref().map(|p| p.to_str().unwrap_or_default()).unwrap_or_default(),
        keys = self.keys.len(),
    ))]
    pub async fn send(self) -> Result<DownloadObjectsOutput, Error> {
        let bucket = required(self.bucket, "bucket")?;
        let destination = required(self.destination, "destination")?;
        super::download_objects(
            &self.handle,
            &bucket,
            &self.keys,
            &destination,
            self.flatten,
        )
        .await
    }

    /// The bucket to download from.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Append a key to download.
    ///
    /// To override the contents of this collection use [`set_keys`](Self::set_keys)
    pub fn keys(mut self, input: impl Into<String>) -> Self {
        self.keys.push(input.into());
        self
    }

    /// The keys to download.
    pub fn set_keys(mut self, input: Vec<String>) -> Self {
        self.keys = input;
        self
    }

    /// The local directory to download into. Created if missing.
    /// Required.
    pub fn destination(mut self, input: impl Into<PathBuf>) -> Self {
        self.destination = Some(input.into());
        self
    }

    /// Whether to drop the "directories" of a key and write every object directly into
    /// the destination. Objects sharing a file name overwrite each other.
    /// Defaults to true.
    pub fn flatten(mut self, input: bool) -> Self {
        self.flatten = input;
        self
    }
}

/// Fluent builder for deleting objects
#[derive(Debug)]
pub struct DeleteObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    bucket: Option<String>,
    keys: Vec<String>,
}

impl DeleteObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            bucket: None,
            keys: Vec::new(),
        }
    }

    /// Delete the objects
    ///
    /// At least one key is required.
    #[tracing::instrument(skip_all, level = "debug", name = "delete-objects", fields(
        bucket = self.bucket.as_deref().unwrap_or_default(),
        keys = self.keys.len(),
    ))]
    pub async fn send(self) -> Result<DeleteObjectsOutput, Error> {
        let bucket = required(self.bucket, "bucket")?;
        super::delete_objects(&self.handle, &bucket, &self.keys).await
    }

    /// The bucket to delete from.
    /// Required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Append a key to delete.
    ///
    /// To override the contents of this collection use [`set_keys`](Self::set_keys)
    pub fn keys(mut self, input: impl Into<String>) -> Self {
        self.keys.push(input.into());
        self
    }

    /// The keys to delete.
    pub fn set_keys(mut self, input: Vec<String>) -> Self {
        self.keys = input;
        self
    }
}
