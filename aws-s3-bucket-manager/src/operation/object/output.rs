/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;

/// Output type for uploading the files of a directory
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct UploadObjectsOutput {
    /// The keys of the uploaded objects, in upload order
    pub keys: Vec<String>,
}

impl UploadObjectsOutput {
    /// The keys of the uploaded objects, in upload order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Output type for downloading objects to a local directory
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DownloadObjectsOutput {
    /// The local files written, in download order
    pub files: Vec<PathBuf>,
}

impl DownloadObjectsOutput {
    /// The local files written, in download order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// The number of objects downloaded
    pub fn objects_downloaded(&self) -> u64 {
        self.files.len() as u64
    }
}

/// Output type for deleting objects
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectsOutput {
    /// Keys S3 reported as deleted
    pub deleted: Vec<String>,

    /// Keys S3 refused to delete
    pub failed: Vec<FailedDeletion>,
}

impl DeleteObjectsOutput {
    /// Keys S3 reported as deleted
    pub fn deleted(&self) -> &[String] {
        &self.deleted
    }

    /// Keys S3 refused to delete
    pub fn failed(&self) -> &[FailedDeletion] {
        &self.failed
    }
}

/// A key that could not be deleted as part of a `DeleteObjects` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDeletion {
    key: String,
    code: Option<String>,
    message: Option<String>,
}

impl FailedDeletion {
    /// The key that was not deleted
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The error code reported by S3, e.g. `AccessDenied`
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The error message reported by S3
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<&aws_sdk_s3::types::Error> for FailedDeletion {
    fn from(value: &aws_sdk_s3::types::Error) -> Self {
        Self {
            key: value.key().unwrap_or_default().to_owned(),
            code: value.code().map(str::to_owned),
            message: value.message().map(str::to_owned),
        }
    }
}
