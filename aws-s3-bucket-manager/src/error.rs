/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_sdk_s3::error::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    code: Option<String>,
    source: BoxError,
}

/// General categories of bucket manager errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// I/O errors
    IOError,

    /// Some kind of internal runtime issue (e.g. task failure)
    RuntimeError,

    /// Resource not found (e.g. bucket, key, bucket policy, CORS configuration)
    NotFound,

    /// The bucket name is already taken, possibly by the caller
    AlreadyExists,

    /// The bucket still holds objects and can not be deleted
    BucketNotEmpty,

    /// The caller is not allowed to perform the request
    AccessDenied,

    /// Any other error reported by Amazon S3
    ServiceError,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            code: None,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The error code reported by Amazon S3 (e.g. `NoSuchBucketPolicy`), if the error
    /// originated from the service.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input")?,
            ErrorKind::IOError => write!(f, "I/O error")?,
            ErrorKind::RuntimeError => write!(f, "runtime error")?,
            ErrorKind::NotFound => write!(f, "resource not found")?,
            ErrorKind::AlreadyExists => write!(f, "resource already exists")?,
            ErrorKind::BucketNotEmpty => write!(f, "bucket not empty")?,
            ErrorKind::AccessDenied => write!(f, "access denied")?,
            ErrorKind::ServiceError => write!(f, "service error")?,
        }
        match &self.code {
            Some(code) => write!(f, " ({code})"),
            None => Ok(()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<walkdir::Error> for Error {
    fn from(value: walkdir::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(ErrorKind::RuntimeError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn missing_field(field: &'static str) -> Error {
    invalid_input(format!("{field} must be set"))
}

/// Classify an Amazon S3 error code.
pub(crate) fn kind_for_code(code: Option<&str>) -> ErrorKind {
    match code {
        Some(
            "NotFound"
            | "NoSuchKey"
            | "NoSuchBucket"
            | "NoSuchBucketPolicy"
            | "NoSuchCORSConfiguration",
        ) => ErrorKind::NotFound,
        Some("BucketAlreadyExists" | "BucketAlreadyOwnedByYou") => ErrorKind::AlreadyExists,
        Some("BucketNotEmpty") => ErrorKind::BucketNotEmpty,
        Some("AccessDenied") => ErrorKind::AccessDenied,
        _ => ErrorKind::ServiceError,
    }
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let code = value.code().map(str::to_owned);
        Error {
            kind: kind_for_code(code.as_deref()),
            code,
            source: value.into(),
        }
    }
}
