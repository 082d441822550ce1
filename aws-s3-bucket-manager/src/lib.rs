/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! AWS S3 Bucket Manager
//!
//! A thin, strongly typed layer over [`aws_sdk_s3`] for managing the lifecycle of a bucket:
//! creating and deleting buckets, moving objects between the local filesystem and S3, and
//! reading or changing the bucket's ACL, CORS configuration and bucket policy.
//!
//! All permission, CORS and policy evaluation happens inside Amazon S3. This crate only
//! shapes requests and surfaces responses (and provider errors) as-is.
//!
//! # Examples
//!
//! ```no_run
//! use aws_s3_bucket_manager::error::Error;
//!
//! async fn make_bucket() -> Result<(), Error> {
//!     let config = aws_s3_bucket_manager::from_env().load().await;
//!     let client = aws_s3_bucket_manager::Client::new(config);
//!
//!     client.create_bucket().bucket("my-bucket").send().await?;
//!     let names = client.list_buckets().send().await?;
//!     assert!(names.iter().any(|name| name == "my-bucket"));
//!     Ok(())
//! }
//! ```

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Maximum number of keys S3 accepts in a single `DeleteObjects` request.
pub(crate) const MAX_DELETE_BATCH_SIZE: usize = 1000;

/// Error types emitted by `aws-s3-bucket-manager`
pub mod error;

/// Common types used by `aws-s3-bucket-manager`
pub mod types;

/// Bucket manager client
pub mod client;

/// Bucket manager operations
pub mod operation;

/// Configuration types
pub mod config;

/// The bucket lifecycle demonstration
pub mod tour;

pub use self::client::Client;
pub use self::config::Config;

use self::config::loader::ConfigLoader;

/// Create a config loader for resolving configuration from the environment.
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
