/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::Path;

use crate::error::{self, Error};

/// Types for bucket lifecycle operations
pub mod bucket;

/// Types for object operations
pub mod object;

/// Types for bucket ACL operations
pub mod acl;

/// Types for bucket CORS operations
pub mod cors;

/// Types for bucket policy operations
pub mod policy;

/// Separator used between "directories" of an object key.
pub(crate) const DEFAULT_DELIMITER: &str = "/";

/// Unwrap a required builder field or fail with an input error naming it.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| error::missing_field(field))
}

/// Make sure `path` exists and is a directory.
pub(crate) async fn validate_target_is_dir(path: &Path) -> Result<(), Error> {
    let meta = tokio::fs::metadata(path).await?;
    if meta.is_dir() {
        Ok(())
    } else {
        Err(error::invalid_input(format!(
            "target is not a directory: {}",
            path.display()
        )))
    }
}
