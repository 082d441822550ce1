/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

use path_clean::PathClean;
use walkdir::WalkDir;

use crate::error::{self, Error};
use crate::operation::DEFAULT_DELIMITER;

/// Regular files under `source`, in a stable (sorted by name) order.
///
/// Only the top level of `source` is visited unless `recursive` is set.
pub(crate) async fn discover_files(source: &Path, recursive: bool) -> Result<Vec<PathBuf>, Error> {
    let source = source.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let mut walker = WalkDir::new(&source).min_depth(1).sort_by_file_name();
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            } else {
                tracing::trace!("not a regular file: {:?}", entry.path());
            }
        }
        Ok::<_, Error>(files)
    })
    .await?
}

/// Build the object key for a file at `relative_path` below the upload root.
pub(super) fn derive_object_key(
    relative_path: &Path,
    key_prefix: Option<&str>,
) -> Result<String, Error> {
    let mut segments = Vec::new();
    for component in relative_path.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str().ok_or_else(|| {
                error::invalid_input(format!("{relative_path:?} is not valid UTF-8"))
            })?),
            _ => {
                return Err(error::invalid_input(format!(
                    "{relative_path:?} is not a plain relative path"
                )))
            }
        }
    }
    let relative_key = segments.join(DEFAULT_DELIMITER);

    let key = match key_prefix {
        Some(prefix) if prefix.is_empty() => relative_key,
        Some(prefix) if prefix.ends_with(DEFAULT_DELIMITER) => format!("{prefix}{relative_key}"),
        Some(prefix) => format!("{prefix}{DEFAULT_DELIMITER}{relative_key}"),
        None => relative_key,
    };
    Ok(key)
}

/// Derive the local path for a given S3 key.
///
/// With `flatten`, only the last segment of the key is kept. Returns `None` for keys that
/// name a "directory" (end in the delimiter).
pub(super) fn local_key_path(
    root_dir: &Path,
    key: &str,
    flatten: bool,
) -> Result<Option<PathBuf>, Error> {
    if key.is_empty() || key.ends_with(DEFAULT_DELIMITER) {
        return Ok(None);
    }

    let relative = if flatten {
        key.rsplit(DEFAULT_DELIMITER).next().unwrap_or(key)
    } else {
        key
    };
    let relative = PathBuf::from(relative.replace(DEFAULT_DELIMITER, MAIN_SEPARATOR_STR)).clean();

    // the resolved path must stay inside the destination directory
    let escapes = relative.is_absolute()
        || !matches!(relative.components().next(), Some(Component::Normal(_)));
    if escapes {
        return Err(error::invalid_input(format!(
            "Unable to download key: '{key}', its relative path resolves outside the target destination directory"
        )));
    }

    Ok(Some(root_dir.join(relative)))
}
