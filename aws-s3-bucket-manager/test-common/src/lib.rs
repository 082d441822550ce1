/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::iter;

use aws_sdk_s3::error::ErrorMetadata;

#[doc(hidden)]
pub use aws_smithy_http_client::test_util::infallible_client_fn;
#[doc(hidden)]
pub use http;

/// Create a mock S3 client from mock rules whose HTTP client answers every request with an
/// empty `200 OK`, so request bodies (e.g. files being uploaded) are never read.
#[macro_export]
macro_rules! mock_client_with_stubbed_http_client {
    ($aws_crate: ident, $rules: expr) => {
        $crate::mock_client_with_stubbed_http_client!(
            $aws_crate,
            aws_smithy_mocks_experimental::RuleMode::Sequential,
            $rules
        )
    };
    ($aws_crate: ident, $rule_mode: expr, $rules: expr) => {{
        let client = aws_smithy_mocks_experimental::mock_client!($aws_crate, $rule_mode, $rules);
        let http_client = $crate::infallible_client_fn(|_req| {
            $crate::http::Response::builder()
                .status(200)
                .body(String::new())
                .unwrap()
        });
        let config = client.config().to_builder().http_client(http_client).build();
        $aws_crate::Client::from_conf(config)
    }};
}

/// Create a directory structure rooted at `recursion_root`, containing files with sizes
/// specified in `files`
///
/// File contents are random alphanumeric characters.
pub fn create_test_dir(recursion_root: Option<&str>, files: Vec<(&str, usize)>) -> tempfile::TempDir {
    let temp_dir = match recursion_root {
        Some(root) => tempfile::TempDir::with_prefix(root).unwrap(),
        None => tempfile::tempdir().unwrap(),
    };

    for (path, size) in files {
        let full_path = temp_dir.path().join(path);
        let parent = full_path.parent().unwrap();

        // Create the parent directories if they don't exist
        std::fs::create_dir_all(parent).unwrap();

        let contents: String = iter::repeat_with(fastrand::alphanumeric)
            .take(size)
            .collect();
        std::fs::write(&full_path, contents).unwrap();
    }

    temp_dir
}

/// Error metadata carrying the given S3 error code, e.g. `NoSuchBucketPolicy`
pub fn error_meta(code: &str) -> ErrorMetadata {
    ErrorMetadata::builder()
        .code(code)
        .message(format!("mock {code}"))
        .build()
}

/// Sorted names of the regular files directly inside `dir`
pub fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(Result::unwrap)
        .filter(|e| e.file_type().unwrap().is_file())
        .map(|e| e.file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}
