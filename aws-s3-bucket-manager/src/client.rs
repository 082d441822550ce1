/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::{acl, bucket, cors, object, policy};
use crate::Config;
use std::sync::Arc;

/// Bucket manager client for Amazon Simple Storage Service.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }
}

impl Client {
    /// Creates a new client from a bucket manager config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Create a bucket, optionally in a specific region.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_bucket_manager::error::Error;
    ///
    /// async fn create(client: &aws_s3_bucket_manager::Client) -> Result<(), Error> {
    ///     client
    ///         .create_bucket()
    ///         .bucket("my-bucket")
    ///         .region("eu-west-1")
    ///         .send()
    ///         .await
    /// }
    /// ```
    pub fn create_bucket(&self) -> bucket::builders::CreateBucketFluentBuilder {
        bucket::builders::CreateBucketFluentBuilder::new(self.handle.clone())
    }

    /// List the names of all buckets owned by the caller.
    pub fn list_buckets(&self) -> bucket::builders::ListBucketsFluentBuilder {
        bucket::builders::ListBucketsFluentBuilder::new(self.handle.clone())
    }

    /// Check whether a bucket is among the buckets owned by the caller.
    pub fn bucket_exists(&self) -> bucket::builders::BucketExistsFluentBuilder {
        bucket::builders::BucketExistsFluentBuilder::new(self.handle.clone())
    }

    /// Delete an empty bucket.
    pub fn delete_bucket(&self) -> bucket::builders::DeleteBucketFluentBuilder {
        bucket::builders::DeleteBucketFluentBuilder::new(self.handle.clone())
    }

    /// Delete every object in a bucket and then the bucket itself.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_bucket_manager::error::Error;
    ///
    /// async fn nuke(client: &aws_s3_bucket_manager::Client) -> Result<(), Error> {
    ///     let output = client
    ///         .delete_bucket_with_contents()
    ///         .bucket("my-bucket")
    ///         .send()
    ///         .await?;
    ///     println!("removed {} objects", output.objects_deleted());
    ///     Ok(())
    /// }
    /// ```
    pub fn delete_bucket_with_contents(
        &self,
    ) -> bucket::builders::DeleteBucketWithContentsFluentBuilder {
        bucket::builders::DeleteBucketWithContentsFluentBuilder::new(self.handle.clone())
    }

    /// Upload a single local file.
    pub fn upload_object(&self) -> object::builders::UploadObjectFluentBuilder {
        object::builders::UploadObjectFluentBuilder::new(self.handle.clone())
    }

    /// Upload the files of a local directory.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use aws_s3_bucket_manager::error::Error;
    ///
    /// async fn upload_directory(
    ///     client: &aws_s3_bucket_manager::Client,
    ///     source: &Path,
    /// ) -> Result<(), Error> {
    ///     let output = client
    ///         .upload_objects()
    ///         .bucket("my-bucket")
    ///         .source(source)
    ///         .send()
    ///         .await?;
    ///     println!("uploaded {:?}", output.keys());
    ///     Ok(())
    /// }
    /// ```
    pub fn upload_objects(&self) -> object::builders::UploadObjectsFluentBuilder {
        object::builders::UploadObjectsFluentBuilder::new(self.handle.clone())
    }

    /// List the keys of the objects in a bucket.
    pub fn list_objects(&self) -> object::builders::ListObjectsFluentBuilder {
        object::builders::ListObjectsFluentBuilder::new(self.handle.clone())
    }

    /// Download objects into a local directory.
    pub fn download_objects(&self) -> object::builders::DownloadObjectsFluentBuilder {
        object::builders::DownloadObjectsFluentBuilder::new(self.handle.clone())
    }

    /// Delete one or more objects from a bucket.
    pub fn delete_objects(&self) -> object::builders::DeleteObjectsFluentBuilder {
        object::builders::DeleteObjectsFluentBuilder::new(self.handle.clone())
    }

    /// Read the access control list of a bucket.
    pub fn get_bucket_acl(&self) -> acl::builders::GetBucketAclFluentBuilder {
        acl::builders::GetBucketAclFluentBuilder::new(self.handle.clone())
    }

    /// Replace the access control list of a bucket with a canned ACL.
    pub fn put_bucket_acl(&self) -> acl::builders::PutBucketAclFluentBuilder {
        acl::builders::PutBucketAclFluentBuilder::new(self.handle.clone())
    }

    /// Read the CORS rules of a bucket.
    pub fn get_bucket_cors(&self) -> cors::builders::GetBucketCorsFluentBuilder {
        cors::builders::GetBucketCorsFluentBuilder::new(self.handle.clone())
    }

    /// Replace the CORS configuration of a bucket.
    pub fn put_bucket_cors(&self) -> cors::builders::PutBucketCorsFluentBuilder {
        cors::builders::PutBucketCorsFluentBuilder::new(self.handle.clone())
    }

    /// Remove the CORS configuration of a bucket.
    pub fn delete_bucket_cors(&self) -> cors::builders::DeleteBucketCorsFluentBuilder {
        cors::builders::DeleteBucketCorsFluentBuilder::new(self.handle.clone())
    }

    /// Read the policy of a bucket.
    pub fn get_bucket_policy(&self) -> policy::builders::GetBucketPolicyFluentBuilder {
        policy::builders::GetBucketPolicyFluentBuilder::new(self.handle.clone())
    }

    /// Attach a policy to a bucket.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_bucket_manager::error::Error;
    /// use aws_s3_bucket_manager::types::PolicyDocument;
    ///
    /// async fn make_public(client: &aws_s3_bucket_manager::Client) -> Result<(), Error> {
    ///     client
    ///         .put_bucket_policy()
    ///         .bucket("my-bucket")
    ///         .document(&PolicyDocument::public_read("my-bucket"))?
    ///         .send()
    ///         .await
    /// }
    /// ```
    pub fn put_bucket_policy(&self) -> policy::builders::PutBucketPolicyFluentBuilder {
        policy::builders::PutBucketPolicyFluentBuilder::new(self.handle.clone())
    }

    /// Remove the policy of a bucket.
    pub fn delete_bucket_policy(&self) -> policy::builders::DeleteBucketPolicyFluentBuilder {
        policy::builders::DeleteBucketPolicyFluentBuilder::new(self.handle.clone())
    }
}
