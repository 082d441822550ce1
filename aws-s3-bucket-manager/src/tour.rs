/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A guided tour through the lifecycle of a bucket.
//!
//! The tour creates a bucket, uploads the files of a local directory, deletes and downloads
//! some of them, reads and changes the bucket's ACL, CORS rules and policy, and finally
//! deletes the bucket with everything in it. Every step prints what it did to a transcript.
//!
//! A failing step is logged and the tour moves on with an empty result, so a single
//! rejected request (e.g. a public bucket policy blocked by the account's public access
//! settings) does not hide the remaining steps.

use std::io::Write;
use std::path::PathBuf;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::BucketCannedAcl;
use serde::Serialize;

use crate::error::Error;
use crate::operation::object::discover_files;
use crate::types::{CorsRule, PolicyDocument};
use crate::Client;

const BANNER_WIDTH: usize = 60;

/// Settings for a tour run
#[derive(Debug, Clone)]
pub struct TourSettings {
    /// Name of the bucket to create and delete again.
    pub bucket: String,

    /// Region to create the bucket in. Defaults to the region of the S3 client.
    pub region: Option<String>,

    /// Directory holding the files to upload.
    pub upload_dir: PathBuf,

    /// Directory downloaded objects are written to.
    pub download_dir: PathBuf,

    /// How many objects to delete individually before downloading the rest.
    pub objects_to_delete: usize,
}

impl Default for TourSettings {
    fn default() -> Self {
        Self {
            bucket: "dms-nasdaq".to_owned(),
            region: None,
            upload_dir: PathBuf::from("./files_to_upload"),
            download_dir: PathBuf::from("./downloaded_files"),
            objects_to_delete: 2,
        }
    }
}

/// Summary of a tour run
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct TourReport {
    /// Steps that failed, in the order they ran
    pub failed_steps: Vec<&'static str>,
}

impl TourReport {
    /// Steps that failed, in the order they ran
    pub fn failed_steps(&self) -> &[&'static str] {
        &self.failed_steps
    }

    /// Whether every step succeeded
    pub fn is_success(&self) -> bool {
        self.failed_steps.is_empty()
    }
}

/// The CORS rule the tour attaches to the bucket.
pub fn demo_cors_rule() -> CorsRule {
    CorsRule {
        allowed_headers: vec!["Authorization".to_owned()],
        allowed_methods: vec!["GET".to_owned(), "PUT".to_owned()],
        allowed_origins: vec!["*".to_owned()],
        expose_headers: vec!["GET".to_owned(), "PUT".to_owned()],
        max_age_seconds: Some(3000),
        ..Default::default()
    }
}

/// Run the tour, writing the transcript to `out`.
///
/// Failing S3 requests do not end the tour, they are recorded in the returned report.
/// Only a failure to write the transcript is returned as an error.
pub async fn run<W: Write>(
    client: &Client,
    settings: &TourSettings,
    out: &mut W,
) -> Result<TourReport, Error> {
    let mut tour = Tour {
        client,
        bucket: settings.bucket.as_str(),
        out,
        report: TourReport::default(),
    };
    tour.banner("Beginning of Amazon S3 bucket functionalities demonstration")?;
    let files = tour.discover(settings).await?;
    tour.create_bucket(settings).await?;
    let objects = tour.upload(files).await?;
    let remaining = tour.delete_some(objects, settings.objects_to_delete).await?;
    tour.download(remaining, settings).await?;
    tour.acl().await?;
    tour.cors().await?;
    tour.policy().await?;
    tour.nuke().await?;
    tour.banner("End of Amazon S3 bucket functionalities demonstration")?;
    Ok(tour.report)
}

struct Tour<'a, W> {
    client: &'a Client,
    bucket: &'a str,
    out: &'a mut W,
    report: TourReport,
}

fn json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl<W: Write> Tour<'_, W> {
    fn banner(&mut self, title: &str) -> Result<(), Error> {
        writeln!(
            self.out,
            "\n{}\n{}",
            "=".repeat(BANNER_WIDTH),
            title.to_uppercase()
        )?;
        Ok(())
    }

    /// Unwrap the result of a step, logging and recording a failure.
    fn outcome<T: Default>(&mut self, step: &'static str, result: Result<T, Error>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => {
                tracing::error!("{step} failed: {}", DisplayErrorContext(&err));
                self.report.failed_steps.push(step);
                T::default()
            }
        }
    }

    async fn list_objects(&mut self) -> Vec<String> {
        let result = self.client.list_objects().bucket(self.bucket).send().await;
        self.outcome("list objects", result)
    }

    async fn create_bucket(&mut self, settings: &TourSettings) -> Result<(), Error> {
        self.banner("Bucket creation + verification")?;

        let result = self.client.list_buckets().send().await;
        let buckets = self.outcome("list buckets", result);
        writeln!(self.out, "List of buckets (BEFORE): {}", json(&buckets))?;

        writeln!(self.out, "Creating bucket named {}...", self.bucket)?;
        let result = self
            .client
            .create_bucket()
            .bucket(self.bucket)
            .set_region(settings.region.clone())
            .send()
            .await;
        self.outcome("create bucket", result);

        let result = self.client.list_buckets().send().await;
        let buckets = self.outcome("list buckets", result);
        writeln!(self.out, "List of buckets (AFTER): {}", json(&buckets))?;
        Ok(())
    }

    async fn discover(&mut self, settings: &TourSettings) -> Result<Vec<PathBuf>, Error> {
        self.banner("Discovering local files to upload")?;
        let result = discover_files(&settings.upload_dir, false).await;
        let files = self.outcome("discover local files", result);
        let names: Vec<_> = files
            .iter()
            .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
            .collect();
        writeln!(
            self.out,
            "Found {} files in {}: {}",
            files.len(),
            settings.upload_dir.display(),
            json(&names)
        )?;
        Ok(files)
    }

    async fn upload(&mut self, files: Vec<PathBuf>) -> Result<Vec<String>, Error> {
        self.banner("Local data transfer to bucket + verification")?;

        let objects = self.list_objects().await;
        writeln!(self.out, "List of objects in bucket (BEFORE): {}", json(&objects))?;

        writeln!(self.out, "Uploading files to bucket...")?;
        for path in files {
            let result = self
                .client
                .upload_object()
                .bucket(self.bucket)
                .path(path)
                .send()
                .await;
            self.outcome("upload object", result);
        }

        let objects = self.list_objects().await;
        writeln!(self.out, "List of objects in bucket (AFTER): {}", json(&objects))?;
        Ok(objects)
    }

    async fn delete_some(
        &mut self,
        objects: Vec<String>,
        count: usize,
    ) -> Result<Vec<String>, Error> {
        self.banner("Object deletion")?;

        let doomed = &objects[..count.min(objects.len())];
        if doomed.is_empty() {
            writeln!(self.out, "No objects to delete.")?;
            return Ok(objects);
        }

        writeln!(self.out, "Deleting objects {} from bucket...", json(doomed))?;
        let result = self
            .client
            .delete_objects()
            .bucket(self.bucket)
            .set_keys(doomed.to_vec())
            .send()
            .await;
        self.outcome("delete objects", result);

        let objects = self.list_objects().await;
        writeln!(self.out, "Objects in bucket after deletion: {}", json(&objects))?;
        Ok(objects)
    }

    async fn download(&mut self, keys: Vec<String>, settings: &TourSettings) -> Result<(), Error> {
        self.banner("Download objects from bucket to local folder")?;
        let result = self
            .client
            .download_objects()
            .bucket(self.bucket)
            .set_keys(keys)
            .destination(settings.download_dir.clone())
            .send()
            .await;
        let output = self.outcome("download objects", result);
        writeln!(
            self.out,
            "Downloaded {} objects to {}",
            output.objects_downloaded(),
            settings.download_dir.display()
        )?;
        Ok(())
    }

    async fn acl(&mut self) -> Result<(), Error> {
        self.banner("Get Access Control List (ACL) of a bucket")?;

        let result = self.client.get_bucket_acl().bucket(self.bucket).send().await;
        let acl = self.outcome("get bucket ACL", result);
        writeln!(
            self.out,
            "Bucket {} has ACL grants: {}.",
            self.bucket,
            json(&acl.grants)
        )?;

        writeln!(self.out, "Applying canned ACL 'private'...")?;
        let result = self
            .client
            .put_bucket_acl()
            .bucket(self.bucket)
            .acl(BucketCannedAcl::Private)
            .send()
            .await;
        self.outcome("put bucket ACL", result);

        let result = self.client.get_bucket_acl().bucket(self.bucket).send().await;
        let acl = self.outcome("get bucket ACL", result);
        writeln!(
            self.out,
            "Bucket {} has ACL grants (AFTER UPDATE): {}.",
            self.bucket,
            json(&acl.grants)
        )?;
        Ok(())
    }

    async fn print_cors(&mut self, stage: &str) -> Result<(), Error> {
        let result = self.client.get_bucket_cors().bucket(self.bucket).send().await;
        let rules = self.outcome("get bucket CORS", result);
        writeln!(
            self.out,
            "Bucket {} has CORS rules ({stage}): {}.",
            self.bucket,
            json(&rules)
        )?;
        Ok(())
    }

    async fn cors(&mut self) -> Result<(), Error> {
        self.banner("Testing CORS configuration")?;
        self.print_cors("BEFORE ADDITION").await?;

        let result = self
            .client
            .put_bucket_cors()
            .bucket(self.bucket)
            .rule(demo_cors_rule())
            .send()
            .await;
        self.outcome("put bucket CORS", result);
        self.print_cors("AFTER ADDITION").await?;

        let result = self
            .client
            .delete_bucket_cors()
            .bucket(self.bucket)
            .send()
            .await;
        self.outcome("delete bucket CORS", result);
        self.print_cors("AFTER DELETION").await
    }

    async fn print_policy(&mut self, stage: &str) -> Result<(), Error> {
        let result = self
            .client
            .get_bucket_policy()
            .bucket(self.bucket)
            .send()
            .await;
        let policy = self.outcome("get bucket policy", result);
        writeln!(
            self.out,
            "Bucket {} has policy ({stage}): {}.",
            self.bucket,
            json(&policy)
        )?;
        Ok(())
    }

    async fn policy(&mut self) -> Result<(), Error> {
        self.banner("Testing bucket policy configuration")?;
        self.print_policy("BEFORE ADDITION").await?;

        let document = PolicyDocument::public_read(self.bucket);
        let result = match self.client.put_bucket_policy().bucket(self.bucket).document(&document) {
            Ok(builder) => builder.send().await,
            Err(err) => Err(err),
        };
        self.outcome("put bucket policy", result);
        self.print_policy("AFTER ADDITION").await?;

        let result = self
            .client
            .delete_bucket_policy()
            .bucket(self.bucket)
            .send()
            .await;
        self.outcome("delete bucket policy", result);
        self.print_policy("AFTER DELETION").await
    }

    async fn nuke(&mut self) -> Result<(), Error> {
        self.banner("Delete bucket and all its contents")?;
        let result = self
            .client
            .delete_bucket_with_contents()
            .bucket(self.bucket)
            .send()
            .await;
        match result {
            Ok(output) => writeln!(
                self.out,
                "Deleted bucket {} and its {} objects.",
                self.bucket,
                output.objects_deleted()
            )?,
            Err(err) => {
                self.outcome::<()>("delete bucket with contents", Err(err));
                writeln!(self.out, "Could not delete bucket {}.", self.bucket)?;
            }
        }
        Ok(())
    }
}
