/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use aws_s3_bucket_manager::tour::{self, TourSettings};
use clap::Parser;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "bucket_tour")]
#[command(
    about = "Walks a bucket through its lifecycle: create, upload, list, download, delete, ACL, CORS, policy."
)]
pub struct Args {
    /// Name of the bucket to create (and delete again)
    #[arg(long, default_value = "dms-nasdaq")]
    bucket: String,

    /// Directory with the files to upload
    #[arg(long, default_value = "./files_to_upload")]
    upload_dir: PathBuf,

    /// Directory to download objects into
    #[arg(long, default_value = "./downloaded_files")]
    download_dir: PathBuf,

    /// Region to use, overrides the region resolved from the environment
    #[arg(long)]
    region: Option<String>,

    /// Custom endpoint, e.g. an S3 compatible service running locally
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Use path style bucket addressing
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    force_path_style: bool,

    /// Number of objects to delete before downloading the rest
    #[arg(long, default_value_t = 2)]
    objects_to_delete: usize,

    /// dotenv file to load (e.g. AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY) before resolving
    /// credentials. Defaults to `.env` in the working directory, if present.
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Also append log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::io::stdout.and(Mutex::new(file)))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path)?;
        }
        None => {
            if let Ok(path) = dotenvy::dotenv() {
                tracing::debug!("loaded environment from {}", path.display());
            }
        }
    }

    let mut loader = aws_s3_bucket_manager::from_env().force_path_style(args.force_path_style);
    if let Some(region) = &args.region {
        loader = loader.region(region);
    }
    if let Some(endpoint_url) = &args.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    let client = aws_s3_bucket_manager::Client::new(loader.load().await);

    let settings = TourSettings {
        bucket: args.bucket,
        region: args.region,
        upload_dir: args.upload_dir,
        download_dir: args.download_dir,
        objects_to_delete: args.objects_to_delete,
    };

    let mut stdout = std::io::stdout();
    let report = tour::run(&client, &settings, &mut stdout).await?;
    if !report.is_success() {
        tracing::error!("tour finished with failed steps: {:?}", report.failed_steps());
    }

    Ok(())
}
