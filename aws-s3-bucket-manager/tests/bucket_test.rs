/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_bucket_manager::error::ErrorKind;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::operation::{
    create_bucket::{CreateBucketError, CreateBucketOutput},
    delete_bucket::{DeleteBucketError, DeleteBucketOutput},
    delete_objects::DeleteObjectsOutput,
    list_buckets::ListBucketsOutput,
    list_objects_v2::ListObjectsV2Output,
};
use aws_sdk_s3::types::{Bucket, DeletedObject, Object};
use aws_smithy_mocks_experimental::{mock, Rule, RuleMode};
use test_common::{error_meta, mock_client_with_stubbed_http_client};

fn bucket_manager(client: aws_sdk_s3::Client) -> aws_s3_bucket_manager::Client {
    let config = aws_s3_bucket_manager::Config::builder()
        .client(client)
        .build();
    aws_s3_bucket_manager::Client::new(config)
}

fn list_buckets_rule(names: &'static [&'static str]) -> Rule {
    mock!(aws_sdk_s3::Client::list_buckets).then_output(move || {
        ListBucketsOutput::builder()
            .set_buckets(Some(
                names
                    .iter()
                    .map(|name| Bucket::builder().name(*name).build())
                    .collect(),
            ))
            .build()
    })
}

fn list_objects_rule(bucket: &'static str, keys: &'static [&'static str]) -> Rule {
    mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(move |r| r.bucket() == Some(bucket))
        .then_output(move || {
            ListObjectsV2Output::builder()
                .set_contents(Some(
                    keys.iter()
                        .map(|key| Object::builder().key(*key).build())
                        .collect(),
                ))
                .build()
        })
}

#[tokio::test]
async fn test_create_bucket_in_default_region() {
    let create = mock!(aws_sdk_s3::Client::create_bucket)
        .match_requests(|r| {
            r.bucket() == Some("dms-nasdaq") && r.create_bucket_configuration().is_none()
        })
        .then_output(|| CreateBucketOutput::builder().build());
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&create]);
    let sut = bucket_manager(client);

    sut.create_bucket()
        .bucket("dms-nasdaq")
        .region("us-east-1")
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_bucket_with_location_constraint() {
    let create = mock!(aws_sdk_s3::Client::create_bucket)
        .match_requests(|r| {
            r.create_bucket_configuration()
                .and_then(|c| c.location_constraint())
                .map(|c| c.as_str())
                == Some("eu-west-1")
        })
        .then_output(|| CreateBucketOutput::builder().build());
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&create]);
    let sut = bucket_manager(client);

    sut.create_bucket()
        .bucket("dms-nasdaq")
        .region("eu-west-1")
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_bucket_in_client_region() {
    let create = mock!(aws_sdk_s3::Client::create_bucket)
        .match_requests(|r| {
            r.create_bucket_configuration()
                .and_then(|c| c.location_constraint())
                .map(|c| c.as_str())
                == Some("eu-west-1")
        })
        .then_output(|| CreateBucketOutput::builder().build());
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&create]);
    let s3_config = client
        .config()
        .to_builder()
        .region(Region::from_static("eu-west-1"))
        .build();
    let sut = bucket_manager(aws_sdk_s3::Client::from_conf(s3_config));

    // no explicit region, the bucket goes to the region the client is configured for
    sut.create_bucket().bucket("dms-nasdaq").send().await.unwrap();
}

#[tokio::test]
async fn test_create_bucket_already_owned() {
    let create = mock!(aws_sdk_s3::Client::create_bucket).then_error(|| {
        CreateBucketError::generic(error_meta("BucketAlreadyOwnedByYou"))
    });
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&create]);
    let sut = bucket_manager(client);

    let err = sut
        .create_bucket()
        .bucket("dms-nasdaq")
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::AlreadyExists, err.kind());
    assert_eq!(Some("BucketAlreadyOwnedByYou"), err.code());
}

#[tokio::test]
async fn test_create_bucket_requires_name() {
    let no_rules: &[&Rule] = &[];
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, no_rules);
    let sut = bucket_manager(client);

    let err = sut.create_bucket().send().await.unwrap_err();
    assert_eq!(&ErrorKind::InputInvalid, err.kind());
}

#[tokio::test]
async fn test_list_buckets() {
    let list = list_buckets_rule(&["alpha", "dms-nasdaq"]);
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&list]);
    let sut = bucket_manager(client);

    let names = sut.list_buckets().send().await.unwrap();
    assert_eq!(vec!["alpha", "dms-nasdaq"], names);
}

#[tokio::test]
async fn test_bucket_exists() {
    let list = list_buckets_rule(&["alpha", "dms-nasdaq"]);
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::MatchAny, &[&list]);
    let sut = bucket_manager(client);

    assert!(sut.bucket_exists().bucket("dms-nasdaq").send().await.unwrap());
    assert!(!sut.bucket_exists().bucket("dms-nyse").send().await.unwrap());
}

#[tokio::test]
async fn test_delete_non_empty_bucket() {
    let delete = mock!(aws_sdk_s3::Client::delete_bucket)
        .then_error(|| DeleteBucketError::generic(error_meta("BucketNotEmpty")));
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&delete]);
    let sut = bucket_manager(client);

    let err = sut
        .delete_bucket()
        .bucket("dms-nasdaq")
        .send()
        .await
        .unwrap_err();
    assert_eq!(&ErrorKind::BucketNotEmpty, err.kind());
}

#[tokio::test]
async fn test_delete_bucket_with_contents() {
    let list = list_objects_rule("dms-nasdaq", &["AAPL.csv", "AMZN.csv", "TSLA.csv"]);
    let delete_objects = mock!(aws_sdk_s3::Client::delete_objects)
        .match_requests(|r| {
            let delete = r.delete().expect("delete set");
            delete.quiet() == Some(false) && delete.objects().len() == 3
        })
        .then_output(|| {
            DeleteObjectsOutput::builder()
                .set_deleted(Some(
                    ["AAPL.csv", "AMZN.csv", "TSLA.csv"]
                        .iter()
                        .map(|key| DeletedObject::builder().key(*key).build())
                        .collect(),
                ))
                .build()
        });
    let delete_bucket = mock!(aws_sdk_s3::Client::delete_bucket)
        .match_requests(|r| r.bucket() == Some("dms-nasdaq"))
        .then_output(|| DeleteBucketOutput::builder().build());
    let client = mock_client_with_stubbed_http_client!(
        aws_sdk_s3,
        &[&list, &delete_objects, &delete_bucket]
    );
    let sut = bucket_manager(client);

    let output = sut
        .delete_bucket_with_contents()
        .bucket("dms-nasdaq")
        .send()
        .await
        .unwrap();
    assert_eq!(3, output.objects_deleted());
}

#[tokio::test]
async fn test_delete_empty_bucket_with_contents() {
    let list = list_objects_rule("dms-nasdaq", &[]);
    let delete_bucket = mock!(aws_sdk_s3::Client::delete_bucket)
        .then_output(|| DeleteBucketOutput::builder().build());
    // no DeleteObjects request is expected for an empty bucket
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, &[&list, &delete_bucket]);
    let sut = bucket_manager(client);

    let output = sut
        .delete_bucket_with_contents()
        .bucket("dms-nasdaq")
        .send()
        .await
        .unwrap();
    assert_eq!(0, output.objects_deleted());
}
