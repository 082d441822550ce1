/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_bucket_manager::tour::{self, TourSettings};
use aws_sdk_s3::operation::{
    create_bucket::CreateBucketOutput,
    delete_bucket::{DeleteBucketError, DeleteBucketOutput},
    delete_bucket_cors::DeleteBucketCorsOutput,
    delete_bucket_policy::DeleteBucketPolicyOutput,
    delete_object::DeleteObjectOutput,
    delete_objects::DeleteObjectsOutput,
    get_bucket_acl::GetBucketAclOutput,
    get_bucket_cors::{GetBucketCorsError, GetBucketCorsOutput},
    get_bucket_policy::{GetBucketPolicyError, GetBucketPolicyOutput},
    get_object::GetObjectOutput,
    list_buckets::ListBucketsOutput,
    list_objects_v2::ListObjectsV2Output,
    put_bucket_acl::PutBucketAclOutput,
    put_bucket_cors::PutBucketCorsOutput,
    put_bucket_policy::{PutBucketPolicyError, PutBucketPolicyOutput},
    put_object::PutObjectOutput,
};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{
    Bucket, BucketCannedAcl, DeletedObject, Grant, Grantee, Object, Permission, Type,
};
use aws_smithy_mocks_experimental::{mock, Rule, RuleMode};
use test_common::{create_test_dir, error_meta, file_names, mock_client_with_stubbed_http_client};

const BUCKET: &str = "dms-nasdaq";
const PUBLIC_READ_POLICY: &str = r#"{"Version":"2012-10-17","Statement":[{"Sid":"AddPerm","Effect":"Allow","Principal":"*","Action":["s3:GetObject"],"Resource":"arn:aws:s3:::dms-nasdaq/*"}]}"#;

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

fn list_objects_rule(keys: &'static [&'static str]) -> Rule {
    mock!(aws_sdk_s3::Client::list_objects_v2)
        .match_requests(|r| r.bucket() == Some(BUCKET))
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

fn put_object_rule(key: &'static str) -> Rule {
    mock!(aws_sdk_s3::Client::put_object)
        .match_requests(move |r| r.key() == Some(key))
        .then_output(|| PutObjectOutput::builder().build())
}

fn get_bucket_acl_rule() -> Rule {
    mock!(aws_sdk_s3::Client::get_bucket_acl).then_output(|| {
        let grantee = Grantee::builder()
            .r#type(Type::CanonicalUser)
            .id("owner-id")
            .build()
            .unwrap();
        GetBucketAclOutput::builder()
            .grants(
                Grant::builder()
                    .grantee(grantee)
                    .permission(Permission::FullControl)
                    .build(),
            )
            .build()
    })
}

fn no_cors_rule() -> Rule {
    mock!(aws_sdk_s3::Client::get_bucket_cors)
        .then_error(|| GetBucketCorsError::generic(error_meta("NoSuchCORSConfiguration")))
}

fn no_policy_rule() -> Rule {
    mock!(aws_sdk_s3::Client::get_bucket_policy)
        .then_error(|| GetBucketPolicyError::generic(error_meta("NoSuchBucketPolicy")))
}

/// Every request the tour sends for a bucket that starts out with three uploaded files,
/// in order.
fn full_tour_rules() -> Vec<Rule> {
    vec![
        // bucket creation
        list_buckets_rule(&[]),
        mock!(aws_sdk_s3::Client::create_bucket)
            .match_requests(|r| {
                r.bucket() == Some(BUCKET) && r.create_bucket_configuration().is_none()
            })
            .then_output(|| CreateBucketOutput::builder().build()),
        list_buckets_rule(&[BUCKET]),
        // upload
        list_objects_rule(&[]),
        put_object_rule("AAPL.csv"),
        put_object_rule("AMZN.csv"),
        put_object_rule("TSLA.csv"),
        list_objects_rule(&["AAPL.csv", "AMZN.csv", "TSLA.csv"]),
        // deletion of the first two objects
        mock!(aws_sdk_s3::Client::delete_objects)
            .match_requests(|r| {
                let keys: Vec<_> = r
                    .delete()
                    .map(|d| d.objects().iter().map(|o| o.key()).collect())
                    .unwrap_or_default();
                keys == ["AAPL.csv", "AMZN.csv"]
            })
            .then_output(|| {
                DeleteObjectsOutput::builder()
                    .deleted(DeletedObject::builder().key("AAPL.csv").build())
                    .deleted(DeletedObject::builder().key("AMZN.csv").build())
                    .build()
            }),
        list_objects_rule(&["TSLA.csv"]),
        // download
        mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.key() == Some("TSLA.csv"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .body(ByteStream::from_static(b"Date,Open\n2024-01-02,250.08\n"))
                    .build()
            }),
        // ACL
        get_bucket_acl_rule(),
        mock!(aws_sdk_s3::Client::put_bucket_acl)
            .match_requests(|r| r.acl() == Some(&BucketCannedAcl::Private))
            .then_output(|| PutBucketAclOutput::builder().build()),
        get_bucket_acl_rule(),
        // CORS
        no_cors_rule(),
        mock!(aws_sdk_s3::Client::put_bucket_cors)
            .then_output(|| PutBucketCorsOutput::builder().build()),
        mock!(aws_sdk_s3::Client::get_bucket_cors).then_output(|| {
            GetBucketCorsOutput::builder()
                .cors_rules(
                    aws_sdk_s3::types::CorsRule::builder()
                        .allowed_methods("GET")
                        .allowed_origins("*")
                        .build()
                        .unwrap(),
                )
                .build()
        }),
        mock!(aws_sdk_s3::Client::delete_bucket_cors)
            .then_output(|| DeleteBucketCorsOutput::builder().build()),
        no_cors_rule(),
        // policy
        no_policy_rule(),
        mock!(aws_sdk_s3::Client::put_bucket_policy)
            .match_requests(|r| r.policy() == Some(PUBLIC_READ_POLICY))
            .then_output(|| PutBucketPolicyOutput::builder().build()),
        mock!(aws_sdk_s3::Client::get_bucket_policy).then_output(|| {
            GetBucketPolicyOutput::builder()
                .policy(PUBLIC_READ_POLICY)
                .build()
        }),
        mock!(aws_sdk_s3::Client::delete_bucket_policy)
            .then_output(|| DeleteBucketPolicyOutput::builder().build()),
        no_policy_rule(),
        // teardown, a single remaining object goes through DeleteObject
        list_objects_rule(&["TSLA.csv"]),
        mock!(aws_sdk_s3::Client::delete_object)
            .match_requests(|r| r.key() == Some("TSLA.csv"))
            .then_output(|| DeleteObjectOutput::builder().build()),
        mock!(aws_sdk_s3::Client::delete_bucket)
            .match_requests(|r| r.bucket() == Some(BUCKET))
            .then_output(|| DeleteBucketOutput::builder().build()),
    ]
}

#[tokio::test]
async fn test_full_tour() {
    let upload_dir = create_test_dir(
        Some("files_to_upload"),
        vec![("AAPL.csv", 16), ("AMZN.csv", 16), ("TSLA.csv", 16)],
    );
    let download_root = tempfile::tempdir().unwrap();
    let settings = TourSettings {
        upload_dir: upload_dir.path().to_path_buf(),
        download_dir: download_root.path().join("downloaded_files"),
        ..Default::default()
    };

    let rules = full_tour_rules();
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::Sequential, &rules);
    let config = aws_s3_bucket_manager::Config::builder()
        .client(client)
        .build();
    let sut = aws_s3_bucket_manager::Client::new(config);

    let mut transcript = Vec::new();
    let report = tour::run(&sut, &settings, &mut transcript).await.unwrap();
    let transcript = String::from_utf8(transcript).unwrap();

    assert!(report.is_success(), "failed: {:?}", report.failed_steps());
    assert!(transcript.starts_with(&format!(
        "\n{}\nBEGINNING OF AMAZON S3 BUCKET FUNCTIONALITIES DEMONSTRATION\n",
        "=".repeat(60)
    )));
    for line in [
        r#"List of buckets (BEFORE): []"#,
        r#"Creating bucket named dms-nasdaq..."#,
        r#"List of buckets (AFTER): ["dms-nasdaq"]"#,
        r#"List of objects in bucket (BEFORE): []"#,
        r#"List of objects in bucket (AFTER): ["AAPL.csv","AMZN.csv","TSLA.csv"]"#,
        r#"Deleting objects ["AAPL.csv","AMZN.csv"] from bucket..."#,
        r#"Objects in bucket after deletion: ["TSLA.csv"]"#,
        r#"Applying canned ACL 'private'..."#,
        r#"Bucket dms-nasdaq has CORS rules (BEFORE ADDITION): []."#,
        r#"Bucket dms-nasdaq has CORS rules (AFTER ADDITION): [{"AllowedMethods":["GET"],"AllowedOrigins":["*"]}]."#,
        r#"Bucket dms-nasdaq has CORS rules (AFTER DELETION): []."#,
        r#"Bucket dms-nasdaq has policy (BEFORE ADDITION): null."#,
        r#"Bucket dms-nasdaq has policy (AFTER DELETION): null."#,
        r#"Deleted bucket dms-nasdaq and its 1 objects."#,
    ] {
        assert!(transcript.contains(line), "missing {line:?} in:\n{transcript}");
    }
    assert!(transcript.contains(&format!(
        "Bucket dms-nasdaq has policy (AFTER ADDITION): {}.",
        serde_json::to_string(PUBLIC_READ_POLICY).unwrap()
    )));
    assert!(transcript.contains(r#"policy (AFTER ADDITION): "{\"Version\":\"2012-10-17\""#));
    assert!(transcript.contains(r#""Permission":"FULL_CONTROL""#));
    assert!(transcript.contains(&format!(
        "Found 3 files in {}: [\"AAPL.csv\",\"AMZN.csv\",\"TSLA.csv\"]",
        upload_dir.path().display()
    )));
    assert!(transcript.contains(&format!(
        "Downloaded 1 objects to {}",
        settings.download_dir.display()
    )));
    assert!(transcript.ends_with("END OF AMAZON S3 BUCKET FUNCTIONALITIES DEMONSTRATION\n"));

    assert_eq!(vec!["TSLA.csv"], file_names(&settings.download_dir));
    assert_eq!(
        "Date,Open\n2024-01-02,250.08\n",
        std::fs::read_to_string(settings.download_dir.join("TSLA.csv")).unwrap()
    );
}

#[tokio::test]
async fn test_tour_continues_after_failed_step() {
    let upload_dir = create_test_dir(Some("files_to_upload"), vec![]);
    let download_root = tempfile::tempdir().unwrap();
    let settings = TourSettings {
        upload_dir: upload_dir.path().to_path_buf(),
        download_dir: download_root.path().join("downloaded_files"),
        ..Default::default()
    };

    let rules = [
        list_buckets_rule(&[BUCKET]),
        mock!(aws_sdk_s3::Client::create_bucket)
            .then_output(|| CreateBucketOutput::builder().build()),
        list_objects_rule(&[]),
        get_bucket_acl_rule(),
        mock!(aws_sdk_s3::Client::put_bucket_acl)
            .then_output(|| PutBucketAclOutput::builder().build()),
        no_cors_rule(),
        mock!(aws_sdk_s3::Client::put_bucket_cors)
            .then_output(|| PutBucketCorsOutput::builder().build()),
        mock!(aws_sdk_s3::Client::delete_bucket_cors)
            .then_output(|| DeleteBucketCorsOutput::builder().build()),
        no_policy_rule(),
        // blocked by the account's public access settings
        mock!(aws_sdk_s3::Client::put_bucket_policy)
            .then_error(|| PutBucketPolicyError::generic(error_meta("AccessDenied"))),
        mock!(aws_sdk_s3::Client::delete_bucket_policy)
            .then_output(|| DeleteBucketPolicyOutput::builder().build()),
        mock!(aws_sdk_s3::Client::delete_bucket)
            .then_output(|| DeleteBucketOutput::builder().build()),
    ];
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::MatchAny, &rules);
    let config = aws_s3_bucket_manager::Config::builder()
        .client(client)
        .build();
    let sut = aws_s3_bucket_manager::Client::new(config);

    let mut transcript = Vec::new();
    let report = tour::run(&sut, &settings, &mut transcript).await.unwrap();
    let transcript = String::from_utf8(transcript).unwrap();

    assert!(!report.is_success());
    assert_eq!(&["put bucket policy"], report.failed_steps());
    assert!(transcript.contains("Found 0 files in"));
    assert!(transcript.contains("No objects to delete."));
    assert!(transcript.contains("Bucket dms-nasdaq has policy (AFTER ADDITION): null."));
    assert!(transcript.contains("Deleted bucket dms-nasdaq and its 0 objects."));
    assert!(transcript.ends_with("END OF AMAZON S3 BUCKET FUNCTIONALITIES DEMONSTRATION\n"));
}

#[tokio::test]
async fn test_tour_reports_failed_bucket_deletion() {
    let upload_dir = create_test_dir(Some("files_to_upload"), vec![]);
    let download_root = tempfile::tempdir().unwrap();
    let settings = TourSettings {
        upload_dir: upload_dir.path().to_path_buf(),
        download_dir: download_root.path().join("downloaded_files"),
        objects_to_delete: 0,
        ..Default::default()
    };

    let rules = [
        list_buckets_rule(&[BUCKET]),
        mock!(aws_sdk_s3::Client::create_bucket)
            .then_output(|| CreateBucketOutput::builder().build()),
        list_objects_rule(&[]),
        get_bucket_acl_rule(),
        mock!(aws_sdk_s3::Client::put_bucket_acl)
            .then_output(|| PutBucketAclOutput::builder().build()),
        no_cors_rule(),
        mock!(aws_sdk_s3::Client::put_bucket_cors)
            .then_output(|| PutBucketCorsOutput::builder().build()),
        mock!(aws_sdk_s3::Client::delete_bucket_cors)
            .then_output(|| DeleteBucketCorsOutput::builder().build()),
        no_policy_rule(),
        mock!(aws_sdk_s3::Client::put_bucket_policy)
            .then_output(|| PutBucketPolicyOutput::builder().build()),
        mock!(aws_sdk_s3::Client::delete_bucket_policy)
            .then_output(|| DeleteBucketPolicyOutput::builder().build()),
        mock!(aws_sdk_s3::Client::delete_bucket)
            .then_error(|| DeleteBucketError::generic(error_meta("AccessDenied"))),
    ];
    let client = mock_client_with_stubbed_http_client!(aws_sdk_s3, RuleMode::MatchAny, &rules);
    let config = aws_s3_bucket_manager::Config::builder()
        .client(client)
        .build();
    let sut = aws_s3_bucket_manager::Client::new(config);

    let mut transcript = Vec::new();
    let report = tour::run(&sut, &settings, &mut transcript).await.unwrap();
    let transcript = String::from_utf8(transcript).unwrap();

    assert_eq!(&["delete bucket with contents"], report.failed_steps());
    assert!(transcript.contains("Could not delete bucket dms-nasdaq."));
    assert!(!transcript.contains("Deleted bucket"));
    assert!(transcript.ends_with("END OF AMAZON S3 BUCKET FUNCTIONALITIES DEMONSTRATION\n"));
}
