/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Local mirrors of the documents Amazon S3 stores for a bucket.
//!
//! The SDK types are not serializable, these are. They serialize with the same field
//! names S3 and the other AWS SDKs use (`AllowedMethods`, `Grantee`, `Statement`, ...).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// A single cross-origin resource sharing rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CorsRule {
    /// Unique identifier for the rule.
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Headers allowed in a preflight `OPTIONS` request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_headers: Vec<String>,

    /// HTTP methods the origin may execute. Required.
    pub allowed_methods: Vec<String>,

    /// Origins allowed to access the bucket. Required.
    pub allowed_origins: Vec<String>,

    /// Response headers customers may access from their applications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expose_headers: Vec<String>,

    /// Time in seconds a browser may cache the preflight response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<i32>,
}

impl CorsRule {
    /// Convert to the SDK representation, rejecting rules S3 would refuse.
    pub(crate) fn to_sdk(&self) -> Result<aws_sdk_s3::types::CorsRule, Error> {
        if self.allowed_methods.is_empty() {
            return Err(error::invalid_input("CORS rule requires at least one allowed method"));
        }
        if self.allowed_origins.is_empty() {
            return Err(error::invalid_input("CORS rule requires at least one allowed origin"));
        }

        let rule = aws_sdk_s3::types::CorsRule::builder()
            .set_id(self.id.clone())
            .set_allowed_headers(non_empty(&self.allowed_headers))
            .set_allowed_methods(Some(self.allowed_methods.clone()))
            .set_allowed_origins(Some(self.allowed_origins.clone()))
            .set_expose_headers(non_empty(&self.expose_headers))
            .set_max_age_seconds(self.max_age_seconds)
            .build()?;
        Ok(rule)
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

impl From<&aws_sdk_s3::types::CorsRule> for CorsRule {
    fn from(value: &aws_sdk_s3::types::CorsRule) -> Self {
        Self {
            id: value.id().map(str::to_owned),
            allowed_headers: value.allowed_headers().to_vec(),
            allowed_methods: value.allowed_methods().to_vec(),
            allowed_origins: value.allowed_origins().to_vec(),
            expose_headers: value.expose_headers().to_vec(),
            max_age_seconds: value.max_age_seconds(),
        }
    }
}

/// The full set of CORS rules attached to a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfiguration {
    /// The rules, evaluated by S3 in order.
    #[serde(rename = "CORSRules")]
    pub cors_rules: Vec<CorsRule>,
}

impl CorsConfiguration {
    /// Create a configuration holding the given rules.
    pub fn new(cors_rules: Vec<CorsRule>) -> Self {
        Self { cors_rules }
    }

    pub(crate) fn to_sdk(&self) -> Result<aws_sdk_s3::types::CorsConfiguration, Error> {
        if self.cors_rules.is_empty() {
            return Err(error::invalid_input(
                "CORS configuration requires at least one rule",
            ));
        }
        let rules = self
            .cors_rules
            .iter()
            .map(CorsRule::to_sdk)
            .collect::<Result<Vec<_>, _>>()?;
        let configuration = aws_sdk_s3::types::CorsConfiguration::builder()
            .set_cors_rules(Some(rules))
            .build()?;
        Ok(configuration)
    }
}

/// Access control list of a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketAcl {
    /// Owner of the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<AclOwner>,

    /// Grants in the order S3 returned them.
    pub grants: Vec<AclGrant>,
}

/// Bucket owner as reported in an ACL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AclOwner {
    /// Canonical user ID.
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name, only returned in some regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl From<&aws_sdk_s3::types::Owner> for AclOwner {
    fn from(value: &aws_sdk_s3::types::Owner) -> Self {
        Self {
            id: value.id().map(str::to_owned),
            display_name: value.display_name().map(str::to_owned),
        }
    }
}

/// A single permission granted to a grantee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AclGrant {
    /// Who the permission is granted to.
    pub grantee: AclGrantee,

    /// The permission, e.g. `FULL_CONTROL` or `READ`.
    pub permission: String,
}

impl From<&aws_sdk_s3::types::Grant> for AclGrant {
    fn from(value: &aws_sdk_s3::types::Grant) -> Self {
        Self {
            grantee: value.grantee().map(AclGrantee::from).unwrap_or_default(),
            permission: value
                .permission()
                .map(|permission| permission.as_str().to_owned())
                .unwrap_or_default(),
        }
    }
}

/// The receiving end of an ACL grant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AclGrantee {
    /// `CanonicalUser`, `AmazonCustomerByEmail` or `Group`.
    #[serde(rename = "Type")]
    pub grantee_type: String,

    /// Canonical user ID.
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name of the grantee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Email address of the grantee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// URI of a predefined group.
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl From<&aws_sdk_s3::types::Grantee> for AclGrantee {
    fn from(value: &aws_sdk_s3::types::Grantee) -> Self {
        Self {
            grantee_type: value.r#type().as_str().to_owned(),
            id: value.id().map(str::to_owned),
            display_name: value.display_name().map(str::to_owned),
            email_address: value.email_address().map(str::to_owned),
            uri: value.uri().map(str::to_owned),
        }
    }
}

/// Policy language version accepted by S3 bucket policies.
pub const POLICY_VERSION: &str = "2012-10-17";

/// An IAM style access policy document attached to a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// Policy language version.
    pub version: String,

    /// Optional policy identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The policy statements.
    pub statement: Vec<PolicyStatement>,
}

/// A single statement of a [`PolicyDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    /// Statement identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// Whether the statement allows or denies access.
    pub effect: Effect,

    /// Either `"*"` or an object such as `{"AWS": [...]}`.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub principal: serde_json::Value,

    /// Actions covered by the statement.
    pub action: OneOrMany,

    /// Resources covered by the statement.
    pub resource: OneOrMany,
}

/// Effect of a [`PolicyStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Grant access.
    Allow,
    /// Deny access.
    Deny,
}

/// A policy element that is either a single string or a list of strings.
///
/// S3 normalizes single-element lists to a bare string when returning a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// A single value.
    One(String),
    /// A list of values.
    Many(Vec<String>),
}

impl OneOrMany {
    /// The values as a slice, regardless of representation.
    pub fn as_slice(&self) -> &[String] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    /// Whether `value` is one of the values.
    pub fn contains(&self, value: &str) -> bool {
        self.as_slice().iter().any(|v| v == value)
    }
}

impl PolicyDocument {
    /// A policy granting anonymous read access to every object in `bucket`.
    pub fn public_read(bucket: &str) -> Self {
        Self {
            version: POLICY_VERSION.to_owned(),
            id: None,
            statement: vec![PolicyStatement {
                sid: Some("AddPerm".to_owned()),
                effect: Effect::Allow,
                principal: serde_json::Value::String("*".to_owned()),
                action: OneOrMany::Many(vec!["s3:GetObject".to_owned()]),
                resource: OneOrMany::One(format!("arn:aws:s3:::{bucket}/*")),
            }],
        }
    }

    /// Serialize the document to the compact JSON text S3 expects.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for PolicyDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}
