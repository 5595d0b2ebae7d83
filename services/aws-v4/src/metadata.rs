use awsauth_core::time::format_date;
use awsauth_core::time::format_iso8601;
use awsauth_core::time::parse_iso8601;
use awsauth_core::Error;
use awsauth_core::Result;

use crate::constants::AWS4_HMAC_SHA256;
use crate::constants::AWS4_REQUEST;

/// Metadata collected while signing a single request.
///
/// A new value is created for every signing call and threaded through the
/// pipeline by reference. Timestamp and scope are computed together in
/// [`SigningMetadata::new`], so the scope date always matches the
/// timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningMetadata {
    /// Signing algorithm, always `AWS4-HMAC-SHA256`.
    pub algorithm: String,
    /// Signing time in ISO 8601 basic format: `20110909T233600Z`.
    pub timestamp_full: String,
    /// Date part of the signing time: `20110909`.
    pub timestamp_date: String,
    /// Region the request is scoped to.
    pub region: String,
    /// Service the request is scoped to.
    pub service: String,
    /// Credential scope: `20110909/us-east-1/iam/aws4_request`.
    pub credential_scope: String,
    /// Sorted, `;` joined names of the headers included in the signature.
    ///
    /// Empty until the canonical request has been built.
    pub signed_headers: String,
}

impl SigningMetadata {
    /// Build metadata from the `x-amz-date` value of the request.
    pub fn new(timestamp: &str, region: &str, service: &str) -> Result<Self> {
        if region.is_empty() {
            return Err(Error::config_invalid("region is required for signing"));
        }
        if service.is_empty() {
            return Err(Error::config_invalid("service is required for signing"));
        }

        let time = parse_iso8601(timestamp)?;
        let timestamp_date = format_date(time);
        let credential_scope = format!("{timestamp_date}/{region}/{service}/{AWS4_REQUEST}");

        Ok(Self {
            algorithm: AWS4_HMAC_SHA256.to_string(),
            timestamp_full: format_iso8601(time),
            timestamp_date,
            region: region.to_string(),
            service: service.to_string(),
            credential_scope,
            signed_headers: String::new(),
        })
    }
}
