use std::fmt::Write;

use awsauth_core::hash::hex_hmac_sha256;
use awsauth_core::hash::hmac_sha256;
use awsauth_core::time::format_iso8601;
use awsauth_core::time::now;
use awsauth_core::time::DateTime;
use awsauth_core::utils::Redact;
use awsauth_core::Error;
use awsauth_core::Result;
use awsauth_core::SignRequest;
use awsauth_core::SigningRequest;
use http::header;
use http::request::Parts;
use http::HeaderName;
use http::HeaderValue;
use log::debug;

use crate::canonical_request::hashed_canonical_request;
use crate::constants::AWS4_REQUEST;
use crate::constants::DEFAULT_CONTENT_TYPE;
use crate::constants::X_AMZ_DATE;
use crate::constants::X_AMZ_SECURITY_TOKEN;
use crate::infer_service_and_region;
use crate::Config;
use crate::Credential;
use crate::SigningMetadata;

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Clone, Debug)]
pub struct RequestSigner {
    service: String,
    region: String,
    sign_security_token: bool,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new builder for AWS V4 signer.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
            sign_security_token: false,

            time: None,
        }
    }

    /// Create a signer from config.
    ///
    /// Fails if region or service is missing.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let region = cfg
            .region
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("region is missing in config"))?;
        let service = cfg
            .service
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("service is missing in config"))?;
        debug!("signer: service: {service}, region: {region}");

        Ok(Self::new(service, region).with_security_token_signed(cfg.sign_security_token))
    }

    /// Create a signer with service and region inferred from an AWS
    /// endpoint host like `sqs.us-west-2.amazonaws.com`.
    pub fn from_host(host: &str) -> Result<Self> {
        let (service, region) = infer_service_and_region(host).ok_or_else(|| {
            Error::config_invalid(format!(
                "can't infer service and region from host {host:?}"
            ))
        })?;
        debug!("signer: inferred service: {service}, region: {region} from {host}");

        Ok(Self::new(&service, &region))
    }

    /// Include `x-amz-security-token` in the signed headers.
    pub fn with_security_token_signed(mut self, signed: bool) -> Self {
        self.sign_security_token = signed;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn sign_signing_request(
        &self,
        req: &mut SigningRequest,
        body: &[u8],
        cred: &Credential,
    ) -> Result<()> {
        prepare_request(req, self.time.unwrap_or_else(now))?;

        let mut meta = SigningMetadata::new(
            req.header_get_or_default(X_AMZ_DATE)?,
            &self.region,
            &self.service,
        )?;
        debug!(
            "calculated scope: {}, access key: {}",
            meta.credential_scope,
            Redact::from(cred.access_key_id())
        );

        if self.sign_security_token {
            insert_security_token(req, cred)?;
        }

        let hashed_creq = hashed_canonical_request(req, body, &mut meta, self.sign_security_token)?;

        let string_to_sign = string_to_sign(&hashed_creq, &meta)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = generate_signing_key(
            cred.secret_access_key(),
            &meta.timestamp_date,
            &meta.region,
            &meta.service,
        );
        let signature = signature(&signing_key, &string_to_sign);

        let mut authorization =
            HeaderValue::from_str(&authorization_header(cred.access_key_id(), &signature, &meta))?;
        authorization.set_sensitive(true);
        req.headers.insert(header::AUTHORIZATION, authorization);

        if !self.sign_security_token {
            insert_security_token(req, cred)?;
        }

        Ok(())
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(&self, req: &mut Parts, body: &[u8], credential: &Credential) -> Result<()> {
        // Fail before touching the request.
        if self.region.is_empty() || self.service.is_empty() {
            return Err(Error::config_invalid(
                "region and service are required for signing",
            ));
        }

        let (headers, uri) = (req.headers.clone(), req.uri.clone());
        let result = SigningRequest::build(req).and_then(|mut signed_req| {
            self.sign_signing_request(&mut signed_req, body, credential)?;
            signed_req.apply(req)
        });

        // A failed signing leaves the request as it was handed to us.
        if result.is_err() {
            req.headers = headers;
            req.uri = uri;
        }
        result
    }
}

/// Bring the request into a canonicalizable state.
///
/// - empty path becomes `/`
/// - `content-type` defaults to form url encoded
/// - `x-amz-date` defaults to `now`
///
/// Values set by the caller are never overwritten.
fn prepare_request(req: &mut SigningRequest, now: DateTime) -> Result<()> {
    if req.path.is_empty() {
        req.path = "/".to_string();
    }

    req.header_insert_if_absent(
        header::CONTENT_TYPE,
        HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
    );
    req.header_insert_if_absent(
        HeaderName::from_static(X_AMZ_DATE),
        HeaderValue::try_from(format_iso8601(now))?,
    );

    Ok(())
}

fn insert_security_token(req: &mut SigningRequest, cred: &Credential) -> Result<()> {
    let Some(token) = cred.session_token() else {
        return Ok(());
    };

    let mut value = HeaderValue::from_str(token)?;
    // Set token value sensitive to valid leaking.
    value.set_sensitive(true);
    req.headers
        .insert(HeaderName::from_static(X_AMZ_SECURITY_TOKEN), value);

    Ok(())
}

/// StringToSign:
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20220313T072004Z
/// 20220313/<region>/<service>/aws4_request
/// <hashed_canonical_request>
/// ```
fn string_to_sign(hashed_creq: &str, meta: &SigningMetadata) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "{}", meta.algorithm)?;
    writeln!(f, "{}", meta.timestamp_full)?;
    writeln!(f, "{}", meta.credential_scope)?;
    write!(f, "{hashed_creq}")?;

    Ok(f)
}

fn generate_signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes())
}

fn signature(signing_key: &[u8], string_to_sign: &str) -> String {
    hex_hmac_sha256(signing_key, string_to_sign.as_bytes())
}

fn authorization_header(access_key_id: &str, signature: &str, meta: &SigningMetadata) -> String {
    format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        meta.algorithm, access_key_id, meta.credential_scope, meta.signed_headers, signature
    )
}
