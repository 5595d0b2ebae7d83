use std::fmt::Write;

use awsauth_core::hash::hex_sha256;
use awsauth_core::Result;
use awsauth_core::SigningRequest;
use http::header;
use http::uri::Scheme;
use http::HeaderName;
use http::HeaderValue;
use log::debug;
use percent_encoding::utf8_percent_encode;

use crate::constants::AWS_QUERY_ENCODE_SET;
use crate::constants::CONTENT_MD5;
use crate::constants::X_AMZ_CONTENT_SHA_256;
use crate::constants::X_AMZ_PREFIX;
use crate::constants::X_AMZ_SECURITY_TOKEN;
use crate::SigningMetadata;

/// Build the canonical request and return its hex encoded SHA256 digest.
///
/// `x-amz-content-sha256` is set to the digest of `body` and the names of
/// the signed headers are stored into `meta`.
pub(crate) fn hashed_canonical_request(
    req: &mut SigningRequest,
    body: &[u8],
    meta: &mut SigningMetadata,
    sign_security_token: bool,
) -> Result<String> {
    let payload_hash = hex_sha256(body);
    req.headers.insert(
        HeaderName::from_static(X_AMZ_CONTENT_SHA_256),
        HeaderValue::from_str(&payload_hash)?,
    );

    let creq = canonical_request_string(req, &payload_hash, meta, sign_security_token)?;
    debug!("calculated canonical request: {creq}");

    Ok(hex_sha256(creq.as_bytes()))
}

/// CanonicalRequest:
///
/// ```text
/// POST
/// /
///
/// content-type:application/x-www-form-urlencoded; charset=utf-8
/// host:iam.amazonaws.com
/// x-amz-date:20110909T233600Z
///
/// content-type;host;x-amz-date
/// <hashed_payload>
/// ```
fn canonical_request_string(
    req: &SigningRequest,
    payload_hash: &str,
    meta: &mut SigningMetadata,
    sign_security_token: bool,
) -> Result<String> {
    let headers = canonical_headers(req, sign_security_token)?;
    meta.signed_headers = headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    writeln!(f, "{}", req.method)?;
    writeln!(f, "{}", canonical_uri(&req.path))?;
    writeln!(f, "{}", canonical_query(req))?;
    for (name, value) in headers.iter() {
        writeln!(f, "{name}:{value}")?;
    }
    writeln!(f)?;
    writeln!(f, "{}", meta.signed_headers)?;
    write!(f, "{payload_hash}")?;

    Ok(f)
}

fn canonical_uri(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

fn canonical_query(req: &SigningRequest) -> String {
    let query = req
        .query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect();

    SigningRequest::pairs_to_string(query, "=", "&")
}

/// Collect `(name, value)` of all headers to sign, sorted by name.
fn canonical_headers(
    req: &SigningRequest,
    sign_security_token: bool,
) -> Result<Vec<(String, String)>> {
    let mut headers = vec![(
        header::HOST.as_str().to_string(),
        canonical_host(
            &SigningRequest::header_value_normalize(&req.host()?),
            req.scheme.as_ref(),
        ),
    )];

    let names = req.header_name_to_vec_sorted(|k| {
        if k == header::HOST.as_str() {
            return false;
        }
        if k == X_AMZ_SECURITY_TOKEN {
            return sign_security_token;
        }

        k == header::CONTENT_TYPE.as_str() || k == CONTENT_MD5 || k.starts_with(X_AMZ_PREFIX)
    });
    for name in names {
        headers.push((name.as_str().to_string(), req.header_value_joined(name)?));
    }

    headers.sort();
    Ok(headers)
}

/// The port is left out of the signed host only when it is the default
/// one for the scheme.
fn canonical_host(host: &str, scheme: Option<&Scheme>) -> String {
    let default_port = match scheme {
        Some(s) if *s == Scheme::HTTP => "80",
        Some(s) if *s == Scheme::HTTPS => "443",
        _ => return host.to_string(),
    };

    match host.rsplit_once(':') {
        Some((name, port)) if port == default_port => name.to_string(),
        _ => host.to_string(),
    }
}
