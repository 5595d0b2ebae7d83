use super::{
    init_signing_test, test_credential, test_plain_request, test_unsigned_request, BODY,
    SECURITY_TOKEN, SIGNATURE,
};
use anyhow::Result;
use awsauth_aws_v4::RequestSigner;
use awsauth_core::{Body, ErrorKind, Signer};
use http::header;
use pretty_assertions::assert_eq;
use std::io::{Cursor, Read};

struct BrokenStream;

impl Read for BrokenStream {
    fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stream closed early",
        ))
    }
}

fn authorization(req: &http::Request<Body>) -> String {
    req.headers()[header::AUTHORIZATION]
        .to_str()
        .expect("authorization must be valid")
        .to_string()
}

#[test]
fn test_known_vector() -> Result<()> {
    let signer = init_signing_test();
    let mut req = test_unsigned_request();

    signer.sign(&mut req, &test_credential())?;

    assert_eq!(
        authorization(&req),
        format!("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20110909/us-east-1/iam/aws4_request, SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date, Signature={SIGNATURE}")
    );
    Ok(())
}

#[test]
fn test_plain_request_gets_defaults() -> Result<()> {
    let signer = init_signing_test();
    let mut req = test_plain_request("http://iam.amazonaws.com");

    signer.sign(&mut req, &test_credential())?;

    assert_eq!(req.uri().path(), "/");
    assert_eq!(
        req.headers()[header::CONTENT_TYPE],
        "application/x-www-form-urlencoded; charset=utf-8"
    );

    let date = req.headers()["x-amz-date"].to_str()?;
    assert_eq!(date.len(), 16);
    assert!(date.ends_with('Z'));

    let auth = authorization(&req);
    assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(auth.contains(&format!("/{}/us-east-1/iam/aws4_request, ", &date[..8])));
    assert!(auth.contains("SignedHeaders="));
    assert!(auth.contains("Signature="));
    Ok(())
}

#[test]
fn test_streaming_body_is_replayed() -> Result<()> {
    let signer = init_signing_test();
    let mut req = test_unsigned_request();
    *req.body_mut() = Body::from_reader(Cursor::new(BODY.as_bytes().to_vec()));

    signer.sign(&mut req, &test_credential())?;

    assert!(authorization(&req).ends_with(SIGNATURE));

    let mut sent = String::new();
    req.body_mut().read_to_string(&mut sent)?;
    assert_eq!(sent, BODY);
    Ok(())
}

#[test]
fn test_deterministic() -> Result<()> {
    let signer = init_signing_test();
    let cred = test_credential().with_session_token(SECURITY_TOKEN);

    let mut first = test_unsigned_request();
    signer.sign(&mut first, &cred)?;
    let mut second = test_unsigned_request();
    signer.sign(&mut second, &cred)?;

    assert_eq!(authorization(&first), authorization(&second));
    assert_eq!(first.headers(), second.headers());
    Ok(())
}

#[test]
fn test_header_preservation() -> Result<()> {
    let signer = init_signing_test();
    let mut req = test_unsigned_request();
    req.headers_mut()
        .insert(header::CONTENT_TYPE, "application/json".parse()?);
    req.headers_mut()
        .insert(header::USER_AGENT, "awsauth-test".parse()?);

    signer.sign(&mut req, &test_credential())?;

    assert_eq!(req.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(req.headers()["x-amz-date"], "20110909T233600Z");
    assert_eq!(req.headers()[header::USER_AGENT], "awsauth-test");
    // user-agent is never signed.
    assert!(authorization(&req).contains("SignedHeaders=content-type;host;x-amz-content-sha256;x-amz-date,"));
    Ok(())
}

#[test]
fn test_query_order_does_not_matter() -> Result<()> {
    let signer = init_signing_test();
    let cred = test_credential();

    let mut a = test_unsigned_request();
    *a.uri_mut() = "http://iam.amazonaws.com/?Version=2010-05-08&Action=ListUsers".parse()?;
    let mut b = test_unsigned_request();
    *b.uri_mut() = "http://iam.amazonaws.com/?Action=ListUsers&Version=2010-05-08".parse()?;

    signer.sign(&mut a, &cred)?;
    signer.sign(&mut b, &cred)?;

    assert_eq!(authorization(&a), authorization(&b));
    // The query is sent as the caller wrote it.
    assert_eq!(a.uri().query(), Some("Version=2010-05-08&Action=ListUsers"));
    assert_eq!(b.uri().query(), Some("Action=ListUsers&Version=2010-05-08"));
    Ok(())
}

#[test]
fn test_session_token_propagation() -> Result<()> {
    let signer = init_signing_test();
    let mut req = test_unsigned_request();

    signer.sign(
        &mut req,
        &test_credential().with_session_token(SECURITY_TOKEN),
    )?;

    assert_eq!(req.headers()["x-amz-security-token"], SECURITY_TOKEN);
    assert!(authorization(&req).ends_with(SIGNATURE));
    Ok(())
}

#[test]
fn test_unreadable_body() {
    let signer = init_signing_test();
    let mut req = test_unsigned_request();
    *req.body_mut() = Body::from_reader(BrokenStream);

    let err = signer.sign(&mut req, &test_credential()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BodyUnreadable);
    assert!(req.headers().get(header::AUTHORIZATION).is_none());
}

#[test]
fn test_invalid_credential() {
    let signer = init_signing_test();
    let mut req = test_unsigned_request();

    let err = signer
        .sign(&mut req, &awsauth_aws_v4::Credential::new("AKIDEXAMPLE", ""))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(req.headers().get(header::AUTHORIZATION).is_none());
}

#[test]
fn test_missing_region() {
    let _ = env_logger::builder().is_test(true).try_init();
    let signer = Signer::new(RequestSigner::new("iam", ""));
    let mut req = test_unsigned_request();

    let err = signer.sign(&mut req, &test_credential()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(req.headers().get(header::AUTHORIZATION).is_none());
}

#[test]
fn test_signer_from_host() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut req = test_unsigned_request();
    let host = req.uri().host().expect("host must be set").to_string();
    let signer = Signer::new(RequestSigner::from_host(&host)?);

    signer.sign(&mut req, &test_credential())?;

    assert!(authorization(&req).ends_with(SIGNATURE));
    Ok(())
}

#[test]
fn test_sign_from_many_threads() {
    let signer = init_signing_test();
    let cred = test_credential();

    std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| {
                s.spawn(|| {
                    let mut req = test_unsigned_request();
                    signer.sign(&mut req, &cred).expect("sign must succeed");
                    authorization(&req)
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert!(handle.join().expect("thread must not panic").ends_with(SIGNATURE));
        }
    });
}

#[test]
fn test_failed_signing_keeps_request() {
    let signer = init_signing_test();
    let mut req = test_plain_request("http://iam.amazonaws.com");
    req.headers_mut()
        .insert("x-amz-date", "bogus".parse().expect("must be valid"));
    let headers = req.headers().clone();

    let err = signer.sign(&mut req, &test_credential()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert_eq!(req.headers(), &headers);
}
