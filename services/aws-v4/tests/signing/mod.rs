mod standard;

use awsauth_aws_v4::{Credential, RequestSigner};
use awsauth_core::{Body, Signer};
use http::{Method, Request};

pub const BODY: &str = "Action=ListUsers&Version=2010-05-08";
pub const SIGNATURE: &str = "2f5b7bfe9c47bbf5fff60c6d667e1439f64a29f3f194fa02d83facf42843fa8d";
pub const SECURITY_TOKEN: &str = "AQoDYXdzEHcaoAJ1Aqwx1Sum0iW2NQjXJcWlKR7vuB6lnAeGBaQnjDRZPVyniwc48ml5hx+0qiXenVJdfusMMl9XLhSncfhx9Rb1UF8IAOaQ+CkpWXvoH67YYN+93dgckSVgVEBRByTl/BvLOZhe0ii/pOWkuQtBm5T7lBHRe4Dfmxy9X6hd8L3FrWxgnGV3fWZ3j0gASdYXaa+VBJlU0E2/GmCzn3T+t2mjYaeoInAnYVKVpmVMOrh6lNAeETTOHElLopblSa7TAmROq5xHIyu4a9i2qwjERTwa3Yk4Jk6q7JYVA5Cu7kS8wKVml8LdzzCTsy+elJgvH+Jf6ivpaHt/En0AJ5PZUJDev2+Y5+9j4AYfrmXfm4L73DC1ZJFJrv+Yh+EXAMPLE=";

/// Initialize test environment
pub fn init_signing_test() -> Signer<Credential> {
    let _ = env_logger::builder().is_test(true).try_init();

    Signer::new(RequestSigner::new("iam", "us-east-1"))
}

/// Credential from the AWS documentation examples.
pub fn test_credential() -> Credential {
    Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
}

/// Request with nothing but a body.
pub fn test_plain_request(uri: &str) -> Request<Body> {
    let mut req = Request::new(Body::from(BODY));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = uri.parse().expect("url must be valid");
    req
}

/// Request of the AWS documentation example, ready to be signed.
pub fn test_unsigned_request() -> Request<Body> {
    let mut req = test_plain_request("http://iam.amazonaws.com/");
    req.headers_mut().insert(
        http::header::CONTENT_TYPE,
        "application/x-www-form-urlencoded; charset=utf-8"
            .parse()
            .expect("must be valid"),
    );
    req.headers_mut()
        .insert("x-amz-date", "20110909T233600Z".parse().expect("must be valid"));
    req
}
