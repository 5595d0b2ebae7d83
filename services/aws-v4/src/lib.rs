//! AWS Signature Version 4 signer.
//!
//! ```
//! use awsauth_aws_v4::{Credential, RequestSigner};
//! use awsauth_core::{Body, Signer};
//!
//! # fn main() -> awsauth_core::Result<()> {
//! let signer = Signer::new(RequestSigner::new("iam", "us-east-1"));
//! let cred = Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY");
//!
//! let mut req = http::Request::post("https://iam.amazonaws.com/")
//!     .body(Body::from("Action=ListUsers&Version=2010-05-08"))?;
//! signer.sign(&mut req, &cred)?;
//!
//! assert!(req.headers().contains_key("authorization"));
//! assert!(req.headers().contains_key("x-amz-date"));
//! # Ok(())
//! # }
//! ```

mod canonical_request;
mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::infer_service_and_region;

mod metadata;
pub use metadata::SigningMetadata;

mod sign_request;
pub use sign_request::RequestSigner;
