//! Core components for signing AWS API requests.
//!
//! This crate provides the service-independent building blocks used by the
//! awsauth signers: the error type, hashing and time helpers, the request
//! signing context, the replayable request body and the [`Signer`] that ties
//! them together.
//!
//! ## Overview
//!
//! - **Body**: a request body that can be hashed without preventing the transport from sending it
//! - **Traits**: [`SignRequest`] for scheme specific signing and [`SigningCredential`] for credential validation
//! - **Signer**: buffers the body, checks the credential and delegates to a [`SignRequest`]
//!
//! ## Example
//!
//! ```
//! use awsauth_core::{Body, Result, SignRequest, Signer, SigningCredential};
//! use http::request::Parts;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     token: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.token.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(&self, req: &mut Parts, _body: &[u8], cred: &MyCredential) -> Result<()> {
//!         req.headers.insert("x-token", cred.token.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(MyBuilder);
//! let mut req = http::Request::new(Body::from("hello"));
//! signer.sign(&mut req, &MyCredential { token: "secret".to_string() })?;
//! assert!(req.headers().contains_key("x-token"));
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod body;
pub use body::Body;

mod api;
pub use api::{SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
