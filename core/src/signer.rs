use std::mem;
use std::sync::Arc;

use log::debug;

use crate::Body;
use crate::Error;
use crate::Result;
use crate::SignRequest;
use crate::SigningCredential;

/// Signer is the main struct used to sign the request.
///
/// It owns the steps shared by every signing scheme: buffering the body,
/// checking the credential and handing the request over to the scheme.
/// Credentials are passed on every call and never stored.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    builder: Arc<dyn SignRequest<Credential = K>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(builder: impl SignRequest<Credential = K>) -> Self {
        Self {
            builder: Arc::new(builder),
        }
    }

    /// Sign the request.
    ///
    /// The body is buffered before signing and put back as a replayable copy,
    /// so it can still be sent after this call. No `Authorization` header is
    /// set if signing fails.
    pub fn sign(&self, req: &mut http::Request<Body>, credential: &K) -> Result<()> {
        let body = req.body_mut().replay()?;

        let (mut parts, b) = mem::take(req).into_parts();
        let result = self.sign_parts(&mut parts, &body, credential);
        *req = http::Request::from_parts(parts, b);

        result
    }

    /// Sign request parts whose body has already been buffered.
    pub fn sign_parts(
        &self,
        parts: &mut http::request::Parts,
        body: &[u8],
        credential: &K,
    ) -> Result<()> {
        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "credential is not valid for signing",
            ));
        }

        debug!("signing request: {} {}", parts.method, parts.uri);
        self.builder.sign_request(parts, body, credential)
    }
}
