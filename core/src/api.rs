use std::fmt::Debug;

use http::request::Parts;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

/// SignRequest is the trait used by signer to sign the request.
///
/// Implementations are pure with respect to their inputs: the same request,
/// body, and credential always produce the same signed request.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    ///
    /// Typically, it will be a credential.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` is the full content of the request body. It has already been
    /// buffered by the caller, so implementations are free to hash it.
    fn sign_request(
        &self,
        req: &mut Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> crate::Result<()>;
}
