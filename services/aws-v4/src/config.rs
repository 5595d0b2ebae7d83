use serde::Deserialize;

/// Config for the aws v4 signer.
///
/// It derives `Deserialize` so that it can be embedded in the caller's own
/// configuration file:
///
/// ```toml
/// [aws]
/// region = "us-east-1"
/// service = "iam"
/// ```
///
/// Nothing is read from the environment: every value comes from the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Region the request is sent to, like `us-east-1`.
    pub region: Option<String>,
    /// Service name the request is sent to, like `iam` or `s3`.
    pub service: Option<String>,
    /// Include `x-amz-security-token` in the signed headers.
    ///
    /// By default the token header is added after signing and isn't signed.
    pub sign_security_token: bool,
}

impl Config {
    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the service.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }
}
