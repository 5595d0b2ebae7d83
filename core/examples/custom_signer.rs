use awsauth_core::hash::hex_hmac_sha256;
use awsauth_core::Result;
use awsauth_core::{Body, SignRequest, Signer, SigningCredential};
use http::request::Parts;

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Implement a request builder that signs method, path and body.
#[derive(Debug)]
struct MyRequestBuilder;

impl SignRequest for MyRequestBuilder {
    type Credential = MyCredential;

    fn sign_request(&self, req: &mut Parts, body: &[u8], cred: &MyCredential) -> Result<()> {
        let mut content = format!("{}\n{}\n", req.method, req.uri.path()).into_bytes();
        content.extend_from_slice(body);
        let signature = hex_hmac_sha256(cred.api_secret.as_bytes(), &content);

        req.headers.insert("x-api-key", cred.api_key.parse()?);
        req.headers.insert("x-api-signature", signature.parse()?);

        Ok(())
    }
}

fn main() -> Result<()> {
    let cred = MyCredential {
        api_key: std::env::var("MY_API_KEY").unwrap_or_else(|_| "demo-api-key".to_string()),
        api_secret: std::env::var("MY_API_SECRET")
            .unwrap_or_else(|_| "demo-api-secret".to_string()),
    };

    let signer = Signer::new(MyRequestBuilder);

    let mut req = http::Request::post("https://api.example.com/v1/users")
        .body(Body::from(r#"{"name":"demo"}"#))?;

    match signer.sign(&mut req, &cred) {
        Ok(_) => {
            println!("Request signed successfully!");
            println!("Headers: {:?}", req.headers());
        }
        Err(e) => {
            eprintln!("Failed to sign request: {e}");
        }
    }

    Ok(())
}
