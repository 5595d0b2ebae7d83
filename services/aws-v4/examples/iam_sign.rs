use anyhow::Result;
use awsauth_aws_v4::{Credential, RequestSigner};
use awsauth_core::{Body, Signer};

fn main() -> Result<()> {
    // Initialize logging for debugging
    env_logger::init();

    let cred = match (
        std::env::var("AWS_ACCESS_KEY_ID"),
        std::env::var("AWS_SECRET_ACCESS_KEY"),
    ) {
        (Ok(ak), Ok(sk)) => {
            let cred = Credential::new(ak, sk);
            match std::env::var("AWS_SESSION_TOKEN") {
                Ok(token) => cred.with_session_token(token),
                Err(_) => cred,
            }
        }
        _ => {
            println!("No AWS credentials found, using demo credentials for example");
            Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
        }
    };

    // Service and region come from the endpoint itself.
    let url = "https://iam.amazonaws.com/";
    let host = url.parse::<http::Uri>()?.host().unwrap_or_default().to_string();
    let signer = Signer::new(RequestSigner::from_host(&host)?);

    let mut req = http::Request::post(url).body(Body::from_reader(std::io::Cursor::new(
        b"Action=ListUsers&Version=2010-05-08".to_vec(),
    )))?;

    match signer.sign(&mut req, &cred) {
        Ok(_) => {
            println!("Request signed successfully!");
            println!(
                "Authorization header: {:?}",
                req.headers().get("authorization")
            );
            println!("X-Amz-Date header: {:?}", req.headers().get("x-amz-date"));
            println!("Body: {:?}", req.body_mut().replay()?);
        }
        Err(e) => eprintln!("Failed to sign request: {e}"),
    }

    Ok(())
}
