use anyhow::Result;
use awsauth_aws_v4::{Config, Credential, RequestSigner};
use awsauth_core::{Body, Signer};

const CONFIG: &str = r#"
region = "us-west-2"
service = "sqs"
sign_security_token = true
"#;

fn main() -> Result<()> {
    env_logger::init();

    let config: Config = toml::from_str(CONFIG)?;
    let signer = Signer::new(RequestSigner::from_config(&config)?);

    let cred = Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
        .with_session_token("demo-session-token");

    let mut req = http::Request::get(
        "https://sqs.us-west-2.amazonaws.com/?Action=ListQueues&Version=2012-11-05",
    )
    .body(Body::empty())?;
    signer.sign(&mut req, &cred)?;

    for (name, value) in req.headers() {
        println!("{name}: {value:?}");
    }

    Ok(())
}
