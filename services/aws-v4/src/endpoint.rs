//! Infer service and region from AWS endpoint host names.

use crate::constants::DEFAULT_REGION;

const AMAZONAWS_COM: &str = ".amazonaws.com";

/// Infer `(service, region)` from an AWS endpoint host.
///
/// Returns `None` for hosts outside `amazonaws.com`.
///
/// ```
/// use awsauth_aws_v4::infer_service_and_region;
///
/// assert_eq!(
///     infer_service_and_region("sqs.us-west-2.amazonaws.com"),
///     Some(("sqs".to_string(), "us-west-2".to_string()))
/// );
/// ```
pub fn infer_service_and_region(host: &str) -> Option<(String, String)> {
    let host = host.split(':').next().unwrap_or_default().to_ascii_lowercase();
    let prefix = host.strip_suffix(AMAZONAWS_COM)?;
    let labels = prefix.split('.').collect::<Vec<_>>();
    if labels.iter().any(|v| v.is_empty()) {
        return None;
    }

    let (service, region) = match labels.as_slice() {
        // s3-eu-west-1.amazonaws.com
        [label] => match label.strip_prefix("s3-") {
            Some(region) => ("s3", region),
            None => (*label, DEFAULT_REGION),
        },
        // bucket.s3.amazonaws.com
        [_, "s3"] => ("s3", DEFAULT_REGION),
        [first, second] => match second.strip_prefix("s3-") {
            // bucket.s3-eu-west-1.amazonaws.com
            Some(region) => ("s3", region),
            // sqs.us-west-2.amazonaws.com
            None => (*first, *second),
        },
        // bucket.s3.eu-west-1.amazonaws.com
        [_, "s3", region] => ("s3", *region),
        // service.region.label.amazonaws.com
        [service, region, _] => (*service, *region),
        _ => return None,
    };

    let region = match region {
        "external-1" => DEFAULT_REGION,
        v => v,
    };

    Some((service.to_string(), region.to_string()))
}
