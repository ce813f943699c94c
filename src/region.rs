//! Static region tables.
//!
//! These only cover the regions the services were known to run in. They are
//! not exhaustive; the per-service environment overrides cover the rest.

/// Regions with dedicated private endpoints for most services.
pub const PRIVATE_REGIONS: [&str; 2] = ["us-south", "us-east"];

/// Regions served by the European private schematics endpoint.
const SCHEMATICS_EU_PRIVATE_REGIONS: [&str; 2] = ["eu-gb", "eu-de"];

pub fn has_regional_private_endpoint(region: &str) -> bool {
    PRIVATE_REGIONS.contains(&region)
}

/// Cloud Foundry API URL for `region`.
pub fn cf_api_url(region: &str) -> Option<&'static str> {
    match region {
        "us-south" => Some("https://api.ng.bluemix.net"),
        "us-east" => Some("https://api.us-east.bluemix.net"),
        "eu-gb" => Some("https://api.eu-gb.bluemix.net"),
        "au-syd" => Some("https://api.au-syd.bluemix.net"),
        "eu-de" => Some("https://api.eu-de.bluemix.net"),
        "jp-tok" => Some("https://api.jp-tok.bluemix.net"),
        _ => None,
    }
}

/// Container registry host for `region`, without scheme.
pub fn registry_host(region: &str) -> Option<&'static str> {
    match region {
        "us-south" | "us-east" => Some("us.icr.io"),
        "eu-de" => Some("de.icr.io"),
        "au-syd" => Some("au.icr.io"),
        "eu-gb" => Some("uk.icr.io"),
        "jp-tok" => Some("jp.icr.io"),
        "jp-osa" => Some("jp2.icr.io"),
        _ => None,
    }
}

/// Cloud Foundry UAA login URL for `region`.
pub fn uaa_url(region: &str) -> Option<&'static str> {
    match region {
        "us-south" => Some("https://iam.cloud.ibm.com/cloudfoundry/login/us-south"),
        "us-east" => Some("https://iam.cloud.ibm.com/cloudfoundry/login/us-east"),
        "eu-gb" => Some("https://iam.cloud.ibm.com/cloudfoundry/login/uk-south"),
        "au-syd" => Some("https://iam.cloud.ibm.com/cloudfoundry/login/ap-south"),
        "eu-de" => Some("https://iam.cloud.ibm.com/cloudfoundry/login/eu-central"),
        _ => None,
    }
}

/// Private schematics URL for `region`.
pub fn schematics_private_url(region: &str) -> Option<&'static str> {
    if PRIVATE_REGIONS.contains(&region) {
        Some("https://private-us.schematics.cloud.ibm.com")
    } else if SCHEMATICS_EU_PRIVATE_REGIONS.contains(&region) {
        Some("https://private-eu.schematics.cloud.ibm.com")
    } else {
        None
    }
}
