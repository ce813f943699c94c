use crate::config::ResolverConfig;
use crate::visibility::Visibility;

const DEFAULT_REGION: &str = "us-south";

pub fn region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            region: region(),
            visibility: Visibility::default(),
        }
    }
}
