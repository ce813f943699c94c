use thiserror::Error;

use crate::service::Service;

/// A service has no endpoint for the requested region or visibility.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Private endpoints are not supported by {service}")]
    PrivateUnsupported { service: Service },

    #[error("Private endpoints are not supported by {service} for the region {region:?}")]
    PrivateUnsupportedInRegion { service: Service, region: String },

    #[error("{service} endpoint doesn't exist for region: {region:?}")]
    RegionNotFound { service: Service, region: String },
}

impl EndpointError {
    pub const CODE: &'static str = "ServiceEndpointDoesnotExist";

    /// Error code shared by every variant.
    pub const fn code(&self) -> &'static str {
        Self::CODE
    }

    pub const fn service(&self) -> Service {
        match self {
            Self::PrivateUnsupported { service }
            | Self::PrivateUnsupportedInRegion { service, .. }
            | Self::RegionNotFound { service, .. } => *service,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    InvalidVisibility(#[from] ParseVisibilityError),

    #[error("Unknown profile: {0:?}")]
    UnknownProfile(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid visibility {0:?}, expected \"public\" or \"private\"")]
pub struct ParseVisibilityError(pub String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown service: {0:?}")]
pub struct ParseServiceError(pub String);
