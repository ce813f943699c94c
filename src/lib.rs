//! Base URLs for IBM Cloud service APIs.
//!
//! Given a region and a network visibility, [`EndpointResolver`] returns the
//! endpoint an API client should send requests to. Every service can be
//! pointed elsewhere through its own environment variable (see
//! [`Service::env_var`]), which takes precedence over the built-in tables.
//!
//! ```
//! use ibmcloud_endpoints::{EndpointResolver, MapEnv, ServiceEndpoints, Visibility};
//!
//! let resolver = EndpointResolver::with_env("us-south", Visibility::Private, MapEnv::new());
//! assert_eq!(
//!     resolver.account_management_endpoint().as_deref(),
//!     Ok("https://private.us-south.accounts.cloud.ibm.com")
//! );
//! ```

pub mod config;
pub mod env;
mod error;
pub mod region;
mod resolver;
mod service;
mod visibility;

pub use config::{EndpointsConfig, ResolverConfig};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use error::{ConfigError, EndpointError, ParseServiceError, ParseVisibilityError};
pub use resolver::{EndpointResolver, ServiceEndpoints};
pub use service::Service;
pub use visibility::Visibility;
