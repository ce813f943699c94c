//! Endpoint resolution.
//!
//! [`EndpointResolver`] maps a [`Service`] to its base URL for one
//! region/visibility pair. Each lookup first checks the service's override
//! variable, then the static region tables, then the per-service URL
//! templates.

use tracing::{debug, trace};

use crate::config::ResolverConfig;
use crate::env::{EnvSource, ProcessEnv, env_fallback};
use crate::error::EndpointError;
use crate::region;
use crate::service::Service;
use crate::visibility::Visibility;

/// Lookup of service base URLs.
///
/// Implementors only provide [`ServiceEndpoints::endpoint`]; the named
/// per-service queries are derived from it. API clients should depend on
/// this trait rather than on [`EndpointResolver`] so tests can hand them
/// fixed URLs.
pub trait ServiceEndpoints {
    /// Base URL for `service`.
    fn endpoint(&self, service: Service) -> Result<String, EndpointError>;

    fn account_management_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::AccountManagement)
    }

    fn certificate_manager_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::CertificateManager)
    }

    fn cf_api_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::CfApi)
    }

    fn container_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::Container)
    }

    fn container_registry_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::ContainerRegistry)
    }

    fn cis_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::Cis)
    }

    fn global_search_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::GlobalSearch)
    }

    fn global_tagging_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::GlobalTagging)
    }

    fn iam_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::Iam)
    }

    fn iam_pap_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::IamPap)
    }

    fn icd_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::Icd)
    }

    fn mccp_api_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::MccpApi)
    }

    fn resource_management_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::ResourceManagement)
    }

    fn resource_controller_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::ResourceController)
    }

    fn resource_catalog_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::ResourceCatalog)
    }

    fn uaa_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::Uaa)
    }

    fn cse_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::Cse)
    }

    fn schematics_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::Schematics)
    }

    fn user_management_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::UserManagement)
    }

    fn hpcs_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::Hpcs)
    }

    fn functions_endpoint(&self) -> Result<String, EndpointError> {
        self.endpoint(Service::Functions)
    }
}

/// Resolves endpoints for a fixed region and visibility.
///
/// # Example
///
/// ```
/// use ibmcloud_endpoints::{EndpointResolver, MapEnv, ServiceEndpoints, Visibility};
///
/// let resolver = EndpointResolver::with_env("eu-de", Visibility::Public, MapEnv::new());
/// assert_eq!(
///     resolver.cf_api_endpoint().as_deref(),
///     Ok("https://api.eu-de.bluemix.net")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResolver<E = ProcessEnv> {
    region: String,
    visibility: Visibility,
    env: E,
}

impl EndpointResolver {
    /// Create a resolver that reads overrides from the process environment.
    pub fn new(region: impl Into<String>, visibility: Visibility) -> Self {
        Self::with_env(region, visibility, ProcessEnv)
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.region.clone(), config.visibility)
    }
}

impl<E> EndpointResolver<E> {
    /// Create a resolver that reads overrides from `env`.
    pub fn with_env(region: impl Into<String>, visibility: Visibility, env: E) -> Self {
        Self {
            region: region.into(),
            visibility,
            env,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }
}

impl<E: EnvSource> EndpointResolver<E> {
    /// Resolve every known service, in [`Service::ALL`] order.
    pub fn endpoints(&self) -> Vec<(Service, Result<String, EndpointError>)> {
        Service::ALL
            .into_iter()
            .map(|service| (service, self.endpoint(service)))
            .collect()
    }

    fn region_not_found(&self, service: Service) -> EndpointError {
        EndpointError::RegionNotFound {
            service,
            region: self.region.clone(),
        }
    }

    /// Endpoint derived from region and visibility alone.
    fn default_endpoint(&self, service: Service) -> Result<String, EndpointError> {
        let region = self.region.as_str();
        let private = self.visibility.is_private();

        if private && !service.supports_private() {
            return Err(EndpointError::PrivateUnsupported { service });
        }

        // Most private variants only exist in the US regions and fall back
        // to the public URL everywhere else.
        let regional_private = private && region::has_regional_private_endpoint(region);

        let url = match service {
            Service::AccountManagement if regional_private => {
                format!("https://private.{region}.accounts.cloud.ibm.com")
            }
            Service::AccountManagement => "https://accounts.cloud.ibm.com".to_string(),
            Service::CertificateManager if private => {
                format!("https://private.{region}.certificate-manager.cloud.ibm.com")
            }
            Service::CertificateManager => {
                format!("https://{region}.certificate-manager.cloud.ibm.com")
            }
            Service::CfApi => region::cf_api_url(region)
                .ok_or_else(|| self.region_not_found(service))?
                .to_string(),
            Service::Container => "https://containers.cloud.ibm.com/global".to_string(),
            Service::ContainerRegistry => {
                let host =
                    region::registry_host(region).ok_or_else(|| self.region_not_found(service))?;
                if private {
                    format!("https://private.{host}")
                } else {
                    format!("https://{host}")
                }
            }
            Service::Cis if private => "https://api.private.cis.cloud.ibm.com".to_string(),
            Service::Cis => "https://api.cis.cloud.ibm.com".to_string(),
            Service::GlobalSearch if regional_private => {
                format!("https://api.private.{region}.global-search-tagging.cloud.ibm.com")
            }
            Service::GlobalSearch => "https://api.global-search-tagging.cloud.ibm.com".to_string(),
            Service::GlobalTagging if regional_private => {
                format!("https://tags.private.{region}.global-search-tagging.cloud.ibm.com")
            }
            Service::GlobalTagging => {
                "https://tags.global-search-tagging.cloud.ibm.com".to_string()
            }
            Service::Iam | Service::IamPap if regional_private => {
                format!("https://private.{region}.iam.cloud.ibm.com")
            }
            Service::Iam | Service::IamPap if private => {
                "https://private.iam.cloud.ibm.com".to_string()
            }
            Service::Iam | Service::IamPap => "https://iam.cloud.ibm.com".to_string(),
            Service::Icd if private => {
                format!("https://api.{region}.private.databases.cloud.ibm.com")
            }
            Service::Icd => format!("https://api.{region}.databases.cloud.ibm.com"),
            Service::MccpApi => format!("https://mccp.{region}.cf.cloud.ibm.com"),
            Service::ResourceManagement | Service::ResourceController if regional_private => {
                format!("https://private.{region}.resource-controller.cloud.ibm.com")
            }
            Service::ResourceManagement | Service::ResourceController => {
                "https://resource-controller.cloud.ibm.com".to_string()
            }
            Service::ResourceCatalog if regional_private => {
                format!("https://private.{region}.globalcatalog.cloud.ibm.com")
            }
            Service::ResourceCatalog => "https://globalcatalog.cloud.ibm.com".to_string(),
            Service::Uaa => region::uaa_url(region)
                .ok_or_else(|| self.region_not_found(service))?
                .to_string(),
            Service::Cse => "https://api.serviceendpoint.cloud.ibm.com".to_string(),
            Service::Schematics if private => region::schematics_private_url(region)
                .ok_or_else(|| EndpointError::PrivateUnsupportedInRegion {
                    service,
                    region: self.region.clone(),
                })?
                .to_string(),
            Service::Schematics => format!("https://{region}.schematics.cloud.ibm.com"),
            Service::UserManagement if regional_private => {
                format!("https://private.{region}.user-management.cloud.ibm.com")
            }
            Service::UserManagement => "https://user-management.cloud.ibm.com".to_string(),
            // Same URL for both visibilities.
            Service::Hpcs => format!("https://{region}.broker.hs-crypto.cloud.ibm.com/crypto_v2/"),
            Service::Functions => format!("https://{region}.functions.cloud.ibm.com"),
        };

        Ok(url)
    }
}

impl<E: EnvSource> ServiceEndpoints for EndpointResolver<E> {
    fn endpoint(&self, service: Service) -> Result<String, EndpointError> {
        let var = service.env_var();
        let overridden = env_fallback(&self.env, &[var], "");
        if !overridden.is_empty() {
            debug!(%service, var, endpoint = %overridden, "Using endpoint from environment");
            return Ok(overridden);
        }

        match self.default_endpoint(service) {
            Ok(url) => {
                trace!(
                    %service,
                    region = %self.region,
                    visibility = %self.visibility,
                    endpoint = %url,
                    "Resolved endpoint"
                );
                Ok(url)
            }
            Err(err) => {
                debug!(
                    %service,
                    region = %self.region,
                    visibility = %self.visibility,
                    %err,
                    "No endpoint for service"
                );
                Err(err)
            }
        }
    }
}
