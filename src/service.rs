//! Service identifiers.
//!
//! Every IBM Cloud service the resolver knows about, along with the
//! environment variable that overrides its endpoint.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Service {
    AccountManagement,
    CertificateManager,
    CfApi,
    Container,
    ContainerRegistry,
    Cis,
    GlobalSearch,
    GlobalTagging,
    Iam,
    IamPap,
    Icd,
    MccpApi,
    ResourceManagement,
    ResourceController,
    ResourceCatalog,
    Uaa,
    Cse,
    Schematics,
    UserManagement,
    Hpcs,
    Functions,
}

impl Service {
    /// Every known service, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::AccountManagement,
        Self::CertificateManager,
        Self::CfApi,
        Self::Container,
        Self::ContainerRegistry,
        Self::Cis,
        Self::GlobalSearch,
        Self::GlobalTagging,
        Self::Iam,
        Self::IamPap,
        Self::Icd,
        Self::MccpApi,
        Self::ResourceManagement,
        Self::ResourceController,
        Self::ResourceCatalog,
        Self::Uaa,
        Self::Cse,
        Self::Schematics,
        Self::UserManagement,
        Self::Hpcs,
        Self::Functions,
    ];

    /// Short lowercase identifier for the service.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::AccountManagement => "account-management",
            Self::CertificateManager => "certificate-manager",
            Self::CfApi => "cf",
            Self::Container => "cs",
            Self::ContainerRegistry => "cr",
            Self::Cis => "cis",
            Self::GlobalSearch => "global-search",
            Self::GlobalTagging => "global-tagging",
            Self::Iam => "iam",
            Self::IamPap => "iam-pap",
            Self::Icd => "icd",
            Self::MccpApi => "mccp",
            Self::ResourceManagement => "resource-management",
            Self::ResourceController => "resource-controller",
            Self::ResourceCatalog => "resource-catalog",
            Self::Uaa => "uaa",
            Self::Cse => "cse",
            Self::Schematics => "schematics",
            Self::UserManagement => "user-management",
            Self::Hpcs => "hpcs",
            Self::Functions => "functions",
        }
    }

    /// Human-readable display name for the service.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::AccountManagement => "Account Management",
            Self::CertificateManager => "Certificate Manager",
            Self::CfApi => "Cloud Foundry",
            Self::Container => "Container Service",
            Self::ContainerRegistry => "Container Registry",
            Self::Cis => "Cloud Internet Services",
            Self::GlobalSearch => "Global Search",
            Self::GlobalTagging => "Global Tagging",
            Self::Iam => "IAM",
            Self::IamPap => "IAM Policy Administration",
            Self::Icd => "Cloud Databases",
            Self::MccpApi => "MCCP",
            Self::ResourceManagement => "Resource Management",
            Self::ResourceController => "Resource Controller",
            Self::ResourceCatalog => "Resource Catalog",
            Self::Uaa => "UAA",
            Self::Cse => "Cloud Service Endpoint",
            Self::Schematics => "Schematics",
            Self::UserManagement => "User Management",
            Self::Hpcs => "Hyper Protect Crypto Services",
            Self::Functions => "Functions",
        }
    }

    /// Environment variable that, when set to a non-empty value, replaces the
    /// computed endpoint for this service.
    pub const fn env_var(&self) -> &'static str {
        match self {
            Self::AccountManagement => "IBMCLOUD_ACCOUNT_MANAGEMENT_API_ENDPOINT",
            Self::CertificateManager => "IBMCLOUD_CERTIFICATE_MANAGER_API_ENDPOINT",
            Self::CfApi => "IBMCLOUD_CF_API_ENDPOINT",
            Self::Container => "IBMCLOUD_CS_API_ENDPOINT",
            Self::ContainerRegistry => "IBMCLOUD_CR_API_ENDPOINT",
            Self::Cis => "IBMCLOUD_CIS_API_ENDPOINT",
            Self::GlobalSearch => "IBMCLOUD_GS_API_ENDPOINT",
            Self::GlobalTagging => "IBMCLOUD_GT_API_ENDPOINT",
            Self::Iam => "IBMCLOUD_IAM_API_ENDPOINT",
            Self::IamPap => "IBMCLOUD_IAMPAP_API_ENDPOINT",
            Self::Icd => "IBMCLOUD_ICD_API_ENDPOINT",
            Self::MccpApi => "IBMCLOUD_MCCP_API_ENDPOINT",
            Self::ResourceManagement => "IBMCLOUD_RESOURCE_MANAGEMENT_API_ENDPOINT",
            Self::ResourceController => "IBMCLOUD_RESOURCE_CONTROLLER_API_ENDPOINT",
            Self::ResourceCatalog => "IBMCLOUD_RESOURCE_CATALOG_API_ENDPOINT",
            Self::Uaa => "IBMCLOUD_UAA_ENDPOINT",
            Self::Cse => "IBMCLOUD_CSE_ENDPOINT",
            Self::Schematics => "IBMCLOUD_SCHEMATICS_API_ENDPOINT",
            Self::UserManagement => "IBMCLOUD_USER_MANAGEMENT_ENDPOINT",
            Self::Hpcs => "IBMCLOUD_HPCS_API_ENDPOINT",
            Self::Functions => "IBMCLOUD_FUNCTIONS_API_ENDPOINT",
        }
    }

    /// Whether the service has any private network endpoint.
    pub const fn supports_private(&self) -> bool {
        !matches!(
            self,
            Self::CfApi | Self::Container | Self::MccpApi | Self::Uaa | Self::Cse | Self::Functions
        )
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Service {
    type Err = ParseServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|service| service.id() == id)
            .ok_or_else(|| ParseServiceError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_env_vars_are_unique() {
        let vars: HashSet<_> = Service::ALL.iter().map(Service::env_var).collect();
        assert_eq!(vars.len(), Service::ALL.len());
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = Service::ALL.iter().map(Service::id).collect();
        assert_eq!(ids.len(), Service::ALL.len());
    }

    #[test]
    fn test_parse_from_id() {
        assert_eq!("cr".parse::<Service>(), Ok(Service::ContainerRegistry));
        assert_eq!(" IAM-PAP ".parse::<Service>(), Ok(Service::IamPap));
        for service in Service::ALL {
            assert_eq!(service.id().parse::<Service>(), Ok(service));
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "object-storage".parse::<Service>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown service: \"object-storage\"");
    }

    #[test]
    fn test_private_support() {
        assert!(!Service::CfApi.supports_private());
        assert!(!Service::Functions.supports_private());
        assert!(Service::Hpcs.supports_private());
        assert!(Service::Schematics.supports_private());
    }

    #[test]
    fn test_display() {
        assert_eq!(Service::CfApi.to_string(), "Cloud Foundry");
    }
}
