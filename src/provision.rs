use thiserror::Error;

use crate::settings::{Region, SettingsDraft};

/// Resource kinds offered by the create-infrastructure menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Vm,
    Storage,
    Database,
    Network,
    WebApp,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Vm,
        ResourceType::Storage,
        ResourceType::Database,
        ResourceType::Network,
        ResourceType::WebApp,
    ];

    /// Human readable label shown in menus.
    pub fn label(self) -> &'static str {
        match self {
            ResourceType::Vm => "Virtual Machine",
            ResourceType::Storage => "Storage Account",
            ResourceType::Database => "Database",
            ResourceType::Network => "Network Resources",
            ResourceType::WebApp => "Web App / App Service",
        }
    }

    /// Short identifier used in notices and, eventually, provisioning calls.
    pub fn slug(self) -> &'static str {
        match self {
            ResourceType::Vm => "vm",
            ResourceType::Storage => "storage",
            ResourceType::Database => "database",
            ResourceType::Network => "network",
            ResourceType::WebApp => "webapp",
        }
    }
}

/// Notice printed while no provisioning backend is wired in.
pub fn placeholder_notice(resource: ResourceType) -> String {
    format!(
        "Infrastructure creation for {} not yet implemented.",
        resource.slug()
    )
}

/// Parameters the backend will need once it exists. The settings draft
/// carries subscription, resource group, and region.
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    pub resource: ResourceType,
    pub region: Option<Region>,
    pub settings: Option<SettingsDraft>,
}

#[derive(Debug, Clone)]
pub struct ProvisionReceipt {
    pub resource_id: String,
}

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("provisioning rejected: {0}")]
    Rejected(String),
    #[error("provisioning backend unavailable: {0}")]
    Unavailable(String),
}

/// Seam for the Azure SDK integration. No implementation ships today; the
/// controller falls back to [`placeholder_notice`] when none is provided.
pub trait Provisioner {
    fn provision(
        &self,
        request: &ProvisionRequest,
    ) -> std::result::Result<ProvisionReceipt, ProvisionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_slugs_cover_every_resource() {
        for resource in ResourceType::ALL {
            assert!(!resource.label().is_empty());
            assert!(!resource.slug().is_empty());
        }
    }

    #[test]
    fn placeholder_names_the_chosen_resource() {
        assert_eq!(
            placeholder_notice(ResourceType::Vm),
            "Infrastructure creation for vm not yet implemented."
        );
        assert_eq!(
            placeholder_notice(ResourceType::WebApp),
            "Infrastructure creation for webapp not yet implemented."
        );
    }

    #[test]
    fn repeated_selection_repeats_the_same_notice() {
        let first = placeholder_notice(ResourceType::Database);
        let second = placeholder_notice(ResourceType::Database);
        assert_eq!(first, second);
    }
}
