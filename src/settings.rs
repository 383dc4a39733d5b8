use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, Result};

/// Resource group used when the user leaves the prompt blank.
pub const DEFAULT_RESOURCE_GROUP: &str = "rg-infra-creator";

/// Azure regions offered by the settings picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    EastUs,
    WestUs,
    NorthEurope,
    WestEurope,
    SoutheastAsia,
    EastAsia,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::EastUs,
        Region::WestUs,
        Region::NorthEurope,
        Region::WestEurope,
        Region::SoutheastAsia,
        Region::EastAsia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::EastUs => "eastus",
            Region::WestUs => "westus",
            Region::NorthEurope => "northeurope",
            Region::WestEurope => "westeurope",
            Region::SoutheastAsia => "southeastasia",
            Region::EastAsia => "eastasia",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| AppError::message(format!("Unknown Azure region: {s}")))
    }
}

/// User-entered configuration held in memory for the session. Never written
/// to durable storage; `SettingsStore` is the seam where that will happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    pub subscription_id: String,
    pub resource_group: String,
    pub region: Region,
}

impl SettingsDraft {
    /// Lines echoed back to the user after the settings form completes.
    pub fn confirmation_lines(&self) -> Vec<String> {
        vec![
            format!("Subscription: {}", self.subscription_id),
            format!("Resource Group: {}", self.resource_group),
            format!("Region: {}", self.region),
        ]
    }
}

/// Reject blank subscription ids; everything else is accepted as-is until
/// real subscription lookup exists.
pub fn validate_subscription_id(input: &str) -> std::result::Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err("Subscription ID is required")
    } else {
        Ok(trimmed.to_string())
    }
}

/// Blank resource group falls back to [`DEFAULT_RESOURCE_GROUP`].
pub fn resource_group_or_default(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_RESOURCE_GROUP.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Persistence seam for settings. Not implemented yet; the controller prints
/// a placeholder whenever no store is wired in.
pub trait SettingsStore {
    fn save(&self, draft: &SettingsDraft) -> Result<()>;
    fn load(&self) -> Result<Option<SettingsDraft>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_regions_parse_from_their_names() {
        for region in Region::ALL {
            let parsed: Region = region.as_str().parse().expect("region parses");
            assert_eq!(parsed, region);
        }
    }

    #[test]
    fn rejects_unknown_region() {
        let err = "centralmars".parse::<Region>().expect_err("should fail");
        assert!(err.to_string().contains("centralmars"));
    }

    #[test]
    fn subscription_id_must_be_present() {
        assert!(validate_subscription_id("").is_err());
        assert!(validate_subscription_id("   ").is_err());
        assert_eq!(
            validate_subscription_id(" sub-123 ").expect("valid"),
            "sub-123"
        );
    }

    #[test]
    fn blank_resource_group_uses_default() {
        assert_eq!(resource_group_or_default(""), DEFAULT_RESOURCE_GROUP);
        assert_eq!(resource_group_or_default("  "), DEFAULT_RESOURCE_GROUP);
        assert_eq!(resource_group_or_default("rg-prod"), "rg-prod");
    }

    #[test]
    fn confirmation_echo_matches_entered_values() {
        let draft = SettingsDraft {
            subscription_id: "sub-123".to_string(),
            resource_group: resource_group_or_default(""),
            region: Region::WestEurope,
        };
        assert_eq!(
            draft.confirmation_lines(),
            vec![
                "Subscription: sub-123",
                "Resource Group: rg-infra-creator",
                "Region: westeurope",
            ]
        );
    }
}
