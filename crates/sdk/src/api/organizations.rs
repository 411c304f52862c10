//! Organizations API.

use super::{into_list, CategoryApi};
use crate::args::CallArgs;
use crate::client::DashboardClient;
use crate::error::MerakiResult;
use crate::types::{Device, Network, Organization};
use meraki_mcp_core::SdkCategory;
use serde_json::Value;
use std::ops::Deref;

/// Organizations API; derefs to the generic [`CategoryApi`].
pub struct OrganizationsApi<'a> {
    api: CategoryApi<'a>,
}

impl<'a> OrganizationsApi<'a> {
    pub(crate) fn new(client: &'a DashboardClient) -> Self {
        Self {
            api: CategoryApi::new(client, SdkCategory::Organizations),
        }
    }

    /// List every organization the API key can access.
    pub async fn get_organizations(&self) -> MerakiResult<Vec<Organization>> {
        self.api
            .invoke_as("getOrganizations", CallArgs::new().all_pages())
            .await
    }

    /// Get a specific organization by ID.
    pub async fn get_organization(&self, organization_id: &str) -> MerakiResult<Organization> {
        self.api
            .invoke_as(
                "getOrganization",
                CallArgs::new().path("organizationId", organization_id),
            )
            .await
    }

    /// List every network in an organization.
    pub async fn get_organization_networks(
        &self,
        organization_id: &str,
    ) -> MerakiResult<Vec<Network>> {
        self.api
            .invoke_as(
                "getOrganizationNetworks",
                CallArgs::new()
                    .path("organizationId", organization_id)
                    .all_pages(),
            )
            .await
    }

    /// List every device in an organization.
    pub async fn get_organization_devices(
        &self,
        organization_id: &str,
    ) -> MerakiResult<Vec<Device>> {
        self.api
            .invoke_as(
                "getOrganizationDevices",
                CallArgs::new()
                    .path("organizationId", organization_id)
                    .all_pages(),
            )
            .await
    }

    /// List every health alert raised in an organization.
    pub async fn get_organization_assurance_alerts(
        &self,
        organization_id: &str,
    ) -> MerakiResult<Vec<Value>> {
        let alerts = self
            .api
            .invoke(
                "getOrganizationAssuranceAlerts",
                CallArgs::new()
                    .path("organizationId", organization_id)
                    .all_pages(),
            )
            .await?;
        into_list(alerts)
    }

    /// List the firmware upgrades of an organization.
    pub async fn get_organization_firmware_upgrades(
        &self,
        organization_id: &str,
    ) -> MerakiResult<Vec<Value>> {
        let upgrades = self
            .api
            .invoke(
                "getOrganizationFirmwareUpgrades",
                CallArgs::new().path("organizationId", organization_id),
            )
            .await?;
        into_list(upgrades)
    }
}

impl<'a> Deref for OrganizationsApi<'a> {
    type Target = CategoryApi<'a>;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
