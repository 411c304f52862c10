//! Appliance API.

use super::{into_list, CategoryApi};
use crate::args::CallArgs;
use crate::client::DashboardClient;
use crate::error::MerakiResult;
use meraki_mcp_core::SdkCategory;
use serde_json::Value;
use std::ops::Deref;

/// Appliance API; derefs to the generic [`CategoryApi`].
pub struct ApplianceApi<'a> {
    api: CategoryApi<'a>,
}

impl<'a> ApplianceApi<'a> {
    pub(crate) fn new(client: &'a DashboardClient) -> Self {
        Self {
            api: CategoryApi::new(client, SdkCategory::Appliance),
        }
    }

    /// List the VLANs of an MX network.
    pub async fn get_network_appliance_vlans(&self, network_id: &str) -> MerakiResult<Vec<Value>> {
        let vlans = self
            .api
            .invoke(
                "getNetworkApplianceVlans",
                CallArgs::new().path("networkId", network_id),
            )
            .await?;
        into_list(vlans)
    }

    /// Update one VLAN with the given body fields.
    pub async fn update_network_appliance_vlan(
        &self,
        network_id: &str,
        vlan_id: &str,
        body: Value,
    ) -> MerakiResult<Value> {
        self.api
            .invoke(
                "updateNetworkApplianceVlan",
                CallArgs::new()
                    .path("networkId", network_id)
                    .path("vlanId", vlan_id)
                    .body(body),
            )
            .await
    }
}

impl<'a> Deref for ApplianceApi<'a> {
    type Target = CategoryApi<'a>;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
