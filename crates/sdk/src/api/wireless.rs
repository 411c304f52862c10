//! Wireless API.

use super::{into_list, CategoryApi};
use crate::args::CallArgs;
use crate::client::DashboardClient;
use crate::error::MerakiResult;
use meraki_mcp_core::SdkCategory;
use serde_json::Value;
use std::ops::Deref;

/// Wireless API; derefs to the generic [`CategoryApi`].
pub struct WirelessApi<'a> {
    api: CategoryApi<'a>,
}

impl<'a> WirelessApi<'a> {
    pub(crate) fn new(client: &'a DashboardClient) -> Self {
        Self {
            api: CategoryApi::new(client, SdkCategory::Wireless),
        }
    }

    /// List the SSIDs of a network.
    pub async fn get_network_wireless_ssids(&self, network_id: &str) -> MerakiResult<Vec<Value>> {
        let ssids = self
            .api
            .invoke(
                "getNetworkWirelessSsids",
                CallArgs::new().path("networkId", network_id),
            )
            .await?;
        into_list(ssids)
    }
}

impl<'a> Deref for WirelessApi<'a> {
    type Target = CategoryApi<'a>;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
