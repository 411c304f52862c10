//! Networks API.

use super::CategoryApi;
use crate::args::CallArgs;
use crate::client::DashboardClient;
use crate::error::MerakiResult;
use crate::types::{Device, Network, NetworkClient};
use meraki_mcp_core::SdkCategory;
use std::ops::Deref;

/// Largest page size accepted by the clients endpoint
const CLIENTS_PER_PAGE: u32 = 1000;

/// Networks API; derefs to the generic [`CategoryApi`].
pub struct NetworksApi<'a> {
    api: CategoryApi<'a>,
}

impl<'a> NetworksApi<'a> {
    pub(crate) fn new(client: &'a DashboardClient) -> Self {
        Self {
            api: CategoryApi::new(client, SdkCategory::Networks),
        }
    }

    /// Get a network by ID.
    pub async fn get_network(&self, network_id: &str) -> MerakiResult<Network> {
        self.api
            .invoke_as("getNetwork", CallArgs::new().path("networkId", network_id))
            .await
    }

    /// List the devices in a network.
    pub async fn get_network_devices(&self, network_id: &str) -> MerakiResult<Vec<Device>> {
        self.api
            .invoke_as(
                "getNetworkDevices",
                CallArgs::new().path("networkId", network_id),
            )
            .await
    }

    /// List the clients seen on a network within `timespan` seconds
    /// (the Dashboard default of one day when `None`).
    pub async fn get_network_clients(
        &self,
        network_id: &str,
        timespan: Option<u64>,
    ) -> MerakiResult<Vec<NetworkClient>> {
        let mut args = CallArgs::new()
            .path("networkId", network_id)
            .query("perPage", CLIENTS_PER_PAGE)
            .all_pages();
        if let Some(timespan) = timespan {
            args = args.query("timespan", timespan);
        }

        self.api.invoke_as("getNetworkClients", args).await
    }
}

impl<'a> Deref for NetworksApi<'a> {
    type Target = CategoryApi<'a>;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
