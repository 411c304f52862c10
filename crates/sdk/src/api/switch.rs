//! Switch API.

use super::{into_list, CategoryApi};
use crate::args::CallArgs;
use crate::client::DashboardClient;
use crate::error::MerakiResult;
use meraki_mcp_core::SdkCategory;
use serde_json::Value;
use std::ops::Deref;

/// Switch API; derefs to the generic [`CategoryApi`].
pub struct SwitchApi<'a> {
    api: CategoryApi<'a>,
}

impl<'a> SwitchApi<'a> {
    pub(crate) fn new(client: &'a DashboardClient) -> Self {
        Self {
            api: CategoryApi::new(client, SdkCategory::Switch),
        }
    }

    /// List the ports of a switch.
    pub async fn get_device_switch_ports(&self, serial: &str) -> MerakiResult<Vec<Value>> {
        let ports = self
            .api
            .invoke("getDeviceSwitchPorts", CallArgs::new().path("serial", serial))
            .await?;
        into_list(ports)
    }
}

impl<'a> Deref for SwitchApi<'a> {
    type Target = CategoryApi<'a>;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
