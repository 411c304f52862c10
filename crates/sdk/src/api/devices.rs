//! Devices API.

use super::CategoryApi;
use crate::args::CallArgs;
use crate::client::DashboardClient;
use crate::error::MerakiResult;
use crate::types::Device;
use meraki_mcp_core::SdkCategory;
use std::ops::Deref;

/// Devices API; derefs to the generic [`CategoryApi`].
pub struct DevicesApi<'a> {
    api: CategoryApi<'a>,
}

impl<'a> DevicesApi<'a> {
    pub(crate) fn new(client: &'a DashboardClient) -> Self {
        Self {
            api: CategoryApi::new(client, SdkCategory::Devices),
        }
    }

    /// Get a device by serial.
    pub async fn get_device(&self, serial: &str) -> MerakiResult<Device> {
        self.api
            .invoke_as("getDevice", CallArgs::new().path("serial", serial))
            .await
    }
}

impl<'a> Deref for DevicesApi<'a> {
    type Target = CategoryApi<'a>;

    fn deref(&self) -> &Self::Target {
        &self.api
    }
}
