//! Basic usage of the Dashboard SDK.
//!
//! Run with: `MERAKI_API_KEY=... cargo run --example basic_usage -p meraki-sdk`

use meraki_sdk::{CallArgs, DashboardClient, MerakiResult, SdkCategory};

#[tokio::main]
async fn main() -> MerakiResult<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("MERAKI_API_KEY").unwrap_or_default();
    let client = DashboardClient::builder().api_key(api_key).build()?;

    let orgs = client.organizations().get_organizations().await?;
    println!("Found {} organizations", orgs.len());

    for org in orgs.iter().take(3) {
        println!("\n{} ({})", org.name, org.id);

        let networks = client.organizations().get_organization_networks(&org.id).await?;
        for network in networks.iter().take(5) {
            println!(
                "  - {} [{}]",
                network.name,
                network.product_types.join(", ")
            );
        }
    }

    // Any catalogued operation, by category and operation id
    if let Some(org) = orgs.first() {
        let statuses = client
            .category(SdkCategory::Organizations)
            .invoke(
                "getOrganizationDevicesStatuses",
                CallArgs::new().path("organizationId", &org.id).total_pages(1),
            )
            .await?;
        println!("\nDevice statuses: {}", statuses);
    }

    Ok(())
}
