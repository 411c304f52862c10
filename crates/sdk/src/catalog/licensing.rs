use super::*;

const C: SdkCategory = SdkCategory::Licensing;

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getOrganizationLicensingCotermLicenses", "/organizations/{organizationId}/licensing/coterm/licenses", "List the licenses in a coterm organization")
        .paginated()
        .query(&[
            Param::boolean("invalidated", "Filter on invalidated licenses"),
            Param::boolean("expired", "Filter on expired licenses"),
        ]),
    post(C, "moveOrganizationLicensingCotermLicenses", "/organizations/{organizationId}/licensing/coterm/licenses/move", "Moves non-expired licenses to another organization")
        .body(&[
            Param::json("destination", "Destination organization and mode").required(),
            Param::json("licenses", "Licenses to move, [{\"key\", \"counts\"}]").required(),
        ]),
    get(C, "getAdministeredLicensingSubscriptionEntitlements", "/administered/licensing/subscription/entitlements", "Retrieve the list of purchasable entitlements")
        .query(&[Param::list("skus", "Filter by SKUs")]),
    get(C, "getAdministeredLicensingSubscriptionSubscriptions", "/administered/licensing/subscription/subscriptions", "List available subscriptions")
        .paginated()
        .query(&[
            Param::list("organizationIds", "Organizations to list subscriptions for").required(),
            Param::list("subscriptionIds", "Filter by subscription IDs"),
            Param::list("statuses", "Filter by status (active, canceled, expired, inactive, out_of_compliance)"),
            PRODUCT_TYPES,
            Param::string("name", "Filter by subscription name"),
        ]),
    get(C, "getAdministeredLicensingSubscriptionSubscriptionsComplianceStatuses", "/administered/licensing/subscription/subscriptions/compliance/statuses", "Get compliance status for requested subscriptions")
        .query(&[
            Param::list("organizationIds", "Organizations to check").required(),
            Param::list("subscriptionIds", "Filter by subscription IDs"),
        ]),
    post(C, "claimAdministeredLicensingSubscriptionSubscriptions", "/administered/licensing/subscription/subscriptions/claim", "Claim a subscription into an organization")
        .body(&[
            Param::string("claimKey", "Subscription claim key").required(),
            Param::string("organizationId", "Organization to claim into").required(),
            NAME,
            Param::string("description", "Subscription description"),
        ]),
    post(C, "validateAdministeredLicensingSubscriptionSubscriptionsClaimKey", "/administered/licensing/subscription/subscriptions/claimKey/validate", "Find a subscription by claim key")
        .body(&[Param::string("claimKey", "Subscription claim key").required()]),
    post(C, "bindAdministeredLicensingSubscriptionSubscription", "/administered/licensing/subscription/subscriptions/{subscriptionId}/bind", "Bind networks to a subscription")
        .body(&[Param::list("networkIds", "Networks to bind").required()]),
];
