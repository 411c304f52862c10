use super::*;

const C: SdkCategory = SdkCategory::Administered;

pub(super) const ENDPOINTS: &[Endpoint] = &[
    get(C, "getAdministeredIdentitiesMe", "/administered/identities/me", "Returns the identity of the current user"),
    get(C, "getAdministeredIdentitiesMeApiKeys", "/administered/identities/me/api/keys", "List the non-sensitive metadata associated with the API keys"),
    post(C, "generateAdministeredIdentitiesMeApiKeys", "/administered/identities/me/api/keys/generate", "Generates an API key for an identity"),
    post(C, "revokeAdministeredIdentitiesMeApiKeys", "/administered/identities/me/api/keys/{suffix}/revoke", "Revokes an identity's API key, using the last four characters of the key"),
];
