use serde::{Deserialize, Serialize};

/// Authentication settings of the console.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Auth {
    pub auth_type: String,
    pub oidc_issuer: String,
    pub oidc_extra_scopes: Vec<String>,
    #[serde(rename = "oidcOCLoginCommand")]
    pub oidc_oc_login_command: String,
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub client_secret_file: String,
    #[serde(rename = "oauthEndpointCAFile")]
    pub oauth_endpoint_ca_file: String,
    pub logout_redirect: String,
    pub inactivity_timeout_seconds: u32,
}

/// Web session settings.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    pub cookie_encryption_key_file: String,
    pub cookie_authentication_key_file: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Providers {
    #[serde(rename = "statuspageID")]
    pub statuspage_id: String,
}
