use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Proxy {
    /// Proxied backends. Order matters, the console matches routes in this order.
    pub services: Vec<ProxyService>,
}

/// A backend service which the console exposes to its clients under [`Self::console_api_path`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProxyService {
    pub endpoint: String,
    #[serde(rename = "consoleAPIPath")]
    pub console_api_path: String,
    /// PEM encoded CA certificate (or a path to one) used to verify the backend.
    pub ca_certificate: String,
    /// Forward the user's bearer token to the backend.
    pub authorize: bool,
}
