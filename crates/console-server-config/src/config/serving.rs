use serde::{Deserialize, Serialize};

/// Configuration for serving HTTP.
///
/// Only `bindAddress`, `certFile`, `keyFile` and `redirectPort` are supported by the console. The
/// remaining fields are inherited from the shared `HTTPServingInfo` schema and exist so that they
/// can be rejected, see [`crate::resolve::serving::validate`].
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServingInfo {
    pub bind_address: String,
    pub cert_file: String,
    pub key_file: String,
    /// Plain HTTP port redirecting to the TLS listener, `0` disables the redirect.
    pub redirect_port: i64,

    pub bind_network: String,
    #[serde(rename = "clientCA")]
    pub client_ca: String,
    pub named_certificates: Vec<serde_yaml::Value>,
    #[serde(rename = "minTLSVersion")]
    pub min_tls_version: String,
    pub cipher_suites: Vec<String>,
    pub max_requests_in_flight: i64,
    pub request_timeout_seconds: i64,
}
