use snafu::{Snafu, ensure};

use crate::config::ServingInfo;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Snafu)]
pub enum Error {
    #[snafu(display(
        "the console does not support the servingInfo fields {}, remove them",
        fields.join(", ")
    ))]
    UnsupportedFields { fields: Vec<&'static str> },

    #[snafu(display("the servingInfo redirectPort {port} is not a valid TCP port"))]
    InvalidRedirectPort { port: i64 },
}

/// Fails if any servingInfo field inherited from `HTTPServingInfo` is set, or if `redirectPort`
/// is outside of `0..=65535`.
///
/// The console never honoured the inherited fields, so they are rejected instead of being dropped.
pub fn validate(serving_info: &ServingInfo) -> Result<()> {
    let ServingInfo {
        bind_address: _,
        cert_file: _,
        key_file: _,
        redirect_port,
        bind_network,
        client_ca,
        named_certificates,
        min_tls_version,
        cipher_suites,
        max_requests_in_flight,
        request_timeout_seconds,
    } = serving_info;

    let fields = [
        ("bindNetwork", !bind_network.is_empty()),
        ("clientCA", !client_ca.is_empty()),
        ("namedCertificates", !named_certificates.is_empty()),
        ("minTLSVersion", !min_tls_version.is_empty()),
        ("cipherSuites", !cipher_suites.is_empty()),
        ("maxRequestsInFlight", *max_requests_in_flight != 0),
        ("requestTimeoutSeconds", *request_timeout_seconds != 0),
    ]
    .into_iter()
    .filter_map(|(field, set)| set.then_some(field))
    .collect::<Vec<_>>();

    ensure!(fields.is_empty(), UnsupportedFieldsSnafu { fields });
    ensure!(
        u16::try_from(*redirect_port).is_ok(),
        InvalidRedirectPortSnafu {
            port: *redirect_port
        }
    );

    Ok(())
}
