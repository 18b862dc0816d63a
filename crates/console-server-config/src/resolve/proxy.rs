use std::collections::HashMap;

use snafu::{ResultExt, Snafu};
use url::Url;

use crate::config::ProxyService;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Snafu)]
pub enum Error {
    #[snafu(display(
        "proxy services {first_endpoint:?} and {second_endpoint:?} share the consoleAPIPath {path:?}"
    ))]
    DuplicateConsoleApiPath {
        path: String,
        first_endpoint: String,
        second_endpoint: String,
    },

    #[snafu(display("proxy service {endpoint:?} has no consoleAPIPath"))]
    MissingConsoleApiPath { endpoint: String },

    #[snafu(display("failed to parse endpoint {endpoint:?} of proxy service {path:?}"))]
    ParseEndpoint {
        source: url::ParseError,
        endpoint: String,
        path: String,
    },
}

/// Validates the proxy services and returns them in their original order.
///
/// Order is preserved because the console matches proxied routes in sequence.
pub fn resolve_services(services: Vec<ProxyService>) -> Result<Vec<ProxyService>> {
    let mut seen: HashMap<&str, &ProxyService> = HashMap::with_capacity(services.len());

    for service in &services {
        let path = service.console_api_path.as_str();
        if path.is_empty() {
            return MissingConsoleApiPathSnafu {
                endpoint: &service.endpoint,
            }
            .fail();
        }

        Url::parse(&service.endpoint).with_context(|_| ParseEndpointSnafu {
            endpoint: &service.endpoint,
            path,
        })?;

        if let Some(first) = seen.insert(path, service) {
            return DuplicateConsoleApiPathSnafu {
                path,
                first_endpoint: &first.endpoint,
                second_endpoint: &service.endpoint,
            }
            .fail();
        }
    }

    Ok(services)
}
