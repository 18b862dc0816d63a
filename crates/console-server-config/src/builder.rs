//! Assembles a resolved [`Config`] from the inputs gathered during a reconciliation pass.
use std::collections::BTreeMap;

use snafu::{ResultExt, Snafu};
use tracing::instrument;

use crate::{
    access_review::AccessReviewer,
    config::{
        Auth, ClusterInfo, Config, Customization, DirectiveType, MonitoringInfo, Providers, Proxy,
        ProxyService, ServingInfo, Session,
    },
    resolve::{ResolutionOptions, customization, deduplicate, proxy, serving},
};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("invalid servingInfo"))]
    ValidateServingInfo { source: serving::Error },

    #[snafu(display("invalid proxy configuration"))]
    ResolveProxyServices { source: proxy::Error },

    #[snafu(display("failed to resolve the customization"))]
    ResolveCustomization { source: customization::Error },
}

/// A builder collecting the raw inputs of a console server configuration.
///
/// Nothing is validated until [`ConfigBuilder::build`], which resolves all inputs in one pass and
/// either returns a complete [`Config`] or an error. Partial configurations are never returned.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    serving_info: ServingInfo,
    cluster_info: ClusterInfo,
    auth: Auth,
    session: Session,
    customization: Customization,
    providers: Providers,
    monitoring_info: MonitoringInfo,
    plugins: BTreeMap<String, String>,
    i18n_namespaces: Vec<String>,
    proxy_services: Vec<ProxyService>,
    content_security_policy: BTreeMap<DirectiveType, Vec<String>>,
    telemetry: BTreeMap<String, String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serving_info(&mut self, serving_info: ServingInfo) -> &mut Self {
        self.serving_info = serving_info;
        self
    }

    pub fn cluster_info(&mut self, cluster_info: ClusterInfo) -> &mut Self {
        self.cluster_info = cluster_info;
        self
    }

    pub fn auth(&mut self, auth: Auth) -> &mut Self {
        self.auth = auth;
        self
    }

    pub fn session(&mut self, session: Session) -> &mut Self {
        self.session = session;
        self
    }

    pub fn customization(&mut self, customization: Customization) -> &mut Self {
        self.customization = customization;
        self
    }

    pub fn providers(&mut self, providers: Providers) -> &mut Self {
        self.providers = providers;
        self
    }

    pub fn monitoring_info(&mut self, monitoring_info: MonitoringInfo) -> &mut Self {
        self.monitoring_info = monitoring_info;
        self
    }

    /// Registers a console plugin served from `base_url`. A later call for the same plugin
    /// replaces the URL.
    pub fn add_plugin(
        &mut self,
        name: impl Into<String>,
        base_url: impl Into<String>,
    ) -> &mut Self {
        self.plugins.insert(name.into(), base_url.into());
        self
    }

    pub fn add_i18n_namespace(&mut self, namespace: impl Into<String>) -> &mut Self {
        self.i18n_namespaces.push(namespace.into());
        self
    }

    /// Appends a proxied backend. Services are routed in the order they are added.
    pub fn add_proxy_service(&mut self, service: ProxyService) -> &mut Self {
        self.proxy_services.push(service);
        self
    }

    /// Adds `sources` to the Content-Security-Policy `directive`, e.g. sources requested by a
    /// console plugin.
    pub fn add_content_security_policy_sources(
        &mut self,
        directive: DirectiveType,
        sources: impl IntoIterator<Item = impl Into<String>>,
    ) -> &mut Self {
        self.content_security_policy
            .entry(directive)
            .or_default()
            .extend(sources.into_iter().map(Into::into));
        self
    }

    pub fn add_telemetry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.telemetry.insert(key.into(), value.into());
        self
    }

    /// Validates and resolves all inputs into a [`Config`].
    ///
    /// The `reviewer` is only consulted for access-review gated perspectives.
    #[instrument(skip_all)]
    pub async fn build<R>(&self, reviewer: &R, options: &ResolutionOptions) -> Result<Config>
    where
        R: AccessReviewer + ?Sized,
    {
        serving::validate(&self.serving_info).context(ValidateServingInfoSnafu)?;

        let services = proxy::resolve_services(self.proxy_services.clone())
            .context(ResolveProxyServicesSnafu)?;

        let customization =
            customization::resolve_customization(self.customization.clone(), reviewer, options)
                .await
                .context(ResolveCustomizationSnafu)?;

        let content_security_policy = self
            .content_security_policy
            .iter()
            .map(|(directive, sources)| (*directive, deduplicate(sources.iter().cloned())))
            .filter(|(_, sources)| !sources.is_empty())
            .collect::<BTreeMap<_, _>>();

        tracing::info!(
            perspectives = customization.perspectives.len(),
            plugins = self.plugins.len(),
            proxy.services = services.len(),
            "resolved console server configuration"
        );

        Ok(Config {
            serving_info: self.serving_info.clone(),
            cluster_info: self.cluster_info.clone(),
            auth: self.auth.clone(),
            session: self.session.clone(),
            customization,
            providers: self.providers.clone(),
            monitoring_info: self.monitoring_info.clone(),
            plugins: self.plugins.clone(),
            i18n_namespaces: deduplicate(self.i18n_namespaces.iter().cloned()),
            proxy: Proxy { services },
            content_security_policy,
            telemetry: self.telemetry.clone(),
            ..Config::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use k8s_openapi::api::authorization::v1::ResourceAttributes;

    use super::*;
    use crate::access_review::{self, AccessDecision};

    struct PermitAll;

    #[async_trait]
    impl AccessReviewer for PermitAll {
        async fn review(
            &self,
            _attributes: &ResourceAttributes,
        ) -> access_review::Result<AccessDecision> {
            Ok(AccessDecision::Permitted)
        }
    }

    fn proxy_service(path: &str) -> ProxyService {
        ProxyService {
            endpoint: "https://backend.plugin.svc:9443".to_owned(),
            console_api_path: path.to_owned(),
            ca_certificate: String::new(),
            authorize: true,
        }
    }

    #[tokio::test]
    async fn builds_resolved_config() {
        let config = ConfigBuilder::new()
            .serving_info(ServingInfo {
                bind_address: "https://[::]:8443".to_owned(),
                ..ServingInfo::default()
            })
            .add_plugin("monitoring-plugin", "https://monitoring-plugin.svc:9443/")
            .add_i18n_namespace("plugin__monitoring-plugin")
            .add_i18n_namespace("plugin__monitoring-plugin")
            .add_proxy_service(proxy_service("/api/proxy/plugin/monitoring-plugin/backend/"))
            .add_content_security_policy_sources(
                DirectiveType::ScriptSrc,
                ["https://a.example", "https://b.example"],
            )
            .add_content_security_policy_sources(DirectiveType::ScriptSrc, ["https://a.example"])
            .add_content_security_policy_sources(DirectiveType::ImgSrc, Vec::<String>::new())
            .add_telemetry("SEGMENT_API_HOST", "console.redhat.com/connections/api/v1")
            .build(&PermitAll, &ResolutionOptions::default())
            .await
            .expect("config is valid");

        assert_eq!(config.api_version, crate::config::API_VERSION);
        assert_eq!(config.i18n_namespaces, ["plugin__monitoring-plugin"]);
        assert_eq!(config.proxy.services.len(), 1);
        assert_eq!(
            config.content_security_policy,
            BTreeMap::from([(
                DirectiveType::ScriptSrc,
                vec![
                    "https://a.example".to_owned(),
                    "https://b.example".to_owned()
                ]
            )])
        );
        assert_eq!(config.telemetry.len(), 1);
    }

    #[tokio::test]
    async fn unsupported_serving_info_aborts_build() {
        let error = ConfigBuilder::new()
            .serving_info(ServingInfo {
                min_tls_version: "VersionTLS13".to_owned(),
                ..ServingInfo::default()
            })
            .build(&PermitAll, &ResolutionOptions::default())
            .await
            .expect_err("unsupported fields must be rejected");

        assert!(matches!(error, Error::ValidateServingInfo { .. }));
    }

    #[tokio::test]
    async fn colliding_proxy_paths_abort_build() {
        let error = ConfigBuilder::new()
            .add_proxy_service(proxy_service("/api/proxy/a/"))
            .add_proxy_service(proxy_service("/api/proxy/a/"))
            .build(&PermitAll, &ResolutionOptions::default())
            .await
            .expect_err("colliding paths must be rejected");

        assert!(matches!(error, Error::ResolveProxyServices { .. }));
    }
}
