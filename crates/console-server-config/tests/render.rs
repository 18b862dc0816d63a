use std::collections::HashMap;

use async_trait::async_trait;
use console_server_config::{
    access_review::{self, AccessDecision, AccessReviewer},
    builder::ConfigBuilder,
    config::{
        Auth, CatalogTypesState, ClusterInfo, Config, ControlPlaneTopology,
        DeveloperCatalogCategory, DeveloperCatalogCustomization, DeveloperCatalogSubcategory,
        DeveloperCatalogTypes, DirectiveType, OptionalList, Perspective, PerspectiveVisibility,
        PinnedResourceReference, ProxyService, ResourceAttributesAccessReview, ServingInfo,
    },
    k8s_openapi::api::authorization::v1::ResourceAttributes,
    resolve::{
        ResolutionOptions,
        catalog::{CatalogTypeVisibility, resolve_types},
    },
    yaml,
};
use serde_yaml::Value;

/// Permission checks answered by `resource/verb`.
struct ClusterPermissions(HashMap<&'static str, AccessDecision>);

#[async_trait]
impl AccessReviewer for ClusterPermissions {
    async fn review(
        &self,
        attributes: &ResourceAttributes,
    ) -> access_review::Result<AccessDecision> {
        let key = format!(
            "{}/{}",
            attributes.resource.as_deref().unwrap_or_default(),
            attributes.verb.as_deref().unwrap_or_default()
        );

        self.0
            .get(key.as_str())
            .copied()
            .ok_or(access_review::Error::Unavailable { message: key })
    }
}

fn developer() -> ClusterPermissions {
    ClusterPermissions(HashMap::from([
        ("namespaces/list", AccessDecision::Denied),
        ("deployments/create", AccessDecision::Permitted),
        ("nodes/get", AccessDecision::Denied),
    ]))
}

fn check(resource: &str, verb: &str) -> ResourceAttributes {
    ResourceAttributes {
        resource: Some(resource.to_owned()),
        verb: Some(verb.to_owned()),
        ..ResourceAttributes::default()
    }
}

fn builder() -> ConfigBuilder {
    let mut builder = ConfigBuilder::new();
    builder
        .serving_info(ServingInfo {
            bind_address: "https://[::]:8443".to_owned(),
            cert_file: "/var/serving-cert/tls.crt".to_owned(),
            key_file: "/var/serving-cert/tls.key".to_owned(),
            ..ServingInfo::default()
        })
        .cluster_info(ClusterInfo {
            console_base_address: "https://console-openshift-console.apps.example.com".to_owned(),
            master_public_url: "https://api.example.com:6443".to_owned(),
            control_plane_topology: ControlPlaneTopology::HighlyAvailable,
            release_version: "4.18.0".to_owned(),
            node_architectures: vec!["amd64".to_owned()],
            ..ClusterInfo::default()
        })
        .auth(Auth {
            client_id: "console".to_owned(),
            client_secret_file: "/var/oauth-config/clientSecret".to_owned(),
            ..Auth::default()
        })
        .add_plugin("acm", "https://acm.open-cluster-management.svc:9443/")
        .add_i18n_namespace("plugin__acm")
        .add_proxy_service(ProxyService {
            endpoint: "https://search.open-cluster-management.svc:4010".to_owned(),
            console_api_path: "/api/proxy/plugin/acm/search/".to_owned(),
            ca_certificate: "-----BEGIN CERTIFICATE-----".to_owned(),
            authorize: true,
        })
        .add_proxy_service(ProxyService {
            endpoint: "https://console-api.open-cluster-management.svc:3000".to_owned(),
            console_api_path: "/api/proxy/plugin/acm/console/".to_owned(),
            ca_certificate: String::new(),
            authorize: true,
        })
        .add_content_security_policy_sources(DirectiveType::ConnectSrc, ["wss://acm.example.com"]);

    builder.customization(console_server_config::config::Customization {
        branding: "ocp".to_owned(),
        developer_catalog: Some(DeveloperCatalogCustomization {
            categories: vec![DeveloperCatalogCategory {
                id: "java".to_owned(),
                label: "Java".to_owned(),
                tags: vec!["java".to_owned(), "jvm".to_owned()],
                subcategories: vec![DeveloperCatalogSubcategory {
                    id: "quarkus".to_owned(),
                    label: "Quarkus".to_owned(),
                    tags: vec!["quarkus".to_owned()],
                }],
            }]
            .into(),
            types: DeveloperCatalogTypes {
                state: Some(CatalogTypesState::Enabled),
                enabled: vec!["Devfile".to_owned(), "HelmChart".to_owned()].into(),
                disabled: vec!["BuilderImage".to_owned()].into(),
            },
        }),
        perspectives: vec![
            Perspective {
                id: "admin".to_owned(),
                visibility: PerspectiveVisibility::access_review(ResourceAttributesAccessReview {
                    required: vec![check("namespaces", "list")],
                    missing: Vec::new(),
                }),
                pinned_resources: OptionalList::Unset,
            },
            Perspective {
                id: "dev".to_owned(),
                visibility: PerspectiveVisibility::access_review(ResourceAttributesAccessReview {
                    required: vec![check("deployments", "create")],
                    missing: vec![check("nodes", "get")],
                }),
                pinned_resources: vec![PinnedResourceReference {
                    group: "apps".to_owned(),
                    version: "v1".to_owned(),
                    resource: "deployments".to_owned(),
                }]
                .into(),
            },
        ],
        ..Default::default()
    });

    builder
}

/// Feeds a parsed configuration back into a builder, as a later reconciliation pass would.
fn builder_from(config: &Config) -> ConfigBuilder {
    let mut builder = ConfigBuilder::new();
    builder
        .serving_info(config.serving_info.clone())
        .cluster_info(config.cluster_info.clone())
        .auth(config.auth.clone())
        .session(config.session.clone())
        .customization(config.customization.clone())
        .providers(config.providers.clone())
        .monitoring_info(config.monitoring_info.clone());

    for (name, base_url) in &config.plugins {
        builder.add_plugin(name, base_url);
    }
    for namespace in &config.i18n_namespaces {
        builder.add_i18n_namespace(namespace);
    }
    for service in &config.proxy.services {
        builder.add_proxy_service(service.clone());
    }
    for (directive, sources) in &config.content_security_policy {
        builder.add_content_security_policy_sources(*directive, sources.iter().cloned());
    }
    for (key, value) in &config.telemetry {
        builder.add_telemetry(key, value);
    }

    builder
}

#[tokio::test]
async fn resolves_and_renders_the_console_config() {
    let config = builder()
        .build(&developer(), &ResolutionOptions::default())
        .await
        .expect("config is valid");

    let perspectives = &config.customization.perspectives;
    assert_eq!(perspectives[0].visibility, PerspectiveVisibility::disabled());
    assert_eq!(perspectives[1].visibility, PerspectiveVisibility::enabled());

    let catalog = config
        .customization
        .developer_catalog
        .as_ref()
        .expect("catalog customization is kept");
    assert_eq!(
        resolve_types(&catalog.types),
        CatalogTypeVisibility::Only(vec!["Devfile".to_owned(), "HelmChart".to_owned()])
    );

    let document: Value = serde_yaml::from_str(&yaml::to_document(&config).expect("serialize"))
        .expect("rendered document must be YAML");

    let services = document["proxy"]["services"]
        .as_sequence()
        .expect("proxy services are emitted");
    assert_eq!(
        services[0]["consoleAPIPath"],
        Value::String("/api/proxy/plugin/acm/search/".to_owned())
    );
    assert_eq!(
        services[1]["consoleAPIPath"],
        Value::String("/api/proxy/plugin/acm/console/".to_owned())
    );

    let types = &document["customization"]["developerCatalog"]["types"];
    assert!(types.get("disabled").is_none());
    assert!(document["customization"]["perspectives"][0]["visibility"]
        .get("accessReview")
        .is_none());
    assert!(document.get("telemetry").is_none());
    assert!(document.get("monitoringInfo").is_none());
}

#[tokio::test]
async fn rendering_is_stable_across_reconciliation_passes() {
    let options = ResolutionOptions::default();
    let config = builder()
        .build(&developer(), &options)
        .await
        .expect("config is valid");
    let document = yaml::to_document(&config).expect("serialize");

    let parsed = yaml::from_document(&document).expect("rendered document must parse");
    assert_eq!(parsed, config);

    // Resolved perspectives carry terminal states, so the oracle is not consulted again
    let no_answers = ClusterPermissions(HashMap::new());
    let resolved_again = builder_from(&parsed)
        .build(&no_answers, &options)
        .await
        .expect("parsed config is valid");

    assert_eq!(resolved_again, config);
    assert_eq!(
        yaml::to_document(&resolved_again).expect("serialize"),
        document
    );
}

#[tokio::test]
async fn oracle_failure_yields_no_document() {
    let mut builder = builder();
    builder.customization(console_server_config::config::Customization {
        perspectives: vec![Perspective {
            id: "dev".to_owned(),
            visibility: PerspectiveVisibility::access_review(ResourceAttributesAccessReview {
                required: vec![check("secrets", "list")],
                missing: Vec::new(),
            }),
            pinned_resources: OptionalList::Unset,
        }],
        ..Default::default()
    });

    let result = builder.build(&developer(), &ResolutionOptions::default()).await;
    assert!(result.is_err());
}
