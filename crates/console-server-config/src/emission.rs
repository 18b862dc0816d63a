//! Per-field emission rules of the console server configuration document.
//!
//! Fields which the operator has always sent are emitted even when they hold their zero value,
//! because older console servers rely on seeing them. Every field added later is dropped from the
//! document while empty. The rules live in [`FIELD_EMISSION`] instead of being derived from the
//! Rust types, so the contract can be audited in one place.
//!
//! Paths are dot separated document keys, `[]` descends into every element of a sequence. Fields
//! which are not listed are [`Emission::Always`].
use serde_yaml::{Mapping, Value};

/// How a field is treated when it holds an empty value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Emission {
    /// Emitted even when empty.
    Always,

    /// Omitted when zero, `null`, empty or a mapping consisting only of such values.
    OmitEmpty,

    /// Omitted only when `null`. Used for lists where "absent" and "empty" mean different things.
    OmitUnset,
}

pub const FIELD_EMISSION: &[(&str, Emission)] = &[
    // Inherited from HTTPServingInfo, never supported by the console.
    ("servingInfo.bindNetwork", Emission::OmitEmpty),
    ("servingInfo.clientCA", Emission::OmitEmpty),
    ("servingInfo.namedCertificates", Emission::OmitEmpty),
    ("servingInfo.minTLSVersion", Emission::OmitEmpty),
    ("servingInfo.cipherSuites", Emission::OmitEmpty),
    ("servingInfo.maxRequestsInFlight", Emission::OmitEmpty),
    ("servingInfo.requestTimeoutSeconds", Emission::OmitEmpty),
    ("monitoringInfo", Emission::OmitEmpty),
    ("plugins", Emission::OmitEmpty),
    ("i18nNamespaces", Emission::OmitEmpty),
    ("proxy", Emission::OmitEmpty),
    ("proxy.services", Emission::OmitEmpty),
    ("contentSecurityPolicy", Emission::OmitEmpty),
    ("telemetry", Emission::OmitEmpty),
    ("customization.developerCatalog", Emission::OmitEmpty),
    ("customization.developerCatalog.categories[].tags", Emission::OmitEmpty),
    ("customization.developerCatalog.categories[].subcategories", Emission::OmitEmpty),
    (
        "customization.developerCatalog.categories[].subcategories[].tags",
        Emission::OmitEmpty,
    ),
    ("customization.developerCatalog.types.state", Emission::OmitEmpty),
    ("customization.developerCatalog.types.enabled", Emission::OmitUnset),
    ("customization.developerCatalog.types.disabled", Emission::OmitUnset),
    ("customization.projectAccess", Emission::OmitEmpty),
    ("customization.projectAccess.availableClusterRoles", Emission::OmitEmpty),
    ("customization.quickStarts", Emission::OmitEmpty),
    ("customization.quickStarts.disabled", Emission::OmitEmpty),
    ("customization.addPage", Emission::OmitEmpty),
    ("customization.addPage.disabledActions", Emission::OmitEmpty),
    ("customization.perspectives", Emission::OmitEmpty),
    ("customization.perspectives[].visibility.accessReview", Emission::OmitUnset),
    (
        "customization.perspectives[].visibility.accessReview.required",
        Emission::OmitEmpty,
    ),
    (
        "customization.perspectives[].visibility.accessReview.missing",
        Emission::OmitEmpty,
    ),
    ("customization.perspectives[].pinnedResources", Emission::OmitUnset),
    ("customization.capabilities", Emission::OmitEmpty),
];

/// Returns the [`Emission`] of the field at `path`.
pub fn emission_for(path: &str) -> Emission {
    FIELD_EMISSION
        .iter()
        .find_map(|(field, emission)| (*field == path).then_some(*emission))
        .unwrap_or(Emission::Always)
}

/// Removes every field from `document` which must not be emitted according to
/// [`FIELD_EMISSION`].
///
/// Children are pruned before their parent is checked, so a mapping that only consisted of
/// omitted fields is itself omitted if its own rule allows that.
pub fn apply(document: &mut Value) {
    prune(document, "");
}

fn prune(value: &mut Value, path: &str) {
    match value {
        Value::Mapping(mapping) => prune_mapping(mapping, path),
        Value::Sequence(items) => {
            let item_path = format!("{path}[]");
            for item in items {
                prune(item, &item_path);
            }
        }
        Value::Tagged(tagged) => prune(&mut tagged.value, path),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

fn prune_mapping(mapping: &mut Mapping, path: &str) {
    mapping.retain(|key, child| {
        // Schema keys are strings, anything else is data of a free-form map
        let Some(key) = key.as_str() else {
            return true;
        };

        let child_path = if path.is_empty() {
            key.to_owned()
        } else {
            format!("{path}.{key}")
        };

        prune(child, &child_path);

        match emission_for(&child_path) {
            Emission::Always => true,
            Emission::OmitEmpty => !is_empty(child),
            Emission::OmitUnset => !child.is_null(),
        }
    });
}

/// Mirrors the zero-value semantics of the console's YAML decoder.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(value) => !value,
        Value::Number(number) => number.as_f64().is_some_and(|number| number == 0.0),
        Value::String(value) => value.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(mapping) => mapping.values().all(is_empty),
        Value::Tagged(tagged) => is_empty(&tagged.value),
    }
}
