//! Digital Twin Description as a WoT Thing Description 1.1
//!
//! The descriptor is rebuilt from the engine registries and the platform
//! registry on every call, so it never lags behind the knowledge graph.
//!
//! Output shape (abridged):
//!
//! ```json
//! {
//!   "@context": "https://www.w3.org/2022/wot/td/v1.1",
//!   "id": "http://example.com/dt",
//!   "@type": ["https://w3id.org/rec/Lamp"],
//!   "version": { "instance": "1.0.0", "model": "1.0.0" },
//!   "https://purl.org/wodt/physicalAssetId": "lampPA",
//!   "securityDefinitions": { "nosec_sc": { "scheme": "nosec" } },
//!   "security": "nosec_sc",
//!   "properties": { "luminosity": { ... }, "availableActions": { ... } },
//!   "actions": { "switch": { ... } },
//!   "forms": [{ "href": "ws://example.com/dt/dtkg", ... }],
//!   "links": [ ... ]
//! }
//! ```

use crate::error::Result;
use crate::platform::PlatformRegistry;
use crate::uri::{uri_relative_resolve, websocket_uri};
use crate::version::DtVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use wodt_dtkg::DtkgEngine;
use wodt_vocab::{td, wodt};

/// Name of the aggregate property advertising the available actions
pub const AVAILABLE_ACTIONS_PROPERTY: &str = "availableActions";

/// Thing Description document
///
/// Vocabulary IRIs used as JSON keys are spelled out in the serde attributes;
/// `tests::test_vocabulary_keys` keeps them in sync with `wodt_vocab`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThingDescription {
    #[serde(rename = "@context")]
    pub context: String,
    pub id: String,
    #[serde(rename = "@type")]
    pub types: Vec<String>,
    pub version: VersionInfo,
    #[serde(rename = "https://purl.org/wodt/physicalAssetId")]
    pub physical_asset_id: String,
    #[serde(rename = "securityDefinitions")]
    pub security_definitions: BTreeMap<String, SecurityScheme>,
    pub security: String,
    pub properties: BTreeMap<String, PropertyAffordance>,
    pub actions: BTreeMap<String, ActionAffordance>,
    pub forms: Vec<RootForm>,
    pub links: Vec<Link>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub instance: String,
    pub model: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityScheme {
    pub scheme: String,
}

/// Read-only property (or relationship) entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAffordance {
    #[serde(rename = "@type", default, skip_serializing_if = "Option::is_none")]
    pub semantic_type: Option<String>,
    #[serde(
        rename = "https://purl.org/wodt/domainTag",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub domain_tag: Option<String>,
    #[serde(
        rename = "https://purl.org/wodt/augmentedInteraction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub augmented_interaction: Option<bool>,
    #[serde(rename = "readOnly")]
    pub read_only: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAffordance {
    #[serde(rename = "https://purl.org/wodt/domainTag")]
    pub domain_tag: String,
    #[serde(rename = "https://purl.org/wodt/augmentedInteraction")]
    pub augmented_interaction: bool,
    pub forms: Vec<Form>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub href: String,
}

/// Thing-level form for observing the live knowledge graph
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootForm {
    pub href: String,
    pub subprotocol: String,
    pub op: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl ThingDescription {
    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Links with the given relation
    pub fn links_with_rel<'a>(&'a self, rel: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.rel == rel)
    }
}

/// Static description of the twin
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwinMetadata {
    pub twin_uri: String,
    pub version: DtVersion,
    pub physical_asset_id: String,
}

/// Builds the Thing Description of a twin on demand
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    metadata: TwinMetadata,
    engine: Arc<DtkgEngine>,
    platforms: Arc<PlatformRegistry>,
}

impl DescriptorBuilder {
    pub fn new(
        metadata: TwinMetadata,
        engine: Arc<DtkgEngine>,
        platforms: Arc<PlatformRegistry>,
    ) -> Self {
        Self {
            metadata,
            engine,
            platforms,
        }
    }

    pub fn metadata(&self) -> &TwinMetadata {
        &self.metadata
    }

    /// Assemble the descriptor from the current registries
    ///
    /// Elements whose name has no domain tag are left out. Properties and
    /// relationships share the `properties` map; when both use a name, the
    /// relationship entry is the one kept.
    pub fn build(&self) -> Result<ThingDescription> {
        let twin_uri = &self.metadata.twin_uri;
        let semantics = self.engine.semantics();
        let snapshot = self.engine.registry_snapshot();

        let mut properties = BTreeMap::new();
        for name in &snapshot.properties {
            match semantics.property_domain_tag(name) {
                Some(tag) => {
                    properties.insert(name.clone(), read_only(tag, Some(false)));
                }
                None => tracing::debug!(property = %name, "no domain tag, omitted from DTD"),
            }
        }
        for name in &snapshot.relationships {
            match semantics.relationship_domain_tag(name) {
                Some(tag) => {
                    if properties.insert(name.clone(), read_only(tag, None)).is_some() {
                        tracing::debug!(
                            relationship = %name,
                            "relationship entry replaces property of the same name"
                        );
                    }
                }
                None => {
                    tracing::debug!(relationship = %name, "no domain tag, omitted from DTD")
                }
            }
        }

        let mut actions = BTreeMap::new();
        for name in &snapshot.actions {
            let Some(tag) = semantics.action_domain_tag(name) else {
                tracing::debug!(action = %name, "no domain tag, omitted from DTD");
                continue;
            };
            let href = uri_relative_resolve(twin_uri, &format!("/action/{name}"))?;
            actions.insert(
                name.clone(),
                ActionAffordance {
                    domain_tag: tag,
                    augmented_interaction: false,
                    forms: vec![Form { href }],
                },
            );
        }
        if !actions.is_empty() {
            properties.insert(
                AVAILABLE_ACTIONS_PROPERTY.to_string(),
                PropertyAffordance {
                    semantic_type: Some(wodt::AVAILABLE_ACTIONS.to_string()),
                    domain_tag: None,
                    augmented_interaction: None,
                    read_only: true,
                },
            );
        }

        let mut links: Vec<Link> = self
            .platforms
            .get_all()
            .into_iter()
            .map(|platform| Link {
                href: platform,
                rel: wodt::REGISTERED_TO_PLATFORM.to_string(),
                media_type: None,
            })
            .collect();
        links.push(Link {
            href: td::DTD_THING_MODEL.to_string(),
            rel: td::REL_TYPE.to_string(),
            media_type: Some(td::THING_MODEL_MEDIA_TYPE.to_string()),
        });
        links.push(Link {
            href: uri_relative_resolve(twin_uri, "/dtkg")?,
            rel: wodt::DTKG.to_string(),
            media_type: None,
        });

        let forms = vec![RootForm {
            href: uri_relative_resolve(&websocket_uri(twin_uri)?, "/dtkg")?,
            subprotocol: td::SUBPROTOCOL_WEBSOCKET.to_string(),
            op: td::OP_OBSERVE_ALL_PROPERTIES.to_string(),
        }];

        let security_definitions = BTreeMap::from([(
            td::NOSEC_SCHEME_NAME.to_string(),
            SecurityScheme {
                scheme: "nosec".to_string(),
            },
        )]);

        Ok(ThingDescription {
            context: td::CONTEXT_V11.to_string(),
            id: twin_uri.clone(),
            types: semantics.digital_twin_types(),
            version: VersionInfo {
                instance: self.metadata.version.to_string(),
                model: td::MODEL_VERSION.to_string(),
            },
            physical_asset_id: self.metadata.physical_asset_id.clone(),
            security_definitions,
            security: td::NOSEC_SCHEME_NAME.to_string(),
            properties,
            actions,
            forms,
            links,
        })
    }

    /// Build and serialize as pretty JSON
    pub fn build_json(&self) -> Result<String> {
        self.build()?.to_json_pretty()
    }
}

fn read_only(domain_tag: String, augmented_interaction: Option<bool>) -> PropertyAffordance {
    PropertyAffordance {
        semantic_type: None,
        domain_tag: Some(domain_tag),
        augmented_interaction,
        read_only: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vocabulary_keys() {
        let property = serde_json::to_value(PropertyAffordance {
            semantic_type: None,
            domain_tag: Some("tag".into()),
            augmented_interaction: Some(false),
            read_only: true,
        })
        .unwrap();
        assert_eq!(property[wodt::DOMAIN_TAG], json!("tag"));
        assert_eq!(property[wodt::AUGMENTED_INTERACTION], json!(false));

        let action = serde_json::to_value(ActionAffordance {
            domain_tag: "tag".into(),
            augmented_interaction: false,
            forms: vec![],
        })
        .unwrap();
        assert!(action.get(wodt::DOMAIN_TAG).is_some());
        assert!(action.get(wodt::AUGMENTED_INTERACTION).is_some());
    }

    #[test]
    fn test_relationship_entry_has_no_augmentation_flag() {
        let value = serde_json::to_value(read_only("tag".into(), None)).unwrap();
        assert_eq!(
            value,
            json!({ "https://purl.org/wodt/domainTag": "tag", "readOnly": true })
        );
    }

    #[test]
    fn test_link_type_field() {
        let link = Link {
            href: td::DTD_THING_MODEL.into(),
            rel: td::REL_TYPE.into(),
            media_type: Some(td::THING_MODEL_MEDIA_TYPE.into()),
        };
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["type"], json!("application/tm+json"));
    }
}
