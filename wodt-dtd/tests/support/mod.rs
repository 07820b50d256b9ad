//! Shared test harness for wodt-dtd integration tests

#![allow(dead_code)]

use std::sync::Arc;
use wodt_dtd::{DescriptorBuilder, DtVersion, PlatformRegistry, TwinMetadata};
use wodt_dtkg::{DigitalTwinSemantics, DtkgEngine, PropertyState, RelationshipInstance};
use wodt_graph_ir::{Fact, Term};

pub const TWIN: &str = "http://example.com/dt";

/// Lamp with tagged `luminosity`, `isInRoom` and `switch`; `color` maps to
/// facts but has no domain tag. `luminosity` is also tagged as a relationship
/// name, to exercise name clashes.
pub struct LampSemantics;

impl DigitalTwinSemantics for LampSemantics {
    fn digital_twin_types(&self) -> Vec<String> {
        vec!["https://w3id.org/rec/Lamp".to_string()]
    }

    fn property_domain_tag(&self, property: &str) -> Option<String> {
        (property == "luminosity").then(|| "https://purl.org/onto/LuminosityFlux".to_string())
    }

    fn relationship_domain_tag(&self, relationship: &str) -> Option<String> {
        match relationship {
            "isInRoom" => Some("https://brickschema.org/schema/Brick#hasLocation".to_string()),
            "luminosity" => Some("https://brickschema.org/schema/Brick#feeds".to_string()),
            _ => None,
        }
    }

    fn action_domain_tag(&self, action: &str) -> Option<String> {
        (action == "switch").then(|| "https://purl.org/onto/SwitchCommand".to_string())
    }

    fn map_property(&self, property: &PropertyState) -> Option<Vec<Fact>> {
        let predicate = match property.key.as_str() {
            "luminosity" => "https://saref.etsi.org/core/hasValue",
            "color" => "http://ex.org/color",
            _ => return None,
        };
        Some(vec![Fact::term(predicate, property.value.to_term()?)])
    }

    fn map_relationship(&self, relationship: &RelationshipInstance) -> Option<Vec<Fact>> {
        Some(vec![Fact::term(
            "https://brickschema.org/schema/Brick#hasLocation",
            Term::iri(&relationship.target_uri),
        )])
    }
}

pub struct Fixture {
    pub engine: Arc<DtkgEngine>,
    pub platforms: Arc<PlatformRegistry>,
    pub builder: DescriptorBuilder,
}

pub fn fixture() -> Fixture {
    let engine = Arc::new(DtkgEngine::new(TWIN, Arc::new(LampSemantics)));
    let platforms = Arc::new(PlatformRegistry::new());
    let metadata = TwinMetadata {
        twin_uri: TWIN.to_string(),
        version: DtVersion::new(1, 0, 0).expect("version"),
        physical_asset_id: "lampPA".to_string(),
    };
    let builder = DescriptorBuilder::new(metadata, Arc::clone(&engine), Arc::clone(&platforms));
    Fixture {
        engine,
        platforms,
        builder,
    }
}
