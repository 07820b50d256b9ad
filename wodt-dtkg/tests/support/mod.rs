//! Shared test harness for wodt-dtkg integration tests
//!
//! `LampSemantics` describes a smart lamp with two properties (luminosity,
//! illuminance), one relationship (isInRoom) and one action (switch).

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use wodt_dtkg::{
    ActionState, DigitalTwinSemantics, DtkgEngine, DtkgObserver, PropertyState,
    RelationshipInstance, Result,
};
use wodt_graph_ir::{BlankNode, Fact, Term};

pub const TWIN: &str = "http://example.com/dt";
pub const SAREF: &str = "https://saref.etsi.org/core/";
pub const BRICK: &str = "https://brickschema.org/schema/Brick#";

pub struct LampSemantics;

impl LampSemantics {
    fn property_value(key: &str, individual: &str, value: f64, unit: Option<&str>) -> Vec<Fact> {
        let mut node = BlankNode::new(format!("{key}Value"))
            .add_fact(Fact::term(format!("{SAREF}hasValue"), Term::double(value)));
        if let Some(unit) = unit {
            node = node.add_fact(Fact::iri(format!("{SAREF}isMeasuredIn"), unit));
        }
        node = node.add_fact(Fact::iri(format!("{SAREF}isValueOfProperty"), individual));
        vec![
            Fact::iri(format!("{SAREF}hasProperty"), individual),
            Fact::blank(format!("{SAREF}hasPropertyValue"), node),
        ]
    }
}

impl DigitalTwinSemantics for LampSemantics {
    fn digital_twin_types(&self) -> Vec<String> {
        vec![
            format!("{SAREF}Actuator"),
            "https://w3id.org/rec/Lamp".to_string(),
        ]
    }

    fn property_domain_tag(&self, property: &str) -> Option<String> {
        match property {
            "luminosity" => Some("https://purl.org/onto/LuminosityFlux".to_string()),
            "illuminance" => Some("https://purl.org/onto/Illuminance".to_string()),
            _ => None,
        }
    }

    fn relationship_domain_tag(&self, relationship: &str) -> Option<String> {
        (relationship == "isInRoom").then(|| format!("{BRICK}hasLocation"))
    }

    fn action_domain_tag(&self, action: &str) -> Option<String> {
        (action == "switch").then(|| "https://purl.org/onto/SwitchCommand".to_string())
    }

    fn map_property(&self, property: &PropertyState) -> Option<Vec<Fact>> {
        let value = property.value.as_f64()?;
        match property.key.as_str() {
            "luminosity" => Some(Self::property_value(
                "luminosity",
                "https://purl.org/onto/LuminosityFlux",
                value,
                Some("https://qudt.org/2.1/vocab/unit/LM"),
            )),
            "illuminance" => Some(Self::property_value(
                "illuminance",
                "https://purl.org/onto/Illuminance",
                value,
                None,
            )),
            _ => None,
        }
    }

    fn map_relationship(&self, relationship: &RelationshipInstance) -> Option<Vec<Fact>> {
        (relationship.relationship_name == "isInRoom").then(|| {
            vec![Fact::iri(
                format!("{BRICK}hasLocation"),
                &relationship.target_uri,
            )]
        })
    }

    fn prefixes(&self) -> Vec<(String, String)> {
        vec![
            ("saref".to_string(), SAREF.to_string()),
            ("brick".to_string(), BRICK.to_string()),
        ]
    }
}

pub fn properties() -> Vec<PropertyState> {
    vec![
        PropertyState::new("luminosity", 100_i64),
        PropertyState::new("illuminance", 50_i64),
    ]
}

pub fn modified_properties() -> Vec<PropertyState> {
    vec![
        PropertyState::new("luminosity", 0.20),
        PropertyState::new("illuminance", 0.10),
    ]
}

pub fn relationship() -> RelationshipInstance {
    RelationshipInstance::new(
        "isInRoom",
        "http://exampleRoomDT.it",
        "isInRoom-http://exampleRoomDT.it",
    )
}

pub fn modified_relationship() -> RelationshipInstance {
    RelationshipInstance::new(
        "isInRoom",
        "http://roomDT.it",
        "isInRoom-http://exampleRoomDT.it",
    )
}

pub fn switch_action() -> ActionState {
    ActionState::new("switch", "status.switch", "")
}

/// Engine populated with the full lamp state
pub fn lamp_engine() -> DtkgEngine {
    let engine = DtkgEngine::new(TWIN, Arc::new(LampSemantics));
    for property in properties() {
        engine.add_property(&property).expect("add property");
    }
    engine
        .add_relationship(&relationship())
        .expect("add relationship");
    engine.add_action(&switch_action()).expect("add action");
    engine
}

/// Canonical text of [`lamp_engine`]
pub const LAMP_DTKG: &str = r#"@prefix brick: <https://brickschema.org/schema/Brick#> .
@prefix saref: <https://saref.etsi.org/core/> .
@prefix wodt: <https://purl.org/wodt/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

<http://example.com/dt>
    brick:hasLocation <http://exampleRoomDT.it> ;
    wodt:availableActionId "switch" ;
    saref:hasProperty <https://purl.org/onto/Illuminance> , <https://purl.org/onto/LuminosityFlux> ;
    saref:hasPropertyValue [
        saref:hasValue "50.0"^^xsd:double ;
        saref:isValueOfProperty <https://purl.org/onto/Illuminance>
    ] , [
        saref:hasValue "100.0"^^xsd:double ;
        saref:isMeasuredIn <https://qudt.org/2.1/vocab/unit/LM> ;
        saref:isValueOfProperty <https://purl.org/onto/LuminosityFlux>
    ] .
"#;

/// Observer that records every notification it receives
#[derive(Default)]
pub struct Recorder {
    seen: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().clone()
    }
}

impl DtkgObserver for Recorder {
    fn name(&self) -> &str {
        "recorder"
    }

    fn notify_new_dtkg(&self, dtkg: &str) -> Result<()> {
        self.seen.lock().push(dtkg.to_string());
        Ok(())
    }
}
