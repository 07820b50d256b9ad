//! RDF Vocabulary Constants for the Web of Digital Twins
//!
//! This crate provides a centralized location for the vocabulary IRIs used
//! by the knowledge graph engine, the Turtle formatter and the descriptor
//! builder.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `wodt` - WoDT vocabulary (https://purl.org/wodt/)
//! - `saref` - SAREF core (https://saref.etsi.org/core/)
//! - `td` - W3C Web of Things Thing Description terms
//! - `prefixes` - Well-known prefix/namespace pairs for compact output

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:JSON IRI
    pub const JSON: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#JSON";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

/// WoDT vocabulary constants
///
/// Terms used to link a Digital Twin Knowledge Graph (DTKG) and its
/// Digital Twin Description (DTD) to the rest of the ecosystem.
pub mod wodt {
    /// WoDT namespace
    pub const NS: &str = "https://purl.org/wodt/";

    /// Predicate linking a DTD to its DTKG
    pub const DTKG: &str = "https://purl.org/wodt/dtkg";

    /// Predicate linking a DTKG to its DTD
    pub const DTD: &str = "https://purl.org/wodt/dtd";

    /// Domain tag used to semantically annotate DT model elements
    pub const DOMAIN_TAG: &str = "https://purl.org/wodt/domainTag";

    /// Link relation for platforms the twin is registered to
    pub const REGISTERED_TO_PLATFORM: &str = "https://purl.org/wodt/registeredToPlatform";

    /// Physical asset id carried by the DTD
    pub const PHYSICAL_ASSET_ID: &str = "https://purl.org/wodt/physicalAssetId";

    /// Marks whether an affordance is an augmented interaction
    pub const AUGMENTED_INTERACTION: &str = "https://purl.org/wodt/augmentedInteraction";

    /// Predicate for the ids of currently available actions
    pub const AVAILABLE_ACTION_ID: &str = "https://purl.org/wodt/availableActionId";

    /// Class of the aggregate "available actions" property
    pub const AVAILABLE_ACTIONS: &str = "https://purl.org/wodt/AvailableActions";
}

/// SAREF core terms used by declarative property mappings
pub mod saref {
    /// SAREF core namespace
    pub const NS: &str = "https://saref.etsi.org/core/";

    /// Links a feature of interest to one of its properties
    pub const HAS_PROPERTY: &str = "https://saref.etsi.org/core/hasProperty";

    /// Links a feature of interest to the node holding a property value
    pub const HAS_PROPERTY_VALUE: &str = "https://saref.etsi.org/core/hasPropertyValue";

    /// Literal value of a property value node
    pub const HAS_VALUE: &str = "https://saref.etsi.org/core/hasValue";

    /// Unit of measure of a property value node
    pub const IS_MEASURED_IN: &str = "https://saref.etsi.org/core/isMeasuredIn";

    /// Property a value node belongs to
    pub const IS_VALUE_OF_PROPERTY: &str = "https://saref.etsi.org/core/isValueOfProperty";
}

/// W3C Web of Things Thing Description terms
pub mod td {
    /// Thing Description 1.1 JSON-LD context
    pub const CONTEXT_V11: &str = "https://www.w3.org/2022/wot/td/v1.1";

    /// Thing Model the DTD conforms to
    pub const DTD_THING_MODEL: &str = "https://raw.githubusercontent.com/Web-of-Digital-Twins/\
dtd-conceptual-model/refs/heads/main/implementations/wot/dtd-thing-model.tm.jsonld";

    /// Media type of a Thing Model
    pub const THING_MODEL_MEDIA_TYPE: &str = "application/tm+json";

    /// Link relation pointing to the Thing Model
    pub const REL_TYPE: &str = "type";

    /// Model version advertised by the DTD
    pub const MODEL_VERSION: &str = "1.0.0";

    /// Name of the no-security scheme
    pub const NOSEC_SCHEME_NAME: &str = "nosec_sc";

    /// Root form operation for observing all properties
    pub const OP_OBSERVE_ALL_PROPERTIES: &str = "observeallproperties";

    /// Websocket subprotocol
    pub const SUBPROTOCOL_WEBSOCKET: &str = "websocket";
}

/// Well-known prefixes used when compacting IRIs for human-readable output
pub mod prefixes {
    /// `(prefix, namespace)` pairs registered by default
    pub const DEFAULTS: &[(&str, &str)] = &[
        ("rdf", super::rdf::NS),
        ("xsd", super::xsd::NS),
        ("wodt", super::wodt::NS),
    ];

    /// Prefix for SAREF core, registered by declarative semantics
    pub const SAREF: (&str, &str) = ("saref", super::saref::NS);
}
