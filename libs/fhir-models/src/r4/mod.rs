//! FHIR R4 models
//!
//! Data types, code systems and resources of FHIR R4 (4.0.1), together with
//! [`FhirR4Parser`] which maps them to and from FHIR JSON.

pub mod codesystem;
pub mod datatypes;
pub mod extension;
pub mod metadata;
pub mod parser;
pub mod resource;
pub mod resources;

pub use datatypes::*;
pub use extension::{Extension, ExtensionValue, Meta, Narrative};
pub use metadata::*;
pub use parser::FhirR4Parser;
pub use resource::{DomainResource, FhirResource, Resource, ResourceType};
pub use resources::*;

/// FHIR version implemented by this module.
pub const FHIR_VERSION: &str = "4.0.1";
