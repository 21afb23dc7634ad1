//! FHIR R4 data models
//!
//! This crate provides strongly-typed Rust structures for FHIR R4 resources and a
//! lossless mapping between them and FHIR JSON.
//!
//! # Module Organization
//!
//! - `r4`: data types, code systems, resources and [`FhirR4Parser`](r4::FhirR4Parser)
//! - `primitive`: FHIR primitive types with their `id`/`extension` metadata
//! - `datetime`: XML Schema `date`, `dateTime` and `time` values with precision
//! - `json`: the mapping engine the model types are generated against
//! - `config`: strict and lenient parser behaviour
//!
//! # Design Philosophy
//!
//! - **Lossless**: `from_fhir(to_fhir(json))` is structurally equal to `json`,
//!   including `_name` metadata of primitives and decimal precision
//! - **Strongly-typed**: required bindings are enums, `name[x]` slots are enums
//! - **Strict by default**: unknown elements and codes are errors unless the parser
//!   is configured otherwise
//!
//! # Example
//!
//! ```rust
//! use cobalt_models::r4::{FhirR4Parser, MedicationStatement, MedicationStatementMedication};
//!
//! let json = r#"{
//!     "resourceType": "MedicationStatement",
//!     "status": "active",
//!     "medicationCodeableConcept": {"text": "Ibuprofen 200mg"},
//!     "subject": {"reference": "Patient/example"}
//! }"#;
//!
//! let parser = FhirR4Parser::new();
//! let statement: MedicationStatement = parser.to_fhir(json).unwrap();
//! match &statement.medication {
//!     Some(MedicationStatementMedication::CodeableConcept(cc)) => {
//!         assert_eq!(cc.text(), Some("Ibuprofen 200mg"));
//!     }
//!     other => panic!("unexpected medication {:?}", other),
//! }
//! ```

#[macro_use]
pub mod json;

pub mod config;
pub mod datetime;
pub mod error;
pub mod primitive;
pub mod r4;

pub use config::{Handling, ParserConfig, Preset};
pub use error::{Error, Result};
pub use r4::{FhirR4Parser, Resource, ResourceType};
