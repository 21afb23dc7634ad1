//! R4 resources

mod account;
mod adverse_event;
mod allergy_intolerance;
mod basic;
mod bundle;
mod care_team;
mod condition;
mod document_reference;
mod flag;
mod goal;
mod medication;
mod medication_request;
mod medication_statement;
mod observation;
mod operation_outcome;
mod organization;
mod patient;
mod practitioner;
mod structure_map;
mod subscription;

pub use account::*;
pub use adverse_event::*;
pub use allergy_intolerance::*;
pub use basic::*;
pub use bundle::*;
pub use care_team::*;
pub use condition::*;
pub use document_reference::*;
pub use flag::*;
pub use goal::*;
pub use medication::*;
pub use medication_request::*;
pub use medication_statement::*;
pub use observation::*;
pub use operation_outcome::*;
pub use organization::*;
pub use patient::*;
pub use practitioner::*;
pub use structure_map::*;
pub use subscription::*;
