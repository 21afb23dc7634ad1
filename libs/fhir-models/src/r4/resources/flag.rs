use crate::primitive::Primitive;
use crate::r4::codesystem::FlagStatus;
use crate::r4::datatypes::{CodeableConcept, Identifier, Period, Reference};

fhir_domain_resource! {
    /// Key information to flag to healthcare providers
    pub struct Flag: "Flag" {
        identifier: Vec<Identifier> = "identifier",
        /// active | inactive | entered-in-error
        status: Primitive<FlagStatus> = "status" [required],
        /// Clinical, administrative, etc.
        category: Vec<CodeableConcept> = "category",
        /// Coded or textual message to display to user
        code: CodeableConcept = "code" [required],
        /// Who/What is flag about?
        subject: Reference = "subject" [required],
        /// Time period when flag is active
        period: Option<Period> = "period",
        /// Alert relevant during encounter
        encounter: Option<Reference> = "encounter",
        /// Flag creator
        author: Option<Reference> = "author",
    }
}
