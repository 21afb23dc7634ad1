use crate::primitive::Date;
use crate::r4::datatypes::{CodeableConcept, Identifier, Reference};

fhir_domain_resource! {
    /// Resource for non-supported content
    pub struct Basic: "Basic" {
        identifier: Vec<Identifier> = "identifier",
        /// Kind of Resource
        code: CodeableConcept = "code" [required],
        /// Identifies the focus of this resource
        subject: Option<Reference> = "subject",
        created: Option<Date> = "created",
        /// Who created
        author: Option<Reference> = "author",
    }
}
