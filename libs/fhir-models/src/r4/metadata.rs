//! Metadata types used by knowledge artifacts and subscriptions

use crate::primitive::{Canonical, Code, FhirString, Id, Markdown, Primitive, Uri, Url};
use crate::r4::codesystem::RelatedArtifactType;
use crate::r4::datatypes::{
    Attachment, CodeableConcept, Coding, ContactPoint, Quantity, Range, Reference,
};

fhir_element! {
    /// Contact information
    pub struct ContactDetail {
        /// Name of an individual to contact
        name: Option<FhirString> = "name",
        /// Contact details for individual or organization
        telecom: Vec<ContactPoint> = "telecom",
    }
}

fhir_element! {
    /// Describes the context of use for a conformance or knowledge resource
    pub struct UsageContext {
        /// Type of context being specified
        code: Coding = "code" [required],
        /// Value that defines the context
        value: Option<UsageContextValue> = "value" [required choice],
    }
}

fhir_choice! {
    pub enum UsageContextValue {
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        Quantity(Quantity) = "Quantity",
        Range(Range) = "Range",
        Reference(Reference) = "Reference",
    }
}

fhir_element! {
    /// An expression that can be used to generate a value
    pub struct Expression {
        /// Natural language description of the condition
        description: Option<FhirString> = "description",
        /// Short name assigned to expression for reuse
        name: Option<Id> = "name",
        /// text/cql | text/fhirpath | application/x-fhir-query | etc.
        language: Code = "language" [required],
        /// Expression in specified language
        expression: Option<FhirString> = "expression",
        /// Where the expression is found
        reference: Option<Uri> = "reference",
    }
}

fhir_element! {
    /// Related artifacts for a knowledge resource
    pub struct RelatedArtifact {
        /// documentation | justification | citation | predecessor | successor | derived-from | depends-on | composed-of
        artifact_type: Primitive<RelatedArtifactType> = "type" [required],
        /// Short label
        label: Option<FhirString> = "label",
        /// Brief description of the related artifact
        display: Option<FhirString> = "display",
        /// Bibliographic citation for the artifact
        citation: Option<Markdown> = "citation",
        /// Where the artifact can be accessed
        url: Option<Url> = "url",
        /// What document is being referenced
        document: Option<Attachment> = "document",
        /// What resource is being referenced
        resource: Option<Canonical> = "resource",
    }
}
