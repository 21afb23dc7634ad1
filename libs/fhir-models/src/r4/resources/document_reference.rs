use crate::primitive::{FhirString, Instant, Primitive};
use crate::r4::codesystem::{CompositionStatus, DocumentReferenceStatus, DocumentRelationshipType};
use crate::r4::datatypes::{Attachment, CodeableConcept, Coding, Identifier, Period, Reference};

fhir_domain_resource! {
    /// A reference to a document
    pub struct DocumentReference: "DocumentReference" {
        /// Master Version Specific Identifier
        master_identifier: Option<Identifier> = "masterIdentifier",
        /// Other identifiers for the document
        identifier: Vec<Identifier> = "identifier",
        /// current | superseded | entered-in-error
        status: Primitive<DocumentReferenceStatus> = "status" [required],
        /// preliminary | final | amended | entered-in-error
        doc_status: Option<Primitive<CompositionStatus>> = "docStatus",
        /// Kind of document (LOINC if possible)
        document_type: Option<CodeableConcept> = "type",
        /// Categorization of document
        category: Vec<CodeableConcept> = "category",
        /// Who/what is the subject of the document
        subject: Option<Reference> = "subject",
        /// When this document reference was created
        date: Option<Instant> = "date",
        /// Who and/or what authored the document
        author: Vec<Reference> = "author",
        /// Who/what authenticated the document
        authenticator: Option<Reference> = "authenticator",
        /// Organization which maintains the document
        custodian: Option<Reference> = "custodian",
        /// Relationships to other documents
        relates_to: Vec<DocumentReferenceRelatesTo> = "relatesTo",
        /// Human-readable description
        description: Option<FhirString> = "description",
        /// Document security-tags
        security_label: Vec<CodeableConcept> = "securityLabel",
        /// Document referenced
        content: Vec<DocumentReferenceContent> = "content" [nonempty],
        /// Clinical context of document
        context: Option<DocumentReferenceContext> = "context",
    }
}

fhir_backbone! {
    /// Relationships to other documents
    pub struct DocumentReferenceRelatesTo {
        /// replaces | transforms | signs | appends
        code: Primitive<DocumentRelationshipType> = "code" [required],
        /// Target of the relationship
        target: Reference = "target" [required],
    }
}

fhir_backbone! {
    /// Document referenced
    pub struct DocumentReferenceContent {
        /// Where to access the document
        attachment: Attachment = "attachment" [required],
        /// Format/content rules for the document
        format: Option<Coding> = "format",
    }
}

fhir_backbone! {
    /// Clinical context of document
    pub struct DocumentReferenceContext {
        /// Context of the document content
        encounter: Vec<Reference> = "encounter",
        /// Main clinical acts documented
        event: Vec<CodeableConcept> = "event",
        /// Time of service that is being documented
        period: Option<Period> = "period",
        /// Kind of facility where patient was seen
        facility_type: Option<CodeableConcept> = "facilityType",
        /// Additional details about where the content was created (e.g. clinical specialty)
        practice_setting: Option<CodeableConcept> = "practiceSetting",
        /// Patient demographics from source
        source_patient_info: Option<Reference> = "sourcePatientInfo",
        /// Related identifiers or resources
        related: Vec<Reference> = "related",
    }
}
