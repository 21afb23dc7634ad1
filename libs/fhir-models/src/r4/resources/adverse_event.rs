use crate::primitive::{DateTime, FhirString, Primitive};
use crate::r4::codesystem::AdverseEventActuality;
use crate::r4::datatypes::{CodeableConcept, Identifier, Reference};

fhir_domain_resource! {
    /// Medical care, research study or other healthcare event causing physical injury
    pub struct AdverseEvent: "AdverseEvent" {
        /// Business identifier for the event
        identifier: Option<Identifier> = "identifier",
        /// actual | potential
        actuality: Primitive<AdverseEventActuality> = "actuality" [required],
        /// product-problem | product-quality | product-use-error | wrong-dose | incorrect-prescribing-information | wrong-technique | wrong-route-of-administration | wrong-rate | wrong-duration | wrong-time | expired-drug | medical-device-use-error | problem-different-manufacturer | unsafe-physical-environment
        category: Vec<CodeableConcept> = "category",
        /// Type of the event itself in relation to the subject
        event: Option<CodeableConcept> = "event",
        /// Subject impacted by event
        subject: Reference = "subject" [required],
        /// Encounter created as part of
        encounter: Option<Reference> = "encounter",
        /// When the event occurred
        date: Option<DateTime> = "date",
        /// When the event was detected
        detected: Option<DateTime> = "detected",
        /// When the event was recorded
        recorded_date: Option<DateTime> = "recordedDate",
        /// Effect on the subject due to this event
        resulting_condition: Vec<Reference> = "resultingCondition",
        /// Location where adverse event occurred
        location: Option<Reference> = "location",
        /// Seriousness of the event
        seriousness: Option<CodeableConcept> = "seriousness",
        /// mild | moderate | severe
        severity: Option<CodeableConcept> = "severity",
        /// resolved | recovering | ongoing | resolvedWithSequelae | fatal | unknown
        outcome: Option<CodeableConcept> = "outcome",
        /// Who recorded the adverse event
        recorder: Option<Reference> = "recorder",
        /// Who was involved in the adverse event or the potential adverse event
        contributor: Vec<Reference> = "contributor",
        /// The suspected agent causing the adverse event
        suspect_entity: Vec<AdverseEventSuspectEntity> = "suspectEntity",
        /// AdverseEvent.subjectMedicalHistory
        subject_medical_history: Vec<Reference> = "subjectMedicalHistory",
        /// AdverseEvent.referenceDocument
        reference_document: Vec<Reference> = "referenceDocument",
        /// AdverseEvent.study
        study: Vec<Reference> = "study",
    }
}

fhir_backbone! {
    /// The suspected agent causing the adverse event
    pub struct AdverseEventSuspectEntity {
        /// Refers to the specific entity that caused the adverse event
        instance: Reference = "instance" [required],
        /// Information on the possible cause of the event
        causality: Vec<AdverseEventSuspectEntityCausality> = "causality",
    }
}

fhir_backbone! {
    /// Information on the possible cause of the event
    pub struct AdverseEventSuspectEntityCausality {
        /// Assessment of if the entity caused the event
        assessment: Option<CodeableConcept> = "assessment",
        /// AdverseEvent.suspectEntity.causalityProductRelatedness
        product_relatedness: Option<FhirString> = "productRelatedness",
        /// AdverseEvent.suspectEntity.causalityAuthor
        author: Option<Reference> = "author",
        /// ProbabilityScale | Bayesian | Checklist
        method: Option<CodeableConcept> = "method",
    }
}
