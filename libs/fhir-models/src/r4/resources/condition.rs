use crate::primitive::{DateTime, FhirString};
use crate::r4::datatypes::{Age, Annotation, CodeableConcept, Identifier, Period, Range, Reference};

fhir_domain_resource! {
    /// Detailed information about conditions, problems or diagnoses
    pub struct Condition: "Condition" {
        /// External Ids for this condition
        identifier: Vec<Identifier> = "identifier",
        /// active | recurrence | relapse | inactive | remission | resolved
        clinical_status: Option<CodeableConcept> = "clinicalStatus",
        /// unconfirmed | provisional | differential | confirmed | refuted | entered-in-error
        verification_status: Option<CodeableConcept> = "verificationStatus",
        /// problem-list-item | encounter-diagnosis
        category: Vec<CodeableConcept> = "category",
        /// Subjective severity of condition
        severity: Option<CodeableConcept> = "severity",
        /// Identification of the condition, problem or diagnosis
        code: Option<CodeableConcept> = "code",
        /// Anatomical location, if relevant
        body_site: Vec<CodeableConcept> = "bodySite",
        /// Who has the condition?
        subject: Reference = "subject" [required],
        /// Encounter created as part of
        encounter: Option<Reference> = "encounter",
        /// Estimated or actual date, date-time, or age
        onset: Option<ConditionOnset> = "onset" [choice],
        /// When in resolution/remission
        abatement: Option<ConditionAbatement> = "abatement" [choice],
        /// Date record was first recorded
        recorded_date: Option<DateTime> = "recordedDate",
        /// Who recorded the condition
        recorder: Option<Reference> = "recorder",
        /// Person who asserts this condition
        asserter: Option<Reference> = "asserter",
        /// Stage/grade, usually assessed formally
        stage: Vec<ConditionStage> = "stage",
        /// Supporting evidence
        evidence: Vec<ConditionEvidence> = "evidence",
        /// Additional information about the Condition
        note: Vec<Annotation> = "note",
    }
}

fhir_choice! {
    pub enum ConditionOnset {
        DateTime(DateTime) = "DateTime",
        Age(Age) = "Age",
        Period(Period) = "Period",
        Range(Range) = "Range",
        String(FhirString) = "String",
    }
}

fhir_choice! {
    pub enum ConditionAbatement {
        DateTime(DateTime) = "DateTime",
        Age(Age) = "Age",
        Period(Period) = "Period",
        Range(Range) = "Range",
        String(FhirString) = "String",
    }
}

fhir_backbone! {
    /// Stage/grade, usually assessed formally
    pub struct ConditionStage {
        /// Simple summary (disease specific)
        summary: Option<CodeableConcept> = "summary",
        /// Formal record of assessment
        assessment: Vec<Reference> = "assessment",
        /// Kind of staging
        stage_type: Option<CodeableConcept> = "type",
    }
}

fhir_backbone! {
    /// Supporting evidence
    pub struct ConditionEvidence {
        /// Manifestation/symptom
        code: Vec<CodeableConcept> = "code",
        /// Supporting information found elsewhere
        detail: Vec<Reference> = "detail",
    }
}
