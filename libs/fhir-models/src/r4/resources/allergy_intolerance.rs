use crate::primitive::{DateTime, FhirString, Primitive};
use crate::r4::codesystem::{
    AllergyIntoleranceCategory, AllergyIntoleranceCriticality, AllergyIntoleranceSeverity,
    AllergyIntoleranceType,
};
use crate::r4::datatypes::{Age, Annotation, CodeableConcept, Identifier, Period, Range, Reference};

fhir_domain_resource! {
    /// Allergy or Intolerance (generally: Risk of adverse reaction to a substance)
    pub struct AllergyIntolerance: "AllergyIntolerance" {
        /// External ids for this item
        identifier: Vec<Identifier> = "identifier",
        /// active | inactive | resolved
        clinical_status: Option<CodeableConcept> = "clinicalStatus",
        /// unconfirmed | confirmed | refuted | entered-in-error
        verification_status: Option<CodeableConcept> = "verificationStatus",
        /// allergy | intolerance - Underlying mechanism (if known)
        allergy_type: Option<Primitive<AllergyIntoleranceType>> = "type",
        /// food | medication | environment | biologic
        category: Vec<Primitive<AllergyIntoleranceCategory>> = "category",
        /// low | high | unable-to-assess
        criticality: Option<Primitive<AllergyIntoleranceCriticality>> = "criticality",
        /// Code that identifies the allergy or intolerance
        code: Option<CodeableConcept> = "code",
        /// Who the sensitivity is for
        patient: Reference = "patient" [required],
        /// Encounter when the allergy or intolerance was asserted
        encounter: Option<Reference> = "encounter",
        /// When allergy or intolerance was identified
        onset: Option<AllergyIntoleranceOnset> = "onset" [choice],
        /// Date first version of the resource instance was recorded
        recorded_date: Option<DateTime> = "recordedDate",
        /// Who recorded the sensitivity
        recorder: Option<Reference> = "recorder",
        /// Source of the information about the allergy
        asserter: Option<Reference> = "asserter",
        /// Date(/time) of last known occurrence of a reaction
        last_occurrence: Option<DateTime> = "lastOccurrence",
        /// Additional text not captured in other fields
        note: Vec<Annotation> = "note",
        /// Adverse Reaction Events linked to exposure to substance
        reaction: Vec<AllergyIntoleranceReaction> = "reaction",
    }
}

fhir_choice! {
    pub enum AllergyIntoleranceOnset {
        DateTime(DateTime) = "DateTime",
        Age(Age) = "Age",
        Period(Period) = "Period",
        Range(Range) = "Range",
        String(FhirString) = "String",
    }
}

fhir_backbone! {
    /// Adverse Reaction Events linked to exposure to substance
    pub struct AllergyIntoleranceReaction {
        /// Specific substance or pharmaceutical product considered to be responsible for event
        substance: Option<CodeableConcept> = "substance",
        /// Clinical symptoms/signs associated with the Event
        manifestation: Vec<CodeableConcept> = "manifestation" [nonempty],
        /// Description of the event as a whole
        description: Option<FhirString> = "description",
        /// Date(/time) when manifestations showed
        onset: Option<DateTime> = "onset",
        /// mild | moderate | severe (of event as a whole)
        severity: Option<Primitive<AllergyIntoleranceSeverity>> = "severity",
        /// How the subject was exposed to the substance
        exposure_route: Option<CodeableConcept> = "exposureRoute",
        /// Text about event not captured in other fields
        note: Vec<Annotation> = "note",
    }
}
