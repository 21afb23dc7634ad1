use crate::primitive::{Boolean, DateTime, FhirString, Instant, Integer, Primitive, Time};
use crate::r4::codesystem::ObservationStatus;
use crate::r4::datatypes::{
    Annotation, CodeableConcept, Identifier, Period, Quantity, Range, Ratio, Reference,
    SampledData, SimpleQuantity, Timing,
};

fhir_domain_resource! {
    /// Measurements and simple assertions
    pub struct Observation: "Observation" {
        /// Business Identifier for observation
        identifier: Vec<Identifier> = "identifier",
        /// Fulfills plan, proposal or order
        based_on: Vec<Reference> = "basedOn",
        /// Part of referenced event
        part_of: Vec<Reference> = "partOf",
        /// registered | preliminary | final | amended +
        status: Primitive<ObservationStatus> = "status" [required],
        /// Classification of  type of observation
        category: Vec<CodeableConcept> = "category",
        /// Type of observation (code / type)
        code: CodeableConcept = "code" [required],
        /// Who and/or what the observation is about
        subject: Option<Reference> = "subject",
        /// What the observation is about, when it is not about the subject of record
        focus: Vec<Reference> = "focus",
        /// Healthcare event during which this observation is made
        encounter: Option<Reference> = "encounter",
        /// Clinically relevant time/time-period for observation
        effective: Option<ObservationEffective> = "effective" [choice],
        /// Date/Time this version was made available
        issued: Option<Instant> = "issued",
        /// Who is responsible for the observation
        performer: Vec<Reference> = "performer",
        /// Actual result
        value: Option<ObservationValue> = "value" [choice],
        /// Why the result is missing
        data_absent_reason: Option<CodeableConcept> = "dataAbsentReason",
        /// High, low, normal, etc.
        interpretation: Vec<CodeableConcept> = "interpretation",
        /// Comments about the observation
        note: Vec<Annotation> = "note",
        /// Observed body part
        body_site: Option<CodeableConcept> = "bodySite",
        /// How it was done
        method: Option<CodeableConcept> = "method",
        /// Specimen used for this observation
        specimen: Option<Reference> = "specimen",
        /// (Measurement) Device
        device: Option<Reference> = "device",
        /// Provides guide for interpretation
        reference_range: Vec<ObservationReferenceRange> = "referenceRange",
        /// Related resource that belongs to the Observation group
        has_member: Vec<Reference> = "hasMember",
        /// Related measurements the observation is made from
        derived_from: Vec<Reference> = "derivedFrom",
        /// Component results
        component: Vec<ObservationComponent> = "component",
    }
}

fhir_choice! {
    pub enum ObservationEffective {
        DateTime(DateTime) = "DateTime",
        Period(Period) = "Period",
        Timing(Box<Timing>) = "Timing",
        Instant(Instant) = "Instant",
    }
}

fhir_choice! {
    /// `Observation.value[x]`, also used by `Observation.component.value[x]`.
    pub enum ObservationValue {
        Quantity(Quantity) = "Quantity",
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        String(FhirString) = "String",
        Boolean(Boolean) = "Boolean",
        Integer(Integer) = "Integer",
        Range(Range) = "Range",
        Ratio(Ratio) = "Ratio",
        SampledData(Box<SampledData>) = "SampledData",
        Time(Time) = "Time",
        DateTime(DateTime) = "DateTime",
        Period(Period) = "Period",
    }
}

fhir_backbone! {
    /// Provides guide for interpretation
    pub struct ObservationReferenceRange {
        /// Low Range, if relevant
        low: Option<SimpleQuantity> = "low",
        /// High Range, if relevant
        high: Option<SimpleQuantity> = "high",
        /// Reference range qualifier
        range_type: Option<CodeableConcept> = "type",
        /// Reference range population
        applies_to: Vec<CodeableConcept> = "appliesTo",
        /// Applicable age range, if relevant
        age: Option<Range> = "age",
        /// Text based reference range in an observation
        text: Option<FhirString> = "text",
    }
}

fhir_backbone! {
    /// Component results
    pub struct ObservationComponent {
        /// Type of component observation (code / type)
        code: CodeableConcept = "code" [required],
        /// Actual component result
        value: Option<ObservationValue> = "value" [choice],
        /// Why the component result is missing
        data_absent_reason: Option<CodeableConcept> = "dataAbsentReason",
        /// High, low, normal, etc.
        interpretation: Vec<CodeableConcept> = "interpretation",
        /// Provides guide for interpretation of component result
        reference_range: Vec<ObservationReferenceRange> = "referenceRange",
    }
}

impl Observation {
    /// The first component with a coding of the given system and code.
    pub fn component_by_code(&self, system: &str, code: &str) -> Option<&ObservationComponent> {
        self.component.iter().find(|c| c.code.has_coding(system, code))
    }
}
