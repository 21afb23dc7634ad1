use crate::primitive::{Boolean, Canonical, DateTime, Primitive, UnsignedInt, Uri};
use crate::r4::codesystem::{MedicationRequestIntent, MedicationrequestStatus, RequestPriority};
use crate::r4::datatypes::{
    Annotation, CodeableConcept, Dosage, Duration, Identifier, Period, Reference, SimpleQuantity,
};

fhir_domain_resource! {
    /// Ordering of medication for patient or group
    pub struct MedicationRequest: "MedicationRequest" {
        /// External ids for this request
        identifier: Vec<Identifier> = "identifier",
        /// active | on-hold | cancelled | completed | entered-in-error | stopped | draft | unknown
        status: Primitive<MedicationrequestStatus> = "status" [required],
        /// Reason for current status
        status_reason: Option<CodeableConcept> = "statusReason",
        /// proposal | plan | order | original-order | reflex-order | filler-order | instance-order | option
        intent: Primitive<MedicationRequestIntent> = "intent" [required],
        /// Type of medication usage
        category: Vec<CodeableConcept> = "category",
        /// routine | urgent | asap | stat
        priority: Option<Primitive<RequestPriority>> = "priority",
        /// True if request is prohibiting action
        do_not_perform: Option<Boolean> = "doNotPerform",
        /// Reported rather than primary record
        reported: Option<MedicationRequestReported> = "reported" [choice],
        /// Medication to be taken
        medication: Option<MedicationRequestMedication> = "medication" [required choice],
        /// Who or group medication request is for
        subject: Reference = "subject" [required],
        /// Encounter created as part of encounter/admission/stay
        encounter: Option<Reference> = "encounter",
        /// Information to support ordering of the medication
        supporting_information: Vec<Reference> = "supportingInformation",
        /// When request was initially authored
        authored_on: Option<DateTime> = "authoredOn",
        /// Who/What requested the Request
        requester: Option<Reference> = "requester",
        /// Intended performer of administration
        performer: Option<Reference> = "performer",
        /// Desired kind of performer of the medication administration
        performer_type: Option<CodeableConcept> = "performerType",
        /// Person who entered the request
        recorder: Option<Reference> = "recorder",
        /// Reason or indication for ordering or not ordering the medication
        reason_code: Vec<CodeableConcept> = "reasonCode",
        /// Condition or observation that supports why the prescription is being written
        reason_reference: Vec<Reference> = "reasonReference",
        /// Instantiates FHIR protocol or definition
        instantiates_canonical: Vec<Canonical> = "instantiatesCanonical",
        /// Instantiates external protocol or definition
        instantiates_uri: Vec<Uri> = "instantiatesUri",
        /// What request fulfills
        based_on: Vec<Reference> = "basedOn",
        /// Composite request this is part of
        group_identifier: Option<Identifier> = "groupIdentifier",
        /// Overall pattern of medication administration
        course_of_therapy_type: Option<CodeableConcept> = "courseOfTherapyType",
        /// Associated insurance coverage
        insurance: Vec<Reference> = "insurance",
        /// Information about the prescription
        note: Vec<Annotation> = "note",
        /// How the medication should be taken
        dosage_instruction: Vec<Dosage> = "dosageInstruction",
        /// Medication supply authorization
        dispense_request: Option<MedicationRequestDispenseRequest> = "dispenseRequest",
        /// Any restrictions on medication substitution
        substitution: Option<MedicationRequestSubstitution> = "substitution",
        /// An order/prescription that is being replaced
        prior_prescription: Option<Reference> = "priorPrescription",
        /// Clinical Issue with action
        detected_issue: Vec<Reference> = "detectedIssue",
        /// A list of events of interest in the lifecycle
        event_history: Vec<Reference> = "eventHistory",
    }
}

fhir_choice! {
    pub enum MedicationRequestReported {
        Boolean(Boolean) = "Boolean",
        Reference(Reference) = "Reference",
    }
}

fhir_choice! {
    pub enum MedicationRequestMedication {
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        Reference(Reference) = "Reference",
    }
}

fhir_backbone! {
    /// Medication supply authorization
    pub struct MedicationRequestDispenseRequest {
        /// First fill details
        initial_fill: Option<MedicationRequestDispenseRequestInitialFill> = "initialFill",
        /// Minimum period of time between dispenses
        dispense_interval: Option<Duration> = "dispenseInterval",
        /// Time period supply is authorized for
        validity_period: Option<Period> = "validityPeriod",
        /// Number of refills authorized
        number_of_repeats_allowed: Option<UnsignedInt> = "numberOfRepeatsAllowed",
        /// Amount of medication to supply per dispense
        quantity: Option<SimpleQuantity> = "quantity",
        /// Number of days supply per dispense
        expected_supply_duration: Option<Duration> = "expectedSupplyDuration",
        /// Intended dispenser
        performer: Option<Reference> = "performer",
    }
}

fhir_backbone! {
    /// First fill details
    pub struct MedicationRequestDispenseRequestInitialFill {
        /// First fill quantity
        quantity: Option<SimpleQuantity> = "quantity",
        /// First fill duration
        duration: Option<Duration> = "duration",
    }
}

fhir_backbone! {
    /// Any restrictions on medication substitution
    pub struct MedicationRequestSubstitution {
        /// Whether substitution is allowed or not
        allowed: Option<MedicationRequestSubstitutionAllowed> = "allowed" [required choice],
        /// Why should (not) substitution be made
        reason: Option<CodeableConcept> = "reason",
    }
}

fhir_choice! {
    pub enum MedicationRequestSubstitutionAllowed {
        Boolean(Boolean) = "Boolean",
        CodeableConcept(CodeableConcept) = "CodeableConcept",
    }
}
