use crate::primitive::{DateTime, Primitive};
use crate::r4::codesystem::MedicationStatementStatusCodes;
use crate::r4::datatypes::{Annotation, CodeableConcept, Dosage, Identifier, Period, Reference};
use crate::r4::{DomainResource, Resource};

fhir_domain_resource! {
    /// Record of medication being taken by a patient
    pub struct MedicationStatement: "MedicationStatement" {
        /// External identifier
        identifier: Vec<Identifier> = "identifier",
        /// Fulfils plan, proposal or order
        based_on: Vec<Reference> = "basedOn",
        /// Part of referenced event
        part_of: Vec<Reference> = "partOf",
        /// active | completed | entered-in-error | intended | stopped | on-hold | unknown | not-taken
        status: Primitive<MedicationStatementStatusCodes> = "status" [required],
        /// Reason for current status
        status_reason: Vec<CodeableConcept> = "statusReason",
        /// Type of medication usage
        category: Option<CodeableConcept> = "category",
        /// What medication was taken
        medication: Option<MedicationStatementMedication> = "medication" [required choice],
        /// Who is/was taking the medication
        subject: Reference = "subject" [required],
        /// Encounter / Episode associated with MedicationStatement
        context: Option<Reference> = "context",
        /// The date/time or interval when the medication is/was/will be taken
        effective: Option<MedicationStatementEffective> = "effective" [choice],
        /// When the statement was asserted?
        date_asserted: Option<DateTime> = "dateAsserted",
        /// Person or organization that provided the information about the taking of this medication
        information_source: Option<Reference> = "informationSource",
        /// Additional supporting information
        derived_from: Vec<Reference> = "derivedFrom",
        /// Reason for why the medication is being/was taken
        reason_code: Vec<CodeableConcept> = "reasonCode",
        /// Condition or observation that supports why the medication is being/was taken
        reason_reference: Vec<Reference> = "reasonReference",
        /// Further information about the statement
        note: Vec<Annotation> = "note",
        /// Details of how medication is/was taken or should be taken
        dosage: Vec<Dosage> = "dosage",
    }
}

fhir_choice! {
    pub enum MedicationStatementMedication {
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        Reference(Reference) = "Reference",
    }
}

fhir_choice! {
    pub enum MedicationStatementEffective {
        DateTime(DateTime) = "DateTime",
        Period(Period) = "Period",
    }
}

impl MedicationStatement {
    /// The medication resource when `medicationReference` points at a contained one.
    pub fn contained_medication(&self) -> Option<&Resource> {
        match &self.medication {
            Some(MedicationStatementMedication::Reference(reference)) => {
                self.resolve_contained(reference.reference()?)
            }
            _ => None,
        }
    }
}
