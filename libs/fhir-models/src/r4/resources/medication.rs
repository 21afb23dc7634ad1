use crate::primitive::{Boolean, DateTime, FhirString, Primitive};
use crate::r4::codesystem::MedicationStatusCodes;
use crate::r4::datatypes::{CodeableConcept, Identifier, Ratio, Reference};

fhir_domain_resource! {
    /// Definition of a Medication
    pub struct Medication: "Medication" {
        /// Business identifier for this medication
        identifier: Vec<Identifier> = "identifier",
        /// Codes that identify this medication
        code: Option<CodeableConcept> = "code",
        /// active | inactive | entered-in-error
        status: Option<Primitive<MedicationStatusCodes>> = "status",
        /// Manufacturer of the item
        manufacturer: Option<Reference> = "manufacturer",
        /// powder | tablets | capsule +
        form: Option<CodeableConcept> = "form",
        /// Amount of drug in package
        amount: Option<Ratio> = "amount",
        /// Active or inactive ingredient
        ingredient: Vec<MedicationIngredient> = "ingredient",
        /// Details about packaged medications
        batch: Option<MedicationBatch> = "batch",
    }
}

fhir_backbone! {
    /// Active or inactive ingredient
    pub struct MedicationIngredient {
        /// The actual ingredient or content
        item: Option<MedicationIngredientItem> = "item" [required choice],
        /// Active ingredient indicator
        is_active: Option<Boolean> = "isActive",
        /// Quantity of ingredient present
        strength: Option<Ratio> = "strength",
    }
}

fhir_choice! {
    pub enum MedicationIngredientItem {
        CodeableConcept(CodeableConcept) = "CodeableConcept",
        Reference(Reference) = "Reference",
    }
}

fhir_backbone! {
    /// Details about packaged medications
    pub struct MedicationBatch {
        /// Identifier assigned to batch
        lot_number: Option<FhirString> = "lotNumber",
        /// When batch will expire
        expiration_date: Option<DateTime> = "expirationDate",
    }
}
